use crate::clock::Clock;
use chrono::{Local, NaiveDateTime};

/// Reads the host wall clock, expressed in the host's local zone.
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
