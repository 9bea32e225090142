pub mod sources;

use chrono::NaiveDateTime;

pub trait Clock {
    /// Returns the current wall-clock moment in the local time zone.
    fn now(&self) -> NaiveDateTime;
}
