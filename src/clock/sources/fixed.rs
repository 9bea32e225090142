use crate::clock::Clock;
use chrono::NaiveDateTime;

#[derive(Copy, Clone, Debug)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(moment: NaiveDateTime) -> Self {
        FixedClock(moment)
    }

    /// Pins the clock to `s`, given as `YYYY-MM-DDTHH:MM:SS[.fff]`.
    pub fn at(s: &str) -> Self {
        FixedClock::new(s.parse().expect("valid ISO 8601 local date-time"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
