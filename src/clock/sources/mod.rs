mod system;
#[cfg(test)]
mod fixed;

pub use system::SystemClock;
#[cfg(test)]
pub use fixed::FixedClock;
