use crate::clock::Clock;
use chrono::NaiveDateTime;
use std::io::{self, Write};
use tracing::debug;

const LABEL: &str = "Current Date and Time: ";
const MOMENT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders `moment` as `YYYY-MM-DD hh:mm:ss`, 24-hour, zero-padded.
pub fn format_moment(moment: &NaiveDateTime) -> String {
    moment.format(MOMENT_FORMAT).to_string()
}

/// Returns the full output line, terminator included.
pub fn render_line(moment: &NaiveDateTime) -> String {
    format!("{LABEL}{}\n", format_moment(moment))
}

pub fn emit<W>(out: &mut W, moment: &NaiveDateTime) -> io::Result<()>
where
    W: Write,
{
    out.write_all(render_line(moment).as_bytes())?;
    out.flush()
}

/// Captures the current moment from `clock` and writes it to `out`.
pub fn run<C, W>(clock: &C, out: &mut W) -> io::Result<()>
where
    C: Clock,
    W: Write,
{
    let moment = clock.now();
    debug!("captured moment {moment}");
    emit(out, &moment)
}
