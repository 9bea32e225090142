mod clock;
mod stamp;

use clap::Parser;
use clock::sources::SystemClock;
use std::{ffi::OsString, io};
use tracing::{trace, Level};

#[derive(Parser)]
#[command(
    author,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Accepted and ignored
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    ignored: Vec<OsString>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let args = Args::parse();
    trace!("ignoring {} argument(s)", args.ignored.len());

    stamp::run(&SystemClock, &mut io::stdout().lock())
}
