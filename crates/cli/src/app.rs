//! Process entry wiring: arguments in, exit code out.

use std::ffi::OsString;
use std::io::{BufRead, Write};

use crate::args;
use crate::session::Session;

/// Parse arguments, run the interactive session, and map the outcome to an
/// exit code: 0 on success (including end of input), 1 on runtime failure,
/// 2 on argument errors.
pub fn run<I, R, W, E>(args: I, input: &mut R, out: &mut W, err: &mut E) -> i32
where
    I: IntoIterator<Item = OsString>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let options = match args::parse_args(args) {
        Ok(options) => options,
        Err(message) => {
            let _ = writeln!(err, "error: {message}");
            let _ = args::write_usage(err);
            return 2;
        }
    };

    if options.show_help {
        if args::write_usage(out).is_err() {
            return 1;
        }
        return 0;
    }

    let mut session = Session::new(options.format);
    match session.run(input, out) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!(%error, "session aborted");
            let _ = writeln!(err, "error: {error:#}");
            1
        }
    }
}
