pub mod generate;

use std::ffi::OsString;

use crate::cli::Invocation;
use crate::error::ScaffoldError;
use crate::{logger, printer};

/// Runs one invocation from a full argument list (program name first).
///
/// The logger is installed with whatever verbosity is known at the point
/// the run ends, so a rejected argument list is reported at the tier that
/// was set before the offending argument.
pub fn run<I, T>(args: I) -> Result<(), ScaffoldError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let config = match Invocation::parse_from(args) {
        Ok(Invocation::Help) => {
            printer::print_help();
            return Ok(());
        }
        Ok(Invocation::Scaffold(config)) => config,
        Err(e) => {
            logger::init(e.verbosity);
            return Err(e.into());
        }
    };

    logger::init(config.verbosity);
    generate::generate(&config)?;
    Ok(())
}
