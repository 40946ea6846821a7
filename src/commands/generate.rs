use std::path::{Path, PathBuf};

use crate::cli::Configuration;
use crate::error::ScaffoldError;
use crate::output::{self, errors::EmitError};
use crate::printer::describe;

fn generate_with<F>(config: &Configuration, emit: F) -> Result<PathBuf, ScaffoldError>
where
    F: FnOnce(&Configuration) -> Result<PathBuf, EmitError>,
{
    log::debug!("{}", describe(config));
    let file_path = emit(config)?;
    log::info!(
        "Created file: {} with template: {}",
        file_path.display(),
        config.template_kind.long_name()
    );
    Ok(file_path)
}

/// Writes the configured template into the process working directory.
pub fn generate(config: &Configuration) -> Result<PathBuf, ScaffoldError> {
    generate_with(config, output::emit)
}

pub fn generate_in(base: &Path, config: &Configuration) -> Result<PathBuf, ScaffoldError> {
    generate_with(config, |config| output::emit_in(base, config))
}
