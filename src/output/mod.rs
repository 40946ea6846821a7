pub mod errors;

use std::path::{Path, PathBuf};

use crate::cli::Configuration;
use crate::writer::write_template;
use errors::EmitError;

/// `base / destination_directory / file_name`, joined without
/// normalisation. An absolute component replaces everything before it.
pub fn resolve_path(base: &Path, config: &Configuration) -> PathBuf {
    base.join(&config.destination_directory).join(&config.file_name)
}

fn check_file_name(config: &Configuration) -> Result<(), EmitError> {
    if config.file_name.is_empty() {
        return Err(EmitError::EmptyFileName);
    }
    Ok(())
}

fn write_resolved(base: &Path, config: &Configuration) -> Result<PathBuf, EmitError> {
    let file_path = resolve_path(base, config);
    log::trace!("file_path: {}", file_path.display());

    write_template(&file_path, config.template_kind)?;
    Ok(file_path)
}

/// Writes the configured template relative to `base` and returns the path
/// that was written.
pub fn emit_in(base: &Path, config: &Configuration) -> Result<PathBuf, EmitError> {
    check_file_name(config)?;
    write_resolved(base, config)
}

/// Same as [`emit_in`], relative to the process working directory. The
/// file name is checked before the working directory is looked up.
pub fn emit(config: &Configuration) -> Result<PathBuf, EmitError> {
    check_file_name(config)?;

    let cwd = std::env::current_dir()?;
    log::trace!("cwd: {}", cwd.display());

    write_resolved(&cwd, config)
}
