use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::output::errors::EmitError;
use crate::template::TemplateKind;

/// Creates or truncates `path` and writes the template body into it.
pub fn write_template(path: &Path, kind: TemplateKind) -> Result<(), EmitError> {
    let mut file = File::create(path).map_err(|source| EmitError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(kind.body().as_bytes())?;
    file.flush()?;
    Ok(())
}
