//! Dependency-file patching
//!
//! The compiler writes its `-MF` file against the intermediate source it was
//! actually given, but incremental builds key on the path the build system
//! knows about. After a successful compile every occurrence of the
//! intermediate path is rewritten to the original source path, in place.

use std::fs;
use std::path::Path;

use crate::error::WrapResult;

/// Rewrite `dep_file` so it references `source` instead of `intermediate`.
///
/// Not every compile requests dependency output, so a missing file is
/// skipped silently.
pub fn patch(dep_file: &Path, intermediate: &Path, source: &Path) -> WrapResult<()> {
    if !dep_file.exists() {
        return Ok(());
    }
    let text = fs::read_to_string(dep_file)?;
    let intermediate = intermediate.to_string_lossy();
    let source = source.to_string_lossy();
    fs::write(dep_file, text.replace(intermediate.as_ref(), source.as_ref()))?;
    Ok(())
}
