//! Argument transcoder
//!
//! Derives the transformer's argument vector from a parsed compile
//! invocation. Include paths and macro definitions carry over so cake
//! resolves headers the same way the real compiler would; everything the
//! transformer does not understand stays behind. The compiler's implicit
//! `/usr/include` is dropped because cake's builtin toolchain profile already
//! declares it and a second copy triggers duplicate-declaration errors.

use std::env;
use std::path::{Path, PathBuf};

use crate::argv::Arg;
use crate::invocation::CompileRequest;

/// The compiler's implicit default system include root.
pub const DEFAULT_SYSTEM_INCLUDE: &str = "/usr/include";

/// Fixed defaults appended to every transformer invocation: the target
/// toolchain profile and cake's test mode.
pub const TRANSFORMER_DEFAULTS: &[&str] = &["-target=x86_x64_gcc", "-test-mode"];

/// Suffix of the intermediate transformed source, distinct from any input
/// name so it can never collide with the caller's artifacts.
const INTERMEDIATE_SUFFIX: &str = ".cake.c";

/// Path of the intermediate transformed source for `source`, under the
/// system temp directory.
///
/// The name derives only from the source base name; two concurrent builds of
/// same-named files in different directories share it. Cleanup is left to the
/// operating system.
pub fn intermediate_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "source".to_string());
    env::temp_dir().join(format!("{stem}{INTERMEDIATE_SUFFIX}"))
}

/// Build the transformer argument vector (without the executable itself).
///
/// Shape: `<source> [-I... -D... -U...] <defaults> -o <intermediate>`.
/// The dependency-file flag is deliberately absent; it is recorded on the
/// request and handled after compilation.
pub fn transformer_args(req: &CompileRequest, intermediate: &Path) -> Vec<String> {
    let mut args = vec![req.source.to_string_lossy().into_owned()];

    for arg in &req.args {
        match arg {
            Arg::Include(dir) | Arg::SystemInclude(dir) => {
                if !is_default_system_include(dir) {
                    args.push(format!("-I{dir}"));
                }
            }
            Arg::Define(def) => args.push(format!("-D{def}")),
            Arg::Undefine(name) => args.push(format!("-U{name}")),
            _ => {}
        }
    }

    args.extend(TRANSFORMER_DEFAULTS.iter().map(|s| s.to_string()));
    args.push("-o".to_string());
    args.push(intermediate.to_string_lossy().into_owned());
    args
}

/// True when `dir` normalizes to the compiler's implicit system include root.
fn is_default_system_include(dir: &str) -> bool {
    let absolute =
        std::path::absolute(Path::new(dir)).unwrap_or_else(|_| PathBuf::from(dir));
    absolute == Path::new(DEFAULT_SYSTEM_INCLUDE)
}
