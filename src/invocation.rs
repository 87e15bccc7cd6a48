//! Invocation classifier
//!
//! Decides whether the wrapped command is a compile invocation (one source
//! file to one object, eligible for the transform pipeline) or anything else
//! (forwarded verbatim, e.g. a link step). A `-c` with no recognizable source
//! file right after it, or without an `-o`, is a caller bug and aborts the
//! wrapper rather than guessing.

use std::path::{Path, PathBuf};

use crate::argv::{tokenize, Arg};
use crate::error::{WrapError, WrapResult};

/// Source file extensions eligible for the transform pipeline.
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "cpp", "cc", "cxx"];

/// Classification of one wrapped command line.
#[derive(Debug)]
pub enum Invocation {
    /// Single-source compile; runs the transform pipeline.
    Compile(CompileRequest),
    /// Everything else; forwarded verbatim.
    PassThrough,
}

/// Parsed compile invocation. Lives for one wrapper run, never persisted.
#[derive(Debug, Clone)]
pub struct CompileRequest {
    /// The real compiler executable (argv[0] of the wrapped command).
    pub compiler: String,
    /// Typed records of everything after the compiler, in original order.
    pub args: Vec<Arg>,
    /// The source file named right after `-c`.
    pub source: PathBuf,
    /// The object output path the caller asked for.
    pub output: PathBuf,
    /// Dependency file to patch after compilation, if requested.
    pub dep_file: Option<PathBuf>,
}

impl CompileRequest {
    /// Rebuild the compiler command with the source replaced.
    ///
    /// Every other record re-renders in canonical spelling, so the output
    /// path is exactly the one the caller specified.
    pub fn compiler_command(&self, source_override: &Path) -> Vec<String> {
        let mut command = vec![self.compiler.clone()];
        for arg in &self.args {
            match arg {
                Arg::Source(_) => command.push(source_override.to_string_lossy().into_owned()),
                other => other.render(&mut command),
            }
        }
        command
    }
}

/// Classify a full wrapped command (compiler executable plus its arguments).
pub fn classify(command: &[String]) -> WrapResult<Invocation> {
    let (compiler, rest) = command.split_first().ok_or(WrapError::EmptyCommand)?;

    // Pass-through commands are forwarded without any further inspection,
    // so the raw vector is scanned before tokenizing.
    if !rest.iter().any(|token| token == "-c") {
        return Ok(Invocation::PassThrough);
    }

    let mut args = tokenize(rest)?;
    let Some(compile_pos) = args.iter().position(|a| matches!(a, Arg::Compile)) else {
        // "-c" was the value of a preceding flag, not a flag itself.
        return Ok(Invocation::PassThrough);
    };

    let source = match args.get(compile_pos + 1) {
        Some(Arg::Other(token)) if is_source_file(token) => PathBuf::from(token),
        Some(record) => {
            return Err(WrapError::UnrecognizedSource {
                found: record.head(),
            })
        }
        None => return Err(WrapError::DanglingCompileFlag),
    };
    args[compile_pos + 1] = Arg::Source(source.to_string_lossy().into_owned());

    let output = args
        .iter()
        .find_map(|a| match a {
            Arg::Output(path) => Some(PathBuf::from(path)),
            _ => None,
        })
        .ok_or(WrapError::MissingOutput)?;

    let dep_file = args.iter().find_map(|a| match a {
        Arg::DepFile(path) => Some(PathBuf::from(path)),
        _ => None,
    });

    Ok(Invocation::Compile(CompileRequest {
        compiler: compiler.clone(),
        args,
        source,
        output,
        dep_file,
    }))
}

fn is_source_file(token: &str) -> bool {
    Path::new(token)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
