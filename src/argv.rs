//! Typed compiler argument tokenizer
//!
//! The wrapped command line is walked left to right exactly once and folded
//! into a sequence of typed flag records. Flags that take a value exist in two
//! spellings - attached (`-Ifoo`) and space-separated (`-I foo`) - and both
//! tokenize to the same record, so downstream code never does index
//! arithmetic over the raw vector. Unrecognized tokens are preserved verbatim
//! and in order as [`Arg::Other`].

use crate::error::{WrapError, WrapResult};

/// One typed record of the wrapped compiler command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// `-c` - compile a single source file to an object
    Compile,
    /// `-o <path>` - requested output location
    Output(String),
    /// `-I<dir>` / `-I <dir>` - user include search path
    Include(String),
    /// `-isystem <dir>` - system include search path
    SystemInclude(String),
    /// `-D<name[=value]>` - macro definition
    Define(String),
    /// `-U<name>` - macro undefinition
    Undefine(String),
    /// `-MF<path>` / `-MF <path>` - dependency file output location
    DepFile(String),
    /// The single source file of a compile invocation.
    ///
    /// Never produced by [`tokenize`]; the classifier promotes the
    /// [`Arg::Other`] record that follows [`Arg::Compile`].
    Source(String),
    /// Any token the wrapper does not interpret, forwarded untouched.
    Other(String),
}

impl Arg {
    /// Re-emit this record in canonical compiler spelling.
    pub fn render(&self, out: &mut Vec<String>) {
        match self {
            Arg::Compile => out.push("-c".to_string()),
            Arg::Output(path) => {
                out.push("-o".to_string());
                out.push(path.clone());
            }
            Arg::Include(dir) => out.push(format!("-I{dir}")),
            Arg::SystemInclude(dir) => {
                out.push("-isystem".to_string());
                out.push(dir.clone());
            }
            Arg::Define(def) => out.push(format!("-D{def}")),
            Arg::Undefine(name) => out.push(format!("-U{name}")),
            Arg::DepFile(path) => {
                out.push("-MF".to_string());
                out.push(path.clone());
            }
            Arg::Source(path) | Arg::Other(path) => out.push(path.clone()),
        }
    }

    /// First token of the canonical spelling, for diagnostics.
    pub fn head(&self) -> String {
        let mut tokens = Vec::new();
        self.render(&mut tokens);
        tokens.swap_remove(0)
    }
}

/// Tokenize a compiler argument vector into typed records.
///
/// Fails only when a value-taking flag is the last token.
pub fn tokenize(args: &[String]) -> WrapResult<Vec<Arg>> {
    let mut records = Vec::with_capacity(args.len());
    let mut it = args.iter();

    while let Some(token) = it.next() {
        let record = match token.as_str() {
            "-c" => Arg::Compile,
            "-o" => Arg::Output(value(&mut it, "-o")?),
            "-I" => Arg::Include(value(&mut it, "-I")?),
            "-isystem" => Arg::SystemInclude(value(&mut it, "-isystem")?),
            "-D" => Arg::Define(value(&mut it, "-D")?),
            "-U" => Arg::Undefine(value(&mut it, "-U")?),
            "-MF" => Arg::DepFile(value(&mut it, "-MF")?),
            tok => {
                if let Some(path) = attached(tok, "-isystem") {
                    Arg::SystemInclude(path.to_string())
                } else if let Some(path) = attached(tok, "-MF") {
                    Arg::DepFile(path.to_string())
                } else if let Some(dir) = attached(tok, "-I") {
                    Arg::Include(dir.to_string())
                } else if let Some(def) = attached(tok, "-D") {
                    Arg::Define(def.to_string())
                } else if let Some(name) = attached(tok, "-U") {
                    Arg::Undefine(name.to_string())
                } else {
                    Arg::Other(tok.to_string())
                }
            }
        };
        records.push(record);
    }

    Ok(records)
}

fn value<'a, I>(it: &mut I, flag: &str) -> WrapResult<String>
where
    I: Iterator<Item = &'a String>,
{
    it.next().cloned().ok_or_else(|| WrapError::MissingValue {
        flag: flag.to_string(),
    })
}

fn attached<'a>(token: &'a str, flag: &str) -> Option<&'a str> {
    token.strip_prefix(flag).filter(|rest| !rest.is_empty())
}
