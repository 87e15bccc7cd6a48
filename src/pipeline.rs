//! Pipeline runner
//!
//! Executes the wrapped build step: pass-through invocations are forwarded as
//! a single subprocess, compile invocations run the transformer and then the
//! real compiler in strict sequence. The exit code of the first failing stage
//! is the wrapper's exit code; the compiler never runs after a transformer
//! failure, since the intermediate file may be partial or stale. All
//! subprocesses inherit the wrapper's stdio so tool diagnostics reach the
//! build system unchanged.

use std::process::{Command, Stdio};

use crate::config::Config;
use crate::depfile;
use crate::error::{WrapError, WrapResult};
use crate::invocation::{classify, CompileRequest, Invocation};
use crate::transcode::{intermediate_path, transformer_args};

/// Orchestrates one wrapped build step.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the wrapped command and return the exit code to report.
    ///
    /// `command` is the full compiler command line: executable first, then
    /// its arguments.
    pub fn run(&self, command: &[String]) -> WrapResult<i32> {
        match classify(command)? {
            Invocation::PassThrough => self.exec("linker", command),
            Invocation::Compile(req) => self.run_compile(&req),
        }
    }

    fn run_compile(&self, req: &CompileRequest) -> WrapResult<i32> {
        let compile_input = if self.config.disable_transform {
            req.source.clone()
        } else {
            let intermediate = intermediate_path(&req.source);
            let mut command = vec![self.config.transformer.clone()];
            command.extend(transformer_args(req, &intermediate));
            let code = self.exec("cake", &command)?;
            if code != 0 {
                return Ok(code);
            }
            intermediate
        };

        let command = req.compiler_command(&compile_input);
        let code = self.exec("compiler", &command)?;
        if code != 0 {
            return Ok(code);
        }

        if let Some(dep_file) = &req.dep_file {
            if compile_input != req.source {
                depfile::patch(dep_file, &compile_input, &req.source)?;
            }
        }

        Ok(code)
    }

    /// Run one stage to completion and return its exit code.
    ///
    /// A stage killed by a signal has no exit code and reports as 1.
    fn exec(&self, stage: &str, command: &[String]) -> WrapResult<i32> {
        let (program, args) = command.split_first().ok_or(WrapError::EmptyCommand)?;
        if self.config.debug {
            eprintln!("Running {stage}: '{}'", shell_join(command));
        }
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| WrapError::Spawn {
                program: program.clone(),
                source,
            })?;
        Ok(status.code().unwrap_or(1))
    }
}

/// Render a command for debug tracing, quoting tokens that need it.
pub fn shell_join(command: &[String]) -> String {
    command
        .iter()
        .map(|token| {
            if !token.is_empty() && !token.contains(|c: char| c.is_whitespace() || c == '\'') {
                token.clone()
            } else {
                format!("'{}'", token.replace('\'', r"'\''"))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
