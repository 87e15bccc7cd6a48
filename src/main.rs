//! Cakewrap CLI - compiler wrapper for the cake source-to-source transformer
//!
//! Usage: cakewrap <compiler> [compiler args...]
//!
//! Drop-in replacement for the real compiler, e.g. `CC="cakewrap gcc"`.
//! Compile steps run cake before the compiler; link steps pass through.
//!
//! Environment:
//!   CAKE                       transformer executable (default: cake)
//!   DEBUG_CAKE_WRAPPER         trace every derived command on stderr
//!   CAKE_WRAPPER_DISABLE_CAKE  skip the transformer stage

use std::env;
use std::process::ExitCode;

use anyhow::Result;

use cakewrap::{Config, Pipeline};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("cakewrap: error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let command: Vec<String> = env::args().skip(1).collect();
    let pipeline = Pipeline::new(Config::from_env());
    let code = pipeline.run(&command)?;
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}
