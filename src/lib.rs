//! Cakewrap - compiler wrapper for the cake source-to-source transformer
//!
//! Cakewrap is invoked in place of the real C compiler (for example
//! `CC="cakewrap gcc"`). Compile invocations are split into two stages: the
//! source file is first rewritten by cake into a temporary intermediate file,
//! then the real compiler is run against that intermediate while the output
//! lands at exactly the path the build system asked for. Link and other
//! non-compile invocations are forwarded verbatim.

pub mod argv;
pub mod config;
pub mod depfile;
pub mod error;
pub mod invocation;
pub mod pipeline;
pub mod transcode;

// Re-exports for convenience
pub use argv::{tokenize, Arg};
pub use config::Config;
pub use error::{WrapError, WrapResult};
pub use invocation::{classify, CompileRequest, Invocation};
pub use pipeline::Pipeline;
pub use transcode::{intermediate_path, transformer_args};
