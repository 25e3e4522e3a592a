// The `(*.0).0` syntax of thiserror falsely triggers this clippy warning
#![allow(clippy::explicit_auto_deref)]

use thiserror::Error;

use crate::vm::errors::hint_errors::HintError;

#[derive(Debug, Error)]
pub enum VirtualMachineError {
    #[error("Failed to compile hint {}: {}", (*.0).0, (*.0).1)]
    CompileHintFail(Box<(String, HintError)>),
    #[error("Got an exception while executing hint {}: {}", (*.0).0, (*.0).1)]
    Hint(Box<(String, HintError)>),
    #[error("Failed to read hint runner configuration: {0}")]
    InvalidConfig(Box<str>),
}
