// The `(*.0).0` syntax of thiserror falsely triggers this clippy warning
#![allow(clippy::explicit_auto_deref)]

use thiserror::Error;

use crate::{
    types::{
        errors::math_errors::MathError,
        relocatable::{MaybeRelocatable, Relocatable},
    },
    Felt252,
};

use super::{exec_scope_errors::ExecScopeError, memory_errors::MemoryError};

// For more info on #[error] syntax, see https://docs.rs/thiserror/latest/thiserror/#details
#[derive(Debug, Error)]
pub enum HintError {
    #[error(transparent)]
    FromScopeError(#[from] ExecScopeError),
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("Unknown hint: {0}")]
    UnknownHint(Box<str>),
    #[error("Unknown identifier {0}")]
    UnknownIdentifier(Box<str>),
    #[error("Operand {0} has no memory address")]
    OperandNotAddressable(Box<str>),
    #[error("Operand {0} does not resolve to a Relocatable value")]
    OperandNotRelocatable(Box<str>),
    #[error("Variable {0} not present in current execution scope")]
    VariableNotInScopeError(Box<str>),
    #[error("Scope variable {} is not of the expected kind {}", (*.0).0, (*.0).1)]
    ScopeTypeMismatch(Box<(String, &'static str)>),
    #[error("DictManagerError: Tried to create tracker for a dictionary on segment: {0} when there is already a tracker for a dictionary on this segment")]
    CantCreateDictionaryOnTakenSegment(isize),
    #[error("Dict Error: No dictionary found for segment {0}")]
    UnknownDictionary(isize),
    #[error("Dict Error: No value found for key: {0}")]
    NoValueForKey(Box<Felt252>),
    #[error("Dict Error: Tried to create a dict without an initial dict")]
    NoInitialDict,
    #[error("Dict Error: Got the wrong value for dict_update, expected value: {}, got: {} for key: {}", (*.0).0, (*.0).1, (*.0).2)]
    WrongPrevValue(Box<(MaybeRelocatable, MaybeRelocatable, Felt252)>),
    #[error("Dict Error: squashed dict end {} is not on the dictionary segment {}", (*.0).0, (*.0).1)]
    SquashedDictOutOfSegment(Box<(Relocatable, Relocatable)>),
    #[error("Couldn't convert {0} to u64")]
    BigintToU64Fail(Box<Felt252>),
    #[error("usort() can only be used with input_len<={}. Got: input_len={}.", (*.0).0, (*.0).1)]
    UsortOutOfRange(Box<(u64, Felt252)>),
    #[error("unexpected verify multiplicity fail: couldn't pop positions")]
    CouldntPopPositions,
    #[error("{0}")]
    AssertionFailed(Box<str>),
}
