//! Stable identifiers under which each hint is registered.
//!
//! A compiled program refers to its hints by these names; see
//! [`compile_hint`](super::builtin_hint_processor_definition::compile_hint).

pub const USORT_ENTER_SCOPE: &str = "UsortEnterScope";
pub const USORT_BODY: &str = "UsortBody";
pub const USORT_VERIFY: &str = "UsortVerify";
pub const USORT_VERIFY_MULTIPLICITY_ASSERT: &str = "UsortVerifyMultiplicityAssert";
pub const USORT_VERIFY_MULTIPLICITY_BODY: &str = "UsortVerifyMultiplicityBody";

pub const DICT_NEW: &str = "DictNew";
pub const DEFAULT_DICT_NEW: &str = "DefaultDictNew";
pub const DICT_READ: &str = "DictRead";
pub const DICT_WRITE: &str = "DictWrite";
pub const DICT_UPDATE: &str = "DictUpdate";
pub const DICT_SQUASH_COPY_DICT: &str = "DictSquashCopyDict";
pub const DICT_SQUASH_UPDATE_PTR: &str = "DictSquashUpdatePtr";

pub const VM_ENTER_SCOPE: &str = "VMEnterScope";
pub const VM_EXIT_SCOPE: &str = "VMExitScope";
