use crate::{
    hint_processor::{
        builtin_hint_processor::{
            dict_hint_utils::{
                default_dict_new, dict_new, dict_read, dict_squash_copy_dict,
                dict_squash_update_ptr, dict_update, dict_write,
            },
            dict_manager::DictManager,
            hint_code,
            scope_hint_utils::{enter_scope, exit_scope},
            usort::{
                usort_body, usort_enter_scope, verify_multiplicity_assert,
                verify_multiplicity_body, verify_usort,
            },
        },
        operand::ResOperand,
    },
    types::exec_scope::ExecutionScopes,
    vm::{errors::hint_errors::HintError, vm_core::VirtualMachine},
};

/// State shared by every hint of one run.
#[derive(Debug, Default)]
pub struct HintRunnerContext {
    pub exec_scopes: ExecutionScopes,
    pub dict_manager: DictManager,
}

impl HintRunnerContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A compiled hint: what to run, with its operands already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hint {
    UsortEnterScope,
    UsortBody {
        input: ResOperand,
        input_len: ResOperand,
        output_len: ResOperand,
        output: ResOperand,
        multiplicities: ResOperand,
    },
    UsortVerify {
        value: ResOperand,
    },
    UsortVerifyMultiplicityAssert,
    UsortVerifyMultiplicityBody {
        next_item_index: ResOperand,
    },
    DictNew,
    DefaultDictNew {
        default_value: ResOperand,
    },
    DictRead {
        dict_ptr: ResOperand,
        key: ResOperand,
        value: ResOperand,
    },
    DictWrite {
        dict_ptr: ResOperand,
        key: ResOperand,
        new_value: ResOperand,
    },
    DictUpdate {
        dict_ptr: ResOperand,
        key: ResOperand,
        prev_value: ResOperand,
        new_value: ResOperand,
    },
    DictSquashCopyDict {
        dict_accesses_end: ResOperand,
    },
    DictSquashUpdatePtr {
        squashed_dict_start: ResOperand,
        squashed_dict_end: ResOperand,
    },
    VMEnterScope,
    VMExitScope,
}

impl Hint {
    /// Identifier the hint is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Hint::UsortEnterScope => hint_code::USORT_ENTER_SCOPE,
            Hint::UsortBody { .. } => hint_code::USORT_BODY,
            Hint::UsortVerify { .. } => hint_code::USORT_VERIFY,
            Hint::UsortVerifyMultiplicityAssert => hint_code::USORT_VERIFY_MULTIPLICITY_ASSERT,
            Hint::UsortVerifyMultiplicityBody { .. } => hint_code::USORT_VERIFY_MULTIPLICITY_BODY,
            Hint::DictNew => hint_code::DICT_NEW,
            Hint::DefaultDictNew { .. } => hint_code::DEFAULT_DICT_NEW,
            Hint::DictRead { .. } => hint_code::DICT_READ,
            Hint::DictWrite { .. } => hint_code::DICT_WRITE,
            Hint::DictUpdate { .. } => hint_code::DICT_UPDATE,
            Hint::DictSquashCopyDict { .. } => hint_code::DICT_SQUASH_COPY_DICT,
            Hint::DictSquashUpdatePtr { .. } => hint_code::DICT_SQUASH_UPDATE_PTR,
            Hint::VMEnterScope => hint_code::VM_ENTER_SCOPE,
            Hint::VMExitScope => hint_code::VM_EXIT_SCOPE,
        }
    }

    // Runs a single Hint
    pub fn execute(
        &self,
        vm: &mut VirtualMachine,
        ctx: &mut HintRunnerContext,
    ) -> Result<(), HintError> {
        let HintRunnerContext {
            exec_scopes,
            dict_manager,
        } = ctx;
        match self {
            Hint::UsortEnterScope => usort_enter_scope(exec_scopes),
            Hint::UsortBody {
                input,
                input_len,
                output_len,
                output,
                multiplicities,
            } => usort_body(
                vm,
                exec_scopes,
                input,
                input_len,
                output_len,
                output,
                multiplicities,
            ),
            Hint::UsortVerify { value } => verify_usort(vm, exec_scopes, value),
            Hint::UsortVerifyMultiplicityAssert => verify_multiplicity_assert(exec_scopes),
            Hint::UsortVerifyMultiplicityBody { next_item_index } => {
                verify_multiplicity_body(vm, exec_scopes, next_item_index)
            }
            Hint::DictNew => dict_new(vm, exec_scopes, dict_manager),
            Hint::DefaultDictNew { default_value } => {
                default_dict_new(vm, dict_manager, default_value)
            }
            Hint::DictRead {
                dict_ptr,
                key,
                value,
            } => dict_read(vm, dict_manager, dict_ptr, key, value),
            Hint::DictWrite {
                dict_ptr,
                key,
                new_value,
            } => dict_write(vm, dict_manager, dict_ptr, key, new_value),
            Hint::DictUpdate {
                dict_ptr,
                key,
                prev_value,
                new_value,
            } => dict_update(vm, dict_manager, dict_ptr, key, prev_value, new_value),
            Hint::DictSquashCopyDict { dict_accesses_end } => {
                dict_squash_copy_dict(vm, exec_scopes, dict_manager, dict_accesses_end)
            }
            Hint::DictSquashUpdatePtr {
                squashed_dict_start,
                squashed_dict_end,
            } => dict_squash_update_ptr(vm, dict_manager, squashed_dict_start, squashed_dict_end),
            Hint::VMEnterScope => enter_scope(exec_scopes),
            Hint::VMExitScope => exit_scope(exec_scopes),
        }
    }
}
