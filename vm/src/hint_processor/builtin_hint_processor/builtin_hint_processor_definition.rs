use crate::{
    hint_processor::{
        builtin_hint_processor::hint_code,
        hint_processor_definition::Hint,
        operand::OperandResolver,
    },
    vm::errors::hint_errors::HintError,
};

/// Builds the [`Hint`] registered under `hint_code`, resolving each of its operands through
/// `resolver`.
///
/// Resolution happens once per program point; the returned hint is replayed on every visit.
pub fn compile_hint<R: OperandResolver + ?Sized>(
    hint_code: &str,
    resolver: &R,
) -> Result<Hint, HintError> {
    let hint = match hint_code {
        hint_code::USORT_ENTER_SCOPE => Hint::UsortEnterScope,
        hint_code::USORT_BODY => Hint::UsortBody {
            input: resolver.get_res_operand("input")?,
            input_len: resolver.get_res_operand("input_len")?,
            output_len: resolver.get_res_operand("output_len")?,
            output: resolver.get_res_operand("output")?,
            multiplicities: resolver.get_res_operand("multiplicities")?,
        },
        hint_code::USORT_VERIFY => Hint::UsortVerify {
            value: resolver.get_res_operand("value")?,
        },
        hint_code::USORT_VERIFY_MULTIPLICITY_ASSERT => Hint::UsortVerifyMultiplicityAssert,
        hint_code::USORT_VERIFY_MULTIPLICITY_BODY => Hint::UsortVerifyMultiplicityBody {
            next_item_index: resolver.get_res_operand("next_item_index")?,
        },
        hint_code::DICT_NEW => Hint::DictNew,
        hint_code::DEFAULT_DICT_NEW => Hint::DefaultDictNew {
            default_value: resolver.get_res_operand("default_value")?,
        },
        hint_code::DICT_READ => Hint::DictRead {
            dict_ptr: resolver.get_res_operand("dict_ptr")?,
            key: resolver.get_res_operand("key")?,
            value: resolver.get_res_operand("value")?,
        },
        hint_code::DICT_WRITE => Hint::DictWrite {
            dict_ptr: resolver.get_res_operand("dict_ptr")?,
            key: resolver.get_res_operand("key")?,
            new_value: resolver.get_res_operand("new_value")?,
        },
        hint_code::DICT_UPDATE => Hint::DictUpdate {
            dict_ptr: resolver.get_res_operand("dict_ptr")?,
            key: resolver.get_res_operand("key")?,
            prev_value: resolver.get_res_operand("prev_value")?,
            new_value: resolver.get_res_operand("new_value")?,
        },
        hint_code::DICT_SQUASH_COPY_DICT => Hint::DictSquashCopyDict {
            dict_accesses_end: resolver.get_res_operand("dict_accesses_end")?,
        },
        hint_code::DICT_SQUASH_UPDATE_PTR => Hint::DictSquashUpdatePtr {
            squashed_dict_start: resolver.get_res_operand("squashed_dict_start")?,
            squashed_dict_end: resolver.get_res_operand("squashed_dict_end")?,
        },
        hint_code::VM_ENTER_SCOPE => Hint::VMEnterScope,
        hint_code::VM_EXIT_SCOPE => Hint::VMExitScope,
        code => return Err(HintError::UnknownHint(code.to_string().into_boxed_str())),
    };
    Ok(hint)
}
