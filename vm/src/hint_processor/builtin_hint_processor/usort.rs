use std::collections::HashMap;

use crate::{
    hint_processor::{hint_processor_utils::insert_value_into_operand, operand::ResOperand},
    types::exec_scope::{ExecutionScopes, ScopeValue, ScopeVariable},
    utils::felt_to_u64,
    vm::{errors::hint_errors::HintError, vm_core::VirtualMachine},
    Felt252,
};

pub const USORT_MAX_SIZE: &str = "__usort_max_size";

//  Implements hint:
//  %{ vm_enter_scope(dict(__usort_max_size = globals().get('__usort_max_size'))) %}
pub fn usort_enter_scope(exec_scopes: &mut ExecutionScopes) -> Result<(), HintError> {
    let usort_max_size = exec_scopes.get_any_ref(USORT_MAX_SIZE)?.clone();
    exec_scopes.enter_scope(HashMap::from([(USORT_MAX_SIZE.to_string(), usort_max_size)]));
    Ok(())
}

// The bound may be stored as a felt or as an unsigned integer. None when no bound is set.
fn usort_max_size(exec_scopes: &ExecutionScopes) -> Result<Option<u64>, HintError> {
    match exec_scopes.get_any_ref(USORT_MAX_SIZE) {
        Ok(ScopeValue::Felt(max_size)) => felt_to_u64(max_size).map(Some),
        Ok(ScopeValue::UInt(max_size)) => Ok(Some(*max_size)),
        Ok(_) => Err(HintError::ScopeTypeMismatch(Box::new((
            USORT_MAX_SIZE.to_string(),
            <Felt252 as ScopeVariable>::KIND,
        )))),
        Err(HintError::VariableNotInScopeError(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/*
Implements hint:
%{
    from collections import defaultdict

    input_ptr = ids.input
    input_len = int(ids.input_len)
    if __usort_max_size is not None:
        assert input_len <= __usort_max_size, (
            f"usort() can only be used with input_len<={__usort_max_size}. "
            f"Got: input_len={input_len}."
        )

    positions_dict = defaultdict(list)
    for i in range(input_len):
        val = memory[input_ptr + i]
        positions_dict[val].append(i)

    output = sorted(positions_dict.keys())
    ids.output_len = len(output)
    ids.output = segments.gen_arg(output)
    ids.multiplicities = segments.gen_arg([len(positions_dict[k]) for k in output])
%}
*/
pub fn usort_body(
    vm: &mut VirtualMachine,
    exec_scopes: &mut ExecutionScopes,
    input: &ResOperand,
    input_len: &ResOperand,
    output_len: &ResOperand,
    output: &ResOperand,
    multiplicities: &ResOperand,
) -> Result<(), HintError> {
    let input_ptr = input.resolve_as_relocatable(vm)?;
    let input_len = input_len.resolve_as_felt(vm)?;
    let input_len_u64 = felt_to_u64(&input_len)?;

    if let Some(max_size) = usort_max_size(exec_scopes)? {
        if input_len_u64 > max_size {
            return Err(HintError::UsortOutOfRange(Box::new((
                max_size,
                input_len,
            ))));
        }
    }

    let mut positions_dict: HashMap<Felt252, Vec<u64>> = HashMap::new();
    let mut sorted: Vec<Felt252> = Vec::new();
    for i in 0..input_len_u64 {
        let val = vm.get_integer((input_ptr + i as usize)?)?;
        if let Err(output_index) = sorted.binary_search(&val) {
            sorted.insert(output_index, val);
        }
        positions_dict.entry(val).or_default().push(i);
    }

    let multiplicities_values: Vec<Felt252> = sorted
        .iter()
        .map(|k| Felt252::from(positions_dict[k].len()))
        .collect();
    exec_scopes.insert_value("positions_dict", positions_dict);

    let output_base = vm.add_memory_segment();
    let multiplicities_base = vm.add_memory_segment();
    let sorted_len = sorted.len();

    for (i, sorted_element) in sorted.into_iter().enumerate() {
        vm.insert_value((output_base + i)?, sorted_element)?;
    }
    for (i, repetition_amount) in multiplicities_values.into_iter().enumerate() {
        vm.insert_value((multiplicities_base + i)?, repetition_amount)?;
    }

    insert_value_into_operand(vm, output_len, Felt252::from(sorted_len))?;
    insert_value_into_operand(vm, output, output_base)?;
    insert_value_into_operand(vm, multiplicities, multiplicities_base)
}

/*
Implements hint:
%{
    last_pos = 0
    positions = positions_dict[ids.value][::-1]
%}
*/
pub fn verify_usort(
    vm: &mut VirtualMachine,
    exec_scopes: &mut ExecutionScopes,
    value: &ResOperand,
) -> Result<(), HintError> {
    let value = value.resolve_as_felt(vm)?;
    let mut positions = exec_scopes
        .get_ref::<HashMap<Felt252, Vec<u64>>>("positions_dict")?
        .get(&value)
        .cloned()
        .unwrap_or_default();
    positions.reverse();
    exec_scopes.assign_variables([
        ("positions".to_string(), ScopeValue::U64List(positions)),
        ("last_pos".to_string(), ScopeValue::Felt(Felt252::ZERO)),
    ]);
    Ok(())
}

//  Implements hint:
//  %{ assert len(positions) == 0 %}
pub fn verify_multiplicity_assert(exec_scopes: &mut ExecutionScopes) -> Result<(), HintError> {
    let positions_len = exec_scopes.get_list_ref::<u64>("positions")?.len();
    if positions_len == 0 {
        Ok(())
    } else {
        Err(HintError::AssertionFailed(
            "len(positions) == 0".to_string().into_boxed_str(),
        ))
    }
}

/*
Implements hint:
%{
    current_pos = positions.pop()
    ids.next_item_index = current_pos - last_pos
    last_pos = current_pos + 1
%}
*/
pub fn verify_multiplicity_body(
    vm: &mut VirtualMachine,
    exec_scopes: &mut ExecutionScopes,
    next_item_index: &ResOperand,
) -> Result<(), HintError> {
    let last_pos = exec_scopes.get::<Felt252>("last_pos")?;
    let current_pos = exec_scopes
        .get_mut_list_ref::<u64>("positions")?
        .pop()
        .ok_or(HintError::CouldntPopPositions)?;
    let current_pos = Felt252::from(current_pos);
    let pos_diff = current_pos - last_pos;
    insert_value_into_operand(vm, next_item_index, pos_diff)?;
    exec_scopes.insert_value("last_pos", current_pos + Felt252::ONE);
    Ok(())
}
