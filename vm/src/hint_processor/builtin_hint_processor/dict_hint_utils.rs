use std::collections::HashMap;

use crate::{
    hint_processor::{
        hint_processor_utils::{
            insert_value_into_ap, insert_value_into_operand, res_operand_get_maybe,
        },
        operand::ResOperand,
    },
    types::{
        exec_scope::{ExecutionScopes, ScopeValue},
        relocatable::MaybeRelocatable,
    },
    utils::offset_within_segment,
    vm::{errors::hint_errors::HintError, vm_core::VirtualMachine},
    Felt252,
};

use super::dict_manager::DictManager;

//DictAccess struct has three memebers, so the size of DictAccess* is 3
pub const DICT_ACCESS_SIZE: usize = 3;

/*Implements hint:
   if '__dict_manager' not in globals():
           from starkware.cairo.common.dict import DictManager
           __dict_manager = DictManager()
       memory[ap] = __dict_manager.new_dict(segments, initial_dict)
       del initial_dict
*/
pub fn dict_new(
    vm: &mut VirtualMachine,
    exec_scopes: &mut ExecutionScopes,
    dict_manager: &mut DictManager,
) -> Result<(), HintError> {
    //Get initial dictionary from scope (defined by an earlier hint)
    let initial_dict = match exec_scopes.get::<HashMap<Felt252, MaybeRelocatable>>("initial_dict")
    {
        Ok(initial_dict) => initial_dict,
        Err(HintError::VariableNotInScopeError(_)) => return Err(HintError::NoInitialDict),
        Err(err) => return Err(err),
    };
    let base = dict_manager.new_dict(vm, initial_dict)?;
    insert_value_into_ap(vm, base)?;
    exec_scopes.delete_variable("initial_dict");
    Ok(())
}

/*Implements hint:
   if '__dict_manager' not in globals():
            from starkware.cairo.common.dict import DictManager
            __dict_manager = DictManager()
        memory[ap] = __dict_manager.new_default_dict(segments, ids.default_value)
*/
pub fn default_dict_new(
    vm: &mut VirtualMachine,
    dict_manager: &mut DictManager,
    default_value: &ResOperand,
) -> Result<(), HintError> {
    let default_value = res_operand_get_maybe(vm, default_value)?;
    let base = dict_manager.new_default_dict(vm, &default_value)?;
    insert_value_into_ap(vm, base)
}

/* Implements hint:
   dict_tracker = __dict_manager.get_tracker(ids.dict_ptr)
   dict_tracker.current_ptr += ids.DictAccess.SIZE
   ids.value = dict_tracker.data[ids.key]
*/
pub fn dict_read(
    vm: &mut VirtualMachine,
    dict_manager: &mut DictManager,
    dict_ptr: &ResOperand,
    key: &ResOperand,
    value: &ResOperand,
) -> Result<(), HintError> {
    let dict_ptr = dict_ptr.resolve_as_relocatable(vm)?;
    let key = key.resolve_as_felt(vm)?;
    let current_value = dict_manager.get_value(dict_ptr, &key)?.clone();
    dict_manager.increment_free_offset(dict_ptr, DICT_ACCESS_SIZE)?;
    insert_value_into_operand(vm, value, current_value)
}

/* Implements hint:
    dict_tracker = __dict_manager.get_tracker(ids.dict_ptr)
    dict_tracker.current_ptr += ids.DictAccess.SIZE
    ids.dict_ptr.prev_value = dict_tracker.data[ids.key]
    dict_tracker.data[ids.key] = ids.new_value
*/
pub fn dict_write(
    vm: &mut VirtualMachine,
    dict_manager: &mut DictManager,
    dict_ptr: &ResOperand,
    key: &ResOperand,
    new_value: &ResOperand,
) -> Result<(), HintError> {
    let dict_ptr = dict_ptr.resolve_as_relocatable(vm)?;
    let key = key.resolve_as_felt(vm)?;
    let new_value = res_operand_get_maybe(vm, new_value)?;
    //dict_ptr is a pointer to a struct, with the ordered fields (key, prev_value, new_value),
    //dict_ptr.prev_value will be equal to dict_ptr + 1
    let dict_ptr_prev_value = (dict_ptr + 1_usize)?;
    let prev_value = dict_manager.get_value(dict_ptr, &key)?.clone();
    dict_manager.insert_value(dict_ptr, key, new_value)?;
    dict_manager.increment_free_offset(dict_ptr, DICT_ACCESS_SIZE)?;
    vm.insert_value(dict_ptr_prev_value, prev_value)?;
    Ok(())
}

/* Implements hint:
    # Verify dict pointer and prev value.
        dict_tracker = __dict_manager.get_tracker(ids.dict_ptr)
        current_value = dict_tracker.data[ids.key]
        assert current_value == ids.prev_value, \
            f'Wrong previous value in dict. Got {ids.prev_value}, expected {current_value}.'

        # Update value.
        dict_tracker.data[ids.key] = ids.new_value
        dict_tracker.current_ptr += ids.DictAccess.SIZE
*/
pub fn dict_update(
    vm: &mut VirtualMachine,
    dict_manager: &mut DictManager,
    dict_ptr: &ResOperand,
    key: &ResOperand,
    prev_value: &ResOperand,
    new_value: &ResOperand,
) -> Result<(), HintError> {
    let dict_ptr = dict_ptr.resolve_as_relocatable(vm)?;
    let key = key.resolve_as_felt(vm)?;
    let prev_value = res_operand_get_maybe(vm, prev_value)?;
    let new_value = res_operand_get_maybe(vm, new_value)?;
    //Check that prev_value is equal to the current value at the given key
    let current_value = dict_manager.get_value(dict_ptr, &key)?;
    if current_value != &prev_value {
        return Err(HintError::WrongPrevValue(Box::new((
            prev_value,
            current_value.clone(),
            key,
        ))));
    }
    dict_manager.insert_value(dict_ptr, key, new_value)?;
    dict_manager.increment_free_offset(dict_ptr, DICT_ACCESS_SIZE)
}

/* Implements hint:
   # Prepare arguments for dict_new. In particular, the same dictionary values should be copied
   # to the new (squashed) dictionary.
   vm_enter_scope({
       # Make __dict_manager accessible.
       '__dict_manager': __dict_manager,
       # Create a copy of the dict, in case it changes in the future.
       'initial_dict': dict(__dict_manager.get_dict(ids.dict_accesses_end)),
   })
*/
pub fn dict_squash_copy_dict(
    vm: &mut VirtualMachine,
    exec_scopes: &mut ExecutionScopes,
    dict_manager: &DictManager,
    dict_accesses_end: &ResOperand,
) -> Result<(), HintError> {
    let dict_accesses_end = dict_accesses_end.resolve_as_relocatable(vm)?;
    let dict_copy = dict_manager.get_dict_copy(dict_accesses_end)?;
    exec_scopes.enter_scope(HashMap::from([(
        String::from("initial_dict"),
        ScopeValue::DictData(dict_copy.data().clone()),
    )]));
    Ok(())
}

/* Implements Hint:
    # Update the DictTracker's current_ptr to point to the end of the squashed dict.
    __dict_manager.get_tracker(ids.squashed_dict_start).current_ptr = \
    ids.squashed_dict_end.address_
*/
pub fn dict_squash_update_ptr(
    vm: &mut VirtualMachine,
    dict_manager: &mut DictManager,
    squashed_dict_start: &ResOperand,
    squashed_dict_end: &ResOperand,
) -> Result<(), HintError> {
    let squashed_dict_start = squashed_dict_start.resolve_as_relocatable(vm)?;
    let squashed_dict_end = squashed_dict_end.resolve_as_relocatable(vm)?;
    let free_offset = offset_within_segment(squashed_dict_start, squashed_dict_end)?;
    dict_manager.set_free_offset(squashed_dict_start, free_offset)
}
