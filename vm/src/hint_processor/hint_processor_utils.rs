use crate::{
    hint_processor::operand::{
        BinOpOperand, CellRef, DerefOrImmediate, Operation, Register, ResOperand,
    },
    types::{
        errors::math_errors::MathError,
        relocatable::{MaybeRelocatable, Relocatable},
    },
    vm::{
        errors::{hint_errors::HintError, memory_errors::MemoryError},
        vm_core::VirtualMachine,
    },
    Felt252,
};

pub(crate) fn cell_ref_to_relocatable(
    cell_ref: &CellRef,
    vm: &VirtualMachine,
) -> Result<Relocatable, MathError> {
    let base = match cell_ref.register {
        Register::AP => vm.get_ap(),
        Register::FP => vm.get_fp(),
    };
    base + (cell_ref.offset as i32)
}

pub(crate) fn get_cell_val(vm: &VirtualMachine, cell: &CellRef) -> Result<Felt252, HintError> {
    Ok(vm.get_integer(cell_ref_to_relocatable(cell, vm)?)?)
}

pub(crate) fn get_ptr(
    vm: &VirtualMachine,
    cell: &CellRef,
    offset: &Felt252,
) -> Result<Relocatable, HintError> {
    Ok((vm.get_relocatable(cell_ref_to_relocatable(cell, vm)?)? + offset)?)
}

pub(crate) fn get_double_deref_val(
    vm: &VirtualMachine,
    cell: &CellRef,
    offset: &Felt252,
) -> Result<Felt252, HintError> {
    Ok(vm.get_integer(get_ptr(vm, cell, offset)?)?)
}

/// Fetches the value of `res_operand` from the vm.
pub(crate) fn res_operand_get_val(
    vm: &VirtualMachine,
    res_operand: &ResOperand,
) -> Result<Felt252, HintError> {
    match res_operand {
        ResOperand::Deref(cell) => get_cell_val(vm, cell),
        ResOperand::DoubleDeref(cell, offset) => {
            get_double_deref_val(vm, cell, &Felt252::from(*offset as i64))
        }
        ResOperand::Immediate(x) => Ok(*x),
        ResOperand::BinOp(BinOpOperand { op, a, b }) => {
            let a = get_cell_val(vm, a)?;
            let b = match b {
                DerefOrImmediate::Deref(cell) => get_cell_val(vm, cell)?,
                DerefOrImmediate::Immediate(x) => *x,
            };
            match op {
                Operation::Add => Ok(a + b),
                Operation::Mul => Ok(a * b),
            }
        }
    }
}

/// Fetches the value of `res_operand` without requiring it to be an integer.
pub(crate) fn res_operand_get_maybe(
    vm: &VirtualMachine,
    res_operand: &ResOperand,
) -> Result<MaybeRelocatable, HintError> {
    match res_operand {
        ResOperand::Deref(_) | ResOperand::DoubleDeref(_, _) => {
            let addr = res_operand.get_address(vm)?;
            vm.get_maybe(&addr)
                .ok_or_else(|| MemoryError::UnknownMemoryCell(Box::new(addr)).into())
        }
        ResOperand::Immediate(_) | ResOperand::BinOp(_) => {
            Ok(MaybeRelocatable::Int(res_operand_get_val(vm, res_operand)?))
        }
    }
}

///Inserts value into ap
pub(crate) fn insert_value_into_ap(
    vm: &mut VirtualMachine,
    value: impl Into<MaybeRelocatable>,
) -> Result<(), HintError> {
    vm.insert_value(vm.get_ap(), value)
        .map_err(HintError::Memory)
}

///Inserts value into the cell designated by the operand
pub(crate) fn insert_value_into_operand(
    vm: &mut VirtualMachine,
    operand: &ResOperand,
    value: impl Into<MaybeRelocatable>,
) -> Result<(), HintError> {
    let addr = operand.get_address(vm)?;
    vm.insert_value(addr, value).map_err(HintError::Memory)
}
