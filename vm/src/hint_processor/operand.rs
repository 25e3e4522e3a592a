use std::{collections::HashMap, fmt};

use crate::{
    hint_processor::hint_processor_utils::{
        cell_ref_to_relocatable, get_ptr, res_operand_get_val,
    },
    types::relocatable::Relocatable,
    vm::{errors::hint_errors::HintError, vm_core::VirtualMachine},
    Felt252,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Register {
    AP,
    FP,
}

/// A memory cell given relative to a register, `[ap + offset]` or `[fp + offset]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CellRef {
    pub register: Register,
    pub offset: i16,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operation {
    Add,
    Mul,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum DerefOrImmediate {
    Deref(CellRef),
    Immediate(Felt252),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BinOpOperand {
    pub op: Operation,
    pub a: CellRef,
    pub b: DerefOrImmediate,
}

/// A hint operand, bound once when the hint is compiled and evaluated against the vm on every
/// visit to its program point.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ResOperand {
    Deref(CellRef),
    DoubleDeref(CellRef, i16),
    Immediate(Felt252),
    BinOp(BinOpOperand),
}

impl ResOperand {
    /// Address of the cell this operand designates.
    /// Only `Deref` and `DoubleDeref` operands live at an address.
    pub fn get_address(&self, vm: &VirtualMachine) -> Result<Relocatable, HintError> {
        match self {
            ResOperand::Deref(cell) => Ok(cell_ref_to_relocatable(cell, vm)?),
            ResOperand::DoubleDeref(cell, offset) => get_ptr(vm, cell, &Felt252::from(*offset as i64)),
            ResOperand::Immediate(_) | ResOperand::BinOp(_) => Err(
                HintError::OperandNotAddressable(self.to_string().into_boxed_str()),
            ),
        }
    }

    pub fn resolve_as_felt(&self, vm: &VirtualMachine) -> Result<Felt252, HintError> {
        res_operand_get_val(vm, self)
    }

    /// Resolves a pointer operand. Besides plain and double dereferences, `[cell] + imm` and
    /// `[cell] + [other]` are accepted as pointer arithmetic.
    pub fn resolve_as_relocatable(&self, vm: &VirtualMachine) -> Result<Relocatable, HintError> {
        match self {
            ResOperand::Deref(_) | ResOperand::DoubleDeref(_, _) => {
                Ok(vm.get_relocatable(self.get_address(vm)?)?)
            }
            ResOperand::BinOp(BinOpOperand {
                op: Operation::Add,
                a,
                b,
            }) => {
                let offset = match b {
                    DerefOrImmediate::Immediate(value) => *value,
                    DerefOrImmediate::Deref(cell) => {
                        vm.get_integer(cell_ref_to_relocatable(cell, vm)?)?
                    }
                };
                get_ptr(vm, a, &offset)
            }
            ResOperand::Immediate(_) | ResOperand::BinOp(_) => Err(
                HintError::OperandNotRelocatable(self.to_string().into_boxed_str()),
            ),
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Register::AP => write!(f, "ap"),
            Register::FP => write!(f, "fp"),
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} + {}]", self.register, self.offset)
    }
}

impl fmt::Display for DerefOrImmediate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DerefOrImmediate::Deref(cell) => cell.fmt(f),
            DerefOrImmediate::Immediate(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for ResOperand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ResOperand::Deref(cell) => cell.fmt(f),
            ResOperand::DoubleDeref(cell, offset) => write!(f, "[{cell} + {offset}]"),
            ResOperand::Immediate(value) => write!(f, "{value}"),
            ResOperand::BinOp(BinOpOperand { op, a, b }) => match op {
                Operation::Add => write!(f, "{a} + {b}"),
                Operation::Mul => write!(f, "{a} * {b}"),
            },
        }
    }
}

/// Source of the operands a hint refers to by name.
///
/// Lookups happen once, when the hint is compiled; the resolved [`ResOperand`] is then replayed
/// on every later visit to the hint's program point.
pub trait OperandResolver {
    fn get_res_operand(&self, name: &str) -> Result<ResOperand, HintError>;
}

impl OperandResolver for HashMap<String, ResOperand> {
    fn get_res_operand(&self, name: &str) -> Result<ResOperand, HintError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| HintError::UnknownIdentifier(name.to_string().into_boxed_str()))
    }
}
