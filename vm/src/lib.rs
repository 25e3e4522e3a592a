//! # Hint execution layer for the Cairo virtual machine
//!
//! Hints are small computations run by the VM at fixed program points. They produce advice
//! values the constraint program cannot derive on its own and feed them back into memory.
//!
//! This crate provides:
//! - [`DictManager`](hint_processor::builtin_hint_processor::dict_manager::DictManager): the
//!   segment-backed dictionaries hints maintain for the running program;
//! - [`ExecutionScopes`](types::exec_scope::ExecutionScopes): the stack of variable frames
//!   hints use to hand state to later hints;
//! - the [`Hint`](hint_processor::hint_processor_definition::Hint) descriptors for the usort,
//!   dictionary and scope hint families, and the
//!   [`HintRunner`](hint_processor::hint_runner::HintRunner) that replays them at each pc.
//!
//! Instruction decoding and stepping are left to the caller, which drives a
//! [`VirtualMachine`](vm::vm_core::VirtualMachine) and calls the runner between steps.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod hint_processor;
pub mod types;
pub mod utils;
pub mod vm;

pub use starknet_types_core::felt::Felt as Felt252;
