pub mod context;
pub mod errors;
pub mod vm_core;
pub mod vm_memory;
