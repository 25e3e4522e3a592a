pub mod exec_scope_errors;
pub mod hint_errors;
pub mod memory_errors;
pub mod vm_errors;
