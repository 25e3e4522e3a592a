pub mod errors;
pub mod exec_scope;
pub mod relocatable;
