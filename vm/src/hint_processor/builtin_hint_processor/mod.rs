pub mod builtin_hint_processor_definition;
pub mod dict_hint_utils;
pub mod dict_manager;
pub mod hint_code;
pub mod scope_hint_utils;
pub mod usort;
