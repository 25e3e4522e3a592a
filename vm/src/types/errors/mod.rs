pub mod math_errors;
