pub mod codegen;
pub mod common;
