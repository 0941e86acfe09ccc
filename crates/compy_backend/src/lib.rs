pub mod cc;
pub mod codegen;

pub use cc::{CCompiler, CcError};
pub use codegen::{generate, Codegen};
