use compy_backend::codegen;

use crate::diagnostics::{DiagnosticEmitter, IntoDiagnostic};
use crate::{CompilerError, CompilerResult};

/// Runs the in-memory part of the pipeline: source text in, C text out.
pub struct Compiler<D: DiagnosticEmitter> {
    pub diagnostics: D,
}

impl<D: DiagnosticEmitter> Compiler<D> {
    pub fn new(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    /// Compiles one module to C. `name` is only used in diagnostics.
    pub fn compile_to_c(&mut self, name: &str, source: &str) -> CompilerResult<String> {
        let module = match compy_frontend::parse(source, name) {
            Ok(module) => module,
            Err(err) => {
                self.diagnostics.emit_diagnostic(err.into_diagnostic(source));
                return Err(CompilerError::HadErrors);
            }
        };

        Ok(codegen::generate(&module))
    }
}
