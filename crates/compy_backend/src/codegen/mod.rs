
use compy_frontend::ast::*;

/// Emitted once at the top of every translation unit.
pub const PREAMBLE: &str = "#include <stdio.h>\ntypedef char* string;\n";

/// Renders a module as a C99 translation unit.
pub fn generate(module: &Module) -> String {
    let mut codegen = Codegen::new();
    codegen.gen_module(module);
    codegen.finish()
}

/// Appends C source text to a buffer.
///
/// Every token is separated from the previous one by a single space unless the
/// output already ends in whitespace, so tokens can never run together. Names and
/// string contents are written exactly as they appear in the source: nothing is
/// escaped or renamed, even if it clashes with C syntax or keywords.
#[derive(Debug, Default)]
pub struct Codegen {
    code: String,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.code
    }

    pub fn gen_module(&mut self, module: &Module) {
        self.code.push_str(PREAMBLE);
        self.write(&format!("/* module: {} */", module.name));
        self.newline();

        // Prototypes first, so that definitions can call functions declared after them.
        log::debug!("codegen: forward declarations for `{}`", module.name);
        for stmt in &module.statements {
            self.forward_decl(stmt);
        }
        self.newline();

        log::debug!("codegen: definitions for `{}`", module.name);
        for stmt in &module.statements {
            self.gen_stmt(stmt);
            self.newline();
        }
    }

    pub fn forward_decl(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::FnDecl(decl) => {
                self.gen_signature(decl, false);
                self.write(";");
                self.newline();
            }

            Stmt::ConstAssign(_) | Stmt::FnCall(_) => {}
        }
    }

    pub fn gen_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::ConstAssign(assign) => {
                self.write("const");
                self.write(assign.ty.as_str());
                self.write(assign.ident.as_str());
                self.write("=");
                self.gen_expr(&assign.value);
                self.write(";");
            }

            Stmt::FnDecl(decl) => {
                self.gen_signature(decl, true);
                self.gen_block(&decl.body);
            }

            Stmt::FnCall(call) => {
                self.write(call.name.as_str());
                self.write("(");
                for (i, arg) in call.args.iter().enumerate() {
                    if i != 0 {
                        self.write(",");
                    }
                    self.gen_expr(arg);
                }
                self.write(")");
                self.write(";");
            }
        }
    }

    fn gen_signature(&mut self, decl: &FnDecl, param_names: bool) {
        self.write(decl.ret_ty.as_str());
        self.write(decl.name.as_str());
        self.write("(");
        for (i, param) in decl.params.iter().enumerate() {
            if i != 0 {
                self.write(",");
            }
            self.write(param.ty.as_str());
            if param_names {
                self.write(param.name.as_str());
            }
        }
        self.write(")");
    }

    fn gen_block(&mut self, block: &Block) {
        self.write("{");
        self.newline();
        for stmt in &block.statements {
            self.gen_stmt(stmt);
            self.newline();
        }
        self.write("}");
    }

    fn gen_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::IntLit(n) => self.write(&n.to_string()),
            Expr::StringLit(s) => self.write(&format!("\"{s}\"")),
            Expr::Ident(ident) => self.write(ident.as_str()),
        }
    }

    fn write(&mut self, token: &str) {
        if self.code.chars().next_back().is_some_and(|ch| !ch.is_whitespace()) {
            self.code.push(' ');
        }
        self.code.push_str(token);
    }

    fn newline(&mut self) {
        self.code.push('\n');
    }
}
