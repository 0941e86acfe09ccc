use std::fmt;

use crate::Node;

/// Root of the tree: `module <name>;` followed by its top-level statements.
#[derive(Node!)]
pub struct Module {
    pub name: Ident,
    pub statements: Vec<Stmt>,
}

#[derive(Node!)]
pub enum Stmt {
    ConstAssign(ConstAssign),
    FnDecl(FnDecl),
    FnCall(FnCall),
}

/// `let <ident>: <ty> = <value>;`
#[derive(Node!)]
pub struct ConstAssign {
    pub ident: Ident,
    pub ty: Type,
    pub value: Expr,
}

#[derive(Node!)]
pub struct FnDecl {
    pub name: Ident,
    pub ret_ty: Type,
    pub params: Vec<Param>,
    pub body: Block,
}

#[derive(Node!)]
pub struct Param {
    pub name: Ident,
    pub ty: Type,
}

#[derive(Node!)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

#[derive(Node!)]
pub struct FnCall {
    pub name: Ident,
    pub args: Vec<Expr>,
}

#[derive(Node!)]
pub enum Expr {
    IntLit(i64),
    /// Contents between the quotes, exactly as written.
    StringLit(String),
    Ident(Ident),
}

#[derive(Node!)]
pub struct Ident(pub String);

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A type is just a name; it's passed through to C untouched.
#[derive(Node!)]
pub struct Type(pub Ident);

impl Type {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Ident::new(name))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
