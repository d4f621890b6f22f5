use std::fmt::Display;

use super::{statements::Stmt, types::Type};

/// A variable name. Identifiers are plain values and compare by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: Type,
    pub id: Identifier,
}

impl VarDecl {
    pub fn new(ty: Type, id: Identifier) -> Self {
        VarDecl { ty, id }
    }
}

/// One declaration statement, e.g. `int a, b;`. Every entry shares the group's type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VarDeclList {
    pub decls: Vec<VarDecl>,
}

/// Root of the tree: the body of `int main() { ... }`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub declarations: Vec<VarDeclList>,
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Declarations in source order, flattened across groups.
    pub fn var_decls(&self) -> impl Iterator<Item = &VarDecl> {
        self.declarations.iter().flat_map(|list| list.decls.iter())
    }
}
