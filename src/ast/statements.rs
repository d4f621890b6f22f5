use std::slice::Iter;

use super::{ast::Identifier, expressions::Expr};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

/// `id = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: Identifier,
    pub value: Expr,
}

/// `id[index] = value;`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAssignStmt {
    pub id: Identifier,
    pub index: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    If(IfStmt),
    While(WhileStmt),
    Assign(Assignment),
    ArrayAssign(ArrayAssignStmt),
    /// Stands in for a statement that failed to parse. Consumers skip it.
    Error,
}
