use serde::Deserialize;

use super::{ActionInvocation, Expr, FunctionInvocation};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Stmt {
    Block(Block),
    Assign {
        lhs: Vec<Expr>,
        rhs: Expr,
    },
    Comment {
        text: String,
    },
    IfElse {
        condition: Expr,
        then_body: Box<Stmt>,
        #[serde(default)]
        else_body: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        #[serde(default)]
        body: Option<Box<Stmt>>,
    },
    FunctionInvocation(FunctionInvocation),
    ActionInvocation(ActionInvocation),
    Reply {
        expr: Expr,
    },
    Return {
        #[serde(default)]
        exprs: Vec<Expr>,
    },
}

impl Stmt {
    pub fn block(statements: Vec<Stmt>) -> Self {
        Stmt::Block(Block { statements })
    }
}
