//! Input program model.
//!
//! Plain owned data for one parsed and resolved source file. Nothing here is
//! validated: the upstream parser/resolver is trusted to hand over a
//! well-formed tree. Every type derives `Deserialize` so a tree can be loaded
//! from its JSON dump (see `crate::input`).
//!
//! Collections are `#[serde(default)]`: a missing collection and an empty one
//! are the same thing.
pub mod decl;
pub mod stmt;
pub mod expr;

pub use decl::*;
pub use stmt::*;
pub use expr::*;

/// Relative source position of a declaration inside its file.
pub type Position = u32;

/// Borrowed view over every node kind the dispatcher knows about.
///
/// The match in `Emitter::visit` is exhaustive over this type, so adding a
/// kind here without deciding what it emits is a compile error.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Import(&'a Import),
    Service(&'a Service),
    Connector(&'a Connector),
    Function(&'a Function),
    Action(&'a Action),
    Resource(&'a Resource),
    Worker(&'a Worker),
    Annotation(&'a Annotation),
    Parameter(&'a Parameter),
    ConnectorDcl(&'a ConnectorDcl),
    VariableDcl(&'a VariableDcl),
    Const(&'a Const),
    Struct(&'a StructDecl),
    TypeConverter(&'a TypeConverter),
    MainInvoker(&'a MainInvoker),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
}

/// One entry of the file's position-ordered top-level group.
#[derive(Debug, Clone, Copy)]
pub enum TopLevel<'a> {
    Const(&'a Const),
    Service(&'a Service),
    Function(&'a Function),
}

impl<'a> TopLevel<'a> {
    pub fn position(&self) -> Position {
        match self {
            TopLevel::Const(x) => x.position,
            TopLevel::Service(x) => x.position,
            TopLevel::Function(x) => x.position,
        }
    }
    pub fn node(&self) -> NodeRef<'a> {
        match *self {
            TopLevel::Const(x) => NodeRef::Const(x),
            TopLevel::Service(x) => NodeRef::Service(x),
            TopLevel::Function(x) => NodeRef::Function(x),
        }
    }
}

impl File {
    /// Constants, services and functions in collection order (constants
    /// first), before any position sort is applied.
    pub fn top_level(&self) -> Vec<TopLevel<'_>> {
        let mut out = Vec::with_capacity(
            self.constants.len() + self.services.len() + self.functions.len()
        );
        out.extend(self.constants.iter().map(TopLevel::Const));
        out.extend(self.services.iter().map(TopLevel::Service));
        out.extend(self.functions.iter().map(TopLevel::Function));
        out
    }
}
