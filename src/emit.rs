//! AST → document traversal.
//!
//! `Emitter::visit` is the single dispatch point: one routine per node kind,
//! each returning the node it built, or `None` for kinds that deliberately
//! emit nothing (type casts, map/struct initializers, storage locations, key
//! values, action-invocation statements, struct declarations, type
//! converters, main invokers).
//!
//! Child sequences are collected through a `DocBuilder`; `group` opens a
//! sequence, runs the closure and closes it again, so every node's visit is
//! balanced on the builder stack.
//!
//! Recursion depth follows AST depth. Trees decoded through `crate::input`
//! are bounded by serde_json's nesting limit; callers building deeper trees
//! in memory must size the thread stack for them.
pub mod decl;
pub mod stmt;
pub mod expr;
pub mod root;

use crate::ast::{NodeRef, Stmt};
use crate::config::ModelConfig;
use crate::doc::{DocBuilder, DocNode};
use crate::render::ExprRenderer;

pub use root::build_document;

pub struct Emitter<'c, R> {
    config: &'c ModelConfig,
    renderer: R,
    out: DocBuilder,
}

impl<'c, R: ExprRenderer> Emitter<'c, R> {
    pub fn new(config: &'c ModelConfig, renderer: R) -> Self {
        Self { config, renderer, out: DocBuilder::new() }
    }

    /// Number of sequences currently open on the builder.
    pub fn depth(&self) -> usize {
        self.out.depth()
    }

    /// Builds the node for `node` without touching the current sequence.
    /// `None` for stub kinds and for blocks, which only exist through `emit`.
    pub fn visit(&mut self, node: NodeRef<'_>) -> Option<DocNode> {
        match node {
            NodeRef::Import(x) => Some(self.import(x)),
            NodeRef::Service(x) => Some(self.service(x)),
            NodeRef::Connector(x) => Some(self.connector(x)),
            NodeRef::Function(x) => Some(self.function(x)),
            NodeRef::Action(x) => Some(self.action(x)),
            NodeRef::Resource(x) => Some(self.resource(x)),
            NodeRef::Worker(x) => Some(self.worker(x)),
            NodeRef::Annotation(x) => Some(self.annotation(x)),
            NodeRef::Parameter(x) => Some(self.parameter(x)),
            NodeRef::ConnectorDcl(x) => Some(self.connector_dcl(x)),
            NodeRef::VariableDcl(x) => Some(self.variable_dcl(x)),
            NodeRef::Const(x) => Some(self.constant(x)),
            NodeRef::Struct(_) | NodeRef::TypeConverter(_) | NodeRef::MainInvoker(_) => None,
            NodeRef::Stmt(x) => self.stmt(x),
            NodeRef::Expr(x) => self.expr(x),
        }
    }

    /// Visits `node` and appends whatever it produced to the current sequence.
    ///
    /// Blocks are containers: their statements land in the current sequence
    /// one by one and the block itself adds no node.
    pub fn emit(&mut self, node: NodeRef<'_>) {
        if let NodeRef::Stmt(Stmt::Block(block)) = node {
            self.emit_stmts(&block.statements);
            return;
        }
        let built = self.visit(node);
        self.out.append_opt(built);
    }

    fn emit_all<'a, T>(&mut self, items: &'a [T], wrap: fn(&'a T) -> NodeRef<'a>) {
        for item in items {
            self.emit(wrap(item));
        }
    }

    fn emit_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.emit(NodeRef::Stmt(stmt));
        }
    }

    /// Collects everything `f` emits into a fresh sequence.
    pub fn group(&mut self, f: impl FnOnce(&mut Self)) -> Vec<DocNode> {
        self.out.open();
        f(self);
        self.out.close()
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
