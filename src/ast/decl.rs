use indexmap::IndexMap;
use serde::Deserialize;

use super::{BasicLiteral, Block, Expr, Position, Stmt};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct File {
    pub package_name: String,
    #[serde(default)]
    pub imports: Vec<Import>,
    #[serde(default)]
    pub constants: Vec<Const>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub connectors: Vec<Connector>,
    #[serde(default)]
    pub structs: Vec<StructDecl>,
    #[serde(default)]
    pub type_converters: Vec<TypeConverter>,
    #[serde(default)]
    pub main_invoker: Option<MainInvoker>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Import {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub variables: Vec<VariableDcl>,
    #[serde(default)]
    pub connector_dcls: Vec<ConnectorDcl>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Connector {
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub variables: Vec<VariableDcl>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub connector_dcls: Vec<ConnectorDcl>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub variables: Vec<VariableDcl>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub connector_dcls: Vec<ConnectorDcl>,
    #[serde(default)]
    pub return_parameters: Vec<ReturnParameter>,
    pub body: Block,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub variables: Vec<VariableDcl>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub connector_dcls: Vec<ConnectorDcl>,
    #[serde(default)]
    pub return_parameters: Vec<ReturnParameter>,
    pub body: Block,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub variables: Vec<VariableDcl>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub connector_dcls: Vec<ConnectorDcl>,
    #[serde(default)]
    pub workers: Vec<Worker>,
    /// Resources declared without a body emit no statements.
    #[serde(default)]
    pub body: Option<Block>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Worker {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub connector_dcls: Vec<ConnectorDcl>,
    #[serde(default)]
    pub variables: Vec<VariableDcl>,
    #[serde(default)]
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub value: String,
    /// Key/value pairs in declaration order.
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// Declared return slot of a function or action; named returns are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReturnParameter {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// `Conn c = create Conn(args...)` style connector instance binding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectorDcl {
    pub connector: String,
    #[serde(default)]
    pub package: Option<String>,
    pub variable: String,
    #[serde(default)]
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariableDcl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Constants are always initialized with a literal.
#[derive(Debug, Clone, Deserialize)]
pub struct Const {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: BasicLiteral,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StructDecl {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<VariableDcl>,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TypeConverter {
    pub name: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub position: Position,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainInvoker {
    pub function: String,
}
