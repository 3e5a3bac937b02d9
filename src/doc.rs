//! Output document model.
//!
//! A document is `{"root": [node, ...]}` where every node is an object with
//! exactly one discriminator (`definition-type`, `statement-type` or
//! `expression-type`), followed by its scalar attributes and its named child
//! sequences, all in insertion order.
pub mod builder;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub use builder::DocBuilder;

// ————————————————————————————————————————————————————————————————————————————
// KEYS
// ————————————————————————————————————————————————————————————————————————————

/// Attribute and group names used in emitted documents.
pub mod keys {
    pub const ROOT: &str = "root";
    pub const CHILDREN: &str = "children";
    pub const ANNOTATIONS: &str = "annotations";
    pub const IF_BRANCH: &str = "if-branch";
    pub const ELSE_BRANCH: &str = "else-branch";

    pub const PACKAGE_NAME: &str = "package-name";
    pub const IMPORT_PACKAGE_NAME: &str = "import-package-name";
    pub const IMPORT_PACKAGE_PATH: &str = "import-package-path";
    pub const SERVICE_NAME: &str = "service-name";
    pub const CONNECTOR_NAME: &str = "connector-name";
    pub const RESOURCE_NAME: &str = "resource-name";
    pub const FUNCTION_NAME: &str = "function-name";
    pub const IS_PUBLIC_FUNCTION: &str = "is-public-function";
    pub const ACTION_NAME: &str = "action-name";
    pub const ACTION_PACKAGE_NAME: &str = "action-package-name";
    pub const ACTION_CONNECTOR_NAME: &str = "action-connector-name";
    pub const WORKER_NAME: &str = "worker-name";
    pub const ANNOTATION_NAME: &str = "annotation-name";
    pub const ANNOTATION_VALUE: &str = "annotation-value";
    pub const ATTRIBUTE_KEY: &str = "key";
    pub const ATTRIBUTE_VALUE: &str = "value";
    pub const PARAMETER_NAME: &str = "parameter-name";
    pub const PARAMETER_TYPE: &str = "parameter-type";
    pub const CONNECTOR_DCL_NAME: &str = "connector-name";
    pub const CONNECTOR_DCL_PACKAGE_NAME: &str = "connector-package-name";
    pub const CONNECTOR_DCL_VARIABLE: &str = "connector-variable";
    pub const VARIABLE_NAME: &str = "variable-name";
    pub const VARIABLE_TYPE: &str = "variable-type";
    pub const CONSTANT_TYPE: &str = "constant-type";
    pub const CONSTANT_NAME: &str = "constant-name";
    pub const CONSTANT_VALUE: &str = "constant-value";
    pub const COMMENT_STRING: &str = "comment-string";
    pub const EXPRESSION: &str = "expression";
    pub const STATEMENT: &str = "statement";
    pub const BASIC_LITERAL_TYPE: &str = "basic-literal-type";
    pub const BASIC_LITERAL_VALUE: &str = "basic-literal-value";
    pub const VARIABLE_REFERENCE_NAME: &str = "variable-reference-name";
    pub const BACK_QUOTE_ENCLOSED_STRING: &str = "back-quote-enclosed-string";
    pub const INSTANCE_TYPE: &str = "instance-type";
    pub const ARRAY_MAP_ACCESS_NAME: &str = "array-map-access-name";
}

// ————————————————————————————————————————————————————————————————————————————
// KINDS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Definition,
    Statement,
    Expression,
}

impl Family {
    /// The discriminator key carried by nodes of this family.
    pub fn key(self) -> &'static str {
        match self {
            Family::Definition => "definition-type",
            Family::Statement => "statement-type",
            Family::Expression => "expression-type",
        }
    }
}

/// Every kind of node a document can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    // definitions
    Package,
    Import,
    Service,
    Connector,
    Resource,
    Function,
    Action,
    Worker,
    Annotation,
    AnnotationAttribute,
    Parameter,
    ConnectorDcl,
    VariableDcl,
    Constant,
    ReturnType,
    ReturnArgument,
    // statements
    Assignment,
    Comment,
    IfElse,
    While,
    FunctionInvocationStmt,
    Reply,
    Return,
    StatementText,
    // expressions
    LeftOperand,
    RightOperand,
    ThenBody,
    IfCondition,
    FunctionInvocation,
    ActionInvocation,
    BasicLiteral,
    Divide,
    Add,
    Subtract,
    Multiply,
    And,
    Or,
    Equal,
    NotEqual,
    GreaterEqual,
    GreaterThan,
    LessEqual,
    LessThan,
    Unary,
    VariableRef,
    ArrayInit,
    BackQuote,
    InstanceCreation,
    ArrayMapAccess,
}

impl DocKind {
    pub fn family(self) -> Family {
        use DocKind::*;
        match self {
            Package | Import | Service | Connector | Resource | Function | Action | Worker
            | Annotation | AnnotationAttribute | Parameter | ConnectorDcl | VariableDcl
            | Constant | ReturnType | ReturnArgument => Family::Definition,
            Assignment | Comment | IfElse | While | FunctionInvocationStmt | Reply | Return
            | StatementText => Family::Statement,
            LeftOperand | RightOperand | ThenBody | IfCondition | FunctionInvocation
            | ActionInvocation | BasicLiteral | Divide | Add | Subtract | Multiply | And | Or
            | Equal | NotEqual | GreaterEqual | GreaterThan | LessEqual | LessThan | Unary
            | VariableRef | ArrayInit | BackQuote | InstanceCreation | ArrayMapAccess => {
                Family::Expression
            }
        }
    }

    /// Value written under the family's discriminator key.
    pub fn tag(self) -> &'static str {
        use DocKind::*;
        match self {
            Package => "package-definition",
            Import => "import-definition",
            Service => "service-definition",
            Connector => "connector-definition",
            Resource => "resource-definition",
            Function => "function-definition",
            Action => "action-definition",
            Worker => "worker-definition",
            Annotation => "annotation-definition",
            AnnotationAttribute => "annotation-attribute",
            Parameter => "parameter-definition",
            ConnectorDcl => "connector-declaration",
            VariableDcl => "variable-declaration",
            Constant => "constant-definition",
            ReturnType => "return-type",
            ReturnArgument => "return-argument",
            Assignment => "assignment-statement",
            Comment => "comment-statement",
            IfElse => "if-else-statement",
            While => "while-statement",
            FunctionInvocationStmt => "function-invocation-statement",
            Reply => "reply-statement",
            Return => "return-statement",
            StatementText => "statement-text",
            LeftOperand => "left-operand",
            RightOperand => "right-operand",
            ThenBody => "then-body",
            IfCondition => "if-condition",
            FunctionInvocation => "function-invocation-expression",
            ActionInvocation => "action-invocation-expression",
            BasicLiteral => "basic-literal-expression",
            Divide => "division-expression",
            Add => "add-expression",
            Subtract => "subtract-expression",
            Multiply => "multiply-expression",
            And => "and-expression",
            Or => "or-expression",
            Equal => "equal-expression",
            NotEqual => "not-equal-expression",
            GreaterEqual => "greater-equal-expression",
            GreaterThan => "greater-than-expression",
            LessEqual => "less-equal-expression",
            LessThan => "less-than-expression",
            Unary => "unary-expression",
            VariableRef => "variable-reference-expression",
            ArrayInit => "array-init-expression",
            BackQuote => "back-quote-expression",
            InstanceCreation => "instance-creation-expression",
            ArrayMapAccess => "array-map-access-expression",
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// NODES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Bool(bool),
    /// A known attribute with no value, e.g. an unqualified connector's package.
    Null,
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self { Scalar::Text(s.to_string()) }
}
impl From<String> for Scalar {
    fn from(s: String) -> Self { Scalar::Text(s) }
}
impl From<&String> for Scalar {
    fn from(s: &String) -> Self { Scalar::Text(s.clone()) }
}
impl From<bool> for Scalar {
    fn from(b: bool) -> Self { Scalar::Bool(b) }
}
impl From<Option<&String>> for Scalar {
    fn from(s: Option<&String>) -> Self { s.map_or(Scalar::Null, Scalar::from) }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Text(s) => serializer.serialize_str(s),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Null => serializer.serialize_unit(),
        }
    }
}

/// One tagged object of the output tree.
///
/// The kind is fixed at construction. Groups are moved in by `attach` and
/// never handed back out mutably.
#[derive(Debug, Clone, PartialEq)]
pub struct DocNode {
    kind: DocKind,
    attrs: IndexMap<&'static str, Scalar>,
    groups: IndexMap<&'static str, Vec<DocNode>>,
}

impl DocNode {
    pub fn new(kind: DocKind) -> Self {
        Self { kind, attrs: IndexMap::new(), groups: IndexMap::new() }
    }

    pub fn with(mut self, key: &'static str, value: impl Into<Scalar>) -> Self {
        self.attrs.insert(key, value.into());
        self
    }

    pub fn attach(mut self, key: &'static str, group: Vec<DocNode>) -> Self {
        self.groups.insert(key, group);
        self
    }

    pub fn kind(&self) -> DocKind { self.kind }

    pub fn attr(&self, key: &str) -> Option<&Scalar> { self.attrs.get(key) }

    pub fn group(&self, key: &str) -> Option<&[DocNode]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn children(&self) -> &[DocNode] {
        self.group(keys::CHILDREN).unwrap_or(&[])
    }
}

impl Serialize for DocNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.attrs.len() + self.groups.len()))?;
        map.serialize_entry(self.kind.family().key(), self.kind.tag())?;
        for (k, v) in &self.attrs {
            map.serialize_entry(k, v)?;
        }
        for (k, v) in &self.groups {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The finished output for one file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub root: Vec<DocNode>,
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(keys::ROOT, &self.root)?;
        map.end()
    }
}

impl Document {
    pub fn to_value(&self) -> serde_json::Value {
        // Serializing plain strings, bools, maps and sequences cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
