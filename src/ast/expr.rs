use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Expr {
    FunctionInvocation(FunctionInvocation),
    ActionInvocation(ActionInvocation),
    BasicLiteral(BasicLiteral),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    VariableRef {
        name: String,
    },
    TypeCast {
        #[serde(rename = "type")]
        ty: String,
        expr: Box<Expr>,
    },
    ArrayInit {
        #[serde(default)]
        args: Vec<Expr>,
    },
    MapInit {
        #[serde(default)]
        args: Vec<Expr>,
    },
    Backtick {
        template: String,
    },
    InstanceCreation {
        #[serde(rename = "type")]
        ty: String,
    },
    ArrayMapAccess {
        name: String,
        index: Box<Expr>,
    },
    KeyValue {
        key: Box<Expr>,
        value: Box<Expr>,
    },
    StructInit {
        #[serde(rename = "type")]
        ty: String,
        #[serde(default)]
        args: Vec<Expr>,
    },
    StructFieldAccess {
        name: String,
        #[serde(default)]
        fields: Vec<String>,
    },
    ResourceInvocation {
        name: String,
        #[serde(default)]
        args: Vec<Expr>,
    },
    Location(Location),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionInvocation {
    pub name: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionInvocation {
    pub name: String,
    pub connector: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BasicLiteral {
    #[serde(rename = "type")]
    pub ty: String,
    pub value: Literal,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Null,
}

impl Literal {
    /// Text used for `basic-literal-value` and constant values: the bare
    /// value, strings unquoted.
    pub fn value_text(&self) -> String {
        match self {
            Literal::Bool(b) => b.to_string(),
            Literal::Int(i) => i.to_string(),
            // Debug keeps the fractional part on whole floats (`3.0`, not `3`).
            Literal::Float(f) => format!("{f:?}"),
            Literal::Str(s) => s.clone(),
            Literal::Null => "null".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BinaryOp {
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
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Divide => "/",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::LessThan => "<",
        }
    }

    /// Binding strength; higher binds tighter. All operators are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
            BinaryOp::Equal | BinaryOp::NotEqual => 3,
            BinaryOp::GreaterEqual
            | BinaryOp::GreaterThan
            | BinaryOp::LessEqual
            | BinaryOp::LessThan => 4,
            BinaryOp::Add | BinaryOp::Subtract => 5,
            BinaryOp::Multiply | BinaryOp::Divide => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnaryOp {
    Not,
    Negate,
    Plus,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
            UnaryOp::Plus => "+",
        }
    }
}

/// Resolved storage slot of a variable, filled in by the resolver.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub storage: Storage,
    #[serde(default)]
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Storage {
    Constant,
    LocalVar,
    ConnectorVar,
    ServiceVar,
    StructVar,
}

// ————————————————————————————————————————————————————————————————————————————
// CONSTRUCTORS
// ————————————————————————————————————————————————————————————————————————————

impl Expr {
    pub fn literal(ty: &str, value: Literal) -> Self {
        Expr::BasicLiteral(BasicLiteral { ty: ty.to_string(), value })
    }
    pub fn int(i: i64) -> Self {
        Self::literal("int", Literal::Int(i))
    }
    pub fn string(s: &str) -> Self {
        Self::literal("string", Literal::Str(s.to_string()))
    }
    pub fn var(name: &str) -> Self {
        Expr::VariableRef { name: name.to_string() }
    }
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }
    pub fn call(name: &str, args: Vec<Expr>) -> Self {
        Expr::FunctionInvocation(FunctionInvocation {
            name: name.to_string(),
            package: None,
            args,
        })
    }
}
