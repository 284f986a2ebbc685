use super::ast::pad;

/// Expression nodes. Every child is owned by exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer, real or string literal, holding the lexeme as written
    /// (string literals without their quotes).
    Literal(String),
    Identifier(String),
    ArrayAccess {
        name: String,
        index: Box<Expr>,
    },
    /// Prefix operator, currently only `!`.
    UnaryOp {
        op: String,
        operand: Box<Expr>,
    },
    /// Arithmetic, relational and logical operators alike. Inside a `for`
    /// update clause `op` may also be `"="`, meaning assignment.
    BinaryOp {
        left: Box<Expr>,
        op: String,
        right: Box<Expr>,
    },
    FunctionCall {
        name: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn literal(value: impl Into<String>) -> Expr {
        Expr::Literal(value.into())
    }

    pub fn identifier(name: impl Into<String>) -> Expr {
        Expr::Identifier(name.into())
    }

    pub fn array_access(name: impl Into<String>, index: Expr) -> Expr {
        Expr::ArrayAccess {
            name: name.into(),
            index: Box::new(index),
        }
    }

    pub fn unary(op: impl Into<String>, operand: Expr) -> Expr {
        Expr::UnaryOp {
            op: op.into(),
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expr, op: impl Into<String>, right: Expr) -> Expr {
        Expr::BinaryOp {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        }
    }

    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::FunctionCall {
            name: name.into(),
            args,
        }
    }

    pub fn pretty_print(&self, indent: usize) -> String {
        match self {
            Expr::Literal(value) => format!("{}Literal({})", pad(indent), value),
            Expr::Identifier(name) => format!("{}Identifier({})", pad(indent), name),
            Expr::ArrayAccess { name, index } => format!(
                "{}ArrayAccess({})\n{}",
                pad(indent),
                name,
                index.pretty_print(indent + 2)
            ),
            Expr::UnaryOp { op, operand } => format!(
                "{}UnaryOp({})\n{}",
                pad(indent),
                op,
                operand.pretty_print(indent + 2)
            ),
            Expr::BinaryOp { left, op, right } => format!(
                "{}BinaryOp({})\n{}\n{}",
                pad(indent),
                op,
                left.pretty_print(indent + 2),
                right.pretty_print(indent + 2)
            ),
            Expr::FunctionCall { name, args } => {
                let mut out = format!("{}FunctionCall({})", pad(indent), name);
                for arg in args {
                    out.push('\n');
                    out.push_str(&arg.pretty_print(indent + 2));
                }
                out
            }
        }
    }
}
