use std::slice::Iter;

use super::{ast::pad, expressions::Expr};

/// An ordered list of statements between `{` and `}`.
///
/// `if`/`while` bodies written without braces are still wrapped in a block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn pretty_print(&self, indent: usize) -> String {
        let mut out = format!("{}Block {{\n", pad(indent));
        for stmt in self.iter() {
            out.push_str(&stmt.pretty_print(indent + 2));
            out.push('\n');
        }
        out.push_str(&pad(indent));
        out.push('}');
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Block),
    /// Only the first declarator of `int a = 1, b = 2;` is kept.
    VarDecl {
        type_name: String,
        name: String,
        init: Option<Expr>,
    },
    /// `name = value;` or, with `index`, `name[index] = value;`.
    Assign {
        name: String,
        index: Option<Expr>,
        value: Expr,
    },
    If {
        condition: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },
    While {
        condition: Expr,
        body: Block,
    },
    For {
        init: Option<Box<Stmt>>,
        condition: Option<Expr>,
        update: Option<Expr>,
        body: Block,
    },
    Return(Option<Expr>),
    Expr(Expr),
}

impl Stmt {
    pub fn pretty_print(&self, indent: usize) -> String {
        let inner = pad(indent + 2);

        match self {
            Stmt::Block(block) => block.pretty_print(indent),
            Stmt::VarDecl {
                type_name,
                name,
                init,
            } => match init {
                Some(init) => format!(
                    "{}VarDecl({} {} = {})",
                    pad(indent),
                    type_name,
                    name,
                    init.pretty_print(0)
                ),
                None => format!("{}VarDecl({} {})", pad(indent), type_name, name),
            },
            Stmt::Assign { name, index, value } => {
                let target = match index {
                    Some(index) => format!("{}[{}]", name, index.pretty_print(0)),
                    None => name.clone(),
                };
                format!(
                    "{}Assign({} =\n{})",
                    pad(indent),
                    target,
                    value.pretty_print(indent + 2)
                )
            }
            Stmt::If {
                condition,
                then_block,
                else_block,
            } => {
                let mut out = format!(
                    "{}If\n{}Condition:\n{}\n{}Then:\n{}",
                    pad(indent),
                    inner,
                    condition.pretty_print(indent + 4),
                    inner,
                    then_block.pretty_print(indent + 4)
                );
                if let Some(else_block) = else_block {
                    out.push_str(&format!(
                        "\n{}Else:\n{}",
                        inner,
                        else_block.pretty_print(indent + 4)
                    ));
                }
                out
            }
            Stmt::While { condition, body } => format!(
                "{}While\n{}Condition:\n{}\n{}Body:\n{}",
                pad(indent),
                inner,
                condition.pretty_print(indent + 4),
                inner,
                body.pretty_print(indent + 4)
            ),
            Stmt::For {
                init,
                condition,
                update,
                body,
            } => {
                let mut out = format!("{}For\n", pad(indent));
                if let Some(init) = init {
                    out.push_str(&format!("{}Init:\n{}\n", inner, init.pretty_print(indent + 4)));
                }
                if let Some(condition) = condition {
                    out.push_str(&format!(
                        "{}Condition:\n{}\n",
                        inner,
                        condition.pretty_print(indent + 4)
                    ));
                }
                if let Some(update) = update {
                    out.push_str(&format!(
                        "{}Update:\n{}\n",
                        inner,
                        update.pretty_print(indent + 4)
                    ));
                }
                out.push_str(&format!("{}Body:\n{}", inner, body.pretty_print(indent + 4)));
                out
            }
            Stmt::Return(value) => match value {
                Some(value) => format!("{}Return\n{}", pad(indent), value.pretty_print(indent + 2)),
                None => format!("{}Return", pad(indent)),
            },
            Stmt::Expr(expr) => expr.pretty_print(indent),
        }
    }
}
