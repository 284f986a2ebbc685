use std::fmt::Display;

use super::statements::Block;

/// Name of the function the parser fabricates to hold top-level declarations.
pub const GLOBAL_FUNCTION_NAME: &str = "__global__";

pub(crate) fn pad(indent: usize) -> String {
    " ".repeat(indent)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub return_type: String,
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Block,
}

impl Function {
    /// Wraps a run of top-level declarations.
    pub fn global(body: Block) -> Self {
        Function {
            return_type: String::from("void"),
            name: String::from(GLOBAL_FUNCTION_NAME),
            params: vec![],
            body,
        }
    }

    pub fn is_global(&self) -> bool {
        self.name == GLOBAL_FUNCTION_NAME
    }

    pub fn pretty_print(&self, indent: usize) -> String {
        let params = self
            .params
            .iter()
            .map(|param| format!("{} {}", param.type_name, param.name))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{}Function({} {}({}))\n{}",
            pad(indent),
            self.return_type,
            self.name,
            params,
            self.body.pretty_print(indent + 2)
        )
    }
}

/// Root of the tree: the functions of one source text, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub functions: Vec<Function>,
}

impl Program {
    pub fn pretty_print(&self, indent: usize) -> String {
        let mut out = format!("{}Program {{\n", pad(indent));
        for function in &self.functions {
            out.push_str(&function.pretty_print(indent + 2));
            out.push('\n');
        }
        out.push_str(&pad(indent));
        out.push('}');
        out
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty_print(0))
    }
}
