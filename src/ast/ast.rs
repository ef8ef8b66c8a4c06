use std::fmt::{self, Display};

use super::statements::Statement;

/// Node Trait
///
/// Behaviour shared by every node in the tree.
pub trait Node: Display {
    /// Literal text of the token that introduced the node. Used for diagnostics.
    fn token_literal(&self) -> &str;
    /// Canonical re-serialization of the subtree rooted at this node.
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Root of every parsed source text. Statements are kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program { statements: vec![] }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |statement| statement.token_literal())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
