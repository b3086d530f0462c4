use super::Address;
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Label};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// The flattened statements of every line in source order, plus where
/// each label first appears.
#[derive(Debug, Default)]
pub struct Program {
    statements: Vec<Statement>,
    symbols: HashMap<Label, Address>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Program {
        let mut symbols: HashMap<Label, Address> = HashMap::new();
        for (addr, statement) in statements.iter().enumerate() {
            symbols.entry(statement.label().clone()).or_insert(addr);
        }
        Program {
            statements,
            symbols,
        }
    }

    pub fn get(&self, addr: Address) -> Option<&Statement> {
        self.statements.get(addr)
    }

    /// Duplicate labels resolve to the first statement carrying them.
    pub fn address_of(&self, label: &Label) -> Result<Address> {
        match self.symbols.get(label) {
            Some(addr) => Ok(*addr),
            None => Err(error!(UndefinedLine; label.as_str())),
        }
    }
}
