/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

*/

#[macro_use]
mod error;
mod lex;
mod line;
mod parse;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use line::Line;
pub use parse::parse;
pub use parse::Region;

pub mod ast;
pub mod token;

use std::rc::Rc;

/// The numeric text that starts a source line and names it as a jump target.
/// Labels compare as text, so `010` and `10` are different labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(Rc<str>);

impl Label {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Label {
        Label(s.into())
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
