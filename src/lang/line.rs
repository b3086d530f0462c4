use super::ast::*;
use super::error::*;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::Label;

/// One tokenized source line.
#[derive(Debug, PartialEq)]
pub struct Line {
    label: Label,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(s: &str) -> Result<Line, Error> {
        let tokens = lex(s)?;
        let label = match tokens.first() {
            Some(Token::Label(s)) => Label::from(s.as_str()),
            _ => return Err(crate::error!(InternalError; "LINE WITHOUT LABEL")),
        };
        Ok(Line { label, tokens })
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn ast(&self, region: Region) -> Result<(Vec<Statement>, Region), Error> {
        parse(&self.tokens, region)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self
            .tokens
            .iter()
            .filter(|t| **t != Token::EndOfLine)
            .map(|t| t.to_string())
            .collect();
        write!(f, "{}", s.join(" "))
    }
}
