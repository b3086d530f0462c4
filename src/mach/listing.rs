use super::Program;
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Label, Line, Region};
use log::debug;

/// Source text gathered line by line into statements. Lexical and parse
/// errors are collected and the offending line skipped; the drawing
/// region carries from each line's parse into the next.
#[derive(Debug, Default)]
pub struct Listing {
    statements: Vec<Statement>,
    errors: Vec<Error>,
    region: Region,
    region_label: Option<Label>,
}

impl Listing {
    pub fn load(source: &str) -> Listing {
        let mut listing = Listing::default();
        for line in source.lines() {
            if let Err(error) = listing.load_str(line) {
                listing.errors.push(error);
            }
        }
        if let Err(error) = listing.check_closed() {
            listing.errors.push(error);
        }
        listing
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn program(&self) -> Program {
        Program::new(self.statements.clone())
    }

    /// Adds one source line. Blank lines and `*` comments are skipped.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('*') {
            return Ok(());
        }
        let line = Line::new(line)?;
        debug!("LINE {} TOKENS: {}", line.label(), line);
        let (mut statements, region) = line.ast(self.region)?;
        for statement in &statements {
            debug!("LINE {} AST: {}", line.label(), statement);
        }
        if region != self.region {
            self.region_label = Some(line.label().clone());
        }
        self.region = region;
        self.statements.append(&mut statements);
        Ok(())
    }

    fn check_closed(&self) -> Result<(), Error> {
        match (self.region, &self.region_label) {
            (Region::Open, Some(label)) => {
                Err(error!(SyntaxError, label; "DRAW START WITHOUT DRAW FINISH"))
            }
            (Region::Open, None) => Err(error!(SyntaxError; "DRAW START WITHOUT DRAW FINISH")),
            _ => Ok(()),
        }
    }
}
