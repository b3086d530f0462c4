use super::{Address, Canvas, Function, Listing, Program, Var};
use crate::error;
use crate::lang::ast::{Expression, Ident, Statement, Variable};
use crate::lang::Error;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

pub const INPUT_PROMPT: &str = "# ";

/// ## Program counter evaluator
///
/// The runtime never blocks. `execute` returns an `Event` whenever the
/// caller has something to do: print text, answer an input, store a
/// drawing, or report errors.

pub struct Runtime {
    program: Rc<Program>,
    pc: Address,
    last: Option<Address>,
    state: State,
    var: Var,
    canvas: Canvas,
    rng: StdRng,
    pending: Vec<Error>,
    redo: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Errors(Arc<Vec<Error>>),
    Print(String),
    Input(String),
    Drawing(String),
    End,
    Running,
    Stopped,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Stopped,
    Running,
    Input(Ident),
}

enum Flow {
    Advance,
    Jump(Address),
    Halt,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::with_rng(StdRng::from_entropy())
    }
}

impl Runtime {
    /// A runtime whose `RND` sequence repeats from run to run.
    pub fn seeded(seed: u64) -> Runtime {
        Runtime::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Runtime {
        Runtime {
            program: Rc::new(Program::default()),
            pc: 0,
            last: None,
            state: State::Stopped,
            var: Var::new(),
            canvas: Canvas::new(),
            rng,
            pending: vec![],
            redo: false,
        }
    }

    /// Loads a program and readies it to run from the first statement.
    /// Errors collected while loading are the first thing `execute` reports.
    pub fn set_listing(&mut self, listing: &Listing) {
        self.program = Rc::new(listing.program());
        self.pc = 0;
        self.last = None;
        self.var.clear();
        self.canvas.clear();
        self.pending = listing.errors().to_vec();
        self.redo = false;
        self.state = State::Running;
    }

    pub fn is_running(&self) -> bool {
        self.state != State::Stopped
    }

    /// Answers a pending `Input` event. Returns true when the text was
    /// accepted; otherwise the next `execute` asks to redo.
    pub fn enter(&mut self, text: &str) -> bool {
        let var_name = match &self.state {
            State::Input(var_name) => var_name.clone(),
            _ => return false,
        };
        let value = match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                self.redo = true;
                return false;
            }
        };
        if let Err(error) = self.var.store(&var_name, value) {
            self.fail(error);
            return false;
        }
        self.state = State::Running;
        true
    }

    /// Stops a running or waiting program with a BREAK.
    pub fn interrupt(&mut self) {
        if self.state != State::Stopped {
            self.fail(error!(Break));
        }
    }

    /// Runs up to `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if !self.pending.is_empty() {
            let errors = std::mem::take(&mut self.pending);
            return Event::Errors(Arc::new(errors));
        }
        match &self.state {
            State::Stopped => return Event::Stopped,
            State::Input(_) => {
                if self.redo {
                    self.redo = false;
                    return Event::Print("?REDO FROM START\n".to_string());
                }
                return Event::Input(INPUT_PROMPT.to_string());
            }
            State::Running => {}
        }
        let program = Rc::clone(&self.program);
        for _ in 0..cycles {
            let statement = match program.get(self.pc) {
                Some(statement) => statement,
                None => {
                    self.state = State::Stopped;
                    return Event::Stopped;
                }
            };
            self.last = Some(self.pc);
            self.pc += 1;
            match self.step(statement) {
                Ok(Some(event)) => return event,
                Ok(None) => {}
                Err(error) => {
                    self.state = State::Stopped;
                    self.canvas.clear();
                    let error = error.in_label(statement.label());
                    return Event::Errors(Arc::new(vec![error]));
                }
            }
        }
        Event::Running
    }

    /// Stops the program with an error reported against the statement
    /// that ran last.
    pub fn fail(&mut self, error: Error) {
        let error = match self.last.and_then(|addr| self.program.get(addr)) {
            Some(statement) => error.in_label(statement.label()),
            None => error,
        };
        self.state = State::Stopped;
        self.canvas.clear();
        self.pending.push(error);
    }

    fn step(&mut self, statement: &Statement) -> Result<Option<Event>> {
        let mut event = None;
        let flow = match statement {
            Statement::Dim(_, var_name, len) => {
                self.var.dimension_array(var_name, *len)?;
                Flow::Advance
            }
            Statement::DrawBegin(_, width, height) => {
                let width = self.eval(width)?;
                let height = self.eval(height)?;
                self.canvas.begin(width, height)?;
                Flow::Advance
            }
            Statement::DrawEnd(label) => {
                let len = self.canvas.len();
                let document = self.canvas.finish()?;
                debug!("LINE {} DRAWING OF {} ELEMENTS", label, len.saturating_sub(1));
                event = Some(Event::Drawing(document));
                Flow::Advance
            }
            Statement::End(_) => Flow::Halt,
            Statement::Goto(_, target) => Flow::Jump(self.program.address_of(target)?),
            Statement::If(_, lhs, cmp, rhs, target) => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                if cmp.test(lhs, rhs) {
                    Flow::Jump(self.program.address_of(target)?)
                } else {
                    Flow::Advance
                }
            }
            Statement::Input(_, var_name) => {
                if self.var.is_array(var_name) {
                    return Err(error!(TypeMismatch; &format!("{} IS AN ARRAY", var_name)));
                }
                self.state = State::Input(var_name.clone());
                event = Some(Event::Input(INPUT_PROMPT.to_string()));
                Flow::Advance
            }
            Statement::Let(_, var, expr) => {
                let value = self.eval(expr)?;
                match var {
                    Variable::Unary(var_name) => self.var.store(var_name, value)?,
                    Variable::Array(var_name, index) => {
                        self.var.store_array(var_name, index, value)?
                    }
                }
                Flow::Advance
            }
            Statement::Line(_, [x1, y1, x2, y2], color) => {
                let (x1, y1) = (self.eval(x1)?, self.eval(y1)?);
                let (x2, y2) = (self.eval(x2)?, self.eval(y2)?);
                self.canvas.line(x1, y1, x2, y2, color)?;
                Flow::Advance
            }
            Statement::Plot(_, [x, y, r], color, filled) => {
                let (x, y, r) = (self.eval(x)?, self.eval(y)?, self.eval(r)?);
                self.canvas.circle(x, y, r, color, *filled)?;
                Flow::Advance
            }
            Statement::Print(_, expr) => {
                event = Some(Event::Print(format!("{}\n", self.eval(expr)?)));
                Flow::Advance
            }
            Statement::PrintLiteral(_, s) => {
                event = Some(Event::Print(format!("{}\n", s)));
                Flow::Advance
            }
            Statement::Rectangle(_, [x1, y1, x2, y2], color, filled) => {
                let (x1, y1) = (self.eval(x1)?, self.eval(y1)?);
                let (x2, y2) = (self.eval(x2)?, self.eval(y2)?);
                self.canvas.rect(x1, y1, x2, y2, color, *filled)?;
                Flow::Advance
            }
        };
        match flow {
            Flow::Advance => {}
            Flow::Jump(addr) => {
                trace!("LINE {} JUMP TO {}", statement.label(), addr);
                self.pc = addr;
            }
            Flow::Halt => {
                self.state = State::Stopped;
                event = Some(Event::End);
            }
        }
        Ok(event)
    }

    fn eval(&mut self, expr: &Expression) -> Result<f64> {
        match expr {
            Expression::Number(n) => Ok(*n),
            Expression::Var(var) => self.fetch(var),
            Expression::Function(func_name, args) => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(arg)?);
                }
                Function::call(func_name, &values, &mut self.rng)
            }
            Expression::Power(lhs, rhs) => Ok(self.eval(lhs)?.powf(self.eval(rhs)?)),
            Expression::Multiply(lhs, rhs) => Ok(self.eval(lhs)? * self.eval(rhs)?),
            Expression::Divide(lhs, rhs) => Ok(self.eval(lhs)? / self.eval(rhs)?),
            Expression::Add(lhs, rhs) => Ok(self.eval(lhs)? + self.eval(rhs)?),
            Expression::Subtract(lhs, rhs) => Ok(self.eval(lhs)? - self.eval(rhs)?),
        }
    }

    /// A subscripted scalar reads as the scalar.
    fn fetch(&self, var: &Variable) -> Result<f64> {
        match var {
            Variable::Unary(var_name) => self.var.fetch(var_name),
            Variable::Array(var_name, index) => {
                if self.var.is_array(var_name) {
                    self.var.fetch_array(var_name, index)
                } else {
                    self.var.fetch(var_name)
                }
            }
        }
    }
}
