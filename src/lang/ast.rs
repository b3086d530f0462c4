use super::Label;
use std::rc::Rc;

pub type Ident = Rc<str>;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Dim(Label, Ident, usize),
    DrawBegin(Label, Expression, Expression),
    DrawEnd(Label),
    End(Label),
    Goto(Label, Label),
    If(Label, Expression, Comparison, Expression, Label),
    Input(Label, Ident),
    Let(Label, Variable, Expression),
    Line(Label, [Expression; 4], Ident),
    Plot(Label, [Expression; 3], Ident, bool),
    Print(Label, Expression),
    PrintLiteral(Label, Rc<str>),
    Rectangle(Label, [Expression; 4], Ident, bool),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    Equal,
    Less,
    Greater,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Unary(Ident),
    Array(Ident, Index),
}

/// Subscripts are a literal or a plain scalar, never an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Index {
    Literal(f64),
    Var(Ident),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Var(Variable),
    Function(Ident, Vec<Expression>),
    Power(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
}

impl Statement {
    pub fn label(&self) -> &Label {
        use Statement::*;
        match self {
            Dim(l, ..) | DrawBegin(l, ..) | DrawEnd(l) | End(l) | Goto(l, _) | If(l, ..)
            | Input(l, _) | Let(l, ..) | Line(l, ..) | Plot(l, ..) | Print(l, _)
            | PrintLiteral(l, _) | Rectangle(l, ..) => l,
        }
    }
}

impl Comparison {
    pub fn test(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Comparison::Equal => lhs == rhs,
            Comparison::Less => lhs < rhs,
            Comparison::Greater => lhs > rhs,
        }
    }
}

fn fill(f: &mut std::fmt::Formatter, fill: bool) -> std::fmt::Result {
    if fill {
        write!(f, " FILL")
    } else {
        Ok(())
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        write!(f, "{} ", self.label())?;
        match self {
            Dim(_, ident, len) => write!(f, "DIM {} {}", ident, len),
            DrawBegin(_, w, h) => write!(f, "DRAW START {}, {}", w, h),
            DrawEnd(_) => write!(f, "DRAW FINISH"),
            End(_) => write!(f, "END"),
            Goto(_, target) => write!(f, "GOTO {}", target),
            If(_, lhs, cmp, rhs, target) => {
                write!(f, "IF {} {} {} THEN {}", lhs, cmp, rhs, target)
            }
            Input(_, ident) => write!(f, "INPUT {}", ident),
            Let(_, var, expr) => write!(f, "LET {} = {}", var, expr),
            Line(_, [x1, y1, x2, y2], color) => {
                write!(f, "LINE {}, {}, {}, {}, {}", x1, y1, x2, y2, color)
            }
            Plot(_, [x, y, r], color, filled) => {
                write!(f, "PLOT {}, {}, {}, {}", x, y, r, color)?;
                fill(f, *filled)
            }
            Print(_, expr) => write!(f, "PRINT {}", expr),
            PrintLiteral(_, s) => write!(f, "PRINT \"{}\"", s),
            Rectangle(_, [x1, y1, x2, y2], color, filled) => {
                write!(f, "RECTANGLE {}, {}, {}, {}, {}", x1, y1, x2, y2, color)?;
                fill(f, *filled)
            }
        }
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Comparison::Equal => write!(f, "="),
            Comparison::Less => write!(f, "<"),
            Comparison::Greater => write!(f, ">"),
        }
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variable::Unary(ident) => write!(f, "{}", ident),
            Variable::Array(ident, Index::Literal(n)) => write!(f, "{}[{}]", ident, n),
            Variable::Array(ident, Index::Var(var)) => write!(f, "{}[{}]", ident, var),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Var(var) => write!(f, "{}", var),
            Function(ident, args) => {
                write!(f, "{}(", ident)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Power(lhs, rhs) => write!(f, "({} ^ {})", lhs, rhs),
            Multiply(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Divide(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Subtract(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
        }
    }
}
