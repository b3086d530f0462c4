use std::collections::HashMap;

thread_local!(
    static STRING_TO_TOKEN: HashMap<&'static str, Token> = Word::ALL
        .iter()
        .map(|w| Token::Word(w.clone()))
        .chain(Builtin::ALL.iter().map(|b| Token::Function(b.clone())))
        .map(|t| (t.keyword(), t))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Label(String),
    Word(Word),
    Function(Builtin),
    Ident(String),
    Literal(Literal),
    Operator(Operator),
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    EndOfLine,
}

impl Token {
    /// Reserved words and built-in function names. Anything else
    /// alphabetic is an identifier.
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    fn keyword(&self) -> &'static str {
        match self {
            Token::Word(w) => w.as_str(),
            Token::Function(b) => b.as_str(),
            _ => "",
        }
    }

    pub fn is_ident(&self, name: &str) -> bool {
        match self {
            Token::Ident(s) => s == name,
            _ => false,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Literal(Literal::Number(_)))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }

    /// A minus after one of these is a sign, not a subtraction, and
    /// everything up to the next lower precedence operator is its operand.
    /// After `*`, `/` or `^` the operand is shorter, so the parser negates.
    pub fn precedes_unary(&self) -> bool {
        match self {
            Token::Operator(op) => !matches!(
                op,
                Operator::Multiply | Operator::Divide | Operator::Caret
            ),
            Token::Label(_) | Token::Word(_) | Token::LParen | Token::LBracket | Token::Comma => {
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Label(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Function(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            LBracket => write!(f, "["),
            RBracket => write!(f, "]"),
            Comma => write!(f, ","),
            EndOfLine => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Dim,
    Draw,
    End,
    Goto,
    If,
    Input,
    Let,
    Line,
    Plot,
    Print,
    Rectangle,
}

impl Word {
    const ALL: [Word; 11] = [
        Word::Dim,
        Word::Draw,
        Word::End,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Let,
        Word::Line,
        Word::Plot,
        Word::Print,
        Word::Rectangle,
    ];

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Dim => "DIM",
            Draw => "DRAW",
            End => "END",
            Goto => "GOTO",
            If => "IF",
            Input => "INPUT",
            Let => "LET",
            Line => "LINE",
            Plot => "PLOT",
            Print => "PRINT",
            Rectangle => "RECTANGLE",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Builtin {
    Abs,
    Cos,
    Exp,
    Log,
    Rnd,
    Sin,
    Sqr,
    Tan,
}

impl Builtin {
    const ALL: [Builtin; 8] = [
        Builtin::Abs,
        Builtin::Cos,
        Builtin::Exp,
        Builtin::Log,
        Builtin::Rnd,
        Builtin::Sin,
        Builtin::Sqr,
        Builtin::Tan,
    ];

    pub fn as_str(&self) -> &'static str {
        use Builtin::*;
        match self {
            Abs => "ABS",
            Cos => "COS",
            Exp => "EXP",
            Log => "LOG",
            Rnd => "RND",
            Sin => "SIN",
            Sqr => "SQR",
            Tan => "TAN",
        }
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    Less,
    Greater,
    Not,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '^' => Some(Caret),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            '+' => Some(Plus),
            '-' => Some(Minus),
            '=' => Some(Equal),
            '<' => Some(Less),
            '>' => Some(Greater),
            '!' => Some(Not),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            Not => write!(f, "!"),
        }
    }
}
