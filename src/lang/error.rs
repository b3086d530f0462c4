use super::Label;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    label: Option<Label>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $label:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_label($label)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $label:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_label($label)
            .message($msg)
    };
}

/// Where an error came from decides what the caller does with it.
/// Lexical and parse errors abandon one line; runtime errors end the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Parse,
    Runtime,
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            label: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code {
            0..=9 => ErrorKind::Lexical,
            10..=19 => ErrorKind::Parse,
            _ => ErrorKind::Runtime,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::Runtime
    }

    /// Attaches a label unless one is already present.
    pub fn in_label(&self, label: &Label) -> Error {
        let mut error = self.clone();
        if error.label.is_none() {
            error.label = Some(label.clone());
        }
        error
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        let mut error = self.clone();
        error.message = message.to_string();
        error
    }
}

pub enum ErrorCode {
    IllegalCharacter = 1,
    MissingLabel = 2,
    MalformedStatement = 3,
    SyntaxError = 10,
    DrawingAlreadyStarted = 11,
    NoDrawingStarted = 12,
    UndefinedVariable = 20,
    TypeMismatch = 21,
    SubscriptOutOfRange = 22,
    BadSubscript = 23,
    UndefinedLine = 24,
    UnsupportedFunction = 25,
    IllegalFunctionCall = 26,
    RedimensionedArray = 27,
    CantCreateFile = 28,
    Break = 29,
    OutOfMemory = 30,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "ILLEGAL CHARACTER",
            2 => "MISSING LINE LABEL",
            3 => "MALFORMED STATEMENT",
            10 => "SYNTAX ERROR",
            11 => "DRAWING ALREADY STARTED",
            12 => "NO DRAWING STARTED",
            20 => "UNDEFINED VARIABLE",
            21 => "TYPE MISMATCH",
            22 => "SUBSCRIPT OUT OF RANGE",
            23 => "BAD SUBSCRIPT",
            24 => "UNDEFINED LINE",
            25 => "UNSUPPORTED FUNCTION",
            26 => "ILLEGAL FUNCTION CALL",
            27 => "REDIMENSIONED ARRAY",
            28 => "CAN'T CREATE FILE",
            29 => "BREAK",
            30 => "OUT OF MEMORY",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(label) = &self.label {
            suffix.push_str(&format!(" {}", label));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}", self.code)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}", self.code, suffix)
            }
        } else if self.label.is_none() {
            write!(f, "{}{}", code_str, suffix)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let label = Label::from("10");
        assert_eq!(error!(UndefinedLine).to_string(), "UNDEFINED LINE");
        assert_eq!(
            error!(UndefinedLine, &label).to_string(),
            "UNDEFINED LINE IN 10"
        );
        assert_eq!(
            error!(UndefinedVariable, &label; "X").to_string(),
            "UNDEFINED VARIABLE IN 10; X"
        );
        assert_eq!(error!(SyntaxError; "EXPECTED COMMA").to_string(), "SYNTAX ERROR; EXPECTED COMMA");
    }

    #[test]
    fn test_kind() {
        assert_eq!(error!(IllegalCharacter).kind(), ErrorKind::Lexical);
        assert_eq!(error!(NoDrawingStarted).kind(), ErrorKind::Parse);
        assert_eq!(error!(TypeMismatch).kind(), ErrorKind::Runtime);
        assert!(error!(SyntaxError).is_recoverable());
        assert!(!error!(CantCreateFile).is_recoverable());
    }

    #[test]
    fn test_first_label_wins() {
        let error = error!(TypeMismatch, &Label::from("20")).in_label(&Label::from("30"));
        assert_eq!(error.label(), Some(&Label::from("20")));
    }
}
