use super::{token::*, Error, Label};

type Result<T> = std::result::Result<T, Error>;

/// Splits one source line into tokens, label first and `EndOfLine` last.
/// The whole line is folded to upper case before anything else happens.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn read_while(&mut self, f: fn(char) -> bool) -> String {
        let mut s = String::new();
        while let Some(&pk) = self.chars().peek() {
            if !f(pk) {
                break;
            }
            s.push(pk);
            self.chars().next();
        }
        s
    }

    fn whitespace(&mut self) {
        self.read_while(is_basic_whitespace);
    }

    fn number(&mut self) -> Token {
        let s = self.read_while(|c| is_basic_digit(c) || c == '.');
        Token::Literal(Literal::Number(s))
    }

    fn string(&mut self) -> Token {
        let mut s = String::new();
        self.chars().next();
        while let Some(ch) = self.chars().next() {
            if ch == '"' {
                break;
            }
            s.push(ch);
        }
        Token::Literal(Literal::String(s))
    }

    fn alphabetic(&mut self) -> Token {
        let s = self.read_while(|c| c.is_ascii_alphanumeric());
        match Token::from_string(&s) {
            Some(token) => token,
            None => Token::Ident(s),
        }
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = *self.chars().peek()?;
        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            ',' => Token::Comma,
            _ => Token::Operator(Operator::from_char(ch)?),
        };
        self.chars().next();
        Some(token)
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    label: &'a Label,
    line: &'a str,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut pk = *self.chars.peek()?;
        if is_basic_whitespace(pk) {
            self.whitespace();
            pk = *self.chars.peek()?;
        }
        if is_basic_digit(pk) || pk == '.' {
            return Some(Ok(self.number()));
        }
        if is_basic_alphabetic(pk) {
            return Some(Ok(self.alphabetic()));
        }
        if pk == '"' {
            return Some(Ok(self.string()));
        }
        match self.minutia() {
            Some(token) => Some(Ok(token)),
            None => {
                self.chars.next();
                let msg = format!("'{}' IN {}", pk, self.line);
                Some(Err(error!(IllegalCharacter, self.label; &msg)))
            }
        }
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Result<Vec<Token>> {
        let line = s.to_ascii_uppercase();
        let line = line.trim();
        let field_len = line
            .find(is_basic_whitespace)
            .unwrap_or_else(|| line.len());
        let field = &line[..field_len];
        if field.is_empty() || !field.chars().all(is_basic_digit) {
            return Err(error!(MissingLabel; line));
        }
        let label = Label::from(field);
        let mut tokens = vec![Token::Label(field.to_string())];
        for token in (BasicLexer {
            chars: line[field_len..].chars().peekable(),
            label: &label,
            line,
        }) {
            tokens.push(token?);
        }
        tokens.push(Token::EndOfLine);
        BasicLexer::expand_negation(&mut tokens);
        BasicLexer::validate(&tokens, &label, line)?;
        Ok(tokens)
    }

    /// A leading minus becomes `( 0 - 1 ) *` so the parser only ever
    /// sees binary operators.
    fn expand_negation(tokens: &mut Vec<Token>) {
        let mut locs: Vec<usize> = vec![];
        for (index, tt) in tokens.windows(2).enumerate() {
            if let Token::Operator(Operator::Minus) = tt[1] {
                if tt[0].precedes_unary() {
                    locs.push(index + 1);
                }
            }
        }
        while let Some(index) = locs.pop() {
            tokens.splice(
                index..index + 1,
                vec![
                    Token::LParen,
                    Token::Literal(Literal::Number("0".to_string())),
                    Token::Operator(Operator::Minus),
                    Token::Literal(Literal::Number("1".to_string())),
                    Token::RParen,
                    Token::Operator(Operator::Multiply),
                ],
            );
        }
    }

    /// Coarse shape checks keyed off the command word. The parser and
    /// runtime do the real validation.
    fn validate(tokens: &[Token], label: &Label, line: &str) -> Result<()> {
        let t = &tokens[1..];
        let word = match t.first() {
            Some(Token::Word(word)) => word,
            _ => return Ok(()),
        };
        let len = t.len();
        let last = &t[len - 2];
        let malformed = |what: &str| {
            let msg = format!("INVALID {} STATEMENT: {}", word, line);
            let msg = if what.is_empty() {
                msg
            } else {
                format!("{}; {}", msg, what)
            };
            Err(error!(MalformedStatement, label; &msg))
        };
        let count = |token: &Token| t.iter().filter(|&x| x == token).count();
        match word {
            Word::Let => {
                if !matches!(t.get(1), Some(Token::Ident(_))) {
                    return malformed("");
                }
                let eq = match t.get(2) {
                    Some(Token::Operator(Operator::Equal)) => 2,
                    Some(Token::LBracket) => {
                        let index_ok = matches!(
                            t.get(3),
                            Some(Token::Ident(_)) | Some(Token::Literal(Literal::Number(_)))
                        );
                        if !index_ok
                            || t.get(4) != Some(&Token::RBracket)
                            || t.get(5) != Some(&Token::Operator(Operator::Equal))
                        {
                            return malformed("");
                        }
                        5
                    }
                    _ => return malformed(""),
                };
                if t.get(eq + 1) == Some(&Token::EndOfLine) {
                    return malformed("MISSING VALUE");
                }
                if last.is_operator() {
                    return malformed("MISSING VALUE AFTER OPERATOR");
                }
            }
            Word::Dim => {
                if len != 4 || !matches!(t[1], Token::Ident(_)) || !t[2].is_number() {
                    return malformed("");
                }
            }
            Word::Print => {
                if len < 3 {
                    return malformed("");
                }
                if count(&Token::LParen) != count(&Token::RParen) {
                    return malformed("MISMATCHED PARENTHESES");
                }
                if count(&Token::LBracket) != count(&Token::RBracket) {
                    return malformed("MISMATCHED BRACKETS");
                }
            }
            Word::Goto => {
                if len != 3 || !t[1].is_number() {
                    return malformed("");
                }
            }
            Word::If => {
                let then = match t.iter().position(|x| x.is_ident("THEN")) {
                    Some(then) => then,
                    None => return malformed("MISSING THEN"),
                };
                let compares = t[..then].iter().any(|x| {
                    matches!(
                        x,
                        Token::Operator(Operator::Equal)
                            | Token::Operator(Operator::Less)
                            | Token::Operator(Operator::Greater)
                    )
                });
                if then < 4 || !compares || len != then + 3 || !t[then + 1].is_number() {
                    return malformed("");
                }
            }
            Word::End => {
                if len != 2 {
                    return malformed("");
                }
            }
            Word::Input => {
                if len != 3 || !matches!(t[1], Token::Ident(_)) {
                    return malformed("");
                }
            }
            Word::Draw => {
                if t[1].is_ident("FINISH") {
                    if len != 3 {
                        return malformed("");
                    }
                } else if !t[1].is_ident("START") || len < 5 {
                    return malformed("");
                }
            }
            Word::Plot | Word::Line | Word::Rectangle => {
                let commas = if *word == Word::Plot { 3 } else { 4 };
                if count(&Token::Comma) < commas {
                    return malformed("MISSING COORDINATES");
                }
                let color = if last.is_ident("FILL") && len > 3 {
                    &t[len - 3]
                } else {
                    last
                };
                if !matches!(color, Token::Ident(_)) {
                    return malformed("MISSING COLOR");
                }
            }
        }
        Ok(())
    }
}
