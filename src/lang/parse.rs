use super::{ast::*, token::*, Error, Label};

type Result<T> = std::result::Result<T, Error>;

/// Whether a `DRAW START` is waiting for its `DRAW FINISH`. The region
/// spans lines, so the caller hands it to every `parse` and keeps the
/// value that comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Closed,
    Open,
}

impl Default for Region {
    fn default() -> Region {
        Region::Closed
    }
}

pub fn parse(tokens: &[Token], region: Region) -> Result<(Vec<Statement>, Region)> {
    Parser::parse(tokens, region)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    label: Option<Label>,
    region: Region,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token], region: Region) -> Result<(Vec<Statement>, Region)> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            label: None,
            region,
        };
        let mut r: Vec<Statement> = vec![];
        loop {
            match parse.peek() {
                None | Some(Token::EndOfLine) => return Ok((r, parse.region)),
                Some(Token::Label(s)) => {
                    parse.label = Some(Label::from(s.as_str()));
                    parse.next();
                    continue;
                }
                _ => {}
            }
            let label = match &parse.label {
                Some(label) => label.clone(),
                None => return Err(error!(SyntaxError; "EXPECTED LINE LABEL")),
            };
            match parse.statement(label.clone()) {
                Ok(s) => r.push(s),
                Err(e) => return Err(e.in_label(&label)),
            }
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        self.token_stream.next()
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.token_stream.next();
        }
        self.peeked
    }

    fn statement(&mut self, label: Label) -> Result<Statement> {
        match self.next() {
            Some(Token::Word(word)) => Statement::for_word(self, label, word),
            token => Err(error!(SyntaxError; &format!("EXPECTED STATEMENT, FOUND {}", describe(token)))),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Operator(Operator::Plus)) => {
                    self.next();
                    lhs = Expression::Add(Box::new(lhs), Box::new(self.term()?));
                }
                Some(Token::Operator(Operator::Minus)) => {
                    self.next();
                    lhs = Expression::Subtract(Box::new(lhs), Box::new(self.term()?));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.power()?;
        loop {
            match self.peek() {
                Some(Token::Operator(Operator::Multiply)) => {
                    self.next();
                    lhs = Expression::Multiply(Box::new(lhs), Box::new(self.power()?));
                }
                Some(Token::Operator(Operator::Divide)) => {
                    self.next();
                    lhs = Expression::Divide(Box::new(lhs), Box::new(self.power()?));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn power(&mut self) -> Result<Expression> {
        let mut lhs = self.primary()?;
        while let Some(Token::Operator(Operator::Caret)) = self.peek() {
            self.next();
            lhs = Expression::Power(Box::new(lhs), Box::new(self.primary()?));
        }
        Ok(lhs)
    }

    fn primary(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::Literal(Literal::Number(s))) => Ok(Expression::Number(number(s)?)),
            Some(Token::Ident(name)) => match self.peek() {
                Some(Token::LBracket) => {
                    let index = self.index()?;
                    Ok(Expression::Var(Variable::Array(name.as_str().into(), index)))
                }
                Some(Token::LParen) => {
                    let args = self.expression_list(true)?;
                    Ok(Expression::Function(name.as_str().into(), args))
                }
                _ => Ok(Expression::Var(Variable::Unary(name.as_str().into()))),
            },
            Some(Token::Function(builtin)) => {
                let args = self.expression_list(*builtin == Builtin::Rnd)?;
                Ok(Expression::Function(builtin.as_str().into(), args))
            }
            Some(Token::LParen) => {
                let expr = self.expression()?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Some(Token::Operator(Operator::Minus)) => {
                let operand = self.power()?;
                Ok(Expression::Subtract(
                    Box::new(Expression::Number(0.0)),
                    Box::new(operand),
                ))
            }
            token => Err(error!(SyntaxError; &format!("EXPECTED EXPRESSION, FOUND {}", describe(token)))),
        }
    }

    fn expression_list(&mut self, allow_empty: bool) -> Result<Vec<Expression>> {
        self.expect(Token::LParen)?;
        let mut v: Vec<Expression> = vec![];
        if allow_empty {
            if let Some(Token::RParen) = self.peek() {
                self.next();
                return Ok(v);
            }
        }
        loop {
            v.push(self.expression()?);
            match self.next() {
                Some(Token::RParen) => return Ok(v),
                Some(Token::Comma) => continue,
                _ => return Err(error!(SyntaxError; "EXPECTED END OR SEPARATOR")),
            }
        }
    }

    fn index(&mut self) -> Result<Index> {
        self.expect(Token::LBracket)?;
        let index = match self.next() {
            Some(Token::Literal(Literal::Number(s))) => Index::Literal(number(s)?),
            Some(Token::Ident(name)) => Index::Var(name.as_str().into()),
            _ => return Err(error!(SyntaxError; "EXPECTED SUBSCRIPT")),
        };
        self.expect(Token::RBracket)?;
        Ok(index)
    }

    fn ident(&mut self) -> Result<Ident> {
        match self.next() {
            Some(Token::Ident(i)) => Ok(i.as_str().into()),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn target(&mut self) -> Result<Label> {
        match self.next() {
            Some(Token::Literal(Literal::Number(s))) if s.chars().all(|c| c.is_ascii_digit()) => {
                Ok(Label::from(s.as_str()))
            }
            _ => Err(error!(SyntaxError; "EXPECTED LINE LABEL")),
        }
    }

    fn comparison(&mut self) -> Result<Comparison> {
        match self.next() {
            Some(Token::Operator(Operator::Equal)) => Ok(Comparison::Equal),
            Some(Token::Operator(Operator::Less)) => Ok(Comparison::Less),
            Some(Token::Operator(Operator::Greater)) => Ok(Comparison::Greater),
            _ => Err(error!(SyntaxError; "EXPECTED =, < OR >")),
        }
    }

    /// Comma separated coordinates, then the color and an optional FILL.
    fn shape<T: Default + AsMut<[Expression]>>(&mut self) -> Result<(T, Ident, bool)> {
        let mut coords = T::default();
        for coord in coords.as_mut().iter_mut() {
            *coord = self.expression()?;
            self.expect(Token::Comma)?;
        }
        let color = match self.next() {
            Some(Token::Ident(i)) => i.as_str().into(),
            _ => return Err(error!(SyntaxError; "EXPECTED COLOR")),
        };
        let fill = match self.peek() {
            Some(t) if t.is_ident("FILL") => {
                self.next();
                true
            }
            _ => false,
        };
        Ok((coords, color, fill))
    }

    fn require_region(&self, region: Region) -> Result<()> {
        match (self.region, region) {
            (Region::Open, Region::Closed) => Err(error!(DrawingAlreadyStarted)),
            (Region::Closed, Region::Open) => Err(error!(NoDrawingStarted)),
            _ => Ok(()),
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Label(_) => "EXPECTED LINE LABEL",
                Literal(_) => "EXPECTED LITERAL",
                Word(_) => "EXPECTED RESERVED WORD",
                Function(_) => "EXPECTED FUNCTION",
                Operator(super::token::Operator::Equal) => "EXPECTED =",
                Operator(_) => "EXPECTED OPERATOR",
                Ident(_) => "EXPECTED IDENTIFIER",
                LParen => "EXPECTED LEFT PARENTHESIS",
                RParen => "EXPECTED RIGHT PARENTHESIS",
                LBracket => "EXPECTED LEFT BRACKET",
                RBracket => "EXPECTED RIGHT BRACKET",
                Comma => "EXPECTED COMMA",
                EndOfLine => "EXPECTED END OF LINE",
            }
        ))
    }
}

fn number(s: &str) -> Result<f64> {
    match s.parse::<f64>() {
        Ok(n) => Ok(n),
        Err(_) => Err(error!(SyntaxError; &format!("MALFORMED NUMBER {}", s))),
    }
}

fn describe(token: Option<&Token>) -> String {
    match token {
        None | Some(Token::EndOfLine) => "END OF LINE".to_string(),
        Some(t) => format!("'{}'", t),
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, label: Label, word: &Word) -> Result<Statement> {
        use Word::*;
        match word {
            Dim => Self::r#dim(parse, label),
            Draw => Self::r#draw(parse, label),
            End => Ok(Statement::End(label)),
            Goto => Ok(Statement::Goto(label, parse.target()?)),
            If => Self::r#if(parse, label),
            Input => Ok(Statement::Input(label, parse.ident()?)),
            Let => Self::r#let(parse, label),
            Line => Self::r#line(parse, label),
            Plot => Self::r#plot(parse, label),
            Print => Self::r#print(parse, label),
            Rectangle => Self::r#rectangle(parse, label),
        }
    }

    fn r#let(parse: &mut Parser, label: Label) -> Result<Statement> {
        let ident = parse.ident()?;
        let var = match parse.peek() {
            Some(Token::LBracket) => Variable::Array(ident, parse.index()?),
            _ => Variable::Unary(ident),
        };
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(label, var, expr))
    }

    fn r#print(parse: &mut Parser, label: Label) -> Result<Statement> {
        if let Some(Token::Literal(Literal::String(s))) = parse.peek() {
            parse.next();
            return Ok(Statement::PrintLiteral(label, s.as_str().into()));
        }
        Ok(Statement::Print(label, parse.expression()?))
    }

    fn r#dim(parse: &mut Parser, label: Label) -> Result<Statement> {
        let ident = parse.ident()?;
        let len = match parse.next() {
            Some(Token::Literal(Literal::Number(s))) => s.parse::<usize>().ok(),
            _ => None,
        };
        match len {
            Some(len) => Ok(Statement::Dim(label, ident, len)),
            None => Err(error!(SyntaxError; "EXPECTED ARRAY LENGTH")),
        }
    }

    fn r#if(parse: &mut Parser, label: Label) -> Result<Statement> {
        let lhs = parse.expression()?;
        let cmp = parse.comparison()?;
        let rhs = parse.expression()?;
        match parse.next() {
            Some(t) if t.is_ident("THEN") => {}
            _ => return Err(error!(SyntaxError; "EXPECTED THEN")),
        }
        let target = parse.target()?;
        Ok(Statement::If(label, lhs, cmp, rhs, target))
    }

    fn r#draw(parse: &mut Parser, label: Label) -> Result<Statement> {
        match parse.next() {
            Some(t) if t.is_ident("START") => {
                parse.require_region(Region::Closed)?;
                let width = parse.expression()?;
                parse.expect(Token::Comma)?;
                let height = parse.expression()?;
                parse.region = Region::Open;
                Ok(Statement::DrawBegin(label, width, height))
            }
            Some(t) if t.is_ident("FINISH") => {
                parse.require_region(Region::Open)?;
                parse.region = Region::Closed;
                Ok(Statement::DrawEnd(label))
            }
            _ => Err(error!(SyntaxError; "EXPECTED START OR FINISH")),
        }
    }

    fn r#plot(parse: &mut Parser, label: Label) -> Result<Statement> {
        parse.require_region(Region::Open)?;
        let (coords, color, fill): ([Expression; 3], _, _) = parse.shape()?;
        Ok(Statement::Plot(label, coords, color, fill))
    }

    fn r#line(parse: &mut Parser, label: Label) -> Result<Statement> {
        parse.require_region(Region::Open)?;
        let (coords, color, _): ([Expression; 4], _, _) = parse.shape()?;
        Ok(Statement::Line(label, coords, color))
    }

    fn r#rectangle(parse: &mut Parser, label: Label) -> Result<Statement> {
        parse.require_region(Region::Open)?;
        let (coords, color, fill): ([Expression; 4], _, _) = parse.shape()?;
        Ok(Statement::Rectangle(label, coords, color, fill))
    }
}

impl Default for Expression {
    fn default() -> Expression {
        Expression::Number(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::*;

    fn parse_str(s: &str) -> Statement {
        let tokens = lex(s).unwrap();
        match parse(&tokens, Region::Closed) {
            Ok((mut v, _)) => {
                if v.len() != 1 {
                    panic!();
                }
                v.pop().unwrap()
            }
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn num(n: f64) -> Box<Expression> {
        Box::new(Expression::Number(n))
    }

    #[test]
    fn test_let_array() {
        let answer = Statement::Let(
            Label::from("5"),
            Variable::Array("T".into(), Index::Literal(3.0)),
            Expression::Number(5.0),
        );
        assert_eq!(parse_str("5 let t[3] = 5"), answer);
    }

    #[test]
    fn test_precedence() {
        let answer = Statement::Print(
            Label::from("10"),
            Expression::Add(
                num(2.0),
                Box::new(Expression::Multiply(
                    num(3.0),
                    Box::new(Expression::Power(num(4.0), num(2.0))),
                )),
            ),
        );
        assert_eq!(parse_str("10 PRINT 2 + 3 * 4 ^ 2"), answer);
    }

    #[test]
    fn test_negated_divisor_and_exponent() {
        let answer = Statement::Print(
            Label::from("10"),
            Expression::Divide(
                num(6.0),
                Box::new(Expression::Subtract(num(0.0), num(2.0))),
            ),
        );
        assert_eq!(parse_str("10 PRINT 6 / -2"), answer);
        let answer = Statement::Print(
            Label::from("10"),
            Expression::Power(
                num(2.0),
                Box::new(Expression::Subtract(
                    num(0.0),
                    Box::new(Expression::Power(num(2.0), num(2.0))),
                )),
            ),
        );
        assert_eq!(parse_str("10 PRINT 2 ^ -2 ^ 2"), answer);
    }

    #[test]
    fn test_functions() {
        let answer = Statement::Let(
            Label::from("15"),
            Variable::Unary("B".into()),
            Expression::Power(
                Box::new(Expression::Add(
                    Box::new(Expression::Function(
                        "SIN".into(),
                        vec![Expression::Var(Variable::Array(
                            "T".into(),
                            Index::Var("I".into()),
                        ))],
                    )),
                    num(3.0),
                )),
                num(2.0),
            ),
        );
        assert_eq!(parse_str("15 LET B = (SIN(T[I]) + 3) ^ 2"), answer);
        let answer = Statement::Print(
            Label::from("20"),
            Expression::Function("RND".into(), vec![]),
        );
        assert_eq!(parse_str("20 PRINT RND()"), answer);
    }

    #[test]
    fn test_empty_arguments_only_for_rnd() {
        let tokens = lex("20 PRINT SIN()").unwrap();
        assert!(parse(&tokens, Region::Closed).is_err());
    }

    #[test]
    fn test_if() {
        let answer = Statement::If(
            Label::from("30"),
            Expression::Var(Variable::Unary("A".into())),
            Comparison::Greater,
            Expression::Number(3.0),
            Label::from("10"),
        );
        assert_eq!(parse_str("30 IF A > 3 THEN 10"), answer);
    }

    #[test]
    fn test_print_literal() {
        let answer = Statement::PrintLiteral(Label::from("40"), "HELLO, WORLD".into());
        assert_eq!(parse_str("40 print \"Hello, World\""), answer);
    }

    #[test]
    fn test_region_threading() {
        let start = lex("10 DRAW START 200, 100").unwrap();
        let plot = lex("20 PLOT 10, 20, 5, RED FILL").unwrap();
        let finish = lex("30 DRAW FINISH").unwrap();

        let (_, region) = parse(&start, Region::Closed).unwrap();
        assert_eq!(region, Region::Open);
        assert!(parse(&start, region).is_err());
        let (v, region) = parse(&plot, region).unwrap();
        assert_eq!(region, Region::Open);
        assert_eq!(
            v,
            vec![Statement::Plot(
                Label::from("20"),
                [
                    Expression::Number(10.0),
                    Expression::Number(20.0),
                    Expression::Number(5.0)
                ],
                "RED".into(),
                true
            )]
        );
        let (_, region) = parse(&finish, region).unwrap();
        assert_eq!(region, Region::Closed);
        assert!(parse(&finish, region).is_err());
        assert!(parse(&plot, region).is_err());
    }

    #[test]
    fn test_error_carries_label() {
        let error = lex("70 GOTO X").unwrap_err();
        assert_eq!(error.label(), Some(&Label::from("70")));
        let tokens = lex("80 LET A = (1").unwrap();
        let error = parse(&tokens, Region::Closed).unwrap_err();
        assert_eq!(
            error.to_string(),
            "SYNTAX ERROR IN 80; EXPECTED RIGHT PARENTHESIS"
        );
    }
}
