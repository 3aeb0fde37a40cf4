use std::marker::PhantomData;

use eyre::{bail, eyre, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Mul,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    Num(u64),
    Op(BinOp),
    Open,
    Close,
}

pub fn tokenize(s: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut bytes = s.bytes().peekable();
    while let Some(c) = bytes.next() {
        tokens.push(match c {
            b' ' | b'\t' => continue,
            b'+' => Token::Op(BinOp::Add),
            b'*' => Token::Op(BinOp::Mul),
            b'(' => Token::Open,
            b')' => Token::Close,
            b'0'..=b'9' => {
                let mut n = u64::from(c - b'0');
                while let Some(d) = bytes.next_if(u8::is_ascii_digit) {
                    n = n
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(u64::from(d - b'0')))
                        .ok_or_else(|| eyre!("number too large"))?;
                }
                Token::Num(n)
            }
            _ => bail!("unexpected character {:?}", char::from(c)),
        });
    }
    Ok(tokens)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Num(u64),
    Bin(BinOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn eval(&self) -> Result<u64> {
        match self {
            Self::Num(n) => Ok(*n),
            Self::Bin(op, lhs, rhs) => {
                let (a, b) = (lhs.eval()?, rhs.eval()?);
                let value = match op {
                    BinOp::Add => a.checked_add(b),
                    BinOp::Mul => a.checked_mul(b),
                };
                value.ok_or_else(|| eyre!("arithmetic overflow"))
            }
        }
    }
}

/// Operator precedence rules; the parser core calls back into `expr` for
/// parenthesised sub-expressions.
pub trait Grammar: Sized {
    fn expr(p: &mut Parser<'_, Self>) -> Result<Expr>;
}

/// `+` and `*` share one level, evaluated left to right.
pub struct SamePrecedence;

impl Grammar for SamePrecedence {
    fn expr(p: &mut Parser<'_, Self>) -> Result<Expr> {
        p.chain(&[BinOp::Add, BinOp::Mul], Parser::term)
    }
}

/// `+` binds tighter than `*`.
pub struct AdditionFirst;

impl Grammar for AdditionFirst {
    fn expr(p: &mut Parser<'_, Self>) -> Result<Expr> {
        p.chain(&[BinOp::Mul], |p| p.chain(&[BinOp::Add], Parser::term))
    }
}

pub struct Parser<'a, G> {
    tokens: &'a [Token],
    pos: usize,
    grammar: PhantomData<G>,
}

impl<'a, G: Grammar> Parser<'a, G> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0, grammar: PhantomData }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// A left-associative chain of `operand`s joined by any of `ops`.
    pub fn chain(&mut self, ops: &[BinOp], mut operand: impl FnMut(&mut Self) -> Result<Expr>) -> Result<Expr> {
        let mut lhs = operand(self)?;
        while let Some(Token::Op(op)) = self.peek() {
            if !ops.contains(&op) {
                break;
            }
            self.pos += 1;
            let rhs = operand(self)?;
            lhs = Expr::Bin(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    /// A number or a parenthesised expression.
    pub fn term(&mut self) -> Result<Expr> {
        match self.bump() {
            Some(Token::Num(n)) => Ok(Expr::Num(n)),
            Some(Token::Open) => {
                let inner = G::expr(self)?;
                match self.bump() {
                    Some(Token::Close) => Ok(inner),
                    other => bail!("expected `)`, found {:?}", other),
                }
            }
            other => bail!("expected a number or `(`, found {:?}", other),
        }
    }

    /// Parses the whole token stream as one expression.
    pub fn parse(mut self) -> Result<Expr> {
        let expr = G::expr(&mut self)?;
        match self.peek() {
            None => Ok(expr),
            Some(token) => bail!("unexpected {:?} at token {}", token, self.pos),
        }
    }
}

pub fn parse<G: Grammar>(s: &str) -> Result<Expr> {
    Parser::<G>::new(&tokenize(s)?).parse()
}

#[test]
fn test_tokenize() {
    use Token::*;
    assert_eq!(
        tokenize("12 * (3+4)").unwrap(),
        vec![Num(12), Op(BinOp::Mul), Open, Num(3), Op(BinOp::Add), Num(4), Close]
    );
    assert!(tokenize("1 - 2").is_err());
}

#[test]
fn test_parse_tree() {
    let one_two = |op| Expr::Bin(op, Box::new(Expr::Num(1)), Box::new(Expr::Num(2)));
    assert_eq!(parse::<SamePrecedence>("1 + 2").unwrap(), one_two(BinOp::Add));
    assert_eq!(parse::<AdditionFirst>("(1 * 2)").unwrap(), one_two(BinOp::Mul));
    assert!(parse::<SamePrecedence>("1 +").is_err());
    assert!(parse::<SamePrecedence>("(1 + 2").is_err());
    assert!(parse::<AdditionFirst>("1 2").is_err());
    assert!(parse::<AdditionFirst>(")").is_err());
}
