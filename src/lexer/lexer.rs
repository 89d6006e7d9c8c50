use std::{collections::VecDeque, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    source::TokenSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("lexer patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Tried in order; longer operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[a-zA-Z][a-zA-Z0-9_]*", symbol_handler),
        pattern("^[0-9]+", number_handler),
        pattern("^\n", endline_handler),
        pattern("^[ \t\r]+", skip_handler),
        pattern("^//[^\n]*", skip_handler),
        pattern("^:=", MK_DEFAULT_HANDLER!(TokenKind::Assign, ":=")),
        pattern("^<>", MK_DEFAULT_HANDLER!(TokenKind::Neq, "<>")),
        pattern("^<=", MK_DEFAULT_HANDLER!(TokenKind::Leq, "<=")),
        pattern("^>=", MK_DEFAULT_HANDLER!(TokenKind::Geq, ">=")),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::Lt, "<")),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::Gt, ">")),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Eq, "=")),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Times, "*")),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Divide, "/")),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::LParen, "(")),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::RParen, ")")),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
    ];
}

/// Pull-based scanner over a program text.
pub struct Lexer {
    pending: VecDeque<Token>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
    last_kind: Option<TokenKind>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pending: VecDeque::new(),
            source,
            pos: 0,
            line: 1,
            file: file_name,
            last_kind: None,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, line = token.line(), "Scanned token");
        self.last_kind = Some(token.kind);
        self.pending.push_back(token);
    }

    pub fn get_position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn scan(&mut self) -> Result<(), Error> {
        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(self.remainder()) {
                (pattern.handler)(self, &pattern.regex);
                return Ok(());
            }
        }

        Err(Error::new(
            ErrorImpl::UnrecognisedToken {
                token: self.at().to_string(),
            },
            self.get_position(),
        ))
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            if self.at_eof() {
                return Ok(MK_TOKEN!(TokenKind::Eos, None, self.get_position()));
            }

            self.scan()?;
        }
    }
}

fn matched_text(lexer: &Lexer, regex: &Regex) -> String {
    regex
        .find(lexer.remainder())
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_default()
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = matched_text(lexer, regex);
    let position = lexer.get_position();

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(MK_TOKEN!(*kind, None, position));
    } else if lexer.last_kind == Some(TokenKind::BeginProg) {
        lexer.push(MK_TOKEN!(TokenKind::ProgName, Some(value.clone()), position));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::VarName, Some(value.clone()), position));
    }

    lexer.advance_n(value.len());
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = matched_text(lexer, regex);
    let position = lexer.get_position();

    lexer.push(MK_TOKEN!(TokenKind::Number, Some(value.clone()), position));
    lexer.advance_n(value.len());
}

fn endline_handler(lexer: &mut Lexer, _regex: &Regex) {
    let position = lexer.get_position();
    lexer.push(MK_TOKEN!(TokenKind::EndLine, None, position));
    lexer.advance_n(1);
    lexer.line += 1;
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    lexer.advance_n(matched.len());
}

/// Scans the whole program, including the trailing `EOS` token.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::Eos;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
