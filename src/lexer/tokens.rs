use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("beginprog", TokenKind::BeginProg);
        map.insert("endprog", TokenKind::EndProg);
        map.insert("variables", TokenKind::Variables);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("endif", TokenKind::EndIf);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("endwhile", TokenKind::EndWhile);
        map.insert("for", TokenKind::For);
        map.insert("to", TokenKind::To);
        map.insert("endfor", TokenKind::EndFor);
        map.insert("print", TokenKind::Print);
        map.insert("read", TokenKind::Read);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    BeginProg,
    EndProg,
    ProgName,
    EndLine,
    Eos,

    Variables,
    VarName,
    Comma,

    If,
    Then,
    Else,
    EndIf,
    While,
    Do,
    EndWhile,
    For,
    To,
    EndFor,
    Print,
    Read,

    Assign, // :=
    LParen,
    RParen,

    Plus,
    Minus,
    Times,
    Divide,
    Number,

    And,
    Or,
    Not,

    Eq,  // =
    Geq, // >=
    Gt,  // >
    Leq, // <=
    Lt,  // <
    Neq, // <>
}

impl TokenKind {
    /// Grammar name of the kind, also used as the label of terminal leaves.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::BeginProg => "BEGINPROG",
            TokenKind::EndProg => "ENDPROG",
            TokenKind::ProgName => "PROGNAME",
            TokenKind::EndLine => "ENDLINE",
            TokenKind::Eos => "EOS",
            TokenKind::Variables => "VARIABLES",
            TokenKind::VarName => "VARNAME",
            TokenKind::Comma => "COMMA",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::EndIf => "ENDIF",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::EndWhile => "ENDWHILE",
            TokenKind::For => "FOR",
            TokenKind::To => "TO",
            TokenKind::EndFor => "ENDFOR",
            TokenKind::Print => "PRINT",
            TokenKind::Read => "READ",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Eq => "EQ",
            TokenKind::Geq => "GEQ",
            TokenKind::Gt => "GT",
            TokenKind::Leq => "LEQ",
            TokenKind::Lt => "LT",
            TokenKind::Neq => "NEQ",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Lexeme, only kept for identifiers and literals.
    pub value: Option<String>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({}) at line {}", self.kind, value, self.line()),
            None => write!(f, "{} at line {}", self.kind, self.line()),
        }
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.position.line()
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}
