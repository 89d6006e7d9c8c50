use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

use crate::{errors::errors::Error, lexer::tokens::TokenKind, tree::tree::NodeId};

use super::{parser::Parser, stmt::*};

/// Grammar nonterminals. Their names label the tree nodes they produce.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NonTerminal {
    Program,
    Variables,
    VarList,
    VarListEnd,
    Code,
    Instruction,
    Assign,
    ExprArith,
    HpProd,
    HpExpr,
    LpExpr,
    SimpleExpr,
    LpOp,
    HpOp,
    If,
    IfElse,
    Cond,
    PCond,
    HpCond,
    LpCond,
    SimpleCond,
    Comp,
    While,
    For,
    Print,
    Read,
    ExprList,
    ExprListEnd,
}

impl NonTerminal {
    pub fn name(&self) -> &'static str {
        match self {
            NonTerminal::Program => "Program",
            NonTerminal::Variables => "Variables",
            NonTerminal::VarList => "VarList",
            NonTerminal::VarListEnd => "VarListEnd",
            NonTerminal::Code => "Code",
            NonTerminal::Instruction => "Instruction",
            NonTerminal::Assign => "Assign",
            NonTerminal::ExprArith => "ExprArith",
            NonTerminal::HpProd => "HpProd",
            NonTerminal::HpExpr => "HpExpr",
            NonTerminal::LpExpr => "LpExpr",
            NonTerminal::SimpleExpr => "SimpleExpr",
            NonTerminal::LpOp => "LpOp",
            NonTerminal::HpOp => "HpOp",
            NonTerminal::If => "If",
            NonTerminal::IfElse => "IfElse",
            NonTerminal::Cond => "Cond",
            NonTerminal::PCond => "PCond",
            NonTerminal::HpCond => "HpCond",
            NonTerminal::LpCond => "LpCond",
            NonTerminal::SimpleCond => "SimpleCond",
            NonTerminal::Comp => "Comp",
            NonTerminal::While => "While",
            NonTerminal::For => "For",
            NonTerminal::Print => "Print",
            NonTerminal::Read => "Read",
            NonTerminal::ExprList => "ExprList",
            NonTerminal::ExprListEnd => "ExprListEnd",
        }
    }
}

impl Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

const INSTRUCTION_FIRST: [TokenKind; 6] = [
    TokenKind::VarName,
    TokenKind::If,
    TokenKind::While,
    TokenKind::For,
    TokenKind::Print,
    TokenKind::Read,
];

const EXPR_FIRST: [TokenKind; 4] = [
    TokenKind::VarName,
    TokenKind::Number,
    TokenKind::LParen,
    TokenKind::Minus,
];

const COND_FIRST: [TokenKind; 5] = [
    TokenKind::Not,
    TokenKind::VarName,
    TokenKind::Number,
    TokenKind::LParen,
    TokenKind::Minus,
];

lazy_static! {
    /// Token kinds selecting the non-empty alternative of each nonterminal.
    /// A nonterminal with an epsilon alternative takes it on any other kind.
    pub static ref FIRST_SETS: HashMap<NonTerminal, Vec<TokenKind>> = {
        let mut map = HashMap::new();
        map.insert(NonTerminal::Program, vec![TokenKind::EndLine, TokenKind::BeginProg]);
        map.insert(NonTerminal::Variables, vec![TokenKind::Variables]);
        map.insert(NonTerminal::VarList, vec![TokenKind::VarName]);
        map.insert(NonTerminal::VarListEnd, vec![TokenKind::Comma]);
        map.insert(NonTerminal::Code, INSTRUCTION_FIRST.to_vec());
        map.insert(NonTerminal::Instruction, INSTRUCTION_FIRST.to_vec());
        map.insert(NonTerminal::Assign, vec![TokenKind::VarName]);
        map.insert(NonTerminal::ExprArith, EXPR_FIRST.to_vec());
        map.insert(NonTerminal::HpProd, EXPR_FIRST.to_vec());
        map.insert(NonTerminal::HpExpr, vec![TokenKind::Times, TokenKind::Divide]);
        map.insert(NonTerminal::LpExpr, vec![TokenKind::Plus, TokenKind::Minus]);
        map.insert(NonTerminal::SimpleExpr, EXPR_FIRST.to_vec());
        map.insert(NonTerminal::LpOp, vec![TokenKind::Plus, TokenKind::Minus]);
        map.insert(NonTerminal::HpOp, vec![TokenKind::Times, TokenKind::Divide]);
        map.insert(NonTerminal::If, vec![TokenKind::If]);
        map.insert(NonTerminal::IfElse, vec![TokenKind::Else]);
        map.insert(NonTerminal::Cond, COND_FIRST.to_vec());
        map.insert(NonTerminal::PCond, COND_FIRST.to_vec());
        map.insert(NonTerminal::HpCond, vec![TokenKind::And]);
        map.insert(NonTerminal::LpCond, vec![TokenKind::Or]);
        map.insert(NonTerminal::SimpleCond, COND_FIRST.to_vec());
        map.insert(
            NonTerminal::Comp,
            vec![
                TokenKind::Eq,
                TokenKind::Geq,
                TokenKind::Gt,
                TokenKind::Leq,
                TokenKind::Lt,
                TokenKind::Neq,
            ],
        );
        map.insert(NonTerminal::While, vec![TokenKind::While]);
        map.insert(NonTerminal::For, vec![TokenKind::For]);
        map.insert(NonTerminal::Print, vec![TokenKind::Print]);
        map.insert(NonTerminal::Read, vec![TokenKind::Read]);
        map.insert(NonTerminal::ExprList, EXPR_FIRST.to_vec());
        map.insert(NonTerminal::ExprListEnd, vec![TokenKind::Comma]);
        map
    };
}

pub fn first_set(non_terminal: NonTerminal) -> &'static [TokenKind] {
    FIRST_SETS
        .get(&non_terminal)
        .map(|kinds| kinds.as_slice())
        .unwrap_or(&[])
}

pub type ProductionHandler = fn(&mut Parser) -> Result<NodeId, Error>;
/// Parses one link of a right-recursive production, without its tail.
pub type LinkHandler = fn(&mut Parser) -> Result<Vec<NodeId>, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.instruction(TokenKind::VarName, parse_assign);
    parser.instruction(TokenKind::If, parse_if);
    parser.instruction(TokenKind::While, parse_while);
    parser.instruction(TokenKind::For, parse_for);
    parser.instruction(TokenKind::Print, parse_print);
    parser.instruction(TokenKind::Read, parse_read);
}

// Lookup table inside parser struct, so it's easier
pub type InstructionLookup = HashMap<TokenKind, ProductionHandler>;
