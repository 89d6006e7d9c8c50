use crate::{errors::errors::Error, lexer::tokens::TokenKind, tree::tree::NodeId};

use super::{lookups::NonTerminal, parser::Parser};

pub fn parse_expr_arith(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::ExprArith);

    let children = vec![parse_hp_prod(parser)?, parse_lp_expr(parser)?];
    Ok(parser.node(NonTerminal::ExprArith, children))
}

pub fn parse_hp_prod(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::HpProd);

    let children = vec![parse_simple_expr(parser)?, parse_hp_expr(parser)?];
    Ok(parser.node(NonTerminal::HpProd, children))
}

pub fn parse_hp_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::HpExpr);

    parser.chain(NonTerminal::HpExpr, |parser| {
        Ok(vec![parse_hp_op(parser)?, parse_simple_expr(parser)?])
    })
}

pub fn parse_lp_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::LpExpr);

    parser.chain(NonTerminal::LpExpr, |parser| {
        Ok(vec![parse_lp_op(parser)?, parse_hp_prod(parser)?])
    })
}

pub fn parse_simple_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::SimpleExpr);

    let children = match parser.current_token_kind() {
        kind @ (TokenKind::VarName | TokenKind::Number) => vec![parser.expect(kind)?],
        TokenKind::LParen => vec![
            parser.expect(TokenKind::LParen)?,
            parse_expr_arith(parser)?,
            parser.expect(TokenKind::RParen)?,
        ],
        // The operand of a unary minus is a whole ExprArith: -a+b is -(a+b)
        TokenKind::Minus => vec![
            parser.expect(TokenKind::Minus)?,
            parse_expr_arith(parser)?,
        ],
        _ => {
            return Err(parser.unexpected(
                "expected a number, a variable or an arithmetic expression",
            ))
        }
    };

    Ok(parser.node(NonTerminal::SimpleExpr, children))
}

pub fn parse_lp_op(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::LpOp);

    if !parser.selects(NonTerminal::LpOp) {
        return Err(parser.unexpected("expected addition or subtraction operator"));
    }

    let operator = parser.expect(parser.current_token_kind())?;
    Ok(parser.node(NonTerminal::LpOp, vec![operator]))
}

pub fn parse_hp_op(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::HpOp);

    if !parser.selects(NonTerminal::HpOp) {
        return Err(parser.unexpected("expected multiplication or division operator"));
    }

    let operator = parser.expect(parser.current_token_kind())?;
    Ok(parser.node(NonTerminal::HpOp, vec![operator]))
}
