use crate::{errors::errors::Error, lexer::tokens::TokenKind, tree::tree::NodeId};

use super::{expr::parse_expr_arith, lookups::NonTerminal, parser::Parser};

pub fn parse_cond(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::Cond);

    let children = vec![parse_p_cond(parser)?, parse_lp_cond(parser)?];
    Ok(parser.node(NonTerminal::Cond, children))
}

pub fn parse_p_cond(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::PCond);

    let children = vec![parse_simple_cond(parser)?, parse_hp_cond(parser)?];
    Ok(parser.node(NonTerminal::PCond, children))
}

pub fn parse_hp_cond(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::HpCond);

    parser.chain(NonTerminal::HpCond, |parser| {
        Ok(vec![parser.expect(TokenKind::And)?, parse_simple_cond(parser)?])
    })
}

pub fn parse_lp_cond(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::LpCond);

    parser.chain(NonTerminal::LpCond, |parser| {
        Ok(vec![parser.expect(TokenKind::Or)?, parse_p_cond(parser)?])
    })
}

pub fn parse_simple_cond(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::SimpleCond);

    let children = if parser.current_token_kind() == TokenKind::Not {
        vec![parser.expect(TokenKind::Not)?, parse_simple_cond(parser)?]
    } else {
        vec![
            parse_expr_arith(parser)?,
            parse_comp(parser)?,
            parse_expr_arith(parser)?,
        ]
    };

    Ok(parser.node(NonTerminal::SimpleCond, children))
}

pub fn parse_comp(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::Comp);

    if !parser.selects(NonTerminal::Comp) {
        return Err(parser.unexpected("expected a comparison operator"));
    }

    let operator = parser.expect(parser.current_token_kind())?;
    Ok(parser.node(NonTerminal::Comp, vec![operator]))
}
