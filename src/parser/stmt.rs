use crate::{errors::errors::Error, lexer::tokens::TokenKind, tree::tree::NodeId};

use super::{
    cond::parse_cond,
    expr::parse_expr_arith,
    lookups::NonTerminal,
    parser::Parser,
};

pub fn parse_program(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::Program);

    let children = vec![
        parser.skip_lines()?,
        parser.expect(TokenKind::BeginProg)?,
        parser.expect(TokenKind::ProgName)?,
        parser.expect(TokenKind::EndLine)?,
        parser.skip_lines()?,
        parse_variables(parser)?,
        parser.skip_lines()?,
        parse_code(parser)?,
        parser.skip_lines()?,
        parser.expect(TokenKind::EndProg)?,
        parser.skip_lines()?,
        parser.expect(TokenKind::Eos)?,
    ];

    Ok(parser.node(NonTerminal::Program, children))
}

pub fn parse_variables(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::Variables);

    if !parser.selects(NonTerminal::Variables) {
        return Ok(parser.empty(NonTerminal::Variables));
    }

    let children = vec![parser.expect(TokenKind::Variables)?, parse_var_list(parser)?];
    Ok(parser.node(NonTerminal::Variables, children))
}

pub fn parse_var_list(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::VarList);

    let children = vec![parser.expect(TokenKind::VarName)?, parse_var_list_end(parser)?];
    Ok(parser.node(NonTerminal::VarList, children))
}

pub fn parse_var_list_end(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::VarListEnd);

    parser.chain(NonTerminal::VarListEnd, |parser| {
        Ok(vec![
            parser.expect(TokenKind::Comma)?,
            parser.expect(TokenKind::VarName)?,
        ])
    })
}

pub fn parse_code(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::Code);

    // One nested Code per instruction
    parser.chain(NonTerminal::Code, |parser| {
        Ok(vec![parse_instruction(parser)?, parser.skip_lines()?])
    })
}

pub fn parse_instruction(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::Instruction);

    let handler = parser
        .get_instruction_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match handler {
        Some(handler) => {
            let instruction = handler(parser)?;
            Ok(parser.node(NonTerminal::Instruction, vec![instruction]))
        }
        None => Err(parser.unexpected("expected an instruction")),
    }
}

pub fn parse_assign(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::Assign);

    let children = vec![
        parser.expect(TokenKind::VarName)?,
        parser.expect(TokenKind::Assign)?,
        parse_expr_arith(parser)?,
    ];
    Ok(parser.node(NonTerminal::Assign, children))
}

pub fn parse_if(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::If);

    let children = vec![
        parser.expect(TokenKind::If)?,
        parser.expect(TokenKind::LParen)?,
        parse_cond(parser)?,
        parser.expect(TokenKind::RParen)?,
        parser.expect(TokenKind::Then)?,
        parser.skip_lines()?,
        parse_code(parser)?,
        parse_if_else(parser)?,
        parser.expect(TokenKind::EndIf)?,
    ];
    Ok(parser.node(NonTerminal::If, children))
}

pub fn parse_if_else(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::IfElse);

    if !parser.selects(NonTerminal::IfElse) {
        return Ok(parser.empty(NonTerminal::IfElse));
    }

    let children = vec![
        parser.expect(TokenKind::Else)?,
        parser.expect(TokenKind::EndLine)?,
        parse_code(parser)?,
    ];
    Ok(parser.node(NonTerminal::IfElse, children))
}

pub fn parse_while(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::While);

    let children = vec![
        parser.expect(TokenKind::While)?,
        parse_cond(parser)?,
        parser.expect(TokenKind::Do)?,
        parser.skip_lines()?,
        parse_code(parser)?,
        parser.expect(TokenKind::EndWhile)?,
    ];
    Ok(parser.node(NonTerminal::While, children))
}

pub fn parse_for(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::For);

    let children = vec![
        parser.expect(TokenKind::For)?,
        parser.expect(TokenKind::VarName)?,
        parser.expect(TokenKind::Assign)?,
        parse_expr_arith(parser)?,
        parser.expect(TokenKind::To)?,
        parse_expr_arith(parser)?,
        parser.expect(TokenKind::Do)?,
        parser.skip_lines()?,
        parse_code(parser)?,
        parser.expect(TokenKind::EndFor)?,
    ];
    Ok(parser.node(NonTerminal::For, children))
}

pub fn parse_print(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::Print);

    let children = vec![
        parser.expect(TokenKind::Print)?,
        parser.expect(TokenKind::LParen)?,
        parse_expr_list(parser)?,
        parser.expect(TokenKind::RParen)?,
    ];
    Ok(parser.node(NonTerminal::Print, children))
}

pub fn parse_read(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::Read);

    let children = vec![
        parser.expect(TokenKind::Read)?,
        parser.expect(TokenKind::LParen)?,
        parse_var_list(parser)?,
        parser.expect(TokenKind::RParen)?,
    ];
    Ok(parser.node(NonTerminal::Read, children))
}

pub fn parse_expr_list(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::ExprList);

    let children = vec![parse_expr_arith(parser)?, parse_expr_list_end(parser)?];
    Ok(parser.node(NonTerminal::ExprList, children))
}

pub fn parse_expr_list_end(parser: &mut Parser) -> Result<NodeId, Error> {
    parser.enter(NonTerminal::ExprListEnd);

    if !parser.selects(NonTerminal::ExprListEnd) {
        return Ok(parser.empty(NonTerminal::ExprListEnd));
    }

    let children = vec![parser.expect(TokenKind::Comma)?, parse_expr_list(parser)?];
    Ok(parser.node(NonTerminal::ExprListEnd, children))
}
