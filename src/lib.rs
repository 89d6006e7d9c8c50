#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod tree;

extern crate regex;

/// Source line (1-based) and file name of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn line(&self) -> u32 {
        self.0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders an error report pointing at the offending source line.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (Unexpected token: `ENDPROG`, expected `RPAREN`)
        -> prog.imp
           |
        20 | print(a, b
           | ^
    */

    let position = error.get_position();
    let line_str = position.line().to_string();
    let padding = line_str.len() + 2;

    let mut report = String::new();

    if let ErrorTip::None = error.get_tip() {
        report.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        report.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    report.push_str(&format!("-> {}\n", position.1));

    if let Some(line_text) = get_line(source, position.line()) {
        let (line_text_removed, _) = remove_starting_whitespace(line_text);
        report.push_str(&format!("{:>padding$}\n", "|"));
        report.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));
        report.push_str(&format!("{:>padding$} ^\n", "|"));
    }

    report
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_get_line() {
        let source = "beginprog P\n  a := 1\r\nendprog";
        assert_eq!(super::get_line(source, 1), Some("beginprog P"));
        assert_eq!(super::get_line(source, 2), Some("  a := 1"));
        assert_eq!(super::get_line(source, 3), Some("endprog"));
        assert_eq!(super::get_line(source, 4), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_display_error() {
        let source = "beginprog P\n   print(a\nendprog";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                found: TokenKind::EndLine,
                expected: TokenKind::RParen,
            },
            Position(2, Rc::new(String::from("test.imp"))),
        );

        let report = super::display_error(&error, source);
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], "Error: UnexpectedToken (Unexpected token: `ENDLINE`, expected `RPAREN`)");
        assert_eq!(lines[1], "-> test.imp");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | print(a");
        assert_eq!(lines[4], "  | ^");
    }
}
