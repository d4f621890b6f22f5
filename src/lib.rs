#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::TAB_WIDTH,
    parser::parser::{parse_source, ParsedProgram},
    type_checker::type_checker::{type_check, SemanticReport},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

/// Line/column of the first character of a lexeme, both 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Result of running every stage over one source text.
#[derive(Debug)]
pub struct CompileReport {
    pub parsed: ParsedProgram,
    pub semantic: SemanticReport,
}

impl CompileReport {
    pub fn lexical_errors(&self) -> usize {
        self.parsed.lexical_errors
    }

    pub fn syntax_errors(&self) -> usize {
        self.parsed.error_count()
    }

    pub fn semantic_errors(&self) -> usize {
        self.semantic.error_count()
    }

    pub fn total_errors(&self) -> usize {
        self.lexical_errors() + self.syntax_errors() + self.semantic_errors()
    }

    pub fn is_clean(&self) -> bool {
        self.total_errors() == 0
    }

    /// Syntax diagnostics first, then semantic ones, each in the order they were found.
    pub fn diagnostics(&self) -> Vec<String> {
        self.parsed
            .errors
            .iter()
            .chain(self.semantic.errors())
            .map(|error| error.to_string())
            .collect()
    }
}

/// Lexes, parses and analyzes `source`. Never fails: malformed input only shows up in the counts.
pub fn check_source(source: &str) -> CompileReport {
    let parsed = parse_source(source);
    let semantic = type_check(&parsed);

    CompileReport { parsed, semantic }
}

/// Splits on `\n`, `\r\n` and lone `\r`, the same line breaks the lexer counts.
pub fn source_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = source.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            '\n' => {
                lines.push(&source[start..index]);
                start = index + 1;
            }
            '\r' => {
                lines.push(&source[start..index]);
                start = index + 1;
                if let Some((next, '\n')) = chars.peek().copied() {
                    chars.next();
                    start = next + 1;
                }
            }
            _ => {}
        }
    }

    if start < source.len() {
        lines.push(&source[start..]);
    }

    lines
}

pub fn get_line_at_position(source: &str, position: Position) -> Option<&str> {
    let index = (position.line as usize).checked_sub(1)?;
    source_lines(source).get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, source_lines, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\r\nthird\rTesting { }\n";

        assert_eq!(source_lines(source).len(), 4);
        assert_eq!(
            get_line_at_position(source, Position::new(1, 10)),
            Some("Hello, world!")
        );
        assert_eq!(get_line_at_position(source, Position::new(3, 1)), Some("third"));
        assert_eq!(
            get_line_at_position(source, Position::new(4, 9)),
            Some("Testing { }")
        );
        assert_eq!(get_line_at_position(source, Position::new(5, 1)), None);
        assert_eq!(get_line_at_position(source, Position::new(0, 1)), None);
    }

    #[test]
    fn test_display_error_points_at_column() {
        let source = "int main() {\n    int a\n}";
        let report = super::check_source(source);
        let error = &report.parsed.errors[0];

        let rendered = super::display_error(error, source, "missing_semi.mc");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedToken (expected SEMI, found RBRACE)");
        assert_eq!(lines[1], "-> missing_semi.mc");
        assert_eq!(lines[3], "3 | }");
        assert_eq!(lines[4], "  | ^");
    }
}

/// Renders an error with the offending source line and a caret under its column.
///
/// ```text
/// Error: UnexpectedToken (expected SEMI, found RBRACE)
/// -> program.mc
///   |
/// 3 | }
///   | ^
/// ```
///
/// Errors without a position (semantic ones) only get the header lines.
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", file));

    let Some(position) = error.get_position() else {
        return rendered;
    };
    let Some(line_text) = get_line_at_position(source, position) else {
        return rendered;
    };

    // Tabs advance the lexer column by TAB_WIDTH, so expand them to keep the caret aligned.
    let line_text = line_text.replace('\t', &" ".repeat(TAB_WIDTH as usize));
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
