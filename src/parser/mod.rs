use pest::Parser;


#[derive(Parser)]
#[grammar = "parser/status.pest"]
struct StatusLineParser;

/// Extracts the three digit status code from a raw status line.
///
/// Returns `None` when the line does not look like `<protocol> <code> <reason>`.
pub fn parse_status_code(line: &str) -> Option<u16> {
    let status_line = StatusLineParser::parse(Rule::status_line, line)
        .ok()?
        .next()?;

    status_line
        .into_inner()
        .find(|pair| pair.as_rule() == Rule::code)
        .and_then(|code| code.as_str().parse().ok())
}
