mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::ParsedTemplates;

/// Parse template DSL text into a [`ParsedTemplates`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid DSL syntax.
pub fn parse(input: &str) -> Result<ParsedTemplates, ParseError> {
    use winnow::Parser;
    grammar::parse_templates
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
