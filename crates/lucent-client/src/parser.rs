//! Response parser contract.

use lucent_proto::ResultSet;

use crate::error::Error;

/// Turns a raw response body into typed documents.
///
/// Parsers are supplied by the caller for the response format and document
/// type in use. Malformed input is reported as [`Error::Parse`].
pub trait ResultParser<T> {
    /// Parse one response body.
    fn parse(&self, raw: &str) -> Result<ResultSet<T>, Error>;
}

impl<T, F> ResultParser<T> for F
where
    F: Fn(&str) -> Result<ResultSet<T>, Error>,
{
    fn parse(&self, raw: &str) -> Result<ResultSet<T>, Error> {
        self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_numbers(raw: &str) -> Result<ResultSet<i32>, Error> {
        raw.split(',')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|e| Error::Parse(format!("bad number '{}': {}", s, e)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ResultSet::new)
    }

    #[test]
    fn test_functions_are_parsers() {
        let parser: &dyn ResultParser<i32> = &parse_numbers;
        assert_eq!(parser.parse("1,2,3").unwrap().into_docs(), vec![1, 2, 3]);
        assert!(parser.parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors_propagate() {
        let parser: &dyn ResultParser<i32> = &parse_numbers;
        let err = parser.parse("1,x").unwrap_err();
        assert!(err.is_parse());
    }
}
