use anyhow::Context as _;
use thiserror::Error;

/// Hard failures of the results extraction.
///
/// An empty results table is not an error: extraction returns `Ok(None)`
/// for it so callers can tell "no table" from "table without rows".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Could not find results table in the page")]
    ResultsTableMissing,
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(fetch_context(url))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_context_names_url() {
        let failed: Result<(), ExtractionError> = Err(ExtractionError::ResultsTableMissing);
        let err = with_fetch_context(failed, "https://example.org/total1.php").unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch from: https://example.org/total1.php");
        assert_eq!(
            err.downcast_ref::<ExtractionError>(),
            Some(&ExtractionError::ResultsTableMissing)
        );
    }

    #[test]
    fn test_parse_context_names_data_type() {
        let failed: Result<(), ExtractionError> = Err(ExtractionError::ResultsTableMissing);
        let err = with_parse_context(failed, "results page").unwrap_err();

        assert_eq!(err.to_string(), "Failed to parse results page");
    }
}
