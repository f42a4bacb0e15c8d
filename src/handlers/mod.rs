//! HTTP handlers: thin glue from axum extractors to the services.

pub mod order;
pub mod order_line;
pub mod product;
pub mod user;

use crate::error::AppError;

/// Parse a path segment into an id. Shape errors (non-numeric, overflow) are
/// the caller's fault; range checks belong to the services.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("'{id_str}' is not a valid id")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_rejects_everything_else() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" -2 ").unwrap(), -2);
        assert!(parse_id("abc").is_err());
        assert!(parse_id("3.14").is_err());
        assert!(parse_id("").is_err());
        assert!(parse_id("99999999999999999999999").is_err());
    }
}
