//! Tokenizing a prompt line.

use super::error::ValidationError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// An arithmetic request: `<operation> <a> <b>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub operation: String,
    pub a: Decimal,
    pub b: Decimal,
}

/// Trim, lower-case and split a raw line into tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Interpret tokens that are not a command as an arithmetic request.
pub fn parse_request(tokens: &[String]) -> Result<Request, ValidationError> {
    let [operation, a, b] = tokens else {
        return Err(ValidationError::InvalidFormat);
    };
    Ok(Request {
        operation: operation.clone(),
        a: parse_decimal(a)?,
        b: parse_decimal(b)?,
    })
}

/// Parse plain (`12.50`) or scientific (`1.25e1`) decimal text exactly.
pub fn parse_decimal(token: &str) -> Result<Decimal, ValidationError> {
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .map_err(|_| ValidationError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_normalizes_case_and_spacing() {
        assert_eq!(tokenize("  ADD   1  2 \n"), vec!["add", "1", "2"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn parses_three_token_request() {
        let request = parse_request(&tokenize("divide 10 2.5")).unwrap();
        assert_eq!(request.operation, "divide");
        assert_eq!(request.a, Decimal::from(10));
        assert_eq!(request.b.to_string(), "2.5");
    }

    #[test]
    fn wrong_token_count_is_invalid_format() {
        assert_eq!(
            parse_request(&tokenize("add 1")),
            Err(ValidationError::InvalidFormat)
        );
        assert_eq!(
            parse_request(&tokenize("add 1 2 3")),
            Err(ValidationError::InvalidFormat)
        );
    }

    #[test]
    fn bad_number_is_reported() {
        assert_eq!(
            parse_request(&tokenize("add one 2")),
            Err(ValidationError::InvalidNumber("one".to_string()))
        );
    }

    #[test]
    fn accepts_scientific_notation() {
        assert_eq!(parse_decimal("1.5e3"), Ok(Decimal::from(1500)));
        assert_eq!(parse_decimal("-2"), Ok(Decimal::from(-2)));
    }
}
