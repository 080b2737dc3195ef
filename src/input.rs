// Parsing of typed number lists

use crate::errors::InputError;

/// Parse whitespace-separated integers.
///
/// Fails on the first token that is not an `i64`, or when there are no
/// tokens at all.
pub fn parse_sequence(line: &str) -> Result<Vec<i64>, InputError> {
    let values = line
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("64 34 25 12 22 11 90").unwrap(), vec![64, 34, 25, 12, 22, 11, 90]);
    }

    #[test]
    fn test_parse_mixed_whitespace_and_signs() {
        assert_eq!(parse_sequence("  -3\t+7 \n 0 ").unwrap(), vec![-3, 7, 0]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_sequence(""), Err(InputError::Empty));
        assert_eq!(parse_sequence("   \t "), Err(InputError::Empty));
    }

    #[test]
    fn test_parse_invalid_token() {
        assert_eq!(
            parse_sequence("1 2 x3 4"),
            Err(InputError::InvalidInteger { token: "x3".to_string(), position: 3 })
        );
        assert!(parse_sequence("1.5").is_err());
        assert!(parse_sequence("99999999999999999999").is_err());
    }
}
