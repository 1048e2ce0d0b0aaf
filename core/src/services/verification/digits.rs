//! Reconstruction of a verification code from per-digit form inputs.

use crate::errors::{DomainError, DomainResult};

use super::code::CODE_LENGTH;

/// Joins an ordered sequence of single-digit inputs into one code string
///
/// The inputs come from a fixed-size form (one field per digit) and are
/// validated for length and charset before concatenation; iteration order
/// of some intermediate map is never trusted.
///
/// # Errors
///
/// `DomainError::Validation` when the slice is not exactly `CODE_LENGTH`
/// entries or any entry is not a single ASCII decimal digit.
pub fn join_code_digits(digits: &[String]) -> DomainResult<String> {
    if digits.len() != CODE_LENGTH {
        return Err(DomainError::Validation {
            message: format!(
                "Expected {} digit inputs, got {}",
                CODE_LENGTH,
                digits.len()
            ),
        });
    }

    let mut code = String::with_capacity(CODE_LENGTH);
    for digit in digits {
        let mut chars = digit.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => code.push(c),
            _ => {
                return Err(DomainError::Validation {
                    message: format!("Digit input must be a single decimal digit: {:?}", digit),
                })
            }
        }
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_valid_digits() {
        let code = join_code_digits(&digits(&["1", "2", "3", "4"])).unwrap();
        assert_eq!(code, "1234");
    }

    #[test]
    fn test_join_preserves_order() {
        let code = join_code_digits(&digits(&["0", "9", "0", "7"])).unwrap();
        assert_eq!(code, "0907");
    }

    #[test]
    fn test_wrong_count_is_rejected() {
        assert!(join_code_digits(&digits(&["1", "2", "3"])).is_err());
        assert!(join_code_digits(&digits(&["1", "2", "3", "4", "5"])).is_err());
        assert!(join_code_digits(&[]).is_err());
    }

    #[test]
    fn test_non_digit_input_is_rejected() {
        assert!(join_code_digits(&digits(&["1", "a", "3", "4"])).is_err());
        assert!(join_code_digits(&digits(&["1", "22", "3", "4"])).is_err());
        assert!(join_code_digits(&digits(&["1", "", "3", "4"])).is_err());
        assert!(join_code_digits(&digits(&["1", " 2", "3", "4"])).is_err());
    }
}
