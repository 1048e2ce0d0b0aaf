//! Verification code generation.

use rand::Rng;

/// Length of the verification code
pub const CODE_LENGTH: usize = 4;

/// Generates a random 4-digit verification code (0000-9999)
///
/// Drawn uniformly from [0, 9999] and left-zero-padded. Uses the
/// thread-local PRNG, which is NOT cryptographically secure: the code is a
/// short-lived phone-ownership check, not a security primitive. If that
/// assumption changes, switch to `rand::rngs::OsRng`.
pub fn generate_sms_code() -> String {
    let mut rng = rand::thread_rng();
    let code: u32 = rng.gen_range(0..10_000);
    format!("{:04}", code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_code_format() {
        for _ in 0..200 {
            let code = generate_sms_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("generated code should parse");
            assert!(num < 10_000);
        }
    }

    #[test]
    fn test_small_values_are_zero_padded() {
        // Can't force the RNG to emit 7, but the formatting path is shared:
        assert_eq!(format!("{:04}", 7u32), "0007");

        // and over enough draws the padded width never wavers.
        for _ in 0..500 {
            assert_eq!(generate_sms_code().len(), CODE_LENGTH);
        }
    }

    #[test]
    fn test_codes_vary() {
        let codes: HashSet<String> = (0..100).map(|_| generate_sms_code()).collect();
        assert!(codes.len() > 1);
    }
}
