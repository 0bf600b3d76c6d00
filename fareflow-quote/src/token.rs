use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// 32 alphanumeric characters carry roughly 190 bits of entropy. Token
/// possession is the only access control on a quote, so the source must
/// be the OS CSPRNG.
const TOKEN_LEN: usize = 32;

/// Generate a fresh URL-safe session token.
pub fn generate() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate(), generate());
    }
}
