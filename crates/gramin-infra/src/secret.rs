//! API-key resolution from the environment.
//!
//! The single credential this system needs comes from `GEMINI_API_KEY`.
//! It is wrapped in [`SecretString`] immediately so it never shows up in
//! Debug output or logs.

use secrecy::SecretString;

/// Environment variable holding the Generative Language API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Read the API key from the environment.
///
/// Returns `None` when the variable is unset, empty, or not valid Unicode
/// -- a credential must be a usable string, so anything else counts as
/// absent rather than an error.
pub fn resolve_api_key() -> Option<SecretString> {
    match std::env::var(API_KEY_VAR) {
        Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
        Ok(_) => None,
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    // One test, not several: parallel tests mutating the same env var
    // would race.
    #[test]
    fn test_resolve_api_key_states() {
        // SAFETY: no other test in this crate touches this variable.
        unsafe { std::env::remove_var(API_KEY_VAR) };
        assert!(resolve_api_key().is_none());

        unsafe { std::env::set_var(API_KEY_VAR, "") };
        assert!(resolve_api_key().is_none());

        unsafe { std::env::set_var(API_KEY_VAR, "test-key-123") };
        let key = resolve_api_key().unwrap();
        assert_eq!(key.expose_secret(), "test-key-123");

        unsafe { std::env::remove_var(API_KEY_VAR) };
    }
}
