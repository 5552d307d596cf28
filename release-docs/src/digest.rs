//! Content digests for tracked text artifacts.
//!
//! The digest is taken over the artifact's lines rejoined with `\n`, so a file
//! that only differs in its trailing newline (or in `\r\n` line endings) hashes
//! the same as a freshly generated one.

use sha2::{Digest, Sha256};

/// Length of a hex-encoded digest (SHA-256, two characters per byte).
pub const DIGEST_HEX_LEN: usize = 64;

/// Computes the lowercase hex SHA-256 digest of a text artifact.
#[must_use]
pub fn compute_digest(text: &str) -> String {
    let normalized = normalize_lines(text);
    hex::encode(Sha256::digest(normalized.as_bytes()))
}

/// Splits `text` into lines and rejoins them with a single `\n`.
fn normalize_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_fixed_width_lowercase_hex() {
        let digest = compute_digest("hello");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn digest_of_empty_text_is_sha256_of_nothing() {
        assert_eq!(
            compute_digest(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn trailing_newline_is_absorbed() {
        assert_eq!(compute_digest("a\nb"), compute_digest("a\nb\n"));
        assert_eq!(compute_digest("a\r\nb\r\n"), compute_digest("a\nb"));
    }

    #[test]
    fn single_byte_change_alters_digest() {
        assert_ne!(compute_digest("version 1.0"), compute_digest("version 1.1"));
    }
}
