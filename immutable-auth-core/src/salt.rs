//! Fixed-width salts used for deterministic contract address derivation.

use std::fmt;

/// Width of a salt in bytes.
pub const SALT_LEN: usize = 32;

/// A 32-byte salt: seed bytes followed by zero padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Copy up to [`SALT_LEN`] bytes from `seed` and zero-fill the rest.
    ///
    /// Bytes past the 32nd are dropped. Callers decide beforehand whether
    /// that is acceptable; see [`crate::NameSaltPair::salt`].
    pub fn truncating(seed: &[u8]) -> Self {
        let mut bytes = [0u8; SALT_LEN];
        let n = seed.len().min(SALT_LEN);
        bytes[..n].copy_from_slice(&seed[..n]);
        Salt(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }

    /// Solidity `bytes32` literal: `0x` followed by 64 lowercase hex digits.
    pub fn to_literal(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

impl From<[u8; SALT_LEN]> for Salt {
    fn from(bytes: [u8; SALT_LEN]) -> Self {
        Salt(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_seed_is_zero_padded() {
        let salt = Salt::truncating(b"abc");
        assert_eq!(&salt.as_bytes()[..3], b"abc");
        assert!(salt.as_bytes()[3..].iter().all(|b| *b == 0));
    }

    #[test]
    fn empty_seed_is_all_zero() {
        assert_eq!(Salt::truncating(b""), Salt::from([0u8; SALT_LEN]));
        assert_eq!(Salt::truncating(b"").to_literal(), format!("0x{}", "0".repeat(64)));
    }

    #[test]
    fn long_seed_keeps_first_32_bytes() {
        let seed = [0xabu8; 40];
        let salt = Salt::truncating(&seed);
        assert_eq!(salt.as_bytes(), &[0xabu8; SALT_LEN]);
    }

    #[test]
    fn literal_is_lowercase_and_66_chars() {
        let salt = Salt::truncating(b"ETHDKG");
        let lit = salt.to_literal();
        assert_eq!(lit.len(), 66);
        assert!(lit.starts_with("0x455448444b47"));
        assert_eq!(lit, lit.to_lowercase());
        assert_eq!(salt.to_string(), lit);
    }
}
