use std::str::FromStr;

use sha1::{Digest, Sha1};

use crate::{Error, Result};

/// Length in bytes of a raw object address.
pub const HASH_BYTE_LEN: usize = 20;
/// Length in characters of a hex encoded object address.
pub const HASH_HEX_LEN: usize = 40;

/// A 20 byte SHA1 digest used as the address of an object.
///
/// Always rendered as 40 lowercase hexadecimal characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; HASH_BYTE_LEN]);

impl Hash {
    /// Returns the SHA1 hash for the data passed.
    pub fn digest(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_BYTE_LEN]> for Hash {
    fn from(bytes: [u8; HASH_BYTE_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Hash {
    type Err = Error;

    /// Parses a 40 character hex string into a `Hash`.
    ///
    /// # Errors
    ///
    /// Fails with `Error::InvalidAddress` if the string is not exactly 40 hex
    /// characters.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() != HASH_HEX_LEN {
            return Err(Error::InvalidAddress(s.into()));
        }
        let mut bytes = [0; HASH_BYTE_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidAddress(s.into()))?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl std::fmt::Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("Hash({})", self))
    }
}

// Tests
