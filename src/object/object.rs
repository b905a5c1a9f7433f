use std::io::{Cursor, Read, Write};

use byteorder::WriteBytesExt;

use crate::byteable::Byteable;
use crate::hashing::Hash;
use crate::utils::cursor::EasyRead;
use crate::{Error, Result};

use super::{NULL_BYTE, ObjectKind, SPACE_BYTE};

/// An object as held in memory: a kind tag and its raw payload, with methods
/// for encoding to and decoding from the canonical envelope format.
///
/// The address of an object is derived from its envelope and never stored
/// separately, so an `Object` and its `Hash` are mutually verifying.
#[derive(Debug)]
pub struct Object {
    pub kind: ObjectKind,
    pub data: Vec<u8>,
}

impl Object {
    pub fn new<T: Into<Vec<u8>>>(kind: ObjectKind, data: T) -> Self {
        Self {
            kind,
            data: data.into(),
        }
    }

    /// Returns the address for this object, the SHA1 hash of its encoded
    /// envelope.
    ///
    /// # Errors
    ///
    /// This function will fail if the object couldn't be encoded.
    pub fn hash(&self) -> Result<Hash> {
        Ok(Hash::digest(&self.as_bytes()?))
    }
}

impl Byteable for Object {
    /// Returns the encoded data for this object, with the following format:
    ///
    /// `{kind} {data_length}\0{data}`
    ///
    /// # Errors
    ///
    /// This function will fail if any write operation to a `std::io::Cursor` returns an error.
    fn as_bytes(&self) -> Result<Vec<u8>> {
        // Encoding to this format: blob 4\0abcd
        let mut cursor = Cursor::new(Vec::new());

        cursor.write_all(self.kind.to_string().as_bytes())?;
        cursor.write_u8(SPACE_BYTE)?;
        cursor.write_all(self.data.len().to_string().as_bytes())?;
        cursor.write_u8(NULL_BYTE)?;
        cursor.write_all(&self.data)?;

        Ok(cursor.into_inner())
    }

    /// Reads a byte slice, assuming it represents a valid, already
    /// decompressed object envelope.
    ///
    /// The length declared in the envelope is checked against the actual
    /// payload size, but a mismatch is only reported through a warning: the
    /// payload returned is always the actual remaining bytes.
    ///
    /// # Errors
    ///
    /// This function will fail with `Error::CorruptObject` if the envelope has
    /// no space or null byte separator, declares a non numeric length or names
    /// an unknown object kind.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);

        // reading kind
        let kind_buf = cursor.read_until_checked(SPACE_BYTE)?;
        let kind = ObjectKind::try_from(String::from_utf8_lossy(&kind_buf).as_ref())?;

        // reading data length, everything before the null byte
        let len_buf = cursor.read_until_checked(NULL_BYTE)?;
        let declared_len: usize = String::from_utf8_lossy(&len_buf)
            .parse()
            .map_err(|e| Error::CorruptObject(format!("object length is not a number: {}", e)))?;

        // reading actual data
        let mut data = Vec::with_capacity(declared_len);
        cursor.read_to_end(&mut data)?;

        if declared_len != data.len() {
            log::warn!(
                "object declares length {} but carries {} bytes",
                declared_len,
                data.len()
            );
        }

        Ok(Self { kind, data })
    }
}

// Tests
