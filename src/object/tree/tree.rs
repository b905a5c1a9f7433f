use std::ffi::OsString;
use std::io::{BufRead, Cursor, Read, Write};
use std::os::unix::ffi::{OsStrExt, OsStringExt};

use byteorder::WriteBytesExt;

use crate::hashing::{HASH_BYTE_LEN, Hash};
use crate::object::{NULL_BYTE, ObjectKind, SPACE_BYTE};
use crate::utils::cursor::EasyRead;
use crate::{Error, Result};

/// The entry modes that can appear in a tree object.
///
/// This is the single place that maps a mode to the kind of object it points
/// at; the mapping is consulted only when displaying entries, never when
/// traversing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMode {
    Regular,
    Executable,
    Symlink,
    Directory,
    Submodule,
    /// A mode string outside the known set, preserved verbatim.
    Other(String),
}

impl FileMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Regular => "100644",
            Self::Executable => "100755",
            Self::Symlink => "120000",
            Self::Directory => "40000",
            Self::Submodule => "160000",
            Self::Other(raw) => raw,
        }
    }

    /// Parses the mode field of a tree entry. Never fails: a mode outside the
    /// known set is carried along as `Other`.
    pub fn parse(raw: &[u8]) -> Self {
        match raw {
            b"100644" => Self::Regular,
            b"100755" => Self::Executable,
            b"120000" => Self::Symlink,
            // Trees store "40000" but the zero padded spelling shows up in
            // other tooling's output, so accept both.
            b"40000" | b"040000" => Self::Directory,
            b"160000" => Self::Submodule,
            _ => Self::Other(String::from_utf8_lossy(raw).into_owned()),
        }
    }

    pub fn object_kind(&self) -> Option<ObjectKind> {
        match self {
            Self::Regular | Self::Executable | Self::Symlink => Some(ObjectKind::Blob),
            Self::Directory => Some(ObjectKind::Tree),
            Self::Submodule => Some(ObjectKind::Commit),
            Self::Other(_) => None,
        }
    }
}

impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry of a tree object, a non owning reference to another object
/// in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: FileMode,
    /// One path segment, raw bytes, no slash.
    pub name: OsString,
    pub hash: Hash,
}

/// Encodes `entries` into a tree object payload, in the given order, each
/// entry following the next layout:
///
/// `{mode} {name}\0{20 raw hash bytes}`
///
/// There are no delimiters between entries and no terminator: the payload is
/// exactly the concatenation of entries.
///
/// # Errors
///
/// This function will fail if any write operation to a `std::io::Cursor` returns an error.
pub fn as_bytes(entries: &[TreeEntry]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());

    for entry in entries {
        cursor.write_all(entry.mode.as_str().as_bytes())?;
        cursor.write_u8(SPACE_BYTE)?;
        cursor.write_all(entry.name.as_bytes())?;
        cursor.write_u8(NULL_BYTE)?;
        cursor.write_all(entry.hash.as_ref())?;
    }

    Ok(cursor.into_inner())
}

/// Decodes a tree object payload into its entries, in stored order.
///
/// An empty payload is a valid, empty tree.
///
/// # Errors
///
/// This function will fail with `Error::CorruptObject` if an entry has no
/// space after its mode, no null byte after its name, or fewer than 20 bytes
/// left for its hash.
pub fn from_bytes(payload: &[u8]) -> Result<Vec<TreeEntry>> {
    let mut cursor = Cursor::new(payload);
    let mut entries = Vec::new();

    loop {
        // reading mode; zero bytes read means the payload has ended
        let mut mode_buf = Vec::new();
        if cursor.read_until(SPACE_BYTE, &mut mode_buf)? == 0 {
            break;
        }
        if mode_buf.pop() != Some(SPACE_BYTE) {
            return Err(Error::CorruptObject(
                "tree entry has no space after its mode".into(),
            ));
        }

        // reading name
        let name_buf = cursor.read_until_checked(NULL_BYTE).map_err(|_| {
            Error::CorruptObject("tree entry has no null byte after its name".into())
        })?;

        // reading hash
        let mut hash_buf = [0; HASH_BYTE_LEN];
        cursor
            .read_exact(&mut hash_buf)
            .map_err(|_| Error::CorruptObject("tree entry hash is truncated".into()))?;

        entries.push(TreeEntry {
            mode: FileMode::parse(&mode_buf),
            name: OsString::from_vec(name_buf),
            hash: Hash::from(hash_buf),
        });
    }

    Ok(entries)
}

// Tests
