use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::object::{Object, ObjectKind};
use crate::store::Store;

/// Hashes the content of the file at `path` as a blob object, storing it when
/// `write` is set and only computing the address otherwise.
///
/// # Return
///
/// The blob's address as 40 hex characters.
///
/// # Errors
///
/// This function will fail if the file couldn't be read or the object
/// couldn't be written.
pub fn hash_object(store: &Store, path: &Path, write: bool) -> Result<String> {
    let content = fs::read(path).with_context(|| format!("could not read file {:?}", path))?;
    let object = Object::new(ObjectKind::Blob, content);

    let hash = if write {
        store
            .write(&object)
            .context("could not write blob to the object store")?
    } else {
        object.hash().context("could not hash blob")?
    };

    Ok(hash.to_string())
}
