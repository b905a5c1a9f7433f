use std::str::FromStr;

use anyhow::{Context, Result, bail};

use crate::hashing::Hash;
use crate::store::Store;

/// Shows the payload of the object stored under `hash`.
///
/// # Errors
///
/// This function will fail if the address is malformed or the object couldn't
/// be read.
pub fn cat_file(store: &Store, hash: &str, pretty: bool) -> Result<String> {
    if !pretty {
        bail!("usage: got cat-file -p <hash>")
    }

    let hash = Hash::from_str(hash)?;
    let object = store
        .read(&hash)
        .context("could not read from object file")?;

    Ok(String::from_utf8_lossy(&object.data).into_owned())
}
