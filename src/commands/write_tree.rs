use std::path::Path;

use anyhow::{Context, Result};

use crate::object::tree::build_tree;
use crate::store::Store;

/// Writes the directory at `work_dir` as a recursively hashed tree object.
///
/// # Return
///
/// The root tree's address as 40 hex characters.
///
/// # Errors
///
/// This function will fail if the working tree couldn't be walked or any
/// object couldn't be written.
pub fn write_tree(store: &Store, work_dir: &Path) -> Result<String> {
    let hash = build_tree(store, work_dir).context("could not build working tree")?;
    Ok(hash.to_string())
}
