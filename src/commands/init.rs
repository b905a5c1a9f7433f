use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::store::Store;

/// Creates a new repository scaffold at `repository` (the metadata directory
/// itself, e.g. `.git`).
///
/// # Errors
///
/// This function will fail if any of the operations related with the creation
/// of directories and files fail.
pub fn init(repository: &Path) -> Result<String> {
    if fs::exists(repository).context("could not verify folder existence when initializing")? {
        return Ok("The directory is already a git repository".into());
    }

    Store::init(repository).context("could not create repository scaffold")?;

    Ok("Initialized git directory".into())
}
