use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::Result;
use crate::constants::Constants;
use crate::hashing::Hash;
use crate::object::{Object, ObjectKind};
use crate::store::Store;

use super::tree::{FileMode, TreeEntry, as_bytes};

/// Walks the directory at `dir` recursively, writing every regular file as a
/// blob object and every subdirectory as a tree object, and returns the
/// address of the tree representing `dir` itself.
///
/// The store's own metadata directory is skipped. An empty directory yields a
/// valid tree object with zero entries.
///
/// # Errors
///
/// This function will fail if reading a directory or file wasn't possible, or
/// if an object couldn't be written to the store. Objects written before the
/// failure stay in the store; they are valid and content addressed regardless
/// of whether the parent tree completes.
pub fn build_tree(store: &Store, dir: &Path) -> Result<Hash> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name();
        if name == Constants::REPOSITORY_FOLDER_NAME {
            continue;
        }

        if dir_entry.file_type()?.is_dir() {
            let hash = build_tree(store, &dir_entry.path())?;
            entries.push(TreeEntry {
                mode: FileMode::Directory,
                name,
                hash,
            });
        } else {
            let content = fs::read(dir_entry.path())?;
            let hash = store.write(&Object::new(ObjectKind::Blob, content))?;
            let mode = if dir_entry.metadata()?.permissions().mode() & 0o111 != 0 {
                FileMode::Executable
            } else {
                FileMode::Regular
            };
            entries.push(TreeEntry { mode, name, hash });
        }
    }

    // Byte-wise name order is what makes the tree address deterministic and
    // comparable across implementations, whatever order readdir returned.
    entries.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

    log::trace!("writing tree for {:?} with {} entries", dir, entries.len());
    store.write(&Object::new(ObjectKind::Tree, as_bytes(&entries)?))
}

// Tests
