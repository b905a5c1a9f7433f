use std::str::FromStr;

use anyhow::Result;

use crate::hashing::Hash;
use crate::object::ObjectKind;
use crate::object::tree::{self, TreeEntry};
use crate::store::Store;
use crate::{Error, Result as StoreResult};

/// Shows the entries of the tree object stored under `hash`, one per line.
///
/// # Errors
///
/// This function will fail if the address is malformed or the tree couldn't
/// be read and decoded.
pub fn ls_tree(store: &Store, hash: &str, name_only: bool) -> Result<String> {
    let hash = Hash::from_str(hash)?;
    Ok(list_tree(store, &hash, name_only)?.join("\n"))
}

/// Reads the tree object stored under `hash` and renders one line per entry,
/// in stored (already sorted) order.
///
/// # Errors
///
/// This function will fail with `Error::CorruptObject` if the object is not a
/// tree or its payload doesn't decode, besides the usual read errors.
pub fn list_tree(store: &Store, hash: &Hash, name_only: bool) -> StoreResult<Vec<String>> {
    let object = store.read(hash)?;
    if object.kind != ObjectKind::Tree {
        return Err(Error::CorruptObject(format!(
            "object {} is a {}, not a tree",
            hash, object.kind
        )));
    }

    let entries = tree::from_bytes(&object.data)?;
    Ok(entries
        .iter()
        .map(|entry| render(entry, name_only))
        .collect())
}

fn render(entry: &TreeEntry, name_only: bool) -> String {
    let name = entry.name.to_string_lossy();
    if name_only {
        return name.into_owned();
    }

    // An unknown mode gets an empty kind label rather than an error
    let kind = entry
        .mode
        .object_kind()
        .map(|k| k.to_string())
        .unwrap_or_default();
    format!("{} {} {} {}", entry.mode, kind, entry.hash, name)
}

// Tests

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::list_tree;
    use crate::object::tree::{FileMode, TreeEntry, as_bytes};
    use crate::object::{Object, ObjectKind};
    use crate::store::Store;
    use crate::{Constants, Error};

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::init(dir.path().join(Constants::REPOSITORY_FOLDER_NAME)).unwrap();
        (dir, store)
    }

    /// Stores a blob, an empty subtree and a tree referencing both, returning
    /// the tree's address and the hex addresses of its two entries.
    fn store_sample_tree(store: &Store) -> (crate::hashing::Hash, String, String) {
        let blob_hash = store.write(&Object::new(ObjectKind::Blob, *b"hello\n")).unwrap();
        let subtree_hash = store.write(&Object::new(ObjectKind::Tree, Vec::new())).unwrap();

        let entries = vec![
            TreeEntry {
                mode: FileMode::Regular,
                name: "a.txt".into(),
                hash: blob_hash,
            },
            TreeEntry {
                mode: FileMode::Directory,
                name: "sub".into(),
                hash: subtree_hash,
            },
        ];
        let payload = as_bytes(&entries).unwrap();
        let tree_hash = store.write(&Object::new(ObjectKind::Tree, payload)).unwrap();

        (tree_hash, blob_hash.to_string(), subtree_hash.to_string())
    }

    #[test]
    fn test_name_only_listing() {
        let (_dir, store) = temp_store();
        let (tree_hash, _, _) = store_sample_tree(&store);

        let lines = list_tree(&store, &tree_hash, true).unwrap();
        assert_eq!(lines, ["a.txt", "sub"]);
    }

    #[test]
    fn test_full_listing() {
        let (_dir, store) = temp_store();
        let (tree_hash, blob_hex, subtree_hex) = store_sample_tree(&store);

        let lines = list_tree(&store, &tree_hash, false).unwrap();
        assert_eq!(
            lines,
            [
                format!("100644 blob {} a.txt", blob_hex),
                format!("40000 tree {} sub", subtree_hex),
            ]
        );
    }

    #[test]
    fn test_empty_tree_lists_nothing() {
        let (_dir, store) = temp_store();
        let tree_hash = store.write(&Object::new(ObjectKind::Tree, Vec::new())).unwrap();
        assert!(list_tree(&store, &tree_hash, true).unwrap().is_empty());
        assert!(list_tree(&store, &tree_hash, false).unwrap().is_empty());
    }

    #[test]
    fn test_listing_a_blob_fails() {
        let (_dir, store) = temp_store();
        let blob_hash = store.write(&Object::new(ObjectKind::Blob, *b"not a tree")).unwrap();
        assert!(matches!(
            list_tree(&store, &blob_hash, false),
            Err(Error::CorruptObject(_))
        ));
    }

    #[test]
    fn test_unknown_mode_renders_empty_kind() {
        let (_dir, store) = temp_store();
        let blob_hash = store.write(&Object::new(ObjectKind::Blob, *b"x")).unwrap();
        let entries = vec![TreeEntry {
            mode: FileMode::Other("12345".into()),
            name: "odd".into(),
            hash: blob_hash,
        }];
        let payload = as_bytes(&entries).unwrap();
        let tree_hash = store.write(&Object::new(ObjectKind::Tree, payload)).unwrap();

        let lines = list_tree(&store, &tree_hash, false).unwrap();
        assert_eq!(lines, [format!("12345  {} odd", blob_hash)]);
    }
}
