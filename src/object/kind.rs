use crate::{Error, Result};

/// Represents the different kinds of objects the store knows about.
///
/// Only blobs and trees are ever written by this crate; the commit kind exists
/// because tree entries may reference one (a submodule) and the store must be
/// able to name it when displaying entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Blob,
    Tree,
    Commit,
}

impl ObjectKind {
    const BLOB_STRING: &'static str = "blob";
    const TREE_STRING: &'static str = "tree";
    const COMMIT_STRING: &'static str = "commit";
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Blob => ObjectKind::BLOB_STRING,
            Self::Tree => ObjectKind::TREE_STRING,
            Self::Commit => ObjectKind::COMMIT_STRING,
        })
    }
}

impl TryFrom<&str> for ObjectKind {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            ObjectKind::BLOB_STRING => Ok(ObjectKind::Blob),
            ObjectKind::TREE_STRING => Ok(ObjectKind::Tree),
            ObjectKind::COMMIT_STRING => Ok(ObjectKind::Commit),
            _ => Err(Error::CorruptObject(format!(
                "provided value does not match any object kind, got: {:?}",
                value
            ))),
        }
    }
}
