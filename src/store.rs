use std::fs;
use std::path::PathBuf;

use crate::byteable::Byteable;
use crate::constants::Constants;
use crate::hashing::Hash;
use crate::object::Object;
use crate::utils::zlib;
use crate::{Error, Result};

/// Handle over one on-disk object store, rooted at a repository metadata
/// directory (conventionally `.git`).
///
/// Every operation goes through a handle; there is no ambient default store,
/// so several stores can coexist in one process and tests can run against
/// temporary directories.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Opens a store rooted at `root` without touching the filesystem.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the on-disk scaffold for a new store rooted at `root`: the
    /// `objects` and `refs` directories and the `HEAD` file pointing at the
    /// default branch.
    ///
    /// # Errors
    ///
    /// This function will fail if any of the directories or the `HEAD` file
    /// couldn't be created.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::open(root);
        fs::create_dir_all(store.objects_path())?;
        fs::create_dir_all(store.refs_path())?;
        fs::write(store.head_path(), Constants::default_head_content())?;
        log::debug!("initialized store at {:?}", store.root);
        Ok(store)
    }

    pub fn objects_path(&self) -> PathBuf {
        self.root.join(Constants::OBJECTS_FOLDER_NAME)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.root.join(Constants::REFS_FOLDER_NAME)
    }

    pub fn head_path(&self) -> PathBuf {
        self.root.join(Constants::HEAD_FILE_NAME)
    }

    /// Splits an address into the folder and file the object is stored at:
    /// the first two hex characters name the folder, the remaining 38 the
    /// file.
    fn object_paths(&self, hash: &Hash) -> (PathBuf, PathBuf) {
        let hex = hash.to_string();
        let folder_path = self.objects_path().join(&hex[..2]);
        let file_path = folder_path.join(&hex[2..]);
        (folder_path, file_path)
    }

    /// Writes a serialized and compressed version of the object into the
    /// store, returning the address used to find it.
    ///
    /// Writing an object that is already stored is a no-op success: the
    /// address guarantees the bytes on disk are identical.
    ///
    /// # Errors
    ///
    /// This function will fail if the object couldn't be encoded or
    /// compressed, or if creating and writing the object file wasn't
    /// possible.
    pub fn write(&self, object: &Object) -> Result<Hash> {
        let bytes = object.as_bytes()?;
        let hash = Hash::digest(&bytes);

        let (folder_path, file_path) = self.object_paths(&hash);
        if file_path.exists() {
            log::debug!("object {} already stored", hash);
            return Ok(hash);
        }

        fs::create_dir_all(folder_path)?;

        // The whole compressed buffer goes down in one write call, so a
        // concurrent reader never observes a torn object file.
        fs::write(&file_path, zlib::compress(&bytes)?)?;
        log::debug!("wrote {} object {}", object.kind, hash);

        Ok(hash)
    }

    /// Reads the object stored under `hash`, decompressing it and decoding
    /// its envelope.
    ///
    /// # Errors
    ///
    /// This function will fail with `Error::ObjectNotFound` if no object file
    /// exists for the address, `Error::CorruptObject` if the file is not a
    /// valid zlib stream or its envelope is malformed, and `Error::Io` for
    /// any other filesystem error.
    pub fn read(&self, hash: &Hash) -> Result<Object> {
        let (_, file_path) = self.object_paths(hash);

        let compressed = fs::read(&file_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ObjectNotFound(*hash),
            _ => Error::Io(e),
        })?;

        Object::from_bytes(&zlib::decompress(&compressed)?)
    }
}

// Tests
