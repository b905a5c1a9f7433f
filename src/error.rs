use crate::hashing::Hash;

/// Enum intended to represent all the different error types that there could be
/// when working with the object store.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid object address: {0:?}")]
    InvalidAddress(String),
    #[error("object {0} does not exist in the store")]
    ObjectNotFound(Hash),
    #[error("corrupt object: {0}")]
    CorruptObject(String),
    #[error("i/o operation error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction of the result type where the error is always an Error from this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
