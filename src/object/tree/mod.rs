mod builder;
#[allow(clippy::module_inception)]
mod tree;

pub use builder::build_tree;
pub use tree::{FileMode, TreeEntry, as_bytes, from_bytes};
