//! URL modeling and filename derivation.
//!
//! The local name of an asset is the last `/`-separated segment of its URL,
//! taken verbatim. Nothing is decoded or validated here; callers that turn
//! the name into a path check it with [`is_addressable`] first.

mod path;

pub use path::{derive_filename, is_addressable};
