//! Contents backend for a notebook server, keeping documents in a flat
//! object store (S3 or GCS). A document path maps to the key `prefix + path`;
//! a directory is nothing but a key prefix ending in `/`, so hierarchy
//! exists only as a naming convention over the flat keyspace.

pub mod adapters;
pub mod contents;
pub mod manager;
pub mod model;
pub mod notebook;
pub mod util;

pub use contents::{ContentsConfig, ObjectContentsManager};
pub use manager::ContentsManager;
pub use model::contents::{Content, ContentModel, ContentsError, EntryType, Format};
pub use model::store::StoreObject;
