use std::time::SystemTime;

/// One record from a prefix listing, the shape consumed from the store client.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreObject {
    pub key: String,
    pub last_modified: SystemTime,
}
