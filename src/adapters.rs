use crate::model;

pub mod gcs;
pub mod mock;
pub mod s3;

// TODO wrap the store calls with bounded retries
pub trait ObjectAdapter: Send + Sync {
    fn store_put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::contents::ContentsError>;

    /// `None` when no object exists at the key.
    fn store_get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Option<Vec<u8>>, model::contents::ContentsError>;

    /// Objects under the prefix, in the store's key order. Pagination is
    /// drained internally; `limit` caps the returned records.
    fn store_list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        limit: Option<i32>,
    ) -> Result<Vec<model::store::StoreObject>, model::contents::ContentsError>;

    fn store_delete_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<(), model::contents::ContentsError>;
}
