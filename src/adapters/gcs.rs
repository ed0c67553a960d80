use std::time::{Duration, SystemTime};

use google_cloud_storage::http::objects::{
    delete::DeleteObjectRequest,
    download::Range,
    get::GetObjectRequest,
    list::ListObjectsRequest,
    upload::{Media, UploadObjectRequest, UploadType},
};

use crate::{adapters, model, util};

impl adapters::ObjectAdapter for google_cloud_storage::client::Client {
    fn store_put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::contents::ContentsError> {
        let req = UploadObjectRequest {
            bucket: bucket.to_string(),
            ..Default::default()
        };

        util::poll::wait(self.upload_object(
            &req,
            body,
            &UploadType::Simple(Media::new(key.to_string())),
        ))
        .map_err(|err| {
            model::contents::ContentsError::StoreAccess(format!(
                "failed to put_object at: {}, {}",
                key, err
            ))
        })?;

        Ok(())
    }

    fn store_get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<Option<Vec<u8>>, model::contents::ContentsError> {
        let req = GetObjectRequest {
            bucket: bucket.to_string(),
            object: key.to_string(),
            ..Default::default()
        };

        let bytes = match util::poll::wait(self.download_object(&req, &Range::default())) {
            Err(google_cloud_storage::http::Error::Response(err)) => {
                if err.code == 404 {
                    return Ok(None);
                }

                return Err(model::contents::ContentsError::StoreAccess(format!(
                    "failed to get_object: {}, {}",
                    key, err
                )));
            }
            Err(err) => {
                return Err(model::contents::ContentsError::StoreAccess(format!(
                    "failed to get_object: {}, {}",
                    key, err
                )));
            }
            Ok(bytes) => bytes,
        };

        Ok(Some(bytes))
    }

    fn store_list_objects(
        &self,
        bucket: &str,
        prefix: &str,
        limit: Option<i32>,
    ) -> Result<Vec<model::store::StoreObject>, model::contents::ContentsError> {
        let mut objects = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let req = ListObjectsRequest {
                bucket: bucket.to_string(),
                prefix: Some(prefix.to_string()),
                page_token: continuation_token.clone(),
                max_results: limit,
                ..Default::default()
            };

            let lo = util::poll::wait(self.list_objects(&req)).map_err(|err| {
                model::contents::ContentsError::StoreAccess(format!(
                    "failed to list_objects at: {}, {}",
                    prefix, err
                ))
            })?;

            if let Some(objs) = lo.items {
                for obj in objs {
                    let updated = obj.updated.unwrap_or(time::OffsetDateTime::now_utc());
                    let last_modified = SystemTime::UNIX_EPOCH
                        + Duration::from_secs(updated.unix_timestamp() as u64);

                    objects.push(model::store::StoreObject {
                        key: obj.name,
                        last_modified,
                    });
                }
            }

            if let Some(max) = limit {
                if objects.len() >= max as usize {
                    objects.truncate(max as usize);
                    break;
                }
            }

            continuation_token = lo.next_page_token;
            if continuation_token.is_none() {
                break;
            }
        }

        Ok(objects)
    }

    fn store_delete_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<(), model::contents::ContentsError> {
        let req = DeleteObjectRequest {
            bucket: bucket.to_string(),
            object: key.to_string(),
            ..Default::default()
        };

        util::poll::wait(self.delete_object(&req)).map_err(|err| {
            model::contents::ContentsError::StoreAccess(format!(
                "failed to delete_object: {}, {}",
                key, err
            ))
        })?;

        Ok(())
    }
}
