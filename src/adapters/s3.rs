use std::time::{Duration, SystemTime};

use aws_sdk_s3::primitives::ByteStream;

use crate::{adapters, model, util};

impl adapters::ObjectAdapter for aws_sdk_s3::Client {
    fn store_put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::contents::ContentsError> {
        let req = self
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body));

        util::poll::wait(req.send()).map_err(|err| {
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
        let req = self.get_object().bucket(bucket).key(key);

        let output = match util::poll::wait(req.send()) {
            Err(err) => {
                if let Some(svc_err) = err.as_service_error() {
                    if svc_err.is_no_such_key() {
                        return Ok(None);
                    }
                }

                return Err(model::contents::ContentsError::StoreAccess(format!(
                    "failed to get_object: {}, {}",
                    key, err
                )));
            }
            Ok(output) => output,
        };

        let bytes = util::poll::wait(output.body.collect()).map_err(|err| {
            model::contents::ContentsError::StoreAccess(format!(
                "failed to collect body: {}, {}",
                key, err
            ))
        })?;

        Ok(Some(bytes.into_bytes().to_vec()))
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
            let mut req = self.list_objects_v2().bucket(bucket).prefix(prefix);

            if let Some(max) = limit {
                req = req.max_keys(max);
            }

            if let Some(tok) = continuation_token {
                req = req.continuation_token(tok);
            }

            let lo = util::poll::wait(req.send()).map_err(|err| {
                model::contents::ContentsError::StoreAccess(format!(
                    "failed to list_objects at: {}, {}",
                    prefix, err
                ))
            })?;

            for o in lo.contents() {
                let key = o.key().unwrap_or("").to_string();
                let last_modified = match o.last_modified() {
                    Some(ts) => {
                        SystemTime::UNIX_EPOCH + Duration::new(ts.secs() as u64, ts.subsec_nanos())
                    }
                    None => SystemTime::UNIX_EPOCH,
                };

                objects.push(model::store::StoreObject { key, last_modified });
            }

            if let Some(max) = limit {
                if objects.len() >= max as usize {
                    objects.truncate(max as usize);
                    break;
                }
            }

            continuation_token = lo.next_continuation_token().map(|tok| tok.to_string());
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
        let req = self.delete_object().bucket(bucket).key(key);

        util::poll::wait(req.send()).map_err(|err| {
            model::contents::ContentsError::StoreAccess(format!(
                "failed to delete_object: {}, {}",
                key, err
            ))
        })?;

        Ok(())
    }
}
