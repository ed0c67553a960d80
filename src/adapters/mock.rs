use std::{collections::BTreeMap, sync::Mutex, time::SystemTime};

use crate::{adapters, model};

struct MockObject {
    body: Vec<u8>,
    last_modified: SystemTime,
}

/// In-memory store for tests and host test harnesses. Keys are held in a
/// `BTreeMap` so listings come back in key order, the order the existence
/// resolver relies on from the real stores.
pub struct MockClient {
    objects: Mutex<BTreeMap<String, MockObject>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl adapters::ObjectAdapter for MockClient {
    fn store_put_object(
        &self,
        _bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), model::contents::ContentsError> {
        let mut objects = self.objects.lock().map_err(|err| {
            model::contents::ContentsError::StoreAccess(format!(
                "failed to acquire `objects` guard: {}",
                err
            ))
        })?;

        objects.insert(
            key.to_string(),
            MockObject {
                body,
                last_modified: SystemTime::now(),
            },
        );

        Ok(())
    }

    fn store_get_object(
        &self,
        _bucket: &str,
        key: &str,
    ) -> Result<Option<Vec<u8>>, model::contents::ContentsError> {
        let objects = self.objects.lock().map_err(|err| {
            model::contents::ContentsError::StoreAccess(format!(
                "failed to acquire `objects` guard: {}",
                err
            ))
        })?;

        Ok(objects.get(key).map(|object| object.body.clone()))
    }

    fn store_list_objects(
        &self,
        _bucket: &str,
        prefix: &str,
        limit: Option<i32>,
    ) -> Result<Vec<model::store::StoreObject>, model::contents::ContentsError> {
        let objects = self.objects.lock().map_err(|err| {
            model::contents::ContentsError::StoreAccess(format!(
                "failed to acquire `objects` guard: {}",
                err
            ))
        })?;

        let mut listed = Vec::new();
        for (key, object) in objects.iter() {
            if !key.starts_with(prefix) {
                continue;
            }

            listed.push(model::store::StoreObject {
                key: key.clone(),
                last_modified: object.last_modified,
            });

            if let Some(max) = limit {
                if listed.len() >= max as usize {
                    break;
                }
            }
        }

        Ok(listed)
    }

    fn store_delete_object(
        &self,
        _bucket: &str,
        key: &str,
    ) -> Result<(), model::contents::ContentsError> {
        let mut objects = self.objects.lock().map_err(|err| {
            model::contents::ContentsError::StoreAccess(format!(
                "failed to acquire `objects` guard: {}",
                err
            ))
        })?;

        objects.remove(key);

        Ok(())
    }
}
