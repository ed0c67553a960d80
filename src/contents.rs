use serde::Deserialize;
use tracing::debug;

use crate::model::contents::{Content, ContentModel, ContentsError, EntryType, Format};
use crate::model::store::StoreObject;
use crate::notebook;
use crate::{adapters, util};

/// Backend settings supplied by the host. `bucket` is a plain bucket name
/// (S3) or a provider URI (`s3://name`, `gs://name`); `prefix` is the key
/// prefix under which every document lives.
#[derive(Clone, Debug, Deserialize)]
pub struct ContentsConfig {
    pub bucket: String,
    #[serde(default)]
    pub prefix: String,
}

impl ContentsConfig {
    pub fn validate(&self) -> Result<(), ContentsError> {
        if util::object::parse_bucket_from_uri(&self.bucket).is_empty() {
            return Err(ContentsError::Config(
                "bucket name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

pub struct ObjectContentsManager {
    pub client: Box<dyn adapters::ObjectAdapter>,
    pub bucket: String,
    pub prefix: String,
}

impl ObjectContentsManager {
    /// Build a manager against the provider named by the configuration,
    /// with credentials from the ambient environment chain.
    pub fn new(config: ContentsConfig) -> Result<Self, ContentsError> {
        config.validate()?;

        let client: Box<dyn adapters::ObjectAdapter> =
            match util::object::parse_provider_from_uri(&config.bucket)? {
                util::object::Provider::AWS => {
                    let sdk_config = util::poll::wait(aws_config::load_from_env());
                    Box::new(aws_sdk_s3::Client::new(&sdk_config))
                }
                util::object::Provider::GCS => {
                    let client_config = util::poll::wait(
                        google_cloud_storage::client::ClientConfig::default().with_auth(),
                    )
                    .map_err(|err| {
                        ContentsError::Config(format!("failed to load gcs credentials: {}", err))
                    })?;
                    Box::new(google_cloud_storage::client::Client::new(client_config))
                }
            };

        Self::with_client(config, client)
    }

    /// Build a manager around an injected store client.
    pub fn with_client(
        config: ContentsConfig,
        client: Box<dyn adapters::ObjectAdapter>,
    ) -> Result<Self, ContentsError> {
        config.validate()?;

        Ok(Self {
            client,
            bucket: util::object::parse_bucket_from_uri(&config.bucket).to_string(),
            prefix: config.prefix,
        })
    }

    /// Store key for a document path: prefix + path, nothing else.
    pub fn object_key(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }

    pub fn read_file(&self, path: &str) -> Result<Vec<u8>, ContentsError> {
        let key = self.object_key(path);

        match self.client.store_get_object(&self.bucket, &key)? {
            None => Err(ContentsError::NotFound(path.to_string())),
            Some(bytes) => Ok(bytes),
        }
    }

    pub fn write_file(&self, path: &str, body: Vec<u8>) -> Result<(), ContentsError> {
        let key = self.object_key(path);

        self.client.store_put_object(&self.bucket, &key, body)
    }

    /// Build the common base of a contents model. `None` when nothing lists
    /// under the key, a state `get` normally rules out up front.
    pub fn base_model(
        &self,
        path: &str,
        entry_type: EntryType,
    ) -> Result<Option<ContentModel>, ContentsError> {
        let key = self.object_key(path);
        let objects = self.client.store_list_objects(&self.bucket, &key, Some(1))?;

        let object = match objects.first() {
            None => return Ok(None),
            Some(object) => object,
        };

        Ok(Some(ContentModel {
            bucket: self.bucket.clone(),
            key,
            name: util::object::basename(path).to_string(),
            path: path.to_string(),
            last_modified: object.last_modified,
            // the store records no separate creation time
            created: object.last_modified,
            entry_type,
            content: None,
            contents: None,
            format: None,
            mimetype: None,
        }))
    }

    /// Build a model for a plain file. The requested format is carried into
    /// the model as-is; the bytes are the store bytes, verbatim.
    pub fn file_model(
        &self,
        path: &str,
        content: bool,
        format: Option<Format>,
    ) -> Result<ContentModel, ContentsError> {
        let mut model = match self.base_model(path, EntryType::File)? {
            None => return Err(ContentsError::NotFound(path.to_string())),
            Some(model) => model,
        };

        model.format = format;

        if content {
            let bytes = self.read_file(path)?;
            model.content = Some(Content::Raw(bytes));
        }

        Ok(model)
    }

    /// Build a notebook model. When content is requested the stored bytes are
    /// parsed, run through trust marking, and the finished model validated.
    pub fn notebook_model(&self, path: &str, content: bool) -> Result<ContentModel, ContentsError> {
        let mut model = match self.base_model(path, EntryType::Notebook)? {
            None => return Err(ContentsError::NotFound(path.to_string())),
            Some(model) => model,
        };

        if content {
            let bytes = self.read_file(path)?;
            let mut document = notebook::parse_notebook(&bytes, notebook::NBFORMAT_VERSION)?;
            notebook::mark_trusted_cells(&mut document, path);

            model.content = Some(Content::Notebook(document));
            model.format = Some(Format::Json);

            notebook::validate_model(&model)?;
        }

        Ok(model)
    }

    /// Build a directory model. Children come from one listing under the key
    /// prefix, shallow, in the store's key order.
    pub fn dir_model(&self, path: &str, content: bool) -> Result<ContentModel, ContentsError> {
        let mut model = match self.base_model(path, EntryType::Directory)? {
            None => return Err(ContentsError::NotFound(path.to_string())),
            Some(model) => model,
        };

        if content {
            let key = self.object_key(path);
            let objects = self.client.store_list_objects(&self.bucket, &key, None)?;

            let mut children = Vec::new();
            for object in &objects {
                // the directory's own marker is not a child of itself
                if object.key == key {
                    continue;
                }

                children.push(self.child_model(object));
            }

            debug!(path = path, children = children.len(), "listed directory");

            model.contents = Some(children);
            model.format = Some(Format::Json);
        }

        Ok(model)
    }

    /// Shallow child model built straight from a listing record; same shape
    /// a content-less `get` of the child would produce.
    fn child_model(&self, object: &StoreObject) -> ContentModel {
        let child_path = object
            .key
            .strip_prefix(&self.prefix)
            .unwrap_or(&object.key)
            .to_string();

        let entry_type = if child_path.ends_with('/') {
            EntryType::Directory
        } else if child_path.ends_with(notebook::NOTEBOOK_EXTENSION) {
            EntryType::Notebook
        } else {
            EntryType::File
        };

        ContentModel {
            bucket: self.bucket.clone(),
            key: object.key.clone(),
            name: util::object::basename(&child_path).to_string(),
            path: child_path,
            last_modified: object.last_modified,
            created: object.last_modified,
            entry_type,
            content: None,
            contents: None,
            format: None,
            mimetype: None,
        }
    }
}
