use tracing::{error, info, span, Level};

use crate::contents::ObjectContentsManager;
use crate::model::contents::{Content, ContentModel, ContentsError, EntryType, Format};
use crate::{notebook, util};

/// Host-facing contract of a contents backend. Paths are `/`-separated
/// document paths relative to the serving root; a trailing `/` denotes a
/// directory and the empty string denotes the root itself.
pub trait ContentsManager {
    /// Whether the entry at `path` is hidden. A flat object store has no
    /// hidden flag, so backends may be constantly false.
    fn is_hidden(&self, path: &str) -> bool;

    /// True only if an object exists at exactly the path's key.
    fn file_exists(&self, path: &str) -> Result<bool, ContentsError>;

    /// True only if `path` ends with the separator and at least one key
    /// lists under it.
    fn dir_exists(&self, path: &str) -> Result<bool, ContentsError>;

    /// Check for file or directory existence.
    fn exists(&self, path: &str) -> Result<bool, ContentsError> {
        if path.ends_with('/') {
            return self.dir_exists(path);
        }

        self.file_exists(path)
    }

    /// Fetch the model at `path`. `entry_type` forces the interpretation of
    /// the path; when absent it is inferred from the path shape. `format` is
    /// the caller's requested payload format for plain files.
    fn get(
        &self,
        path: &str,
        content: bool,
        entry_type: Option<EntryType>,
        format: Option<Format>,
    ) -> Result<ContentModel, ContentsError>;

    /// Write the model's content at `path` and return the fresh shallow
    /// model of what was stored.
    fn save(&self, model: &ContentModel, path: &str) -> Result<ContentModel, ContentsError>;

    /// Remove the object backing `path`.
    fn delete(&self, path: &str) -> Result<(), ContentsError>;

    /// Copy the file at `from_path`. When `to_path` is absent the
    /// destination is a sibling path with `-Copy` before the extension.
    fn copy(
        &self,
        from_path: &str,
        to_path: Option<&str>,
    ) -> Result<ContentModel, ContentsError>;

    /// Description of the backend for the host's startup banner.
    fn info_string(&self) -> String;
}

impl ContentsManager for ObjectContentsManager {
    fn is_hidden(&self, path: &str) -> bool {
        let span = span!(Level::INFO, "is_hidden", context = "is_hidden");
        let _e = span.enter();
        info!(path = path, "called");

        false
    }

    fn file_exists(&self, path: &str) -> Result<bool, ContentsError> {
        let span = span!(Level::INFO, "file_exists", context = "file_exists");
        let _e = span.enter();
        info!(path = path, "called");

        let key = self.object_key(path);
        let objects = self.client.store_list_objects(&self.bucket, &key, Some(1))?;

        match objects.first() {
            None => Ok(false),
            Some(object) => Ok(object.key == key),
        }
    }

    fn dir_exists(&self, path: &str) -> Result<bool, ContentsError> {
        let span = span!(Level::INFO, "dir_exists", context = "dir_exists");
        let _e = span.enter();
        info!(path = path, "called");

        if !path.ends_with('/') {
            return Ok(false);
        }

        let key = self.object_key(path);
        let objects = self.client.store_list_objects(&self.bucket, &key, Some(1))?;

        Ok(!objects.is_empty())
    }

    fn get(
        &self,
        path: &str,
        content: bool,
        entry_type: Option<EntryType>,
        format: Option<Format>,
    ) -> Result<ContentModel, ContentsError> {
        let span = span!(Level::INFO, "get", context = "get");
        let _e = span.enter();
        info!(
            path = path,
            content = content,
            entry_type = ?entry_type,
            format = ?format,
            "called"
        );

        if !self.exists(path)? {
            error!(
                error_message = "failed to find path",
                error_group = "not_found",
                path = path
            );
            return Err(ContentsError::NotFound(path.to_string()));
        }

        if path.ends_with('/') || path.is_empty() {
            if let Some(requested) = entry_type {
                if requested != EntryType::Directory {
                    error!(
                        error_message = "path is a directory",
                        error_group = "bad_type",
                        path = path,
                        requested = %requested
                    );
                    return Err(ContentsError::BadType(format!(
                        "{} is a directory, not a {}",
                        path, requested
                    )));
                }
            }

            return self.dir_model(path, content);
        }

        if entry_type == Some(EntryType::Notebook)
            || (entry_type.is_none() && path.ends_with(notebook::NOTEBOOK_EXTENSION))
        {
            return self.notebook_model(path, content);
        }

        if entry_type == Some(EntryType::Directory) {
            error!(
                error_message = "path is not a directory",
                error_group = "bad_type",
                path = path
            );
            return Err(ContentsError::BadType(format!(
                "{} is not a directory",
                path
            )));
        }

        self.file_model(path, content, format)
    }

    fn save(&self, model: &ContentModel, path: &str) -> Result<ContentModel, ContentsError> {
        let span = span!(Level::INFO, "save", context = "save");
        let _e = span.enter();
        info!(path = path, entry_type = %model.entry_type, "called");

        // path shape and model type must agree before anything is written
        if model.entry_type != EntryType::Directory && (path.is_empty() || path.ends_with('/')) {
            error!(
                error_message = "path is a directory",
                error_group = "bad_type",
                path = path,
                requested = %model.entry_type
            );
            return Err(ContentsError::BadType(format!(
                "{} is a directory, not a {}",
                path, model.entry_type
            )));
        }

        match model.entry_type {
            EntryType::Directory => {
                if !path.is_empty() && !path.ends_with('/') {
                    error!(
                        error_message = "directory path must end with the separator",
                        error_group = "bad_type",
                        path = path
                    );
                    return Err(ContentsError::BadType(format!(
                        "{} is not a directory",
                        path
                    )));
                }

                self.write_file(path, Vec::new())?;
            }
            EntryType::Notebook => {
                let document = match &model.content {
                    Some(Content::Notebook(document)) => document,
                    _ => {
                        error!(
                            error_message = "no notebook content provided",
                            error_group = "bad_type",
                            path = path
                        );
                        return Err(ContentsError::BadType(format!(
                            "no notebook content provided: {}",
                            path
                        )));
                    }
                };

                notebook::validate_notebook(document, path)?;

                let body = serde_json::to_vec(document).map_err(|err| {
                    ContentsError::InvalidNotebook(format!(
                        "failed to serialize notebook: {}, {}",
                        path, err
                    ))
                })?;

                self.write_file(path, body)?;
            }
            EntryType::File => {
                let bytes = match &model.content {
                    Some(Content::Raw(bytes)) => bytes.clone(),
                    _ => {
                        error!(
                            error_message = "no file content provided",
                            error_group = "bad_type",
                            path = path
                        );
                        return Err(ContentsError::BadType(format!(
                            "no file content provided: {}",
                            path
                        )));
                    }
                };

                self.write_file(path, bytes)?;
            }
        }

        self.get(path, false, Some(model.entry_type), None)
    }

    fn delete(&self, path: &str) -> Result<(), ContentsError> {
        let span = span!(Level::INFO, "delete", context = "delete");
        let _e = span.enter();
        info!(path = path, "called");

        let key = self.object_key(path);

        self.client.store_delete_object(&self.bucket, &key)
    }

    fn copy(
        &self,
        from_path: &str,
        to_path: Option<&str>,
    ) -> Result<ContentModel, ContentsError> {
        let span = span!(Level::INFO, "copy", context = "copy");
        let _e = span.enter();
        info!(from_path = from_path, to_path = ?to_path, "called");

        if from_path.ends_with('/') || from_path.is_empty() {
            error!(
                error_message = "directories cannot be copied",
                error_group = "bad_type",
                from_path = from_path
            );
            return Err(ContentsError::BadType(format!(
                "directories cannot be copied: {}",
                from_path
            )));
        }

        if !self.file_exists(from_path)? {
            error!(
                error_message = "failed to find source path",
                error_group = "not_found",
                from_path = from_path
            );
            return Err(ContentsError::NotFound(from_path.to_string()));
        }

        let destination = match to_path {
            None => util::object::copy_destination(from_path),
            Some(to_path) => to_path.to_string(),
        };

        if destination.is_empty() || destination.ends_with('/') {
            error!(
                error_message = "destination is a directory",
                error_group = "bad_type",
                to_path = %destination
            );
            return Err(ContentsError::BadType(format!(
                "cannot copy to a directory: {}",
                destination
            )));
        }

        let bytes = self.read_file(from_path)?;
        self.write_file(&destination, bytes)?;

        self.get(&destination, false, None, None)
    }

    fn info_string(&self) -> String {
        let span = span!(Level::INFO, "info_string", context = "info_string");
        let _e = span.enter();
        info!("called");

        format!(
            "Serving notebooks from object storage. bucket name: {}",
            self.bucket
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::adapters;
    use crate::contents::ContentsConfig;

    use super::*;

    fn test_manager(prefix: &str) -> ObjectContentsManager {
        let _ = tracing_subscriber::fmt()
            .json()
            .with_test_writer()
            .try_init();

        let config = ContentsConfig {
            bucket: "dummy-bucket".to_string(),
            prefix: prefix.to_string(),
        };

        ObjectContentsManager::with_client(config, Box::new(adapters::mock::MockClient::new()))
            .expect("failed to build manager")
    }

    fn sample_notebook() -> serde_json::Value {
        json!({
            "nbformat": 4,
            "nbformat_minor": 5,
            "metadata": {},
            "cells": [
                {
                    "cell_type": "markdown",
                    "metadata": {},
                    "source": "# Title"
                },
                {
                    "cell_type": "code",
                    "metadata": {"trusted": false},
                    "source": ["x = 1"],
                    "outputs": [],
                    "execution_count": null
                }
            ]
        })
    }

    #[test]
    fn test_is_hidden_always_false() {
        let manager = test_manager("nb/");

        let cases = vec![
            "",
            "/leading",
            ".hidden",
            ".hidden/",
            "dir/.secret.ipynb",
            "a.txt",
        ];

        for path in cases {
            assert!(!manager.is_hidden(path), "failed for case: {}", path);
        }
    }

    #[test]
    fn test_file_exists_requires_exact_key() {
        let manager = test_manager("nb/");
        manager.write_file("foo", b"1".to_vec()).unwrap();
        manager.write_file("foobar", b"2".to_vec()).unwrap();

        let cases = vec![
            ("foo", true),
            ("foobar", true),
            ("fo", false),
            ("foob", false),
            ("fooz", false),
        ];

        for (path, expected) in cases {
            assert_eq!(
                manager.file_exists(path).unwrap(),
                expected,
                "failed for case: {}",
                path
            );
        }
    }

    #[test]
    fn test_dir_exists_requires_trailing_separator() {
        let manager = test_manager("nb/");
        manager.write_file("dir/a.txt", b"1".to_vec()).unwrap();

        let cases = vec![
            ("dir/", true),
            ("dir", false),
            ("di/", false),
            ("other/", false),
            ("", false),
        ];

        for (path, expected) in cases {
            assert_eq!(
                manager.dir_exists(path).unwrap(),
                expected,
                "failed for case: {}",
                path
            );
        }
    }

    #[test]
    fn test_exists_dispatches_on_separator() {
        let manager = test_manager("nb/");
        manager.write_file("dir/a.txt", b"1".to_vec()).unwrap();
        manager.write_file("note.ipynb", b"{}".to_vec()).unwrap();

        let cases = vec![
            ("note.ipynb", true),
            ("dir/", true),
            // no object at exactly `dir`, only under it
            ("dir", false),
            // no root marker object has been written
            ("", false),
            ("missing.txt", false),
        ];

        for (path, expected) in cases {
            assert_eq!(
                manager.exists(path).unwrap(),
                expected,
                "failed for case: {}",
                path
            );
        }
    }

    #[test]
    fn test_root_is_reachable_after_directory_save() {
        let manager = test_manager("nb/");

        let marker = ContentModel::for_save(EntryType::Directory, None);
        manager.save(&marker, "").unwrap();
        manager.write_file("a.txt", b"1".to_vec()).unwrap();

        assert!(manager.exists("").unwrap());

        let model = manager.get("", true, None, None).unwrap();
        let children = model.contents.expect("expected children");

        assert_eq!(model.entry_type, EntryType::Directory);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].path, "a.txt");
    }

    #[test]
    fn test_get_missing_path_is_not_found_for_all_requests() {
        let manager = test_manager("nb/");

        let types = vec![
            None,
            Some(EntryType::File),
            Some(EntryType::Notebook),
            Some(EntryType::Directory),
        ];
        let formats = vec![
            None,
            Some(Format::Json),
            Some(Format::Text),
            Some(Format::Base64),
        ];

        for entry_type in &types {
            for format in &formats {
                let err = manager
                    .get("ghost.txt", true, *entry_type, *format)
                    .unwrap_err();

                assert_eq!(
                    err.status_code(),
                    404,
                    "failed for case: {:?} {:?}",
                    entry_type,
                    format
                );
                assert_eq!(
                    err.to_string(),
                    "No such file or directory: ghost.txt",
                    "failed for case: {:?} {:?}",
                    entry_type,
                    format
                );
            }
        }

        let err = manager.get("ghost/", true, None, None).unwrap_err();
        assert!(matches!(err, ContentsError::NotFound(_)));
    }

    #[test]
    fn test_get_directory_with_file_type_is_bad_type() {
        let manager = test_manager("nb/");
        manager.write_file("dir/a.txt", b"1".to_vec()).unwrap();

        let cases = vec![
            (EntryType::File, "dir/ is a directory, not a file"),
            (EntryType::Notebook, "dir/ is a directory, not a notebook"),
        ];

        for (requested, expected) in cases {
            let err = manager.get("dir/", true, Some(requested), None).unwrap_err();

            assert_eq!(err.status_code(), 400, "failed for case: {}", requested);
            assert_eq!(
                err.reason(),
                Some("bad type"),
                "failed for case: {}",
                requested
            );
            assert_eq!(err.to_string(), expected, "failed for case: {}", requested);
        }
    }

    #[test]
    fn test_get_file_with_directory_type_is_bad_type() {
        let manager = test_manager("nb/");
        manager.write_file("a.txt", b"1".to_vec()).unwrap();
        manager.write_file("n.ipynb", b"{}".to_vec()).unwrap();

        for path in ["a.txt", "n.ipynb"] {
            let err = manager
                .get(path, false, Some(EntryType::Directory), None)
                .unwrap_err();

            assert_eq!(err.status_code(), 400, "failed for case: {}", path);
            assert_eq!(err.reason(), Some("bad type"), "failed for case: {}", path);
            assert_eq!(
                err.to_string(),
                format!("{} is not a directory", path),
                "failed for case: {}",
                path
            );
        }
    }

    #[test]
    fn test_file_round_trip_preserves_bytes() {
        let manager = test_manager("nb/");
        let body = vec![0, 159, 146, 150, 255];

        let model = ContentModel::for_save(EntryType::File, Some(Content::Raw(body.clone())));
        let saved = manager.save(&model, "blob.bin").unwrap();

        assert_eq!(saved.entry_type, EntryType::File);
        assert_eq!(saved.path, "blob.bin");
        assert_eq!(saved.name, "blob.bin");
        assert_eq!(saved.content, None);

        let fetched = manager.get("blob.bin", true, None, None).unwrap();

        assert_eq!(fetched.entry_type, EntryType::File);
        assert_eq!(fetched.content, Some(Content::Raw(body)));
    }

    #[test]
    fn test_notebook_round_trip_preserves_document() {
        let manager = test_manager("nb/");
        let document = sample_notebook();

        let model = ContentModel::for_save(
            EntryType::Notebook,
            Some(Content::Notebook(document.clone())),
        );
        let saved = manager.save(&model, "analysis.ipynb").unwrap();

        assert_eq!(saved.entry_type, EntryType::Notebook);
        assert_eq!(saved.content, None);

        let fetched = manager.get("analysis.ipynb", true, None, None).unwrap();

        assert_eq!(fetched.entry_type, EntryType::Notebook);
        assert_eq!(fetched.format, Some(Format::Json));
        assert_eq!(fetched.content, Some(Content::Notebook(document)));
    }

    #[test]
    fn test_get_notebook_by_requested_type() {
        let manager = test_manager("nb/");
        let body = serde_json::to_vec(&sample_notebook()).unwrap();

        let model = ContentModel::for_save(EntryType::File, Some(Content::Raw(body)));
        manager.save(&model, "data.json").unwrap();

        let fetched = manager
            .get("data.json", true, Some(EntryType::Notebook), None)
            .unwrap();

        assert_eq!(fetched.entry_type, EntryType::Notebook);
        assert_eq!(fetched.format, Some(Format::Json));
        assert_eq!(fetched.content, Some(Content::Notebook(sample_notebook())));
    }

    #[test]
    fn test_get_file_passes_format_through() {
        let manager = test_manager("nb/");
        manager.write_file("a.txt", b"1".to_vec()).unwrap();

        let model = manager
            .get("a.txt", true, None, Some(Format::Base64))
            .unwrap();

        assert_eq!(model.format, Some(Format::Base64));
        assert_eq!(model.content, Some(Content::Raw(b"1".to_vec())));
    }

    #[test]
    fn test_get_directory_lists_children() {
        let manager = test_manager("nb/");
        manager.write_file("dir/a", b"1".to_vec()).unwrap();
        manager.write_file("dir/b", b"2".to_vec()).unwrap();

        let model = manager.get("dir/", true, None, None).unwrap();
        let children = model.contents.expect("expected children");

        assert_eq!(model.entry_type, EntryType::Directory);
        assert_eq!(model.format, Some(Format::Json));
        assert_eq!(children.len(), 2);

        assert_eq!(children[0].path, "dir/a");
        assert_eq!(children[0].name, "a");
        assert_eq!(children[0].content, None);
        assert_eq!(children[0].contents, None);

        assert_eq!(children[1].path, "dir/b");
        assert_eq!(children[1].name, "b");
        assert_eq!(children[1].content, None);
        assert_eq!(children[1].contents, None);

        let explicit = manager
            .get("dir/", true, Some(EntryType::Directory), None)
            .unwrap();
        assert_eq!(explicit.contents.map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_get_directory_lists_nested_keys_flat() {
        let manager = test_manager("nb/");
        manager.write_file("dir/a", b"1".to_vec()).unwrap();
        manager.write_file("dir/sub/", Vec::new()).unwrap();
        manager.write_file("dir/sub/c.ipynb", b"{}".to_vec()).unwrap();

        let model = manager.get("dir/", true, None, None).unwrap();
        let children = model.contents.expect("expected children");

        assert_eq!(children.len(), 3);
        assert_eq!(children[0].path, "dir/a");
        assert_eq!(children[0].entry_type, EntryType::File);
        assert_eq!(children[1].path, "dir/sub/");
        assert_eq!(children[1].entry_type, EntryType::Directory);
        assert_eq!(children[2].path, "dir/sub/c.ipynb");
        assert_eq!(children[2].entry_type, EntryType::Notebook);
    }

    #[test]
    fn test_save_directory_requires_separator() {
        let manager = test_manager("nb/");
        let marker = ContentModel::for_save(EntryType::Directory, None);

        let err = manager.save(&marker, "dir").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.reason(), Some("bad type"));

        let saved = manager.save(&marker, "dir/").unwrap();
        assert_eq!(saved.entry_type, EntryType::Directory);
        assert!(manager.dir_exists("dir/").unwrap());

        // the marker object is not a child of its own directory
        let model = manager.get("dir/", true, None, None).unwrap();
        assert_eq!(model.contents, Some(Vec::new()));
    }

    #[test]
    fn test_save_file_at_directory_path_is_bad_type() {
        let manager = test_manager("nb/");

        let cases = vec![
            (
                ContentModel::for_save(EntryType::File, Some(Content::Raw(b"data".to_vec()))),
                "dir/",
                "dir/ is a directory, not a file",
            ),
            (
                ContentModel::for_save(
                    EntryType::Notebook,
                    Some(Content::Notebook(sample_notebook())),
                ),
                "dir/",
                "dir/ is a directory, not a notebook",
            ),
            (
                ContentModel::for_save(EntryType::File, Some(Content::Raw(b"x".to_vec()))),
                "",
                " is a directory, not a file",
            ),
        ];

        for (model, path, expected) in cases {
            let err = manager.save(&model, path).unwrap_err();

            assert_eq!(err.status_code(), 400, "failed for case: {}", expected);
            assert_eq!(err.reason(), Some("bad type"), "failed for case: {}", expected);
            assert_eq!(err.to_string(), expected, "failed for case: {}", expected);
        }

        // nothing persisted on the rejected saves
        assert!(!manager.dir_exists("dir/").unwrap());
        assert!(!manager.exists("").unwrap());
    }

    #[test]
    fn test_save_without_content_is_bad_type() {
        let manager = test_manager("nb/");

        let cases = vec![
            (
                ContentModel::for_save(EntryType::File, None),
                "no file content provided: a.txt",
            ),
            (
                ContentModel::for_save(
                    EntryType::File,
                    Some(Content::Notebook(sample_notebook())),
                ),
                "no file content provided: a.txt",
            ),
            (
                ContentModel::for_save(EntryType::Notebook, None),
                "no notebook content provided: a.txt",
            ),
            (
                ContentModel::for_save(EntryType::Notebook, Some(Content::Raw(b"{}".to_vec()))),
                "no notebook content provided: a.txt",
            ),
        ];

        for (model, expected) in cases {
            let err = manager.save(&model, "a.txt").unwrap_err();

            assert_eq!(err.status_code(), 400, "failed for case: {}", expected);
            assert_eq!(err.to_string(), expected, "failed for case: {}", expected);
        }

        assert!(!manager.file_exists("a.txt").unwrap());
    }

    #[test]
    fn test_save_invalid_notebook_is_rejected() {
        let manager = test_manager("nb/");

        let documents = vec![
            json!({"nbformat": 3, "nbformat_minor": 0, "metadata": {}, "cells": []}),
            json!({"nbformat": 4, "nbformat_minor": 5, "metadata": {}}),
        ];

        for document in documents {
            let model = ContentModel::for_save(
                EntryType::Notebook,
                Some(Content::Notebook(document.clone())),
            );

            let err = manager.save(&model, "bad.ipynb").unwrap_err();
            assert!(
                matches!(err, ContentsError::InvalidNotebook(_)),
                "failed for case: {}",
                document
            );
        }

        // nothing was written for the rejected documents
        assert!(!manager.file_exists("bad.ipynb").unwrap());
    }

    #[test]
    fn test_delete_removes_object() {
        let manager = test_manager("nb/");
        manager.write_file("tmp.txt", b"1".to_vec()).unwrap();

        assert!(manager.file_exists("tmp.txt").unwrap());

        manager.delete("tmp.txt").unwrap();

        assert!(!manager.file_exists("tmp.txt").unwrap());
        let err = manager.get("tmp.txt", true, None, None).unwrap_err();
        assert!(matches!(err, ContentsError::NotFound(_)));

        // deleting an absent key is not an error
        manager.delete("tmp.txt").unwrap();
    }

    #[test]
    fn test_copy_to_explicit_destination() {
        let manager = test_manager("nb/");
        manager.write_file("a.txt", b"payload".to_vec()).unwrap();

        let model = manager.copy("a.txt", Some("b.txt")).unwrap();

        assert_eq!(model.path, "b.txt");
        assert_eq!(model.entry_type, EntryType::File);
        assert_eq!(model.content, None);

        let fetched = manager.get("b.txt", true, None, None).unwrap();
        assert_eq!(fetched.content, Some(Content::Raw(b"payload".to_vec())));
        assert!(manager.file_exists("a.txt").unwrap());
    }

    #[test]
    fn test_copy_derives_destination() {
        let manager = test_manager("nb/");

        let notebook_model = ContentModel::for_save(
            EntryType::Notebook,
            Some(Content::Notebook(sample_notebook())),
        );
        manager.save(&notebook_model, "report.ipynb").unwrap();
        manager.write_file("notes", b"n".to_vec()).unwrap();

        let cases = vec![
            ("report.ipynb", "report-Copy.ipynb", EntryType::Notebook),
            ("notes", "notes-Copy", EntryType::File),
        ];

        for (from_path, expected, entry_type) in cases {
            let model = manager.copy(from_path, None).unwrap();

            assert_eq!(model.path, expected, "failed for case: {}", from_path);
            assert_eq!(
                model.entry_type, entry_type,
                "failed for case: {}",
                from_path
            );
            assert!(
                manager.file_exists(expected).unwrap(),
                "failed for case: {}",
                from_path
            );
        }
    }

    #[test]
    fn test_copy_directory_is_bad_type() {
        let manager = test_manager("nb/");
        manager.write_file("dir/a.txt", b"1".to_vec()).unwrap();

        for path in ["dir/", ""] {
            let err = manager.copy(path, None).unwrap_err();

            assert_eq!(err.status_code(), 400, "failed for case: {}", path);
            assert_eq!(
                err.to_string(),
                format!("directories cannot be copied: {}", path),
                "failed for case: {}",
                path
            );
        }
    }

    #[test]
    fn test_copy_to_directory_destination_is_bad_type() {
        let manager = test_manager("nb/");
        manager.write_file("a.txt", b"payload".to_vec()).unwrap();

        for destination in ["dest/", ""] {
            let err = manager.copy("a.txt", Some(destination)).unwrap_err();

            assert_eq!(err.status_code(), 400, "failed for case: {}", destination);
            assert_eq!(
                err.reason(),
                Some("bad type"),
                "failed for case: {}",
                destination
            );
            assert_eq!(
                err.to_string(),
                format!("cannot copy to a directory: {}", destination),
                "failed for case: {}",
                destination
            );
        }

        // the rejected copies wrote nothing
        assert!(!manager.dir_exists("dest/").unwrap());

        let model = manager.copy("a.txt", None).unwrap();
        assert_eq!(model.path, "a-Copy.txt");
        assert_eq!(model.entry_type, EntryType::File);
    }

    #[test]
    fn test_copy_missing_source_is_not_found() {
        let manager = test_manager("nb/");

        let err = manager.copy("ghost.txt", Some("g.txt")).unwrap_err();

        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "No such file or directory: ghost.txt");
        assert!(!manager.file_exists("g.txt").unwrap());
    }

    #[test]
    fn test_info_string_names_bucket() {
        let manager = test_manager("nb/");

        assert_eq!(
            manager.info_string(),
            "Serving notebooks from object storage. bucket name: dummy-bucket"
        );
    }

    #[test]
    fn test_get_without_prefix() {
        let manager = test_manager("");
        manager.write_file("dir/a.txt", b"1".to_vec()).unwrap();

        let model = manager.get("dir/", true, None, None).unwrap();
        let children = model.contents.expect("expected children");

        assert_eq!(model.key, "dir/");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].path, "dir/a.txt");
        assert_eq!(children[0].key, "dir/a.txt");
    }
}
