use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::model::contents::{Content, ContentModel, ContentsError};

/// Notebook format major version this backend reads and writes.
pub const NBFORMAT_VERSION: u64 = 4;

pub const NOTEBOOK_EXTENSION: &str = ".ipynb";

/// Required shape of an nbformat-4 document. Deserialized only to check the
/// stored bytes; the model keeps the full `Value` so unknown fields survive
/// round-trips untouched.
#[derive(Deserialize)]
struct NotebookSchema {
    nbformat: u64,
    nbformat_minor: u64,
    metadata: Value,
    cells: Vec<CellSchema>,
}

#[derive(Deserialize)]
struct CellSchema {
    cell_type: String,
    source: Value,
    metadata: Value,
}

/// Parse stored bytes into a notebook document. No version conversion: the
/// document must already carry the requested major version.
pub fn parse_notebook(bytes: &[u8], as_version: u64) -> Result<Value, ContentsError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|err| {
        ContentsError::InvalidNotebook(format!("failed to parse notebook: {}", err))
    })?;

    let major = value.get("nbformat").and_then(Value::as_u64).unwrap_or(0);
    if major != as_version {
        return Err(ContentsError::InvalidNotebook(format!(
            "unsupported nbformat version: {}, expected {}",
            major, as_version
        )));
    }

    Ok(value)
}

/// Stamp the trusted flag on every code cell. The store keeps no signature
/// database, so no cell is ever trusted.
pub fn mark_trusted_cells(notebook: &mut Value, path: &str) {
    debug!(path = path, "marking cells");

    let cells = match notebook.get_mut("cells").and_then(Value::as_array_mut) {
        None => return,
        Some(cells) => cells,
    };

    for cell in cells {
        if cell.get("cell_type").and_then(Value::as_str) != Some("code") {
            continue;
        }

        let cell = match cell.as_object_mut() {
            None => continue,
            Some(cell) => cell,
        };

        let metadata = cell
            .entry("metadata")
            .or_insert_with(|| Value::Object(Map::new()));

        if let Some(metadata) = metadata.as_object_mut() {
            metadata.insert("trusted".to_string(), Value::Bool(false));
        }
    }
}

/// Validate a notebook model before it is returned or persisted.
pub fn validate_model(model: &ContentModel) -> Result<(), ContentsError> {
    match &model.content {
        Some(Content::Notebook(value)) => validate_notebook(value, &model.path),
        _ => Err(ContentsError::InvalidNotebook(format!(
            "no notebook content to validate: {}",
            model.path
        ))),
    }
}

pub fn validate_notebook(value: &Value, path: &str) -> Result<(), ContentsError> {
    let notebook: NotebookSchema = serde_json::from_value(value.clone()).map_err(|err| {
        ContentsError::InvalidNotebook(format!("invalid notebook at {}: {}", path, err))
    })?;

    if notebook.nbformat != NBFORMAT_VERSION {
        return Err(ContentsError::InvalidNotebook(format!(
            "unsupported nbformat version: {}.{} at {}",
            notebook.nbformat, notebook.nbformat_minor, path
        )));
    }

    if !notebook.metadata.is_object() {
        return Err(ContentsError::InvalidNotebook(format!(
            "notebook metadata must be an object at {}",
            path
        )));
    }

    for (index, cell) in notebook.cells.iter().enumerate() {
        match cell.cell_type.as_str() {
            "code" | "markdown" | "raw" => {}
            other => {
                return Err(ContentsError::InvalidNotebook(format!(
                    "cell {} has unknown type: {} at {}",
                    index, other, path
                )));
            }
        }

        match &cell.source {
            Value::String(_) | Value::Array(_) => {}
            _ => {
                return Err(ContentsError::InvalidNotebook(format!(
                    "cell {} source must be a string or list of strings at {}",
                    index, path
                )));
            }
        }

        if !cell.metadata.is_object() {
            return Err(ContentsError::InvalidNotebook(format!(
                "cell {} metadata must be an object at {}",
                index, path
            )));
        }
    }

    Ok(())
}
