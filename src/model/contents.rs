use std::fmt;
use std::time::SystemTime;

/// What a document path denotes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryType {
    File,
    Notebook,
    Directory,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntryType::File => f.write_str("file"),
            EntryType::Notebook => f.write_str("notebook"),
            EntryType::Directory => f.write_str("directory"),
        }
    }
}

/// Serialization format of a model's content field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Text,
    Base64,
}

/// Document payload. Files carry the store bytes verbatim; notebooks carry
/// the parsed document.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    Raw(Vec<u8>),
    Notebook(serde_json::Value),
}

/// The structured description of a document returned to the host: metadata
/// plus optional payload. Directory children live in `contents`, shallow
/// (never populated with their own content).
#[derive(Clone, Debug, PartialEq)]
pub struct ContentModel {
    pub bucket: String,
    pub key: String,
    pub name: String,
    pub path: String,
    pub last_modified: SystemTime,
    pub created: SystemTime,
    pub entry_type: EntryType,
    pub content: Option<Content>,
    pub contents: Option<Vec<ContentModel>>,
    pub format: Option<Format>,
    pub mimetype: Option<String>,
}

impl ContentModel {
    /// A minimal model for handing to `save`: type and payload only, every
    /// metadata field blank. The manager fills metadata on the way back out.
    pub fn for_save(entry_type: EntryType, content: Option<Content>) -> Self {
        Self {
            bucket: String::new(),
            key: String::new(),
            name: String::new(),
            path: String::new(),
            last_modified: SystemTime::UNIX_EPOCH,
            created: SystemTime::UNIX_EPOCH,
            entry_type,
            content,
            contents: None,
            format: None,
            mimetype: None,
        }
    }
}

/// Errors surfaced by contents operations.
#[derive(Debug)]
pub enum ContentsError {
    /// No document at the path.
    NotFound(String),
    /// The requested type conflicts with what the path actually is.
    BadType(String),
    /// An underlying store call failed; the store client's own error is
    /// folded into the message, never leaked as a type.
    StoreAccess(String),
    /// Notebook bytes failed to parse or validate.
    InvalidNotebook(String),
    /// Configuration rejected at startup.
    Config(String),
}

impl ContentsError {
    /// HTTP-equivalent status for the host to surface.
    pub fn status_code(&self) -> u16 {
        match self {
            ContentsError::NotFound(_) => 404,
            ContentsError::BadType(_) => 400,
            ContentsError::StoreAccess(_) => 500,
            ContentsError::InvalidNotebook(_) => 500,
            ContentsError::Config(_) => 500,
        }
    }

    /// Machine-readable reason tag, where the contract defines one.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            ContentsError::BadType(_) => Some("bad type"),
            _ => None,
        }
    }
}

impl fmt::Display for ContentsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContentsError::NotFound(path) => {
                write!(f, "No such file or directory: {}", path)
            }
            ContentsError::BadType(message) => write!(f, "{}", message),
            ContentsError::StoreAccess(message) => write!(f, "{}", message),
            ContentsError::InvalidNotebook(message) => write!(f, "{}", message),
            ContentsError::Config(message) => write!(f, "invalid configuration: {}", message),
        }
    }
}

impl std::error::Error for ContentsError {}
