use crate::model::contents::ContentsError;

pub enum Provider {
    AWS,
    GCS,
}

/// Provider named by a bucket setting. A bare bucket name (no scheme) means
/// S3, since that is what the plain-name configuration form targets.
pub fn parse_provider_from_uri(bucket_uri: &str) -> Result<Provider, ContentsError> {
    return if bucket_uri.starts_with("s3://") {
        Ok(Provider::AWS)
    } else if bucket_uri.starts_with("gs://") {
        Ok(Provider::GCS)
    } else if bucket_uri.contains("://") {
        Err(ContentsError::Config(format!(
            "failed to parse provider of: {}",
            bucket_uri
        )))
    } else {
        Ok(Provider::AWS)
    };
}

pub fn parse_bucket_from_uri(bucket_uri: &str) -> &str {
    bucket_uri
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(bucket_uri)
}

/// Final path segment after the last separator, or the whole path if there is
/// none. A path ending in the separator has an empty basename.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Sibling path for a copy with no explicit destination: `-Copy` inserted
/// before the extension. A dot at the start of the name is part of the stem,
/// not an extension separator.
pub fn copy_destination(from_path: &str) -> String {
    let (dir, name) = match from_path.rsplit_once('/') {
        Some((dir, name)) => (Some(dir), name),
        None => (None, from_path),
    };

    let copied = match name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => format!("{}-Copy.{}", stem, extension),
        _ => format!("{}-Copy", name),
    };

    match dir {
        Some(dir) => format!("{}/{}", dir, copied),
        None => copied,
    }
}
