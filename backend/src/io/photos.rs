//! # Photos
//!
//! Observations embed their photos as data URLs
//! (`data:image/jpeg;base64,...`). This module turns image files into data
//! URLs when recording and writes them back out as files on export.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PhotoError {
    #[error("{0} is not an image file")]
    NotAnImage(PathBuf),
    #[error("failed to access photo {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed photo data URL")]
    MalformedDataUrl,
    #[error("invalid base64 photo payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

const IMAGE_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("heic", "image/heic"),
];

/// MIME type for an image path, judged by extension
pub fn mime_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}

fn extension_for(mime: &str) -> &'static str {
    IMAGE_TYPES
        .iter()
        .find(|(_, candidate)| *candidate == mime)
        .map(|(ext, _)| *ext)
        .unwrap_or("bin")
}

pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Split a data URL into its MIME type and decoded bytes
pub fn from_data_url(data_url: &str) -> Result<(String, Vec<u8>), PhotoError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or(PhotoError::MalformedDataUrl)?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or(PhotoError::MalformedDataUrl)?;
    let bytes = STANDARD.decode(payload.trim())?;
    Ok((mime.to_string(), bytes))
}

/// Read an image file into a data URL. Non-image files are rejected.
pub fn encode_photo(path: &Path) -> Result<String, PhotoError> {
    let mime = mime_type_for(path).ok_or_else(|| PhotoError::NotAnImage(path.to_path_buf()))?;
    let bytes = fs::read(path).map_err(|source| PhotoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Encoded {:?} ({} bytes) as {}", path, bytes.len(), mime);
    Ok(to_data_url(mime, &bytes))
}

/// Write the photos of observation `observation_id` into `directory`,
/// one file per photo. Returns the written paths in photo order.
pub fn export_photos(
    observation_id: &str,
    photos: &[String],
    directory: &Path,
) -> Result<Vec<PathBuf>, PhotoError> {
    fs::create_dir_all(directory).map_err(|source| PhotoError::Io {
        path: directory.to_path_buf(),
        source,
    })?;

    // IDs contain "::", which is not a portable file name
    let stem = observation_id.replace("::", "-");
    let mut written = Vec::with_capacity(photos.len());
    for (index, photo) in photos.iter().enumerate() {
        let (mime, bytes) = from_data_url(photo)?;
        let path = directory.join(format!("{}-{}.{}", stem, index + 1, extension_for(&mime)));
        fs::write(&path, bytes).map_err(|source| PhotoError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    info!("Exported {} photos of {} to {:?}", written.len(), observation_id, directory);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_mime_type_by_extension() {
        assert_eq!(mime_type_for(Path::new("leaf.JPG")), Some("image/jpeg"));
        assert_eq!(mime_type_for(Path::new("leaf.png")), Some("image/png"));
        assert_eq!(mime_type_for(Path::new("notes.txt")), None);
        assert_eq!(mime_type_for(Path::new("no_extension")), None);
    }

    #[test]
    fn test_encode_photo() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("leaf.png");
        fs::write(&path, PNG_HEADER).unwrap();

        let data_url = encode_photo(&path).unwrap();
        assert_eq!(data_url, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_encode_rejects_non_images() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "not a photo").unwrap();

        assert!(matches!(encode_photo(&path), Err(PhotoError::NotAnImage(_))));
    }

    #[test]
    fn test_missing_image_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = encode_photo(&temp_dir.path().join("missing.jpg"));
        assert!(matches!(result, Err(PhotoError::Io { .. })));
    }

    #[test]
    fn test_malformed_data_urls() {
        assert!(matches!(
            from_data_url("image/png;base64,AAAA"),
            Err(PhotoError::MalformedDataUrl)
        ));
        assert!(matches!(from_data_url("data:image/png,AAAA"), Err(PhotoError::MalformedDataUrl)));
        assert!(matches!(
            from_data_url("data:image/png;base64,@@@"),
            Err(PhotoError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_export_photos_writes_files() {
        let temp_dir = TempDir::new().unwrap();
        let photos = vec![
            to_data_url("image/png", PNG_HEADER),
            to_data_url("image/jpeg", b"jpeg bytes"),
        ];

        let written =
            export_photos("observation::1::abc", &photos, &temp_dir.path().join("out")).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("observation-1-abc-1.png"));
        assert!(written[1].ends_with("observation-1-abc-2.jpg"));
        assert_eq!(fs::read(&written[0]).unwrap(), PNG_HEADER);
    }
}
