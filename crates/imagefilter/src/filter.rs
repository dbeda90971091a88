//! The image filter pipeline.
//!
//! Fetch is async and network-bound; the filter itself is a pure function
//! over bytes so it can be tested without any HTTP traffic.

use std::io::{Cursor, Write};

use bytes::Bytes;
use image::{imageops::FilterType, ImageFormat};
use reqwest::Client;
use tempfile::NamedTempFile;
use url::Url;

use crate::error::FilterError;

/// Output dimensions of the fixed filter.
pub const FILTERED_WIDTH: u32 = 256;
pub const FILTERED_HEIGHT: u32 = 256;

/// Downloads the resource at `url` and returns its raw bytes.
///
/// Non-2xx upstream responses are failures; the client's timeout bounds how
/// long a slow source can hold the request open.
pub async fn fetch_image(client: &Client, url: &Url) -> Result<Bytes, FilterError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| FilterError::Fetch(e.to_string()))?;

    response
        .bytes()
        .await
        .map_err(|e| FilterError::Fetch(e.to_string()))
}

/// Applies the fixed filter: resize to 256x256, grayscale, JPEG re-encode.
///
/// Deterministic per input image.
pub fn filter_image(input: &[u8]) -> Result<Vec<u8>, FilterError> {
    let image = image::load_from_memory(input).map_err(|e| FilterError::Decode(e.to_string()))?;

    let filtered = image
        .resize_exact(FILTERED_WIDTH, FILTERED_HEIGHT, FilterType::Triangle)
        .grayscale();

    let mut out = Cursor::new(Vec::new());
    filtered
        .write_to(&mut out, ImageFormat::Jpeg)
        .map_err(|e| FilterError::Encode(e.to_string()))?;

    Ok(out.into_inner())
}

/// Runs the filter and stages the result through a scoped temporary file.
///
/// The file is removed when the guard drops, on every exit path - including
/// errors - so a crashed or abandoned request cannot leak it.
pub fn filter_to_temp_file(input: &[u8]) -> Result<Vec<u8>, FilterError> {
    let filtered = filter_image(input)?;

    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(&filtered)?;
    tmp.flush()?;

    let bytes = std::fs::read(tmp.path())?;
    Ok(bytes)
}
