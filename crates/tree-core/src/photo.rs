//! Photo uploads: validation and a representative tint for the frame face.
//!
//! A photo that fails to decode is dropped on its own; the rest of the list
//! and every other layer carry on.

use crate::constants::PHOTO_MAX_DIMENSION;
use crate::error::PhotoError;
use crate::theme::Rgb;
use base64::Engine;
use std::io::Cursor;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoSummary {
    pub width: u32,
    pub height: u32,
    /// Average color of the image.
    pub tint: Rgb,
}

/// A decoded photo reference. `source` is whatever the host persists
/// (a file path natively, a data URL on the web).
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub source: String,
    pub summary: PhotoSummary,
}

impl Photo {
    pub fn new(source: impl Into<String>, summary: PhotoSummary) -> Self {
        Self {
            source: source.into(),
            summary,
        }
    }

    pub fn from_bytes(source: impl Into<String>, bytes: &[u8]) -> Result<Self, PhotoError> {
        Ok(Self::new(source, decode_bytes(bytes)?))
    }

    /// Decode a `data:<mime>;base64,<payload>` URL; the URL itself is kept as the source.
    pub fn from_data_url(url: &str) -> Result<Self, PhotoError> {
        let bytes = data_url_bytes(url)?;
        Self::from_bytes(url, &bytes)
    }
}

pub fn decode_bytes(bytes: &[u8]) -> Result<PhotoSummary, PhotoError> {
    let reader = image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    let (width, height) = reader.into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(PhotoError::Empty);
    }
    if width > PHOTO_MAX_DIMENSION || height > PHOTO_MAX_DIMENSION {
        return Err(PhotoError::TooLarge {
            width,
            height,
            max: PHOTO_MAX_DIMENSION,
        });
    }

    let img = image::io::Reader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?
        .decode()?;
    let thumb = img.thumbnail(16, 16).to_rgb8();
    let mut sum = [0u64; 3];
    let mut n = 0u64;
    for px in thumb.pixels() {
        sum[0] += px[0] as u64;
        sum[1] += px[1] as u64;
        sum[2] += px[2] as u64;
        n += 1;
    }
    if n == 0 {
        return Err(PhotoError::Empty);
    }
    let avg = |c: u64| (c as f32 / n as f32) / 255.0;
    Ok(PhotoSummary {
        width,
        height,
        tint: Rgb([avg(sum[0]), avg(sum[1]), avg(sum[2])]),
    })
}

pub fn data_url_bytes(url: &str) -> Result<Vec<u8>, PhotoError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| PhotoError::DataUrl("missing `data:` prefix".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| PhotoError::DataUrl("missing `,` separator".into()))?;
    if !meta.ends_with(";base64") {
        return Err(PhotoError::DataUrl(format!("unsupported encoding `{meta}`")));
    }
    Ok(base64::engine::general_purpose::STANDARD.decode(payload.trim())?)
}

/// Keep the photos that decoded, logging and skipping the rest.
pub fn keep_decoded<I>(results: I) -> Vec<Photo>
where
    I: IntoIterator<Item = (String, Result<Photo, PhotoError>)>,
{
    results
        .into_iter()
        .filter_map(|(label, res)| match res {
            Ok(photo) => Some(photo),
            Err(e) => {
                log::warn!("[photo] skipping {}: {}", label, e);
                None
            }
        })
        .collect()
}
