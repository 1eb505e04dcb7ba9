use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme identifier `{0}`")]
    Unknown(String),
}

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image is {width}x{height}, larger than the {max}px limit")]
    TooLarge { width: u32, height: u32, max: u32 },
    #[error("image has no pixels")]
    Empty,
    #[error("malformed data url: {0}")]
    DataUrl(String),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to read photo: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}
