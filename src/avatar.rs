//! Avatar encoding.
//!
//! Turns a picked or captured image into the string stored on
//! [`User::avatar`](crate::features::users::User): a center-cropped square
//! JPEG as a `data:` URI. Nothing else in the crate looks inside it.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use thiserror::Error;

pub const AVATAR_SIZE: u32 = 256;
const JPEG_QUALITY: u8 = 70;
const DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Failed to open image '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image has no pixels")]
    Empty,

    #[error("Failed to encode avatar: {0}")]
    Encode(#[from] image::ImageError),
}

pub fn encode_avatar(path: &Path) -> Result<String, AvatarError> {
    let image = image::open(path).map_err(|source| AvatarError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    encode_image(&image)
}

/// Crop to the centered square, scale to [`AVATAR_SIZE`], encode as JPEG.
pub fn encode_image(image: &DynamicImage) -> Result<String, AvatarError> {
    let (width, height) = (image.width(), image.height());
    let side = width.min(height);
    if side == 0 {
        return Err(AvatarError::Empty);
    }

    let square = image
        .crop_imm((width - side) / 2, (height - side) / 2, side, side)
        .resize_exact(AVATAR_SIZE, AVATAR_SIZE, FilterType::Lanczos3)
        .to_rgb8();

    let mut bytes = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).encode_image(&square)?;
    Ok(format!("{DATA_URI_PREFIX}{}", STANDARD.encode(bytes.into_inner())))
}
