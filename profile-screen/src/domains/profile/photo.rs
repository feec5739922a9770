//! Local avatar preview
//!
//! The picked file is held in memory as a `data:` URL. It is presentation
//! only and is never part of a request body.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use iced::widget::image::Handle;
use image::ImageFormat;
use thiserror::Error;

/// File extensions of every image format this build can decode.
pub fn image_extensions() -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| format.reading_enabled())
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}

#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("Selected file is not a supported image.")]
    NotAnImage,
    #[error("Selected file is empty.")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct ProfileImagePreview {
    data_url: String,
    mime_type: &'static str,
    handle: Handle,
}

impl ProfileImagePreview {
    /// Sniff the format from `bytes` and encode them as a data URL.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PhotoError> {
        if bytes.is_empty() {
            return Err(PhotoError::Empty);
        }
        let format =
            image::guess_format(&bytes).map_err(|_| PhotoError::NotAnImage)?;
        let mime_type = format.to_mime_type();
        let data_url = format!(
            "data:{};base64,{}",
            mime_type,
            BASE64_STANDARD.encode(&bytes)
        );

        Ok(Self {
            data_url,
            mime_type,
            handle: Handle::from_bytes(bytes),
        })
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// Open the native image picker and preview the chosen file.
///
/// `None` when the dialog was cancelled.
pub async fn pick_photo() -> Option<Result<ProfileImagePreview, PhotoError>> {
    let file = rfd::AsyncFileDialog::new()
        .set_title("Upload Profile Photo")
        .add_filter("Images", image_extensions().as_slice())
        .pick_file()
        .await?;

    log::debug!("[Profile] Photo picked: {}", file.file_name());
    Some(ProfileImagePreview::from_bytes(file.read().await))
}
