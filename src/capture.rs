//! Image Capture
//!
//! Turns a selected image file into a data URL that can be stored with an
//! item and used directly as an `<img src>`.

use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Please upload a valid image file.")]
    NotAnImage(String),

    #[error("The image could not be read.")]
    Read(String),
}

/// Accept only `image/*` media types
pub fn validate_media_type(media_type: &str) -> Result<(), CaptureError> {
    if media_type.starts_with("image/") {
        Ok(())
    } else {
        Err(CaptureError::NotAnImage(media_type.to_string()))
    }
}

/// Read a file's full contents as a data URL
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, CaptureError> {
    let reader = web_sys::FileReader::new().map_err(|e| CaptureError::Read(format!("{:?}", e)))?;

    let done = js_sys::Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader
        .read_as_data_url(file)
        .map_err(|e| CaptureError::Read(format!("{:?}", e)))?;

    let outcome = JsFuture::from(done).await;
    reader.set_onload(None);
    reader.set_onerror(None);
    outcome.map_err(|e| CaptureError::Read(format!("{:?}", e)))?;

    reader
        .result()
        .ok()
        .and_then(|v| v.as_string())
        .ok_or_else(|| CaptureError::Read("reader produced no text result".to_string()))
}

/// State of the image field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PendingImage {
    /// No file selected
    #[default]
    Empty,
    /// A file is being read
    Loading,
    /// The selected file is available as a data URL
    Ready(String),
    /// The selected file was rejected or could not be read
    Rejected(CaptureError),
}

/// Image field state plus the generation of the selection it belongs to.
///
/// Each new selection bumps the generation, so the result of a read started
/// for an earlier selection is dropped instead of overwriting the newer one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSlot {
    generation: u32,
    state: PendingImage,
}

/// The image field has a file whose data URL is not available yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageNotReady;

impl ImageSlot {
    pub fn state(&self) -> &PendingImage {
        &self.state
    }

    /// Start a new selection; returns the generation to resolve it with
    pub fn select(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.state = PendingImage::Loading;
        self.generation
    }

    /// Drop the current selection and any read still in flight
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = PendingImage::Empty;
    }

    /// Apply the outcome of a validation or read. Ignored, returning false,
    /// when a newer selection has been made since.
    pub fn resolve(&mut self, generation: u32, outcome: Result<String, CaptureError>) -> bool {
        if generation != self.generation || self.state != PendingImage::Loading {
            return false;
        }
        self.state = match outcome {
            Ok(data_url) => PendingImage::Ready(data_url),
            Err(e) => PendingImage::Rejected(e),
        };
        true
    }

    /// The image to attach to a submission: none when no file is selected,
    /// the data URL once read, otherwise not ready.
    pub fn readiness(&self) -> Result<Option<String>, ImageNotReady> {
        match &self.state {
            PendingImage::Empty => Ok(None),
            PendingImage::Ready(data_url) => Ok(Some(data_url.clone())),
            PendingImage::Loading | PendingImage::Rejected(_) => Err(ImageNotReady),
        }
    }
}
