use std::path::Path;

use crate::error::BoxedError;
use crate::shared::frame::Frame;

/// Domain interface for encoding a frame to an image file.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), BoxedError>;
}
