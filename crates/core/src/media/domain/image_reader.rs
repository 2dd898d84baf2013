use std::path::Path;

use crate::error::BoxedError;
use crate::shared::frame::Frame;

/// Domain interface for decoding an image file into RGB pixels.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<Frame, BoxedError>;
}
