use std::path::Path;

use crate::error::BoxedError;
use crate::media::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

/// Decodes image files into RGB frames using the `image` crate.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, BoxedError> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();
        Ok(Frame::new(img.into_raw(), width, height, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_test_image(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("test.jpg");
        let mut img = image::RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([50, 100, 200]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_read_returns_rgb_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), 100, 80);
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(frame.width(), 100);
        assert_eq!(frame.height(), 80);
        assert_eq!(frame.channels(), 3);
    }

    #[test]
    fn test_read_pixel_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solid.png");
        let mut img = image::RgbImage::new(10, 10);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([50, 100, 200]);
        }
        img.save(&path).unwrap();

        // PNG is lossless, so the exact values survive
        let frame = ImageFileReader::new().read(&path).unwrap();
        assert_eq!(&frame.data()[..3], &[50, 100, 200]);
    }

    #[test]
    fn test_read_nonexistent_returns_error() {
        let result = ImageFileReader::new().read(Path::new("/nonexistent/test.jpg"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_undecodable_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.jpg");
        std::fs::write(&path, b"not an image at all").unwrap();
        assert!(ImageFileReader::new().read(&path).is_err());
    }
}
