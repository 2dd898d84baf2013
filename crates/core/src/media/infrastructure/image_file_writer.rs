use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::BoxedError;
use crate::media::domain::image_writer::ImageWriter;
use crate::shared::constants::OUTPUT_JPEG_QUALITY;
use crate::shared::frame::Frame;

/// Writes a frame as a JPEG file at a fixed quality using the `image` crate.
pub struct JpegFileWriter {
    quality: u8,
}

impl JpegFileWriter {
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }
}

impl Default for JpegFileWriter {
    fn default() -> Self {
        Self::new(OUTPUT_JPEG_QUALITY)
    }
}

impl ImageWriter for JpegFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), BoxedError> {
        // Ensure parent directory exists (infrastructure concern)
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = BufWriter::new(File::create(path)?);
        let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(file, self.quality);
        encoder.encode(
            frame.data(),
            frame.width(),
            frame.height(),
            image::ExtendedColorType::Rgb8,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_frame(width: u32, height: u32, r: u8, g: u8, b: u8) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..(width * height) {
            data.push(r);
            data.push(g);
            data.push(b);
        }
        Frame::new(data, width, height, 3)
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let frame = make_frame(100, 80, 50, 100, 200);
        JpegFileWriter::default().write(&path, &frame).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_written_file_decodes_with_same_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let frame = make_frame(64, 48, 128, 128, 128);
        JpegFileWriter::default().write(&path, &frame).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 48);
    }

    #[test]
    fn test_max_quality_roundtrip_close_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jpg");
        let frame = make_frame(32, 32, 50, 100, 200);
        JpegFileWriter::new(100).write(&path, &frame).unwrap();

        // JPEG at quality 100 is still lossy, but a solid color stays close
        let img = image::open(&path).unwrap().to_rgb8();
        let pixel = img.get_pixel(16, 16);
        assert!((pixel.0[0] as i32 - 50).abs() <= 3);
        assert!((pixel.0[1] as i32 - 100).abs() <= 3);
        assert!((pixel.0[2] as i32 - 200).abs() <= 3);
    }

    #[test]
    fn test_write_creates_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.jpg");
        let frame = make_frame(10, 10, 0, 0, 0);
        JpegFileWriter::default().write(&path, &frame).unwrap();
        assert!(path.exists());
    }
}
