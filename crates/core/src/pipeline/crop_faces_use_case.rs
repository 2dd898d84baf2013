use std::path::Path;

use crate::detection::domain::face_engine::FaceEngine;
use crate::error::{Error, Result};
use crate::media::domain::image_reader::ImageReader;
use crate::media::domain::image_writer::ImageWriter;
use crate::pipeline::sample_walker::{validate_extension, walk_samples};

/// Batch crop pipeline: walk → validate → detect → crop → write.
///
/// Output files take the input's base name, flattening any subdirectory
/// structure: two inputs with the same base name silently overwrite each
/// other (known limitation, kept for compatibility). The first failure
/// of any kind aborts the run; crops already written stay on disk.
pub struct CropFacesUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    engine: Box<dyn FaceEngine>,
    on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
}

impl CropFacesUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        engine: Box<dyn FaceEngine>,
        on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    ) -> Self {
        Self {
            reader,
            writer,
            engine,
            on_progress,
        }
    }

    /// Crops the single face out of every valid image under `input_root`
    /// and writes it to `output_root`. Returns the number of crops written.
    pub fn execute(&mut self, input_root: &Path, output_root: &Path) -> Result<usize> {
        // Count pass for progress totals; walk errors resurface below.
        let total = walk_samples(input_root).filter(|e| e.is_ok()).count();
        let mut written = 0;

        // Each file is validated and processed as the walk yields it, so
        // crops written for earlier files survive a later file's failure,
        // and the earliest file's error is the one reported.
        for entry in walk_samples(input_root) {
            let path = entry?;
            validate_extension(&path)?;
            self.crop_one(&path, output_root)?;
            written += 1;
            log::debug!("cropped {}", path.display());
            self.report_progress(written, total)?;
        }

        log::info!("wrote {written} face crops to {}", output_root.display());
        Ok(written)
    }

    fn crop_one(&mut self, path: &Path, output_root: &Path) -> Result<()> {
        let frame = self.reader.read(path).map_err(|source| Error::Codec {
            path: path.to_path_buf(),
            source,
        })?;

        let faces = self
            .engine
            .detect(&frame)
            .map_err(|source| Error::Detection {
                path: path.to_path_buf(),
                source,
            })?;

        let face = match faces.len() {
            0 => {
                return Err(Error::NoFaceFound {
                    path: path.to_path_buf(),
                })
            }
            1 => &faces[0],
            count => {
                return Err(Error::TooManyFaces {
                    path: path.to_path_buf(),
                    count,
                })
            }
        };

        // Crop keeps the engine's full rectangle dimensions; any part
        // outside the frame comes out zero-filled.
        let crop = frame.crop(&face.rectangle);

        // Flatten: the output keeps only the input's base name
        let file_name = path.file_name().ok_or_else(|| Error::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        })?;
        let output_path = output_root.join(file_name);

        self.writer
            .write(&output_path, &crop)
            .map_err(|source| Error::Codec {
                path: output_path.clone(),
                source,
            })
    }

    fn report_progress(&self, current: usize, total: usize) -> Result<()> {
        if let Some(ref callback) = self.on_progress {
            if !callback(current, total) {
                return Err(Error::Cancelled);
            }
        }
        Ok(())
    }
}
