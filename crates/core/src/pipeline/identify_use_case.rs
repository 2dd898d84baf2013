use std::path::Path;

use crate::detection::domain::face_engine::FaceEngine;
use crate::error::{Error, Result};
use crate::gallery::builder::{GalleryBuilder, GalleryStrategy};
use crate::gallery::classifier::{classify, Classification};
use crate::media::domain::image_reader::ImageReader;

/// Identification pipeline: build gallery → detect input face → classify.
pub struct IdentifyFaceUseCase {
    reader: Box<dyn ImageReader>,
    engine: Box<dyn FaceEngine>,
    threshold: f64,
}

impl IdentifyFaceUseCase {
    pub fn new(reader: Box<dyn ImageReader>, engine: Box<dyn FaceEngine>, threshold: f64) -> Self {
        Self {
            reader,
            engine,
            threshold,
        }
    }

    /// Builds the gallery from `samples_root` per `strategy`, extracts the
    /// single face from `input_path`, and classifies its descriptor.
    ///
    /// `NoMatch` is a normal result; every other failure aborts the run.
    pub fn execute(
        &mut self,
        samples_root: &Path,
        strategy: &GalleryStrategy,
        input_path: &Path,
    ) -> Result<Classification> {
        let gallery =
            GalleryBuilder::new(&*self.reader, &mut *self.engine).build(samples_root, strategy)?;

        let frame = self.reader.read(input_path).map_err(|source| Error::Codec {
            path: input_path.to_path_buf(),
            source,
        })?;
        let mut faces = self
            .engine
            .detect(&frame)
            .map_err(|source| Error::Detection {
                path: input_path.to_path_buf(),
                source,
            })?;

        let face = match faces.len() {
            0 => {
                return Err(Error::NoFaceFound {
                    path: input_path.to_path_buf(),
                })
            }
            1 => faces.remove(0),
            count => {
                return Err(Error::TooManyFaces {
                    path: input_path.to_path_buf(),
                    count,
                })
            }
        };

        classify(&gallery, &face.descriptor, self.threshold)
    }
}
