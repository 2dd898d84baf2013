use std::path::{Path, PathBuf};

use crate::detection::domain::face_engine::FaceEngine;
use crate::error::{Error, Result};
use crate::gallery::gallery::Gallery;
use crate::media::domain::image_reader::ImageReader;
use crate::pipeline::sample_walker::{validate_extension, walk_samples};
use crate::shared::face::Face;
use crate::shared::frame::Frame;

/// How reference descriptors are gathered and labeled.
///
/// Both modes share the validate/detect/accumulate skeleton; they differ
/// only in how many faces a file may hold and where labels come from.
pub enum GalleryStrategy {
    /// Walk the sample directory; every file holds exactly one face and
    /// is labeled with its own path.
    LabeledDirectory,
    /// One designated reference image (e.g. a passport scan) holding one
    /// or more faces, labeled by detection order from `labels`. When the
    /// list runs short the fixed fallback `face-{index}` applies.
    SingleReference {
        reference: PathBuf,
        labels: Vec<String>,
    },
}

/// Builds an in-memory gallery of labeled descriptors from sample images.
///
/// Any failure discards the whole gallery: the walk stops at the first
/// error and nothing partial is returned.
pub struct GalleryBuilder<'a> {
    reader: &'a dyn ImageReader,
    engine: &'a mut dyn FaceEngine,
}

impl<'a> GalleryBuilder<'a> {
    pub fn new(reader: &'a dyn ImageReader, engine: &'a mut dyn FaceEngine) -> Self {
        Self { reader, engine }
    }

    pub fn build(&mut self, samples_root: &Path, strategy: &GalleryStrategy) -> Result<Gallery> {
        match strategy {
            GalleryStrategy::LabeledDirectory => self.build_labeled(samples_root),
            GalleryStrategy::SingleReference { reference, labels } => {
                self.build_single_reference(reference, labels)
            }
        }
    }

    fn build_labeled(&mut self, samples_root: &Path) -> Result<Gallery> {
        let mut gallery = Gallery::new();

        for entry in walk_samples(samples_root) {
            let path = entry?;
            validate_extension(&path)?;
            let face = self.detect_single(&path)?;
            let category = gallery.push(path.display().to_string(), face.descriptor);
            log::debug!("gallery entry {category}: {}", path.display());
        }

        log::info!("built gallery of {} samples", gallery.len());
        Ok(gallery)
    }

    fn build_single_reference(&mut self, reference: &Path, labels: &[String]) -> Result<Gallery> {
        validate_extension(reference)?;
        let faces = self.detect_all(reference)?;
        if faces.is_empty() {
            return Err(Error::NoFaceFound {
                path: reference.to_path_buf(),
            });
        }

        let mut gallery = Gallery::new();
        for (index, face) in faces.into_iter().enumerate() {
            let label = labels
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("face-{index}"));
            gallery.push(label, face.descriptor);
        }

        log::info!(
            "built gallery of {} faces from {}",
            gallery.len(),
            reference.display()
        );
        Ok(gallery)
    }

    fn detect_all(&mut self, path: &Path) -> Result<Vec<Face>> {
        let frame = self.read_frame(path)?;
        self.engine
            .detect(&frame)
            .map_err(|source| Error::Detection {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Detects faces in `path` and requires exactly one.
    fn detect_single(&mut self, path: &Path) -> Result<Face> {
        let mut faces = self.detect_all(path)?;
        match faces.len() {
            0 => Err(Error::NoFaceFound {
                path: path.to_path_buf(),
            }),
            1 => Ok(faces.remove(0)),
            count => Err(Error::TooManyFaces {
                path: path.to_path_buf(),
                count,
            }),
        }
    }

    fn read_frame(&self, path: &Path) -> Result<Frame> {
        self.reader.read(path).map_err(|source| Error::Codec {
            path: path.to_path_buf(),
            source,
        })
    }
}
