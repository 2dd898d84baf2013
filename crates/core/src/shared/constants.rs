pub const DETECTOR_MODEL_NAME: &str = "detector.onnx";
pub const EMBEDDER_MODEL_NAME: &str = "embedder.onnx";

/// Accepted sample image extensions (case-sensitive, JPEG containers only).
pub const SAMPLE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Path marker for samples that intentionally contain several faces.
/// Such files are skipped by the single-face walkers, never errored.
pub const MULTI_FACE_MARKER: &str = "multiple";

/// Maximum descriptor distance for a gallery match to be accepted.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.5;

/// JPEG quality for cropped face outputs.
pub const OUTPUT_JPEG_QUALITY: u8 = 100;
