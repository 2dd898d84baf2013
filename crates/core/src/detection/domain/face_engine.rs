use crate::error::BoxedError;
use crate::shared::face::Face;
use crate::shared::frame::Frame;

/// Domain interface for the external face detection and embedding engine.
///
/// Implementations may hold inference state, hence `&mut self`. The
/// returned sequence order is implementation-defined but must be
/// deterministic for a given frame.
pub trait FaceEngine: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Face>, BoxedError>;
}
