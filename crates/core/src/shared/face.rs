use crate::shared::descriptor::Descriptor;
use crate::shared::rectangle::Rectangle;

/// A single detected face: where it is, and what it looks like.
///
/// Produced only by the face engine from one decoded image. A single
/// image may yield zero, one, or many faces.
#[derive(Clone, Debug)]
pub struct Face {
    pub rectangle: Rectangle,
    pub descriptor: Descriptor,
}
