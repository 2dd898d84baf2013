/// Fixed-length face embedding used for similarity comparison.
///
/// Immutable once produced by the engine. Two descriptors may only be
/// compared when their dimensionalities match; a mismatch is a
/// programming error, not a runtime outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor(Vec<f32>);

impl Descriptor {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Euclidean (L2) distance to another descriptor.
    pub fn distance(&self, other: &Descriptor) -> f64 {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "descriptor dimensionalities must match"
        );
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let d = (*a as f64) - (*b as f64);
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl From<Vec<f32>> for Descriptor {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}
