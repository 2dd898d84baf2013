use crate::error::{Error, Result};
use crate::gallery::gallery::Gallery;
use crate::shared::descriptor::Descriptor;

/// Outcome of a threshold-gated nearest-neighbor lookup.
///
/// `NoMatch` is a normal, non-exceptional result: the nearest gallery
/// entry was simply too far away.
#[derive(Clone, Debug, PartialEq)]
pub enum Classification {
    Matched { category: u32, label: String },
    NoMatch,
}

/// Maps `descriptor` to the nearest gallery entry by L2 distance, gated
/// by `threshold`.
///
/// Ties keep the earliest-inserted (lowest category) entry, so repeated
/// calls with identical inputs always return identical results. The scan
/// is O(N·D); at gallery sizes of a handful of samples no index is
/// warranted.
pub fn classify(
    gallery: &Gallery,
    descriptor: &Descriptor,
    threshold: f64,
) -> Result<Classification> {
    if gallery.is_empty() {
        return Err(Error::GalleryEmpty);
    }
    debug_assert!(threshold >= 0.0, "threshold must be non-negative");

    let mut best = &gallery.entries()[0];
    let mut best_distance = descriptor.distance(&best.descriptor);

    // Strict `<` keeps the lowest category on equal distances.
    for entry in &gallery.entries()[1..] {
        let distance = descriptor.distance(&entry.descriptor);
        if distance < best_distance {
            best = entry;
            best_distance = distance;
        }
    }

    if best_distance <= threshold {
        Ok(Classification::Matched {
            category: best.category,
            label: best.label.clone(),
        })
    } else {
        Ok(Classification::NoMatch)
    }
}
