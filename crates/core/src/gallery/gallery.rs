use crate::shared::descriptor::Descriptor;

/// One labeled reference descriptor.
///
/// `category` is a dense 0-based index assigned in insertion order and
/// is unique across the gallery.
#[derive(Clone, Debug)]
pub struct GalleryEntry {
    pub label: String,
    pub descriptor: Descriptor,
    pub category: u32,
}

/// Ordered, in-memory set of labeled reference descriptors.
///
/// Built once per run and discarded at process end; never persisted.
#[derive(Default)]
pub struct Gallery {
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, assigning the next category index.
    pub fn push(&mut self, label: String, descriptor: Descriptor) -> u32 {
        let category = self.entries.len() as u32;
        self.entries.push(GalleryEntry {
            label,
            descriptor,
            category,
        });
        category
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_dense_categories() {
        let mut gallery = Gallery::new();
        for i in 0..4 {
            let category = gallery.push(format!("sample-{i}"), Descriptor::new(vec![i as f32]));
            assert_eq!(category, i);
        }

        assert_eq!(gallery.len(), 4);
        for (i, entry) in gallery.entries().iter().enumerate() {
            assert_eq!(entry.category, i as u32);
        }
    }

    #[test]
    fn test_entries_preserve_insertion_order() {
        let mut gallery = Gallery::new();
        gallery.push("alice".into(), Descriptor::new(vec![0.0]));
        gallery.push("bob".into(), Descriptor::new(vec![1.0]));

        let labels: Vec<&str> = gallery.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["alice", "bob"]);
    }

    #[test]
    fn test_new_gallery_is_empty() {
        let gallery = Gallery::new();
        assert!(gallery.is_empty());
        assert_eq!(gallery.len(), 0);
    }
}
