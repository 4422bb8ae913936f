use std::sync::Arc;

use crate::dataset::Dataset;

/// Holder for the page's dataset.
///
/// `publish` is the only way in. Each publish bumps `generation`, which is
/// what the renderer watches to decide whether to rebuild.
#[derive(Debug, Clone, Default)]
pub struct DatasetCell {
    dataset: Option<Arc<Dataset>>,
    generation: u64,
}

impl DatasetCell {
    pub fn publish(&mut self, dataset: Dataset) {
        self.dataset = Some(Arc::new(dataset));
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn current(&self) -> Option<&Dataset> {
        self.dataset.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl PartialEq for DatasetCell {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation
            && match (&self.dataset, &other.dataset) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DatasetNode, Leaf};

    fn dataset() -> Dataset {
        Dataset {
            root: DatasetNode::Leaf(Leaf::new("a", "X", 1.0)),
        }
    }

    #[test]
    fn starts_empty() {
        let cell = DatasetCell::default();
        assert!(!cell.is_loaded());
        assert!(cell.current().is_none());
        assert_eq!(cell.generation(), 0);
    }

    #[test]
    fn publish_stores_and_bumps_generation() {
        let mut cell = DatasetCell::default();
        cell.publish(dataset());
        assert!(cell.is_loaded());
        assert_eq!(cell.current(), Some(&dataset()));
        assert_eq!(cell.generation(), 1);

        cell.publish(dataset());
        assert_eq!(cell.generation(), 2);
    }

    #[test]
    fn clones_compare_equal_until_next_publish() {
        let mut cell = DatasetCell::default();
        cell.publish(dataset());
        let snapshot = cell.clone();
        assert_eq!(snapshot, cell);
        cell.publish(dataset());
        assert_ne!(snapshot, cell);
    }
}
