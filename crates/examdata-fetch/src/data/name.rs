use std::fmt;
use std::ops::RangeInclusive;

/// Sub-identifier of a file within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Number(u8),
    Train,
    Test,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Number(n) => write!(f, "{n}"),
            Variant::Train => write!(f, "train"),
            Variant::Test => write!(f, "test"),
        }
    }
}

/// Per-index file layout, in download order.
///
/// Category 1 and 3 hold numbered problems, category 2 a train/test split.
/// Not every session publishes `3_3`.
const LAYOUT: [(u8, Variant); 8] = [
    (1, Variant::Number(1)),
    (1, Variant::Number(2)),
    (1, Variant::Number(3)),
    (2, Variant::Train),
    (2, Variant::Test),
    (3, Variant::Number(1)),
    (3, Variant::Number(2)),
    (3, Variant::Number(3)),
];

/// A candidate dataset file, rendered as `{index:02}_{category}_{variant}.csv`.
///
/// ```
/// use examdata_fetch::{FileName, Variant};
///
/// let name = FileName::new(7, 2, Variant::Train);
/// assert_eq!(name.to_string(), "07_2_train.csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileName {
    index: u8,
    category: u8,
    variant: Variant,
}

impl FileName {
    pub fn new(index: u8, category: u8, variant: Variant) -> Self {
        Self {
            index,
            category,
            variant,
        }
    }

    pub fn index(&self) -> u8 { self.index }

    pub fn category(&self) -> u8 { self.category }

    pub fn variant(&self) -> Variant { self.variant }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}_{}_{}.csv", self.index, self.category, self.variant)
    }
}

/// The set of exam sessions to download.
///
/// Sessions are visited from the highest index down to the lowest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    indices: RangeInclusive<u8>,
}

impl Default for Catalog {
    fn default() -> Self { Self::new(5..=10) }
}

impl Catalog {
    pub const FILES_PER_INDEX: usize = LAYOUT.len();

    pub fn new(indices: RangeInclusive<u8>) -> Self { Self { indices } }

    /// Every candidate file name in download order.
    ///
    /// The iterator is lazy; calling `names` again starts over.
    pub fn names(&self) -> impl Iterator<Item = FileName> + Clone {
        self.indices.clone().rev().flat_map(|index| {
            LAYOUT
                .into_iter()
                .map(move |(category, variant)| FileName::new(index, category, variant))
        })
    }

    pub fn len(&self) -> usize { self.indices.clone().count() * Self::FILES_PER_INDEX }

    pub fn is_empty(&self) -> bool { self.indices.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_seven_layout() {
        let names: Vec<String> = Catalog::new(7..=7).names().map(|n| n.to_string()).collect();
        assert_eq!(
            names,
            [
                "07_1_1.csv",
                "07_1_2.csv",
                "07_1_3.csv",
                "07_2_train.csv",
                "07_2_test.csv",
                "07_3_1.csv",
                "07_3_2.csv",
                "07_3_3.csv",
            ]
        );
    }

    #[test]
    fn test_default_catalog_has_48_names() {
        let catalog = Catalog::default();
        assert_eq!(catalog.names().count(), 48);
        assert_eq!(catalog.len(), 48);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_indices_descend() {
        let mut indices: Vec<u8> = Catalog::default().names().map(|n| n.index()).collect();
        indices.dedup();
        assert_eq!(indices, [10, 9, 8, 7, 6, 5]);
    }

    #[test]
    fn test_each_index_has_eight_names() {
        let names: Vec<FileName> = Catalog::default().names().collect();
        for chunk in names.chunks(Catalog::FILES_PER_INDEX) {
            let index = chunk[0].index();
            assert!(chunk.iter().all(|n| n.index() == index));
            let suffixes: Vec<(u8, Variant)> = chunk.iter().map(|n| (n.category(), n.variant())).collect();
            assert_eq!(suffixes, LAYOUT);
        }
    }

    #[test]
    fn test_two_digit_index_is_not_padded_further() {
        assert_eq!(FileName::new(10, 3, Variant::Number(3)).to_string(), "10_3_3.csv");
        assert_eq!(FileName::new(5, 2, Variant::Test).to_string(), "05_2_test.csv");
    }

    #[test]
    fn test_names_restart() {
        let catalog = Catalog::new(9..=10);
        let first: Vec<FileName> = catalog.names().collect();
        let second: Vec<FileName> = catalog.names().collect();
        assert_eq!(first, second);
        assert_eq!(first[0].to_string(), "10_1_1.csv");
        assert_eq!(first[8].to_string(), "09_1_1.csv");
    }

    #[test]
    fn test_empty_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let catalog = Catalog::new(6..=5);
        assert!(catalog.is_empty());
        assert_eq!(catalog.names().count(), 0);
        assert_eq!(catalog.len(), 0);
    }
}
