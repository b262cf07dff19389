/// Inclusive interval of leaf labels.
///
/// The labels beneath any subtree are contiguous, so a `(min, max)` pair is
/// enough to describe every internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelRange {
    pub min: u32,
    pub max: u32,
}

impl LabelRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// The one-label range of a leaf.
    pub fn singleton(label: u32) -> Self {
        Self { min: label, max: label }
    }

    pub fn contains(&self, label: u32) -> bool {
        self.min <= label && label <= self.max
    }

    /// Number of labels covered, never zero.
    pub fn len(&self) -> u32 {
        self.max - self.min + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> {
        self.min..=self.max
    }

    /// Smallest range covering both `self` and `other`.
    pub fn hull(&self, other: LabelRange) -> LabelRange {
        LabelRange { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    pub fn is_disjoint(&self, other: LabelRange) -> bool {
        self.max < other.min || other.max < self.min
    }

    /// The labels of `self` on either side of `inner`, as up to two ranges
    /// (left of `inner.min`, right of `inner.max`). `inner` is expected to
    /// lie within `self`; labels of `inner` itself are never returned.
    pub fn minus(&self, inner: LabelRange) -> (Option<LabelRange>, Option<LabelRange>) {
        let left =
            (inner.min > self.min).then(|| LabelRange::new(self.min, inner.min - 1));
        let right =
            (inner.max < self.max).then(|| LabelRange::new(inner.max + 1, self.max));
        (left, right)
    }
}
