#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dense feature vector: one value per position, every position populated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DenseVector {
    values: Vec<f64>,
}

impl DenseVector {
    /// Create a new dense vector from its values.
    pub fn new(values: Vec<f64>) -> Self {
        DenseVector { values }
    }

    /// Returns the number of positions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the vector has no positions.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The ordered values, one per position.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// A sparse feature vector: a fixed logical size with values defined only
/// at a subset of positions.
///
/// Each populated position is represented by an index-value pair; all other
/// positions are logically absent, which is distinct from holding zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SparseVector {
    size: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Create a new sparse vector from its logical size and the index-value
    /// pairs of its populated positions.
    ///
    /// # Panics
    /// Panics if `indices` and `values` have different lengths.
    pub fn new(size: usize, indices: Vec<usize>, values: Vec<f64>) -> Self {
        assert_eq!(
            indices.len(),
            values.len(),
            "indices and values must have the same length"
        );
        SparseVector {
            size,
            indices,
            values,
        }
    }

    /// Create an empty sparse vector of the given logical size.
    pub fn empty(size: usize) -> Self {
        SparseVector {
            size,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// The logical size of the vector, counting absent positions.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of populated positions.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if no position is populated.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The value at position `i`, or `None` if the position is not populated.
    pub fn value_at(&self, i: usize) -> Option<f64> {
        self.indices
            .iter()
            .position(|&idx| idx == i)
            .map(|pos| self.values[pos])
    }

    /// Materialize the per-position optional values, `Some` at populated
    /// positions and `None` elsewhere. Indices beyond the logical size are
    /// out of range and skipped.
    pub fn to_options(&self) -> Vec<Option<f64>> {
        let mut slots = vec![None; self.size];
        for (&i, &v) in self.indices.iter().zip(self.values.iter()) {
            if i < self.size {
                slots[i] = Some(v);
            }
        }
        slots
    }
}

/// The storage variants of a feature vector.
///
/// The set is closed today, but marked non-exhaustive so that dispatch
/// sites must handle variants added in the future explicitly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum FeatureVector {
    Dense(DenseVector),
    Sparse(SparseVector),
}

impl FeatureVector {
    /// A short name for the storage variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureVector::Dense(_) => "dense",
            FeatureVector::Sparse(_) => "sparse",
        }
    }
}

impl From<DenseVector> for FeatureVector {
    fn from(v: DenseVector) -> Self {
        FeatureVector::Dense(v)
    }
}

impl From<SparseVector> for FeatureVector {
    fn from(v: SparseVector) -> Self {
        FeatureVector::Sparse(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_sparse_value_at() {
        let v = SparseVector::new(5, vec![0, 3], vec![1.5, 2.5]);
        assert_eq!(v.value_at(0), Some(1.5));
        assert_eq!(v.value_at(1), None);
        assert_eq!(v.value_at(3), Some(2.5));
        assert_eq!(v.value_at(4), None);
    }

    #[rstest]
    fn test_sparse_to_options() {
        let v = SparseVector::new(4, vec![1, 2], vec![7.0, 9.0]);
        assert_eq!(v.to_options(), vec![None, Some(7.0), Some(9.0), None]);
    }

    #[rstest]
    fn test_sparse_out_of_range_index_is_skipped() {
        let v = SparseVector::new(2, vec![0, 5], vec![1.0, 2.0]);
        assert_eq!(v.to_options(), vec![Some(1.0), None]);
    }

    #[rstest]
    fn test_empty_sparse_vector() {
        let v = SparseVector::empty(3);
        assert!(v.is_empty());
        assert_eq!(v.size(), 3);
        assert_eq!(v.to_options(), vec![None, None, None]);
    }

    #[rstest]
    #[should_panic(expected = "indices and values must have the same length")]
    fn test_sparse_length_mismatch_panics() {
        SparseVector::new(3, vec![0, 1], vec![1.0]);
    }

    #[rstest]
    fn test_variant_kind() {
        let dense: FeatureVector = DenseVector::new(vec![1.0]).into();
        let sparse: FeatureVector = SparseVector::empty(1).into();
        assert_eq!(dense.kind(), "dense");
        assert_eq!(sparse.kind(), "sparse");
    }
}
