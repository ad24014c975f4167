use std::collections::HashMap;

use crate::errors::{ConversionError, Result};
use crate::fields::{Evaluator, resolve_fields};
use crate::vector::{DenseVector, FeatureVector, SparseVector};

/// The output mapping from field name to value, consumed by a model
/// evaluator.
///
/// Keys are unique; if the evaluator declares the same field name at more
/// than one position, the last pairing processed wins.
pub type FeatureMap = HashMap<String, f64>;

/// Convert a dense vector by pairing `fields[i]` with `vector.values()[i]`.
///
/// The pairing is a truncating positional zip: it stops at the shorter of
/// the two sequences, silently dropping the unmatched tail of the longer
/// one. Every position covered by the pairing is mapped.
pub fn convert_dense(vector: &DenseVector, fields: &[String]) -> FeatureMap {
    fields
        .iter()
        .cloned()
        .zip(vector.values().iter().copied())
        .collect()
}

/// Convert a sparse vector by pairing `fields[i]` with the optional value
/// at position `i`, keeping only populated positions.
///
/// Absent positions are dropped entirely rather than mapped to zero or
/// null; downstream evaluators distinguish "field omitted" from
/// "field = 0". The same truncating zip as [`convert_dense`] bounds the
/// pairing by the shorter of the field list and the vector's logical size.
pub fn convert_sparse(vector: &SparseVector, fields: &[String]) -> FeatureMap {
    fields
        .iter()
        .zip(vector.to_options())
        .filter_map(|(field, value)| value.map(|v| (field.clone(), v)))
        .collect()
}

/// Convert a feature vector into a field map for the given evaluator.
///
/// Resolves the evaluator's active field names, then dispatches on the
/// vector's storage variant. This is the sole public entry point of the
/// conversion core.
///
/// # Examples
///
/// ```
/// use fieldmap::{ActiveField, DenseVector, FeatureVector, convert_vector};
///
/// let evaluator = vec![ActiveField::new("a"), ActiveField::new("b")];
/// let vector = FeatureVector::from(DenseVector::new(vec![1.0, 2.0]));
///
/// let map = convert_vector(&vector, &evaluator).unwrap();
/// assert_eq!(map["a"], 1.0);
/// assert_eq!(map["b"], 2.0);
/// ```
///
/// Sparse vectors omit absent positions instead of mapping them to zero:
///
/// ```
/// use fieldmap::{ActiveField, FeatureVector, SparseVector, convert_vector};
///
/// let evaluator = vec![ActiveField::new("a"), ActiveField::new("b")];
/// let vector = FeatureVector::from(SparseVector::new(2, vec![1], vec![9.0]));
///
/// let map = convert_vector(&vector, &evaluator).unwrap();
/// assert!(!map.contains_key("a"));
/// assert_eq!(map["b"], 9.0);
/// ```
pub fn convert_vector<E: Evaluator + ?Sized>(
    vector: &FeatureVector,
    evaluator: &E,
) -> Result<FeatureMap> {
    let fields = resolve_fields(evaluator);
    match vector {
        FeatureVector::Dense(dense) => Ok(convert_dense(dense, &fields)),
        FeatureVector::Sparse(sparse) => Ok(convert_sparse(sparse, &fields)),
        // FeatureVector is non-exhaustive; a variant added without a
        // conversion rule must fail loudly, not misbehave.
        #[allow(unreachable_patterns)]
        other => Err(ConversionError::UnsupportedVariant(other.kind().into())),
    }
}
