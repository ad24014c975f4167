#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A model-declared input field descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActiveField {
    name: String,
}

impl ActiveField {
    pub fn new(name: impl Into<String>) -> Self {
        ActiveField { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Capability consumed from the model evaluator: an ordered collection of
/// active field descriptors, in the order the model expects its inputs.
pub trait Evaluator {
    fn active_fields(&self) -> &[ActiveField];
}

// Handy for tests and for callers that already hold a field list.
impl Evaluator for Vec<ActiveField> {
    fn active_fields(&self) -> &[ActiveField] {
        self
    }
}

/// Extract the ordered field names from an evaluator.
///
/// The evaluator's declared order is the alignment key for positional
/// pairing against vector data, so it is preserved exactly: no resorting,
/// no deduplication. Zero active fields yields an empty sequence.
pub fn resolve_fields<E: Evaluator + ?Sized>(evaluator: &E) -> Vec<String> {
    evaluator
        .active_fields()
        .iter()
        .map(|field| field.name().to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    struct StubEvaluator {
        fields: Vec<ActiveField>,
    }

    impl Evaluator for StubEvaluator {
        fn active_fields(&self) -> &[ActiveField] {
            &self.fields
        }
    }

    #[rstest]
    fn test_resolve_preserves_declared_order() {
        let evaluator = StubEvaluator {
            fields: vec![
                ActiveField::new("z"),
                ActiveField::new("a"),
                ActiveField::new("m"),
            ],
        };
        assert_eq!(resolve_fields(&evaluator), vec!["z", "a", "m"]);
    }

    #[rstest]
    fn test_resolve_keeps_duplicates() {
        let evaluator = StubEvaluator {
            fields: vec![ActiveField::new("x"), ActiveField::new("x")],
        };
        assert_eq!(resolve_fields(&evaluator), vec!["x", "x"]);
    }

    #[rstest]
    fn test_resolve_no_active_fields() {
        let evaluator = StubEvaluator { fields: vec![] };
        assert_eq!(resolve_fields(&evaluator), Vec::<String>::new());
    }
}
