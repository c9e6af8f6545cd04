//! C3 linearization of a class's bases.
//!
//! The resulting order decides both attribute lookup and field precedence.

use std::sync::Arc;

use super::ComponentClass;
use crate::error::{BlockError, Result};

/// Linearize the ancestors of a class named `class_name` with direct `bases`.
///
/// The returned list excludes the class itself and runs from most to least derived.
pub(crate) fn linearize(
    class_name: &str,
    bases: &[Arc<ComponentClass>],
) -> Result<Vec<Arc<ComponentClass>>> {
    let mut sequences: Vec<Vec<Arc<ComponentClass>>> =
        bases.iter().map(|base| base.linearization()).collect();
    sequences.push(bases.to_vec());

    let mut result = Vec::new();
    loop {
        sequences.retain(|seq| !seq.is_empty());
        if sequences.is_empty() {
            return Ok(result);
        }

        // A good head is one that appears in no sequence's tail.
        let next = sequences
            .iter()
            .map(|seq| &seq[0])
            .find(|head| {
                !sequences
                    .iter()
                    .any(|seq| seq[1..].iter().any(|c| Arc::ptr_eq(c, head)))
            })
            .cloned();

        let Some(next) = next else {
            return Err(BlockError::InconsistentMro(class_name.to_string()));
        };

        for seq in sequences.iter_mut() {
            if Arc::ptr_eq(&seq[0], &next) {
                seq.remove(0);
            }
        }
        result.push(next);
    }
}
