use std::collections::HashSet;

use crate::model::VertexKey;
use crate::traversal::PredecessorMap;

/// Walk predecessor links back from `target` to `source`.
///
/// Returns the vertices from `source` to `target` inclusive, or an empty
/// path if the walk hits a vertex without a predecessor before reaching
/// `source`. `target == source` yields `[source]`. A predecessor chain that
/// loops back on itself is treated as unreachable.
pub fn reconstruct_path<I: VertexKey>(pred: &PredecessorMap<I>, source: &I, target: &I) -> Vec<I> {
    let mut path = vec![target.clone()];
    let mut seen: HashSet<&I> = HashSet::new();
    let mut current = target;

    while current != source {
        if !seen.insert(current) {
            return Vec::new();
        }
        match pred.get(current) {
            Some(Some(parent)) => {
                path.push(parent.clone());
                current = parent;
            }
            _ => return Vec::new(),
        }
    }

    path.reverse();
    path
}
