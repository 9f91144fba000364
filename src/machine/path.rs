//! Lowest-common-ancestor path computation.
//!
//! Given the source and target of a transition, the engine needs to know how
//! many states to exit (the source and its ancestors up to, excluding, the
//! common ancestor) and how many to enter (the target side of the same
//! boundary). This module computes exactly those two counts.

/// Exit and enter counts between two positions in the state tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionPath {
    /// States to exit, counting the source itself. Zero when the source is
    /// the common ancestor (a move into a descendant).
    pub exits: usize,
    /// States to enter, counting the target itself. Zero when the target is
    /// the common ancestor (a move out to an enclosing state).
    pub enters: usize,
}

/// Find the common-ancestor distances between `from` and `to`.
///
/// `parent_of` resolves one parent link; the walk scans `from`'s chain
/// outward (distance 0 at `from` itself) and for each candidate scans `to`'s
/// chain outward, returning the first match. When the two states live in
/// disjoint trees there is no match and the full chain lengths come back:
/// exit everything on the source side, enter everything on the target side.
///
/// Cost is `depth(from) * depth(to)`. Hierarchy depth is authored
/// configuration, not runtime-scaled data, so the quadratic walk is fine.
pub(crate) fn find_path<'a, F>(from: &'a str, to: &'a str, parent_of: F) -> TransitionPath
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut exits = 0;
    let mut from_cursor = Some(from);
    while let Some(from_candidate) = from_cursor {
        let mut enters = 0;
        let mut to_cursor = Some(to);
        while let Some(to_candidate) = to_cursor {
            if from_candidate == to_candidate {
                return TransitionPath { exits, enters };
            }
            enters += 1;
            to_cursor = parent_of(to_candidate);
        }
        exits += 1;
        from_cursor = parent_of(from_candidate);
    }

    // Disjoint trees: both chains exhausted without a match.
    let mut enters = 0;
    let mut to_cursor = Some(to);
    while let Some(name) = to_cursor {
        enters += 1;
        to_cursor = parent_of(name);
    }
    TransitionPath { exits, enters }
}
