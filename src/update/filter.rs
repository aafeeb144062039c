//! Filtering and canonical ordering of dependency lists
//!
//! Filtering changes membership (direct vs indirect), canonical ordering
//! changes sequence. The interactive selection parser resolves positions
//! against the canonically ordered list, so both must be deterministic.

use crate::domain::Dependency;

/// Keep only direct dependencies unless `include_indirect` is set
///
/// With `include_indirect` the input is returned unchanged, in its original order.
pub fn filter_dependencies(deps: &[Dependency], include_indirect: bool) -> Vec<Dependency> {
    if include_indirect {
        return deps.to_vec();
    }
    deps.iter().filter(|d| !d.indirect).cloned().collect()
}

/// Sort direct dependencies before indirect ones, each group by path
///
/// The sort is stable and compares paths byte-wise.
pub fn canonical_order(mut deps: Vec<Dependency>) -> Vec<Dependency> {
    deps.sort_by(|a, b| {
        a.indirect
            .cmp(&b.indirect)
            .then_with(|| a.path.as_bytes().cmp(b.path.as_bytes()))
    });
    deps
}

/// Count the indirect dependencies in a list
pub fn count_indirect(deps: &[Dependency]) -> usize {
    deps.iter().filter(|d| d.indirect).count()
}
