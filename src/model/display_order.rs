// Display ordering for mod names, with BSIPA always first

use crate::constants::BSIPA_NAME;
use std::cmp::Ordering;

/// Sort key for a mod name. BSIPA maps to the empty string so it sorts
/// before every other name; everything else sorts by its own name.
pub fn sort_key(name: &str) -> &str {
    if name == BSIPA_NAME { "" } else { name }
}

/// Compare two mod names in display order
pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(sort_key(b))
}
