//! Debug-only invariant assertion helpers.
//!
//! Graph mutations call these after touching storage so that representation
//! invariants stay explicit while release builds remain unaffected.

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}

#[cfg(test)]
mod tests {
    use super::invariant_assert;

    #[test]
    fn holding_invariant_is_silent() {
        invariant_assert(true, "always holds");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Graph invariant violated: broken")]
    fn violated_invariant_panics_in_debug() {
        invariant_assert(false, "broken");
    }
}
