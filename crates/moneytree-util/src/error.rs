use thiserror::Error;

/// Errors exposed by `moneytree-util`.
#[derive(Debug, Error)]
pub enum UtilError {
    #[error("cache key serialization failed: {0}")]
    KeySerialization(#[from] serde_json::Error),

    #[error("source range is degenerate: low == high == {low}")]
    DegenerateSourceRange { low: f64 },
}

/// Error for memoized computations that can themselves fail.
///
/// A failing computation propagates unchanged through `Compute` and is never
/// cached.
#[derive(Debug, Error)]
pub enum MemoError<E> {
    #[error("cache key serialization failed: {0}")]
    Key(#[from] serde_json::Error),

    #[error(transparent)]
    Compute(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_range_message_carries_bound() {
        let err = UtilError::DegenerateSourceRange { low: 3.5 };
        assert_eq!(
            err.to_string(),
            "source range is degenerate: low == high == 3.5"
        );
    }
}
