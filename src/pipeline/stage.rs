//! Stage trait and related utilities.

use crate::Error;

use super::Verdict;

/// A single stage in the classification pipeline.
///
/// Each stage examines the message text and either:
/// - Returns `Some(verdict)` if it can decide
/// - Returns `None` to pass to the next stage
///
/// # Implementation Notes
///
/// - Stages must be pure over their own immutable state; the serving path is
///   shared read-only across threads
/// - Return `None` liberally - it's better to let the next stage try
/// - Use the `source` field in `Verdict` to identify your stage
pub trait Stage: Send + Sync {
    /// The name of this stage (for debugging/reporting).
    fn name(&self) -> &'static str;

    /// Try to classify the message text.
    ///
    /// Returns:
    /// - `Ok(Some(verdict))` if this stage decides
    /// - `Ok(None)` to pass to the next stage
    /// - `Err(e)` on error (will propagate up)
    fn classify(&self, text: &str) -> Result<Option<Verdict>, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestStage {
        verdict: Option<Verdict>,
    }

    impl Stage for TestStage {
        fn name(&self) -> &'static str {
            "test"
        }

        fn classify(&self, _text: &str) -> Result<Option<Verdict>, Error> {
            Ok(self.verdict.clone())
        }
    }

    #[test]
    fn test_stage_trait() {
        let stage = TestStage {
            verdict: Some(Verdict::new(true, 0.99, "test")),
        };
        assert_eq!(stage.name(), "test");
        assert!(stage.classify("anything").unwrap().unwrap().is_spam);
    }
}
