use std::fmt;

/// Errors raised by the search engine itself.
///
/// An unreachable goal is not an error; it is reported as an empty result
/// set. Panics from caller-supplied callbacks propagate unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A stepper produced a step with `cost <= 0`. The bucket-queue delay
    /// model is undefined for non-positive costs, so the search stops
    /// immediately rather than corrupt its bookkeeping.
    NonPositiveCost { cost: i32 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCost { cost } => {
                write!(f, "step cost must be positive, got {cost}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_cost() {
        let err = SearchError::NonPositiveCost { cost: -3 };
        assert_eq!(err.to_string(), "step cost must be positive, got -3");
    }
}
