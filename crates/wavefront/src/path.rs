/// A single move produced by a [`Stepper`](crate::Stepper): the state it
/// leads to and its strictly positive cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step<S> {
    pub state: S,
    pub cost: i32,
}

impl<S> Step<S> {
    /// Create a new step.
    #[inline]
    pub const fn new(state: S, cost: i32) -> Self {
        Self { state, cost }
    }
}

/// A completed search result: the states visited after the start (the
/// start itself is excluded) and the total cost of the traversed steps.
///
/// An empty `states` with `cost == 0` means the start state already
/// satisfied the termination predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<S> {
    pub states: Vec<S>,
    pub cost: i32,
}

impl<S> Path<S> {
    /// The final state of the path, or `None` for the zero-step path.
    #[inline]
    pub fn last(&self) -> Option<&S> {
        self.states.last()
    }

    /// Number of steps taken.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether this is the zero-step path (start satisfied the goal).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn step_round_trip() {
        let step = Step::new((3, 7), 42);
        let json = serde_json::to_string(&step).unwrap();
        let back: Step<(i32, i32)> = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }

    #[test]
    fn path_round_trip() {
        let path = Path {
            states: vec!['a', 'b', 'c'],
            cost: 5,
        };
        let json = serde_json::to_string(&path).unwrap();
        let back: Path<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }
}
