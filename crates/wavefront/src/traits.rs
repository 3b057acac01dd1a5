use crate::path::Step;

/// Step-generation seam: enumerates the moves available from a state.
///
/// Implemented for free by any `Fn(&S, &mut Vec<Step<S>>)` closure, so
/// most callers never name this trait.
pub trait Stepper<S> {
    /// Append the steps available from `from` into `buf`. The engine
    /// clears `buf` before calling. Every produced cost must be > 0.
    fn steps(&self, from: &S, buf: &mut Vec<Step<S>>);
}

impl<S, F> Stepper<S> for F
where
    F: Fn(&S, &mut Vec<Step<S>>),
{
    fn steps(&self, from: &S, buf: &mut Vec<Step<S>>) {
        self(from, buf);
    }
}

/// Adapter for unweighted searches: wraps a neighbor function and gives
/// every produced neighbor a cost of 1. Neighbors are handed to a `push`
/// callback and land directly in the engine's step buffer, so the
/// adapter allocates nothing of its own.
pub struct UnitStepper<F>(pub F);

impl<S, F> Stepper<S> for UnitStepper<F>
where
    F: Fn(&S, &mut dyn FnMut(S)),
{
    fn steps(&self, from: &S, buf: &mut Vec<Step<S>>) {
        (self.0)(from, &mut |s| buf.push(Step::new(s, 1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_stepper() {
        let steps = |&x: &i32, buf: &mut Vec<Step<i32>>| {
            buf.push(Step::new(x + 1, 2));
        };
        let mut buf = Vec::new();
        Stepper::steps(&steps, &5, &mut buf);
        assert_eq!(buf, vec![Step::new(6, 2)]);
    }

    #[test]
    fn unit_stepper_assigns_cost_one() {
        let steps = UnitStepper(|&x: &i32, push: &mut dyn FnMut(i32)| {
            push(x - 1);
            push(x + 1);
        });
        let mut buf = Vec::new();
        steps.steps(&0, &mut buf);
        assert_eq!(buf, vec![Step::new(-1, 1), Step::new(1, 1)]);
    }

    #[test]
    fn unit_stepper_pushes_straight_into_buffer() {
        let steps = UnitStepper(|&x: &i32, push: &mut dyn FnMut(i32)| push(x + 1));
        let mut buf = vec![Step::new(9, 9)];
        steps.steps(&0, &mut buf);
        assert_eq!(buf, vec![Step::new(9, 9), Step::new(1, 1)]);
    }
}
