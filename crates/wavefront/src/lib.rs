//! Shortest-path search over caller-defined state spaces.
//!
//! The engine runs a bucket-queue wavefront search: each in-progress path
//! waits in the frontier for as many rounds as its last step cost, so
//! paths become due for expansion in non-decreasing order of accumulated
//! cost. With unit costs this is plain BFS; with arbitrary positive
//! integer costs the result matches Dijkstra, except that *every*
//! minimum-cost path to a goal is returned, not just one.
//!
//! The state type is opaque to the engine (`Clone + Eq + Hash` is all it
//! asks for); behavior is assembled from caller-supplied strategies:
//!
//! | Strategy | Shape | Role |
//! |---|---|---|
//! | step generation | [`Stepper`] | moves available from a state, each with a cost > 0 |
//! | termination | `Fn(&S) -> bool` | which states count as accepted goals |
//! | filter | `Fn(&[S]) -> bool` | discard a candidate path before further expansion |
//! | collapse | `Fn(&[S]) -> K` | deduplicate paths sharing a key, keeping the cheapest |
//!
//! # Example
//!
//! ```
//! use wavefront::{Step, Wavefront};
//!
//! // Reach 6 from 1, doubling or incrementing at unit cost.
//! let steps = |&x: &u32, buf: &mut Vec<Step<u32>>| {
//!     buf.push(Step::new(x * 2, 1));
//!     buf.push(Step::new(x + 1, 1));
//! };
//! let paths = Wavefront::new().find(1u32, &steps, |&x: &u32| x == 6)?;
//! assert_eq!(paths.len(), 1);
//! assert_eq!(paths[0].cost, 3);
//! assert_eq!(paths[0].states, vec![2, 3, 6]);
//! # Ok::<(), wavefront::SearchError>(())
//! ```

mod error;
mod frontier;
mod path;
mod search;
mod traits;

pub use error::SearchError;
pub use path::{Path, Step};
pub use search::Wavefront;
pub use traits::{Stepper, UnitStepper};
