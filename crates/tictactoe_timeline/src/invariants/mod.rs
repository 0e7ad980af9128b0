//! First-class invariants for a game history.
//!
//! Invariants are logical properties that must hold after every input.
//! They are testable independently and checked in debug builds after each
//! accepted move. None of them depends on list order or on which mark is to
//! move, since a reversed list lets either mark play on any board.

use crate::history::GameHistory;
use tracing::warn;

pub mod pointer_in_bounds;
pub mod single_step;
pub mod single_winner;

pub use pointer_in_bounds::PointerInBoundsInvariant;
pub use single_step::SingleStepInvariant;
pub use single_winner::SingleWinnerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    PointerInBoundsInvariant,
    SingleStepInvariant,
    SingleWinnerInvariant,
);

/// Asserts that all history invariants hold (debug builds only).
pub fn assert_invariants(history: &GameHistory) {
    if cfg!(debug_assertions)
        && let Err(violations) = HistoryInvariants::check_all(history)
    {
        for violation in &violations {
            warn!(%violation, "History invariant violated");
        }
        panic!("History invariants violated: {violations:?}");
    }
}
