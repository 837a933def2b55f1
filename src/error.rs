/// everything that can go wrong between the wire and the solver.
///
/// parse failures are recovered at the boundary and never reach
/// the solver. SolverTimeout is caught inside the move selector
/// and replaced by the fallback heuristic. Unsatisfiable means
/// the shot history contradicts the counts and is surfaced to
/// the caller rather than silently misfiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("malformed coordinate")]
    MalformedCoord,
    #[error("malformed ship record")]
    MalformedShip,
    #[error("malformed counts")]
    MalformedCounts,
    #[error("malformed shot record")]
    MalformedShot,
    #[error("counts out of range")]
    CountsOutOfRange,
    #[error("solver timed out")]
    SolverTimeout,
    #[error("shot history inconsistent with counts")]
    Unsatisfiable,
}
