use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The four container representations under comparison.
///
/// All four wrap the same logical key→value mapping; only the internal
/// representation differs, and with it the complexity class of a
/// membership query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    Linear,
    Hash,
    Persistent,
    Sorted,
}

impl ContainerKind {
    /// Fixed execution order within a benchmark run. The report sequence is
    /// variant-major: every probe for one variant before the next variant.
    pub const ORDER: [ContainerKind; 4] = [
        ContainerKind::Linear,
        ContainerKind::Hash,
        ContainerKind::Persistent,
        ContainerKind::Sorted,
    ];
}

/// A designated query position within the realized sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbePosition {
    /// Position `0`.
    First,
    /// Position `⌊n/2⌋`.
    Middle,
    /// Position `n - 1`.
    Last,
    /// A synthesized key absent from the realized sample.
    Missing,
}

impl ProbePosition {
    /// Fixed probe order within one variant.
    pub const ORDER: [ProbePosition; 4] = [
        ProbePosition::First,
        ProbePosition::Middle,
        ProbePosition::Last,
        ProbePosition::Missing,
    ];

    /// Whether a membership query at this position must report presence.
    pub fn expected_present(self) -> bool {
        !matches!(self, ProbePosition::Missing)
    }
}

/// One timed membership query against one container variant.
///
/// `elapsed` comes from the monotonic clock and carries no correctness
/// weight; `correct` records whether the variant returned the theoretically
/// expected answer for the probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSample {
    pub variant: ContainerKind,
    pub probe: ProbePosition,
    pub elapsed: Duration,
    pub correct: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("no missing-key synthesis rule registered for key type `{0}`")]
    UnsupportedKeyType(&'static str),

    #[error("generator produced duplicate key: {0}")]
    DuplicateKeyViolation(String),
}
