pub mod missing;

use crate::types::{HarnessError, ProbePosition};
pub use missing::{KeyTag, MissingKeyRegistry, SynthesisRule};

/// A single membership query at a designated sample position.
#[derive(Debug, Clone)]
pub struct Probe<K> {
    pub position: ProbePosition,
    pub key: K,
}

/// Selects the four probes for a non-empty realized sample.
///
/// First, middle, and last are drawn from positions `0`, `⌊n/2⌋`, and
/// `n - 1` of the key sequence; the missing key comes from the registry and
/// is structurally unequal to every realized key.
pub fn select_probes<K>(
    keys: &[K],
    registry: &MissingKeyRegistry<K>,
) -> Result<[Probe<K>; 4], HarnessError>
where
    K: KeyTag + Clone + PartialEq,
{
    debug_assert!(!keys.is_empty(), "probe selection needs a non-empty sample");

    let n = keys.len();
    let missing = registry.synthesize(keys)?;

    Ok([
        Probe {
            position: ProbePosition::First,
            key: keys[0].clone(),
        },
        Probe {
            position: ProbePosition::Middle,
            key: keys[n / 2].clone(),
        },
        Probe {
            position: ProbePosition::Last,
            key: keys[n - 1].clone(),
        },
        Probe {
            position: ProbePosition::Missing,
            key: missing,
        },
    ])
}
