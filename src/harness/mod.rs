pub mod timing;

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::containers::{HashContainer, LinearContainer, PersistentBuilder, SortedContainer};
use crate::domain::KeyValueGenerator;
use crate::probing::{select_probes, KeyTag, MissingKeyRegistry};
use crate::types::{ContainerKind, HarnessError, TimingSample};
use timing::time_membership;

/// Drives one benchmark run: generate, validate, build, probe, time.
///
/// Single-threaded and synchronous end to end. Each variant is built to
/// completion before any probe is timed, and probes never overlap, so a
/// measurement always attributes the CPU to exactly one variant.
pub struct BenchmarkHarness<G: KeyValueGenerator> {
    generator: G,
    registry: MissingKeyRegistry<G::Key>,
}

impl<G> BenchmarkHarness<G>
where
    G: KeyValueGenerator,
    G::Key: Clone + Eq + Hash + Ord + Display + KeyTag,
    G::Value: Clone + PartialEq,
{
    pub fn new(generator: G, registry: MissingKeyRegistry<G::Key>) -> Self {
        Self {
            generator,
            registry,
        }
    }

    /// Runs the full pipeline over a sample of `n` pairs.
    ///
    /// Returns one sample per (variant, probe) combination, variant-major
    /// in the fixed order of [`ContainerKind::ORDER`] with probes in the
    /// fixed order of [`ProbePosition::ORDER`](crate::types::ProbePosition::ORDER).
    /// `n = 0` is well-defined: no probe position exists, so the result set
    /// is empty. Precondition violations abort the whole run; partial
    /// results would be misleading.
    pub fn run(&self, n: usize) -> Result<Vec<TimingSample>, HarnessError> {
        // 1. Generation
        let pairs: Vec<(G::Key, G::Value)> =
            (0..n).map(|i| self.generator.generate(i)).collect();

        // 2. Uniqueness, validated once before any container is built or
        //    probe timed. Hash and Sorted would otherwise fail differently
        //    (silent overwrite vs broken order assumptions).
        let mut seen = HashSet::with_capacity(pairs.len());
        for (key, _) in &pairs {
            if !seen.insert(key) {
                return Err(HarnessError::DuplicateKeyViolation(key.to_string()));
            }
        }

        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        // 3. Build phase: all four variants from the identical pair slice
        let linear = LinearContainer::from_pairs(&pairs);
        let hashed = HashContainer::from_pairs(&pairs);
        let sorted = SortedContainer::from_pairs(&pairs);
        let mut builder = PersistentBuilder::new();
        for (key, value) in &pairs {
            builder.insert(key.clone(), value.clone());
        }
        let persistent = builder.finish();

        // 4. Probe selection
        let keys: Vec<G::Key> = pairs.iter().map(|(key, _)| key.clone()).collect();
        let probes = select_probes(&keys, &self.registry)?;

        // 5. Timed probes, variant-major. One membership query per sample:
        //    the key scan for Linear, the rich-key map for Hash, the
        //    balanced map for Persistent, the binary search for Sorted.
        let mut samples = Vec::with_capacity(ContainerKind::ORDER.len() * probes.len());
        for variant in ContainerKind::ORDER {
            for probe in &probes {
                let expected = probe.position.expected_present();
                let (elapsed, correct) = match variant {
                    ContainerKind::Linear => {
                        time_membership(expected, || linear.contains_key(&probe.key))
                    }
                    ContainerKind::Hash => {
                        time_membership(expected, || hashed.contains_key(&probe.key))
                    }
                    ContainerKind::Persistent => {
                        time_membership(expected, || persistent.contains_in_map(&probe.key))
                    }
                    ContainerKind::Sorted => {
                        time_membership(expected, || sorted.contains_in_array(&probe.key))
                    }
                };
                samples.push(TimingSample {
                    variant,
                    probe: probe.position,
                    elapsed,
                    correct,
                });
            }
        }

        Ok(samples)
    }
}
