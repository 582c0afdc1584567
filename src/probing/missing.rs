use std::collections::BTreeMap;

use crate::types::HarnessError;

/// Compile-time tag identifying a key shape for missing-key synthesis.
///
/// Dispatch is by this tag through an explicit registry, never by runtime
/// type inspection.
pub trait KeyTag {
    const TAG: &'static str;
}

/// Synthesis rule: given the realized key sample, produce a key that is
/// structurally unequal to every element.
pub type SynthesisRule<K> = fn(&[K]) -> K;

/// Explicit registry of missing-key synthesis rules, keyed by
/// [`KeyTag::TAG`].
///
/// A key type with no registered rule is a hard error rather than a silent
/// fallback: a guessed "probably absent" key would corrupt the
/// missing-probe result without any visible failure.
#[derive(Debug)]
pub struct MissingKeyRegistry<K> {
    rules: BTreeMap<&'static str, SynthesisRule<K>>,
}

impl<K> MissingKeyRegistry<K> {
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }
}

impl<K> Default for MissingKeyRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> MissingKeyRegistry<K>
where
    K: KeyTag + PartialEq,
{
    /// Registers `rule` for `K`'s tag, replacing any previous rule.
    pub fn register(&mut self, rule: SynthesisRule<K>) {
        self.rules.insert(K::TAG, rule);
    }

    pub fn is_registered(&self) -> bool {
        self.rules.contains_key(K::TAG)
    }

    /// Applies the registered rule for `K`'s tag to the realized sample.
    pub fn synthesize(&self, keys: &[K]) -> Result<K, HarnessError> {
        let rule = self
            .rules
            .get(K::TAG)
            .ok_or(HarnessError::UnsupportedKeyType(K::TAG))?;

        let key = rule(keys);
        debug_assert!(
            keys.iter().all(|k| *k != key),
            "synthesis rule for `{}` returned a realized key",
            K::TAG
        );
        Ok(key)
    }
}
