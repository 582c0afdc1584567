use probe_core::domain::{absent_person, KeyValueGenerator, Person, RosterGenerator};
use probe_core::probing::MissingKeyRegistry;
use probe_core::types::HarnessError;

fn realized_keys(n: usize) -> Vec<Person> {
    let generator = RosterGenerator::default();
    (0..n).map(|i| generator.generate(i).0).collect()
}

#[test]
fn synthesized_key_is_never_a_realized_key() {
    let mut registry = MissingKeyRegistry::new();
    registry.register(absent_person);

    for n in [1, 2, 7, 33, 128] {
        let keys = realized_keys(n);
        let missing = registry.synthesize(&keys).unwrap();
        assert!(
            keys.iter().all(|k| *k != missing),
            "synthesized key collided with the sample at n = {n}"
        );
    }
}

#[test]
fn synthesis_without_a_registered_rule_is_an_explicit_failure() {
    let registry: MissingKeyRegistry<Person> = MissingKeyRegistry::new();
    let keys = realized_keys(4);

    match registry.synthesize(&keys).unwrap_err() {
        HarnessError::UnsupportedKeyType(tag) => assert_eq!(tag, "person"),
        other => panic!("expected UnsupportedKeyType, got {other:?}"),
    }
}

#[test]
fn registration_is_observable() {
    let mut registry: MissingKeyRegistry<Person> = MissingKeyRegistry::new();
    assert!(!registry.is_registered());

    registry.register(absent_person);
    assert!(registry.is_registered());
}

#[test]
fn person_sentinel_is_stable_regardless_of_sample() {
    let empty = absent_person(&[]);
    let populated = absent_person(&realized_keys(50));
    assert_eq!(empty, populated);
}
