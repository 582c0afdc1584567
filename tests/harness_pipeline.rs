use chrono::NaiveDate;
use probe_core::domain::{
    absent_person, Education, KeyValueGenerator, Person, RosterGenerator, Student,
};
use probe_core::harness::BenchmarkHarness;
use probe_core::probing::MissingKeyRegistry;
use probe_core::types::{ContainerKind, HarnessError, ProbePosition};

fn person_registry() -> MissingKeyRegistry<Person> {
    let mut registry = MissingKeyRegistry::new();
    registry.register(absent_person);
    registry
}

/// Violates the generator contract on purpose: every index maps to the
/// same key.
struct DuplicateGenerator;

impl KeyValueGenerator for DuplicateGenerator {
    type Key = Person;
    type Value = Student;

    fn generate(&self, _index: usize) -> (Person, Student) {
        let person = Person::new("Ivan", "Petrov", NaiveDate::default());
        let student = Student::new(person.clone(), Education::Bachelor, 101);
        (person, student)
    }
}

#[test]
fn empty_sample_yields_empty_report_without_error() {
    let harness = BenchmarkHarness::new(RosterGenerator::default(), person_registry());
    let samples = harness.run(0).unwrap();
    assert!(samples.is_empty());
}

#[test]
fn run_produces_one_sample_per_variant_probe_combination_in_fixed_order() {
    let harness = BenchmarkHarness::new(RosterGenerator::default(), person_registry());
    let samples = harness.run(5).unwrap();

    assert_eq!(samples.len(), 16);
    for (i, sample) in samples.iter().enumerate() {
        assert_eq!(sample.variant, ContainerKind::ORDER[i / 4]);
        assert_eq!(sample.probe, ProbePosition::ORDER[i % 4]);
    }
}

#[test]
fn every_sample_reports_the_expected_membership_outcome() {
    let harness = BenchmarkHarness::new(RosterGenerator::default(), person_registry());
    let samples = harness.run(32).unwrap();

    assert!(samples.iter().all(|s| s.correct));
}

#[test]
fn single_pair_run_resolves_all_present_probes_to_the_same_key() {
    let harness = BenchmarkHarness::new(RosterGenerator::default(), person_registry());
    let samples = harness.run(1).unwrap();

    // First, middle, and last all collapse to position 0; every variant
    // still answers every probe correctly.
    assert_eq!(samples.len(), 16);
    assert!(samples.iter().all(|s| s.correct));
}

#[test]
fn duplicate_key_aborts_the_run_before_any_timing() {
    let harness = BenchmarkHarness::new(DuplicateGenerator, person_registry());
    let err = harness.run(2).unwrap_err();

    match err {
        HarnessError::DuplicateKeyViolation(key) => {
            assert!(key.contains("Ivan Petrov"));
        }
        other => panic!("expected DuplicateKeyViolation, got {other:?}"),
    }
}

#[test]
fn unregistered_key_type_fails_the_run() {
    let harness = BenchmarkHarness::new(RosterGenerator::default(), MissingKeyRegistry::new());
    let err = harness.run(3).unwrap_err();

    match err {
        HarnessError::UnsupportedKeyType(tag) => assert_eq!(tag, "person"),
        other => panic!("expected UnsupportedKeyType, got {other:?}"),
    }
}

#[test]
fn runs_are_deterministic_apart_from_elapsed_time() {
    let harness = BenchmarkHarness::new(RosterGenerator::default(), person_registry());

    let first = harness.run(12).unwrap();
    let second = harness.run(12).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.variant, b.variant);
        assert_eq!(a.probe, b.probe);
        assert_eq!(a.correct, b.correct);
    }
}
