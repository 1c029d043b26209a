// tests/filter_tests.rs
use suite_harness::core::{NamePattern, UnitPattern};
use suite_harness::{Selection, SuiteError};

#[test]
fn test_parse_suite_and_case_patterns() {
    let selection = Selection::parse("empty_tests, net/* ,*/empty_test_case_1").unwrap();
    assert_eq!(
        selection.patterns(),
        &[
            UnitPattern {
                suite: NamePattern::Exact("empty_tests".into()),
                case: None,
            },
            UnitPattern {
                suite: NamePattern::Exact("net".into()),
                case: Some(NamePattern::Any),
            },
            UnitPattern {
                suite: NamePattern::Any,
                case: Some(NamePattern::Exact("empty_test_case_1".into())),
            },
        ]
    );
    assert_eq!(selection.to_string(), "empty_tests,net/*,*/empty_test_case_1");
}

#[test]
fn test_matching_versus_naming() {
    let selection: Selection = "*/hello,greet".parse().unwrap();

    assert!(selection.selects_suite("anything"));
    assert!(selection.selects_case("anything", "hello"));
    assert!(!selection.selects_case("anything", "bye"));
    assert!(selection.selects_case("greet", "bye"));

    assert!(!selection.names_suite("anything"));
    assert!(!selection.names_case("anything", "hello"));
    assert!(selection.names_suite("greet"));
    assert!(!selection.names_case("greet", "bye"));
}

#[test]
fn test_invalid_filters() {
    for input in ["", "   ", "a,,b", "a/", "/b", "a/b/c"] {
        let err = Selection::parse(input).unwrap_err();
        assert!(matches!(err, SuiteError::InvalidFilter(_)), "{input:?}");
    }
}
