//! Unit tests for the operation framework, node model and error types.
use nagare::node::fmt_number;
use nagare::ops::{reduce_numbers, reduce_text};
use nagare::prelude::*;

const ALL_OPS: [Op; 6] = [Op::Add, Op::Sub, Op::Mul, Op::Div, Op::Min, Op::Max];

#[test]
fn test_number_reduce_matches_explicit_left_fold() {
    let values = [7.5, -2.0, 3.25];
    for op in ALL_OPS {
        let expected = op.apply_number(op.apply_number(values[0], values[1]), values[2]);
        let reduced = reduce_numbers(&values, op).unwrap();
        assert_eq!(
            reduced.to_bits(),
            expected.to_bits(),
            "op {} did not left-fold",
            op
        );
    }
}

#[test]
fn test_text_reduce_matches_explicit_left_fold() {
    let values = ["ba".to_string(), "ab".to_string(), "b".to_string()];
    for op in ALL_OPS {
        let expected = op.apply_text(&op.apply_text(&values[0], &values[1]), &values[2]);
        assert_eq!(reduce_text(&values, op).unwrap(), expected, "op {}", op);
    }
}

#[test]
fn test_reduce_of_single_element_is_identity() {
    assert_eq!(reduce_numbers(&[4.0], Op::Div), Some(4.0));
    assert_eq!(reduce_text(&["x".to_string()], Op::Mul).as_deref(), Some("x"));
}

#[test]
fn test_reduce_of_empty_sequence_is_none() {
    assert_eq!(reduce_numbers(&[], Op::Add), None);
    assert_eq!(reduce_text(&[], Op::Add), None);
}

#[test]
fn test_number_division_by_zero_follows_ieee754() {
    assert_eq!(Op::Div.apply_number(1.0, 0.0), f64::INFINITY);
    assert_eq!(Op::Div.apply_number(-1.0, 0.0), f64::NEG_INFINITY);
    assert!(Op::Div.apply_number(0.0, 0.0).is_nan());
}

#[test]
fn test_text_add_concatenates() {
    assert_eq!(Op::Add.apply_text("hi", "hi"), "hihi");
}

#[test]
fn test_text_sub_removes_first_occurrence_of_each_character() {
    assert_eq!(Op::Sub.apply_text("aab", "a"), "ab");
    assert_eq!(Op::Sub.apply_text("aab", "ba"), "a");
    // Not symmetric: removing from the shorter side behaves differently.
    assert_eq!(Op::Sub.apply_text("a", "aab"), "");
}

#[test]
fn test_text_mul_renders_cartesian_character_pairs() {
    assert_eq!(Op::Mul.apply_text("ab", "cd"), "(a,c)(a,d)(b,c)(b,d)");
    assert_eq!(Op::Mul.apply_text("ab", ""), "");
}

#[test]
fn test_text_div_keeps_prefix_before_first_match() {
    assert_eq!(Op::Div.apply_text("hello-world", "-"), "hello");
    assert_eq!(Op::Div.apply_text("abc", "z"), "abc");
    assert_eq!(Op::Div.apply_text("a-b-c", "-"), "a");
}

#[test]
fn test_text_min_max_are_lexicographic() {
    assert_eq!(Op::Min.apply_text("apple", "banana"), "apple");
    assert_eq!(Op::Max.apply_text("apple", "banana"), "banana");
    assert_eq!(Op::Min.apply_text("same", "same"), "same");
}

#[test]
fn test_op_parses_from_definition_documents() {
    let op: Op = serde_json::from_str("\"Add\"").unwrap();
    assert_eq!(op, Op::Add);

    // Unsupported operations are rejected at parse time, never at
    // evaluation time.
    assert!(serde_json::from_str::<Op>("\"Pow\"").is_err());
}

#[test]
fn test_number_formatting() {
    assert_eq!(fmt_number(42.0), "42");
    assert_eq!(fmt_number(-3.0), "-3");
    assert_eq!(fmt_number(2.5), "2.5");
}

#[test]
fn test_node_display_text_capability() {
    let number = Node::number_input(1, "n: ");
    assert_eq!(number.display_text().as_deref(), Some("0"));

    let title = Node::new(
        2,
        NodeKind::Title {
            title: "T".to_string(),
            body: "B".to_string(),
        },
    );
    assert_eq!(title.display_text().as_deref(), Some("T\nB"));

    let display = Node::new(3, NodeKind::Display { deps: vec![1] });
    assert_eq!(display.display_text(), None);
    assert_eq!(Node::new(4, NodeKind::End).display_text(), None);
}

#[test]
fn test_file_extension_translation() {
    assert_eq!(FileExt::from_extension(".txt"), Some(FileExt::Txt));
    assert_eq!(FileExt::from_extension("csv"), Some(FileExt::Csv));
    assert_eq!(FileExt::from_extension(".flw"), None);
    assert_eq!(FileExt::Csv.delimiter(), ",");
    assert_eq!(FileExt::Txt.suffix(), ".txt");
}

#[test]
fn test_node_id_gen_is_monotonic_from_one() {
    let mut ids = NodeIdGen::new();
    assert_eq!(ids.next_id(), 1);
    assert_eq!(ids.next_id(), 2);
    assert_eq!(ids.next_id(), 3);
}

#[test]
fn test_error_display() {
    let err = EvalError::DependencyNotFound(42);
    assert!(err.to_string().contains("42"));

    let mismatch = EvalError::TypeMismatch {
        expected: "NumberInput or FloatCalc".to_string(),
        found: "TextInput".to_string(),
    };
    assert!(mismatch.to_string().contains("NumberInput"));
    assert!(mismatch.to_string().contains("TextInput"));

    let handle = EvalError::InvalidHandle("unrecognized extension '.flw'".to_string());
    assert!(handle.to_string().contains(".flw"));
}
