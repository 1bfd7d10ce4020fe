use csvjson::{ParserConfig, parser::run};
use serde_json::json;

fn rows_json(lines: &[&str]) -> serde_json::Value {
    let out = run(lines.iter().copied(), &ParserConfig::default());
    serde_json::to_value(&out.rows).unwrap()
}

#[test]
fn header_then_two_rows() {
    assert_eq!(
        rows_json(&["a,b,c", "1,2,3", "4,5,6"]),
        json!([{"a": "1", "b": "2", "c": "3"}, {"a": "4", "b": "5", "c": "6"}])
    );
}

#[test]
fn blank_line_is_neither_header_nor_data() {
    assert_eq!(rows_json(&["a,b", "", "1,2"]), json!([{"a": "1", "b": "2"}]));
    assert_eq!(rows_json(&["", "   ", "a,b", "1,2"]), json!([{"a": "1", "b": "2"}]));
}

#[test]
fn short_row_is_padded() {
    assert_eq!(rows_json(&["a,b,c", "1,2"]), json!([{"a": "1", "b": "2", "c": ""}]));
}

#[test]
fn header_only_yields_no_rows() {
    let out = run(["a,b"], &ParserConfig::default());
    assert_eq!(out.header, Some(vec!["a".to_string(), "b".to_string()]));
    assert!(out.rows.is_empty());
}

#[test]
fn empty_input_yields_nothing() {
    let out = run(Vec::<String>::new(), &ParserConfig::default());
    assert!(out.header.is_none());
    assert!(out.rows.is_empty());

    let out = run(["", "  ", "\t"], &ParserConfig::default());
    assert!(out.header.is_none());
    assert!(out.rows.is_empty());
}

#[test]
fn header_cells_are_trimmed() {
    assert_eq!(
        rows_json(&["  name ,  age  ", " Ada , 36 "]),
        json!([{"name": "Ada", "age": "36"}])
    );
}

#[test]
fn values_are_never_coerced() {
    assert_eq!(
        rows_json(&["n,flag,empty", "007,true,null"]),
        json!([{"n": "007", "flag": "true", "empty": "null"}])
    );
}
