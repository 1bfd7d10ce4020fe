use csvjson::{ParserConfig, Row, parse_str, to_json_string};

#[test]
fn json_roundtrip_preserves_rows() -> Result<(), Box<dyn std::error::Error>> {
    let input = "id,name,city\n1,Ada,London\n2,Alan\n3,Grace,Arlington,VA\n";
    let out = parse_str(input, &ParserConfig::default());

    let json = to_json_string(&out.rows)?;
    let back: Vec<Row> = serde_json::from_str(&json)?;

    assert_eq!(back, out.rows);
    for (a, b) in back.iter().zip(&out.rows) {
        assert!(a.keys().eq(b.keys()));
    }
    Ok(())
}

#[test]
fn output_uses_two_space_indent() -> Result<(), Box<dyn std::error::Error>> {
    let out = parse_str("a\n1\n", &ParserConfig::default());
    assert_eq!(to_json_string(&out.rows)?, "[\n  {\n    \"a\": \"1\"\n  }\n]");
    Ok(())
}

#[test]
fn special_characters_are_escaped() -> Result<(), Box<dyn std::error::Error>> {
    let out = parse_str("quote,slash\n\"x\",a\\b\n", &ParserConfig::default());
    let json = to_json_string(&out.rows)?;
    let v: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(v, serde_json::json!([{"quote": "\"x\"", "slash": "a\\b"}]));
    Ok(())
}
