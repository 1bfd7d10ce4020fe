#![no_main]
use csvjson::{ParserConfig, Row, parse_str, to_json_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let out = parse_str(data, &ParserConfig::default());
    let json = to_json_string(&out.rows).expect("rows always serialize");
    let back: Vec<Row> = serde_json::from_str(&json).expect("serializer output parses");
    assert_eq!(back, out.rows);
});
