#![no_main]
use arbitrary::Arbitrary;
use csvjson::{Delimiter, ParserConfig, parser::{run, trim}, split_line};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Arbitrary, Debug)]
struct Input {
    delimiter: u8,
    custom: String,
    skip_empty_lines: bool,
    trim_cells: bool,
    lines: Vec<String>,
}

fuzz_target!(|input: Input| {
    let delimiter = match input.delimiter % 5 {
        0 => Delimiter::Comma,
        1 => Delimiter::Tab,
        2 => Delimiter::Semicolon,
        3 => Delimiter::Pipe,
        _ => Delimiter::Custom(input.custom.clone()),
    };
    let config = ParserConfig {
        delimiter,
        skip_empty_lines: input.skip_empty_lines,
        trim_cells: input.trim_cells,
    };

    // Lines handed over by the line source never contain '\n'.
    let lines: Vec<String> = input.lines.iter().map(|l| l.replace('\n', "")).collect();
    let out = run(&lines, &config);

    let qualifying: Vec<&String> = lines
        .iter()
        .filter(|l| !(config.skip_empty_lines && trim(l).is_empty()))
        .collect();
    assert_eq!(out.header.is_some(), !qualifying.is_empty());
    assert_eq!(out.rows.len(), qualifying.len().saturating_sub(1));

    if let (Some(header), Some(first)) = (&out.header, qualifying.first()) {
        assert_eq!(header, &split_line(trim(first), &config));
    }
});
