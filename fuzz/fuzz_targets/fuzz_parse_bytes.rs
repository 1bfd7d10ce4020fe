#![no_main]
use csvjson::{Options, parse_reader};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 must surface as an error, never a panic.
    if let Ok(out) = parse_reader(data, &Options::default()) {
        let width = out.header.as_ref().map_or(0, |h| {
            let mut names: Vec<&String> = h.iter().collect();
            names.sort();
            names.dedup();
            names.len()
        });
        for row in &out.rows {
            assert_eq!(row.len(), width);
        }
    }
});
