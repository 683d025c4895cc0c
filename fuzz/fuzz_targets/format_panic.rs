#![no_main]
use libfuzzer_sys::fuzz_target;
use texfmt_core::indent_latex;

fuzz_target!(|data: &[u8]| {
    // Lossy conversion keeps "almost text" inputs in play.
    let s = String::from_utf8_lossy(data);
    for unit in ["    ", "\t", ""] {
        let out = indent_latex(&s, unit);
        assert_eq!(out.split('\n').count(), s.split('\n').count());
    }
});
