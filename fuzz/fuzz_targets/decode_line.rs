//! Fuzz the line decoder with arbitrary byte sequences.
//!
//! The decoder must reject malformed input with an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let _ = shelflist::csv::decode_book(line);
    }
});
