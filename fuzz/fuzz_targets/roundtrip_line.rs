//! Fuzz the encode/decode pair for idempotence.
//!
//! Any line the decoder accepts must re-encode to a line that decodes to
//! the same record.

#![no_main]

use libfuzzer_sys::fuzz_target;
use shelflist::csv;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(book) = csv::decode_book(line) else {
        return;
    };

    let reencoded = csv::encode_book(&book);
    let redecoded = csv::decode_book(&reencoded).expect("re-encoded line must decode");
    assert_eq!(redecoded, book);
});
