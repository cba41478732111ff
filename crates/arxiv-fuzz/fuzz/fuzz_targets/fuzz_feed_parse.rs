#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must decode or fail cleanly
    if let Ok(xml) = std::str::from_utf8(data) {
        let _ = arxiv_mcp::client::parse_feed(xml);
    }
});
