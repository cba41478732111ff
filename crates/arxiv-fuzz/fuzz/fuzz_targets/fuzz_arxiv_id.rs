#![no_main]

use libfuzzer_sys::fuzz_target;
use arxiv_mcp::models::ArxivId;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(id) = ArxivId::parse(raw) {
            // A parsed id must round-trip through its display form
            let again = ArxivId::parse(&id.to_string()).expect("display form reparses");
            assert_eq!(id.base(), again.base());
        }
    }
});
