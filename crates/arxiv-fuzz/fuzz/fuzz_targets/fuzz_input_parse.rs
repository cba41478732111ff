#![no_main]

use libfuzzer_sys::fuzz_target;
use arxiv_mcp::models::{PaperContentInput, PaperDetailsInput, SearchPapersInput, SummarizePaperInput};

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        let _ = serde_json::from_value::<SearchPapersInput>(json.clone());
        let _ = serde_json::from_value::<PaperDetailsInput>(json.clone());
        let _ = serde_json::from_value::<PaperContentInput>(json.clone());
        let _ = serde_json::from_value::<SummarizePaperInput>(json);
    }
});
