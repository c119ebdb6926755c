#![no_main]

use libfuzzer_sys::fuzz_target;
use reqwest::StatusCode;
use url::Url;

use commentary_box::extractor::{Summarizer, analyze};
use commentary_box::fetcher::pipeline::process_response;

fuzz_target!(|data: &[u8]| {
    let url = Url::parse("https://example.com").unwrap();

    // Charset sniffing and lossy decode must accept any bytes
    let page = process_response(url, StatusCode::OK, data, "text/html");

    // The digest must come back for any markup, however broken
    let digest = analyze(&page.body_utf8, &Summarizer::default());
    assert!(digest.content_sample().chars().count() <= 1500);
});
