#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

use nifty_pe::NseClient;

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, symbol, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn mock_warmup(server: &'_ MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header(
                "set-cookie",
                "nsit=x4AoIFsZ2Mo; Path=/; Secure; SameSite=Lax",
            )
            .body("<!doctype html><html></html>");
    })
}

pub fn mock_quote_equity<'a>(server: &'a MockServer, symbol: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/quote-equity")
            .query_param("symbol", symbol);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("quote_equity", symbol, "json"));
    })
}

pub fn client_for(server: &MockServer) -> NseClient {
    NseClient::builder()
        .base_quote(Url::parse(&format!("{}/api/quote-equity", server.base_url())).unwrap())
        .warmup_url(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap()
}
