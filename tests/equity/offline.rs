use httpmock::MockServer;
use nifty_pe::Equity;

use crate::common;

#[tokio::test]
async fn pe_resolves_from_a_recorded_payload() {
    let server = MockServer::start();
    let warmup = common::mock_warmup(&server);
    let quote = common::mock_quote_equity(&server, "TCS");

    let client = common::client_for(&server);
    let result = Equity::new(&client, "tcs").pe().await.unwrap();

    assert_eq!(result.symbol, "TCS");
    assert!(result.success);
    assert_eq!(result.pe_ratio, Some(29.14));
    assert!(result.message.is_none());

    warmup.assert();
    quote.assert();
}

#[tokio::test]
async fn sector_pe_stands_in_for_loss_makers() {
    let server = MockServer::start();
    let _warmup = common::mock_warmup(&server);
    let quote = common::mock_quote_equity(&server, "IDEA");

    let client = common::client_for(&server);
    let result = Equity::new(&client, "IDEA").pe().await.unwrap();

    assert!(result.success);
    assert_eq!(result.pe_ratio, Some(18.9));
    quote.assert();
}

#[tokio::test]
async fn resolution_miss_is_data_not_an_error() {
    let server = MockServer::start();
    let _warmup = common::mock_warmup(&server);
    let quote = common::mock_quote_equity(&server, "ZEEL");

    let client = common::client_for(&server);
    let result = Equity::new(&client, "ZEEL").pe().await.unwrap();

    assert!(!result.success);
    assert_eq!(result.pe_ratio, None);
    assert_eq!(
        result.message.as_deref(),
        Some("P/E ratio not found in response")
    );
    quote.assert();
}

#[tokio::test]
async fn details_returns_the_raw_record() {
    let server = MockServer::start();
    let _warmup = common::mock_warmup(&server);
    let _quote = common::mock_quote_equity(&server, "TCS");

    let client = common::client_for(&server);
    let record = Equity::new(&client, "TCS").details().await.unwrap();

    assert_eq!(record["info"]["symbol"], "TCS");
    assert_eq!(record["metadata"]["pdSymbolPe"], 29.14);
}
