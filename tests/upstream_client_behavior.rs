//! Behaviour tests for the Alpha Vantage client
//!
//! These tests verify WHAT the client sends upstream and HOW it shapes or rejects what comes
//! back, using a scripted transport instead of the network.

use serde_json::{json, Value};
use sheldon_tests::*;

// =============================================================================
// Request building
// =============================================================================

#[test]
fn every_delta_maps_to_its_function_and_interval() {
    // Given: A client pointed at a test endpoint
    let client = client_over(ScriptedHttpClient::replying(Vec::new()));
    let aapl = symbol("AAPL");

    for delta in Delta::ALL {
        // When: The history URL is built for each granularity
        let url = client.history_url(&aapl, delta);

        // Then: The function matches the table and only intraday carries an interval
        assert!(
            url.contains(&format!("function={}", delta.function())),
            "{delta}: {url}"
        );
        assert!(url.contains("symbol=AAPL"), "{delta}: {url}");
        assert!(url.contains("apikey=test_key"), "{delta}: {url}");
        match delta.interval() {
            Some(interval) => assert!(url.ends_with(&format!("&interval={interval}")), "{url}"),
            None => assert!(!url.contains("interval="), "{url}"),
        }
    }
}

#[tokio::test]
async fn daily_request_uses_the_documented_url_shape() {
    // Given: Upstream answers with a daily series
    let http = ScriptedHttpClient::ok(&daily_body());

    // When: Two daily entries are requested
    client_over(http.clone())
        .fetch_history(&symbol("AAPL"), 2, "daily")
        .await
        .expect("history should succeed");

    // Then: Exactly one GET was sent with the expected parameters
    assert_eq!(
        http.urls(),
        vec![format!(
            "{TEST_BASE_URL}?function=TIME_SERIES_DAILY&symbol=AAPL&apikey={TEST_API_KEY}"
        )]
    );
}

// =============================================================================
// Delta validation
// =============================================================================

#[tokio::test]
async fn invalid_delta_is_rejected_regardless_of_symbol_or_limit() {
    for (ticker, limit) in [("AAPL", 1), ("MSFT", 50), ("BRK-B", 1_000)] {
        // Given: A transport that would answer successfully
        let http = ScriptedHttpClient::ok(&daily_body());

        // When: An unsupported granularity is requested
        let error = client_over(http.clone())
            .fetch_history(&symbol(ticker), limit, "hourly")
            .await
            .expect_err("hourly is not a valid delta");

        // Then: The error names all eight options and nothing was sent
        assert!(matches!(
            error,
            ClientError::Validation(ValidationError::InvalidDelta { ref value }) if value == "hourly"
        ));
        let message = error.to_string();
        for delta in Delta::ALL {
            assert!(message.contains(&format!("'{delta}'")), "{message}");
        }
        assert_eq!(message.matches('\'').count(), 2 * (Delta::ALL.len() + 1));
        assert!(http.requests().is_empty());
    }
}

// =============================================================================
// Series truncation
// =============================================================================

#[tokio::test]
async fn limit_below_series_length_returns_exactly_limit_unmodified_entries() {
    // Given: Upstream holds ten daily entries
    let body = series_body("Time Series (Daily)", 10);
    let http = ScriptedHttpClient::ok(&body);

    // When: Four entries are requested
    let document = client_over(http)
        .fetch_history(&symbol("AAPL"), 4, "daily")
        .await
        .expect("history should succeed");

    // Then: Four entries come back, the most recent ones, values untouched
    assert_eq!(document["symbol"], "AAPL");
    let series = document["series"].as_object().expect("series is an object");
    assert_eq!(series.len(), 4);

    let mut labels = series.keys().cloned().collect::<Vec<_>>();
    labels.sort();
    assert_eq!(labels, vec!["2023-11-07", "2023-11-08", "2023-11-09", "2023-11-10"]);
    for (label, entry) in series {
        assert_eq!(entry, &body["Time Series (Daily)"][label]);
    }
}

#[tokio::test]
async fn limit_above_series_length_returns_every_entry() {
    // Given: Upstream holds three weekly entries
    let body = series_body("Weekly Time Series", 3);
    let http = ScriptedHttpClient::ok(&body);

    // When: Far more entries are requested than exist
    let document = client_over(http)
        .fetch_history(&symbol("IBM"), 100, "weekly")
        .await
        .expect("history should succeed");

    // Then: All three come back with no padding
    assert_eq!(document["series"], body["Weekly Time Series"]);
}

// =============================================================================
// Upstream failures
// =============================================================================

#[tokio::test]
async fn non_200_status_is_reported_with_its_code() {
    for status in [400_u16, 404, 429, 500, 503] {
        // Given: Upstream fails with a status and a non-JSON body
        let http = ScriptedHttpClient::replying(vec![Ok(HttpResponse::new(status, "<html/>"))]);

        // When: A quote is requested
        let error = client_over(http)
            .fetch_quote(&symbol("IBM"))
            .await
            .expect_err("non-200 must fail");

        // Then: The status is surfaced, never a decode error
        assert!(
            matches!(error, ClientError::HttpStatus { status: observed } if observed == status),
            "{error:?}"
        );
    }
}

#[tokio::test]
async fn missing_series_key_is_never_an_empty_result() {
    // Given: A 200 response without the daily series
    let body = json!({ "Invalid Key": {} });
    let http = ScriptedHttpClient::ok(&body);

    // When: Daily history is requested
    let error = client_over(http)
        .fetch_history(&symbol("AAPL"), 2, "daily")
        .await
        .expect_err("missing key must fail");

    // Then: The raw document is kept for diagnostics
    assert!(matches!(
        error,
        ClientError::UnexpectedFormat { ref key, .. } if key == "Time Series (Daily)"
    ));
    assert_eq!(error.payload(), Some(&body));
}

#[tokio::test]
async fn rate_limit_note_is_shown_in_the_error() {
    // Given: Upstream throttles with HTTP 200 and a note
    let body = json!({ "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute." });
    let http = ScriptedHttpClient::ok(&body);

    // When: Monthly history is requested
    let error = client_over(http)
        .fetch_history(&symbol("AAPL"), 2, "monthly")
        .await
        .expect_err("throttled response must fail");

    // Then: The user sees the upstream explanation
    assert!(error.to_string().contains("standard API call frequency"));
}

#[tokio::test]
async fn transport_failure_is_a_network_error() {
    // Given: The transport cannot reach the upstream
    let http = ScriptedHttpClient::replying(vec![Err(HttpError::timeout(
        "request timed out after 10000ms",
    ))]);

    // When: A quote is requested
    let error = client_over(http)
        .fetch_quote(&symbol("IBM"))
        .await
        .expect_err("transport failure must fail");

    // Then: It is classified as a network error
    match error {
        ClientError::Network(http_error) => assert!(http_error.timed_out()),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn json_array_body_is_a_decode_error() {
    // Given: Upstream returns valid JSON that is not an object
    let http = ScriptedHttpClient::replying(vec![Ok(HttpResponse::ok_json("[1, 2, 3]"))]);

    // When: A quote is requested
    let error = client_over(http)
        .fetch_quote(&symbol("IBM"))
        .await
        .expect_err("array body must fail");

    // Then: Decoding fails
    assert!(matches!(error, ClientError::Decode(_)));
}

#[tokio::test]
async fn configured_timeout_travels_with_the_request() {
    // Given: A client with a tight timeout
    let http = ScriptedHttpClient::ok(&global_quote_body());
    let client = client_over(http.clone()).with_timeout_ms(750);

    // When: A quote is requested
    let document = client
        .fetch_quote(&symbol("IBM"))
        .await
        .expect("quote should succeed");

    // Then: The transport saw the timeout and the document is unmodified
    assert_eq!(http.requests()[0].timeout_ms, 750);
    assert_eq!(Value::Object(document), global_quote_body());
}
