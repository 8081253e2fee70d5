use v20_client::error::AppError;
use v20_client::model::stream::{
    MalformedRecordPolicy, PricingStreamRecord, StreamParser, StreamStats, TransactionStreamRecord,
};
use v20_client::presentation::transaction::{Transaction, TransactionType};

const HEARTBEAT_THEN_FILL: &str = concat!(
    r#"{"type":"HEARTBEAT","lastTransactionID":"6","time":"2024-01-01T00:00:00.000000000Z"}"#,
    "\n",
    r#"{"id":"7","type":"ORDER_FILL","orderID":"6","instrument":"EUR_USD","units":"100","price":"1.1"}"#,
    "\n"
);

#[test]
fn test_heartbeat_then_fill_in_one_chunk() {
    let mut parser: StreamParser<TransactionStreamRecord> = StreamParser::default();
    let mut seen = Vec::new();
    parser
        .feed(HEARTBEAT_THEN_FILL.as_bytes(), |record| {
            seen.push(record);
            Ok(())
        })
        .unwrap();

    assert_eq!(seen.len(), 2);
    match &seen[0] {
        TransactionStreamRecord::Heartbeat(hb) => {
            assert_eq!(hb.last_transaction_id.as_deref(), Some("6"))
        }
        other => panic!("expected a heartbeat first, got {other:?}"),
    }
    match &seen[1] {
        TransactionStreamRecord::Transaction(tx) => {
            assert_eq!(tx.kind(), Some(TransactionType::OrderFill));
            assert_eq!(tx.id(), Some("7"));
        }
        other => panic!("expected a transaction second, got {other:?}"),
    }
    assert_eq!(
        parser.stats(),
        StreamStats {
            records: 1,
            heartbeats: 1,
            skipped: 0
        }
    );
}

#[test]
fn test_byte_at_a_time_matches_single_chunk() {
    let mut whole: StreamParser<TransactionStreamRecord> = StreamParser::default();
    let expected = whole.parse_all(HEARTBEAT_THEN_FILL.as_bytes()).unwrap();

    let mut parser: StreamParser<TransactionStreamRecord> = StreamParser::default();
    let mut seen = Vec::new();
    for byte in HEARTBEAT_THEN_FILL.as_bytes() {
        parser
            .feed(std::slice::from_ref(byte), |record| {
                seen.push(record);
                Ok(())
            })
            .unwrap();
    }
    assert_eq!(seen, expected);
    assert_eq!(parser.pending_bytes(), 0);
}

#[test]
fn test_trailing_record_needs_finish() {
    let mut parser: StreamParser<TransactionStreamRecord> = StreamParser::default();
    let mut seen = Vec::new();
    parser
        .feed(br#"{"type":"CLOSE","id":"1"}"#, |record| {
            seen.push(record);
            Ok(())
        })
        .unwrap();
    assert!(seen.is_empty());
    assert!(parser.pending_bytes() > 0);

    parser
        .finish(|record| {
            seen.push(record);
            Ok(())
        })
        .unwrap();
    assert_eq!(seen.len(), 1);
}

#[test]
fn test_callback_error_stops_the_parse() {
    let mut parser: StreamParser<TransactionStreamRecord> = StreamParser::default();
    let mut calls = 0;
    let err = parser
        .feed(HEARTBEAT_THEN_FILL.as_bytes(), |_| {
            calls += 1;
            Err(AppError::InvalidInput("stop".to_string()))
        })
        .unwrap_err();

    assert_eq!(calls, 1);
    assert!(matches!(err, AppError::InvalidInput(message) if message == "stop"));
}

#[test]
fn test_unknown_transaction_type_is_still_delivered() {
    let mut parser: StreamParser<TransactionStreamRecord> =
        StreamParser::new(MalformedRecordPolicy::Abort, 4096);
    let records = parser
        .parse_all(b"{\"id\":\"9\",\"type\":\"BRAND_NEW\"}\n")
        .unwrap();
    assert_eq!(records.len(), 1);
    assert!(matches!(
        &records[0],
        TransactionStreamRecord::Transaction(Transaction::Unknown(_))
    ));
}

#[test]
fn test_pricing_stream_order() {
    let body = concat!(
        r#"{"type":"PRICE","instrument":"EUR_USD","bids":[{"price":"1.1","liquidity":10}]}"#,
        "\n",
        r#"{"type":"HEARTBEAT","time":"2024-01-01T00:00:05.000000000Z"}"#,
        "\n",
        r#"{"type":"PRICE","instrument":"USD_JPY"}"#,
        "\n"
    );
    let mut parser: StreamParser<PricingStreamRecord> = StreamParser::default();
    let records = parser.parse_all(body.as_bytes()).unwrap();

    let instruments: Vec<Option<&str>> = records
        .iter()
        .map(|record| match record {
            PricingStreamRecord::Price(price) => price.instrument.as_deref(),
            PricingStreamRecord::Heartbeat(_) => None,
        })
        .collect();
    assert_eq!(instruments, vec![Some("EUR_USD"), None, Some("USD_JPY")]);
    assert_eq!(parser.stats().heartbeats, 1);
    assert_eq!(parser.stats().records, 2);
}

#[test]
fn test_abort_reports_record_index() {
    let mut parser: StreamParser<PricingStreamRecord> =
        StreamParser::new(MalformedRecordPolicy::Abort, 4096);
    let err = parser
        .parse_all(b"{\"type\":\"HEARTBEAT\"}\n\n{\"type\":\"PRICE\",\"tradeable\":\"yes\"}\n")
        .unwrap_err();
    match err {
        AppError::MalformedRecord { index, .. } => assert_eq!(index, 1),
        other => panic!("expected a malformed record error, got {other:?}"),
    }
}
