use lambda_events::{Error, LambdaDestinationEvent, S3BatchResponse, TimestampError};

#[test]
fn unknown_enum_token_names_the_value() {
    let err = lambda_events::json::from_str::<S3BatchResponse>(
        r#"{"treatMissingKeysAs":"Retry","results":[]}"#,
    )
    .expect_err("unknown token is rejected");

    match &err {
        Error::Json(inner) => assert!(inner.is_data()),
        other => panic!("expected Json error, received: {:?}", other),
    }
    assert!(err.to_string().contains("unknown variant `Retry`"));
}

#[test]
fn numeric_enum_values_are_rejected() {
    let err = lambda_events::json::from_str::<S3BatchResponse>(r#"{"treatMissingKeysAs":2}"#)
        .expect_err("ordinals are not accepted");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn malformed_timestamp_reports_value_and_position() {
    let err = lambda_events::json::from_str::<LambdaDestinationEvent>(
        r#"{"timestamp":"2022-01-01 00:00:00.123Z"}"#,
    )
    .expect_err("space separator is rejected");

    let message = err.to_string();
    assert!(message.contains("invalid destination timestamp"));
    assert!(message.contains("2022-01-01 00:00:00.123Z"));
    assert!(message.contains("line 1"));
}

#[test]
fn malformed_json_is_a_syntax_error() {
    let err = lambda_events::json::from_slice::<S3BatchResponse>(b"{\"results\": [")
        .expect_err("truncated input is rejected");
    match err {
        Error::Json(inner) => assert!(inner.is_eof()),
        other => panic!("expected Json error, received: {:?}", other),
    }
}

#[test]
fn timestamp_errors_convert_into_crate_error() {
    fn parse(raw: &str) -> lambda_events::Result<chrono::DateTime<chrono::Utc>> {
        Ok(lambda_events::timestamp::parse(raw)?)
    }

    let err = parse("2022-01-01T00:00:00.123+02:00").expect_err("colon offset is rejected");
    match err {
        Error::Timestamp(TimestampError::Zone { zone, .. }) => assert_eq!(zone, "+02:00"),
        other => panic!("expected Timestamp error, received: {:?}", other),
    }
}
