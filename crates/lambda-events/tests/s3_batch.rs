use lambda_events::s3_batch::S3BatchTask;
use lambda_events::test_utils::{fixture_json, fixture_value, fixtures, init_test_tracing};
use lambda_events::{ResultCode, S3BatchEvent, S3BatchResponse, S3BatchResult};

#[test]
fn decodes_schema_1_event() {
    init_test_tracing();
    let event: S3BatchEvent =
        lambda_events::json::from_str(fixture_json(fixtures::S3_BATCH_EVENT))
            .expect("schema 1.0 fixture decodes");

    assert_eq!(event.invocation_schema_version.as_deref(), Some("1.0"));
    let job = event.job.as_ref().expect("job present");
    assert_eq!(
        job.id.as_deref(),
        Some("f3cc4f60-61f6-4a2b-8a21-d07600c373ce")
    );
    assert!(job.user_arguments.is_none());

    let task = &event.tasks.as_ref().expect("tasks present")[0];
    assert_eq!(task.s3_key.as_deref(), Some("customerImage1.jpg"));
    assert_eq!(
        task.s3_bucket_arn.as_deref(),
        Some("arn:aws:s3:::amzn-s3-demo-bucket")
    );
    assert!(task.s3_bucket.is_none());
}

#[test]
fn decodes_schema_2_event() {
    let event: S3BatchEvent =
        lambda_events::json::from_str(fixture_json(fixtures::S3_BATCH_EVENT_V2))
            .expect("schema 2.0 fixture decodes");

    let arguments = event
        .job
        .as_ref()
        .and_then(|job| job.user_arguments.as_ref())
        .expect("user arguments present");
    assert_eq!(arguments.get("k1").map(String::as_str), Some("v1"));
    assert_eq!(arguments.len(), 2);

    let task: &S3BatchTask = &event.tasks.as_ref().expect("tasks present")[0];
    assert_eq!(task.s3_bucket.as_deref(), Some("amzn-s3-demo-bucket"));
    assert!(task.s3_version_id.is_none());
    assert!(task.s3_bucket_arn.is_none());
}

#[test]
fn response_from_event_echoes_invocation() {
    let event: S3BatchEvent =
        lambda_events::json::from_str(fixture_json(fixtures::S3_BATCH_EVENT))
            .expect("fixture decodes");

    let mut builder = S3BatchResponse::from_s3_batch_event(&event)
        .with_treat_missing_keys_as(ResultCode::PermanentFailure);
    for task in event.tasks.iter().flatten() {
        builder = builder.with_result(S3BatchResult::for_task(
            task,
            ResultCode::Succeeded,
            r#"["Mary Major", "John Stiles"]"#,
        ));
    }
    let response = builder
        .with_result(S3BatchResult::temporary_failure(
            "c2Vjb25kdGFza2lkCg",
            "SlowDown",
        ))
        .with_result(S3BatchResult::permanent_failure(
            "dGhpcmR0YXNraWQK",
            "AccessDenied",
        ))
        .build();

    assert_eq!(
        lambda_events::json::to_value(&response).expect("response encodes"),
        fixture_value(fixtures::S3_BATCH_RESPONSE)
    );
}

#[test]
fn response_round_trip_keeps_result_order() {
    let response: S3BatchResponse =
        lambda_events::json::from_str(fixture_json(fixtures::S3_BATCH_RESPONSE))
            .expect("response fixture decodes");

    let codes: Vec<_> = response
        .results
        .iter()
        .flatten()
        .filter_map(|r| r.result_code)
        .collect();
    assert_eq!(
        codes,
        [
            ResultCode::Succeeded,
            ResultCode::TemporaryFailure,
            ResultCode::PermanentFailure
        ]
    );

    let json = lambda_events::json::to_string_pretty(&response).expect("response encodes");
    let decoded: S3BatchResponse =
        lambda_events::json::from_str(&json).expect("encoded response decodes");
    assert_eq!(decoded, response);
}

#[test]
fn event_round_trip() {
    let event: S3BatchEvent =
        lambda_events::json::from_str(fixture_json(fixtures::S3_BATCH_EVENT_V2))
            .expect("fixture decodes");
    let json = lambda_events::json::to_string(&event).expect("event encodes");
    let decoded: S3BatchEvent = lambda_events::json::from_str(&json).expect("event decodes");
    assert_eq!(decoded, event);
}
