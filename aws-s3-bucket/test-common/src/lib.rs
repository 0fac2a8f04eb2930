/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_s3_bucket::config::Region;
use aws_s3_bucket::Config;
use aws_smithy_http_client::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_types::body::SdkBody;

/// Access key id the test configuration signs with
pub const TEST_ACCESS_KEY_ID: &str = "AKIDTESTEXAMPLE";

/// Secret key the test configuration signs with
pub const TEST_SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";

/// Bucket name used throughout the tests
pub const TEST_BUCKET: &str = "test-bucket";

/// create a dummy placeholder request for StaticReplayClient. This is used when we don't
/// want to use `assert_requests()` and make our own assertions about the actually captured
/// requests.
pub fn dummy_expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .uri("https://not-used")
        .body(SdkBody::from(&b""[..]))
        .unwrap()
}

/// Build an HTTP response with the given status, headers, and body
pub fn response(
    status: u16,
    headers: &[(&str, &str)],
    body: impl Into<SdkBody>,
) -> http::Response<SdkBody> {
    let mut builder = http::Response::builder().status(status);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(body.into()).unwrap()
}

/// Build an S3 REST XML error response
pub fn error_response(status: u16, code: &str, message: &str) -> http::Response<SdkBody> {
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
    <Code>{code}</Code>
    <Message>{message}</Message>
    <RequestId>4442587FB7D0A2F9</RequestId>
</Error>"#
    );
    response(
        status,
        &[
            ("Content-Type", "application/xml"),
            ("x-amz-request-id", "4442587FB7D0A2F9"),
        ],
        body,
    )
}

/// Create a static replay client (http connector) answering requests with `responses` in order.
///
/// Expected requests are not created. Callers need to make assertions directly on the captured
/// requests.
pub fn replay_client(responses: Vec<http::Response<SdkBody>>) -> StaticReplayClient {
    let events = responses
        .into_iter()
        .map(|resp| ReplayEvent::new(dummy_expected_request(), resp))
        .collect();
    StaticReplayClient::new(events)
}

/// Access key id from the `Authorization` header of the first captured request
pub fn signing_key_id(http_client: &StaticReplayClient) -> String {
    let requests = http_client.actual_requests().collect::<Vec<_>>();
    let authorization = requests[0]
        .headers()
        .get("authorization")
        .expect("request is signed");
    authorization
        .split("Credential=")
        .nth(1)
        .and_then(|scope| scope.split('/').next())
        .expect("credential scope present")
        .to_owned()
}

/// Configuration signing with the test keys and sending requests through `http_client`
pub fn test_config(http_client: StaticReplayClient) -> Config {
    Config::builder()
        .access_keys(TEST_ACCESS_KEY_ID, TEST_SECRET_KEY)
        .region(Region::from_static("us-west-2"))
        .http_client(http_client)
        .build()
        .unwrap()
}
