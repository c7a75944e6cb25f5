#[cfg(test)]
mod integration_tests {
    use reqwest::StatusCode;
    use serde_json::{json, Value};

    use crate::client_mock::{setup_counting_generator, setup_mock_generator, spawn_mock_api};
    use crate::{ApiVersion, ZoomClient, ZoomError};

    // Helper to build a client pointed at the local mock API
    async fn setup_test_client(version: ApiVersion) -> ZoomClient {
        let addr = spawn_mock_api().await;
        ZoomClient::builder("KEY", "SECRET")
            .version(version)
            .base_uri(format!("http://{}/v{}", addr, version))
            .timeout(5)
            .token_generator(setup_mock_generator())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_v2_get_request_sends_bearer_token() {
        let client = setup_test_client(ApiVersion::V2).await;

        let response = client
            .user()
            .get_request("/users/me", &[("status", "active")])
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let echoed: Value = response.json().await.unwrap();
        assert_eq!(echoed["method"], "GET");
        assert_eq!(echoed["path"], "/v2/users/me");
        assert_eq!(echoed["query"], "status=active");
        assert_eq!(echoed["authorization"], "Bearer token:KEY:SECRET");
        assert_eq!(echoed["content_type"], "application/json");
    }

    #[tokio::test]
    async fn test_v2_post_request_sends_json_body() {
        let client = setup_test_client(ApiVersion::V2).await;
        let meeting = json!({ "topic": "Weekly sync", "type": 2, "duration": 30 });

        let response = client
            .meeting()
            .post_request("users/me/meetings", &meeting)
            .await
            .unwrap();

        let echoed: Value = response.json().await.unwrap();
        assert_eq!(echoed["method"], "POST");
        assert_eq!(echoed["path"], "/v2/users/me/meetings");
        assert_eq!(echoed["body"], meeting);
        assert_eq!(echoed["query"], Value::Null);
    }

    #[tokio::test]
    async fn test_v2_patch_put_and_delete_requests() {
        let client = setup_test_client(ApiVersion::V2).await;
        let webinar = client.webinar();

        let patched: Value = webinar
            .patch_request("webinars/42", &json!({ "topic": "Renamed" }))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(patched["method"], "PATCH");
        assert_eq!(patched["body"]["topic"], "Renamed");

        let put: Value = webinar
            .put_request("webinars/42/status", &json!({ "action": "end" }))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(put["method"], "PUT");
        assert_eq!(put["path"], "/v2/webinars/42/status");

        let deleted: Value = webinar
            .delete_request("webinars/42", &[("occurrence_id", "7")])
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(deleted["method"], "DELETE");
        assert_eq!(deleted["query"], "occurrence_id=7");
        assert_eq!(deleted["authorization"], "Bearer token:KEY:SECRET");
    }

    #[tokio::test]
    async fn test_v1_requests_send_credentials_as_params() {
        let client = setup_test_client(ApiVersion::V1).await;

        let response = client
            .report()
            .get_request("report/getaccountreport", &[("page_size", "30")])
            .await
            .unwrap();

        let echoed: Value = response.json().await.unwrap();
        assert_eq!(echoed["path"], "/v1/report/getaccountreport");
        assert_eq!(
            echoed["query"],
            "api_key=KEY&api_secret=SECRET&data_type=json&page_size=30"
        );
        assert_eq!(echoed["authorization"], Value::Null);
    }

    #[tokio::test]
    async fn test_refreshed_token_used_by_every_component() {
        let addr = spawn_mock_api().await;
        let mut client = ZoomClient::builder("KEY", "SECRET")
            .base_uri(format!("http://{}/v2", addr))
            .token_generator(setup_counting_generator(2))
            .build()
            .unwrap();

        let before: Value = client
            .recording()
            .get_request("users/me/recordings", &())
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(before["authorization"], "Bearer token-0");

        client.refresh_token().unwrap();

        for component in [client.recording(), client.phone(), client.group()] {
            let echoed: Value = component
                .get_request("anything", &())
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            assert_eq!(echoed["authorization"], "Bearer token-1");
        }
    }

    #[tokio::test]
    async fn test_error_status_returned_unchanged() {
        let client = setup_test_client(ApiVersion::V2).await;

        let response = client
            .past_meeting()
            .get_request("past_meetings/missing", &())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = ZoomClient::builder("KEY", "SECRET")
            .base_uri("http://127.0.0.1:1/v2")
            .timeout(5)
            .token_generator(setup_mock_generator())
            .build()
            .unwrap();

        let err = client
            .metric()
            .get_request("metrics/meetings", &())
            .await
            .unwrap_err();
        assert!(matches!(err, ZoomError::Http(_)));
    }
}
