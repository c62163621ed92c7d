use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::SubmissionBody;
use crate::features::feedback::dtos::{FeedbackForm, FeedbackRecordDto};
use crate::features::feedback::services::FeedbackService;
use crate::shared::constants::MSG_FEEDBACK_SUBMITTED;
use crate::shared::types::{ApiResponse, ErrorBody, UpstreamErrorBody};

/// Submit feedback
///
/// Public endpoint used by the feedback form. The body may be a JSON object or
/// JSON-encoded text. Nothing is stored locally; the Zoho Desk ticket is the only record.
#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = FeedbackForm,
    responses(
        (status = 200, description = "Feedback filed as a ticket", body = ApiResponse<FeedbackRecordDto>),
        (status = 400, description = "Invalid JSON or failed validation", body = ErrorBody),
        (status = 405, description = "Method not allowed", body = ErrorBody),
        (status = 500, description = "Zoho token exchange or ticket creation failed; upstream status is mirrored when known", body = UpstreamErrorBody)
    ),
    tag = "feedback"
)]
pub async fn submit_feedback(
    State(service): State<Arc<FeedbackService>>,
    body: SubmissionBody,
) -> Result<Json<ApiResponse<FeedbackRecordDto>>> {
    let submission = FeedbackForm::from_value(body.into_value()?).into_submission()?;

    let record = service.submit(submission).await?;
    Ok(Json(ApiResponse::ok(MSG_FEEDBACK_SUBMITTED, record)))
}

#[cfg(test)]
mod tests {
    use crate::core::router::build_router;
    use crate::shared::constants::{
        MSG_EMAIL_INVALID, MSG_FEEDBACK_MESSAGE_REQUIRED, MSG_FEEDBACK_TOPIC_INVALID,
        MSG_INVALID_JSON, MSG_NAME_REQUIRED, MSG_WHATSAPP_COUNTRY_CODE_INVALID,
        MSG_WHATSAPP_NUMBER_INVALID,
    };
    use crate::shared::test_helpers::{spawn_zoho_stub, test_config, ZohoStub};
    use axum::http::{header, Method, StatusCode};
    use axum_test::{TestResponse, TestServer};
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;
    use serde_json::{json, Value};

    fn valid_submission() -> Value {
        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        json!({
            "name": name,
            "email": email,
            "whatsapp_country_code": "+91",
            "whatsapp_number": "9876543210",
            "feedback_topic": "Feature Request",
            "feedback_message": "Please add dark mode."
        })
    }

    async fn setup(ticket_status: StatusCode, ticket_body: Value) -> (TestServer, ZohoStub) {
        let stub = spawn_zoho_stub(ticket_status, ticket_body).await;
        let config = test_config(&stub.server.base_url, &stub.server.base_url);
        let server = TestServer::new(build_router(&config).unwrap()).unwrap();
        (server, stub)
    }

    async fn setup_ok() -> (TestServer, ZohoStub) {
        setup(
            StatusCode::OK,
            json!({ "id": "42", "createdTime": "C", "modifiedTime": "M" }),
        )
        .await
    }

    fn assert_cors(response: &TestResponse) {
        assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_METHODS),
            "POST, OPTIONS"
        );
        assert_eq!(
            response.header(header::ACCESS_CONTROL_ALLOW_HEADERS),
            "Content-Type"
        );
    }

    #[tokio::test]
    async fn test_valid_submission_is_filed() {
        let (server, stub) = setup_ok().await;
        let submission = valid_submission();

        let response = server.post("/api/feedback").json(&submission).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_cors(&response);

        let body = response.json::<Value>();
        assert_eq!(body["status"], 200);
        assert_eq!(body["message"], "Feedback Submitted Successfully");

        let data = &body["data"];
        assert_eq!(data["id"], "42");
        assert_eq!(data["status"], "new");
        assert_eq!(data["response_status"], "not_replied");
        assert_eq!(data["createdAt"], "C");
        assert_eq!(data["updatedAt"], "M");
        assert_eq!(data["__v"], 0);
        for (field, value) in submission.as_object().unwrap() {
            assert_eq!(&data[field], value, "{field}");
        }

        assert_eq!(stub.token_calls(), 1);
        assert_eq!(stub.ticket_calls(), 1);

        let (auth, ticket) = stub.last_ticket().unwrap();
        assert_eq!(auth, "Zoho-oauthtoken T");
        assert_eq!(
            ticket["subject"],
            format!("Feedback from {}", submission["name"].as_str().unwrap())
        );
        assert_eq!(ticket["departmentId"], "test-department-id");
        assert_eq!(ticket["category"], "Feature Request");
        assert_eq!(ticket["phone"], "+91 9876543210");
        assert_eq!(ticket["contact"]["email"], submission["email"]);
        assert_eq!(ticket["contact"]["lastName"], submission["name"]);
        assert_eq!(ticket["description"], "Please add dark mode.");
    }

    #[tokio::test]
    async fn test_json_encoded_text_body_is_accepted() {
        let (server, stub) = setup_ok().await;
        let submission = valid_submission();

        let response = server
            .post("/api/feedback")
            .text(submission.to_string())
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["data"]["name"], submission["name"]);
        assert_eq!(stub.ticket_calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_is_rejected_before_validation() {
        let (server, stub) = setup_ok().await;

        let response = server.post("/api/feedback").text("{not json").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_cors(&response);
        assert_eq!(response.json::<Value>(), json!({ "error": MSG_INVALID_JSON }));
        assert_eq!(stub.token_calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_errors_make_no_outbound_calls() {
        let (server, stub) = setup_ok().await;

        // None removes the field entirely
        let cases = [
            ("name", Some(json!("")), MSG_NAME_REQUIRED),
            ("name", None, MSG_NAME_REQUIRED),
            ("email", Some(json!("asha@example")), MSG_EMAIL_INVALID),
            ("email", None, MSG_EMAIL_INVALID),
            ("whatsapp_number", Some(json!("98 76")), MSG_WHATSAPP_NUMBER_INVALID),
            ("whatsapp_number", Some(json!("٩٨٧٦")), MSG_WHATSAPP_NUMBER_INVALID),
            ("whatsapp_number", None, MSG_WHATSAPP_NUMBER_INVALID),
            ("whatsapp_country_code", Some(json!("++91")), MSG_WHATSAPP_COUNTRY_CODE_INVALID),
            ("whatsapp_country_code", Some(json!("+९१")), MSG_WHATSAPP_COUNTRY_CODE_INVALID),
            ("whatsapp_country_code", None, MSG_WHATSAPP_COUNTRY_CODE_INVALID),
            ("feedback_topic", Some(json!("Bug")), MSG_FEEDBACK_TOPIC_INVALID),
            ("feedback_topic", None, MSG_FEEDBACK_TOPIC_INVALID),
            ("feedback_message", Some(json!("")), MSG_FEEDBACK_MESSAGE_REQUIRED),
            ("feedback_message", Some(json!(false)), MSG_FEEDBACK_MESSAGE_REQUIRED),
            ("feedback_message", None, MSG_FEEDBACK_MESSAGE_REQUIRED),
        ];

        for (field, value, message) in cases {
            let mut submission = valid_submission();
            match value {
                Some(value) => submission[field] = value,
                None => {
                    submission.as_object_mut().unwrap().remove(field);
                }
            }

            let response = server.post("/api/feedback").json(&submission).await;

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{field}");
            assert_cors(&response);
            assert_eq!(response.json::<Value>(), json!({ "error": message }), "{field}");
        }

        let response = server.post("/api/feedback").json(&json!({})).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>(), json!({ "error": MSG_NAME_REQUIRED }));

        assert_eq!(stub.token_calls(), 0);
        assert_eq!(stub.ticket_calls(), 0);
    }

    #[tokio::test]
    async fn test_preflight_ignores_body() {
        let (server, stub) = setup_ok().await;

        let response = server
            .method(Method::OPTIONS, "/api/feedback")
            .text("{not json")
            .await;

        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
        assert!(response.as_bytes().is_empty());
        assert_cors(&response);
        assert_eq!(stub.token_calls(), 0);
    }

    #[tokio::test]
    async fn test_other_verbs_are_not_allowed() {
        let (server, _stub) = setup_ok().await;

        for response in [
            server.get("/api/feedback").await,
            server.put("/api/feedback").json(&valid_submission()).await,
            server.delete("/api/feedback").await,
        ] {
            assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
            assert_cors(&response);
            assert_eq!(
                response.json::<Value>(),
                json!({ "error": "Method not allowed" })
            );
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_is_mirrored() {
        let (server, stub) = setup(
            StatusCode::TOO_MANY_REQUESTS,
            json!({ "msg": "rate limited" }),
        )
        .await;

        let response = server.post("/api/feedback").json(&valid_submission()).await;

        assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_cors(&response);
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "error": { "msg": "rate limited" } })
        );
        assert_eq!(stub.token_calls(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_500() {
        // Nothing listens on the discard port
        let config = test_config("http://127.0.0.1:9", "http://127.0.0.1:9");
        let server = TestServer::new(build_router(&config).unwrap()).unwrap();

        let response = server.post("/api/feedback").json(&valid_submission()).await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<Value>();
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());

        let text = response.text();
        for secret in ["test-client-secret", "test-refresh-token", "test-client-id"] {
            assert!(!text.contains(secret), "{secret} leaked: {text}");
        }
    }

    #[tokio::test]
    async fn test_ticket_response_without_id_is_500() {
        let (server, _stub) = setup(StatusCode::OK, json!({ "createdTime": "C" })).await;

        let response = server.post("/api/feedback").json(&valid_submission()).await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.json::<Value>()["success"], false);
    }
}
