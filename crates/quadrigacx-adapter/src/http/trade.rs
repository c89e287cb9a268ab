/*
[INPUT]:  Order identifiers and stored API credentials
[OUTPUT]: Cancellation confirmation
[POS]:    HTTP layer - trading endpoints (require HMAC-signed body)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{QuadrigaClient, QuadrigaError, Result};
use crate::types::OrderIdRequest;

impl QuadrigaClient {
    /// Cancel an open order
    ///
    /// POST cancel_order {id}
    /// The exchange answers with a bare, possibly quoted, boolean literal
    /// (`1`, `t`, `true` and their `0`/`f`/`false` counterparts, any common casing).
    pub async fn cancel_order(&self, order_id: &str) -> Result<bool> {
        let params = OrderIdRequest {
            id: order_id.to_string(),
        };
        let builder = self.signed_request("cancel_order", params)?;
        let body = self.send_text(builder).await?;
        parse_cancel_result(&body)
    }
}

fn parse_cancel_result(body: &str) -> Result<bool> {
    match body.trim().trim_matches('"') {
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
        "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
        other => Err(QuadrigaError::InvalidResponse(format!(
            "expected boolean cancel result, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_cancel_result;
    use crate::http::{ClientConfig, Credentials, QuadrigaClient, QuadrigaError};
    use rstest::rstest;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[rstest]
    #[case("\"true\"", true)]
    #[case("\"false\"", false)]
    #[case("true", true)]
    #[case("false\n", false)]
    #[case("\"1\"", true)]
    #[case("t", true)]
    #[case("T", true)]
    #[case("\"True\"", true)]
    #[case("TRUE", true)]
    #[case("0", false)]
    #[case("\"f\"", false)]
    #[case("F", false)]
    #[case("False", false)]
    #[case("\"FALSE\"", false)]
    fn test_parse_cancel_result(#[case] body: &str, #[case] expected: bool) {
        assert_eq!(parse_cancel_result(body).unwrap(), expected);
    }

    #[rstest]
    #[case("\"notabool\"")]
    #[case("")]
    #[case("{\"ok\":true}")]
    #[case("yes")]
    #[case("tRUE")]
    #[case("2")]
    fn test_parse_cancel_result_rejects_garbage(#[case] body: &str) {
        assert!(matches!(
            parse_cancel_result(body),
            Err(QuadrigaError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_cancel_order() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/v2/cancel_order"))
            .and(body_partial_json(serde_json::json!({ "id": "k3z9", "key": "test_key" })))
            .respond_with(ResponseTemplate::new(200).set_body_raw("\"true\"", "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let client = QuadrigaClient::with_config(
            Credentials::new("123456", "test_key", "test_secret"),
            ClientConfig::default().with_base_url(format!("{}/v2/", server.uri())),
        )
        .expect("client init");

        let cancelled = client.cancel_order("k3z9").await.expect("cancel_order failed");
        assert!(cancelled);
    }
}
