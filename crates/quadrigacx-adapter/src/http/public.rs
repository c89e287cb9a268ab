/*
[INPUT]:  Book identifiers and lookback windows
[OUTPUT]: Market data (ticker, order book, recent trades)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{QuadrigaClient, Result};
use crate::types::{OrderBook, Ticker, Transaction, TransactionWindow};

impl QuadrigaClient {
    /// Current trading information for the default book
    ///
    /// GET ticker
    pub async fn get_ticker(&self) -> Result<Ticker> {
        let builder = self.public_request("ticker", &[])?;
        self.send_json(builder).await
    }

    /// Order book for the default book
    ///
    /// GET order_book
    pub async fn get_order_book(&self) -> Result<OrderBook> {
        let builder = self.public_request("order_book", &[])?;
        self.send_json(builder).await
    }

    /// Order book for a specific book, e.g. `eth_cad`
    ///
    /// GET order_book?book={book}
    pub async fn get_specific_order_book(&self, book: &str) -> Result<OrderBook> {
        let builder = self.public_request("order_book", &[("book", book)])?;
        self.send_json(builder).await
    }

    /// Recent trades for the default book
    ///
    /// GET transactions
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>> {
        let builder = self.public_request("transactions", &[])?;
        self.send_json(builder).await
    }

    /// Recent trades for a book within the given window
    ///
    /// GET transactions?book={book}&time={window}
    pub async fn get_book_transactions(
        &self,
        book: &str,
        window: TransactionWindow,
    ) -> Result<Vec<Transaction>> {
        let builder =
            self.public_request("transactions", &[("book", book), ("time", window.as_str())])?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, QuadrigaClient, QuadrigaError};
    use crate::types::{BookLevel, OrderBook, TransactionSide, TransactionWindow};
    use rust_decimal::Decimal;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> QuadrigaClient {
        QuadrigaClient::with_config(
            Credentials::new("123456", "test_key", "test_secret"),
            ClientConfig::default().with_base_url(format!("{}/v2/", server.uri())),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_ticker() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "high": "4200.00",
            "last": "4150.50",
            "timestamp": "1501981581",
            "volume": "512.34",
            "vwap": "4120.11",
            "low": "4010.00",
            "ask": "4151.00",
            "bid": "4150.00"
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v2/ticker"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ticker = client_for(&server)
            .get_ticker()
            .await
            .expect("get_ticker failed");

        assert_eq!(ticker.high, "4200.00".parse::<Decimal>().unwrap());
        assert_eq!(ticker.last, "4150.50".parse::<Decimal>().unwrap());
        assert_eq!(ticker.bid, Some("4150.00".parse::<Decimal>().unwrap()));
        assert_eq!(ticker.timestamp.as_deref(), Some("1501981581"));
    }

    #[tokio::test]
    async fn test_get_order_book() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "timestamp": "1501981581",
            "bids": [["4150.00", "1.5"], ["4149.00", "2.0"]],
            "asks": [["4151.00", "0.75"]]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v2/order_book"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let book = client_for(&server)
            .get_order_book()
            .await
            .expect("get_order_book failed");

        let expected = OrderBook {
            timestamp: Some("1501981581".to_string()),
            bids: vec![
                BookLevel("4150.00".parse().unwrap(), "1.5".parse().unwrap()),
                BookLevel("4149.00".parse().unwrap(), "2.0".parse().unwrap()),
            ],
            asks: vec![BookLevel("4151.00".parse().unwrap(), "0.75".parse().unwrap())],
        };
        assert_eq!(book, expected);
    }

    #[tokio::test]
    async fn test_get_specific_order_book() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/v2/order_book"))
            .and(query_param("book", "eth_cad"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "timestamp": "1501981581",
                "bids": [["300.00", "10"]],
                "asks": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let book = client_for(&server)
            .get_specific_order_book("eth_cad")
            .await
            .expect("get_specific_order_book failed");

        assert_eq!(book.bids.len(), 1);
        assert!(book.asks.is_empty());
    }

    #[tokio::test]
    async fn test_get_transactions() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {"date": "1501981581", "tid": 101, "price": "4150.00", "amount": "0.25", "side": "buy"},
            {"date": "1501981570", "tid": 100, "price": "4149.00", "amount": "1.00", "side": "sell"}
        ]"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/v2/transactions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let trades = client_for(&server)
            .get_transactions()
            .await
            .expect("get_transactions failed");

        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].tid, 101);
        assert_eq!(trades[0].side, TransactionSide::Buy);
        assert_eq!(trades[1].amount, "1.00".parse::<Decimal>().unwrap());
    }

    #[tokio::test]
    async fn test_get_book_transactions_sends_window() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/v2/transactions"))
            .and(query_param("book", "btc_usd"))
            .and(query_param("time", "minute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let trades = client_for(&server)
            .get_book_transactions("btc_usd", TransactionWindow::Minute)
            .await
            .expect("get_book_transactions failed");

        assert!(trades.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_api_error() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/v2/ticker"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_ticker().await.unwrap_err();
        match &err {
            QuadrigaError::Api { code, message } => {
                assert_eq!(*code, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_serialization_error() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/v2/ticker"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get_ticker().await.unwrap_err();
        assert!(matches!(err, QuadrigaError::Serialization(_)));
    }
}
