/*
[INPUT]:  Stored API credentials, optional book and order identifiers
[OUTPUT]: User account data (balance, open orders, order details)
[POS]:    HTTP layer - account endpoints (require HMAC-signed body)
[UPDATE]: When adding new account endpoints or changing request fields
*/

use crate::http::{QuadrigaClient, QuadrigaError, Result};
use crate::types::{
    AccountBalance, BookRequest, EmptyParams, OpenOrder, OrderIdRequest, OrderLookup,
};

impl QuadrigaClient {
    /// Account balance across all currencies
    ///
    /// POST balance
    pub async fn get_account_balance(&self) -> Result<AccountBalance> {
        let builder = self.signed_request("balance", EmptyParams {})?;
        self.send_json(builder).await
    }

    /// Open orders on the default book
    ///
    /// POST open_orders
    pub async fn get_open_orders(&self) -> Result<Vec<OpenOrder>> {
        let builder = self.signed_request("open_orders", BookRequest::default())?;
        self.send_json(builder).await
    }

    /// Open orders on a specific book
    ///
    /// POST open_orders {book}
    pub async fn get_book_open_orders(&self, book: &str) -> Result<Vec<OpenOrder>> {
        let params = BookRequest {
            book: Some(book.to_string()),
        };
        let builder = self.signed_request("open_orders", params)?;
        self.send_json(builder).await
    }

    /// Look up a single order by id
    ///
    /// POST lookup_order {id}
    /// An empty result list yields `QuadrigaError::OrderNotFound`.
    pub async fn lookup_order(&self, order_id: &str) -> Result<OrderLookup> {
        let params = OrderIdRequest {
            id: order_id.to_string(),
        };
        let builder = self.signed_request("lookup_order", params)?;
        let orders: Vec<OrderLookup> = self.send_json(builder).await?;

        orders
            .into_iter()
            .next()
            .ok_or_else(|| QuadrigaError::OrderNotFound {
                order_id: order_id.to_string(),
            })
    }
}
