/*
[INPUT]:  QUADRIGACX_CLIENT_ID, QUADRIGACX_API_KEY, QUADRIGACX_API_SECRET env vars
[OUTPUT]: Account balance and open orders
[POS]:    Examples - signed account queries
[UPDATE]: When adding new account endpoints
*/

use quadrigacx_adapter::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Example: Query account state with HMAC-signed requests
#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (Ok(client_id), Ok(api_key), Ok(api_secret)) = (
        std::env::var("QUADRIGACX_CLIENT_ID"),
        std::env::var("QUADRIGACX_API_KEY"),
        std::env::var("QUADRIGACX_API_SECRET"),
    ) else {
        warn!("set QUADRIGACX_CLIENT_ID, QUADRIGACX_API_KEY and QUADRIGACX_API_SECRET");
        return;
    };

    let client = match QuadrigaClient::new(client_id, api_key, api_secret) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to create client");
            return;
        }
    };

    match client.get_account_balance().await {
        Ok(balance) => {
            for (currency, holding) in &balance.currencies {
                info!(
                    currency = %currency,
                    balance = %holding.balance,
                    available = %holding.available,
                    "balance"
                );
            }
        }
        Err(e) if e.is_auth_error() => error!(error = %e, "credentials rejected"),
        Err(e) => error!(error = %e, "balance request failed"),
    }

    let orders = match client.get_open_orders().await {
        Ok(orders) => orders,
        Err(e) => {
            error!(error = %e, "open orders request failed");
            return;
        }
    };
    info!(count = orders.len(), "open orders");

    if let Some(first) = orders.first() {
        match client.lookup_order(&first.id).await {
            Ok(order) => info!(
                id = %order.id,
                status = ?order.status,
                book = %order.book,
                "order"
            ),
            Err(QuadrigaError::OrderNotFound { order_id }) => warn!(%order_id, "order vanished"),
            Err(e) => error!(error = %e, "lookup failed"),
        }
    }
}
