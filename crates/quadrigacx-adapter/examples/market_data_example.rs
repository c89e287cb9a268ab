/*
[INPUT]:  Book identifier (e.g., "btc_cad")
[OUTPUT]: Market data (ticker, order book, recent trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use quadrigacx_adapter::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no authentication required)
///
/// Run with `RUST_LOG=quadrigacx_adapter=debug` to see request logging.
#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Credentials are only used by signed endpoints
    let client = match QuadrigaClient::new("", "", "") {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to create client");
            return;
        }
    };

    match client.get_ticker().await {
        Ok(ticker) => info!(last = %ticker.last, high = %ticker.high, low = %ticker.low, "ticker"),
        Err(e) => error!(error = %e, "ticker request failed"),
    }

    let book = "eth_cad";
    match client.get_specific_order_book(book).await {
        Ok(order_book) => info!(
            book,
            best_bid = ?order_book.best_bid().map(BookLevel::price),
            best_ask = ?order_book.best_ask().map(BookLevel::price),
            "order book"
        ),
        Err(e) => error!(error = %e, book, "order book request failed"),
    }

    match client
        .get_book_transactions("btc_cad", TransactionWindow::Minute)
        .await
    {
        Ok(trades) => info!(count = trades.len(), "recent trades"),
        Err(e) => error!(error = %e, "transactions request failed"),
    }
}
