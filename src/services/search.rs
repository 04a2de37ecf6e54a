//! Web search tool stub.
//!
//! Consulted by the chat flow when the classifier flags a live-data request.
//! The implementation is a placeholder: a simulated lookup delay and a
//! canned result string the prompt can splice in.
//! TODO: replace with a real search backend; the prompt side already
//! consumes whatever this returns.

use std::time::Duration;

pub async fn web_search(query: &str) -> String {
    tracing::info!("🔍 Web search requested for: {}", query);

    // Simulated network round-trip
    tokio::time::sleep(Duration::from_millis(400)).await;

    format!(
        "No live search backend is connected. Placeholder results for \"{}\": \
         current headlines, scores and trends are unavailable in this build.",
        query
    )
}
