//! Defines the endpoint for listing every transaction.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::transaction::core::{TransactionStoreState, list_transactions};

/// A route handler that responds with every transaction as JSON, most
/// recently created first.
pub async fn list_transactions_endpoint(State(state): State<TransactionStoreState>) -> Response {
    let result = state
        .connection()
        .and_then(|connection| list_transactions(&connection));

    match result {
        Ok(transactions) => {
            tracing::debug!("Listing {} transactions", transactions.len());
            Json(transactions).into_response()
        }
        Err(error) => error.into_json_response("Failed to fetch transactions"),
    }
}
