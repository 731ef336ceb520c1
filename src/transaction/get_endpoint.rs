//! Defines the endpoint for getting a single transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    transaction::core::{TransactionStoreState, get_transaction, parse_transaction_id},
};

/// A route handler for getting a transaction by its ID.
///
/// Responds with the status code 404 if no transaction has the ID.
pub async fn get_transaction_endpoint(
    State(state): State<TransactionStoreState>,
    Path(transaction_id): Path<String>,
) -> Response {
    tracing::debug!("Getting transaction {transaction_id}");

    let result = parse_transaction_id(&transaction_id).and_then(|id| {
        let connection = state.connection()?;
        get_transaction(id, &connection)
    });

    match result {
        Ok(transaction) => Json(transaction).into_response(),
        Err(error) => error.into_json_response("Failed to fetch transaction"),
    }
}

/// A route handler for requests to a single transaction without an ID, e.g.
/// `/transactions/`.
pub async fn missing_transaction_id_endpoint() -> Response {
    Error::MissingId.into_response()
}
