//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    TransactionId,
    transaction::core::{TransactionStoreState, delete_transaction, parse_transaction_id},
};

/// The response body for a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTransactionResponse {
    /// Always `true`, failures respond with an error body instead.
    pub success: bool,
    /// A human readable confirmation.
    pub message: String,
    /// The ID of the transaction that was deleted.
    pub deleted_id: TransactionId,
}

/// A route handler for deleting a transaction.
///
/// Responds with the status code 404 if no transaction has the ID.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionStoreState>,
    Path(transaction_id): Path<String>,
) -> Response {
    tracing::debug!("Deleting transaction {transaction_id}");

    let result = parse_transaction_id(&transaction_id).and_then(|id| {
        let connection = state.connection()?;
        delete_transaction(id, &connection)
    });

    match result {
        Ok(deleted_id) => {
            tracing::info!("Deleted transaction {deleted_id}");
            Json(DeleteTransactionResponse {
                success: true,
                message: "Transaction deleted successfully".to_owned(),
                deleted_id,
            })
            .into_response()
        }
        Err(error) => error.into_json_response("Failed to delete transaction"),
    }
}
