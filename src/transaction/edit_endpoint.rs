//! Defines the endpoint for updating an existing transaction.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    transaction::{
        core::{TransactionStoreState, parse_transaction_id, update_transaction},
        form::TransactionFormData,
    },
};

/// A route handler for replacing the fields of a transaction, responds with
/// the updated transaction.
///
/// Responds with the status code 404 if no transaction has the ID.
pub async fn edit_transaction_endpoint(
    State(state): State<TransactionStoreState>,
    Path(transaction_id): Path<String>,
    payload: Result<Json<TransactionFormData>, JsonRejection>,
) -> Response {
    let result = parse_transaction_id(&transaction_id).and_then(|id| {
        let Json(form) = payload.map_err(|rejection| Error::InvalidPayload(rejection.body_text()))?;
        tracing::debug!("Updating transaction {id} with {form:?}");

        let data = form.validate()?;
        let connection = state.connection()?;
        update_transaction(id, data, &connection)
    });

    match result {
        Ok(transaction) => {
            tracing::info!("Updated transaction {}", transaction.id);
            Json(transaction).into_response()
        }
        Err(error) => error.into_json_response("Failed to update transaction"),
    }
}
