//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    transaction::{
        core::{TransactionStoreState, create_transaction},
        form::TransactionFormData,
    },
};

/// A route handler for creating a new transaction, responds with the created
/// transaction and the status code 201 Created.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionStoreState>,
    payload: Result<Json<TransactionFormData>, JsonRejection>,
) -> Response {
    let result = payload
        .map_err(|rejection| Error::InvalidPayload(rejection.body_text()))
        .and_then(|Json(form)| form.validate())
        .and_then(|data| {
            let connection = state.connection()?;
            create_transaction(data, &connection)
        });

    match result {
        Ok(transaction) => {
            tracing::info!("Created transaction {}", transaction.id);
            (StatusCode::CREATED, Json(transaction)).into_response()
        }
        Err(error) => error.into_json_response("Failed to create transaction"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Json,
        extract::State,
        http::StatusCode,
    };
    use time::macros::date;

    use crate::{
        ErrorResponse,
        test_utils::parse_json,
        transaction::{
            Amount, Transaction, TransactionType,
            core::get_transaction,
            create_endpoint::create_transaction_endpoint,
            form::{AmountInput, TransactionFormData},
            test_utils::must_create_test_state,
        },
    };

    fn lunch_form(amount: AmountInput) -> TransactionFormData {
        TransactionFormData {
            transaction_type: TransactionType::Expense,
            amount,
            category: "Food".to_owned(),
            description: "Lunch".to_owned(),
            date: "2024-01-10".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = must_create_test_state();

        let response = create_transaction_endpoint(
            State(state.clone()),
            Ok(Json(lunch_form(AmountInput::Number(50000.0)))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Transaction = parse_json(response).await;
        assert_eq!(created.transaction_type, TransactionType::Expense);
        assert_eq!(created.amount, Amount::try_from(50000.0).unwrap());
        assert_eq!(created.category, "Food");
        assert_eq!(created.description, "Lunch");
        assert_eq!(created.date, date!(2024 - 01 - 10));

        let connection = state.db_connection.lock().unwrap();
        let stored = get_transaction(created.id, &connection).unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn accepts_amount_as_string() {
        let state = must_create_test_state();

        let response = create_transaction_endpoint(
            State(state),
            Ok(Json(lunch_form(AmountInput::Text("12.5".to_owned())))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: Transaction = parse_json(response).await;
        assert_eq!(created.amount.to_string(), "12.5");
    }

    #[tokio::test]
    async fn rejects_negative_amount() {
        let state = must_create_test_state();

        let response = create_transaction_endpoint(
            State(state.clone()),
            Ok(Json(lunch_form(AmountInput::Number(-1.0)))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = parse_json(response).await;
        assert!(body.error.contains("amount"), "got error {:?}", body.error);
        let count: i64 = state
            .db_connection
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM \"transaction\"", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
