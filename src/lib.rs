//! A web app for tracking personal income and expenses.
//!
//! This library provides a JSON API for managing transactions and a set of
//! server-rendered HTML pages (the dashboard and the transaction detail page)
//! built on top of it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
mod dashboard;
mod database_id;
mod db;
mod endpoints;
mod html;
mod logging;
mod not_found;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::TransactionId;
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_SIZE_LIMIT, logging_middleware};
pub use routing::build_router;
pub use timezone::get_local_offset;
pub use transaction::{
    Amount, Transaction, TransactionData, TransactionType, create_transaction,
    list_transactions,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transaction ID in the request path was missing or blank.
    #[error("Transaction ID is required")]
    MissingId,

    /// The request body could not be parsed as transaction data, e.g. a
    /// required field is missing or the transaction type is unknown.
    #[error("invalid transaction data: {0}")]
    InvalidPayload(String),

    /// The amount was not a number, or was zero or negative.
    ///
    /// Callers should pass in the raw amount text that caused the error.
    #[error("amount must be a number greater than zero, got \"{0}\"")]
    InvalidAmount(String),

    /// The transaction date could not be parsed.
    ///
    /// Callers should pass in the raw date text that caused the error.
    #[error("\"{0}\" is not a valid date, expected a date like 2024-01-31")]
    InvalidDate(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has not been deleted.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body sent to API clients when a request fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A short, human readable description of what went wrong.
    pub error: String,
    /// The underlying cause, only included for internal errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Error {
    /// The HTTP status code that the error maps to.
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingId
            | Error::InvalidPayload(_)
            | Error::InvalidAmount(_)
            | Error::InvalidDate(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert the error into a JSON response.
    ///
    /// `failure` describes the operation that failed, e.g. "Failed to create
    /// transaction", and is only shown to the client for internal errors.
    fn into_json_response(self, failure: &str) -> Response {
        let status = self.status_code();
        let body = match self {
            Error::NotFound => ErrorResponse {
                error: "Transaction not found".to_owned(),
                details: None,
            },
            Error::SqlError(_) | Error::DatabaseLockError => {
                tracing::error!("{failure}: {self}");
                ErrorResponse {
                    error: failure.to_owned(),
                    details: Some(self.to_string()),
                }
            }
            _ => ErrorResponse {
                error: self.to_string(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        self.into_json_response("An unexpected error occurred")
    }
}
