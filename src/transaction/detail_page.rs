//! Defines the page that displays a single transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::UtcOffset;

use crate::{
    Error, endpoints,
    html::{base, format_currency, format_long_date, format_timestamp},
    timezone::LocalTimezone,
    transaction::{
        Transaction, TransactionType,
        core::{TransactionStoreState, get_transaction, parse_transaction_id},
    },
};

/// A route handler for the transaction detail page.
///
/// Renders a not found panel with the status code 404 if no transaction has
/// the ID, or an error panel with the status code 500 if the transaction could
/// not be loaded.
pub async fn get_transaction_page(
    State(state): State<TransactionStoreState>,
    State(local_timezone): State<LocalTimezone>,
    Path(transaction_id): Path<String>,
) -> Response {
    let result = parse_transaction_id(&transaction_id).and_then(|id| {
        let connection = state.connection()?;
        get_transaction(id, &connection)
    });

    match result {
        Ok(transaction) => {
            transaction_page(&transaction, local_timezone.offset()).into_response()
        }
        Err(Error::NotFound | Error::MissingId) => (
            StatusCode::NOT_FOUND,
            not_found_page(&transaction_id, None),
        )
            .into_response(),
        Err(error) => {
            tracing::error!("Could not load transaction {transaction_id}: {error}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                not_found_page(&transaction_id, Some("Failed to load transaction")),
            )
                .into_response()
        }
    }
}

fn type_text_class(transaction_type: TransactionType) -> &'static str {
    match transaction_type {
        TransactionType::Income => "text-success",
        TransactionType::Expense => "text-danger",
    }
}

fn transaction_page(transaction: &Transaction, local_offset: UtcOffset) -> Markup {
    let (icon, badge_class, badge_text) = match transaction.transaction_type {
        TransactionType::Income => ("💵", "bg-success", "INCOME"),
        TransactionType::Expense => ("💰", "bg-danger", "EXPENSE"),
    };
    let text_class = type_text_class(transaction.transaction_type);

    let content = html! {
        div class="container py-4"
        {
            div class="row justify-content-center"
            {
                div class="col-lg-8"
                {
                    a href=(endpoints::DASHBOARD_VIEW) class="btn btn-outline-secondary mb-4"
                    {
                        "← Back to Dashboard"
                    }

                    div class="card shadow-sm"
                    {
                        div class="card-body text-center"
                        {
                            div class={ "display-4 mb-3 " (text_class) } { (icon) }
                            h2 class={ "card-title " (text_class) }
                            {
                                (format_currency(transaction.amount.as_decimal()))
                            }
                            span class={ "badge fs-6 " (badge_class) } { (badge_text) }
                        }

                        div class="card-body border-top"
                        {
                            div class="row"
                            {
                                div class="col-12 mb-4"
                                {
                                    strong class="text-muted" { "Description:" }
                                    p class="fs-5 mb-0 mt-1" { (transaction.description) }
                                }

                                div class="col-md-6 mb-3"
                                {
                                    strong class="text-muted" { "Category:" }
                                    br;
                                    span class="badge bg-info text-dark fs-6 mt-1"
                                    {
                                        (transaction.category)
                                    }
                                }

                                div class="col-md-6 mb-3"
                                {
                                    strong class="text-muted" { "Transaction Date:" }
                                    br;
                                    span class="fs-6 mt-1" { (format_long_date(transaction.date)) }
                                }

                                div class="col-md-6 mb-3"
                                {
                                    strong class="text-muted" { "Recorded On:" }
                                    br;
                                    span class="fs-6 mt-1"
                                    {
                                        (format_timestamp(transaction.created_at, local_offset))
                                    }
                                }

                                div class="col-12 mt-4 pt-3 border-top"
                                {
                                    small class="text-muted"
                                    {
                                        "Transaction ID: "
                                        code { (transaction.id.to_string()) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transaction", &content)
}

fn not_found_page(transaction_id: &str, error: Option<&str>) -> Markup {
    let retry_url = format_endpoint_for_retry(transaction_id);

    let content = html! {
        div class="container py-4"
        {
            div class="row justify-content-center"
            {
                div class="col-lg-6"
                {
                    a href=(endpoints::DASHBOARD_VIEW) class="btn btn-outline-secondary mb-4"
                    {
                        "← Back to Dashboard"
                    }

                    div class="card border-danger"
                    {
                        div class="card-body text-center py-5"
                        {
                            div class="text-danger display-4 mb-3" { "❌" }
                            h3 class="text-danger" { "Transaction Not Found" }
                            p class="text-muted mb-4"
                            {
                                (error.unwrap_or(
                                    "The transaction you are looking for does not exist or may have been deleted."
                                ))
                            }
                            p class="text-muted small"
                            {
                                "Transaction ID: "
                                code { (transaction_id) }
                            }

                            div class="d-grid gap-2 d-md-flex justify-content-md-center"
                            {
                                a href=(endpoints::DASHBOARD_VIEW) class="btn btn-primary"
                                {
                                    "Back to Dashboard"
                                }
                                a href=(retry_url) class="btn btn-outline-primary" id="retry"
                                {
                                    "Try Again"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transaction Not Found", &content)
}

fn format_endpoint_for_retry(transaction_id: &str) -> String {
    endpoints::format_endpoint(endpoints::TRANSACTION_VIEW, transaction_id)
}
