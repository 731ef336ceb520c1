//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

use std::fmt::Display;

/// The dashboard, which lists and summarises transactions.
pub const DASHBOARD_VIEW: &str = "/";
/// The page for displaying a single transaction.
pub const TRANSACTION_VIEW: &str = "/transactions/{transaction_id}/view";

/// The route to create a transaction from the dashboard's form.
pub const DASHBOARD_TRANSACTIONS: &str = "/dashboard/transactions";
/// The route to edit or delete a transaction from the dashboard.
pub const DASHBOARD_TRANSACTION: &str = "/dashboard/transactions/{transaction_id}";
/// The route for the category options of a transaction type.
pub const DASHBOARD_CATEGORIES: &str = "/dashboard/categories";

/// The route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/transactions";
/// The route to get, update and delete a single transaction.
pub const TRANSACTION_API: &str = "/transactions/{transaction_id}";
/// A single transaction route with the ID left out.
pub const TRANSACTION_API_MISSING_ID: &str = "/transactions/";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}', '{transaction_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
