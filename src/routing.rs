//! Application router configuration for the JSON API, the pages and the dashboard's form endpoints.

use axum::{
    Router,
    routing::{any, get, post, put},
};

use crate::{
    AppState,
    dashboard::{
        create_dashboard_transaction, delete_dashboard_transaction, edit_dashboard_transaction,
        get_category_select, get_dashboard_page,
    },
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, get_transaction_page, list_transactions_endpoint,
        missing_transaction_id_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            get(get_transaction_endpoint)
                .put(edit_transaction_endpoint)
                .delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API_MISSING_ID,
            any(missing_transaction_id_endpoint),
        );

    let page_routes = Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::TRANSACTION_VIEW, get(get_transaction_page));

    let dashboard_routes = Router::new()
        .route(endpoints::DASHBOARD_CATEGORIES, get(get_category_select))
        .route(
            endpoints::DASHBOARD_TRANSACTIONS,
            post(create_dashboard_transaction),
        )
        .route(
            endpoints::DASHBOARD_TRANSACTION,
            put(edit_dashboard_transaction).delete(delete_dashboard_transaction),
        );

    api_routes
        .merge(page_routes)
        .merge(dashboard_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}
