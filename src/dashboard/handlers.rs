//! Dashboard HTTP handlers.
//!
//! This module contains:
//! - The route handler that renders the dashboard from its query string
//! - The form endpoints that create, edit and delete transactions and then
//!   send the browser back to the dashboard
//! - The endpoint that swaps the category options when the type changes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    Error,
    dashboard::{
        state::{DashboardState, TransactionFilter},
        view::{category_select, dashboard_url, dashboard_view},
    },
    timezone::LocalTimezone,
    transaction::{
        AmountInput, TransactionData, TransactionFormData, TransactionStoreState,
        TransactionType, create_transaction, delete_transaction, list_transactions,
        parse_transaction_id, update_transaction,
    },
};

/// The dashboard's query string, e.g. `/?filter=income&create=true`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Which transactions to list.
    #[serde(default, deserialize_with = "lenient_filter")]
    pub filter: TransactionFilter,
    /// Whether the create form is open.
    #[serde(default)]
    pub create: bool,
    /// The ID of the transaction to show in the edit form.
    #[serde(default)]
    pub edit: Option<String>,
}

/// The query string of the form endpoints, used to keep the filter after the
/// redirect.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectQuery {
    /// The filter that was active when the form was submitted.
    #[serde(default, deserialize_with = "lenient_filter")]
    pub filter: TransactionFilter,
}

fn lenient_filter<'de, D>(deserializer: D) -> Result<TransactionFilter, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(TransactionFilter::from_query(&value))
}

/// The query string of the category select endpoint.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    /// The type whose suggested categories are listed.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category to preselect.
    #[serde(default)]
    pub selected: Option<String>,
    /// Distinguishes the create form's elements from the edit form's.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "create".to_owned()
}

/// The fields of the dashboard's create and edit forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardTransactionForm {
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The amount as typed by the user.
    pub amount: String,
    /// The selected category.
    pub category: String,
    /// The date from the date picker, e.g. "2024-01-10".
    pub date: String,
    /// What the transaction was for.
    pub description: String,
}

impl DashboardTransactionForm {
    /// Check the form the way the dashboard requires before saving it.
    ///
    /// On top of the checks done by [TransactionFormData::validate], the
    /// description must not be blank.
    fn validate(self) -> Result<TransactionData, Error> {
        if self.description.trim().is_empty() {
            return Err(Error::InvalidPayload("description is required".to_owned()));
        }

        TransactionFormData {
            transaction_type: self.transaction_type,
            amount: AmountInput::Text(self.amount),
            category: self.category,
            description: self.description,
            date: self.date,
        }
        .validate()
    }
}

/// Display the dashboard with the filter and forms given in the query string.
///
/// If the transactions cannot be fetched the error is logged and the page is
/// rendered with an empty list.
pub async fn get_dashboard_page(
    State(state): State<TransactionStoreState>,
    State(local_timezone): State<LocalTimezone>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let transactions = state
        .connection()
        .and_then(|connection| list_transactions(&connection))
        .unwrap_or_else(|error| {
            tracing::error!("Failed to fetch transactions: {error}");
            Vec::new()
        });

    let mut dashboard = DashboardState::new(transactions);
    dashboard.set_filter(query.filter);

    if query.create {
        dashboard.open_create();
    }

    if let Some(raw_id) = query.edit.as_deref() {
        let opened = parse_transaction_id(raw_id)
            .map(|id| dashboard.open_edit(id))
            .unwrap_or(false);

        if !opened {
            tracing::warn!("Cannot edit transaction {raw_id}: not in the transaction list");
        }
    }

    dashboard_view(&dashboard, local_timezone.today()).into_response()
}

/// Render the category select for the chosen transaction type.
pub async fn get_category_select(Query(query): Query<CategoryQuery>) -> Response {
    category_select(
        &query.prefix,
        query.transaction_type,
        query.selected.as_deref(),
    )
    .into_response()
}

/// Create a transaction from the dashboard's form, then send the browser
/// back to the dashboard with the create form closed.
pub async fn create_dashboard_transaction(
    State(state): State<TransactionStoreState>,
    Query(query): Query<RedirectQuery>,
    Form(form): Form<DashboardTransactionForm>,
) -> Response {
    let result = form.validate().and_then(|data| {
        let connection = state.connection()?;
        create_transaction(data, &connection)
    });

    match result {
        Ok(transaction) => {
            tracing::info!("Created transaction {}", transaction.id);
            redirect_to_dashboard(query.filter)
        }
        Err(error) => mutation_failed("Failed to create transaction", error),
    }
}

/// Replace the fields of a transaction from the dashboard's edit form, then
/// send the browser back to the dashboard with the edit form closed.
pub async fn edit_dashboard_transaction(
    State(state): State<TransactionStoreState>,
    Path(transaction_id): Path<String>,
    Query(query): Query<RedirectQuery>,
    Form(form): Form<DashboardTransactionForm>,
) -> Response {
    let result = parse_transaction_id(&transaction_id).and_then(|id| {
        let data = form.validate()?;
        let connection = state.connection()?;
        update_transaction(id, data, &connection)
    });

    match result {
        Ok(transaction) => {
            tracing::info!("Updated transaction {}", transaction.id);
            redirect_to_dashboard(query.filter)
        }
        Err(error) => mutation_failed("Failed to update transaction", error),
    }
}

/// Delete a transaction, then send the browser back to the dashboard.
///
/// The browser asks the user for confirmation before sending the request.
pub async fn delete_dashboard_transaction(
    State(state): State<TransactionStoreState>,
    Path(transaction_id): Path<String>,
    Query(query): Query<RedirectQuery>,
) -> Response {
    let result = parse_transaction_id(&transaction_id).and_then(|id| {
        let connection = state.connection()?;
        delete_transaction(id, &connection)
    });

    match result {
        Ok(id) => {
            tracing::info!("Deleted transaction {id}");
            redirect_to_dashboard(query.filter)
        }
        Err(error) => mutation_failed("Failed to delete transaction", error),
    }
}

fn redirect_to_dashboard(filter: TransactionFilter) -> Response {
    (
        HxRedirect(dashboard_url(filter, false, None)),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

/// Log the error and respond without a redirect so that the page stays as it
/// was.
fn mutation_failed(failure: &str, error: Error) -> Response {
    let status = error.status_code();

    if status.is_server_error() {
        tracing::error!("{failure}: {error}");
    } else {
        tracing::warn!("{failure}: {error}");
    }

    status.into_response()
}

#[cfg(test)]
mod dashboard_page_tests {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::Response,
    };
    use scraper::{Html, Selector};

    use crate::{
        dashboard::{
            handlers::{DashboardQuery, get_dashboard_page},
            state::TransactionFilter,
        },
        test_utils::{
            assert_form_input, assert_form_input_with_value, assert_hx_endpoint,
            assert_valid_html, parse_html_document,
        },
        timezone::LocalTimezone,
        transaction::{
            TransactionStoreState, TransactionType,
            test_utils::{must_create_test_state, must_create_transaction},
        },
    };

    async fn render(state: TransactionStoreState, query: DashboardQuery) -> Html {
        let response: Response = get_dashboard_page(
            State(state),
            State(LocalTimezone("Etc/UTC".to_owned())),
            Query(query),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        html
    }

    fn text_of(html: &Html, selector: &str) -> String {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("no element matches {selector}"))
            .text()
            .collect::<String>()
    }

    fn row_descriptions(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("#transaction-list li h6").unwrap())
            .map(|heading| heading.text().collect::<String>())
            .collect()
    }

    #[tokio::test]
    async fn empty_dashboard_shows_empty_state() {
        let html = render(must_create_test_state(), DashboardQuery::default()).await;

        let empty_state = text_of(&html, "#empty-state");
        assert!(empty_state.contains("No transactions yet"));
        assert!(empty_state.contains("Start by adding your first transaction!"));
        assert!(text_of(&html, "#balance").contains("Rp 0"));
        assert_eq!(text_of(&html, "#toggle-create").trim(), "+ Add New Transaction");
    }

    #[tokio::test]
    async fn lists_transactions_newest_first_with_summary() {
        let state = must_create_test_state();
        must_create_transaction(&state, TransactionType::Income, 100_000.0, "Salary");
        must_create_transaction(&state, TransactionType::Expense, 25_000.0, "Lunch");

        let html = render(state, DashboardQuery::default()).await;

        assert_eq!(row_descriptions(&html), vec!["Lunch", "Salary"]);
        assert!(text_of(&html, "#total-income").contains("Rp 100.000"));
        assert!(text_of(&html, "#total-expenses").contains("Rp 25.000"));
        assert!(text_of(&html, "#balance").contains("Rp 75.000"));

        let list = text_of(&html, "#transaction-list");
        assert!(list.contains("-Rp 25.000"));
        assert!(list.contains("+Rp 100.000"));
        assert!(list.contains("10/1/2024"));
    }

    #[tokio::test]
    async fn negative_balance_is_highlighted() {
        let state = must_create_test_state();
        must_create_transaction(&state, TransactionType::Expense, 25_000.0, "Lunch");

        let html = render(state, DashboardQuery::default()).await;

        let balance = html
            .select(&Selector::parse("#balance").unwrap())
            .next()
            .unwrap();
        assert!(balance.value().attr("class").unwrap().contains("bg-warning"));
        assert!(balance.text().collect::<String>().contains("-Rp 25.000"));
    }

    #[tokio::test]
    async fn filter_only_changes_the_list() {
        let state = must_create_test_state();
        must_create_transaction(&state, TransactionType::Income, 100_000.0, "Salary");
        must_create_transaction(&state, TransactionType::Expense, 25_000.0, "Lunch");

        let html = render(
            state,
            DashboardQuery {
                filter: TransactionFilter::Income,
                ..Default::default()
            },
        )
        .await;

        assert_eq!(row_descriptions(&html), vec!["Salary"]);
        assert!(text_of(&html, "#total-expenses").contains("Rp 25.000"));
        assert_eq!(text_of(&html, "a.active").trim(), "Income");
    }

    #[tokio::test]
    async fn create_query_opens_create_form() {
        let html = render(
            must_create_test_state(),
            DashboardQuery {
                create: true,
                ..Default::default()
            },
        )
        .await;

        let form = html
            .select(&Selector::parse("#create-form").unwrap())
            .next()
            .expect("create form missing");
        assert_hx_endpoint(&form, "/dashboard/transactions?filter=all", "hx-post");
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "date", "date");
        assert_form_input(&form, "description", "text");
        assert_eq!(text_of(&html, "#toggle-create").trim(), "Cancel");

        let category_options = html
            .select(&Selector::parse("#create-category-select option").unwrap())
            .count();
        assert_eq!(category_options, 8);
    }

    #[tokio::test]
    async fn edit_query_opens_prefilled_edit_form() {
        let state = must_create_test_state();
        let transaction =
            must_create_transaction(&state, TransactionType::Expense, 50_000.0, "Lunch");

        let html = render(
            state,
            DashboardQuery {
                edit: Some(transaction.id.to_string()),
                ..Default::default()
            },
        )
        .await;

        let form = html
            .select(&Selector::parse("#edit-form").unwrap())
            .next()
            .expect("edit form missing");
        assert_hx_endpoint(
            &form,
            &format!("/dashboard/transactions/{}?filter=all", transaction.id),
            "hx-put",
        );
        assert_form_input_with_value(&form, "amount", "number", "50000");
        assert_form_input_with_value(&form, "date", "date", "2024-01-10");
        assert_form_input_with_value(&form, "description", "text", "Lunch");
    }

    fn href_of(html: &Html, selector: &str) -> String {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("no element matches {selector}"))
            .value()
            .attr("href")
            .unwrap_or_default()
            .to_owned()
    }

    #[tokio::test]
    async fn cancel_links_close_only_their_form() {
        let state = must_create_test_state();
        let transaction =
            must_create_transaction(&state, TransactionType::Expense, 50_000.0, "Lunch");

        let html = render(
            state,
            DashboardQuery {
                filter: TransactionFilter::Expense,
                create: true,
                edit: Some(transaction.id.to_string()),
            },
        )
        .await;

        assert_eq!(
            href_of(&html, "#toggle-create"),
            format!("/?filter=expense&edit={}", transaction.id)
        );
        assert_eq!(href_of(&html, "#cancel-edit"), "/?filter=expense&create=true");
    }

    #[tokio::test]
    async fn toggle_opens_create_form_and_keeps_filter() {
        let html = render(
            must_create_test_state(),
            DashboardQuery {
                filter: TransactionFilter::Income,
                ..Default::default()
            },
        )
        .await;

        assert_eq!(href_of(&html, "#toggle-create"), "/?filter=income&create=true");
    }

    #[tokio::test]
    async fn edit_query_with_unknown_id_stays_idle() {
        let html = render(
            must_create_test_state(),
            DashboardQuery {
                edit: Some("not-an-id".to_owned()),
                ..Default::default()
            },
        )
        .await;

        assert_eq!(
            html.select(&Selector::parse("#edit-form").unwrap()).count(),
            0
        );
    }

    #[tokio::test]
    async fn delete_button_asks_for_confirmation() {
        let state = must_create_test_state();
        let transaction =
            must_create_transaction(&state, TransactionType::Expense, 50_000.0, "Lunch");

        let html = render(state, DashboardQuery::default()).await;

        let button = html
            .select(&Selector::parse("button[hx-delete]").unwrap())
            .next()
            .expect("delete button missing");
        assert_eq!(
            button.value().attr("hx-delete"),
            Some(format!("/dashboard/transactions/{}?filter=all", transaction.id).as_str())
        );
        assert_eq!(
            button.value().attr("hx-confirm"),
            Some("Are you sure you want to delete this transaction?")
        );
    }

    #[tokio::test]
    async fn storage_failure_renders_empty_list() {
        let state = must_create_test_state();
        state
            .db_connection
            .lock()
            .unwrap()
            .execute("DROP TABLE \"transaction\"", ())
            .unwrap();

        let html = render(state, DashboardQuery::default()).await;

        assert!(text_of(&html, "#empty-state").contains("No transactions yet"));
    }
}
