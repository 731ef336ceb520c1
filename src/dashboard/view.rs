//! HTML rendering for the dashboard.

use maud::{Markup, html};
use time::Date;

use crate::{
    TransactionId,
    dashboard::state::{DashboardState, FinancialSummary, TransactionFilter},
    endpoints,
    html::{base, format_currency, format_short_date, loading_spinner},
    transaction::{DATE_FORMAT, Transaction, TransactionType, suggested_categories},
};

pub(super) const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this transaction?";

const FILTERS: [(TransactionFilter, &str); 3] = [
    (TransactionFilter::All, "All"),
    (TransactionFilter::Income, "Income"),
    (TransactionFilter::Expense, "Expenses"),
];

/// The dashboard URL that shows the given filter and forms.
pub(super) fn dashboard_url(
    filter: TransactionFilter,
    create: bool,
    edit: Option<TransactionId>,
) -> String {
    let mut url = format!("{}?filter={}", endpoints::DASHBOARD_VIEW, filter.as_str());

    if create {
        url.push_str("&create=true");
    }

    if let Some(id) = edit {
        url.push_str(&format!("&edit={id}"));
    }

    url
}

/// Append the filter to a form endpoint so that the redirect after the
/// request keeps showing the same transactions.
fn with_filter(endpoint: &str, filter: TransactionFilter) -> String {
    format!("{endpoint}?filter={}", filter.as_str())
}

pub(super) fn dashboard_view(state: &DashboardState, today: Date) -> Markup {
    let filter = state.filter();
    let editing_id = state.editing().map(|transaction| transaction.id);
    let filtered = state.filtered();

    let content = html! {
        div class="container py-4"
        {
            div class="d-flex justify-content-between align-items-center mb-4"
            {
                h1 class="h3 mb-0" { "Financial Dashboard" }

                @if state.is_creating() {
                    a
                        id="toggle-create"
                        href=(dashboard_url(filter, false, editing_id))
                        class="btn btn-secondary"
                    {
                        "Cancel"
                    }
                } @else {
                    a
                        id="toggle-create"
                        href=(dashboard_url(filter, true, editing_id))
                        class="btn btn-primary"
                    {
                        "+ Add New Transaction"
                    }
                }
            }

            (summary_cards(&state.summary()))

            @if state.is_creating() {
                (create_form(filter, today))
            }

            @if let Some(transaction) = state.editing() {
                (edit_form(transaction, filter, state.is_creating()))
            }

            div class="card shadow-sm"
            {
                div class="card-header d-flex justify-content-between align-items-center"
                {
                    h5 class="mb-0" { "Transactions" }
                    (filter_buttons(filter, state.is_creating(), editing_id))
                }

                div class="card-body p-0"
                {
                    @if filtered.is_empty() {
                        (empty_state())
                    } @else {
                        ul id="transaction-list" class="list-group list-group-flush"
                        {
                            @for transaction in &filtered {
                                (transaction_row(transaction, filter, state.is_creating()))
                            }
                        }
                    }
                }
            }
        }
    };

    base("Dashboard", &content)
}

fn summary_cards(summary: &FinancialSummary) -> Markup {
    let balance_class = if summary.balance.is_sign_negative() {
        "bg-warning"
    } else {
        "bg-primary"
    };

    html! {
        div class="row g-3 mb-4"
        {
            div class="col-md-4"
            {
                div id="total-income" class="card text-white bg-success h-100"
                {
                    div class="card-body"
                    {
                        h6 class="card-title" { "Total Income" }
                        p class="h4 mb-0" { (format_currency(summary.total_income)) }
                    }
                }
            }

            div class="col-md-4"
            {
                div id="total-expenses" class="card text-white bg-danger h-100"
                {
                    div class="card-body"
                    {
                        h6 class="card-title" { "Total Expenses" }
                        p class="h4 mb-0" { (format_currency(summary.total_expenses)) }
                    }
                }
            }

            div class="col-md-4"
            {
                div id="balance" class={ "card text-white h-100 " (balance_class) }
                {
                    div class="card-body"
                    {
                        h6 class="card-title" { "Current Balance" }
                        p class="h4 mb-0" { (format_currency(summary.balance)) }
                    }
                }
            }
        }
    }
}

/// The values shown in the create or edit form.
struct FormValues<'a> {
    prefix: &'a str,
    transaction_type: TransactionType,
    amount: String,
    category: Option<&'a str>,
    date: String,
    description: &'a str,
}

fn create_form(filter: TransactionFilter, today: Date) -> Markup {
    let values = FormValues {
        prefix: "create",
        transaction_type: TransactionType::Expense,
        amount: String::new(),
        category: None,
        date: today.format(DATE_FORMAT).unwrap_or_default(),
        description: "",
    };

    html! {
        div class="card shadow-sm mb-4"
        {
            div class="card-header" { h5 class="mb-0" { "Add New Transaction" } }

            div class="card-body"
            {
                form
                    id="create-form"
                    hx-post=(with_filter(endpoints::DASHBOARD_TRANSACTIONS, filter))
                    hx-swap="none"
                {
                    (form_fields(&values))

                    button type="submit" class="btn btn-success"
                    {
                        (loading_spinner())
                        "Add Transaction"
                    }
                }
            }
        }
    }
}

fn edit_form(transaction: &Transaction, filter: TransactionFilter, creating: bool) -> Markup {
    let values = FormValues {
        prefix: "edit",
        transaction_type: transaction.transaction_type,
        amount: transaction.amount.to_string(),
        category: Some(&transaction.category),
        date: transaction.date.format(DATE_FORMAT).unwrap_or_default(),
        description: &transaction.description,
    };
    let update_url = with_filter(
        &endpoints::format_endpoint(endpoints::DASHBOARD_TRANSACTION, transaction.id),
        filter,
    );

    html! {
        div class="card shadow-sm border-warning mb-4"
        {
            div class="card-header" { h5 class="mb-0" { "Edit Transaction" } }

            div class="card-body"
            {
                form id="edit-form" hx-put=(update_url) hx-swap="none"
                {
                    (form_fields(&values))

                    div class="d-flex gap-2"
                    {
                        button type="submit" class="btn btn-warning"
                        {
                            (loading_spinner())
                            "Update Transaction"
                        }

                        a
                            id="cancel-edit"
                            href=(dashboard_url(filter, creating, None))
                            class="btn btn-secondary"
                        {
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

fn form_fields(values: &FormValues) -> Markup {
    let prefix = values.prefix;
    let categories_url = format!("{}?prefix={prefix}", endpoints::DASHBOARD_CATEGORIES);

    html! {
        div class="row"
        {
            div class="col-md-6 mb-3"
            {
                label for={ (prefix) "-type" } class="form-label" { "Type" }
                select
                    id={ (prefix) "-type" }
                    name="type"
                    class="form-select"
                    hx-get=(categories_url)
                    hx-target={ "#" (prefix) "-category" }
                    hx-swap="outerHTML"
                    required
                {
                    option
                        value=(TransactionType::Expense.as_str())
                        selected[values.transaction_type == TransactionType::Expense]
                    {
                        "Expense"
                    }
                    option
                        value=(TransactionType::Income.as_str())
                        selected[values.transaction_type == TransactionType::Income]
                    {
                        "Income"
                    }
                }
            }

            div class="col-md-6 mb-3"
            {
                label for={ (prefix) "-amount" } class="form-label" { "Amount (Rp)" }
                input
                    id={ (prefix) "-amount" }
                    type="number"
                    name="amount"
                    class="form-control"
                    min="1"
                    step="any"
                    placeholder="50000"
                    value=(values.amount)
                    required;
            }

            div class="col-md-6"
            {
                (category_select(prefix, values.transaction_type, values.category))
            }

            div class="col-md-6 mb-3"
            {
                label for={ (prefix) "-date" } class="form-label" { "Date" }
                input
                    id={ (prefix) "-date" }
                    type="date"
                    name="date"
                    class="form-control"
                    value=(values.date)
                    required;
            }

            div class="col-12 mb-3"
            {
                label for={ (prefix) "-description" } class="form-label" { "Description" }
                input
                    id={ (prefix) "-description" }
                    type="text"
                    name="description"
                    class="form-control"
                    placeholder="What was this for?"
                    value=(values.description)
                    required;
            }
        }
    }
}

/// The category select for `transaction_type`.
///
/// A `selected` category that is not one of the suggestions is kept as the
/// first option so that editing a transaction never silently changes it.
pub(super) fn category_select(
    prefix: &str,
    transaction_type: TransactionType,
    selected: Option<&str>,
) -> Markup {
    let suggestions = suggested_categories(transaction_type);
    let custom = selected.filter(|category| {
        !category.is_empty() && !suggestions.contains(category)
    });

    html! {
        div id={ (prefix) "-category" } class="mb-3"
        {
            label for={ (prefix) "-category-select" } class="form-label" { "Category" }
            select
                id={ (prefix) "-category-select" }
                name="category"
                class="form-select"
                required
            {
                @if let Some(custom) = custom {
                    option value=(custom) selected { (custom) }
                }

                @for category in suggestions {
                    option value=(category) selected[selected == Some(*category)] { (category) }
                }
            }
        }
    }
}

fn filter_buttons(
    active: TransactionFilter,
    creating: bool,
    editing: Option<TransactionId>,
) -> Markup {
    html! {
        div class="btn-group btn-group-sm" role="group" aria-label="Filter transactions"
        {
            @for (filter, label) in FILTERS {
                @if filter == active {
                    a
                        href=(dashboard_url(filter, creating, editing))
                        class="btn btn-primary active"
                        aria-current="true"
                    {
                        (label)
                    }
                } @else {
                    a
                        href=(dashboard_url(filter, creating, editing))
                        class="btn btn-outline-primary"
                    {
                        (label)
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction, filter: TransactionFilter, creating: bool) -> Markup {
    let (sign, amount_class, badge_class) = match transaction.transaction_type {
        TransactionType::Income => ("+", "text-success", "bg-success"),
        TransactionType::Expense => ("-", "text-danger", "bg-danger"),
    };
    let view_url = endpoints::format_endpoint(endpoints::TRANSACTION_VIEW, transaction.id);
    let delete_url = with_filter(
        &endpoints::format_endpoint(endpoints::DASHBOARD_TRANSACTION, transaction.id),
        filter,
    );

    html! {
        li class="list-group-item d-flex justify-content-between align-items-center py-3"
            data-transaction-id=(transaction.id.to_string())
        {
            div
            {
                h6 class="mb-1" { (transaction.description) }
                span class={ "badge me-1 " (badge_class) } { (transaction.transaction_type.as_str()) }
                span class="badge bg-info text-dark me-2" { (transaction.category) }
                small class="text-muted" { (format_short_date(transaction.date)) }
            }

            div class="text-end"
            {
                div class={ "fw-bold mb-2 " (amount_class) }
                {
                    (sign) (format_currency(transaction.amount.as_decimal()))
                }

                div class="btn-group btn-group-sm"
                {
                    a href=(view_url) class="btn btn-outline-info" { "View" }
                    a
                        href=(dashboard_url(filter, creating, Some(transaction.id)))
                        class="btn btn-outline-warning"
                    {
                        "Edit"
                    }
                    button
                        type="button"
                        class="btn btn-outline-danger"
                        hx-delete=(delete_url)
                        hx-confirm=(DELETE_CONFIRMATION)
                        hx-swap="none"
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}

fn empty_state() -> Markup {
    html! {
        div id="empty-state" class="text-center text-muted py-5"
        {
            p class="display-6 mb-3" { "📊" }
            h5 { "No transactions yet" }
            p class="mb-0" { "Start by adding your first transaction!" }
        }
    }
}
