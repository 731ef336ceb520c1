//! Dashboard module
//!
//! Provides the main page: a financial summary, the transaction list with a
//! type filter, and the forms for adding and editing transactions.

mod handlers;
mod state;
mod view;

pub use handlers::{
    create_dashboard_transaction, delete_dashboard_transaction, edit_dashboard_transaction,
    get_category_select, get_dashboard_page,
};
