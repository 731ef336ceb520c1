//! Transaction management for the finance tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the validated `Amount` and `TransactionType` types
//! - Database functions for storing, querying, and managing transactions
//! - The JSON API handlers and the transaction detail page

mod core;
mod create_endpoint;
mod delete_endpoint;
mod detail_page;
mod edit_endpoint;
mod form;
mod get_endpoint;
mod list_endpoint;

#[cfg(test)]
pub(crate) mod test_utils;

pub use self::core::{
    Amount, Transaction, TransactionData, TransactionStoreState, TransactionType,
    create_transaction, create_transaction_table, delete_transaction, list_transactions,
    parse_transaction_id, update_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use detail_page::get_transaction_page;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::{AmountInput, DATE_FORMAT, TransactionFormData, suggested_categories};
pub use get_endpoint::{get_transaction_endpoint, missing_transaction_id_endpoint};
pub use list_endpoint::list_transactions_endpoint;

#[cfg(test)]
pub(crate) use self::core::get_transaction;
#[cfg(test)]
pub(crate) use delete_endpoint::DeleteTransactionResponse;
