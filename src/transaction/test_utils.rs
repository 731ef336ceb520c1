use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use time::macros::date;

use crate::{
    db::initialize,
    transaction::{
        Amount, Transaction, TransactionType,
        core::{TransactionStoreState, create_transaction},
    },
};

#[track_caller]
pub fn must_create_test_connection() -> Connection {
    let connection = Connection::open_in_memory().expect("could not open in-memory database");
    initialize(&connection).expect("could not initialize database");
    connection
}

#[track_caller]
pub fn must_create_test_state() -> TransactionStoreState {
    TransactionStoreState {
        db_connection: Arc::new(Mutex::new(must_create_test_connection())),
    }
}

/// Create a transaction dated 2024-01-10 with a category suggested for its type.
#[track_caller]
pub fn must_create_transaction(
    state: &TransactionStoreState,
    transaction_type: TransactionType,
    amount: f64,
    description: &str,
) -> Transaction {
    let category = match transaction_type {
        TransactionType::Income => "Salary",
        TransactionType::Expense => "Food",
    };
    let data = Transaction::build(
        transaction_type,
        Amount::try_from(amount).expect("invalid test amount"),
        date!(2024 - 01 - 10),
        description,
    )
    .category(category);

    let connection = state.db_connection.lock().expect("could not lock database");
    create_transaction(data, &connection).expect("could not create test transaction")
}
