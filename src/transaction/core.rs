//! Defines the core data models and database queries for transactions.

use std::{
    fmt::Display,
    str::FromStr,
    sync::{Arc, Mutex, MutexGuard},
};

use axum::extract::FromRef;
use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use time::{Date, Duration, OffsetDateTime};

use crate::{AppState, Error, database_id::TransactionId, transaction::form::AmountInput};

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// ============================================================================
// MODELS
// ============================================================================

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned, e.g. a salary payment.
    Income,
    /// Money that was spent, e.g. lunch.
    Expense,
}

impl TransactionType {
    /// The lowercase name used in JSON, HTML forms and the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(Error::InvalidPayload(format!(
                "unknown transaction type \"{other}\", expected \"income\" or \"expense\""
            ))),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}

/// An amount of money that is always greater than zero.
///
/// Whether the money was earned or spent is recorded by [TransactionType],
/// not by the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount from `value`.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `value` is zero or negative.
    pub fn new(value: Decimal) -> Result<Self, Error> {
        if value > Decimal::ZERO {
            Ok(Self(value.normalize()))
        } else {
            Err(Error::InvalidAmount(value.to_string()))
        }
    }

    /// The amount as a decimal number.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    /// Parse an amount from text such as "50000", "12.5" or "1e3".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| Error::InvalidAmount(s.to_owned()))
            .and_then(Amount::new)
            .map_err(|_| Error::InvalidAmount(s.to_owned()))
    }
}

impl TryFrom<f64> for Amount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Decimal::from_f64(value)
            .ok_or_else(|| Error::InvalidAmount(value.to_string()))
            .and_then(Amount::new)
    }
}

impl TryFrom<AmountInput> for Amount {
    type Error = Error;

    fn try_from(value: AmountInput) -> Result<Self, Self::Error> {
        match value {
            AmountInput::Number(number) => Amount::try_from(number),
            AmountInput::Text(text) => text.parse(),
        }
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        AmountInput::deserialize(deserializer)
            .and_then(|input| Amount::try_from(input).map_err(de::Error::custom))
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.to_string()))
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let decimal = match value {
            ValueRef::Text(_) => Decimal::from_str(value.as_str()?)
                .map_err(|error| FromSqlError::Other(Box::new(error)))?,
            ValueRef::Integer(integer) => Decimal::from(integer),
            ValueRef::Real(real) => Decimal::from_f64(real).ok_or(FromSqlError::InvalidType)?,
            _ => return Err(FromSqlError::InvalidType),
        };

        Ok(Self(decimal))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build] and [create_transaction].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The amount of money spent or earned in this transaction.
    pub amount: Amount,
    /// A short label such as "Food" or "Salary".
    pub category: String,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the transaction was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Transaction {
    /// Create the data for a new transaction with the category "Other".
    ///
    /// Shortcut for [TransactionData] for discoverability.
    pub fn build(
        transaction_type: TransactionType,
        amount: Amount,
        date: Date,
        description: &str,
    ) -> TransactionData {
        TransactionData {
            transaction_type,
            amount,
            category: "Other".to_owned(),
            description: description.to_owned(),
            date,
        }
    }
}

/// The user editable fields of a [Transaction].
///
/// Used both to create transactions and to replace the fields of an existing
/// transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionData {
    /// Whether the money was earned or spent.
    pub transaction_type: TransactionType,
    /// The amount of money, always positive.
    pub amount: Amount,
    /// A short label such as "Food" or "Salary".
    ///
    /// Any text is accepted, the suggested categories are only used by the
    /// forms.
    pub category: String,
    /// Text detailing the transaction. May be empty.
    pub description: String,
    /// When the transaction happened, as chosen by the user.
    pub date: Date,
}

impl TransactionData {
    /// Set the category for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }
}

/// The state needed to access the transaction store.
#[derive(Debug, Clone)]
pub struct TransactionStoreState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl TransactionStoreState {
    /// Acquire the database connection.
    ///
    /// # Errors
    /// Returns [Error::DatabaseLockError] if the lock is poisoned.
    pub fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.db_connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl FromRef<AppState> for TransactionStoreState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Parse the transaction ID from a request path segment.
///
/// # Errors
/// Returns [Error::MissingId] if `raw_id` is blank, or [Error::NotFound] if it
/// is not a well-formed ID, since no transaction can have such an ID.
pub fn parse_transaction_id(raw_id: &str) -> Result<TransactionId, Error> {
    if raw_id.trim().is_empty() {
        return Err(Error::MissingId);
    }

    raw_id.parse().map_err(|_| Error::NotFound)
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const SELECT_COLUMNS: &str =
    "id, type, amount, category, description, date, created_at, updated_at";

/// Create a new transaction in the database.
///
/// A fresh ID is generated and both timestamps are set to the current time.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(
    data: TransactionData,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let now = OffsetDateTime::now_utc();

    let transaction = connection
        .prepare(&format!(
            "INSERT INTO \"transaction\" \
                (id, type, amount, category, description, date, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7) \
             RETURNING {SELECT_COLUMNS}"
        ))?
        .query_row(
            (
                TransactionId::new(),
                data.transaction_type,
                data.amount,
                data.category,
                data.description,
                data.date,
                now,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM \"transaction\" WHERE id = :id"
        ))?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction, most recently created first.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM \"transaction\" ORDER BY created_at DESC, rowid DESC"
        ))?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Replace the user editable fields of the transaction `id` with `data`.
///
/// `created_at` is left untouched and `updated_at` is set to the current
/// time, or just after the previous `updated_at` if the clock has not moved
/// on since.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    data: TransactionData,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let existing = get_transaction(id, connection)?;

    let now = OffsetDateTime::now_utc();
    let updated_at = if now > existing.updated_at {
        now
    } else {
        existing.updated_at + Duration::nanoseconds(1)
    };

    let transaction = connection
        .prepare(&format!(
            "UPDATE \"transaction\" \
             SET type = ?1, amount = ?2, category = ?3, description = ?4, date = ?5, updated_at = ?6 \
             WHERE id = ?7 \
             RETURNING {SELECT_COLUMNS}"
        ))?
        .query_row(
            (
                data.transaction_type,
                data.amount,
                data.category,
                data.description,
                data.date,
                updated_at,
                id,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Delete the transaction `id` and return its ID.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<TransactionId, Error> {
    let rows_affected = connection.execute(
        "DELETE FROM \"transaction\" WHERE id = :id",
        &[(":id", &id)],
    )?;

    match rows_affected {
        0 => Err(Error::NotFound),
        _ => Ok(id),
    }
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id TEXT PRIMARY KEY NOT NULL,
                type TEXT NOT NULL CHECK (type IN ('income', 'expense')),
                amount TEXT NOT NULL,
                category TEXT NOT NULL,
                description TEXT NOT NULL,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
                )",
        (),
    )?;

    // Used by the dashboard, which lists the newest transactions first.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_created_at ON \"transaction\"(created_at);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let description = row.get(4)?;
    let date = row.get(5)?;
    let created_at = row.get(6)?;
    let updated_at = row.get(7)?;

    Ok(Transaction {
        id,
        transaction_type,
        amount,
        category,
        description,
        date,
        created_at,
        updated_at,
    })
}

// ============================================================================
// TESTS
// ============================================================================
