//! The request payload for creating and editing transactions and the
//! parsing that turns it into [TransactionData].

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem,
    format_description::well_known::Rfc3339, macros::format_description,
};

use crate::{
    Error,
    transaction::{Amount, TransactionData, TransactionType},
};

/// The format used for transaction dates in JSON and HTML forms.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The categories suggested in the forms for expenses.
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Bills",
    "Healthcare",
    "Education",
    "Other",
];

/// The categories suggested in the forms for income.
pub const INCOME_CATEGORIES: [&str; 6] =
    ["Salary", "Freelance", "Investment", "Gift", "Bonus", "Other"];

/// Get the categories suggested for `transaction_type`.
pub fn suggested_categories(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

/// An amount as sent by a client, either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number, e.g. `50000`.
    Number(f64),
    /// Text containing a number, e.g. `"50000"`.
    Text(String),
}

/// The data sent by clients to create or update a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionFormData {
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The amount of money, must be greater than zero.
    pub amount: AmountInput,
    /// A short label such as "Food".
    pub category: String,
    /// Text detailing the transaction.
    pub description: String,
    /// The transaction date, e.g. "2024-01-10".
    pub date: String,
}

impl TransactionFormData {
    /// Check the amount and date and convert the form into [TransactionData].
    ///
    /// The description and category are accepted as is, even when empty.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::InvalidAmount] if the amount is not a number greater than zero,
    /// - or [Error::InvalidDate] if the date cannot be parsed.
    pub fn validate(self) -> Result<TransactionData, Error> {
        let amount = Amount::try_from(self.amount)?;
        let date = parse_date(&self.date)?;

        Ok(TransactionData {
            transaction_type: self.transaction_type,
            amount,
            category: self.category,
            description: self.description,
            date,
        })
    }
}

/// Parse a transaction date.
///
/// Accepts a calendar date such as "2024-01-10", or an RFC 3339 date-time such
/// as "2024-01-10T00:00:00.000Z" in which case the date as written is used.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is neither.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let trimmed = text.trim();

    Date::parse(trimmed, DATE_FORMAT)
        .or_else(|_| OffsetDateTime::parse(trimmed, &Rfc3339).map(|date_time| date_time.date()))
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::{
            Amount, TransactionType,
            form::{AmountInput, TransactionFormData, parse_date, suggested_categories},
        },
    };

    fn form(amount: AmountInput, date: &str) -> TransactionFormData {
        TransactionFormData {
            transaction_type: TransactionType::Expense,
            amount,
            category: "Food".to_owned(),
            description: "Lunch".to_owned(),
            date: date.to_owned(),
        }
    }

    #[test]
    fn parses_json_payload_with_numeric_amount() {
        let payload = r#"{"type": "expense", "amount": 50000, "category": "Food", "description": "Lunch", "date": "2024-01-10"}"#;

        let form: TransactionFormData = serde_json::from_str(payload).unwrap();
        let data = form.validate().unwrap();

        assert_eq!(data.transaction_type, TransactionType::Expense);
        assert_eq!(data.amount, Amount::try_from(50000.0).unwrap());
        assert_eq!(data.category, "Food");
        assert_eq!(data.description, "Lunch");
        assert_eq!(data.date, date!(2024 - 01 - 10));
    }

    #[test]
    fn parses_json_payload_with_string_amount() {
        let payload = r#"{"type": "income", "amount": "1500000.50", "category": "Salary", "description": "Pay", "date": "2024-02-01"}"#;

        let form: TransactionFormData = serde_json::from_str(payload).unwrap();
        let data = form.validate().unwrap();

        assert_eq!(data.transaction_type, TransactionType::Income);
        assert_eq!(data.amount.to_string(), "1500000.5");
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let payload = r#"{"type": "transfer", "amount": 1, "category": "", "description": "", "date": "2024-02-01"}"#;

        let result = serde_json::from_str::<TransactionFormData>(payload);

        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_positive_amount() {
        let result = form(AmountInput::Number(0.0), "2024-01-10").validate();

        assert!(
            matches!(result, Err(Error::InvalidAmount(_))),
            "want InvalidAmount, got {result:?}"
        );
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let result = form(AmountInput::Text("fifty".to_owned()), "2024-01-10").validate();

        assert_eq!(result, Err(Error::InvalidAmount("fifty".to_owned())));
    }

    #[test]
    fn rejects_invalid_date() {
        let result = form(AmountInput::Number(1.0), "10/01/2024").validate();

        assert_eq!(result, Err(Error::InvalidDate("10/01/2024".to_owned())));
    }

    #[test]
    fn accepts_empty_description() {
        let mut form = form(AmountInput::Number(1.0), "2024-01-10");
        form.description = String::new();

        assert!(form.validate().is_ok());
    }

    #[test]
    fn parses_date_time_as_date() {
        assert_eq!(
            parse_date("2024-01-10T00:00:00.000Z"),
            Ok(date!(2024 - 01 - 10))
        );
    }

    #[test]
    fn suggests_categories_per_type() {
        assert!(suggested_categories(TransactionType::Expense).contains(&"Food"));
        assert!(suggested_categories(TransactionType::Income).contains(&"Salary"));
        assert!(!suggested_categories(TransactionType::Income).contains(&"Food"));
    }
}
