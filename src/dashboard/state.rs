//! The dashboard's view state: the fetched transactions, the open forms and
//! the display filter.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    TransactionId,
    transaction::{Transaction, TransactionType},
};

/// Which transactions the dashboard list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionFilter {
    /// Show every transaction.
    #[default]
    All,
    /// Only show income.
    Income,
    /// Only show expenses.
    Expense,
}

impl TransactionFilter {
    /// The value used in the dashboard query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionFilter::All => "all",
            TransactionFilter::Income => "income",
            TransactionFilter::Expense => "expense",
        }
    }

    /// Read a filter from the dashboard query string.
    ///
    /// Unknown values fall back to [TransactionFilter::All] with a warning.
    pub fn from_query(value: &str) -> Self {
        match value {
            "all" => TransactionFilter::All,
            "income" => TransactionFilter::Income,
            "expense" => TransactionFilter::Expense,
            other => {
                tracing::warn!("Unknown transaction filter \"{other}\", showing all transactions");
                TransactionFilter::All
            }
        }
    }

    /// Whether `transaction` passes the filter.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Income => transaction.transaction_type == TransactionType::Income,
            TransactionFilter::Expense => transaction.transaction_type == TransactionType::Expense,
        }
    }
}

/// Totals over the whole transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialSummary {
    /// The sum of all income.
    pub total_income: Decimal,
    /// The sum of all expenses.
    pub total_expenses: Decimal,
    /// Income minus expenses, negative when more was spent than earned.
    pub balance: Decimal,
}

impl FinancialSummary {
    /// Sum up `transactions`.
    ///
    /// Totals that do not fit in a [Decimal] are clamped to [Decimal::MAX]
    /// and a warning is logged.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let (total_income, total_expenses) = transactions.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(income, expenses), transaction| {
                let amount = transaction.amount.as_decimal();

                match transaction.transaction_type {
                    TransactionType::Income => (saturating_total(income, amount), expenses),
                    TransactionType::Expense => (income, saturating_total(expenses, amount)),
                }
            },
        );

        // Both totals are non-negative, so the difference always fits.
        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        }
    }
}

fn saturating_total(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or_else(|| {
        tracing::warn!("Transaction total exceeds {}, showing the maximum instead", Decimal::MAX);
        Decimal::MAX
    })
}

/// Holds the fetched transaction list and the UI mode of the dashboard.
///
/// The create and edit forms open independently of each other. The state is
/// rebuilt from the query string on every request, so a form is closed by
/// linking to a dashboard URL without it.
/// The filter only affects which transactions [DashboardState::filtered]
/// returns, the list itself is never refetched or reordered here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    transactions: Vec<Transaction>,
    filter: TransactionFilter,
    creating: bool,
    editing: Option<Transaction>,
}

impl DashboardState {
    /// Create an idle dashboard showing all of `transactions`.
    ///
    /// `transactions` should already be ordered newest first.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            ..Default::default()
        }
    }

    /// Open the create form.
    pub fn open_create(&mut self) {
        self.creating = true;
    }

    /// Open the edit form for the transaction with `id`.
    ///
    /// Returns `false` and leaves the state unchanged if `id` is not in the
    /// fetched list.
    pub fn open_edit(&mut self, id: TransactionId) -> bool {
        match self
            .transactions
            .iter()
            .find(|transaction| transaction.id == id)
        {
            Some(transaction) => {
                self.editing = Some(transaction.clone());
                true
            }
            None => false,
        }
    }

    /// Change which transactions are shown.
    pub fn set_filter(&mut self, filter: TransactionFilter) {
        self.filter = filter;
    }

    /// The current filter.
    pub fn filter(&self) -> TransactionFilter {
        self.filter
    }

    /// Whether the create form is open.
    pub fn is_creating(&self) -> bool {
        self.creating
    }

    /// The transaction being edited, if the edit form is open.
    pub fn editing(&self) -> Option<&Transaction> {
        self.editing.as_ref()
    }

    /// The transactions that pass the current filter, in their fetched order.
    pub fn filtered(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| self.filter.matches(transaction))
            .collect()
    }

    /// Totals over every fetched transaction, ignoring the filter.
    pub fn summary(&self) -> FinancialSummary {
        FinancialSummary::from_transactions(&self.transactions)
    }
}
