use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single validated cell from a tabularized document row.
///
/// Upstream decoders (CSV, spreadsheet, PDF-derived text) are free to hand
/// over whatever they recovered; the engine only distinguishes text, numbers
/// and calendar dates. Text cells are parsed leniently at classification
/// time, so a decoder that produces only `Text` cells still works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True for missing-in-practice cells: empty or whitespace-only text.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

/// One canonical row: field name to typed cell value.
pub type Row = BTreeMap<String, CellValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// The canonical transaction every heterogeneous column layout is
/// normalized into. Immutable once produced by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Magnitude only; the sign lives in `kind`.
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
}

/// A named monetary bucket within an aggregate (revenue stream or expense
/// category). Names are unique within one aggregate's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAmount {
    pub name: String,
    pub amount: f64,
}

/// Revenue aggregate. Invariant: `total == sum(streams.amount)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RevenueData {
    pub total: f64,
    pub streams: Vec<NamedAmount>,
}

/// Expense aggregate. Invariant: `total == sum(categories.amount)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExpenseData {
    pub total: f64,
    pub categories: Vec<NamedAmount>,
}

/// Simplified cash-flow breakdown.
///
/// All activity is folded into `operating`; `investing` and `financing` are
/// pinned to zero because the canonical transaction schema carries no
/// activity classification. This is a documented limitation of the model,
/// not something callers should correct for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CashFlowData {
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
    /// Invariant: `net == operating + investing + financing`.
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanData {
    #[serde(rename = "type")]
    pub loan_type: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub emi: f64,
}

/// The normalized financial profile of one document set: the classified
/// transactions, their aggregates, and optional balance-sheet enrichments
/// supplied alongside the row set (the engine never fetches these itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExtractedData {
    pub transactions: Vec<Transaction>,
    pub revenue: RevenueData,
    pub expenses: ExpenseData,
    pub cash_flow: CashFlowData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loans: Option<Vec<LoanData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts_receivable: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounts_payable: Option<f64>,
}
