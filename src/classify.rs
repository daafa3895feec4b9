use crate::columns::ResolvedColumns;
use crate::schema::{CellValue, Row, Transaction, TransactionKind};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

/// One keyword rule: the first rule whose keyword occurs (case-insensitive)
/// in a transaction description assigns its category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: String,
    pub keywords: Vec<String>,
}

/// Ordered keyword-to-category rules plus the fallback category.
///
/// Rule order is the priority order; no description matches more than one
/// rule. Immutable after construction — supply a custom table or take the
/// defaults covering common small-business bank narrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
    fallback: String,
}

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// Classifies a description by first-match against the rule table.
    pub fn categorize(&self, description: &str) -> String {
        let desc = description.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|k| desc.contains(k.as_str())) {
                return rule.category.clone();
            }
        }
        self.fallback.clone()
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        fn rule(category: &str, keywords: &[&str]) -> CategoryRule {
            CategoryRule {
                category: category.to_string(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            }
        }

        Self::new(
            vec![
                rule("Sales Revenue", &["sale", "revenue", "invoice"]),
                rule("Service Revenue", &["service", "consulting"]),
                rule("Salaries & Wages", &["salary", "wage", "payroll"]),
                rule("Rent", &["rent", "lease"]),
                rule("Utilities", &["utility", "electricity", "water"]),
                rule("Marketing", &["marketing", "advertising"]),
                rule("Inventory Purchase", &["inventory", "stock", "purchase"]),
                rule("Loan Payment", &["loan", "emi", "interest"]),
                rule("Taxes", &["tax", "gst"]),
            ],
            "Other",
        )
    }
}

/// Converts raw rows into canonical transactions using a resolved column map
/// and an injected category rule table.
#[derive(Debug, Clone)]
pub struct TransactionClassifier {
    columns: ResolvedColumns,
    rules: CategoryRules,
}

/// Classified transactions plus a count of rows that could not be
/// classified (missing date, unresolvable amount). Skipping is silent per
/// row; the count is the only data-quality signal.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedRows {
    pub transactions: Vec<Transaction>,
    pub skipped_rows: usize,
}

impl TransactionClassifier {
    pub fn new(columns: ResolvedColumns, rules: CategoryRules) -> Self {
        Self { columns, rules }
    }

    /// Classifies every row, dropping the unparseable ones.
    pub fn classify_all(&self, rows: &[Row]) -> ClassifiedRows {
        let mut out = ClassifiedRows::default();
        for row in rows {
            match self.classify(row) {
                Some(txn) => out.transactions.push(txn),
                None => out.skipped_rows += 1,
            }
        }
        if out.skipped_rows > 0 {
            debug!(
                "Classified {} rows, skipped {} unparseable",
                out.transactions.len(),
                out.skipped_rows
            );
        }
        out
    }

    /// Produces zero or one transaction from a raw row.
    ///
    /// Amount/kind policy, checked in order:
    /// 1. resolved `amount` column with a non-empty value — income when
    ///    strictly positive, expense otherwise; magnitude is the absolute
    ///    value;
    /// 2. both `debit` and `credit` resolved — a non-empty debit is an
    ///    expense, else a non-empty credit is income;
    /// 3. otherwise no transaction.
    ///
    /// The row additionally needs a parseable date; rows with a resolvable
    /// magnitude of zero are dropped with the rest.
    pub fn classify(&self, row: &Row) -> Option<Transaction> {
        let (amount, kind) = self.resolve_amount(row)?;
        if amount <= 0.0 {
            return None;
        }

        let date = self
            .columns
            .date
            .as_deref()
            .and_then(|col| row.get(col))
            .and_then(parse_date)?;

        let description = self
            .columns
            .description
            .as_deref()
            .and_then(|col| row.get(col))
            .and_then(cell_text)
            .unwrap_or_else(|| "Unknown".to_string());

        let category = self
            .columns
            .category
            .as_deref()
            .and_then(|col| row.get(col))
            .and_then(cell_text)
            .unwrap_or_else(|| self.rules.categorize(&description));

        Some(Transaction {
            date,
            description,
            amount,
            kind,
            category,
        })
    }

    fn resolve_amount(&self, row: &Row) -> Option<(f64, TransactionKind)> {
        // An empty amount cell falls through to the debit/credit pair; an
        // unparseable one drops the row.
        if let Some(cell) = self
            .columns
            .amount
            .as_deref()
            .and_then(|col| row.get(col))
            .filter(|c| !c.is_empty())
        {
            let signed = parse_number(cell)?;
            let kind = if signed > 0.0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            return Some((signed.abs(), kind));
        }

        if let (Some(debit_col), Some(credit_col)) =
            (self.columns.debit.as_deref(), self.columns.credit.as_deref())
        {
            let debit = row.get(debit_col).filter(|c| !c.is_empty());
            let credit = row.get(credit_col).filter(|c| !c.is_empty());
            if let Some(cell) = debit {
                return Some((parse_number(cell)?.abs(), TransactionKind::Expense));
            }
            if let Some(cell) = credit {
                return Some((parse_number(cell)?.abs(), TransactionKind::Income));
            }
        }

        None
    }
}

/// Non-empty trimmed text of a cell, numbers and dates rendered back to text.
fn cell_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        CellValue::Number(n) => Some(n.to_string()),
        CellValue::Date(d) => Some(d.to_string()),
    }
}

/// Lenient numeric parsing: numbers pass through, text cells are stripped of
/// grouping commas, currency markers and whitespace first.
pub(crate) fn parse_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(n) => Some(*n),
        CellValue::Text(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| !matches!(c, ',' | '₹' | '$' | ' '))
                .collect();
            cleaned.parse::<f64>().ok()
        }
        CellValue::Date(_) => None,
    }
}

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d", "%d %b %Y",
];

/// Lenient date parsing over the formats commonly seen in exported
/// statements. Ambiguous day/month orderings resolve to the first matching
/// format in the list.
pub(crate) fn parse_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => {
            let trimmed = s.trim();
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        }
        CellValue::Number(_) => None,
    }
}
