use crate::classify::{CategoryRules, TransactionClassifier};
use crate::columns::{ColumnAliases, ColumnResolver};
use crate::schema::{
    CashFlowData, ExpenseData, ExtractedData, NamedAmount, RevenueData, Row, Transaction,
    TransactionKind,
};
use log::{debug, info, warn};

/// Sums income transactions into revenue streams grouped by category.
/// Stream order is insertion order of first occurrence, not sorted.
pub fn aggregate_revenue(transactions: &[Transaction]) -> RevenueData {
    let (total, streams) = group_by_category(transactions, TransactionKind::Income, "Other Revenue");
    RevenueData { total, streams }
}

/// Sums expense transactions into categories grouped the same way.
pub fn aggregate_expenses(transactions: &[Transaction]) -> ExpenseData {
    let (total, categories) =
        group_by_category(transactions, TransactionKind::Expense, "Other Expenses");
    ExpenseData {
        total,
        categories,
    }
}

fn group_by_category(
    transactions: &[Transaction],
    kind: TransactionKind,
    default_label: &str,
) -> (f64, Vec<NamedAmount>) {
    let mut total = 0.0;
    let mut groups: Vec<NamedAmount> = Vec::new();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        total += txn.amount;
        let name = if txn.category.is_empty() {
            default_label
        } else {
            txn.category.as_str()
        };
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.amount += txn.amount,
            None => groups.push(NamedAmount {
                name: name.to_string(),
                amount: txn.amount,
            }),
        }
    }

    (total, groups)
}

/// Derives the simplified cash-flow breakdown from the aggregates.
///
/// All activity is treated as operating; the schema carries nothing that
/// would let transactions be split into investing/financing activity, so
/// those stay at zero and `net == operating`.
pub fn derive_cash_flow(revenue: &RevenueData, expenses: &ExpenseData) -> CashFlowData {
    let operating = revenue.total - expenses.total;
    let investing = 0.0;
    let financing = 0.0;
    CashFlowData {
        operating,
        investing,
        financing,
        net: operating + investing + financing,
    }
}

/// The result of one extraction run: the normalized profile plus the count
/// of rows dropped during classification (non-fatal data-quality signal).
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub data: ExtractedData,
    pub skipped_rows: usize,
}

/// Runs the full tabular pipeline: resolve columns from the first row's
/// field names, classify every row, aggregate. Balance-sheet enrichments
/// (receivables, payables, loans) are not part of the row set; callers set
/// them on the returned [`ExtractedData`] when available.
pub fn extract_financial_data(
    rows: &[Row],
    aliases: &ColumnAliases,
    rules: &CategoryRules,
) -> ExtractionOutcome {
    let headers: Vec<String> = rows
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();

    let columns = ColumnResolver::new(aliases.clone()).resolve(&headers);
    debug!("Resolved columns from {} headers: {:?}", headers.len(), columns);

    let classified = TransactionClassifier::new(columns, rules.clone()).classify_all(rows);
    if classified.skipped_rows > 0 {
        warn!(
            "{} of {} rows could not be classified and were skipped",
            classified.skipped_rows,
            rows.len()
        );
    }

    let revenue = aggregate_revenue(&classified.transactions);
    let expenses = aggregate_expenses(&classified.transactions);
    let cash_flow = derive_cash_flow(&revenue, &expenses);

    info!(
        "Extracted {} transactions: revenue {:.2}, expenses {:.2}, net cash flow {:.2}",
        classified.transactions.len(),
        revenue.total,
        expenses.total,
        cash_flow.net
    );

    ExtractionOutcome {
        data: ExtractedData {
            transactions: classified.transactions,
            revenue,
            expenses,
            cash_flow,
            loans: None,
            accounts_receivable: None,
            accounts_payable: None,
        },
        skipped_rows: classified.skipped_rows,
    }
}
