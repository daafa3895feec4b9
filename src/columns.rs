use serde::{Deserialize, Serialize};

/// The canonical fields a tabular layout can be resolved onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalField {
    Date,
    Description,
    Amount,
    Debit,
    Credit,
    Balance,
    Category,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 7] = [
        CanonicalField::Date,
        CanonicalField::Description,
        CanonicalField::Amount,
        CanonicalField::Debit,
        CanonicalField::Credit,
        CanonicalField::Balance,
        CanonicalField::Category,
    ];
}

/// Ordered alias tables mapping header spellings onto canonical fields.
///
/// Alias order is the tie-break priority: the first alias that matches any
/// supplied header wins, regardless of header order. Immutable after
/// construction; build a custom table with [`ColumnAliases::new`] or take
/// the bank-statement defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnAliases {
    entries: Vec<(CanonicalField, Vec<String>)>,
}

impl ColumnAliases {
    pub fn new(entries: Vec<(CanonicalField, Vec<String>)>) -> Self {
        Self { entries }
    }

    pub fn aliases_for(&self, field: CanonicalField) -> &[String] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, aliases)| aliases.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for ColumnAliases {
    fn default() -> Self {
        fn owned(aliases: &[&str]) -> Vec<String> {
            aliases.iter().map(|a| (*a).to_string()).collect()
        }

        Self::new(vec![
            (
                CanonicalField::Date,
                owned(&["date", "transaction date", "txn date", "posting date", "value date"]),
            ),
            (
                CanonicalField::Description,
                owned(&["description", "narration", "particulars", "details", "transaction details"]),
            ),
            (
                CanonicalField::Amount,
                owned(&["amount", "value", "transaction amount", "txn amount"]),
            ),
            (
                CanonicalField::Debit,
                owned(&["debit", "withdrawal", "dr", "paid out"]),
            ),
            (
                CanonicalField::Credit,
                owned(&["credit", "deposit", "cr", "received"]),
            ),
            (
                CanonicalField::Balance,
                owned(&["balance", "closing balance", "available balance"]),
            ),
            (
                CanonicalField::Category,
                owned(&["category", "type", "expense type", "income type"]),
            ),
        ])
    }
}

/// The outcome of header resolution: for each canonical field, the original
/// header spelling that supplies it, or absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub debit: Option<String>,
    pub credit: Option<String>,
    pub balance: Option<String>,
    pub category: Option<String>,
}

/// Maps ragged header spellings onto the canonical schema.
#[derive(Debug, Clone, Default)]
pub struct ColumnResolver {
    aliases: ColumnAliases,
}

impl ColumnResolver {
    pub fn new(aliases: ColumnAliases) -> Self {
        Self { aliases }
    }

    /// Resolves each canonical field against the supplied headers.
    ///
    /// Comparison is case-insensitive and whitespace-trimmed. The result is
    /// independent of header ordering: for each field the first alias in the
    /// table that occurs anywhere in the header set decides.
    pub fn resolve(&self, headers: &[String]) -> ResolvedColumns {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let find = |field: CanonicalField| -> Option<String> {
            for alias in self.aliases.aliases_for(field) {
                let alias = alias.trim().to_lowercase();
                if let Some(idx) = normalized.iter().position(|h| *h == alias) {
                    return Some(headers[idx].clone());
                }
            }
            None
        };

        ResolvedColumns {
            date: find(CanonicalField::Date),
            description: find(CanonicalField::Description),
            amount: find(CanonicalField::Amount),
            debit: find(CanonicalField::Debit),
            credit: find(CanonicalField::Credit),
            balance: find(CanonicalField::Balance),
            category: find(CanonicalField::Category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_resolves_common_bank_layout() {
        let resolver = ColumnResolver::default();
        let resolved = resolver.resolve(&headers(&[
            "Txn Date",
            "Narration",
            "Debit",
            "Credit",
            "Closing Balance",
        ]));

        assert_eq!(resolved.date.as_deref(), Some("Txn Date"));
        assert_eq!(resolved.description.as_deref(), Some("Narration"));
        assert_eq!(resolved.amount, None);
        assert_eq!(resolved.debit.as_deref(), Some("Debit"));
        assert_eq!(resolved.credit.as_deref(), Some("Credit"));
        assert_eq!(resolved.balance.as_deref(), Some("Closing Balance"));
        assert_eq!(resolved.category, None);
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let resolver = ColumnResolver::default();
        let resolved = resolver.resolve(&headers(&["  DATE ", "AMOUNT", "Particulars"]));

        assert_eq!(resolved.date.as_deref(), Some("  DATE "));
        assert_eq!(resolved.amount.as_deref(), Some("AMOUNT"));
        assert_eq!(resolved.description.as_deref(), Some("Particulars"));
    }

    #[test]
    fn test_alias_order_wins_over_header_order() {
        // "date" outranks "posting date" in the alias table even when the
        // headers list "Posting Date" first.
        let resolver = ColumnResolver::default();
        let resolved = resolver.resolve(&headers(&["Posting Date", "Date"]));
        assert_eq!(resolved.date.as_deref(), Some("Date"));
    }

    #[test]
    fn test_header_order_independence() {
        let resolver = ColumnResolver::default();
        let a = resolver.resolve(&headers(&["Date", "Particulars", "Debit", "Credit"]));
        let b = resolver.resolve(&headers(&["Credit", "Debit", "Particulars", "Date"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unmatched_fields_are_absent() {
        let resolver = ColumnResolver::default();
        let resolved = resolver.resolve(&headers(&["Foo", "Bar"]));
        assert_eq!(resolved, ResolvedColumns::default());
    }

    #[test]
    fn test_custom_alias_table() {
        let aliases = ColumnAliases::new(vec![(
            CanonicalField::Date,
            vec!["booking day".to_string()],
        )]);
        let resolver = ColumnResolver::new(aliases);
        let resolved = resolver.resolve(&headers(&["Booking Day", "Date"]));
        // Only the injected alias counts.
        assert_eq!(resolved.date.as_deref(), Some("Booking Day"));
        assert_eq!(resolved.amount, None);
    }
}
