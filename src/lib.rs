//! # Financial Insight Engine
//!
//! A library for turning tabularized business documents (bank statements,
//! ledgers, exported spreadsheets) into a normalized financial profile:
//! categorized transactions, revenue/expense/cash-flow aggregates, solvency
//! and profitability ratios, and composite health/risk scores. A prompt and
//! parsing layer then turns that profile into structured insights by way of
//! any free-text generation backend.
//!
//! ## Core Concepts
//!
//! - **Column resolution**: ragged header spellings are mapped onto a fixed
//!   canonical schema (date, description, amount, debit, credit, balance,
//!   category) via ordered alias tables.
//! - **Classification**: each row becomes at most one typed transaction;
//!   keyword rules assign a category when none is supplied.
//! - **Scoring**: pure, deterministic additive heuristics produce a 0-100
//!   health score and a 0-100 risk score from the aggregates.
//! - **Analysis**: prompt templates render the profile for a text model and
//!   a best-effort parser segments the free-form reply back into summary,
//!   SWOT lists, recommendations and a creditworthiness block.
//!
//! ## Example
//!
//! ```rust,ignore
//! use financial_insight_engine::*;
//!
//! let rows: Vec<Row> = decode_rows_somehow();
//! let profile = extract_profile(&rows);
//! let features = calculate_financial_features(&profile.data, None);
//!
//! // With the `huggingface` feature enabled:
//! let client = HuggingFaceClient::from_env()?;
//! let analyst = FinancialAnalyst::new(client);
//! let analysis = analyst.analyze(&profile.data, &features).await?;
//! ```

pub mod aggregate;
pub mod analysis;
pub mod classify;
pub mod columns;
pub mod error;
pub mod features;
pub mod llm;
pub mod schema;
pub mod utils;

pub use aggregate::{
    aggregate_expenses, aggregate_revenue, derive_cash_flow, extract_financial_data,
    ExtractionOutcome,
};
pub use analysis::*;
pub use classify::{CategoryRule, CategoryRules, ClassifiedRows, TransactionClassifier};
pub use columns::{CanonicalField, ColumnAliases, ColumnResolver, ResolvedColumns};
pub use error::{FinancialInsightError, Result};
pub use features::{
    calculate_financial_features, FinancialFeatures, FinancialRatios, GrowthTrends,
};
pub use llm::*;
pub use schema::*;
pub use utils::format_inr;

/// Runs the full extraction pipeline with the default alias and category
/// tables. Returns the normalized profile plus the skipped-row diagnostic.
pub fn extract_profile(rows: &[Row]) -> ExtractionOutcome {
    extract_financial_data(rows, &ColumnAliases::default(), &CategoryRules::default())
}
