//! Prompt templates for the analysis tasks. Pure text rendering: currency
//! values use the fixed en-IN grouping, ratios and scores are embedded as
//! plain numbers, and nothing here performs I/O.

use crate::features::FinancialFeatures;
use crate::schema::{ExpenseData, ExtractedData};
use crate::utils::format_inr;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One prior period's totals, used by the forecast prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period: String,
    pub revenue: f64,
    pub expenses: f64,
}

/// General SWOT-style analysis request over the scored profile.
pub fn analysis_prompt(data: &ExtractedData, features: &FinancialFeatures) -> String {
    let net_profit = data.revenue.total - data.expenses.total;

    format!(
        "You are a financial analyst. Analyze the following business financial data and provide insights:\n\
         \n\
         Revenue: {}\n\
         Expenses: {}\n\
         Net Profit: {}\n\
         Profit Margin: {:.2}%\n\
         Cash Flow: {}\n\
         Health Score: {}/100\n\
         Risk Score: {}/100\n\
         \n\
         Provide a comprehensive analysis including:\n\
         1. Summary (2-3 sentences)\n\
         2. Key Strengths (3-4 points)\n\
         3. Key Weaknesses (3-4 points)\n\
         4. Opportunities for improvement (3-4 points)\n\
         5. Potential threats or risks (3-4 points)\n\
         6. Top 5 actionable recommendations with expected impact\n\
         \n\
         Format your response clearly with these sections.",
        format_inr(data.revenue.total),
        format_inr(data.expenses.total),
        format_inr(net_profit),
        features.ratios.profit_margin * 100.0,
        format_inr(data.cash_flow.net),
        features.health_score,
        features.risk_score,
    )
}

/// 6-month forecast request from historical period totals.
pub fn forecast_prompt(history: &[PeriodSummary]) -> String {
    let mut prompt = String::from(
        "Based on the following historical financial data, provide a 6-month forecast:\n\n",
    );
    for (i, period) in history.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "Month {}: Revenue {}, Expenses {}",
            i + 1,
            format_inr(period.revenue),
            format_inr(period.expenses)
        );
    }
    prompt.push_str(
        "\nProvide forecasted values for the next 6 months in this format:\n\
         Month 1: Revenue X, Expenses Y\n\
         Month 2: Revenue X, Expenses Y\n\
         ...and so on.\n\
         \n\
         Also explain the key trends and assumptions used for the forecast.",
    );
    prompt
}

/// Cost-optimization request ranking the top 5 expense categories by amount
/// descending.
pub fn cost_optimization_prompt(expenses: &ExpenseData) -> String {
    let mut categories = expenses.categories.clone();
    categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    categories.truncate(5);

    let mut prompt = String::from(
        "Analyze these top expense categories and suggest cost optimization strategies:\n\n",
    );
    for (i, category) in categories.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "{}. {}: {}",
            i + 1,
            category.name,
            format_inr(category.amount)
        );
    }
    let _ = write!(
        prompt,
        "\nTotal Expenses: {}\n\
         \n\
         Provide 5 specific, actionable cost optimization recommendations with:\n\
         - Category to optimize\n\
         - Specific action to take\n\
         - Expected savings (percentage or amount)\n\
         - Implementation difficulty (Easy/Medium/Hard)",
        format_inr(expenses.total)
    );
    prompt
}

/// Working-capital advice request from receivables/payables and liquidity.
pub fn working_capital_prompt(data: &ExtractedData, features: &FinancialFeatures) -> String {
    format!(
        "Analyze the working capital situation:\n\
         \n\
         Accounts Receivable: {}\n\
         Accounts Payable: {}\n\
         Cash Flow (Net): {}\n\
         Current Ratio: {}\n\
         \n\
         Provide recommendations to optimize working capital including:\n\
         1. Strategies to improve cash conversion cycle\n\
         2. Receivables management tips\n\
         3. Payables optimization strategies\n\
         4. Inventory management suggestions (if applicable)\n\
         5. Short-term financing options if needed",
        format_inr(data.accounts_receivable.unwrap_or(0.0)),
        format_inr(data.accounts_payable.unwrap_or(0.0)),
        format_inr(data.cash_flow.net),
        ratio_or_na(features.ratios.current_ratio),
    )
}

/// Benchmark comparison request for a named industry sector.
pub fn industry_benchmark_prompt(
    data: &ExtractedData,
    features: &FinancialFeatures,
    industry: &str,
) -> String {
    format!(
        "Compare this {industry} business against industry benchmarks:\n\
         \n\
         Business Metrics:\n\
         - Revenue: {}\n\
         - Profit Margin: {:.2}%\n\
         - Expense Ratio: {:.2}%\n\
         - Current Ratio: {}\n\
         \n\
         Provide:\n\
         1. Typical industry benchmarks for the {industry} sector\n\
         2. How this business compares (above/below average)\n\
         3. Key areas where the business excels\n\
         4. Key areas needing improvement\n\
         5. Industry-specific recommendations",
        format_inr(data.revenue.total),
        features.ratios.profit_margin * 100.0,
        features.ratios.expense_ratio * 100.0,
        ratio_or_na(features.ratios.current_ratio),
    )
}

fn ratio_or_na(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) => format!("{:.2}", value),
        None => "N/A".to_string(),
    }
}
