use crate::schema::ExtractedData;
use serde::{Deserialize, Serialize};

/// Derived ratios. A ratio is `None` when its required inputs were not
/// supplied (receivables/payables/loans), never zero-as-missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FinancialRatios {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debt_to_equity: Option<f64>,
    pub profit_margin: f64,
    pub expense_ratio: f64,
    /// Never computed: the canonical schema carries no total-asset input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_on_assets: Option<f64>,
}

/// Period-over-period growth versus a prior period, present only when the
/// prior totals are non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GrowthTrends {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_growth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_growth: Option<f64>,
}

/// The scored financial profile. Derived fresh on every call, never mutated
/// in place; identical inputs always yield an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialFeatures {
    pub ratios: FinancialRatios,
    /// 0-100, higher is healthier.
    pub health_score: u8,
    /// 0-100, higher is riskier.
    pub risk_score: u8,
    pub trends: GrowthTrends,
}

/// Computes ratios, trends and both composite scores from one extraction
/// snapshot. Pure and deterministic: no randomness, no hidden state.
pub fn calculate_financial_features(
    data: &ExtractedData,
    historical: Option<&ExtractedData>,
) -> FinancialFeatures {
    let revenue = data.revenue.total;
    let expenses = data.expenses.total;

    // Division-by-zero fallbacks: a zero-revenue period has margin 0 and is
    // fully expense-saturated by convention.
    let profit_margin = if revenue > 0.0 {
        (revenue - expenses) / revenue
    } else {
        0.0
    };
    let expense_ratio = if revenue > 0.0 { expenses / revenue } else { 1.0 };

    let mut current_ratio = None;
    let mut quick_ratio = None;
    if let (Some(receivables), Some(payables)) =
        (data.accounts_receivable, data.accounts_payable)
    {
        if receivables > 0.0 && payables > 0.0 {
            let current_assets = receivables + data.cash_flow.net.max(0.0);
            current_ratio = Some(current_assets / payables);
            // Simplified quick ratio: no separate inventory/cash breakdown.
            quick_ratio = Some(receivables / payables);
        }
    }

    let mut debt_to_equity = None;
    if let Some(loans) = data.loans.as_deref() {
        if !loans.is_empty() {
            let total_debt: f64 = loans.iter().map(|l| l.amount).sum();
            // Equity simplified as net profit for the period.
            let equity = revenue - expenses;
            if equity > 0.0 {
                debt_to_equity = Some(total_debt / equity);
            }
        }
    }

    let trends = historical
        .map(|prior| growth_trends(data, prior))
        .unwrap_or_default();

    let health_score = health_score(
        profit_margin,
        current_ratio,
        data.cash_flow.net,
        revenue,
        expense_ratio,
    );
    let risk_score = risk_score(
        profit_margin,
        debt_to_equity,
        current_ratio,
        expense_ratio,
        data.cash_flow.net,
    );

    FinancialFeatures {
        ratios: FinancialRatios {
            current_ratio,
            quick_ratio,
            debt_to_equity,
            profit_margin,
            expense_ratio,
            return_on_assets: None,
        },
        health_score,
        risk_score,
        trends,
    }
}

fn growth_trends(current: &ExtractedData, prior: &ExtractedData) -> GrowthTrends {
    let mut trends = GrowthTrends::default();

    if prior.revenue.total > 0.0 {
        trends.revenue_growth =
            Some((current.revenue.total - prior.revenue.total) / prior.revenue.total);
    }
    if prior.expenses.total > 0.0 {
        trends.expense_growth =
            Some((current.expenses.total - prior.expenses.total) / prior.expenses.total);
    }

    let current_profit = current.revenue.total - current.expenses.total;
    let prior_profit = prior.revenue.total - prior.expenses.total;
    if prior_profit != 0.0 {
        // abs() denominator so growth out of a loss is measured against the
        // loss magnitude.
        trends.profit_growth = Some((current_profit - prior_profit) / prior_profit.abs());
    }

    trends
}

fn health_score(
    profit_margin: f64,
    current_ratio: Option<f64>,
    cash_flow_net: f64,
    revenue_total: f64,
    expense_ratio: f64,
) -> u8 {
    let mut score: i32 = 50;

    if profit_margin > 0.3 {
        score += 25;
    } else if profit_margin > 0.2 {
        score += 20;
    } else if profit_margin > 0.1 {
        score += 15;
    } else if profit_margin > 0.0 {
        score += 10;
    } else {
        score -= 20;
    }

    if let Some(ratio) = current_ratio {
        if ratio >= 2.0 {
            score += 15;
        } else if ratio >= 1.5 {
            score += 12;
        } else if ratio >= 1.0 {
            score += 8;
        } else {
            score -= 10;
        }
    }

    if cash_flow_net > 0.0 {
        let cash_flow_ratio = cash_flow_net / revenue_total;
        if cash_flow_ratio > 0.2 {
            score += 15;
        } else if cash_flow_ratio > 0.1 {
            score += 10;
        } else {
            score += 5;
        }
    } else {
        score -= 15;
    }

    if expense_ratio < 0.7 {
        score += 5;
    } else if expense_ratio > 0.9 {
        score -= 5;
    }

    score.clamp(0, 100) as u8
}

fn risk_score(
    profit_margin: f64,
    debt_to_equity: Option<f64>,
    current_ratio: Option<f64>,
    expense_ratio: f64,
    cash_flow_net: f64,
) -> u8 {
    let mut risk: i32 = 30;

    if profit_margin < 0.0 {
        risk += 25;
    } else if profit_margin < 0.05 {
        risk += 15;
    } else if profit_margin > 0.2 {
        risk -= 10;
    }

    if let Some(ratio) = debt_to_equity {
        if ratio > 2.0 {
            risk += 20;
        } else if ratio > 1.0 {
            risk += 10;
        } else if ratio < 0.5 {
            risk -= 5;
        }
    }

    if let Some(ratio) = current_ratio {
        if ratio < 1.0 {
            risk += 15;
        } else if ratio < 1.5 {
            risk += 8;
        } else if ratio > 2.0 {
            risk -= 5;
        }
    }

    if expense_ratio > 0.9 {
        risk += 15;
    } else if expense_ratio > 0.8 {
        risk += 8;
    }

    if cash_flow_net < 0.0 {
        risk += 20;
    }

    risk.clamp(0, 100) as u8
}
