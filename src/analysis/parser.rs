//! Best-effort parser turning a model's free-form reply into the structured
//! analysis record. It has no failure mode: a reply with no recognizable
//! section headers yields an empty result, never an error.

use crate::analysis::types::{
    AnalysisResult, CreditRating, Creditworthiness, Priority, Recommendation,
};
use crate::features::FinancialFeatures;
use crate::schema::CashFlowData;

const MAX_LIST_ITEMS: usize = 4;
const MAX_RECOMMENDATIONS: usize = 5;
const MAX_TITLE_CHARS: usize = 100;
const DEFAULT_IMPACT: &str = "Positive impact on financial health";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Summary,
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
    Recommendations,
}

/// A line containing a section keyword switches state; the header line
/// itself is never accumulated.
fn detect_section(line: &str) -> Option<Section> {
    let lower = line.to_lowercase();
    if lower.contains("summary") {
        Some(Section::Summary)
    } else if lower.contains("strength") {
        Some(Section::Strengths)
    } else if lower.contains("weakness") {
        Some(Section::Weaknesses)
    } else if lower.contains("opportunit") {
        Some(Section::Opportunities)
    } else if lower.contains("threat") || lower.contains("risk") {
        Some(Section::Threats)
    } else if lower.contains("recommendation") {
        Some(Section::Recommendations)
    } else {
        None
    }
}

/// Segments the reply into summary / SWOT lists / recommendations and
/// attaches the creditworthiness block computed from the aggregates.
pub fn parse_analysis_response(
    response: &str,
    features: &FinancialFeatures,
    cash_flow: &CashFlowData,
) -> AnalysisResult {
    let mut summary = String::new();
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut opportunities = Vec::new();
    let mut threats = Vec::new();
    let mut recommendations = Vec::new();

    let mut section = Section::None;

    for line in response.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(next) = detect_section(line) {
            section = next;
            continue;
        }

        match section {
            Section::None => {}
            Section::Summary => {
                summary.push_str(line);
                summary.push(' ');
            }
            Section::Strengths => strengths.push(strip_bullet(line)),
            Section::Weaknesses => weaknesses.push(strip_bullet(line)),
            Section::Opportunities => opportunities.push(strip_bullet(line)),
            Section::Threats => threats.push(strip_bullet(line)),
            Section::Recommendations => recommendations.push(Recommendation {
                category: "Financial Management".to_string(),
                priority: Priority::High,
                title: truncate_chars(strip_ordinal(line), MAX_TITLE_CHARS),
                description: line.to_string(),
                expected_impact: DEFAULT_IMPACT.to_string(),
            }),
        }
    }

    // Caps apply at final assembly only.
    strengths.truncate(MAX_LIST_ITEMS);
    weaknesses.truncate(MAX_LIST_ITEMS);
    opportunities.truncate(MAX_LIST_ITEMS);
    threats.truncate(MAX_LIST_ITEMS);
    recommendations.truncate(MAX_RECOMMENDATIONS);

    AnalysisResult {
        summary: summary.trim().to_string(),
        strengths,
        weaknesses,
        opportunities,
        threats,
        recommendations,
        creditworthiness: creditworthiness(features, cash_flow),
    }
}

/// Strips one leading bullet marker (`-`, `•`, `*`) and following space.
fn strip_bullet(line: &str) -> String {
    line.strip_prefix(['-', '•', '*'])
        .map(str::trim_start)
        .unwrap_or(line)
        .to_string()
}

/// Strips a leading "N. " ordinal, as in "3. Reduce overheads".
fn strip_ordinal(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < line.len() {
        if let Some(stripped) = rest.strip_prefix('.') {
            return stripped.trim_start();
        }
    }
    line
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Derives the 0-850 proxy credit score from the composite scores, with its
/// rating band and the independent contributing-factor tests.
pub fn creditworthiness(
    features: &FinancialFeatures,
    cash_flow: &CashFlowData,
) -> Creditworthiness {
    let raw = 300.0 + f64::from(features.health_score) * 5.5 - f64::from(features.risk_score) * 2.0;
    let score = raw.round().clamp(0.0, 850.0) as u32;

    let rating = if score >= 750 {
        CreditRating::Excellent
    } else if score >= 700 {
        CreditRating::Good
    } else if score >= 650 {
        CreditRating::Fair
    } else if score >= 600 {
        CreditRating::BelowAverage
    } else {
        CreditRating::Poor
    };

    let mut factors = Vec::new();
    if features.ratios.profit_margin > 0.15 {
        factors.push("Strong profit margins".to_string());
    }
    if features.ratios.current_ratio.is_some_and(|r| r >= 1.5) {
        factors.push("Good liquidity position".to_string());
    }
    if cash_flow.net > 0.0 {
        factors.push("Positive cash flow".to_string());
    }
    if features.ratios.profit_margin < 0.0 {
        factors.push("Negative profitability".to_string());
    }
    if features.risk_score > 60 {
        factors.push("High financial risk".to_string());
    }

    Creditworthiness {
        score,
        rating,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{FinancialFeatures, FinancialRatios, GrowthTrends};

    fn features(health: u8, risk: u8, margin: f64) -> FinancialFeatures {
        FinancialFeatures {
            ratios: FinancialRatios {
                profit_margin: margin,
                expense_ratio: 1.0 - margin,
                ..Default::default()
            },
            health_score: health,
            risk_score: risk,
            trends: GrowthTrends::default(),
        }
    }

    fn cash(net: f64) -> CashFlowData {
        CashFlowData {
            operating: net,
            investing: 0.0,
            financing: 0.0,
            net,
        }
    }

    const SAMPLE_REPLY: &str = "\
1. Summary
The business is profitable with healthy margins.
Cash generation is consistent across the period.

2. Key Strengths
- Strong recurring revenue
- Low fixed cost base
* Healthy cash conversion
- Diversified client mix
- Experienced management team

3. Key Weaknesses
- Heavy reliance on two customers

4. Opportunities
- Expand the service line

5. Threats
- Rising input costs

6. Recommendations
1. Negotiate longer payment terms with suppliers
2. Reduce marketing spend on low-return channels
";

    #[test]
    fn test_sections_are_segmented() {
        let result = parse_analysis_response(SAMPLE_REPLY, &features(85, 20, 0.3), &cash(300.0));

        assert_eq!(
            result.summary,
            "The business is profitable with healthy margins. Cash generation is consistent across the period."
        );
        // Five strengths accumulated, capped to four at assembly.
        assert_eq!(
            result.strengths,
            vec![
                "Strong recurring revenue",
                "Low fixed cost base",
                "Healthy cash conversion",
                "Diversified client mix",
            ]
        );
        assert_eq!(result.weaknesses, vec!["Heavy reliance on two customers"]);
        assert_eq!(result.opportunities, vec!["Expand the service line"]);
        assert_eq!(result.threats, vec!["Rising input costs"]);

        assert_eq!(result.recommendations.len(), 2);
        let first = &result.recommendations[0];
        assert_eq!(first.title, "Negotiate longer payment terms with suppliers");
        assert_eq!(first.description, "1. Negotiate longer payment terms with suppliers");
        assert_eq!(first.category, "Financial Management");
        assert_eq!(first.priority, Priority::High);
    }

    #[test]
    fn test_keyword_free_reply_yields_empty_result() {
        let result = parse_analysis_response(
            "The model rambled about nothing in particular.\nNo headers here.",
            &features(85, 20, 0.3),
            &cash(300.0),
        );

        assert_eq!(result.summary, "");
        assert!(result.strengths.is_empty());
        assert!(result.weaknesses.is_empty());
        assert!(result.opportunities.is_empty());
        assert!(result.threats.is_empty());
        assert!(result.recommendations.is_empty());
        // Creditworthiness is still computed from the aggregates.
        assert!(result.creditworthiness.score > 0);
    }

    #[test]
    fn test_risk_keyword_switches_to_threats() {
        let reply = "Potential Risks\n- Currency exposure\n";
        let result = parse_analysis_response(reply, &features(50, 50, 0.1), &cash(0.0));
        assert_eq!(result.threats, vec!["Currency exposure"]);
    }

    #[test]
    fn test_long_recommendation_title_truncated() {
        let long_line = format!("1. {}", "x".repeat(150));
        let reply = format!("Recommendations\n{}\n", long_line);
        let result = parse_analysis_response(&reply, &features(50, 50, 0.1), &cash(0.0));
        assert_eq!(result.recommendations[0].title.chars().count(), 100);
        assert_eq!(result.recommendations[0].description, long_line);
    }

    #[test]
    fn test_creditworthiness_bands() {
        // 300 + 85*5.5 - 20*2 = 727.5 -> 728 -> Good
        let credit = creditworthiness(&features(85, 20, 0.3), &cash(100.0));
        assert_eq!(credit.score, 728);
        assert_eq!(credit.rating, CreditRating::Good);
        assert_eq!(
            credit.factors,
            vec!["Strong profit margins", "Positive cash flow"]
        );

        // 300 + 100*5.5 - 0 = 850 -> Excellent
        let credit = creditworthiness(&features(100, 0, 0.4), &cash(100.0));
        assert_eq!(credit.score, 850);
        assert_eq!(credit.rating, CreditRating::Excellent);

        // 300 + 0*5.5 - 100*2 = 100 -> Poor, with the risk factor present
        let credit = creditworthiness(&features(0, 100, -0.5), &cash(-100.0));
        assert_eq!(credit.score, 100);
        assert_eq!(credit.rating, CreditRating::Poor);
        assert_eq!(
            credit.factors,
            vec!["Negative profitability", "High financial risk"]
        );
    }

    #[test]
    fn test_liquidity_factor_requires_current_ratio() {
        let mut f = features(70, 30, 0.2);
        let credit = creditworthiness(&f, &cash(-10.0));
        assert!(!credit.factors.iter().any(|s| s.contains("liquidity")));

        f.ratios.current_ratio = Some(1.8);
        let credit = creditworthiness(&f, &cash(-10.0));
        assert!(credit.factors.iter().any(|s| s.contains("liquidity")));
    }

    #[test]
    fn test_strip_helpers() {
        assert_eq!(strip_bullet("- item"), "item");
        assert_eq!(strip_bullet("• item"), "item");
        assert_eq!(strip_bullet("plain"), "plain");
        assert_eq!(strip_ordinal("12. Do the thing"), "Do the thing");
        assert_eq!(strip_ordinal("No ordinal here"), "No ordinal here");
        assert_eq!(strip_ordinal("2024 results improved"), "2024 results improved");
    }
}
