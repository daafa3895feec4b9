use crate::analysis::prompts::{
    analysis_prompt, cost_optimization_prompt, forecast_prompt, industry_benchmark_prompt,
    working_capital_prompt, PeriodSummary,
};
use crate::analysis::types::AnalysisResult;
use crate::analysis::parser::parse_analysis_response;
use crate::error::Result;
use crate::features::FinancialFeatures;
use crate::llm::TextGenerator;
use crate::schema::ExtractedData;
use log::{debug, info};

/// Drives one prompt/response cycle per analysis task against any
/// [`TextGenerator`] backend.
///
/// Each call is a single request/response round trip: a transport or API
/// failure propagates to the caller, while an oddly-shaped reply still
/// parses to a (possibly empty) result.
pub struct FinancialAnalyst<G> {
    generator: G,
}

impl<G: TextGenerator> FinancialAnalyst<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// General SWOT-style analysis, parsed into the structured record.
    pub async fn analyze(
        &self,
        data: &ExtractedData,
        features: &FinancialFeatures,
    ) -> Result<AnalysisResult> {
        let prompt = analysis_prompt(data, features);
        debug!("Requesting general analysis ({} prompt chars)", prompt.len());

        let reply = self.generator.generate(&prompt).await?;
        let result = parse_analysis_response(&reply, features, &data.cash_flow);

        info!(
            "Parsed analysis: {} strengths, {} weaknesses, {} recommendations, credit score {}",
            result.strengths.len(),
            result.weaknesses.len(),
            result.recommendations.len(),
            result.creditworthiness.score
        );
        Ok(result)
    }

    /// 6-month forecast narrative from historical period totals.
    pub async fn forecast(&self, history: &[PeriodSummary]) -> Result<String> {
        self.generator.generate(&forecast_prompt(history)).await
    }

    /// Cost-optimization advice over the top expense categories.
    pub async fn cost_optimization(&self, data: &ExtractedData) -> Result<String> {
        self.generator
            .generate(&cost_optimization_prompt(&data.expenses))
            .await
    }

    /// Working-capital advice from receivables/payables and liquidity.
    pub async fn working_capital(
        &self,
        data: &ExtractedData,
        features: &FinancialFeatures,
    ) -> Result<String> {
        self.generator
            .generate(&working_capital_prompt(data, features))
            .await
    }

    /// Benchmark comparison for a named industry sector.
    pub async fn industry_benchmark(
        &self,
        data: &ExtractedData,
        features: &FinancialFeatures,
        industry: &str,
    ) -> Result<String> {
        self.generator
            .generate(&industry_benchmark_prompt(data, features, industry))
            .await
    }
}
