use serde::Serialize;

/// Options produced by one sourcing run.
pub const OPTIONS_PER_RUN: usize = 3;

const CSS_PROVIDER_COSTS: &[(&str, f64)] = &[
    ("openai-gpt4", 0.03),
    ("gemini-pro", 0.002),
    ("claude", 0.015),
];
pub const DEFAULT_CSS_PROVIDER: &str = "gemini-pro";
const IMAGE_PROVIDER: (&str, f64) = ("imagen-3.0", 0.04);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Css,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub provider: String,
    pub cost_per_generation: f64,
    pub cost_for_options: f64,
    pub currency: &'static str,
    pub kind: GenerationKind,
}

/// USD estimate for one run. Image generation always prices the image
/// model; unknown CSS providers are priced as the default provider.
#[must_use]
pub fn estimate_cost(provider: &str, kind: GenerationKind) -> CostEstimate {
    let (provider, per_generation) = match kind {
        GenerationKind::Image => (IMAGE_PROVIDER.0.to_string(), IMAGE_PROVIDER.1),
        GenerationKind::Css => {
            let price = |name: &str| {
                CSS_PROVIDER_COSTS
                    .iter()
                    .find(|(candidate, _)| *candidate == name)
                    .map(|(_, cost)| *cost)
            };
            let cost = price(provider)
                .or_else(|| price(DEFAULT_CSS_PROVIDER))
                .unwrap_or_default();
            (provider.to_string(), cost)
        }
    };

    CostEstimate {
        provider,
        cost_per_generation: per_generation,
        cost_for_options: per_generation * OPTIONS_PER_RUN as f64,
        currency: "USD",
        kind,
    }
}
