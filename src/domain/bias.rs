use std::fmt;

/// Normalised direction extracted from free-text bias labels such as
/// "Strong Bullish" or "Weak Bearish (risk-off)".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BiasDirection {
    Bullish,
    Bearish,
    Neutral,
    Mixed,
    /// No keyword matched. Carries the original text untouched.
    Unknown(String),
}

impl BiasDirection {
    /// Case-insensitive keyword match, first hit wins:
    /// bullish -> bearish -> neutral -> mixed.
    pub fn classify(bias: &str) -> Self {
        let lowered = bias.to_lowercase();
        if lowered.contains("bullish") {
            BiasDirection::Bullish
        } else if lowered.contains("bearish") {
            BiasDirection::Bearish
        } else if lowered.contains("neutral") {
            BiasDirection::Neutral
        } else if lowered.contains("mixed") {
            BiasDirection::Mixed
        } else {
            BiasDirection::Unknown(bias.to_string())
        }
    }

    pub fn is_directional(&self) -> bool {
        matches!(self, BiasDirection::Bullish | BiasDirection::Bearish)
    }
}

impl fmt::Display for BiasDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiasDirection::Bullish => write!(f, "bullish"),
            BiasDirection::Bearish => write!(f, "bearish"),
            BiasDirection::Neutral => write!(f, "neutral"),
            BiasDirection::Mixed => write!(f, "mixed"),
            BiasDirection::Unknown(text) => write!(f, "{}", text),
        }
    }
}
