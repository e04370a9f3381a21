use std::fmt;
use std::ops::RangeInclusive;

const HIGH_IMPACT_KEYWORDS: [&str; 3] = ["contentious", "hard fork", "major"];
const LOW_IMPACT_KEYWORDS: [&str; 2] = ["minor", "parameter change"];

/// Expected market impact of an upgrade, inferred from its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeImpact {
    High,
    Low,
    Neutral,
}

impl UpgradeImpact {
    /// Keyword scan over the lower-cased description. High impact wins over low impact.
    pub fn classify(description: &str) -> Self {
        let description = description.to_lowercase();

        if HIGH_IMPACT_KEYWORDS.iter().any(|k| description.contains(k)) {
            UpgradeImpact::High
        } else if LOW_IMPACT_KEYWORDS.iter().any(|k| description.contains(k)) {
            UpgradeImpact::Low
        } else {
            UpgradeImpact::Neutral
        }
    }

    /// Range the initial base volatility is drawn from.
    pub fn base_range(&self) -> RangeInclusive<f64> {
        match self {
            UpgradeImpact::High => 0.05..=0.08,
            UpgradeImpact::Low => 0.01..=0.03,
            UpgradeImpact::Neutral => 0.02..=0.05,
        }
    }
}

impl fmt::Display for UpgradeImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UpgradeImpact::High => "high-impact",
            UpgradeImpact::Low => "low-impact",
            UpgradeImpact::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_impact_keywords() {
        assert_eq!(UpgradeImpact::classify("A contentious change"), UpgradeImpact::High);
        assert_eq!(UpgradeImpact::classify("Planned HARD FORK at block 1"), UpgradeImpact::High);
        assert_eq!(UpgradeImpact::classify("Major consensus rewrite"), UpgradeImpact::High);
    }

    #[test]
    fn test_low_impact_keywords() {
        assert_eq!(UpgradeImpact::classify("Minor client release"), UpgradeImpact::Low);
        assert_eq!(UpgradeImpact::classify("Gas Parameter Change"), UpgradeImpact::Low);
    }

    #[test]
    fn test_neutral_fallback() {
        assert_eq!(UpgradeImpact::classify("Routine maintenance"), UpgradeImpact::Neutral);
        assert_eq!(UpgradeImpact::classify(""), UpgradeImpact::Neutral);
    }

    #[test]
    fn test_high_impact_takes_priority() {
        assert_eq!(UpgradeImpact::classify("major parameter change"), UpgradeImpact::High);
        assert_eq!(UpgradeImpact::classify("minor but contentious"), UpgradeImpact::High);
    }

    #[test]
    fn test_base_ranges() {
        assert_eq!(UpgradeImpact::High.base_range(), 0.05..=0.08);
        assert_eq!(UpgradeImpact::Low.base_range(), 0.01..=0.03);
        assert_eq!(UpgradeImpact::Neutral.base_range(), 0.02..=0.05);
    }

    #[test]
    fn test_display() {
        assert_eq!(UpgradeImpact::High.to_string(), "high-impact");
        assert_eq!(UpgradeImpact::Neutral.to_string(), "neutral");
    }
}
