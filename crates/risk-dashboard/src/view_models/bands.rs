//! Classification bands
//!
//! Total mappings from the service's free-form labels to display bands.
//! Only the repository classification is matched case-insensitively; the
//! service is observed to emit it in mixed case.

use risk_dashboard_theme::Band;

/// `HEALTHY`, `STABLE`, `MODERATE RISK`, `HIGH RISK`, `CRITICAL`
pub fn repository_band(classification: &str) -> Band {
    match classification.to_uppercase().as_str() {
        "HEALTHY" | "STABLE" => Band::Ok,
        "MODERATE RISK" => Band::Warn,
        "HIGH RISK" => Band::Danger,
        "CRITICAL" => Band::Severe,
        _ => Band::Neutral,
    }
}

/// Impact severity and per-file risk level: `HIGH`, `MEDIUM`, `LOW`
pub fn impact_band(level: &str) -> Band {
    match level {
        "HIGH" => Band::Danger,
        "MEDIUM" => Band::Warn,
        "LOW" => Band::Ok,
        _ => Band::Neutral,
    }
}

/// `BLOCK`, `MANUAL_REVIEW`, `ALLOW_WITH_REVIEW`, `AUTO_APPROVE`
pub fn merge_decision_band(decision: &str) -> Band {
    match decision {
        "BLOCK" => Band::Severe,
        "MANUAL_REVIEW" => Band::Warn,
        "ALLOW_WITH_REVIEW" => Band::Info,
        "AUTO_APPROVE" => Band::Ok,
        _ => Band::Neutral,
    }
}

/// Merge readiness: anything but `LOW` or `MEDIUM` counts as ready
pub fn merge_readiness_band(readiness: &str) -> Band {
    match readiness {
        "LOW" => Band::Danger,
        "MEDIUM" => Band::Warn,
        _ => Band::Ok,
    }
}

/// PR classification: `CRITICAL`, `HIGH`, `MODERATE`/`MEDIUM`, `LOW`
pub fn pr_classification_band(classification: &str) -> Band {
    match classification {
        "CRITICAL" => Band::Severe,
        "HIGH" => Band::Danger,
        "MODERATE" | "MEDIUM" => Band::Warn,
        "LOW" => Band::Ok,
        _ => Band::Neutral,
    }
}

/// Confidence level: `VERY HIGH`, `HIGH`, `MEDIUM`, `LOW`
pub fn confidence_band(level: &str) -> Band {
    match level {
        "VERY HIGH" | "HIGH" => Band::Ok,
        "MEDIUM" => Band::Warn,
        "LOW" => Band::Danger,
        _ => Band::Neutral,
    }
}

/// Format a metric: integers without a fraction, others with up to two decimals
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_band_is_case_insensitive() {
        assert_eq!(repository_band("HEALTHY"), Band::Ok);
        assert_eq!(repository_band("Stable"), Band::Ok);
        assert_eq!(repository_band("moderate risk"), Band::Warn);
        assert_eq!(repository_band("High Risk"), Band::Danger);
        assert_eq!(repository_band("CRITICAL"), Band::Severe);
        assert_eq!(repository_band("unknown"), Band::Neutral);
        assert_eq!(repository_band(""), Band::Neutral);
    }

    #[test]
    fn test_impact_band_is_case_sensitive() {
        assert_eq!(impact_band("HIGH"), Band::Danger);
        assert_eq!(impact_band("MEDIUM"), Band::Warn);
        assert_eq!(impact_band("LOW"), Band::Ok);
        assert_eq!(impact_band("high"), Band::Neutral);
    }

    #[test]
    fn test_merge_decision_band() {
        assert_eq!(merge_decision_band("BLOCK"), Band::Severe);
        assert_eq!(merge_decision_band("MANUAL_REVIEW"), Band::Warn);
        assert_eq!(merge_decision_band("ALLOW_WITH_REVIEW"), Band::Info);
        assert_eq!(merge_decision_band("AUTO_APPROVE"), Band::Ok);
        assert_eq!(merge_decision_band("block"), Band::Neutral);
    }

    #[test]
    fn test_merge_readiness_defaults_to_ok() {
        assert_eq!(merge_readiness_band("LOW"), Band::Danger);
        assert_eq!(merge_readiness_band("MEDIUM"), Band::Warn);
        assert_eq!(merge_readiness_band("HIGH"), Band::Ok);
        assert_eq!(merge_readiness_band(""), Band::Ok);
    }

    #[test]
    fn test_pr_classification_and_confidence() {
        assert_eq!(pr_classification_band("CRITICAL"), Band::Severe);
        assert_eq!(pr_classification_band("MODERATE"), Band::Warn);
        assert_eq!(pr_classification_band("MEDIUM"), Band::Warn);
        assert_eq!(pr_classification_band("Other"), Band::Neutral);
        assert_eq!(confidence_band("VERY HIGH"), Band::Ok);
        assert_eq!(confidence_band("LOW"), Band::Danger);
        assert_eq!(confidence_band("?"), Band::Neutral);
    }

    #[test]
    fn test_every_mapping_is_total() {
        let inputs = ["", " ", "HIGH", "низкий", "BLOCK\n", "🚨", "moderate risk"];
        for input in inputs {
            let bands = [
                repository_band(input),
                impact_band(input),
                merge_decision_band(input),
                merge_readiness_band(input),
                pr_classification_band(input),
                confidence_band(input),
            ];
            assert!(bands.iter().all(|b| Band::ALL.contains(b)));
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(42.5), "42.5");
        assert_eq!(format_number(71.456), "71.46");
        assert_eq!(format_number(1e19), "10000000000000000000");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(f64::NAN), "-");
    }
}
