//! Pure projection of a catalog record into everything the results
//! panel and dashboard need to display: tier labels, advisory strings,
//! CSS classes, icon glyphs. No signals, no DOM — just data in, data
//! out, so the mapping rules stay testable.

use super::catalog::{Priority, ResultRecord, RiskLevel, SignalTone};

/// Health bucket derived from the 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTier {
    Good,
    Moderate,
    Critical,
}

impl HealthTier {
    /// ≥70 good, 40–69 moderate, below critical.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            HealthTier::Good
        } else if score >= 40 {
            HealthTier::Moderate
        } else {
            HealthTier::Critical
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            HealthTier::Good => "tier--good",
            HealthTier::Moderate => "tier--moderate",
            HealthTier::Critical => "tier--critical",
        }
    }

    /// Long-form label under the report's health score.
    pub fn report_label(self) -> &'static str {
        match self {
            HealthTier::Good => "● Good Condition",
            HealthTier::Moderate => "⚠ Moderate Stress",
            HealthTier::Critical => "🔴 Critical Condition",
        }
    }

    /// Condensed label for the dashboard KPI card.
    pub fn kpi_label(self) -> &'static str {
        match self {
            HealthTier::Good => "● Excellent",
            HealthTier::Moderate => "⚠ Moderate",
            HealthTier::Critical => "🔴 Critical",
        }
    }
}

// Presentation mapping for the record's risk level lives with the rest
// of the renderer rather than in the catalog.
impl RiskLevel {
    pub fn advisory(self) -> &'static str {
        match self {
            RiskLevel::Low => "● No active threat",
            RiskLevel::Moderate => "⚠ Monitor closely",
            RiskLevel::Critical => "🔴 Immediate action required",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk--low",
            RiskLevel::Moderate => "risk--moderate",
            RiskLevel::Critical => "risk--critical",
        }
    }
}

impl SignalTone {
    pub fn icon(self) -> &'static str {
        match self {
            SignalTone::Clear => "✅",
            SignalTone::Watch => "⚠️",
            SignalTone::Alert => "🔴",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            SignalTone::Clear => "signal--clear",
            SignalTone::Watch => "signal--watch",
            SignalTone::Alert => "signal--alert",
        }
    }
}

impl Priority {
    pub fn icon(self) -> &'static str {
        match self {
            Priority::Urgent => "🔴",
            Priority::Warning => "⚠️",
            Priority::Info => "💡",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Priority::Urgent => "advice--urgent",
            Priority::Warning => "advice--warning",
            Priority::Info => "advice--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalLine {
    pub icon: &'static str,
    pub name: &'static str,
    pub value: &'static str,
    pub css_class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceLine {
    pub icon: &'static str,
    pub text: &'static str,
    pub css_class: &'static str,
}

/// Display model for a completed scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub title: String,
    pub subtitle: String,
    pub health_score: u8,
    pub health_tier: HealthTier,
    pub risk_level: RiskLevel,
    pub risk_pct: f64,
    pub signals: Vec<SignalLine>,
    pub recommendations: Vec<AdviceLine>,
    pub yield_delta: String,
}

impl ScanReport {
    /// Project a catalog record. Signal and recommendation order is the
    /// record's own; nothing is sorted or filtered.
    pub fn from_record(record: &ResultRecord) -> Self {
        Self {
            title: record.label.to_string(),
            subtitle: format!(
                "Analysis complete · Confidence 97.3% · {} signals detected",
                record.signals.len()
            ),
            health_score: record.health_score,
            health_tier: HealthTier::from_score(record.health_score),
            risk_level: record.bacterial_risk_level,
            risk_pct: record.bacterial_risk_pct,
            signals: record
                .signals
                .iter()
                .map(|s| SignalLine {
                    icon: s.tone.icon(),
                    name: s.name,
                    value: s.value,
                    css_class: s.tone.css_class(),
                })
                .collect(),
            recommendations: record
                .recommendations
                .iter()
                .map(|r| AdviceLine {
                    icon: r.priority.icon(),
                    text: r.text,
                    css_class: r.priority.css_class(),
                })
                .collect(),
            yield_delta: record.yield_delta.to_string(),
        }
    }

    pub fn yield_is_gain(&self) -> bool {
        self.yield_delta.starts_with('+')
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnose::catalog::{record, SampleKind};

    use super::*;

    #[test]
    fn tier_thresholds_sit_at_seventy_and_forty() {
        assert_eq!(HealthTier::from_score(100), HealthTier::Good);
        assert_eq!(HealthTier::from_score(70), HealthTier::Good);
        assert_eq!(HealthTier::from_score(69), HealthTier::Moderate);
        assert_eq!(HealthTier::from_score(40), HealthTier::Moderate);
        assert_eq!(HealthTier::from_score(39), HealthTier::Critical);
        assert_eq!(HealthTier::from_score(0), HealthTier::Critical);
    }

    #[test]
    fn bacterial_sample_projects_to_the_moderate_mapping() {
        let report = ScanReport::from_record(record(SampleKind::Bacterial));
        assert_eq!(report.health_score, 58);
        assert_eq!(report.health_tier, HealthTier::Moderate);
        assert_eq!(report.health_tier.css_class(), "tier--moderate");
        assert_eq!(report.risk_level.advisory(), "⚠ Monitor closely");
        assert!(!report.yield_is_gain());
    }

    #[test]
    fn critical_sample_projects_to_the_critical_mapping() {
        let report = ScanReport::from_record(record(SampleKind::Critical));
        assert_eq!(report.health_tier, HealthTier::Critical);
        assert_eq!(report.health_tier.kpi_label(), "🔴 Critical");
        assert_eq!(report.risk_level, RiskLevel::Critical);
        assert_eq!(report.risk_level.advisory(), "🔴 Immediate action required");
    }

    #[test]
    fn signal_and_recommendation_order_is_preserved() {
        let source = record(SampleKind::Healthy);
        let report = ScanReport::from_record(source);

        let names: Vec<_> = report.signals.iter().map(|s| s.name).collect();
        let expected: Vec<_> = source.signals.iter().map(|s| s.name).collect();
        assert_eq!(names, expected);

        let texts: Vec<_> = report.recommendations.iter().map(|r| r.text).collect();
        let expected: Vec<_> = source.recommendations.iter().map(|r| r.text).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn subtitle_counts_the_record_signals() {
        let report = ScanReport::from_record(record(SampleKind::Healthy));
        assert_eq!(
            report.subtitle,
            "Analysis complete · Confidence 97.3% · 4 signals detected"
        );
    }

    #[test]
    fn priority_mapping_matches_the_report_legend() {
        assert_eq!(Priority::Urgent.icon(), "🔴");
        assert_eq!(Priority::Warning.css_class(), "advice--warning");
        assert_eq!(Priority::Info.icon(), "💡");
    }
}
