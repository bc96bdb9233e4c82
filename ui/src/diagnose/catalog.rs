//! The fixed result catalog behind the demo's "AI diagnosis".
//!
//! Three canned outcomes cover the marketing story: a healthy crop, a
//! moderate bacterial infection, and a critical one. Records are
//! immutable process-lifetime statics; a scan either looks up the
//! sample the visitor picked or draws one uniformly at random.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use rand::Rng;

/// Closed set of sample scans the page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Healthy,
    Bacterial,
    Critical,
}

impl SampleKind {
    pub const ALL: [SampleKind; 3] = [
        SampleKind::Healthy,
        SampleKind::Bacterial,
        SampleKind::Critical,
    ];

    /// Stable key used in markup ids and the string boundary.
    pub fn key(self) -> &'static str {
        match self {
            SampleKind::Healthy => "healthy",
            SampleKind::Bacterial => "bacterial",
            SampleKind::Critical => "critical",
        }
    }

    /// Backdrop fill for the generated placeholder preview.
    pub fn placeholder_fill(self) -> &'static str {
        match self {
            SampleKind::Healthy => "#1B4332",
            SampleKind::Bacterial => "#78350f",
            SampleKind::Critical => "#7f1d1d",
        }
    }

    pub fn placeholder_emoji(self) -> &'static str {
        match self {
            SampleKind::Healthy => "🌿",
            SampleKind::Bacterial => "🍂",
            SampleKind::Critical => "🔴",
        }
    }

    /// Uniform draw over the catalog, used when a visitor uploads their
    /// own image instead of picking a sample.
    pub fn pick_random<R: Rng>(rng: &mut R) -> SampleKind {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Requested sample key is not in the catalog. Unreachable from the UI
/// (sample buttons carry `SampleKind` values); only the string boundary
/// can produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSample(pub String);

impl fmt::Display for UnknownSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sample kind `{}`", self.0)
    }
}

impl std::error::Error for UnknownSample {}

impl FromStr for SampleKind {
    type Err = UnknownSample;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == raw)
            .ok_or_else(|| UnknownSample(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Moderate,
    Critical,
}

impl RiskLevel {
    pub fn name(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Critical => "Critical",
        }
    }
}

/// Severity bucket for a detected signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTone {
    Clear,
    Watch,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Info,
    Warning,
    Urgent,
}

#[derive(Debug, Clone)]
pub struct SignalReading {
    pub name: &'static str,
    pub value: &'static str,
    pub tone: SignalTone,
}

#[derive(Debug, Clone)]
pub struct Recommendation {
    pub text: &'static str,
    pub priority: Priority,
}

/// One canned analysis outcome. Never mutated after process start.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    pub label: &'static str,
    pub health_score: u8,
    pub bacterial_risk_pct: f64,
    pub bacterial_risk_level: RiskLevel,
    pub signals: Vec<SignalReading>,
    pub recommendations: Vec<Recommendation>,
    /// Signed percentage string, e.g. `+22` or `-14`.
    pub yield_delta: &'static str,
}

static HEALTHY: Lazy<ResultRecord> = Lazy::new(|| ResultRecord {
    label: "Healthy Wheat",
    health_score: 92,
    bacterial_risk_pct: 1.8,
    bacterial_risk_level: RiskLevel::Low,
    signals: vec![
        SignalReading {
            name: "Chlorophyll Index",
            value: "Normal",
            tone: SignalTone::Clear,
        },
        SignalReading {
            name: "Moisture Level",
            value: "Optimal — 68%",
            tone: SignalTone::Clear,
        },
        SignalReading {
            name: "Bacterial Blight",
            value: "Not detected",
            tone: SignalTone::Clear,
        },
        SignalReading {
            name: "Fungal Spores",
            value: "Trace — 0.2%",
            tone: SignalTone::Watch,
        },
    ],
    recommendations: vec![
        Recommendation {
            text: "Continue current irrigation schedule. Soil moisture is optimal.",
            priority: Priority::Info,
        },
        Recommendation {
            text: "Apply routine nitrogen top-dressing in 7–10 days per forecast model.",
            priority: Priority::Info,
        },
        Recommendation {
            text: "Schedule next satellite scan in 48 hours for pattern tracking.",
            priority: Priority::Info,
        },
    ],
    yield_delta: "+22",
});

static BACTERIAL: Lazy<ResultRecord> = Lazy::new(|| ResultRecord {
    label: "Bacterial Blight — Moderate Risk",
    health_score: 58,
    bacterial_risk_pct: 34.7,
    bacterial_risk_level: RiskLevel::Moderate,
    signals: vec![
        SignalReading {
            name: "Xanthomonas oryzae",
            value: "Detected — 34.7%",
            tone: SignalTone::Watch,
        },
        SignalReading {
            name: "Chlorophyll Drop",
            value: "-22% vs baseline",
            tone: SignalTone::Watch,
        },
        SignalReading {
            name: "Moisture Stress",
            value: "Above threshold",
            tone: SignalTone::Watch,
        },
        SignalReading {
            name: "Leaf Necrosis Markers",
            value: "12.3% area affected",
            tone: SignalTone::Alert,
        },
    ],
    recommendations: vec![
        Recommendation {
            text: "URGENT: Apply copper-based bactericide within 24–48 hours to limit spread.",
            priority: Priority::Urgent,
        },
        Recommendation {
            text: "Isolate affected zones — do not cross-contaminate with healthy fields.",
            priority: Priority::Urgent,
        },
        Recommendation {
            text: "Reduce overhead irrigation to lower leaf wetness duration.",
            priority: Priority::Warning,
        },
        Recommendation {
            text: "Re-scan in 72 hours to monitor treatment response.",
            priority: Priority::Info,
        },
    ],
    yield_delta: "-14",
});

static CRITICAL: Lazy<ResultRecord> = Lazy::new(|| ResultRecord {
    label: "Fire Blight — Critical Infection",
    health_score: 21,
    bacterial_risk_pct: 78.3,
    bacterial_risk_level: RiskLevel::Critical,
    signals: vec![
        SignalReading {
            name: "Erwinia amylovora",
            value: "Critical — 78.3%",
            tone: SignalTone::Alert,
        },
        SignalReading {
            name: "Shoot Blight Pattern",
            value: "Shepherd's crook detected",
            tone: SignalTone::Alert,
        },
        SignalReading {
            name: "Canker Formation",
            value: "34% stem coverage",
            tone: SignalTone::Alert,
        },
        SignalReading {
            name: "Systemic Spread",
            value: "Vascular colonization detected",
            tone: SignalTone::Alert,
        },
    ],
    recommendations: vec![
        Recommendation {
            text: "CRITICAL: Contain immediately. Remove and destroy all infected plant material.",
            priority: Priority::Urgent,
        },
        Recommendation {
            text: "Do NOT compost infected tissue — incinerate or dispose off-site.",
            priority: Priority::Urgent,
        },
        Recommendation {
            text: "Apply streptomycin-based spray (if legally permitted in your region).",
            priority: Priority::Urgent,
        },
        Recommendation {
            text: "Notify regional agricultural extension office for quarantine assessment.",
            priority: Priority::Warning,
        },
        Recommendation {
            text: "Disinfect all tools with 10% bleach solution between cuts.",
            priority: Priority::Warning,
        },
    ],
    yield_delta: "-67",
});

/// Total lookup: every `SampleKind` has a record.
pub fn record(kind: SampleKind) -> &'static ResultRecord {
    match kind {
        SampleKind::Healthy => &HEALTHY,
        SampleKind::Bacterial => &BACTERIAL,
        SampleKind::Critical => &CRITICAL,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn every_kind_resolves_to_its_record() {
        assert_eq!(record(SampleKind::Healthy).label, "Healthy Wheat");
        assert_eq!(
            record(SampleKind::Bacterial).label,
            "Bacterial Blight — Moderate Risk"
        );
        assert_eq!(
            record(SampleKind::Critical).label,
            "Fire Blight — Critical Infection"
        );
    }

    #[test]
    fn scores_and_risks_stay_in_range() {
        for kind in SampleKind::ALL {
            let rec = record(kind);
            assert!(rec.health_score <= 100);
            assert!(rec.bacterial_risk_pct >= 0.0 && rec.bacterial_risk_pct <= 100.0);
            assert!(!rec.signals.is_empty());
            assert!(!rec.recommendations.is_empty());
        }
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for kind in SampleKind::ALL {
            assert_eq!(kind.key().parse::<SampleKind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_key_is_rejected_at_the_boundary() {
        let err = "fungal".parse::<SampleKind>().unwrap_err();
        assert_eq!(err, UnknownSample("fungal".to_string()));
    }

    #[test]
    fn random_pick_is_a_catalog_member() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let kind = SampleKind::pick_random(&mut rng);
            assert!(SampleKind::ALL.contains(&kind));
        }
    }
}
