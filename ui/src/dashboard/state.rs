//! Process-wide dashboard state.
//!
//! One instance lives behind a `Signal` provided by the platform root;
//! the diagnosis coroutine is its only writer and each completed scan
//! lands as a single `apply_scan` call, so readers never observe a
//! half-applied update.

use uuid::Uuid;

use crate::diagnose::{HealthTier, ResultRecord, RiskLevel};

/// Rolling health-history depth (chart bars).
pub const HISTORY_CAP: usize = 7;
/// Activity feed depth.
pub const ACTIVITY_CAP: usize = 6;
/// Row id reserved for the visitor's own scan.
pub const SCAN_FIELD_ID: &str = "SCAN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Nominal,
    Warning,
    Critical,
}

impl FieldStatus {
    pub fn from_tier(tier: HealthTier) -> Self {
        match tier {
            HealthTier::Good => FieldStatus::Nominal,
            HealthTier::Moderate => FieldStatus::Warning,
            HealthTier::Critical => FieldStatus::Critical,
        }
    }

    pub fn pill_label(self) -> &'static str {
        match self {
            FieldStatus::Nominal => "● Nominal",
            FieldStatus::Warning => "⚠ Warning",
            FieldStatus::Critical => "🔴 Critical",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FieldStatus::Nominal => "status-nominal",
            FieldStatus::Warning => "status-warning",
            FieldStatus::Critical => "status-critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    pub id: String,
    pub name: String,
    pub crop: String,
    pub health: u8,
    pub bacterial_pct: f64,
    pub status: FieldStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub message: String,
    /// Preformatted `HH:MM` wall-clock stamp.
    pub stamp: String,
}

/// KPI-card source: the most recent completed scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSnapshot {
    pub label: String,
    pub health_score: u8,
    pub health_tier: HealthTier,
    pub risk_level: RiskLevel,
    pub risk_pct: f64,
    pub yield_delta: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub scan_count: u32,
    pub history: Vec<u8>,
    pub fields: Vec<FieldRow>,
    pub activity: Vec<ActivityEntry>,
    pub last_scan: Option<ScanSnapshot>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl DashboardState {
    /// Launch-day seed data: four monitored fields and a week of
    /// health history.
    pub fn seeded() -> Self {
        let field = |id: &str, name: &str, crop: &str, health: u8, pct: f64, status| FieldRow {
            id: id.to_string(),
            name: name.to_string(),
            crop: crop.to_string(),
            health,
            bacterial_pct: pct,
            status,
        };

        Self {
            scan_count: 0,
            history: vec![82, 78, 85, 89, 91, 87, 91],
            fields: vec![
                field("F-001", "North Field A", "Wheat", 91, 2.1, FieldStatus::Nominal),
                field("F-002", "South Field B", "Corn", 74, 18.4, FieldStatus::Warning),
                field("F-003", "East Paddock", "Rice", 88, 5.7, FieldStatus::Nominal),
                field("F-004", "West Valley", "Soy", 45, 61.0, FieldStatus::Critical),
            ],
            activity: Vec::new(),
            last_scan: None,
        }
    }

    /// Fold a completed scan into the dashboard. Applied exactly once
    /// per scan, after the progress sequence resolves.
    pub fn apply_scan(&mut self, record: &ResultRecord, stamp: &str) {
        self.scan_count += 1;

        self.history.push(record.health_score);
        if self.history.len() > HISTORY_CAP {
            self.history.remove(0);
        }

        let tier = HealthTier::from_score(record.health_score);
        self.upsert_scan_row(record, tier);

        self.last_scan = Some(ScanSnapshot {
            label: record.label.to_string(),
            health_score: record.health_score,
            health_tier: tier,
            risk_level: record.bacterial_risk_level,
            risk_pct: record.bacterial_risk_pct,
            yield_delta: record.yield_delta.to_string(),
        });

        self.log_activity(format!("Scan completed — {}", record.label), stamp);
    }

    /// Replace the `SCAN` row in place if present (keeping its
    /// position), else put it at the top of the table.
    fn upsert_scan_row(&mut self, record: &ResultRecord, tier: HealthTier) {
        let entry = FieldRow {
            id: SCAN_FIELD_ID.to_string(),
            name: "Scanned Field".to_string(),
            crop: record
                .label
                .split_whitespace()
                .next()
                .unwrap_or(record.label)
                .to_string(),
            health: record.health_score,
            bacterial_pct: record.bacterial_risk_pct,
            status: FieldStatus::from_tier(tier),
        };

        match self.fields.iter_mut().find(|f| f.id == SCAN_FIELD_ID) {
            Some(existing) => *existing = entry,
            None => self.fields.insert(0, entry),
        }
    }

    /// Prepend an activity entry and drop the oldest beyond the cap.
    pub fn log_activity(&mut self, message: impl Into<String>, stamp: &str) {
        self.activity.insert(
            0,
            ActivityEntry {
                id: Uuid::new_v4(),
                message: message.into(),
                stamp: stamp.to_string(),
            },
        );
        self.activity.truncate(ACTIVITY_CAP);
    }
}
