mod activity;
pub use activity::ActivityFeed;

mod charts;
pub use charts::{bar_specs, BarSpec, HistoryChart};

mod kpi;
pub use kpi::KpiCards;

mod state;
pub use state::{
    ActivityEntry, DashboardState, FieldRow, FieldStatus, ScanSnapshot, ACTIVITY_CAP, HISTORY_CAP,
    SCAN_FIELD_ID,
};

mod table;
pub use table::FieldTable;
