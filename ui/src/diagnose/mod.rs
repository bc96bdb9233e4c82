mod catalog;
pub use catalog::{
    record, Priority, Recommendation, ResultRecord, RiskLevel, SampleKind, SignalReading,
    SignalTone, UnknownSample,
};

mod engine;
pub use engine::{
    AdvanceOutcome, EngineState, ScanEngine, ScanStep, ScheduledAdvance, SCAN_STEPS,
};

mod flow;
pub use flow::{ImageSource, LoadedImage, ViewState};

mod report;
pub use report::{AdviceLine, HealthTier, ScanReport, SignalLine};

mod view;
pub use view::DiagnosePanel;
