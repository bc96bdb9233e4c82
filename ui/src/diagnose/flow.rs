//! Intake and panel flow for the diagnosis tool.
//!
//! The panel is a four-state machine. Transitions are pure functions
//! here; the component layer only applies the returned state and never
//! invents its own.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use super::catalog::{record, SampleKind};

/// What the diagnosis panel is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// No image loaded; intake prompt visible.
    #[default]
    Empty,
    /// Preview visible, trigger armed.
    Loaded,
    /// Staged progress playing; everything else locked.
    Scanning,
    /// Report visible; trigger stays disabled until a new image loads.
    Result,
}

impl ViewState {
    /// Intake (drop zone, file picker, sample buttons) accepts input.
    pub fn intake_open(self) -> bool {
        !matches!(self, ViewState::Scanning)
    }

    /// The "Run AI Diagnosis" trigger is armed.
    pub fn can_trigger(self) -> bool {
        matches!(self, ViewState::Loaded)
    }

    pub fn can_reset(self) -> bool {
        matches!(self, ViewState::Loaded | ViewState::Result)
    }

    /// A new image or sample preview landed.
    pub fn on_image_loaded(self) -> Option<ViewState> {
        self.intake_open().then_some(ViewState::Loaded)
    }

    pub fn on_scan_started(self) -> Option<ViewState> {
        self.can_trigger().then_some(ViewState::Scanning)
    }

    pub fn on_scan_completed(self) -> Option<ViewState> {
        matches!(self, ViewState::Scanning).then_some(ViewState::Result)
    }

    pub fn on_reset(self) -> Option<ViewState> {
        self.can_reset().then_some(ViewState::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Visitor-supplied file; scans resolve to a random catalog pick.
    Upload,
    /// One of the canned sample previews.
    Sample(SampleKind),
}

/// Preview-ready image plus the caption shown under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub source: ImageSource,
    pub data_url: String,
    pub caption: String,
}

impl LoadedImage {
    /// Wrap freshly read upload bytes as an inline preview.
    pub fn from_upload(file_name: &str, bytes: &[u8]) -> Self {
        let mime = mime_for(file_name).unwrap_or("application/octet-stream");
        let kb = bytes.len() as f64 / 1024.0;
        Self {
            source: ImageSource::Upload,
            data_url: format!("data:{mime};base64,{}", BASE64.encode(bytes)),
            caption: format!("📄 {file_name} ({kb:.1} KB)"),
        }
    }

    /// Generate the colored placeholder "photo" for a sample scan.
    pub fn sample(kind: SampleKind) -> Self {
        let label = record(kind).label;
        let svg = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="280">"#,
                r#"<rect width="400" height="280" fill="{fill}"/>"#,
                r#"<text x="50%" y="45%" dominant-baseline="middle" text-anchor="middle" font-size="72">{emoji}</text>"#,
                r#"<text x="50%" y="72%" dominant-baseline="middle" text-anchor="middle" font-size="18" fill="white" font-family="sans-serif">{label}</text>"#,
                "</svg>"
            ),
            fill = kind.placeholder_fill(),
            emoji = kind.placeholder_emoji(),
            label = label,
        );
        Self {
            source: ImageSource::Sample(kind),
            data_url: format!("data:image/svg+xml;base64,{}", BASE64.encode(svg)),
            caption: format!("🔬 Sample: {label}"),
        }
    }

    /// The sample to force the scan to, if any.
    pub fn selection(&self) -> Option<SampleKind> {
        match self.source {
            ImageSource::Upload => None,
            ImageSource::Sample(kind) => Some(kind),
        }
    }
}

/// Intake gate: only names with a known raster/vector image extension
/// pass. Anything else is dropped silently — no scan, no error state.
pub fn accepts_image(file_name: &str) -> bool {
    mime_for(file_name).is_some()
}

fn mime_for(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_matrix_holds() {
        use ViewState::*;

        assert_eq!(Empty.on_image_loaded(), Some(Loaded));
        assert_eq!(Loaded.on_image_loaded(), Some(Loaded));
        assert_eq!(Result.on_image_loaded(), Some(Loaded));
        assert_eq!(Scanning.on_image_loaded(), None);

        assert_eq!(Loaded.on_scan_started(), Some(Scanning));
        assert_eq!(Empty.on_scan_started(), None);
        assert_eq!(Scanning.on_scan_started(), None);
        assert_eq!(Result.on_scan_started(), None);

        assert_eq!(Scanning.on_scan_completed(), Some(Result));
        assert_eq!(Loaded.on_scan_completed(), None);

        assert_eq!(Loaded.on_reset(), Some(Empty));
        assert_eq!(Result.on_reset(), Some(Empty));
        assert_eq!(Empty.on_reset(), None);
        assert_eq!(Scanning.on_reset(), None);
    }

    #[test]
    fn trigger_is_armed_only_when_loaded() {
        assert!(ViewState::Loaded.can_trigger());
        assert!(!ViewState::Empty.can_trigger());
        assert!(!ViewState::Scanning.can_trigger());
        assert!(!ViewState::Result.can_trigger());
    }

    #[test]
    fn intake_accepts_images_and_rejects_the_rest() {
        assert!(accepts_image("leaf.jpg"));
        assert!(accepts_image("Field Shot.PNG"));
        assert!(accepts_image("vine.webp"));
        assert!(!accepts_image("notes.txt"));
        assert!(!accepts_image("report.pdf"));
        assert!(!accepts_image("no_extension"));
    }

    #[test]
    fn upload_preview_carries_mime_and_size_caption() {
        let img = LoadedImage::from_upload("leaf.png", &[0u8; 2048]);
        assert!(img.data_url.starts_with("data:image/png;base64,"));
        assert_eq!(img.caption, "📄 leaf.png (2.0 KB)");
        assert_eq!(img.selection(), None);
    }

    #[test]
    fn sample_preview_is_an_inline_svg_with_the_record_label() {
        let img = LoadedImage::sample(SampleKind::Bacterial);
        assert!(img.data_url.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(img.caption, "🔬 Sample: Bacterial Blight — Moderate Risk");
        assert_eq!(img.selection(), Some(SampleKind::Bacterial));
    }
}
