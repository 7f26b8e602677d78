use std::time::Duration;

// =============================================================================
// SIMULATED LATENCY (base values, scaled by StoreConfig)
// =============================================================================

pub const REPORT_READ_LATENCY: Duration = Duration::from_millis(300);
pub const REPORT_CREATE_LATENCY: Duration = Duration::from_millis(500);
pub const REPORT_UPDATE_LATENCY: Duration = Duration::from_millis(400);
pub const REPORT_DELETE_LATENCY: Duration = Duration::from_millis(300);
pub const REPORT_STATISTICS_LATENCY: Duration = Duration::from_millis(200);

pub const CATEGORY_READ_LATENCY: Duration = Duration::from_millis(200);
pub const CATEGORY_WRITE_LATENCY: Duration = Duration::from_millis(300);
pub const CATEGORY_DELETE_LATENCY: Duration = Duration::from_millis(200);

// =============================================================================
// DISPLAY
// =============================================================================

/// Icon used when a report references an unknown category
pub const FALLBACK_CATEGORY_ICON: &str = "AlertTriangle";

/// Color used when a report references an unknown category
pub const FALLBACK_CATEGORY_COLOR: &str = "#6b7280";

/// Map center when no report carries coordinates (Yaoundé)
pub const DEFAULT_MAP_CENTER: (f64, f64) = (3.8480, 11.5021);

/// Address recorded when the location comes from the device
pub const CURRENT_POSITION_LABEL: &str = "Current position";

// =============================================================================
// SHARING
// =============================================================================

pub const SHARE_HASHTAGS: &str = "#Alerte237 #StopNidsDePoule #Cameroun";

pub const SHARE_FALLBACK_LOCATION: &str = "GPS location";
