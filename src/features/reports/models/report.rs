use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Legacy submissions were stamped "published"; they are treated as pending
    #[serde(alias = "published")]
    Pending,
    Transmitted,
    Resolved,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::Transmitted,
        ReportStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Transmitted => "transmitted",
            ReportStatus::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" | "published" => Ok(ReportStatus::Pending),
            "transmitted" => Ok(ReportStatus::Transmitted),
            "resolved" => Ok(ReportStatus::Resolved),
            other => Err(format!("Unknown report status '{}'", other)),
        }
    }
}

/// Audience a report is published to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Community,
}

fn default_true() -> bool {
    true
}

/// Stored report record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "Id")]
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: ReportStatus,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub visibility: Visibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Both coordinates, or nothing when either one is missing
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Address when known, otherwise the coordinates with 4 decimals
    pub fn location_label(&self) -> Option<String> {
        match (&self.address, self.coordinates()) {
            (Some(address), _) if !address.trim().is_empty() => Some(address.clone()),
            (_, Some((lat, lng))) => Some(format!("{:.4}, {:.4}", lat, lng)),
            _ => None,
        }
    }
}

/// Data for creating a new report; id and timestamps are assigned by the store
#[derive(Debug, Clone, PartialEq)]
pub struct CreateReport {
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: ReportStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub anonymous: bool,
    pub user_id: Option<u32>,
    pub is_public: bool,
    pub visibility: Visibility,
}

impl CreateReport {
    pub(crate) fn into_report(self, id: u32, now: DateTime<Utc>) -> Report {
        Report {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            status: self.status,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
            image_url: self.image_url,
            anonymous: self.anonymous,
            user_id: self.user_id,
            is_public: self.is_public,
            visibility: self.visibility,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update. `None` leaves a field untouched; for nullable fields
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateReport {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<ReportStatus>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
    pub address: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub anonymous: Option<bool>,
    pub is_public: Option<bool>,
}

impl UpdateReport {
    pub fn status(status: ReportStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub(crate) fn apply_to(self, report: &mut Report) {
        if let Some(title) = self.title {
            report.title = title;
        }
        if let Some(description) = self.description {
            report.description = description;
        }
        if let Some(category) = self.category {
            report.category = category;
        }
        if let Some(status) = self.status {
            report.status = status;
        }
        if let Some(latitude) = self.latitude {
            report.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            report.longitude = longitude;
        }
        if let Some(address) = self.address {
            report.address = address;
        }
        if let Some(image_url) = self.image_url {
            report.image_url = image_url;
        }
        if let Some(anonymous) = self.anonymous {
            report.anonymous = anonymous;
        }
        if let Some(is_public) = self.is_public {
            report.is_public = is_public;
        }
    }
}
