use serde::{Deserialize, Serialize};

/// Stage of the report submission wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Details,
    Location,
    Confirmation,
}

impl WizardStep {
    pub const COUNT: u8 = 3;

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Location => 2,
            WizardStep::Confirmation => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Details => "Report details",
            WizardStep::Location => "Location",
            WizardStep::Confirmation => "Confirmation",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WizardStep::Details => "Edit3",
            WizardStep::Location => "MapPin",
            WizardStep::Confirmation => "Send",
        }
    }

    /// Following step; the last step has none
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => Some(WizardStep::Location),
            WizardStep::Location => Some(WizardStep::Confirmation),
            WizardStep::Confirmation => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Details => None,
            WizardStep::Location => Some(WizardStep::Details),
            WizardStep::Confirmation => Some(WizardStep::Location),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    pub fn progress_percent(&self) -> u8 {
        ((self.number() as f64 / Self::COUNT as f64) * 100.0).round() as u8
    }
}

/// Values collected across the wizard steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportForm {
    pub title: String,
    pub description: String,
    /// Selected category name; empty until the user picks one
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: String,
    pub image_url: Option<String>,
    pub anonymous: bool,
    pub share_on_social: bool,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            latitude: None,
            longitude: None,
            address: String::new(),
            image_url: None,
            anonymous: false,
            share_on_social: true,
        }
    }
}
