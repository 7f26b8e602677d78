use serde::{Deserialize, Serialize};

use crate::features::reports::models::Report;
use crate::shared::constants::{SHARE_FALLBACK_LOCATION, SHARE_HASHTAGS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharePlatform {
    WhatsApp,
    Facebook,
    Twitter,
}

/// Builds the social share links for a report
#[derive(Debug, Clone)]
pub struct ShareLinks {
    base_url: String,
}

impl ShareLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn report_url(&self, id: u32) -> String {
        format!("{}/report/{}", self.base_url, id)
    }

    pub fn share_text(&self, title: &str, address: Option<&str>) -> String {
        let location = address
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(SHARE_FALLBACK_LOCATION);
        format!(
            "New Alerte237 report: {}\n{}\n\n{}",
            title, location, SHARE_HASHTAGS
        )
    }

    pub fn link(&self, platform: SharePlatform, report: &Report) -> String {
        let text = self.share_text(&report.title, report.address.as_deref());
        let url = self.report_url(report.id);

        match platform {
            SharePlatform::WhatsApp => format!(
                "https://wa.me/?text={}",
                urlencoding::encode(&format!("{}\n\n{}", text, url))
            ),
            SharePlatform::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                urlencoding::encode(&url),
                urlencoding::encode(&text)
            ),
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                urlencoding::encode(&text),
                urlencoding::encode(&url)
            ),
        }
    }
}
