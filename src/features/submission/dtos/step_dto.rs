use serde::Serialize;
use validator::Validate;

use crate::features::submission::models::ReportForm;
use crate::modules::geolocation::Coordinates;
use crate::shared::types::FieldErrors;

/// Fields checked before leaving the details step
#[derive(Debug, Clone, Validate)]
pub struct DetailsStepDto {
    #[validate(
        custom(function = "crate::shared::validation::not_blank", message = "Title is required"),
        length(max = 200, message = "Title must not exceed 200 characters")
    )]
    pub title: String,

    #[validate(
        custom(function = "crate::shared::validation::not_blank", message = "Description is required"),
        length(max = 5000, message = "Description must not exceed 5000 characters")
    )]
    pub description: String,

    #[validate(custom(
        function = "crate::shared::validation::not_blank",
        message = "Please select a category"
    ))]
    pub category: String,
}

impl DetailsStepDto {
    pub fn from_form(form: &ReportForm) -> Self {
        Self {
            title: form.title.clone(),
            description: form.description.clone(),
            category: form.category.clone(),
        }
    }

    pub fn check(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => e.into(),
        }
    }
}

/// Fields checked before leaving the location step
#[derive(Debug, Clone, Validate)]
pub struct LocationStepDto {
    #[validate(
        required(message = "Please select a location"),
        range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90")
    )]
    pub latitude: Option<f64>,

    #[validate(
        required(message = "Please select a location"),
        range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180")
    )]
    pub longitude: Option<f64>,
}

impl LocationStepDto {
    pub const FIELD: &'static str = "location";

    pub fn from_form(form: &ReportForm) -> Self {
        Self {
            latitude: form.latitude,
            longitude: form.longitude,
        }
    }

    /// Coordinate problems are reported under the single `location` field
    pub fn check(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let Err(e) = self.validate() {
            let fields: FieldErrors = e.into();
            let message = fields
                .get("latitude")
                .or_else(|| fields.get("longitude"))
                .unwrap_or("Please select a location")
                .to_string();
            errors.insert(Self::FIELD, message);
        } else if let (Some(lat), Some(lng)) = (self.latitude, self.longitude) {
            // NaN slips through the range rules
            if !Coordinates::new(lat, lng).is_valid() {
                errors.insert(Self::FIELD, "Invalid coordinates");
            }
        }
        errors
    }
}

/// Read-only recap shown on the confirmation step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryDto {
    pub title: String,
    pub category: String,
    pub description: String,
    pub location: String,
    pub reporter: &'static str,
    pub image_url: Option<String>,
    pub share_on_social: bool,
}

impl ReportSummaryDto {
    pub fn from_form(form: &ReportForm) -> Self {
        let location = if !form.address.trim().is_empty() {
            form.address.clone()
        } else {
            match (form.latitude, form.longitude) {
                (Some(lat), Some(lng)) => format!("{:.4}, {:.4}", lat, lng),
                _ => String::new(),
            }
        };

        Self {
            title: form.title.clone(),
            category: form.category.clone(),
            description: form.description.clone(),
            location,
            reporter: if form.anonymous {
                "Anonymous"
            } else {
                "Identified"
            },
            image_url: form.image_url.clone(),
            share_on_social: form.share_on_social,
        }
    }
}
