use crate::features::reports::models::{CreateReport, ReportStatus, Visibility};
use crate::features::submission::dtos::{DetailsStepDto, LocationStepDto, ReportSummaryDto};
use crate::features::submission::models::{ReportForm, WizardStep};
use crate::modules::geolocation::Coordinates;
use crate::shared::types::FieldErrors;

/// Three-step form state machine.
///
/// Holds the form values, the current step and the per-field errors of the
/// last failed validation. Editing a field clears its error. Moving forward
/// is only possible once the current step validates.
#[derive(Debug, Clone)]
pub struct ReportWizard {
    form: ReportForm,
    step: WizardStep,
    errors: FieldErrors,
}

impl Default for ReportWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportWizard {
    pub fn new() -> Self {
        Self {
            form: ReportForm::default(),
            step: WizardStep::Details,
            errors: FieldErrors::new(),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
        self.errors.remove("title");
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
        self.errors.remove("description");
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.form.category = category.into();
        self.errors.remove("category");
    }

    pub fn set_anonymous(&mut self, anonymous: bool) {
        self.form.anonymous = anonymous;
    }

    pub fn set_share_on_social(&mut self, share: bool) {
        self.form.share_on_social = share;
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.form.address = address.into();
    }

    /// Store a picked position and its address
    pub fn select_location(&mut self, coordinates: Coordinates, address: impl Into<String>) {
        self.form.latitude = Some(coordinates.latitude);
        self.form.longitude = Some(coordinates.longitude);
        self.form.address = address.into();
        self.errors.remove(LocationStepDto::FIELD);
    }

    /// Map click. Uses the typed address when there is one, otherwise the
    /// clicked coordinates with 6 decimals.
    pub fn select_on_map(&mut self, coordinates: Coordinates, typed_address: Option<&str>) {
        let address = match typed_address.map(str::trim) {
            Some(typed) if !typed.is_empty() => typed.to_string(),
            _ => format!("{:.6}, {:.6}", coordinates.latitude, coordinates.longitude),
        };
        self.select_location(coordinates, address);
    }

    pub fn attach_image(&mut self, image_ref: impl Into<String>) {
        self.form.image_url = Some(image_ref.into());
    }

    pub fn remove_image(&mut self) {
        self.form.image_url = None;
    }

    /// Errors for `step`, without touching the wizard state
    pub fn validate_step(&self, step: WizardStep) -> FieldErrors {
        match step {
            WizardStep::Details => DetailsStepDto::from_form(&self.form).check(),
            WizardStep::Location => LocationStepDto::from_form(&self.form).check(),
            WizardStep::Confirmation => FieldErrors::new(),
        }
    }

    /// Advance when the current step is valid. On the last step this is a
    /// no-op.
    pub fn next(&mut self) -> Result<WizardStep, FieldErrors> {
        let errors = self.validate_step(self.step);
        if !errors.is_empty() {
            tracing::debug!("Step '{}' rejected: {}", self.step.title(), errors);
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors = FieldErrors::new();
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Go back one step; never validates
    pub fn previous(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Full check run right before submission. The step does not change.
    pub fn validate_all(&mut self) -> Result<(), FieldErrors> {
        let mut errors = self.validate_step(WizardStep::Details);
        errors.merge(self.validate_step(WizardStep::Location));
        if errors.is_empty() {
            Ok(())
        } else {
            self.errors = errors.clone();
            Err(errors)
        }
    }

    pub fn summary(&self) -> ReportSummaryDto {
        ReportSummaryDto::from_form(&self.form)
    }

    /// New pending report for the form values; anonymous reports carry no
    /// user
    pub(crate) fn to_create_report(&self, current_user_id: u32) -> CreateReport {
        let form = &self.form;
        let address = form.address.trim();
        CreateReport {
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            category: form.category.clone(),
            status: ReportStatus::Pending,
            latitude: form.latitude,
            longitude: form.longitude,
            address: (!address.is_empty()).then(|| address.to_string()),
            image_url: form.image_url.clone(),
            anonymous: form.anonymous,
            user_id: (!form.anonymous).then_some(current_user_id),
            is_public: true,
            visibility: Visibility::Community,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
