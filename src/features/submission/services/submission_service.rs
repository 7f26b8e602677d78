use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryService;
use crate::features::reports::models::Report;
use crate::features::reports::services::ReportService;
use crate::features::submission::models::WizardStep;
use crate::features::submission::services::{ReportWizard, SharePlatform, ShareLinks};
use crate::modules::geolocation::{GeolocationError, GeolocationProvider};
use crate::modules::images::ImageSource;
use crate::modules::notifications::Notifier;
use crate::shared::constants::CURRENT_POSITION_LABEL;

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub report: Report,
    /// WhatsApp link to open when the reporter asked to share
    pub share_link: Option<String>,
}

/// Side effects of the report wizard: device position, image attachment
/// and the final publication.
pub struct SubmissionService {
    reports: Arc<ReportService>,
    categories: Arc<CategoryService>,
    notifier: Arc<dyn Notifier>,
    share_links: ShareLinks,
    current_user_id: u32,
}

impl SubmissionService {
    pub fn new(
        reports: Arc<ReportService>,
        categories: Arc<CategoryService>,
        notifier: Arc<dyn Notifier>,
        share_links: ShareLinks,
        current_user_id: u32,
    ) -> Self {
        Self {
            reports,
            categories,
            notifier,
            share_links,
            current_user_id,
        }
    }

    /// Categories offered on the details step
    pub async fn category_options(&self) -> Result<Vec<Category>> {
        self.categories.list().await.map_err(|e| {
            self.notifier.error("Failed to load categories");
            e
        })
    }

    /// Fill the location step from the device position
    pub async fn locate(
        &self,
        wizard: &mut ReportWizard,
        provider: &dyn GeolocationProvider,
    ) -> std::result::Result<(), GeolocationError> {
        match provider.current_position().await {
            Ok(position) => {
                wizard.select_location(position, CURRENT_POSITION_LABEL);
                self.notifier.success("Position detected");
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Geolocation failed: {}", e);
                self.notifier.error("Unable to get your position");
                Err(e)
            }
        }
    }

    pub fn attach_image(&self, wizard: &mut ReportWizard, image_ref: impl Into<String>) {
        wizard.attach_image(image_ref);
        self.notifier.success("Image attached");
    }

    /// Ask `source` for an image. Returns whether one was attached.
    pub async fn pick_image(&self, wizard: &mut ReportWizard, source: &dyn ImageSource) -> bool {
        match source.pick_image().await {
            Some(image_ref) => {
                self.attach_image(wizard, image_ref);
                true
            }
            None => false,
        }
    }

    /// Publish the wizard's report.
    ///
    /// Only allowed from the confirmation step. Invalid forms never reach the
    /// store. When the store fails the wizard keeps every value so the user
    /// can retry; on success it is reset.
    pub async fn submit(&self, wizard: &mut ReportWizard) -> Result<SubmissionOutcome> {
        if wizard.step() != WizardStep::Confirmation {
            return Err(AppError::BadRequest(format!(
                "Cannot submit from step '{}'",
                wizard.step().title()
            )));
        }

        if let Err(errors) = wizard.validate_all() {
            self.notifier.error("Please fix the highlighted fields");
            return Err(AppError::Validation(errors.to_string()));
        }

        let data = wizard.to_create_report(self.current_user_id);
        let report = self.reports.create(data).await.map_err(|e| {
            self.notifier.error("Failed to publish the report");
            e
        })?;

        tracing::info!("Report {} published in '{}'", report.id, report.category);
        self.notifier
            .success("Report published! Your community can now see it.");

        let share_link = wizard
            .form()
            .share_on_social
            .then(|| self.share_links.link(SharePlatform::WhatsApp, &report));
        wizard.reset();

        Ok(SubmissionOutcome { report, share_link })
    }
}
