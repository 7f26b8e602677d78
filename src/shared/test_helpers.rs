use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use fake::faker::lorem::en::{Sentence, Words};
use fake::Fake;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::ReportStatsDto;
use crate::features::reports::models::{
    CreateReport, Report, ReportStatus, UpdateReport, Visibility,
};
use crate::features::reports::repository::{InMemoryReportRepository, ReportRepository};
use crate::modules::geolocation::{Coordinates, GeolocationError, GeolocationProvider};
use crate::modules::images::ImageSource;

/// Midnight UTC on the given day
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid test date")
}

/// Minimal pending report payload
pub fn new_report(title: &str) -> CreateReport {
    CreateReport {
        title: title.to_string(),
        description: "Description détaillée du problème".to_string(),
        category: "Autres".to_string(),
        status: ReportStatus::Pending,
        latitude: None,
        longitude: None,
        address: None,
        image_url: None,
        anonymous: false,
        user_id: Some(1),
        is_public: true,
        visibility: Visibility::Community,
    }
}

/// Deterministic report with overridable fields
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn new(id: u32) -> Self {
        let created = at(2025, 1, 1);
        Self {
            report: Report {
                id,
                title: "Signalement".to_string(),
                description: "Description détaillée du problème".to_string(),
                category: "Autres".to_string(),
                status: ReportStatus::Pending,
                latitude: None,
                longitude: None,
                address: None,
                image_url: None,
                anonymous: false,
                user_id: None,
                is_public: true,
                visibility: Visibility::Community,
                created_at: created,
                updated_at: created,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.report.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.report.description = description.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.report.category = category.to_string();
        self
    }

    pub fn status(mut self, status: ReportStatus) -> Self {
        self.report.status = status;
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.report.latitude = Some(latitude);
        self.report.longitude = Some(longitude);
        self
    }

    pub fn user(mut self, user_id: u32) -> Self {
        self.report.user_id = Some(user_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.report.created_at = created_at;
        self.report.updated_at = created_at;
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.report.updated_at = updated_at;
        self
    }

    pub fn build(self) -> Report {
        self.report
    }
}

/// `count` reports with random text, status, owner and position. Ids run
/// from 1 and creation days go back from 2025-01-28.
pub fn random_reports(count: u32) -> Vec<Report> {
    const CATEGORIES: [&str; 4] = ["Incendies", "Sécurité", "Environnement", "Autres"];

    (1..=count)
        .map(|id| {
            let status = ReportStatus::ALL[(0..3usize).fake::<usize>()];
            let category = CATEGORIES[(0..CATEGORIES.len()).fake::<usize>()];
            let title: String = Sentence(2..5).fake();
            let words: Vec<String> = Words(3..8).fake();
            let day = 28 - (id % 28);

            let mut builder = ReportBuilder::new(id)
                .title(&title)
                .description(&words.join(" "))
                .category(category)
                .status(status)
                .created_at(at(2025, 1, day));
            if (0..4u8).fake::<u8>() > 0 {
                builder = builder.coordinates((2.0..6.0).fake(), (9.0..14.0).fake());
            }
            if (0..2u8).fake::<u8>() == 0 {
                builder = builder.user((1..4u32).fake());
            }
            builder.build()
        })
        .collect()
}

/// Repository wrapper that fails the next call with a transient error
pub struct FlakyReportRepository {
    inner: Arc<InMemoryReportRepository>,
    fail_next: AtomicBool,
}

impl FlakyReportRepository {
    pub fn new(inner: Arc<InMemoryReportRepository>) -> Self {
        Self {
            inner,
            fail_next: AtomicBool::new(false),
        }
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(AppError::Transient("Simulated store outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ReportRepository for FlakyReportRepository {
    async fn get_all(&self) -> Result<Vec<Report>> {
        self.check()?;
        self.inner.get_all().await
    }

    async fn get_by_id(&self, id: u32) -> Result<Report> {
        self.check()?;
        self.inner.get_by_id(id).await
    }

    async fn create(&self, data: CreateReport) -> Result<Report> {
        self.check()?;
        self.inner.create(data).await
    }

    async fn update(&self, id: u32, data: UpdateReport) -> Result<Report> {
        self.check()?;
        self.inner.update(id, data).await
    }

    async fn delete(&self, id: u32) -> Result<bool> {
        self.check()?;
        self.inner.delete(id).await
    }

    async fn get_by_status(&self, status: ReportStatus) -> Result<Vec<Report>> {
        self.check()?;
        self.inner.get_by_status(status).await
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Report>> {
        self.check()?;
        self.inner.get_by_category(category).await
    }

    async fn get_by_user(&self, user_id: u32) -> Result<Vec<Report>> {
        self.check()?;
        self.inner.get_by_user(user_id).await
    }

    async fn get_statistics(&self) -> Result<ReportStatsDto> {
        self.check()?;
        self.inner.get_statistics().await
    }

    async fn update_status_many(&self, ids: &[u32], status: ReportStatus) -> Result<Vec<Report>> {
        self.check()?;
        self.inner.update_status_many(ids, status).await
    }
}

/// Geolocation source with a canned answer
pub struct FixedGeolocation {
    answer: std::result::Result<Coordinates, GeolocationError>,
}

impl FixedGeolocation {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            answer: Ok(Coordinates::new(latitude, longitude)),
        }
    }

    pub fn failing(error: GeolocationError) -> Self {
        Self { answer: Err(error) }
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocation {
    async fn current_position(&self) -> std::result::Result<Coordinates, GeolocationError> {
        self.answer.clone()
    }
}

/// Image picker with a canned answer
pub struct FixedImage(pub Option<String>);

#[async_trait]
impl ImageSource for FixedImage {
    async fn pick_image(&self) -> Option<String> {
        self.0.clone()
    }
}
