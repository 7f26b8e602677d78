use async_trait::async_trait;

/// Lets the user pick an image; `None` when the picker is dismissed
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn pick_image(&self) -> Option<String>;
}
