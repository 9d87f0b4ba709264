use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quiz_core::model::ImageId;
use services::{ImageAsset, QuizService};
use tracing::warn;

/// Inline `data:` URL for an image, so the webview needs no file access.
#[must_use]
pub fn data_url(asset: &ImageAsset) -> String {
    format!("data:{};base64,{}", asset.mime, STANDARD.encode(&asset.bytes))
}

/// Image source for display; `None` when the bytes cannot be loaded.
pub async fn load_image_src(quiz: &QuizService, image_id: &ImageId) -> Option<String> {
    match quiz.image(image_id).await {
        Ok(asset) => Some(data_url(&asset)),
        Err(err) => {
            warn!(image = %image_id, error = %err, "image could not be loaded for display");
            None
        }
    }
}
