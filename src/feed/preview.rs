//! Working preview for the detail view
//!
//! HD images in the feed are often several thousand pixels wide. They are
//! downscaled once to the preview tier so the overlay stays responsive.

use iced::widget::image::Handle;
use image::imageops::FilterType;

use super::thumbnail::{decode_in_background, download};
use crate::error::ImageError;

pub async fn load_preview(
    http: reqwest::Client,
    url: String,
    size: u32,
) -> Result<Handle, ImageError> {
    let bytes = download(&http, &url).await?;
    tracing::debug!(
        "🔍 Downloaded {:.1}MB preview source: {url}",
        bytes.len() as f64 / 1024.0 / 1024.0
    );

    decode_in_background(bytes, size, FilterType::Triangle).await
}
