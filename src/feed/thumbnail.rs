use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage, RgbaImage};

use crate::error::ImageError;

/// Download a remote image and shrink it to a gallery thumbnail
///
/// The thumbnail fits inside a `size` × `size` square, keeping the
/// aspect ratio. Images already smaller than that are left alone.
pub async fn load_thumbnail(
    http: reqwest::Client,
    url: String,
    size: u32,
) -> Result<Handle, ImageError> {
    let bytes = download(&http, &url).await?;
    let handle = decode_in_background(bytes, size, FilterType::Lanczos3).await?;

    tracing::debug!("📸 Generated thumbnail: {url}");
    Ok(handle)
}

/// Fetch the raw bytes of a remote image
pub(super) async fn download(http: &reqwest::Client, url: &str) -> Result<Vec<u8>, ImageError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| ImageError::Download(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ImageError::Download(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ImageError::Download(e.to_string()))?;

    Ok(bytes.to_vec())
}

/// Decode and resize on the blocking pool (decoding is CPU-intensive)
pub(super) async fn decode_in_background(
    bytes: Vec<u8>,
    max_size: u32,
    filter: FilterType,
) -> Result<Handle, ImageError> {
    tokio::task::spawn_blocking(move || -> Result<Handle, ImageError> {
        let img = decode(&bytes)?;
        let rgba = fit_within(img, max_size, filter);
        let (width, height) = rgba.dimensions();
        Ok(Handle::from_rgba(width, height, rgba.into_raw()))
    })
    .await
    .map_err(|e| ImageError::Decode(format!("Task join error: {e}")))?
}

pub(super) fn decode(bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))
}

/// Downscale so neither side exceeds `max_size`
pub(super) fn fit_within(img: DynamicImage, max_size: u32, filter: FilterType) -> RgbaImage {
    if img.width() > max_size || img.height() > max_size {
        img.resize(max_size, max_size, filter).to_rgba8()
    } else {
        img.to_rgba8()
    }
}
