use crate::Result;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Read and decode an image file as RGBA
pub async fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let image = tokio::task::spawn_blocking(move || -> Result<RgbaImage> {
        Ok(image::load_from_memory(&bytes)?.to_rgba8())
    })
    .await??;
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Encode `image` as PNG and write it to `path`.
///
/// The file is written under a temporary name and renamed into place, so
/// a failed save never leaves a partial image at `path`.
pub async fn save_png(image: RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = tokio::task::spawn_blocking(move || -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    })
    .await??;

    let mut partial = path.as_os_str().to_os_string();
    partial.push(".part");
    let written = match tokio::fs::write(&partial, bytes).await {
        Ok(()) => tokio::fs::rename(&partial, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }
    log::info!("saved {}", path.display());
    Ok(())
}
