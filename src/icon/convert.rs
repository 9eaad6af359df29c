//! PNG (or any decodable image) to multi-resolution ICO.

use anyhow::Result;
use std::path::Path;

use crate::runtime::Runtime;

/// Square sizes embedded in a generated ICO, smallest first.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Convert the image at `source` into an ICO written to `target`.
#[cfg(feature = "icon-convert")]
pub(crate) fn write_ico<R: Runtime + ?Sized>(runtime: &R, source: &Path, target: &Path) -> Result<()> {
    let bytes = runtime.read(source)?;
    let ico = encode_ico(&bytes)?;
    runtime.write(target, &ico)
}

#[cfg(not(feature = "icon-convert"))]
pub(crate) fn write_ico<R: Runtime + ?Sized>(
    _runtime: &R,
    _source: &Path,
    _target: &Path,
) -> Result<()> {
    anyhow::bail!("icon conversion is not available in this build (enable the `icon-convert` feature)")
}

#[cfg(feature = "icon-convert")]
pub(crate) fn encode_ico(source: &[u8]) -> Result<Vec<u8>> {
    use anyhow::Context;
    use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
    use image::imageops::FilterType;

    let img = image::load_from_memory(source).context("Failed to decode source icon")?;

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for size in ICO_SIZES {
        let rgba = img.resize_exact(size, size, FilterType::Lanczos3).to_rgba8();
        let image = IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry = IconDirEntry::encode(&image)
            .with_context(|| format!("Failed to encode {}x{} icon", size, size))?;
        icon_dir.add_entry(entry);
    }

    let mut buf = Vec::new();
    icon_dir.write(&mut buf).context("Failed to write ICO data")?;
    Ok(buf)
}
