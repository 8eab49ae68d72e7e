use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Extensions treated as product images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// An image file found in the assets directory.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub filename: String,
}

/// List image files directly under `dir` (non-recursive), sorted by
/// filename. The sorted order is what makes downstream matching see a
/// stable candidate sequence across runs.
pub fn scan_images(dir: &Path) -> Result<Vec<ImageFile>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read assets directory: {}", dir.display()))?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            continue;
        }
        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };
        images.push(ImageFile { path, filename });
    }

    images.sort_by(|a, b| a.filename.cmp(&b.filename));

    tracing::debug!("Found {} images in {}", images.len(), dir.display());

    Ok(images)
}

/// Content type by extension. Unknown extensions fall back to JPEG, which is
/// what the bulk of the catalog uses.
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = filename.rsplit('.').next().map(str::to_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}
