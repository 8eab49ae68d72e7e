//! Local image assets: directory scanning and S3 uploads.

mod s3;
mod scan;

pub use s3::{object_key, S3Uploader};
pub use scan::{content_type_for, scan_images, ImageFile, IMAGE_EXTENSIONS};
