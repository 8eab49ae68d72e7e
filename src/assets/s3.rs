use anyhow::{Context, Result};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use std::path::Path;

use super::content_type_for;

const KEY_PREFIX: &str = "products";

/// Storage key for an uploaded image.
pub fn object_key(filename: &str) -> String {
    format!("{KEY_PREFIX}/{filename}")
}

/// Uploads image files into an S3 bucket under the `products/` prefix and
/// hands back their public URLs.
pub struct S3Uploader {
    client: aws_sdk_s3::Client,
    bucket: String,
    url_base: String,
}

impl S3Uploader {
    /// Build an uploader from the default AWS credential chain. When no
    /// explicit URL base is given, objects are addressed through the
    /// bucket's virtual-hosted S3 URL.
    pub async fn new(bucket: &str, public_url_base: Option<&str>) -> Result<Self> {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let region = sdk_config.region().map(|r| r.as_ref().to_string());
        let url_base = url_base(bucket, region.as_deref(), public_url_base);
        Ok(Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket: bucket.to_string(),
            url_base,
        })
    }

    /// Public URL an uploaded file is served from.
    pub fn object_url(&self, filename: &str) -> String {
        format!("{}/{}", self.url_base, object_key(filename))
    }

    /// Upload one file to `products/<filename>` with public-read access and
    /// return its public URL.
    pub async fn upload(&self, path: &Path, filename: &str) -> Result<String> {
        let key = object_key(filename);
        let body = ByteStream::from_path(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type_for(filename))
            .acl(ObjectCannedAcl::PublicRead)
            .body(body)
            .send()
            .await
            .with_context(|| format!("Failed to upload s3://{}/{key}", self.bucket))?;

        Ok(self.object_url(filename))
    }
}

fn url_base(bucket: &str, region: Option<&str>, public_url_base: Option<&str>) -> String {
    match public_url_base {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => {
            let region = region.unwrap_or("us-east-1");
            format!("https://{bucket}.s3.{region}.amazonaws.com")
        }
    }
}
