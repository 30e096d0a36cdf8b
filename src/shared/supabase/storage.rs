use regex::Regex;
use std::sync::LazyLock;

use super::client::SupabaseClient;
use super::error::SupabaseError;
use super::transport::HttpMethod;

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").expect("valid extension regex"));

impl SupabaseClient {
    /// Stores `bytes` under `bucket/object`. Fails if the object exists.
    pub async fn upload(
        &self,
        bucket: &str,
        object: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), SupabaseError> {
        let request = self
            .data_request(
                HttpMethod::Post,
                format!("/storage/v1/object/{}/{}", bucket, object),
            )
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .header("Cache-Control", "max-age=3600")
            .body(bytes);

        self.execute(request).await.map(|_| ())
    }

    pub fn public_url(&self, bucket: &str, object: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url(),
            bucket,
            object
        )
    }
}

/// `{prefix}-{millis}.{ext}`, taking the extension from the original file
/// name. Anything that is not a short alphanumeric extension becomes `bin`.
pub fn timestamped_object_name(prefix: &str, original_filename: &str, millis: i64) -> String {
    let ext = original_filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| EXTENSION_RE.is_match(ext))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "bin".to_string());

    format!("{}-{}.{}", prefix, millis, ext)
}
