//! Clip upload client
//!
//! One multipart POST of the recorded clip to the configured endpoint. The
//! response payload is opaque to us - JSON or plain text - and is stored
//! as-is for the generation stage. Errors come back as plain user-facing
//! strings; the upload screen turns them into a retry affordance.

use std::time::Duration;

/// Form field under which the clip travels
const CLIP_FIELD: &str = "video";

/// File name reported for the clip part
const CLIP_FILE_NAME: &str = "moment.webm";

/// POST the clip and return the raw response body.
pub async fn upload_clip(
    endpoint: String,
    clip: Vec<u8>,
    timeout_secs: u64,
) -> Result<String, String> {
    log::info!("uploading {} byte clip to {}", clip.len(), endpoint);

    let part = reqwest::multipart::Part::bytes(clip)
        .file_name(CLIP_FILE_NAME)
        .mime_str("video/webm")
        .map_err(|e| format!("could not package the clip: {e}"))?;
    let form = reqwest::multipart::Form::new().part(CLIP_FIELD, part);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| format!("could not start the upload: {e}"))?;

    let response = client
        .post(&endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| format!("the upload didn't go through: {e}"))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("the server turned the upload away (HTTP {status})"));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("the upload response was cut short: {e}"))?;

    // The payload is opaque, but a JSON id is worth logging when present
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(id) = value.get("id").and_then(|id| id.as_str()) {
            log::info!("upload accepted, moment id {id}");
        }
    }

    Ok(body)
}
