//! Test fixtures: Pinata payloads and upload bodies.

use axum_test::multipart::{MultipartForm, Part};

pub const PIN_TIMESTAMP: &str = "2024-05-01T10:00:00.000Z";

pub fn pin_response_body(cid: &str, pin_size: u64) -> String {
    serde_json::json!({
        "IpfsHash": cid,
        "PinSize": pin_size,
        "Timestamp": PIN_TIMESTAMP,
    })
    .to_string()
}

/// A form with a single `file` part.
pub fn file_form(file_name: &str, content_type: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_type(content_type.to_string()),
    )
}

pub fn text_file_form(file_name: &str, text: &str) -> MultipartForm {
    file_form(file_name, "text/plain", text.as_bytes().to_vec())
}
