//! Image format sniffing for the binary image part sent to the model.

/// Detect the image format tag for raw image bytes.
///
/// The converse endpoint expects one of `png`, `jpeg`, `gif`, or `webp`.
/// Unrecognized data falls back to `png`, which is what the paired image
/// generator produces.
pub fn detect_image_format(bytes: &[u8]) -> &'static str {
    match infer::get(bytes).map(|kind| kind.mime_type()) {
        Some("image/jpeg") => "jpeg",
        Some("image/gif") => "gif",
        Some("image/webp") => "webp",
        _ => "png",
    }
}
