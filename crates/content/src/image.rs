//! Image-serving helper.
//!
//! The image CDN resizes on the fly from URL parameters; the renderer treats
//! it as opaque and only ever appends a target size.

/// CDN URL for `url` resized to `width` x `height` (cropped, auto format).
pub fn sized(url: &str, width: u32, height: u32) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}w={width}&h={height}&fit=crop&auto=format")
}
