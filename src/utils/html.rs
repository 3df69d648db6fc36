//! HTML handling for server-rendered previews.

/// Sanitize server-rendered HTML before it is injected into the page.
///
/// The server already renders markdown and highlighted source; `ammonia`
/// strips scripts, event handlers and other XSS vectors that may still
/// be present in user content.
pub fn sanitize_html(html: &str) -> String {
    ammonia::clean(html)
}

/// `data:` URL for base64 content with the given MIME type.
pub fn data_url(mime_type: &str, base64: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_script() {
        let clean = sanitize_html("<p>hi</p><script>alert(1)</script>");
        assert_eq!(clean, "<p>hi</p>");
    }

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", "iVBO"), "data:image/png;base64,iVBO");
    }
}
