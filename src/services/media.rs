//! Media URL helpers

use crate::models::{MediaDocument, ProductDocument};

/// Make a stored media URL usable from any page.
///
/// Absolute `http(s)://` and `data:` URLs are kept; relative upload paths are
/// joined onto `base` (an origin such as `https://shop.example`).
pub fn resolve_media_url(url: &str, base: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("data:") {
        return url.to_string();
    }
    let base = base.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{}{}", base, url)
    } else {
        format!("{}/{}", base, url)
    }
}

/// Embeddable player URL for a YouTube watch link
pub fn youtube_embed_url(url: &str) -> String {
    if url.contains("watch?v=") {
        url.replacen("watch?v=", "embed/", 1)
    } else {
        url.to_string()
    }
}

/// Fill the `display_*` fields of a product document with URLs resolved
/// against `base`. Stored URLs are returned untouched.
pub fn resolve_document_urls(doc: &mut ProductDocument, base: &str) {
    fn resolve_all(media: &mut [MediaDocument], base: &str) {
        for m in media {
            m.display_url = Some(resolve_media_url(&m.url, base));
        }
    }

    doc.display_image_url = doc
        .image_url
        .as_deref()
        .map(|url| resolve_media_url(url, base));
    for variant in &mut doc.variants {
        resolve_all(&mut variant.media, base);
    }
    for color in &mut doc.colors {
        resolve_all(&mut color.media, base);
    }
}
