/// Host prepended to relative image paths found in the datasets.
pub const DEFAULT_CDN_HOST: &str = "https://acnhcdn.com/";

/// Turn a dataset image path into a fetchable URL.
///
/// Absolute `http(s)://` URLs pass through, relative paths are joined onto
/// `cdn_host`, and an empty path stays empty.
pub fn resolve_image_url(url: &str, cdn_host: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    match (cdn_host.ends_with('/'), url.starts_with('/')) {
        (true, true) => format!("{}{}", cdn_host, &url[1..]),
        (false, false) => format!("{}/{}", cdn_host, url),
        _ => format!("{}{}", cdn_host, url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_get_cdn_prefix() {
        assert_eq!(
            resolve_image_url("Furniture/FtrChair.png", DEFAULT_CDN_HOST),
            "https://acnhcdn.com/Furniture/FtrChair.png"
        );
        assert_eq!(
            resolve_image_url("/a.png", "https://cdn.example"),
            "https://cdn.example/a.png"
        );
        assert_eq!(
            resolve_image_url("a.png", "https://cdn.example"),
            "https://cdn.example/a.png"
        );
    }

    #[test]
    fn absolute_and_empty_pass_through() {
        assert_eq!(
            resolve_image_url("https://x.test/a.png", DEFAULT_CDN_HOST),
            "https://x.test/a.png"
        );
        assert_eq!(resolve_image_url("", DEFAULT_CDN_HOST), "");
    }
}
