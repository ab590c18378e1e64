//! Content types by file extension.

use std::path::Path;

/// Content type for anything not in the table.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type of the default document and the fallback pages.
pub const TEXT_HTML: &str = "text/html";

/// Extension table. Matching is exact, so `.HTML` is not `text/html`.
const TYPES: [(&str, &str); 10] = [
    ("html", TEXT_HTML),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
];

/// Looks up the content type for a path by its final extension.
pub fn content_type_for(path: impl AsRef<Path>) -> &'static str {
    let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
        return OCTET_STREAM;
    };

    TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map_or(OCTET_STREAM, |&(_, content_type)| content_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("index.html", "text/html")]
    #[test_case("styles.css", "text/css")]
    #[test_case("script.js", "text/javascript")]
    #[test_case("data/pages.json", "application/json")]
    #[test_case("logo.png", "image/png")]
    #[test_case("photo.jpg", "image/jpeg")]
    #[test_case("photo.jpeg", "image/jpeg")]
    #[test_case("spinner.gif", "image/gif")]
    #[test_case("icons/sprite.svg", "image/svg+xml")]
    #[test_case("favicon.ico", "image/x-icon")]
    fn known_extensions(path: &str, expected: &str) {
        assert_eq!(content_type_for(path), expected);
    }

    #[test_case("archive.tar.gz"; "unknown extension")]
    #[test_case("README"; "no extension")]
    #[test_case(".html"; "dotfile is not an extension")]
    #[test_case("INDEX.HTML"; "matching is case sensitive")]
    fn falls_back_to_octet_stream(path: &str) {
        assert_eq!(content_type_for(path), OCTET_STREAM);
    }

    #[test]
    fn only_the_last_extension_counts() {
        assert_eq!(content_type_for("bundle.min.js"), "text/javascript");
    }
}
