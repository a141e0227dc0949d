//! Filename extraction from URL path.

/// Returns the substring after the last `/` in `url`.
///
/// No parsing or validation: a URL without `/` yields itself, a URL ending
/// in `/` yields `""`, and query strings or fragments are kept as-is.
pub fn derive_filename(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

/// True if `name` can be joined onto a directory and still name a file inside it.
pub fn is_addressable(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('\\') && !name.contains('\0')
}
