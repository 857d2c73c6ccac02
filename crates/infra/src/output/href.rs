use arborealize_shared_kernel::{DirPath, FileName};

/// Relative link to a file: its directory path followed by its name.
///
/// Each segment is percent-encoded from the raw name bytes, so every name
/// maps to a distinct link even when it is not valid UTF-8. Separators are
/// kept. The result only holds unreserved URL characters, `%` and `/`, and
/// needs no further escaping inside an attribute.
pub fn file_href(dir: &DirPath, name: &FileName) -> String {
    let mut href = String::with_capacity(dir.as_bytes().len() + name.as_bytes().len());
    for segment in dir.segments() {
        href.push_str(&urlencoding::encode_binary(segment));
        href.push('/');
    }
    href.push_str(&urlencoding::encode_binary(name.as_bytes()));
    href
}
