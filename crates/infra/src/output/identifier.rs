use std::fmt::Write;

use arborealize_shared_kernel::DirPath;

/// Identifier shared by the root checkbox and its label.
pub const ROOT_TOGGLE_ID: &str = "root";

/// Identifier pairing a directory's checkbox with its label.
///
/// Works on the raw path bytes. ASCII alphanumerics are kept, the path separator becomes `_` and every
/// other byte becomes `-` followed by two lowercase hex digits. Since `_` and
/// `-` only ever come from those two rules, distinct paths give distinct
/// identifiers, and the result is a single token safe in any attribute. A
/// non-root path always ends in `/`, so its identifier ends in `_` and can
/// never collide with [`ROOT_TOGGLE_ID`].
pub fn toggle_id(path: &DirPath) -> String {
    if path.is_root() {
        return ROOT_TOGGLE_ID.to_string();
    }
    let mut id = String::with_capacity(path.as_bytes().len());
    for &byte in path.as_bytes() {
        match byte {
            b'/' => id.push('_'),
            b if b.is_ascii_alphanumeric() => id.push(char::from(b)),
            b => {
                let _ = write!(id, "-{b:02x}");
            }
        }
    }
    id
}
