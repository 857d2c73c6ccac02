// crates/shared-kernel/src/path.rs
use std::{
    borrow::Cow,
    ffi::OsStr,
    path::{Component, Path, PathBuf},
};

use crate::{InfraResult, InfrastructureError, value_objects::DirPath};

/// Current working directory, surfaced as a fatal infrastructure error when unavailable.
pub fn current_dir() -> InfraResult<PathBuf> {
    std::env::current_dir().map_err(|source| InfrastructureError::CurrentDir { source })
}

/// Display form of a scan root: lossy UTF-8 with exactly one trailing `/`.
pub fn root_label(path: &Path) -> String {
    let mut label = path.to_string_lossy().into_owned();
    if !label.ends_with('/') {
        label.push('/');
    }
    label
}

/// Raw bytes of an OS-provided name.
///
/// Unix names are returned verbatim. Other platforms have no byte view of
/// `OsStr`, so the name goes through a lossy UTF-8 conversion there.
#[cfg(unix)]
pub fn os_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(name.as_bytes())
}

#[cfg(not(unix))]
pub fn os_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    match name.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}

/// Relative directory key of `dir` below `root`, e.g. `docs/img/`.
///
/// Returns `None` when `dir` is not inside `root`. Only normal components
/// contribute segments, so the key never contains `.` or `..`.
pub fn relative_dir(root: &Path, dir: &Path) -> Option<DirPath> {
    let rel = dir.strip_prefix(root).ok()?;
    let path = rel.components().fold(DirPath::root(), |acc, component| match component {
        Component::Normal(segment) => acc.join(os_bytes(segment)),
        _ => acc,
    });
    Some(path)
}
