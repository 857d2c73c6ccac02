// crates/shared-kernel/src/value_objects/file_info.rs
use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// Separator used in every relative directory path handled by the workspace.
pub const SEPARATOR: u8 = b'/';

/// Base name of a file or directory, kept as the raw bytes the OS reported.
///
/// Names are only turned into text for display; two names that differ in
/// any byte stay distinct even when neither is valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileName(#[serde(with = "name_bytes")] Vec<u8>);

impl FileName {
    #[must_use]
    pub fn new(name: impl Into<Vec<u8>>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display text; invalid UTF-8 sequences become U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<String> for FileName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for FileName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Vec<u8>> for FileName {
    fn from(name: Vec<u8>) -> Self {
        Self(name)
    }
}

impl From<&[u8]> for FileName {
    fn from(name: &[u8]) -> Self {
        Self::new(name)
    }
}

impl AsRef<[u8]> for FileName {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

/// Slash-terminated directory path relative to the scan root.
///
/// The scan root itself is the empty path. Every other value is a sequence of
/// non-empty segments, each followed by [`SEPARATOR`], e.g. `docs/img/`.
/// Segments are raw name bytes, like [`FileName`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirPath(#[serde(with = "name_bytes")] Vec<u8>);

impl DirPath {
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Normalises a raw key: empty segments are dropped and a trailing
    /// separator is appended, so `"a//b"`, `"a/b"` and `"a/b/"` are equal.
    #[must_use]
    pub fn parse(raw: impl AsRef<[u8]>) -> Self {
        raw.as_ref()
            .split(|&byte| byte == SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .fold(Self::root(), |path, segment| path.join(segment))
    }

    /// Appends one segment and the trailing separator.
    #[must_use]
    pub fn join(&self, segment: impl AsRef<[u8]>) -> Self {
        let segment = segment.as_ref();
        let mut joined = Vec::with_capacity(self.0.len() + segment.len() + 1);
        joined.extend_from_slice(&self.0);
        joined.extend_from_slice(segment);
        joined.push(SEPARATOR);
        Self(joined)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Non-empty segments from the root downwards.
    pub fn segments(&self) -> impl Iterator<Item = &[u8]> {
        self.0.split(|&byte| byte == SEPARATOR).filter(|segment| !segment.is_empty())
    }

    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<&str> for DirPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for DirPath {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl From<&[u8]> for DirPath {
    fn from(raw: &[u8]) -> Self {
        Self::parse(raw)
    }
}

impl AsRef<[u8]> for DirPath {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for DirPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

// UTF-8 names serialise as strings, anything else as a byte array.
mod name_bytes {
    use std::fmt;

    use serde::{Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        match std::str::from_utf8(bytes) {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.serialize_bytes(bytes),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        deserializer.deserialize_any(NameVisitor)
    }

    struct NameVisitor;

    impl<'de> de::Visitor<'de> for NameVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or an array of bytes")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(value.as_bytes().to_vec())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(value.into_bytes())
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Ok(value.to_vec())
        }

        fn visit_byte_buf<E: de::Error>(self, value: Vec<u8>) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(byte) = seq.next_element::<u8>()? {
                bytes.push(byte);
            }
            Ok(bytes)
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    const UNITS: [&'static str; 6] = ["bytes", "KB", "MB", "GB", "TB", "PB"];

    #[inline]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    /// Integer-truncated base-1024 representation, e.g. `2 KB` for 2048 bytes.
    ///
    /// Values past the petabyte range stay in `PB`.
    pub fn to_human(self) -> String {
        let mut value = self.0;
        let mut unit = 0;
        while value >= 1024 && unit < Self::UNITS.len() - 1 {
            value /= 1024;
            unit += 1;
        }
        format!("{value} {}", Self::UNITS[unit])
    }
}

impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self::new(bytes)
    }
}

impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.bytes()
    }
}

impl std::ops::Add for FileSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for FileSize {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, size| acc + size)
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}", self.to_human())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
