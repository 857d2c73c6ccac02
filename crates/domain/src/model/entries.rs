use std::collections::HashMap;

use arborealize_shared_kernel::DirPath;

use super::FileEntry;

/// Files observed during a walk, grouped by their containing directory.
///
/// Keys are normalised through [`DirPath::parse`], so `""` and `"/"` both
/// address the scan root and `"docs"` is the same key as `"docs/"`. Ancestor
/// directories do not need their own keys.
#[derive(Debug, Clone, Default)]
pub struct EntriesByPath {
    entries: HashMap<DirPath, Vec<FileEntry>>,
}

impl EntriesByPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` to the files of `dir`, keeping observation order.
    pub fn insert(&mut self, dir: impl Into<DirPath>, entry: FileEntry) {
        self.entries.entry(dir.into()).or_default().push(entry);
    }

    /// Removes and returns the files recorded for `dir`.
    pub fn take(&mut self, dir: &DirPath) -> Vec<FileEntry> {
        self.entries.remove(dir).unwrap_or_default()
    }

    /// Directories that directly hold at least one file.
    pub fn populated_dirs(&self) -> impl Iterator<Item = &DirPath> {
        self.entries.iter().filter(|(_, files)| !files.is_empty()).map(|(dir, _)| dir)
    }

    pub fn dir_count(&self) -> usize {
        self.entries.len()
    }

    pub fn file_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(DirPath, FileEntry)> for EntriesByPath {
    fn from_iter<I: IntoIterator<Item = (DirPath, FileEntry)>>(iter: I) -> Self {
        let mut entries = Self::new();
        for (dir, entry) in iter {
            entries.insert(dir, entry);
        }
        entries
    }
}

impl<K: AsRef<[u8]>> From<HashMap<K, Vec<FileEntry>>> for EntriesByPath {
    fn from(map: HashMap<K, Vec<FileEntry>>) -> Self {
        let mut entries = Self::new();
        for (dir, files) in map {
            entries.entries.entry(DirPath::parse(dir)).or_default().extend(files);
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalised() {
        let mut entries = EntriesByPath::new();
        entries.insert("docs", FileEntry::new("a.md", 1));
        entries.insert("docs/", FileEntry::new("b.md", 2));
        entries.insert("/", FileEntry::new("top.txt", 3));

        assert_eq!(entries.dir_count(), 2);
        assert_eq!(entries.file_count(), 3);
        assert_eq!(entries.take(&DirPath::parse("docs/")).len(), 2);
        assert_eq!(entries.take(&DirPath::root()).len(), 1);
    }

    #[test]
    fn take_removes_the_key() {
        let mut entries: EntriesByPath =
            [(DirPath::parse("a/"), FileEntry::new("x", 1))].into_iter().collect();
        assert_eq!(entries.take(&DirPath::parse("a/")).len(), 1);
        assert!(entries.take(&DirPath::parse("a/")).is_empty());
        assert!(entries.is_empty());
    }

    #[test]
    fn empty_lists_are_not_populated() {
        let map: HashMap<&str, Vec<FileEntry>> =
            HashMap::from([("empty/", Vec::new()), ("full/", vec![FileEntry::new("f", 0)])]);
        let entries = EntriesByPath::from(map);
        let populated: Vec<_> = entries.populated_dirs().map(DirPath::as_bytes).collect();
        assert_eq!(populated, [b"full/"]);
    }
}
