use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use crate::file_system::types::{AbsoluteFsPath, FileSystem, PathManipulation, ReadonlyFileSystem};

/// Flat in-memory file tree keyed by absolute POSIX path.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    files: Arc<Mutex<HashMap<AbsoluteFsPath, Vec<u8>>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init_with_files(&self, files: Vec<(&str, &str)>) {
        let mut tree = self.lock();
        for (path, content) in files {
            tree.insert(AbsoluteFsPath::new(path.to_string()), content.as_bytes().to_vec());
        }
    }

    /// Paths of every file currently in the tree, sorted.
    pub fn file_paths(&self) -> Vec<AbsoluteFsPath> {
        let mut paths: Vec<_> = self.lock().keys().cloned().collect();
        paths.sort();
        paths
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<AbsoluteFsPath, Vec<u8>>> {
        // A panicking test thread must not poison the tree for the others.
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PathManipulation for MockFileSystem {}

impl ReadonlyFileSystem for MockFileSystem {
    fn exists(&self, path: &AbsoluteFsPath) -> bool {
        self.lock().contains_key(path)
    }

    fn read_file(&self, path: &AbsoluteFsPath) -> io::Result<String> {
        let tree = self.lock();
        let content = tree.get(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("File {} not found", path))
        })?;
        String::from_utf8(content.clone())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl FileSystem for MockFileSystem {
    fn write_file(&self, path: &AbsoluteFsPath, data: &[u8]) -> io::Result<()> {
        self.lock().insert(path.clone(), data.to_vec());
        Ok(())
    }

    fn ensure_dir(&self, _path: &AbsoluteFsPath) -> io::Result<()> {
        // Directories are implicit in a flat tree.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_back_initial_files() {
        let fs = MockFileSystem::new();
        fs.init_with_files(vec![("/src/a.ts", "export type A = 1;")]);
        let path = AbsoluteFsPath::new("/src/a.ts".to_string());
        assert!(fs.exists(&path));
        assert_eq!(fs.read_file(&path).unwrap(), "export type A = 1;");
    }

    #[test]
    fn missing_file_is_not_found() {
        let fs = MockFileSystem::new();
        let err = fs
            .read_file(&AbsoluteFsPath::new("/missing.ts".to_string()))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn writes_are_visible_in_file_paths() {
        let fs = MockFileSystem::new();
        fs.write_file(&AbsoluteFsPath::new("/out/b.js".to_string()), b"x").unwrap();
        fs.write_file(&AbsoluteFsPath::new("/out/a.js".to_string()), b"y").unwrap();
        let paths: Vec<_> = fs.file_paths().into_iter().map(|p| p.into_string()).collect();
        assert_eq!(paths, vec!["/out/a.js", "/out/b.js"]);
    }
}
