use crate::file_system::types::{AbsoluteFsPath, FileSystem, PathManipulation, ReadonlyFileSystem};
use std::fs;
use std::io;

/// File system backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct NodeJSFileSystem;

impl NodeJSFileSystem {
    pub fn new() -> Self {
        NodeJSFileSystem
    }
}

impl PathManipulation for NodeJSFileSystem {}

impl ReadonlyFileSystem for NodeJSFileSystem {
    fn exists(&self, path: &AbsoluteFsPath) -> bool {
        path.as_path().exists()
    }

    fn read_file(&self, path: &AbsoluteFsPath) -> io::Result<String> {
        fs::read_to_string(path.as_path())
    }
}

impl FileSystem for NodeJSFileSystem {
    fn write_file(&self, path: &AbsoluteFsPath, data: &[u8]) -> io::Result<()> {
        fs::write(path.as_path(), data)
    }

    fn ensure_dir(&self, path: &AbsoluteFsPath) -> io::Result<()> {
        fs::create_dir_all(path.as_path())
    }
}
