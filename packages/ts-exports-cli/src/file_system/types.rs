use std::io;
use std::path::Path;

/// A fully qualified path in the file system, in POSIX form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AbsoluteFsPath(String);

impl AbsoluteFsPath {
    pub fn new(path: String) -> Self {
        AbsoluteFsPath(path)
    }

    pub fn from<P: AsRef<Path>>(path: P) -> Self {
        AbsoluteFsPath(path.as_ref().to_string_lossy().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for AbsoluteFsPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for AbsoluteFsPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl std::fmt::Display for AbsoluteFsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An abstraction over the path manipulation aspects of a file-system.
pub trait PathManipulation {
    /// Extension including the leading dot, or an empty string.
    fn extname(&self, path: &str) -> String {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        match file_name.rfind('.') {
            Some(0) | None => String::new(),
            Some(idx) => file_name[idx..].to_string(),
        }
    }

    fn dirname(&self, file: &str) -> String {
        match file.rfind('/') {
            Some(0) => "/".to_string(),
            Some(idx) => file[..idx].to_string(),
            None => ".".to_string(),
        }
    }

    fn basename(&self, path: &str) -> String {
        path.rsplit('/').next().unwrap_or(path).to_string()
    }

    fn join(&self, base_path: &str, paths: &[&str]) -> String {
        let mut joined = base_path.trim_end_matches('/').to_string();
        for segment in paths {
            joined.push('/');
            joined.push_str(segment.trim_start_matches("./").trim_matches('/'));
        }
        joined
    }
}

/// An abstraction over the read-only aspects of a file-system.
pub trait ReadonlyFileSystem: PathManipulation + Send + Sync {
    fn exists(&self, path: &AbsoluteFsPath) -> bool;
    fn read_file(&self, path: &AbsoluteFsPath) -> io::Result<String>;
}

/// A basic interface to abstract the underlying file-system.
pub trait FileSystem: ReadonlyFileSystem {
    fn write_file(&self, path: &AbsoluteFsPath, data: &[u8]) -> io::Result<()>;
    fn ensure_dir(&self, path: &AbsoluteFsPath) -> io::Result<()>;
}
