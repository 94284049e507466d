use super::*;

use std::{fs::OpenOptions, io::Write};

/// A mockable interface to the filesystem
pub trait FilesystemTrait: Send + Sync {
    /// Like std::path::Path::is_file()
    fn is_file(&self, path: &str) -> bool;
    /// Like std::fs::read_to_string()
    fn read_to_string(&self, path: &str) -> io::Result<String>;
    /// Appends contents to the end of the file, creating it if needed. Never truncates.
    fn append(&self, path: &str, contents: &str) -> io::Result<()>;
}

pub type Filesystem = Arc<dyn FilesystemTrait>;

pub fn real_filesystem() -> Filesystem {
    Arc::new(FilesystemImpl)
}

struct FilesystemImpl;

impl FilesystemTrait for FilesystemImpl {
    fn is_file(&self, path: &str) -> bool {
        std::path::Path::new(path).is_file()
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn append(&self, path: &str, contents: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        // one write_all() so a record is never split between two appends
        file.write_all(contents.as_bytes())
    }
}
