use super::*;

#[derive(Debug)]
struct MockFilesystemInner {
    map: HashMap<String, String>,
    read_only: bool,
}

#[derive(Debug, Clone)]
pub struct MockFilesystem(Arc<Mutex<MockFilesystemInner>>);

impl MockFilesystem {
    pub fn new() -> Self {
        MockFilesystem(Arc::new(Mutex::new(MockFilesystemInner {
            map: HashMap::new(),
            read_only: false,
        })))
    }

    pub fn add_file(self, path: &str, contents: &str) -> Self {
        self.0
            .lock()
            .unwrap()
            .map
            .insert(path.to_string(), contents.to_string());
        self
    }

    /// Makes every append() fail
    pub fn read_only(self) -> Self {
        self.0.lock().unwrap().read_only = true;
        self
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().map.get(path).cloned()
    }

    pub fn get(&self) -> Filesystem {
        Arc::new(self.clone())
    }
}

impl FilesystemTrait for MockFilesystem {
    fn is_file(&self, path: &str) -> bool {
        let fs = self.0.lock().unwrap();
        fs.map.get(path).is_some()
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        let fs = self.0.lock().unwrap();
        match fs.map.get(path) {
            Some(contents) => Ok(contents.clone()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "file not found")),
        }
    }

    fn append(&self, path: &str, contents: &str) -> io::Result<()> {
        let mut fs = self.0.lock().unwrap();
        if fs.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only filesystem",
            ));
        }
        fs.map.entry(path.to_string()).or_default().push_str(contents);
        Ok(())
    }
}
