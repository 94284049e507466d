use super::*;

/// Collects printed lines in order
#[derive(Clone)]
pub struct MockConsole(Arc<Mutex<Vec<String>>>);

impl MockConsole {
    pub fn new() -> Self {
        MockConsole(Arc::new(Mutex::new(Vec::new())))
    }

    pub fn get(&self) -> Console {
        Arc::new(self.clone())
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl ConsoleTrait for MockConsole {
    fn print_line(&self, line: &str) {
        self.0.lock().unwrap().push(line.to_string());
    }
}
