use super::*;

/// Counts ticks and prints the running total
pub struct Counter {
    count: AtomicU64,
    console: Console,
}

impl Counter {
    pub fn subscribe_to(notifier: &Notifier<()>, console: Console) -> Arc<Self> {
        let counter = Arc::new(Self {
            count: AtomicU64::new(0),
            console,
        });
        notifier.subscribe(&(counter.clone() as Arc<dyn Subscriber<()>>));
        counter
    }

    #[cfg(test)]
    pub fn count(&self) -> u64 {
        self.count.load(SeqCst)
    }
}

impl Subscriber<()> for Counter {
    fn notify(&self, _: &()) -> Result<(), Box<dyn Error>> {
        let count = self.count.fetch_add(1, SeqCst) + 1;
        self.console.print_line(&format!("Counter: {}", count));
        Ok(())
    }
}
