use super::*;

/// Prints the wall clock time on every tick
pub struct Clock {
    console: Console,
}

impl Clock {
    /// Create a clock that prints each time the given notifier publishes
    pub fn subscribe_to(notifier: &Notifier<()>, console: Console) -> Arc<Self> {
        let clock = Arc::new(Self { console });
        notifier.subscribe(&(clock.clone() as Arc<dyn Subscriber<()>>));
        clock
    }
}

impl Subscriber<()> for Clock {
    fn notify(&self, _: &()) -> Result<(), Box<dyn Error>> {
        self.console
            .print_line(&format!("Current time: {}", clock_time(&Local::now())));
        Ok(())
    }
}
