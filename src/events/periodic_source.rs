use super::*;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Publishes an empty event on its notifier once per interval, forever, on its own thread.
///
/// Each tick sleeps for the full interval and then publishes, so time spent in subscribers adds
/// up as drift. There is no way to stop the thread; it ends when the process does.
pub struct PeriodicSource {
    interval: Duration,
    notifier: Arc<Notifier<()>>,
}

impl PeriodicSource {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            notifier: Arc::new(Notifier::new()),
        }
    }

    /// Subscribe here to be notified each tick. Safe to subscribe after start().
    pub fn notifier(&self) -> &Arc<Notifier<()>> {
        &self.notifier
    }

    /// Sleep for one interval, then notify subscribers. A failing subscriber is logged; there is
    /// nobody on the tick thread to return the error to.
    pub fn tick(&self) {
        thread::sleep(self.interval);
        trace!("tick");
        self.notifier
            .publish(&())
            .or_log_error("tick subscriber failed");
    }

    /// Spawn the tick thread. The returned handle may be dropped, which detaches the thread.
    pub fn start(self) -> io::Result<thread::JoinHandle<()>> {
        info!("ticking every {:?}", self.interval);
        thread::Builder::new()
            .name("periodic-source".to_string())
            .spawn(move || loop {
                self.tick();
            })
    }
}
