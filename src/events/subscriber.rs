use super::*;

/// Something that reacts each time a notifier it is subscribed to publishes an event.
pub trait Subscriber<T>: Send + Sync {
    fn notify(&self, event: &T) -> Result<(), Box<dyn Error>>;
}

impl<T, F> Subscriber<T> for F
where
    F: Fn(&T) -> Result<(), Box<dyn Error>> + Send + Sync,
{
    fn notify(&self, event: &T) -> Result<(), Box<dyn Error>> {
        self(event)
    }
}

/// Wraps a closure into a subscriber handle. The returned Arc is the subscriber's identity, keep a
/// clone of it around if it needs to be unsubscribed later.
pub fn subscriber_fn<T, F>(f: F) -> Arc<dyn Subscriber<T>>
where
    T: 'static,
    F: Fn(&T) -> Result<(), Box<dyn Error>> + Send + Sync + 'static,
{
    Arc::new(f)
}
