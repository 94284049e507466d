use super::*;

struct MockSubscriberInner<T> {
    events: Mutex<Vec<T>>,
    f: Box<dyn Fn(&T) -> Result<(), Box<dyn Error>> + Send + Sync>,
}

/// Records every event it's notified with
pub struct MockSubscriber<T>(Arc<MockSubscriberInner<T>>);

impl<T: Clone + Send + Sync + 'static> MockSubscriber<T> {
    pub fn new() -> Self {
        Self::new_with_fn(|_| Ok(()))
    }

    /// Records the event, then fails with the given message
    pub fn new_failing(message: &'static str) -> Self {
        Self::new_with_fn(move |_| Err(message.into()))
    }

    pub fn new_with_fn<F>(f: F) -> Self
    where
        F: Fn(&T) -> Result<(), Box<dyn Error>> + Send + Sync + 'static,
    {
        Self(Arc::new(MockSubscriberInner {
            events: Mutex::new(Vec::new()),
            f: Box::new(f),
        }))
    }

    pub fn get(&self) -> Arc<dyn Subscriber<T>> {
        self.0.clone()
    }

    pub fn notify_count(&self) -> u32 {
        self.0.events.lock().unwrap().len() as u32
    }

    pub fn events(&self) -> Vec<T> {
        self.0.events.lock().unwrap().clone()
    }
}

impl<T: Clone + Send + Sync> Subscriber<T> for MockSubscriberInner<T> {
    fn notify(&self, event: &T) -> Result<(), Box<dyn Error>> {
        self.events.lock().unwrap().push(event.clone());
        (self.f)(event)
    }
}
