use super::*;

/// How many handlers a button's click event accepts
pub const CLICK_CAPACITY: usize = 3;

/// A Notifier that holds at most a fixed number of subscribers. Subscribing when full is not an
/// error, the subscription is silently dropped (the report says so for anyone who cares).
/// Unsubscribing is always allowed and frees up a slot.
pub struct BoundedNotifier<T> {
    inner: Notifier<T>,
    capacity: usize,
}

impl<T> BoundedNotifier<T> {
    pub fn new() -> Self {
        Self::with_capacity(CLICK_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Notifier::new(),
            capacity,
        }
    }

    pub fn subscribe(&self, subscriber: &Arc<dyn Subscriber<T>>) -> SubscribeReport {
        let capacity = self.capacity;
        let report = self.inner.subscribe_if(subscriber, |len| len < capacity);
        if !report.accepted {
            debug!(
                "dropped subscription, notifier is full ({} subscribers)",
                capacity
            );
        }
        report
    }

    #[allow(dead_code)]
    pub fn unsubscribe(&self, subscriber: &Arc<dyn Subscriber<T>>) -> UnsubscribeReport {
        self.inner.unsubscribe(subscriber)
    }

    pub fn publish(&self, event: &T) -> Result<(), Box<dyn Error>> {
        self.inner.publish(event)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> Default for BoundedNotifier<T> {
    fn default() -> Self {
        Self::new()
    }
}
