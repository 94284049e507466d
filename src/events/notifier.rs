use super::*;

/// Returned by Notifier::subscribe(), used instead of a raw bool for code readablity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub struct SubscribeReport {
    /// False if the subscription was dropped (only bounded notifiers do this)
    pub accepted: bool,
    pub was_empty: bool,
}

/// Returned by Notifier::unsubscribe(), used instead of a raw bool for code readablity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub struct UnsubscribeReport {
    pub was_subscribed: bool,
    pub is_now_empty: bool,
}

/// An ordered list of subscribers that are notified synchronously, in subscription order, each
/// time an event is published.
///
/// The same subscriber can be in the list more than once, in which case it's notified once per
/// subscription. Subscribers are compared by the thin pointer of their Arc, so unsubscribing needs
/// a clone of the Arc that was subscribed.
///
/// publish() works on a snapshot of the list taken before the first subscriber is notified. This
/// means subscribers may subscribe and unsubscribe (themselves or others) from inside notify()
/// without deadlocking, and those changes are seen starting with the next publish().
pub struct Notifier<T> {
    subscribers: Mutex<Vec<Arc<dyn Subscriber<T>>>>,
}

impl<T> Notifier<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Append a subscriber to the end of the list
    pub fn subscribe(&self, subscriber: &Arc<dyn Subscriber<T>>) -> SubscribeReport {
        self.subscribe_if(subscriber, |_| true)
    }

    /// Appends the subscriber only if admit() returns true when given the current subscriber
    /// count. The check and the append happen under the same lock.
    pub(super) fn subscribe_if<F>(
        &self,
        subscriber: &Arc<dyn Subscriber<T>>,
        admit: F,
    ) -> SubscribeReport
    where
        F: FnOnce(usize) -> bool,
    {
        let mut list = self.lock();
        let was_empty = list.is_empty();
        let accepted = admit(list.len());
        if accepted {
            list.push(subscriber.clone());
        }
        SubscribeReport {
            accepted,
            was_empty,
        }
    }

    /// Remove the first occurrence of the subscriber. Does nothing if it isn't subscribed.
    #[allow(dead_code)]
    pub fn unsubscribe(&self, subscriber: &Arc<dyn Subscriber<T>>) -> UnsubscribeReport {
        let subscriber_ptr = subscriber.thin_ptr();
        let mut list = self.lock();
        let was_subscribed = match list.iter().position(|s| s.thin_ptr() == subscriber_ptr) {
            Some(i) => {
                // not swap_remove(), order matters
                list.remove(i);
                true
            }
            None => {
                trace!("unsubscribed subscriber was not subscribed");
                false
            }
        };
        UnsubscribeReport {
            was_subscribed,
            is_now_empty: list.is_empty(),
        }
    }

    /// Notify every subscriber in order. Stops at and returns the first error a subscriber
    /// returns, later subscribers are not notified.
    pub fn publish(&self, event: &T) -> Result<(), Box<dyn Error>> {
        let snapshot = self.lock().clone();
        for subscriber in &snapshot {
            subscriber.notify(event)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<Vec<Arc<dyn Subscriber<T>>>> {
        self.subscribers.lock().expect("failed to lock subscribers")
    }
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}
