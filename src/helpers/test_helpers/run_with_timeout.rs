use super::*;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Best effort at getting the message out of a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Runs f on its own thread and hands back its result. Panics if f takes longer than limit, or
/// with f's own message if f panics.
pub fn run_with_specific_timeout<T, F>(limit: Duration, f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (result_tx, result_rx) = channel();
    let worker = thread::spawn(move || {
        // the receiver is only gone if we already timed out
        let _ = result_tx.send(f());
    });
    match result_rx.recv_timeout(limit) {
        Ok(result) => result,
        Err(Timeout) => panic!("thread timed out after {:?}", limit),
        Err(Disconnected) => match worker.join() {
            Err(payload) => panic!("thread panicked: {}", panic_message(&*payload)),
            Ok(()) => unreachable!("sender dropped without sending or panicking"),
        },
    }
}

pub fn run_with_timeout<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    run_with_specific_timeout(TEST_TIMEOUT, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_back_result() {
        let result = run_with_timeout(move || {
            thread::sleep(Duration::from_millis(20));
            12
        });
        assert_eq!(result, 12);
    }

    #[test]
    #[should_panic(expected = "timed out")]
    fn slow_fn_times_out() {
        run_with_specific_timeout(Duration::from_millis(50), move || {
            thread::sleep(Duration::from_secs(5));
        });
    }

    #[test]
    #[should_panic(expected = "this is fine")]
    fn panic_message_is_passed_on() {
        run_with_timeout(move || {
            panic!("this is fine");
        });
    }

    #[test]
    fn panic_message_of_formatted_panic() {
        let payload: Box<dyn Any + Send> = Box::new(format!("code {}", 7));
        assert_eq!(panic_message(&*payload), "code 7");
    }
}
