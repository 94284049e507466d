use super::*;

/// Appends a line to the balance log each time an account's balance changes
pub struct AccountLogger {
    fs: Filesystem,
    path: String,
}

impl AccountLogger {
    pub fn subscribe_to(notifier: &Notifier<Decimal>, fs: Filesystem, path: &str) -> Arc<Self> {
        let logger = Arc::new(Self {
            fs,
            path: path.to_string(),
        });
        notifier.subscribe(&(logger.clone() as Arc<dyn Subscriber<Decimal>>));
        logger
    }
}

impl Subscriber<Decimal> for AccountLogger {
    /// Fails if the log can't be appended to, which the account passes on to its caller
    fn notify(&self, balance: &Decimal) -> Result<(), Box<dyn Error>> {
        let record = format!(
            "{}: Balance changed to {}\n",
            log_timestamp(&Local::now()),
            format_currency(*balance)
        );
        debug!("appending to {}: {}", self.path, record.trim_end());
        self.fs
            .append(&self.path, &record)
            .map_err(|e| format!("failed to append to {}: {}", self.path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "balance_log.txt";

    #[test]
    fn appends_one_record_per_change() {
        let fs = MockFilesystem::new();
        let notifier = Notifier::new();
        let _logger = AccountLogger::subscribe_to(&notifier, fs.get(), PATH);
        notifier.publish(&Decimal::from(1000)).unwrap();
        notifier.publish(&Decimal::from(500)).unwrap();
        let contents = fs.contents(PATH).expect("log was not written");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(": Balance changed to $1,000.00"));
        assert!(lines[1].ends_with(": Balance changed to $500.00"));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn never_truncates_existing_log() {
        let fs = MockFilesystem::new().add_file(PATH, "older record\n");
        let notifier = Notifier::new();
        let _logger = AccountLogger::subscribe_to(&notifier, fs.get(), PATH);
        notifier.publish(&Decimal::from(5)).unwrap();
        let contents = fs.contents(PATH).unwrap();
        assert!(contents.starts_with("older record\n"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn append_failure_is_returned() {
        let fs = MockFilesystem::new().read_only();
        let notifier = Notifier::new();
        let _logger = AccountLogger::subscribe_to(&notifier, fs.get(), PATH);
        let err = notifier.publish(&Decimal::from(5)).unwrap_err();
        assert!(err.to_string().contains("failed to append to balance_log.txt"));
    }
}
