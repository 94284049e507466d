//! Wires up the three notification graphs and runs through them once

use super::*;

/// Runs the demo to completion: starts the timer, moves some money, then waits for the trigger key
/// and clicks the button. The timer thread is left running; it dies with the process.
pub fn run(
    conf: &MasterConfig,
    console: Console,
    fs: Filesystem,
    mut keys: KeySource,
) -> Result<(), Box<dyn Error>> {
    let timer = PeriodicSource::new(conf.tick_interval);
    Clock::subscribe_to(timer.notifier(), console.clone());
    Counter::subscribe_to(timer.notifier(), console.clone());
    // dropping the handle detaches the thread, it is never joined
    timer.start()?;

    let mut account = BankAccount::new(console.clone());
    AccountLogger::subscribe_to(account.balance_changed(), fs, &conf.balance_log_path);
    account.deposit(Decimal::from(1000))?;
    account.withdraw(Decimal::from(500))?;
    console.print_line(&format!(
        "Current balance: {}",
        format_currency(account.balance())
    ));

    let mut button = Button::new(console.clone());
    button.set_text("Click Me");
    for n in 1..=3 {
        let console = console.clone();
        button.click_event().subscribe(&subscriber_fn(move |_: &()| {
            console.print_line(&format!("Button was clicked ({})", n));
            Ok(())
        }));
    }

    console.print_line(&format!(
        "Press {} to click the button.",
        conf.trigger_key.name()
    ));
    wait_for_key(keys.as_mut(), conf.trigger_key)?;
    // restores the terminal before anything else is printed
    drop(keys);

    button.click()
}
