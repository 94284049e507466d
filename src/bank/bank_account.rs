use super::*;

/// Holds a balance and notifies subscribers after every successful change to it
pub struct BankAccount {
    balance: Decimal,
    balance_changed: Notifier<Decimal>,
    console: Console,
}

impl BankAccount {
    pub fn new(console: Console) -> Self {
        Self {
            balance: Decimal::ZERO,
            balance_changed: Notifier::new(),
            console,
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Published with the new balance after each successful deposit or withdrawal
    pub fn balance_changed(&self) -> &Notifier<Decimal> {
        &self.balance_changed
    }

    /// Amount is not checked, a negative deposit lowers the balance. Fails without changing
    /// anything if the balance would overflow. Also fails if a subscriber does, the balance has
    /// already changed by then.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Box<dyn Error>> {
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            format!("balance overflow depositing {} into {}", amount, self.balance)
        })?;
        debug!("deposited {}, balance is {}", amount, self.balance);
        self.balance_changed.publish(&self.balance)
    }

    /// If the amount is more than the balance nothing changes, nobody is notified and "Insufficient
    /// funds" is printed. That is not an error.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Box<dyn Error>> {
        if amount <= self.balance {
            self.balance = self.balance.checked_sub(amount).ok_or_else(|| {
                format!("balance overflow withdrawing {} from {}", amount, self.balance)
            })?;
            debug!("withdrew {}, balance is {}", amount, self.balance);
            self.balance_changed.publish(&self.balance)
        } else {
            warn!(
                "can not withdraw {} from balance of {}",
                amount, self.balance
            );
            self.console.print_line("Insufficient funds");
            Ok(())
        }
    }
}
