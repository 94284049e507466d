use super::*;

mod bank_account;

pub use bank_account::BankAccount;
