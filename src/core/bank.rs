//! Session-scoped, in-memory account registry.

use chrono::{DateTime, Utc};

use crate::domain::account::Account;
use crate::errors::BankError;

/// Holds the accounts opened during a session, in insertion order.
///
/// The registry is exclusively owned by its caller; accounts live for the
/// duration of the process and are never persisted.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account, rejecting a duplicate account number.
    pub fn open_account(&mut self, account: Account) -> Result<(), BankError> {
        if self.account(account.number()).is_some() {
            return Err(BankError::DuplicateNumber(account.number().to_string()));
        }
        tracing::debug!(number = account.number(), "account opened");
        self.accounts.push(account);
        Ok(())
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number() == number)
    }

    pub fn account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number() == number)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Deposits into the numbered account and returns the new balance.
    pub fn deposit(&mut self, number: &str, amount: f64) -> Result<f64, BankError> {
        let account = self
            .account_mut(number)
            .ok_or_else(|| BankError::AccountNotFound(number.to_string()))?;
        account.deposit(amount)?;
        tracing::debug!(number, amount, "deposit accepted");
        Ok(account.balance())
    }

    /// Withdraws from the numbered account and returns the new balance.
    pub fn withdraw(
        &mut self,
        number: &str,
        amount: f64,
        now: DateTime<Utc>,
    ) -> Result<f64, BankError> {
        let account = self
            .account_mut(number)
            .ok_or_else(|| BankError::AccountNotFound(number.to_string()))?;
        account.withdraw(amount, now)?;
        tracing::debug!(number, amount, "withdrawal accepted");
        Ok(account.balance())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::account::AccountKind;

    use super::*;

    #[test]
    fn duplicate_numbers_are_rejected() {
        let mut bank = Bank::new();
        bank.open_account(Account::new("7", "Avery Quinn", AccountKind::Regular))
            .unwrap();

        let err = bank
            .open_account(Account::new("7", "Morgan Reyes", AccountKind::savings()))
            .unwrap_err();

        assert!(matches!(err, BankError::DuplicateNumber(_)));
        assert_eq!(bank.accounts().len(), 1);
    }

    #[test]
    fn missing_accounts_are_reported() {
        let mut bank = Bank::new();

        let err = bank.deposit("missing", 10.0).unwrap_err();

        assert!(matches!(err, BankError::AccountNotFound(_)));
    }
}
