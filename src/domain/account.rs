//! Monetary accounts and their per-variant withdrawal policy.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};

use crate::errors::AccountError;

/// Represents a named, numbered monetary account.
///
/// All fields are private; the balance changes only through [`Account::deposit`]
/// and [`Account::withdraw`], and a failed operation leaves the account
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: String,
    holder: String,
    balance: f64,
    kind: AccountKind,
}

/// Enumerates the supported account variants.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    /// No withdrawal frequency restriction.
    Regular,
    /// Restricted to one withdrawal per calendar month. The timestamp is
    /// absent until the first successful withdrawal.
    Savings {
        last_withdrawal: Option<DateTime<Utc>>,
    },
}

impl AccountKind {
    /// A savings variant with no withdrawals recorded yet.
    pub fn savings() -> Self {
        AccountKind::Savings {
            last_withdrawal: None,
        }
    }
}

/// Lazily-derived withdrawal state of a savings account.
///
/// There is no timer: the state is recomputed from the stored timestamp and
/// a caller-supplied "now" on each inquiry or withdrawal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalActivity {
    Never,
    ThisMonth,
    PriorMonth,
}

impl Account {
    /// Creates an account with a zero balance.
    pub fn new(number: impl Into<String>, holder: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            number: number.into(),
            holder: holder.into(),
            balance: 0.0,
            kind,
        }
    }

    /// Creates an account with the given opening balance.
    ///
    /// A negative (or non-finite) opening balance is rejected with
    /// [`AccountError::InvalidAmount`].
    pub fn open(
        number: impl Into<String>,
        holder: impl Into<String>,
        kind: AccountKind,
        opening_balance: f64,
    ) -> Result<Self, AccountError> {
        if !opening_balance.is_finite() || opening_balance < 0.0 {
            return Err(AccountError::InvalidAmount(opening_balance));
        }
        let mut account = Self::new(number, holder, kind);
        account.balance = opening_balance;
        Ok(account)
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Adds `amount` to the balance.
    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        validate_amount(amount)?;
        self.balance += amount;
        Ok(())
    }

    /// Removes `amount` from the balance.
    ///
    /// For savings accounts the monthly-limit check runs before the amount
    /// and balance checks, so a limit violation is reported even when the
    /// amount is also invalid. On success the savings variant records `now`
    /// as its last withdrawal.
    pub fn withdraw(&mut self, amount: f64, now: DateTime<Utc>) -> Result<(), AccountError> {
        if let AccountKind::Savings {
            last_withdrawal: Some(last),
        } = &self.kind
        {
            if same_calendar_month(*last, now) {
                return Err(AccountError::WithdrawalLimitExceeded { last: *last });
            }
        }

        validate_amount(amount)?;
        if amount > self.balance {
            return Err(AccountError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        if let AccountKind::Savings { last_withdrawal } = &mut self.kind {
            *last_withdrawal = Some(now);
        }
        Ok(())
    }

    /// Returns the savings withdrawal state relative to `now`, or `None`
    /// for regular accounts.
    pub fn withdrawal_activity(&self, now: DateTime<Utc>) -> Option<WithdrawalActivity> {
        match &self.kind {
            AccountKind::Regular => None,
            AccountKind::Savings {
                last_withdrawal: None,
            } => Some(WithdrawalActivity::Never),
            AccountKind::Savings {
                last_withdrawal: Some(last),
            } => {
                if same_calendar_month(*last, now) {
                    Some(WithdrawalActivity::ThisMonth)
                } else {
                    Some(WithdrawalActivity::PriorMonth)
                }
            }
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "account {}, holder {}, balance {:.2}",
            self.number, self.holder, self.balance
        )?;
        if let AccountKind::Savings { last_withdrawal } = &self.kind {
            match last_withdrawal {
                Some(last) => write!(f, ", savings, last withdrawal {}", last.date_naive())?,
                None => write!(f, ", savings, no withdrawals yet")?,
            }
        }
        Ok(())
    }
}

fn validate_amount(amount: f64) -> Result<(), AccountError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AccountError::InvalidAmount(amount));
    }
    Ok(())
}

/// Two timestamps fall in the same calendar month only when both their year
/// and month match. December of one year never matches January or December
/// of the next.
fn same_calendar_month(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
