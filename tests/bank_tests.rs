mod common;

use common::timestamp;
use teller_core::core::Bank;
use teller_core::domain::account::{Account, AccountKind};
use teller_core::errors::{AccountError, BankError};

#[test]
fn opened_accounts_are_listed_in_insertion_order() {
    let mut bank = Bank::new();
    bank.open_account(Account::new("1", "Avery Quinn", AccountKind::Regular))
        .unwrap();
    bank.open_account(Account::new("2", "Morgan Reyes", AccountKind::savings()))
        .unwrap();

    let numbers: Vec<&str> = bank
        .accounts()
        .iter()
        .map(|account| account.number())
        .collect();

    assert_eq!(numbers, vec!["1", "2"]);
}

#[test]
fn duplicate_account_numbers_are_rejected() {
    let mut bank = Bank::new();
    bank.open_account(Account::new("1", "Avery Quinn", AccountKind::Regular))
        .unwrap();

    let err = bank
        .open_account(Account::new("1", "Morgan Reyes", AccountKind::Regular))
        .unwrap_err();

    assert!(matches!(err, BankError::DuplicateNumber(_)));
}

#[test]
fn deposits_and_withdrawals_flow_through_the_registry() {
    let mut bank = Bank::new();
    bank.open_account(
        Account::open("1", "Avery Quinn", AccountKind::Regular, 100.0).unwrap(),
    )
    .unwrap();

    assert_eq!(bank.deposit("1", 50.0).unwrap(), 150.0);
    assert_eq!(
        bank.withdraw("1", 25.0, timestamp(2026, 6, 1)).unwrap(),
        125.0
    );
}

#[test]
fn account_errors_surface_through_the_registry() {
    let mut bank = Bank::new();
    bank.open_account(
        Account::open("1", "Avery Quinn", AccountKind::Regular, 100.0).unwrap(),
    )
    .unwrap();

    let err = bank
        .withdraw("1", 500.0, timestamp(2026, 6, 1))
        .unwrap_err();

    assert!(matches!(
        err,
        BankError::Account(AccountError::InsufficientBalance { .. })
    ));
    assert_eq!(bank.account("1").unwrap().balance(), 100.0);
}

#[test]
fn unknown_account_numbers_are_reported() {
    let mut bank = Bank::new();

    let err = bank.deposit("missing", 10.0).unwrap_err();

    assert!(matches!(err, BankError::AccountNotFound(_)));
}
