//! Account commands: opening accounts, moving money, and the scripted
//! walkthrough.

use uuid::Uuid;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::Bank;
use crate::domain::account::{Account, AccountKind, WithdrawalActivity};

const ACCOUNT_NUMBER_LEN: usize = 10;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "open",
            "Open a new account",
            "open <regular|savings> <holder> [opening-balance]",
            cmd_open,
        ),
        CommandEntry::new(
            "deposit",
            "Deposit into an account",
            "deposit <account> <amount>",
            cmd_deposit,
        ),
        CommandEntry::new(
            "withdraw",
            "Withdraw from an account",
            "withdraw <account> <amount>",
            cmd_withdraw,
        ),
        CommandEntry::new("accounts", "List open accounts", "accounts", cmd_accounts),
        CommandEntry::new("show", "Show a single account", "show <account>", cmd_show),
        CommandEntry::new(
            "demo",
            "Run the scripted account walkthrough",
            "demo",
            cmd_demo,
        ),
    ]
}

fn cmd_open(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 || args.len() > 3 {
        return Err(CommandError::InvalidArguments(
            "usage: open <regular|savings> <holder> [opening-balance]".into(),
        ));
    }

    let kind = parse_kind(args[0])?;
    let holder = args[1];
    let opening_balance = match args.get(2) {
        Some(raw) => parse_amount(raw)?,
        None => 0.0,
    };

    let number = next_account_number(&context.bank);
    let account = Account::open(number.clone(), holder, kind, opening_balance)?;
    context.bank.open_account(account)?;

    cli_io::print_success(format!("Opened account {} for {}.", number, holder));
    Ok(())
}

fn cmd_deposit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [number, raw_amount] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: deposit <account> <amount>".into(),
        ));
    };
    let amount = parse_amount(raw_amount)?;

    let balance = context.bank.deposit(number, amount)?;
    cli_io::print_success(format!(
        "Deposited {} into {}. New balance: {}",
        context.format_amount(amount),
        number,
        context.format_amount(balance)
    ));
    Ok(())
}

fn cmd_withdraw(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [number, raw_amount] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: withdraw <account> <amount>".into(),
        ));
    };
    let amount = parse_amount(raw_amount)?;

    let now = context.clock.now();
    let balance = context.bank.withdraw(number, amount, now)?;
    cli_io::print_success(format!(
        "Withdrew {} from {}. New balance: {}",
        context.format_amount(amount),
        number,
        context.format_amount(balance)
    ));
    Ok(())
}

fn cmd_accounts(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.bank.is_empty() {
        cli_io::print_info("No accounts are open.");
        return Ok(());
    }

    output::section("Accounts");
    for account in context.bank.accounts() {
        cli_io::print_info(format!("  {}", account));
    }
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [number] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: show <account>".into(),
        ));
    };

    let Some(account) = context.bank.account(number) else {
        return Err(crate::errors::BankError::AccountNotFound(number.to_string()).into());
    };

    output::section(format!("Account {}", account.number()));
    cli_io::print_info(format!("  Holder:  {}", account.holder()));
    cli_io::print_info(format!(
        "  Balance: {}",
        context.format_amount(account.balance())
    ));
    if let Some(activity) = account.withdrawal_activity(context.clock.now()) {
        let label = match activity {
            WithdrawalActivity::Never => "savings, no withdrawals yet".to_string(),
            WithdrawalActivity::ThisMonth => {
                "savings, monthly withdrawal already used".to_string()
            }
            WithdrawalActivity::PriorMonth => "savings, withdrawal available".to_string(),
        };
        cli_io::print_info(format!("  Status:  {}", label));
    }
    Ok(())
}

/// Walks through the classic two-account session: deposits, withdrawals,
/// and the three expected policy failures, none of which are fatal.
fn cmd_demo(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let now = context.clock.now();

    let mut regular = Account::open("1234567890", "Avery Quinn", AccountKind::Regular, 1000.0)?;
    let mut savings = Account::open("9876543210", "Morgan Reyes", AccountKind::savings(), 5000.0)?;

    output::section("Opening accounts");
    cli_io::print_info(regular.to_string());
    cli_io::print_info(savings.to_string());

    output::section("Deposits");
    regular.deposit(500.0)?;
    savings.deposit(1000.0)?;
    cli_io::print_info(regular.to_string());
    cli_io::print_info(savings.to_string());

    output::section("Withdrawals");
    regular.withdraw(200.0, now)?;
    savings.withdraw(1000.0, now)?;
    cli_io::print_info(regular.to_string());
    cli_io::print_info(savings.to_string());

    output::section("Policy violations");
    if let Err(err) = savings.withdraw(500.0, context.clock.now()) {
        cli_io::print_error(err.to_string());
    }
    if let Err(err) = regular.withdraw(2000.0, context.clock.now()) {
        cli_io::print_error(err.to_string());
    }
    if let Err(err) = regular.deposit(-100.0) {
        cli_io::print_error(err.to_string());
    }
    cli_io::print_info(regular.to_string());
    cli_io::print_info(savings.to_string());

    Ok(())
}

fn parse_kind(raw: &str) -> Result<AccountKind, CommandError> {
    match raw.to_lowercase().as_str() {
        "regular" => Ok(AccountKind::Regular),
        "savings" => Ok(AccountKind::savings()),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown account kind `{}`; expected `regular` or `savings`",
            other
        ))),
    }
}

fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.parse::<f64>().map_err(|_| {
        CommandError::InvalidArguments(format!("`{}` is not a valid amount", raw))
    })
}

fn next_account_number(bank: &Bank) -> String {
    loop {
        let mut candidate = Uuid::new_v4().simple().to_string();
        candidate.truncate(ACCOUNT_NUMBER_LEN);
        if bank.account(&candidate).is_none() {
            return candidate;
        }
    }
}
