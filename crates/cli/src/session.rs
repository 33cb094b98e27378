//! One operator session: a ledger plus the statement settings it was
//! started with.

use anyhow::Result;
use minibank_core::{Ledger, Rounding};
use minibank_reports::StatementBuilder;

use crate::commands::{operations, statement};
use crate::{Commands, OutputFormat};

pub struct Session {
    ledger: Ledger,
    builder: StatementBuilder,
    format: OutputFormat,
}

impl Session {
    pub fn new(rounding: Rounding, format: OutputFormat) -> Self {
        Self::with_ledger(Ledger::new(), rounding, format)
    }

    pub fn with_ledger(ledger: Ledger, rounding: Rounding, format: OutputFormat) -> Self {
        Self {
            ledger,
            builder: StatementBuilder::new(rounding),
            format,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run one command and return the text to show
    pub fn execute(&mut self, command: Commands) -> Result<String> {
        match command {
            Commands::Deposit {
                client,
                amount,
                description,
            } => operations::deposit(&mut self.ledger, &client, &amount, &description),

            Commands::Withdraw {
                client,
                amount,
                description,
            } => operations::withdraw(&mut self.ledger, &client, &amount, &description),

            Commands::ShowBankStatement {
                client,
                since,
                till,
            } => {
                let exporter = self.format.exporter();
                statement::show_bank_statement(
                    &mut self.ledger,
                    &self.builder,
                    exporter.as_ref(),
                    &client,
                    &since,
                    &till,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minibank_core::{parse_datetime, Money};

    fn seeded_session(format: OutputFormat) -> Session {
        let mut ledger = Ledger::new();
        let at = |raw: &str| parse_datetime(raw).unwrap();
        let money = |raw: &str| raw.parse::<Money>().unwrap();
        ledger
            .deposit_at("John Doe", money("100"), "salary", at("2021-01-01 09:00:00"))
            .unwrap();
        ledger
            .withdraw_at("John Doe", money("30"), "groceries", at("2021-01-02 09:00:00"))
            .unwrap();
        ledger
            .deposit_at("John Doe", money("50"), "gift", at("2021-01-03 09:00:00"))
            .unwrap();
        Session::with_ledger(ledger, Rounding::HalfDown, format)
    }

    fn statement(client: &str, since: &str, till: &str) -> Commands {
        Commands::ShowBankStatement {
            client: client.to_string(),
            since: since.to_string(),
            till: till.to_string(),
        }
    }

    #[test]
    fn test_execute_deposit_then_withdraw() {
        let mut session = Session::new(Rounding::HalfDown, OutputFormat::Table);
        let output = session
            .execute(Commands::Deposit {
                client: "Alice".to_string(),
                amount: "10.50".to_string(),
                description: "tip".to_string(),
            })
            .unwrap();
        assert_eq!(output, "Deposit operation was successful!");

        let output = session
            .execute(Commands::Withdraw {
                client: "Alice".to_string(),
                amount: "0.50".to_string(),
                description: "coffee".to_string(),
            })
            .unwrap();
        assert_eq!(output, "Withdrawal operation was successful!");

        let balance = session.ledger().account("Alice").unwrap().balance();
        assert_eq!(balance.to_string(), "10.00");
    }

    #[test]
    fn test_failed_command_keeps_session_usable() {
        let mut session = Session::new(Rounding::HalfDown, OutputFormat::Table);
        assert!(session
            .execute(Commands::Deposit {
                client: "Alice".to_string(),
                amount: "-1".to_string(),
                description: "bad".to_string(),
            })
            .is_err());

        assert!(session
            .execute(Commands::Deposit {
                client: "Alice".to_string(),
                amount: "1".to_string(),
                description: "good".to_string(),
            })
            .is_ok());
        assert_eq!(session.ledger().account("Alice").unwrap().len(), 1);
    }

    #[test]
    fn test_overflowing_deposit_is_a_command_error() {
        let mut session = Session::new(Rounding::HalfDown, OutputFormat::Table);
        let deposit = |amount: &str| Commands::Deposit {
            client: "Alice".to_string(),
            amount: amount.to_string(),
            description: "big".to_string(),
        };

        session.execute(deposit("79228162514264337593543950335")).unwrap();
        let err = session.execute(deposit("1")).unwrap_err();
        assert!(format!("{:#}", err).contains("Amount overflow"));

        assert!(session
            .execute(Commands::Withdraw {
                client: "Alice".to_string(),
                amount: "1".to_string(),
                description: "fee".to_string(),
            })
            .is_ok());
        assert_eq!(session.ledger().account("Alice").unwrap().len(), 2);
    }

    #[test]
    fn test_statement_table() {
        let mut session = seeded_session(OutputFormat::Table);
        let output = session
            .execute(statement("John Doe", "2021-01-01 00:00:00", "2021-01-03 23:59:59"))
            .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("+---"));
        assert!(lines[1].contains("Date") && lines[1].contains("Balance"));
        assert!(output.contains("Previous balance"));
        assert!(output.contains("$70.00"));
        assert!(output.contains("Totals"));
        assert!(output.contains("$150.00"));
        assert!(output.contains("$120.00"));
    }

    #[test]
    fn test_statement_csv() {
        let mut session = seeded_session(OutputFormat::Csv);
        let output = session
            .execute(statement("John Doe", "2021-01-02 00:00:00", "2021-01-02 23:59:59"))
            .unwrap();

        assert_eq!(
            output,
            "Date,Description,Withdrawals,Deposits,Balance\n\
             ,Previous balance,,,$100.00\n\
             2021-01-02 09:00:00,groceries,$30.00,,$70.00\n\
             ,Totals,$30.00,$0.00,$70.00"
        );
    }

    #[test]
    fn test_statement_with_bad_dates_fails() {
        let mut session = seeded_session(OutputFormat::Table);
        let err = session
            .execute(statement("John Doe", "01.01.2021", "2021-01-03 23:59:59"))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Cannot parse datetime"));
    }
}
