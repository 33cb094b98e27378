//! Interactive shell: read a line, split it like a shell would, parse it
//! with the same clap commands, run it against the session ledger.

use anyhow::{bail, Result};
use clap::error::ErrorKind;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::session::Session;
use crate::Commands;

/// One shell line
#[derive(Parser, Debug)]
#[command(name = "bank", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

/// Run the shell until `exit`, `quit` or end of input.
pub fn run(session: &mut Session, prompt: &str) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    println!("Service started!");

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                if matches!(line, "exit" | "quit") {
                    break;
                }

                match dispatch(session, line) {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {:#}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(interrupted)");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    Ok(())
}

/// Parse and execute one line. Help requests are returned as output.
pub fn dispatch(session: &mut Session, line: &str) -> Result<String> {
    let words = split_line(line)?;

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(e.to_string().trim_end().to_string());
        }
        Err(e) => {
            // clap renders several lines; the operator gets the first one
            let rendered = e.to_string();
            let first = rendered.lines().next().unwrap_or_default();
            bail!("{}", first.trim_start_matches("error: "));
        }
    };

    session.execute(parsed.command)
}

/// Split a command line into words with POSIX shell quoting rules.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    match shlex::split(line) {
        Some(words) => Ok(words),
        None => bail!("unterminated quote or trailing escape in: {}", line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;
    use minibank_core::Rounding;

    #[test]
    fn test_split_plain_words() {
        assert_eq!(
            split_line("deposit  --client Alice\t--amount 5").unwrap(),
            vec!["deposit", "--client", "Alice", "--amount", "5"]
        );
        assert!(split_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_split_quotes_and_escapes() {
        assert_eq!(
            split_line(r#"--client "John Doe" --description 'rent, "march"'"#).unwrap(),
            vec!["--client", "John Doe", "--description", "rent, \"march\""]
        );
        assert_eq!(
            split_line(r#"--since "2021-01-01 00:00:00" a\ b "x\"y" ''"#).unwrap(),
            vec!["--since", "2021-01-01 00:00:00", "a b", "x\"y", ""]
        );
    }

    #[test]
    fn test_split_unterminated_quote() {
        assert!(split_line("--client \"John").is_err());
        assert!(split_line("--client 'John").is_err());
        assert!(split_line("--client John\\").is_err());
    }

    #[test]
    fn test_dispatch_full_session() {
        let mut session = Session::new(Rounding::HalfDown, OutputFormat::Csv);

        let out = dispatch(
            &mut session,
            r#"deposit --client "John Doe" --amount 100 --description "salary""#,
        )
        .unwrap();
        assert_eq!(out, "Deposit operation was successful!");

        let out = dispatch(
            &mut session,
            r#"withdraw --client "John Doe" --amount 30.005 --description groceries"#,
        )
        .unwrap();
        assert_eq!(out, "Withdrawal operation was successful!");

        let out = dispatch(
            &mut session,
            r#"show_bank_statement --client "John Doe" --since "2000-01-01 00:00:00" --till "2100-01-01 00:00:00""#,
        )
        .unwrap();
        assert!(out.contains(",salary,,$100.00,$100.00"));
        // 69.995 rounds half-down
        assert!(out.contains(",groceries,$30.00,,$69.99"));
        assert!(out.ends_with(",Totals,$30.00,$100.00,$69.99"));
    }

    #[test]
    fn test_dispatch_errors_are_one_line() {
        let mut session = Session::new(Rounding::HalfDown, OutputFormat::Table);

        let err = dispatch(&mut session, "deposit --client Alice --amount 5").unwrap_err();
        assert!(!err.to_string().contains('\n'));

        let err = dispatch(&mut session, "transfer --client Alice").unwrap_err();
        assert!(!err.to_string().contains('\n'));

        let err = dispatch(
            &mut session,
            "deposit --client Alice --amount -5 --description refund",
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid amount"));
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_dispatch_help() {
        let mut session = Session::new(Rounding::HalfDown, OutputFormat::Table);
        let out = dispatch(&mut session, "help").unwrap();
        assert!(out.contains("show_bank_statement"));
        assert!(out.contains("deposit"));
    }
}
