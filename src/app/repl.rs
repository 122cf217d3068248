use crate::app::command::{Command, HELP};
use crate::core::engine::CartEngine;
use crate::core::export::export_domains;
use crate::core::session::CartEvent;
use crate::core::validator;
use crate::core::{AvailabilityOracle, Notification};
use crate::utils::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

enum Flow {
    Continue,
    Quit,
}

/// Reads one command per line until EOF or `quit`, writing everything the
/// user should see to `output`.
pub async fn run<O, R, W>(engine: &mut CartEngine<O>, input: R, output: &mut W) -> Result<()>
where
    O: AvailabilityOracle,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!("Rejected command line {:?}: {}", line, e);
                writeln!(output, "{}", e.user_friendly_message())?;
                writeln!(output, "{}", e.recovery_suggestion())?;
                continue;
            }
        };

        if let Flow::Quit = execute(engine, command, output).await? {
            break;
        }
        output.flush()?;
    }

    Ok(())
}

async fn execute<O, W>(engine: &mut CartEngine<O>, command: Command, output: &mut W) -> Result<Flow>
where
    O: AvailabilityOracle,
    W: Write,
{
    match command {
        Command::Add(domain) => {
            let notifications = engine.add(&domain).await;
            write_notifications(output, &notifications)?;
            write_cart(engine, output)?;
        }
        Command::Check(input) => match engine.check(&input).notification() {
            Some(notification) => writeln!(output, "{}", notification)?,
            None => writeln!(output, "Nothing to check")?,
        },
        Command::Delete(domain) => {
            let notifications = engine.dispatch(CartEvent::Delete(validator::normalize(&domain)));
            write_notifications(output, &notifications)?;
            write_cart(engine, output)?;
        }
        Command::Clear => mutate(engine, CartEvent::Clear, output)?,
        Command::RemoveUnavailable => mutate(engine, CartEvent::RemoveUnavailable, output)?,
        Command::KeepBest => mutate(engine, CartEvent::KeepBest, output)?,
        Command::Copy => {
            let list = export_domains(engine.session().cart());
            let notifications = engine.dispatch(CartEvent::Copy);
            write_notifications(output, &notifications)?;
            if !list.is_empty() {
                writeln!(output, "{}", list)?;
            }
        }
        Command::Purchase => {
            let notifications = engine.dispatch(CartEvent::Purchase);
            write_notifications(output, &notifications)?;
        }
        Command::List => write_cart(engine, output)?,
        Command::Help => writeln!(output, "{}", HELP)?,
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn mutate<O, W>(engine: &mut CartEngine<O>, event: CartEvent, output: &mut W) -> Result<()>
where
    O: AvailabilityOracle,
    W: Write,
{
    let notifications = engine.dispatch(event);
    write_notifications(output, &notifications)?;
    write_cart(engine, output)
}

fn write_notifications<W: Write>(output: &mut W, notifications: &[Notification]) -> Result<()> {
    for notification in notifications {
        writeln!(output, "{}", notification)?;
    }
    Ok(())
}

fn write_cart<O, W>(engine: &CartEngine<O>, output: &mut W) -> Result<()>
where
    O: AvailabilityOracle,
    W: Write,
{
    let session = engine.session();
    let cart = session.cart();

    if cart.is_empty() {
        writeln!(output, "Cart is empty. Add domains to get started.")?;
    } else {
        let width = cart.domains().map(str::len).max().unwrap_or(0);
        for entry in cart.iter() {
            writeln!(output, "  {:<width$}  {}", entry.name, entry.status, width = width)?;
        }
    }

    writeln!(output, "{}", session.summary())?;
    writeln!(output, "{}", session.status().message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::StaticOracle;

    async fn run_script(script: &str, max_domains: usize) -> (String, CartEngine<StaticOracle>) {
        let mut engine = CartEngine::new(StaticOracle::new(["taken.com"]), max_domains);
        let mut output = Vec::new();
        run(&mut engine, script.as_bytes(), &mut output).await.unwrap();
        (String::from_utf8(output).unwrap(), engine)
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let (output, engine) = run_script("add Example.com\nadd taken.com\n", 2).await;

        assert!(output.contains("example.com  available"));
        assert!(output.contains("taken.com    unavailable"));
        assert!(output.contains("Cart: 2 of 2 domains"));
        assert!(output.contains("Remove unavailable domains to proceed to purchase"));
        assert_eq!(engine.session().cart().len(), 2);
    }

    #[tokio::test]
    async fn test_stops_at_quit() {
        let (_, engine) = run_script("add a.com\nquit\nadd b.com\n", 2).await;
        assert_eq!(engine.session().cart().len(), 1);
    }

    #[tokio::test]
    async fn test_bad_command_does_not_stop_loop() {
        let (output, engine) = run_script("launch\nadd\nadd a.com\n", 2).await;
        assert!(output.contains("Unknown command 'launch'"));
        assert!(output.contains("Usage: add <domain>"));
        assert_eq!(engine.session().cart().len(), 1);
    }

    #[tokio::test]
    async fn test_copy_prints_list() {
        let (output, _) = run_script("copy\nadd a.com\nadd b.xyz\ncopy\n", 2).await;
        assert!(output.contains("[info] Cart is empty"));
        assert!(output.contains("[success] Data copied to clipboard"));
        assert!(output.contains("a.com, b.xyz"));
    }
}
