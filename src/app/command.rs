use crate::utils::error::CartError;
use std::str::FromStr;

pub const HELP: &str = "\
Commands:
  add <domain>          check availability and add the domain to the cart
  check <input>         validate input without adding it
  delete <domain>       remove a domain from the cart
  clear                 empty the cart
  remove-unavailable    drop every unavailable domain
  keep-best             keep only the best domains up to the cart capacity
  copy                  print the cart as a comma-separated list
  purchase              confirm the purchase when the cart is ready
  list                  show the cart and its status
  help                  show this message
  quit                  leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Check(String),
    Delete(String),
    Clear,
    RemoveUnavailable,
    KeepBest,
    Copy,
    Purchase,
    List,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CartError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, argument) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "add" => Command::Add(required(verb, argument)?),
            "check" => Command::Check(required(verb, argument)?),
            "delete" | "remove" | "rm" => Command::Delete(required(verb, argument)?),
            "clear" => Command::Clear,
            "remove-unavailable" | "prune" => Command::RemoveUnavailable,
            "keep-best" | "best" => Command::KeepBest,
            "copy" => Command::Copy,
            "purchase" | "buy" => Command::Purchase,
            "list" | "ls" | "status" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(CartError::CommandError {
                    message: format!("Unknown command '{}'", other),
                })
            }
        };

        Ok(command)
    }
}

fn required(verb: &str, argument: &str) -> Result<String, CartError> {
    if argument.is_empty() {
        return Err(CartError::CommandError {
            message: format!("Usage: {} <domain>", verb),
        });
    }
    Ok(argument.to_string())
}
