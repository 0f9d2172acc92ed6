//! # Interactive Shell Commands
//!
//! One line of user input maps to one [`Command`]. Product ids are resolved
//! against the catalog here, so everything past the shell only ever sees
//! products that exist.

use crate::model::{Catalog, Product};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Shop,
    Cart,
    Add(&'static Product),
    Remove(&'static Product),
    PlaceOrder,
    Orders,
    LocalOrders,
    Info,
    AutoRefresh(bool),
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type `help` for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

pub const HELP: &str = "\
Commands:
  shop              show the product catalog
  cart              show the shopping cart
  add <id>          add one unit of a product (e.g. `add item1`)
  remove <id>       remove one unit of a product
  order             place an order for the cart
  orders            fetch and show all backend orders
  local             show orders placed from this session
  info              show endpoints, cart summary and order counts
  auto on|off       toggle auto-refresh of the orders view
  help              show this help
  quit              leave the dashboard";

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str, catalog: &Catalog) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(CommandError::Unknown(line.trim().to_string()));
        }

        let product = |usage: &'static str| -> Result<&'static Product, CommandError> {
            let id = arg.ok_or(CommandError::Usage(usage))?;
            catalog
                .get(id)
                .ok_or_else(|| CommandError::UnknownProduct(id.to_string()))
        };

        let command = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("shop", None) => Command::Shop,
            ("cart", None) => Command::Cart,
            ("add", _) => Command::Add(product("add <product id>")?),
            ("remove", _) => Command::Remove(product("remove <product id>")?),
            ("order", None) => Command::PlaceOrder,
            ("orders" | "refresh", None) => Command::Orders,
            ("local", None) => Command::LocalOrders,
            ("info", None) => Command::Info,
            ("auto", Some("on")) => Command::AutoRefresh(true),
            ("auto", Some("off")) => Command::AutoRefresh(false),
            ("auto", _) => return Err(CommandError::Usage("auto on|off")),
            ("help" | "?", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CATALOG;

    fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        Command::parse(line, &CATALOG)
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("shop"), Ok(Some(Command::Shop)));
        assert_eq!(parse("  CART "), Ok(Some(Command::Cart)));
        assert_eq!(parse("order"), Ok(Some(Command::PlaceOrder)));
        assert_eq!(parse("refresh"), Ok(Some(Command::Orders)));
        assert_eq!(parse("auto on"), Ok(Some(Command::AutoRefresh(true))));
        assert_eq!(parse("auto off"), Ok(Some(Command::AutoRefresh(false))));
        assert_eq!(parse("exit"), Ok(Some(Command::Quit)));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_resolves_products() {
        let laptop = CATALOG.get("item1").unwrap();
        assert_eq!(parse("add item1"), Ok(Some(Command::Add(laptop))));
        assert_eq!(parse("remove item1"), Ok(Some(Command::Remove(laptop))));
        assert_eq!(
            parse("add item99"),
            Err(CommandError::UnknownProduct("item99".to_string()))
        );
        assert_eq!(parse("add"), Err(CommandError::Usage("add <product id>")));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse("dance"), Err(CommandError::Unknown(_))));
        assert!(matches!(parse("shop now"), Err(CommandError::Unknown(_))));
        assert_eq!(parse("auto maybe"), Err(CommandError::Usage("auto on|off")));
    }
}
