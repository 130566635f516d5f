//! Line commands accepted by the interactive client.
//!
//! Each input line is one command: a verb followed by an optional argument, e.g.
//! `from ETH`, `amount 12.5`, `submit`. Verbs are case-insensitive.
use std::str::FromStr;

use strum_macros::{Display, EnumString};
use swap_common::FormSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
enum Verb {
    From,
    To,
    PickFrom,
    PickTo,
    Amount,
    Submit,
    List,
    Refresh,
    Show,
    Help,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set a currency; an empty symbol clears it.
    Set(FormSide, String),
    /// Picker selection with toggle semantics.
    Pick(FormSide, String),
    /// Set the source amount from raw text.
    Amount(String),
    /// Submit the form.
    Submit,
    /// List the known currencies and prices.
    List,
    /// Re-fetch the price feed.
    Refresh,
    /// Print the current form.
    Show,
    /// Print usage.
    Help,
    /// Leave the client.
    Quit,
}

/// Usage text printed by `help`.
pub const USAGE: &str = "\
commands:
  from <SYM>       set source currency (no symbol clears it)
  to <SYM>         set target currency (no symbol clears it)
  pick-from <SYM>  select source currency, selecting it again deselects
  pick-to <SYM>    select target currency, selecting it again deselects
  amount <N>       set amount to convert
  submit           convert
  list             show known currencies
  refresh          re-fetch prices
  show             show the form
  quit             exit";

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };
        let verb = verb
            .parse::<Verb>()
            .map_err(|_| format!("Unknown command: {}", verb))?;

        let command = match verb {
            Verb::From => Command::Set(FormSide::From, arg.to_string()),
            Verb::To => Command::Set(FormSide::To, arg.to_string()),
            Verb::PickFrom | Verb::PickTo if arg.is_empty() => {
                return Err(format!("Usage: {} <SYM>", verb));
            }
            Verb::PickFrom => Command::Pick(FormSide::From, arg.to_string()),
            Verb::PickTo => Command::Pick(FormSide::To, arg.to_string()),
            Verb::Amount => Command::Amount(arg.to_string()),
            Verb::Submit => Command::Submit,
            Verb::List => Command::List,
            Verb::Refresh => Command::Refresh,
            Verb::Show => Command::Show,
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("from ETH", Command::Set(FormSide::From, "ETH".into()))]
    #[case("  TO   usdc ", Command::Set(FormSide::To, "usdc".into()))]
    #[case("from", Command::Set(FormSide::From, String::new()))]
    #[case("pick-to ATOM", Command::Pick(FormSide::To, "ATOM".into()))]
    #[case("amount 12.5", Command::Amount("12.5".into()))]
    #[case("Submit", Command::Submit)]
    #[case("list", Command::List)]
    #[case("refresh", Command::Refresh)]
    #[case("show", Command::Show)]
    #[case("help", Command::Help)]
    #[case("exit", Command::Quit)]
    fn parses_commands(#[case] line: &str, #[case] expected: Command) {
        assert_eq!(line.parse::<Command>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_verb() {
        let err = "swap ETH".parse::<Command>().unwrap_err();
        assert_eq!(err, "Unknown command: swap");
    }

    #[test]
    fn pick_requires_a_symbol() {
        let err = "pick-from".parse::<Command>().unwrap_err();
        assert_eq!(err, "Usage: pick-from <SYM>");
    }
}
