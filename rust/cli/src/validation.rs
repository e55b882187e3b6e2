//! Parsing of typed commands into engine proposals.
//!
//! Card names and guesses are checked here so a typo can be retyped instead
//! of forfeiting the round. Whether the move is allowed right now is left to
//! the engine.

use roach_engine::agent::{GuessValue, Proposal};
use roach_engine::cards::CardType;
use roach_engine::rules::parse_guess;

const DEFAULT_REASON: &str = "typed at the console";

/// Outcome of parsing one line of human input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Proposal(Proposal),
    /// `q` or `quit`
    Quit,
    /// Unusable input with a message for the user
    Invalid(String),
}

/// Parses a console command, case-insensitively:
///
/// - `play <card> <target> <claim> [reason...]`
/// - `look [reason...]`
/// - `pass <target> <claim> [reason...]`
/// - `guess true|false [reason...]`
/// - `q` / `quit`
///
/// # Example
///
/// ```rust
/// use roach_cli::validation::{parse_human_input, ParseResult};
/// use roach_engine::agent::Proposal;
/// use roach_engine::cards::CardType;
///
/// assert_eq!(
///     parse_human_input("play rat bo bat trust me"),
///     ParseResult::Proposal(Proposal::play(CardType::Rat, "bo", CardType::Bat, "trust me"))
/// );
/// assert_eq!(parse_human_input("q"), ParseResult::Quit);
/// assert!(matches!(parse_human_input("dance"), ParseResult::Invalid(_)));
/// ```
pub fn parse_human_input(input: &str) -> ParseResult {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some((command, args)) = parts.split_first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };
    let reason_from = |n: usize| -> String {
        if args.len() > n {
            args[n..].join(" ")
        } else {
            DEFAULT_REASON.to_string()
        }
    };

    match command.to_ascii_lowercase().as_str() {
        "q" | "quit" => ParseResult::Quit,
        "look" | "l" => ParseResult::Proposal(Proposal::look(&reason_from(0))),
        "play" => {
            let [card, target, claim, ..] = args else {
                return ParseResult::Invalid("Usage: play <card> <target> <claim>".to_string());
            };
            match (parse_card(card), parse_card(claim)) {
                (Ok(card), Ok(claim)) => {
                    ParseResult::Proposal(Proposal::play(card, target, claim, &reason_from(3)))
                }
                (Err(msg), _) | (_, Err(msg)) => ParseResult::Invalid(msg),
            }
        }
        "pass" => {
            let [target, claim, ..] = args else {
                return ParseResult::Invalid("Usage: pass <target> <claim>".to_string());
            };
            match parse_card(claim) {
                Ok(claim) => ParseResult::Proposal(Proposal::pass(target, claim, &reason_from(2))),
                Err(msg) => ParseResult::Invalid(msg),
            }
        }
        "guess" => {
            let Some(value) = args.first() else {
                return ParseResult::Invalid("Usage: guess true|false".to_string());
            };
            match parse_guess(&GuessValue::Text(value.to_string())) {
                Ok(truthful) => ParseResult::Proposal(Proposal::guess(truthful, &reason_from(1))),
                Err(e) => ParseResult::Invalid(e.to_string()),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Use play, look, pass, guess or q.",
            other
        )),
    }
}

fn parse_card(s: &str) -> Result<CardType, String> {
    s.parse::<CardType>()
        .map_err(|_| format!("Unknown card type '{}'", s))
}
