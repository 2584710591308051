//! Tokenizer for the interactive command loop.
//!
//! Recognized forms, whitespace-delimited:
//!
//! - `RQ <consumer> <r0> .. <rN>` — request resources
//! - `RL <consumer> <r0> .. <rN>` — release resources
//! - `*` — display the current state
//!
//! Anything else — wrong arity, a negative or non-numeric token, an
//! unknown verb — parses to `None` and the driver prints the usage
//! banner without touching the engine.

use arbiter_core::{ConsumerId, ResourceVector};

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Request the given amounts for a consumer.
    Request(ConsumerId, ResourceVector),
    /// Release the given amounts from a consumer.
    Release(ConsumerId, ResourceVector),
    /// Display available plus the three matrices.
    Show,
}

/// Parse one non-empty line. `resources` is the expected vector width.
pub fn parse(line: &str, resources: usize) -> Option<Command> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next()?;
    match verb {
        "*" => tokens.next().is_none().then_some(Command::Show),
        "RQ" | "RL" => {
            let consumer = ConsumerId(tokens.next()?.parse().ok()?);
            let amounts = parse_amounts(tokens, resources)?;
            Some(if verb == "RQ" {
                Command::Request(consumer, amounts)
            } else {
                Command::Release(consumer, amounts)
            })
        }
        _ => None,
    }
}

/// Collect exactly `resources` non-negative integers; reject extras.
fn parse_amounts<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    resources: usize,
) -> Option<ResourceVector> {
    let mut amounts = Vec::with_capacity(resources);
    for _ in 0..resources {
        amounts.push(tokens.next()?.parse().ok()?);
    }
    if tokens.next().is_some() {
        return None;
    }
    Some(ResourceVector::from_slice(&amounts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_request_and_release() {
        assert_eq!(
            parse("RQ 1 1 0 1 0", 4),
            Some(Command::Request(
                ConsumerId(1),
                ResourceVector::from_slice(&[1, 0, 1, 0]),
            ))
        );
        assert_eq!(
            parse("RL 3 1 0 1 1", 4),
            Some(Command::Release(
                ConsumerId(3),
                ResourceVector::from_slice(&[1, 0, 1, 1]),
            ))
        );
    }

    #[test]
    fn parses_show() {
        assert_eq!(parse("*", 4), Some(Command::Show));
        assert_eq!(parse("* extra", 4), None);
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(parse("RQ 1 1 0 1", 4), None);
        assert_eq!(parse("RQ 1 1 0 1 0 9", 4), None);
        assert_eq!(parse("RQ", 4), None);
    }

    #[test]
    fn rejects_negative_and_non_numeric_tokens() {
        assert_eq!(parse("RQ 1 -1 0 1 0", 4), None);
        assert_eq!(parse("RQ one 1 0 1 0", 4), None);
    }

    #[test]
    fn rejects_unknown_verbs() {
        assert_eq!(parse("QUIT", 4), None);
        assert_eq!(parse("rq 1 0 0 0 0", 4), None);
    }
}
