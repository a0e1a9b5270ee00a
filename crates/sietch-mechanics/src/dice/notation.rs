//! Dice notation parsing.
//!
//! Accepts `[count]d<sides>[(+|-)modifier]`, case-insensitive, with
//! whitespace allowed between tokens: `d6`, `3d6`, `2d10 + 5`, `1D20-2`.
//! Parsing checks shape only; bounds are enforced by
//! [`validate_dice_parameters`](crate::validate::validate_dice_parameters).

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// A parsed request for the generic dice roller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSpec {
    /// Number of dice.
    pub count: u32,
    /// Faces per die.
    pub sides: u32,
    /// Constant added to the sum (may be negative).
    pub modifier: i32,
}

impl std::str::FromStr for RollSpec {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_standard_notation(s)
    }
}

impl std::fmt::Display for RollSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Number(&'a str),
    D,
    Plus,
    Minus,
}

/// Split notation into tokens, rejecting any character outside the grammar.
fn tokenize(text: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            'd' | 'D' => tokens.push(Token::D),
            '+' => tokens.push(Token::Plus),
            '-' => tokens.push(Token::Minus),
            '0'..='9' => {
                let mut end = start + 1;
                while let Some(&(i, next)) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    end = i + 1;
                    chars.next();
                }
                tokens.push(Token::Number(&text[start..end]));
            }
            _ => return None,
        }
    }

    Some(tokens)
}

/// Parse dice notation into a [`RollSpec`].
///
/// `count` defaults to 1 and `modifier` to 0. Anything that does not match
/// the grammar, including numbers too large to represent, fails with
/// [`MechError::Parse`] carrying the trimmed input.
pub fn parse_standard_notation(text: &str) -> MechResult<RollSpec> {
    let invalid = || MechError::Parse(text.trim().to_string());
    let tokens = tokenize(text).ok_or_else(invalid)?;

    let (body, modifier) = match tokens.as_slice() {
        [body @ .., Token::Plus, Token::Number(m)] => {
            (body, m.parse::<i32>().map_err(|_| invalid())?)
        }
        [body @ .., Token::Minus, Token::Number(m)] => {
            let magnitude = m.parse::<i64>().map_err(|_| invalid())?;
            (body, i32::try_from(-magnitude).map_err(|_| invalid())?)
        }
        body => (body, 0),
    };

    let (count, sides) = match body {
        [Token::D, Token::Number(sides)] => (1, *sides),
        [Token::Number(count), Token::D, Token::Number(sides)] => {
            (count.parse::<u32>().map_err(|_| invalid())?, *sides)
        }
        _ => return Err(invalid()),
    };
    let sides = sides.parse::<u32>().map_err(|_| invalid())?;

    Ok(RollSpec {
        count,
        sides,
        modifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spec(count: u32, sides: u32, modifier: i32) -> RollSpec {
        RollSpec {
            count,
            sides,
            modifier,
        }
    }

    #[test]
    fn parse_basic_forms() {
        assert_eq!(parse_standard_notation("d6").unwrap(), spec(1, 6, 0));
        assert_eq!(parse_standard_notation("3d6").unwrap(), spec(3, 6, 0));
        assert_eq!(parse_standard_notation("2d10+5").unwrap(), spec(2, 10, 5));
        assert_eq!(parse_standard_notation("1d20-2").unwrap(), spec(1, 20, -2));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(parse_standard_notation("4D8").unwrap(), spec(4, 8, 0));
    }

    #[test]
    fn parse_tolerates_whitespace_between_tokens() {
        assert_eq!(
            parse_standard_notation("  2d10 + 5  ").unwrap(),
            spec(2, 10, 5)
        );
        assert_eq!(parse_standard_notation("3 d 6 - 1").unwrap(), spec(3, 6, -1));
    }

    #[test]
    fn parse_keeps_zero_count_for_validation() {
        assert_eq!(parse_standard_notation("0d6").unwrap(), spec(0, 6, 0));
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in [
            "", "d", "3d", "6", "+5", "3d6+", "3d6+-2", "3d6+2+1", "3x6", "3d6d2", "2 0d6",
            "d-6", "abc", "3d6 extra",
        ] {
            let err = parse_standard_notation(bad).unwrap_err();
            assert!(
                matches!(err, MechError::Parse(ref s) if s == bad.trim()),
                "expected parse error for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(parse_standard_notation("99999999999d6").is_err());
        assert!(parse_standard_notation("1d6+99999999999").is_err());
    }

    #[test]
    fn parse_accepts_most_negative_modifier() {
        assert_eq!(
            parse_standard_notation("1d6-2147483648").unwrap().modifier,
            i32::MIN
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: RollSpec = "2d10+5".parse().unwrap();
        assert_eq!(parsed, parse_standard_notation("2d10+5").unwrap());
    }

    #[test]
    fn display_canonical() {
        assert_eq!(spec(3, 6, 0).to_string(), "3d6");
        assert_eq!(spec(2, 10, 5).to_string(), "2d10+5");
        assert_eq!(spec(1, 20, -2).to_string(), "1d20-2");
    }

    proptest! {
        #[test]
        fn display_then_parse_round_trips(
            count in 1u32..=100,
            sides in 2u32..=1000,
            modifier in -1000i32..=1000,
        ) {
            let original = spec(count, sides, modifier);
            let reparsed = parse_standard_notation(&original.to_string()).unwrap();
            prop_assert_eq!(reparsed, original);
        }

        #[test]
        fn never_panics_on_arbitrary_input(text in "\\PC{0,24}") {
            let _ = parse_standard_notation(&text);
        }
    }
}
