use log::debug;

/// Separator between input pieces in a command string.
pub const COMMAND_SEP: char = ',';

/// A parsed (mnemonic, optional repeat count) unit, before any timing
/// expansion.  The mnemonic is kept as the raw character here; whether
/// it names a real button is decided at expansion time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub mnemonic: char,
    pub count: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("malformed repeat count {0:?}")]
    MalformedCount(String),
    #[error("unknown button mnemonic {0:?}")]
    UnknownButton(char),
}

/// Tokenize a raw chat message into an ordered list of input tokens.
///
/// The first character of `raw` is the command-prefix marker and is
/// discarded.  The remainder is lower-cased and split on [`COMMAND_SEP`];
/// each piece is trimmed, empty pieces are skipped, a single character
/// is a bare token, and anything longer is a mnemonic followed by a
/// decimal repeat count.
///
/// A count that doesn't parse as a non-negative integer rejects the
/// whole command; no partial token list is ever returned.
pub fn parse_command(raw: &str) -> Result<Vec<RawToken>, CommandError> {
    let mut body: String = raw.chars().skip(1).collect();
    body.make_ascii_lowercase();
    debug!("parsing command {:?}", body);

    let mut tokens = Vec::new();
    for piece in body.split(COMMAND_SEP) {
        let piece = piece.trim();
        let mut chars = piece.chars();
        let Some(mnemonic) = chars.next() else {
            // consecutive or trailing separators contribute nothing
            continue;
        };

        let rest = chars.as_str();
        let count = if rest.is_empty() {
            None
        } else {
            match rest.parse::<u32>() {
                Ok(count) => Some(count),
                Err(_) => return Err(CommandError::MalformedCount(rest.to_string())),
            }
        };

        tokens.push(RawToken { mnemonic, count });
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(mnemonic: char) -> RawToken {
        RawToken {
            mnemonic,
            count: None,
        }
    }

    fn counted(mnemonic: char, count: u32) -> RawToken {
        RawToken {
            mnemonic,
            count: Some(count),
        }
    }

    #[test]
    fn splits_into_ordered_tokens() {
        assert_eq!(
            parse_command(",u,r,a4").unwrap(),
            vec![bare('u'), bare('r'), counted('a', 4)],
        );
    }

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(
            parse_command(",U , R2").unwrap(),
            vec![bare('u'), counted('r', 2)],
        );
    }

    #[test]
    fn skips_empty_and_whitespace_pieces() {
        assert_eq!(
            parse_command(",u,,a").unwrap(),
            vec![bare('u'), bare('a')],
        );
        assert_eq!(
            parse_command(",u,   ,a").unwrap(),
            vec![bare('u'), bare('a')],
        );
    }

    #[test]
    fn accepts_unknown_mnemonics() {
        // button validation is deferred to expansion
        assert_eq!(parse_command(",z").unwrap(), vec![bare('z')]);
    }

    #[test]
    fn rejects_malformed_counts() {
        assert_eq!(
            parse_command(",uX"),
            Err(CommandError::MalformedCount("x".to_string())),
        );
        assert!(parse_command(",u-1").is_err());
        assert!(parse_command(",u1.5").is_err());
    }

    #[test]
    fn multi_digit_counts() {
        assert_eq!(parse_command(",d10").unwrap(), vec![counted('d', 10)]);
        assert_eq!(parse_command(",d99").unwrap(), vec![counted('d', 99)]);
    }

    #[test]
    fn prefix_only_is_empty() {
        assert_eq!(parse_command(",").unwrap(), vec![]);
    }
}
