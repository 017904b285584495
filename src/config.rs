use std::path::PathBuf;

use collections::{Strategy, UnknownStrategy};
use thiserror::Error;

pub const DEFAULT_CAPACITY: usize = 5000;

pub const USAGE: &str = "\
Usage: wordstat [OPTIONS] <FILE>

Counts the whitespace separated words of FILE in a fixed-size chained hash
table and reports how evenly each hash strategy spreads them over the buckets.

Options:
  -c, --capacity <N>     number of buckets (default: 5000)
  -s, --strategy <NAME>  general, bitshift, sum, prod or all (default: general)
  -d, --dump             print every bucket after loading the words
  -h, --help             print this message

Set RUST_LOG=info (or debug, trace) for progress logs.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Not a failure, the caller should print the usage and exit
    #[error("help requested")]
    HelpRequested,

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("capacity must be a positive integer, got: {0:?}")]
    InvalidCapacity(String),

    #[error(transparent)]
    UnknownStrategy(#[from] UnknownStrategy),

    #[error("unexpected argument {0:?}")]
    UnexpectedArgument(String),

    #[error("no input file given")]
    MissingInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub capacity: usize,
    /// Strategies to run, in order
    pub strategies: Vec<Strategy>,
    pub dump: bool,
}

impl Config {
    /// Parses the command line, without the program name
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut input = None;
        let mut capacity = DEFAULT_CAPACITY;
        let mut strategies = vec![Strategy::default()];
        let mut dump = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ConfigError::HelpRequested),
                "-d" | "--dump" => dump = true,
                "-c" | "--capacity" => {
                    let value = args.next().ok_or(ConfigError::MissingValue(arg))?;
                    capacity = parse_capacity(value)?;
                }
                "-s" | "--strategy" => {
                    let value = args.next().ok_or(ConfigError::MissingValue(arg))?;
                    strategies = parse_strategies(&value)?;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(ConfigError::UnexpectedArgument(arg));
                }
                _ if input.is_none() => input = Some(PathBuf::from(arg)),
                _ => return Err(ConfigError::UnexpectedArgument(arg)),
            }
        }

        Ok(Self {
            input: input.ok_or(ConfigError::MissingInput)?,
            capacity,
            strategies,
            dump,
        })
    }
}

fn parse_capacity(value: String) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidCapacity(value)),
    }
}

fn parse_strategies(value: &str) -> Result<Vec<Strategy>, ConfigError> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(Strategy::ALL.to_vec());
    }
    Ok(vec![value.parse()?])
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let config = parse(&["words.txt"]).unwrap();
        assert_eq!(config.input, PathBuf::from("words.txt"));
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.strategies, [Strategy::General]);
        assert!(!config.dump);
    }

    #[test]
    fn all_options() {
        let config = parse(&["-c", "17", "--strategy", "all", "-d", "in.txt"]).unwrap();
        assert_eq!(config.capacity, 17);
        assert_eq!(config.strategies, Strategy::ALL);
        assert!(config.dump);

        let config = parse(&["in.txt", "--strategy", "Prod"]).unwrap();
        assert_eq!(config.strategies, [Strategy::Prod]);
    }

    #[test]
    fn errors() {
        assert_eq!(parse(&[]), Err(ConfigError::MissingInput));
        assert_eq!(parse(&["-h", "in.txt"]), Err(ConfigError::HelpRequested));
        assert_eq!(
            parse(&["in.txt", "-c"]),
            Err(ConfigError::MissingValue("-c".into()))
        );
        assert_eq!(
            parse(&["in.txt", "-c", "0"]),
            Err(ConfigError::InvalidCapacity("0".into()))
        );
        assert_eq!(
            parse(&["in.txt", "-c", "-3"]),
            Err(ConfigError::InvalidCapacity("-3".into()))
        );
        assert_eq!(
            parse(&["in.txt", "-s", "crc"]),
            Err(ConfigError::UnknownStrategy(UnknownStrategy("crc".into())))
        );
        assert_eq!(
            parse(&["in.txt", "--verbose"]),
            Err(ConfigError::UnexpectedArgument("--verbose".into()))
        );
        assert_eq!(
            parse(&["a.txt", "b.txt"]),
            Err(ConfigError::UnexpectedArgument("b.txt".into()))
        );
    }
}
