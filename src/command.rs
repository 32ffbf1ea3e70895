use crate::error::{Error, Result};
use std::str::FromStr;

/// A user action, as triggered by a button of the interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Generate a new dataset and pick initial centroids
    Initialize { n_points: usize, n_clusters: usize },
    /// Run one assignment pass
    AssignStep,
    /// Run one update pass
    UpdateStep,
}

impl Command {
    /// Builds an [`Initialize`](Command::Initialize) command out of the two input boxes of the
    /// interface, rejecting anything that is not a positive integer.
    pub fn initialize_from_input(n_points: &str, n_clusters: &str) -> Result<Self> {
        Ok(Command::Initialize {
            n_points: parse_positive("number of points", n_points)?,
            n_clusters: parse_positive("number of clusters", n_clusters)?,
        })
    }
}

/// Parses user input as a strictly positive integer.
pub fn parse_positive(field: &'static str, text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(Error::InvalidInput {
            field,
            value: text.to_string(),
        }),
    }
}

/// Text form of the commands: `init <points> <clusters>`, `assign` and `update`.
impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        match (words.next(), words.next(), words.next(), words.next()) {
            (Some("init"), Some(n_points), Some(n_clusters), None) => {
                Command::initialize_from_input(n_points, n_clusters)
            }
            (Some("assign"), None, None, None) => Ok(Command::AssignStep),
            (Some("update"), None, None, None) => Ok(Command::UpdateStep),
            _ => Err(Error::UnknownCommand(line.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_integers_are_accepted() {
        assert_eq!(parse_positive("n", "100"), Ok(100));
        assert_eq!(parse_positive("n", " 3\n"), Ok(3));
    }

    #[test]
    fn malformed_input_is_rejected() {
        for text in &["", "0", "-3", "abc", "1.5", "12a"] {
            assert_eq!(
                parse_positive("number of points", text),
                Err(Error::InvalidInput {
                    field: "number of points",
                    value: text.to_string()
                })
            );
        }
    }

    #[test]
    fn initialize_from_input_checks_both_fields() {
        assert_eq!(
            Command::initialize_from_input("100", "3"),
            Ok(Command::Initialize {
                n_points: 100,
                n_clusters: 3
            })
        );
        assert!(matches!(
            Command::initialize_from_input("100", ""),
            Err(Error::InvalidInput {
                field: "number of clusters",
                ..
            })
        ));
    }

    #[test]
    fn parses_the_text_protocol() {
        assert_eq!(
            "init 50 4".parse::<Command>(),
            Ok(Command::Initialize {
                n_points: 50,
                n_clusters: 4
            })
        );
        assert_eq!("  assign ".parse::<Command>(), Ok(Command::AssignStep));
        assert_eq!("update".parse::<Command>(), Ok(Command::UpdateStep));
        assert_eq!(
            "assign now".parse::<Command>(),
            Err(Error::UnknownCommand("assign now".into()))
        );
        assert!(matches!(
            "init 50".parse::<Command>(),
            Err(Error::UnknownCommand(_))
        ));
        assert!(matches!(
            "init x 4".parse::<Command>(),
            Err(Error::InvalidInput { .. })
        ));
    }
}
