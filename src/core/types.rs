use serde::{Deserialize, Serialize};

/// Outcome of classifying a single unknown sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Mean log-odds strictly positive: hexamers favor the coding model
    Coding,
    /// Mean log-odds strictly negative: hexamers favor the intronic model
    Intronic,
    /// Mean log-odds exactly zero, the models cannot be told apart
    Undetermined,
    /// Degenerate scoring: no extractable windows or a non-finite score
    Error,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Coding => write!(f, "Coding"),
            Self::Intronic => write!(f, "Intronic"),
            Self::Undetermined => write!(f, "Undetermined"),
            Self::Error => write!(f, "Error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Classification::Coding.to_string(), "Coding");
        assert_eq!(Classification::Intronic.to_string(), "Intronic");
        assert_eq!(Classification::Undetermined.to_string(), "Undetermined");
        assert_eq!(Classification::Error.to_string(), "Error");
    }
}
