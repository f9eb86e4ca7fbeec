use serde::{Deserialize, Serialize};

use crate::error::ProvaError;

/// Minimum number of players on a roster.
pub const MIN_PLAYERS: usize = 1;
/// Maximum number of players on a roster.
pub const MAX_PLAYERS: usize = 8;
/// Selector option representing "nobody is practicing".
pub const IDLE_OPTION: &str = "None";

/// Ordered list of unique player display names, fixed at configuration time.
///
/// Names are trimmed on construction; uniqueness is case-sensitive after
/// trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    /// Validate and build a roster.
    ///
    /// # Errors
    /// Returns `ProvaError::InvalidArg` when a name is empty after trimming,
    /// a name repeats, or the player count falls outside
    /// [`MIN_PLAYERS`]..=[`MAX_PLAYERS`].
    pub fn new<I, S>(names: I) -> Result<Self, ProvaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                return Err(ProvaError::InvalidArg(
                    "player names must not be empty".to_string(),
                ));
            }
            if players.contains(&name) {
                return Err(ProvaError::InvalidArg(format!(
                    "duplicate player name '{name}' in roster"
                )));
            }
            players.push(name);
        }
        if players.len() < MIN_PLAYERS || players.len() > MAX_PLAYERS {
            return Err(ProvaError::InvalidArg(format!(
                "roster must have between {MIN_PLAYERS} and {MAX_PLAYERS} players, got {}",
                players.len()
            )));
        }
        Ok(Self { players })
    }

    /// Ordered view of the player names.
    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster is empty. Validated rosters never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether `name` is on the roster (case-sensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    /// Iterate over the player names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    /// The option list a host selector entity should offer: the idle option
    /// followed by every player.
    #[must_use]
    pub fn selector_options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(self.players.len() + 1);
        options.push(IDLE_OPTION.to_string());
        options.extend(self.players.iter().cloned());
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_preserves_order() {
        let roster = Roster::new(["  Anna ", "Bruno"]).unwrap();
        assert_eq!(roster.players(), ["Anna", "Bruno"]);
        assert!(roster.contains("Anna"));
        assert!(!roster.contains("anna"));
    }

    #[test]
    fn rejects_duplicates_and_bounds() {
        assert!(Roster::new(["Anna", "Anna"]).is_err());
        assert!(Roster::new(["Anna", " Anna "]).is_err());
        assert!(Roster::new(Vec::<String>::new()).is_err());
        assert!(Roster::new((0..9).map(|i| format!("p{i}"))).is_err());
        assert!(Roster::new(["", "Bruno"]).is_err());
    }

    #[test]
    fn selector_options_lead_with_idle() {
        let roster = Roster::new(["Anna"]).unwrap();
        assert_eq!(roster.selector_options(), [IDLE_OPTION, "Anna"]);
    }
}
