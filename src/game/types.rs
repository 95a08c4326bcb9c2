//! The type triangle: Dark beats Psychic, Psychic beats Fighting, Fighting beats Dark.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleType {
    Dark,
    Psychic,
    Fighting,
}

/// Matchup class relative to the attacking side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advantage {
    Advantage,
    Neutral,
    Disadvantage,
}

/// Returned when console input is not one of the three literal type names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type '{0}' (expected Dark, Psychic, or Fighting)")]
pub struct ParseTypeError(pub String);

impl BattleType {
    /// All types in canonical order.
    pub const ALL: [BattleType; 3] = [BattleType::Dark, BattleType::Psychic, BattleType::Fighting];

    pub fn name(self) -> &'static str {
        match self {
            BattleType::Dark => "Dark",
            BattleType::Psychic => "Psychic",
            BattleType::Fighting => "Fighting",
        }
    }

    /// The single type this one is super-effective against.
    pub fn prey(self) -> BattleType {
        match self {
            BattleType::Dark => BattleType::Psychic,
            BattleType::Psychic => BattleType::Fighting,
            BattleType::Fighting => BattleType::Dark,
        }
    }

    pub fn beats(self, other: BattleType) -> bool {
        self.prey() == other
    }
}

impl fmt::Display for BattleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-sensitive: only `Dark`, `Psychic` and `Fighting` are accepted.
impl FromStr for BattleType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BattleType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ParseTypeError(s.to_string()))
    }
}

/// Classify `attacker` vs `defender`. Total over the 3x3 domain.
pub fn type_advantage(attacker: BattleType, defender: BattleType) -> Advantage {
    if attacker.beats(defender) {
        Advantage::Advantage
    } else if defender.beats(attacker) {
        Advantage::Disadvantage
    } else {
        Advantage::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_is_cyclic() {
        assert!(BattleType::Dark.beats(BattleType::Psychic));
        assert!(BattleType::Psychic.beats(BattleType::Fighting));
        assert!(BattleType::Fighting.beats(BattleType::Dark));
        for t in BattleType::ALL {
            assert!(!t.beats(t), "{} must not beat itself", t);
            assert_eq!(t.prey().prey().prey(), t);
        }
    }

    #[test]
    fn advantage_table_covers_every_pair() {
        let mut counts = (0, 0, 0);
        for a in BattleType::ALL {
            for d in BattleType::ALL {
                match type_advantage(a, d) {
                    Advantage::Advantage => counts.0 += 1,
                    Advantage::Neutral => counts.1 += 1,
                    Advantage::Disadvantage => counts.2 += 1,
                }
            }
        }
        assert_eq!(counts, (3, 3, 3));
        assert_eq!(
            type_advantage(BattleType::Fighting, BattleType::Dark),
            Advantage::Advantage
        );
        assert_eq!(
            type_advantage(BattleType::Psychic, BattleType::Dark),
            Advantage::Disadvantage
        );
    }

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!("Dark".parse::<BattleType>(), Ok(BattleType::Dark));
        assert_eq!("Fighting".parse::<BattleType>(), Ok(BattleType::Fighting));
        assert!("dark".parse::<BattleType>().is_err());
        assert!(" Psychic".parse::<BattleType>().is_err());
        assert!("".parse::<BattleType>().is_err());
        let err = "Fire".parse::<BattleType>().unwrap_err();
        assert_eq!(err, ParseTypeError("Fire".to_string()));
    }
}
