use serde::{Deserialize, Serialize};

use super::team::SeededTeam;

/// Knockout round tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Round {
    #[serde(rename = "quarterfinal")]
    Quarterfinal,
    #[serde(rename = "semifinal")]
    Semifinal,
    #[serde(rename = "final")]
    Final,
}

/// Structural position of a matchup inside the bracket.
///
/// The semifinals reuse `Left0`/`Right0` for their half of the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BracketSlot {
    #[serde(rename = "left-0")]
    Left0,
    #[serde(rename = "left-1")]
    Left1,
    #[serde(rename = "right-0")]
    Right0,
    #[serde(rename = "right-1")]
    Right1,
    #[serde(rename = "final")]
    Final,
}

/// Pairing of two teams in one bracket slot.
///
/// `home`/`away` is the canonical order of the pairing; the side that is
/// nominally home for an individual series match alternates by match
/// number (see [`Matchup::home_for_match`]). A slot may sit half-empty
/// while it waits for an earlier round's winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub round: Round,
    pub slot: BracketSlot,
    pub home: Option<SeededTeam>,
    pub away: Option<SeededTeam>,
}

impl Matchup {
    /// Creates a structural slot with both sides still TBD.
    pub fn pending(round: Round, slot: BracketSlot) -> Self {
        Self { round, slot, home: None, away: None }
    }

    pub fn with_teams(round: Round, slot: BracketSlot, home: SeededTeam, away: SeededTeam) -> Self {
        Self { round, slot, home: Some(home), away: Some(away) }
    }

    /// Both participants are known.
    pub fn is_ready(&self) -> bool {
        self.home.is_some() && self.away.is_some()
    }

    /// Nominal home side for a 1-based match number.
    ///
    /// Odd match numbers keep the canonical order, even match numbers swap
    /// it. This is the fairness alternation applied across a series.
    pub fn home_for_match(&self, match_number: u8) -> Option<&SeededTeam> {
        if match_number % 2 == 1 {
            self.home.as_ref()
        } else {
            self.away.as_ref()
        }
    }

    /// Nominal away side for a 1-based match number.
    pub fn away_for_match(&self, match_number: u8) -> Option<&SeededTeam> {
        if match_number % 2 == 1 {
            self.away.as_ref()
        } else {
            self.home.as_ref()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::team::TeamRef;

    fn seeded(id: u32, name: &str, seed: u8) -> SeededTeam {
        SeededTeam { team: TeamRef::new(id, name), seed }
    }

    #[test]
    fn test_home_alternates_by_match_parity() {
        let m = Matchup::with_teams(
            Round::Quarterfinal,
            BracketSlot::Left0,
            seeded(1, "Alpha", 1),
            seeded(8, "Hotel", 8),
        );

        // Matches 1 and 3 share the canonical home, 2 and 4 swap it.
        assert_eq!(m.home_for_match(1).unwrap().seed, 1);
        assert_eq!(m.home_for_match(2).unwrap().seed, 8);
        assert_eq!(m.home_for_match(3).unwrap().seed, 1);
        assert_eq!(m.home_for_match(4).unwrap().seed, 8);
        assert_eq!(m.away_for_match(2).unwrap().seed, 1);
    }

    #[test]
    fn test_pending_slot_is_not_ready() {
        let m = Matchup::pending(Round::Semifinal, BracketSlot::Right0);
        assert!(!m.is_ready());
        assert!(m.home_for_match(1).is_none());
    }

    #[test]
    fn test_slot_serde_names() {
        let json = serde_json::to_string(&BracketSlot::Left0).unwrap();
        assert_eq!(json, "\"left-0\"");
        let round: Round = serde_json::from_str("\"quarterfinal\"").unwrap();
        assert_eq!(round, Round::Quarterfinal);
    }
}
