use proptest::prelude::*;

use crate::models::matchup::{BracketSlot, Matchup, Round};
use crate::models::series::{MatchScore, Series};
use crate::models::team::{SeededTeam, TeamId, TeamRef};
use crate::series::resolve_series;

fn series(best_of: u8) -> Series {
    let matchup = Matchup::with_teams(
        Round::Quarterfinal,
        BracketSlot::Left0,
        SeededTeam { team: TeamRef::new(1, "Home"), seed: 1 },
        SeededTeam { team: TeamRef::new(2, "Away"), seed: 2 },
    );
    Series::new(matchup, best_of).unwrap()
}

/// Score where the canonical home side wins match `n`, or loses it.
fn score(match_number: u8, canonical_home_wins: bool) -> MatchScore {
    let nominal_home_wins = (match_number % 2 == 1) == canonical_home_wins;
    if nominal_home_wins {
        MatchScore { home_score: 7, away_score: 2 }
    } else {
        MatchScore { home_score: 2, away_score: 7 }
    }
}

proptest! {
    /// The winner appears exactly when one side's wins first reach
    /// ceil(best_of / 2), never earlier and never for a different team.
    #[test]
    fn prop_winner_declared_at_threshold(
        best_of in prop::sample::select(vec![3u8, 5, 7, 9]),
        outcomes in prop::collection::vec(any::<bool>(), 9),
    ) {
        let mut s = series(best_of);
        let needed = s.wins_needed();
        let mut home_wins = 0u8;
        let mut away_wins = 0u8;
        let mut expected_winner: Option<TeamId> = None;

        for n in 1..=best_of {
            let canonical_home_wins = outcomes[n as usize - 1];
            s.record_result(n, score(n, canonical_home_wins)).unwrap();

            if expected_winner.is_none() {
                if canonical_home_wins {
                    home_wins += 1;
                } else {
                    away_wins += 1;
                }
                if home_wins == needed {
                    expected_winner = Some(TeamId(1));
                } else if away_wins == needed {
                    expected_winner = Some(TeamId(2));
                }
            }

            let resolved = resolve_series(&s).unwrap();
            prop_assert_eq!(resolved.winner, expected_winner);
            prop_assert_eq!(resolved.home_wins, home_wins);
            prop_assert_eq!(resolved.away_wins, away_wins);
        }
    }

    /// Appending results past the clinching match never changes the
    /// declared winner.
    #[test]
    fn prop_resolution_is_idempotent_past_clinch(
        best_of in prop::sample::select(vec![3u8, 5, 7]),
        extra in prop::collection::vec(any::<bool>(), 4),
    ) {
        let mut s = series(best_of);
        let needed = s.wins_needed();
        for n in 1..=needed {
            s.record_result(n, score(n, true)).unwrap();
        }
        let clinched = resolve_series(&s).unwrap();
        prop_assert_eq!(clinched.winner, Some(TeamId(1)));

        for (i, &home_side_wins) in extra.iter().enumerate() {
            let n = needed + 1 + i as u8;
            if n > best_of {
                break;
            }
            s.record_result(n, score(n, home_side_wins)).unwrap();
            let again = resolve_series(&s).unwrap();
            prop_assert_eq!(again.winner, Some(TeamId(1)));
        }
    }
}
