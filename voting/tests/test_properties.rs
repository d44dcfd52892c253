// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


//! Properties that should hold for every election, checked on a batch of random ones.

use voting::ballot_metadata::{CandidateId, ElectionMetadata};
use voting::preference_table::PreferenceTable;
use voting::preferences::Preferences;
use voting::random_util::{random_preferences, random_preferences_of_size, random_score_vector, random_voter, seeded_rng};
use voting::rules::{borda, borda_scores, dictatorship, plurality, plurality_scores, veto};
use voting::scoring::{scoring_rule, ScoreVector};
use voting::single_transferable_vote::{stv, stv_with_transcript};
use voting::tie_resolution::tie_break;

const NUM_ELECTIONS : u64 = 50;

fn random_elections() -> impl Iterator<Item=Preferences> {
    (0..NUM_ELECTIONS).map(|seed|random_preferences(&mut seeded_rng(seed)).unwrap())
}

#[test]
fn test_random_sizes() {
    for prefs in random_elections() {
        assert!((5..=10).contains(&prefs.voters().len()));
        assert!((5..=10).contains(&prefs.candidates().len()));
    }
}

#[test]
fn test_winners_are_candidates() {
    let mut rng = seeded_rng(1000);
    for prefs in random_elections() {
        let candidates = prefs.candidate_set();
        let tie_agent = random_voter(&prefs,&mut rng).unwrap();
        let score_vector = random_score_vector(prefs.num_candidates(),&mut rng);
        assert!(candidates.contains(&plurality(&prefs,&tie_agent).unwrap()));
        assert!(candidates.contains(&veto(&prefs,&tie_agent).unwrap()));
        assert!(candidates.contains(&borda(&prefs,&tie_agent).unwrap()));
        assert!(candidates.contains(&stv(&prefs,&tie_agent).unwrap()));
        assert!(candidates.contains(&scoring_rule(&prefs,&score_vector,&tie_agent).unwrap()));
        for voter in prefs.voters() {
            let dictator_choice = dictatorship(&prefs,voter).unwrap();
            assert_eq!(Some(0),prefs.rank(&dictator_choice,voter));
        }
    }
}

#[test]
fn test_plurality_winner_has_most_first_preferences() {
    for prefs in random_elections() {
        let tally = plurality_scores(&prefs).unwrap();
        assert_eq!(prefs.voters().len(),tally.scores.iter().sum::<usize>());
        for voter in prefs.voters() {
            let winner_count = tally.get(&plurality(&prefs,voter).unwrap()).unwrap();
            assert!(tally.scores.iter().all(|&s|s<=winner_count));
        }
    }
}

#[test]
fn test_borda_score_is_sum_of_points() {
    for prefs in random_elections() {
        let n = prefs.num_candidates();
        let tally = borda_scores(&prefs).unwrap();
        for (candidate,score) in tally.iter() {
            let expected : usize = prefs.voters().iter().map(|v|n-1-prefs.rank(candidate,v).unwrap()).sum();
            assert_eq!(expected,score);
        }
    }
}

#[test]
fn test_standard_score_vectors_agree_with_rules() {
    for prefs in random_elections() {
        let n = prefs.num_candidates();
        for voter in prefs.voters() {
            assert_eq!(plurality(&prefs,voter).unwrap(),scoring_rule(&prefs,&ScoreVector::plurality(n),voter).unwrap());
            assert_eq!(veto(&prefs,voter).unwrap(),scoring_rule(&prefs,&ScoreVector::veto(n),voter).unwrap());
            assert_eq!(borda(&prefs,voter).unwrap(),scoring_rule(&prefs,&ScoreVector::borda(n),voter).unwrap());
        }
    }
}

#[test]
fn test_stv_terminates_quickly() {
    for prefs in random_elections() {
        for voter in prefs.voters() {
            let transcript = stv_with_transcript(&prefs,voter).unwrap();
            assert!(transcript.rounds.len()<=prefs.num_candidates());
            assert!(prefs.candidate_set().contains(&transcript.winner));
            for pair in transcript.rounds.windows(2) {
                assert!(pair[1].active.len()<pair[0].active.len());
            }
            for round in &transcript.rounds {
                assert_eq!(prefs.voters().len(),round.first_preferences.iter().sum::<usize>());
            }
        }
    }
}

#[test]
fn test_tie_break_is_repeatable() {
    for prefs in random_elections() {
        let everyone = prefs.candidates().to_vec();
        for voter in prefs.voters() {
            let first = tie_break(&prefs,&everyone,voter).unwrap();
            assert_eq!(first,tie_break(&prefs,&everyone,voter).unwrap());
            assert_eq!(first,Some(dictatorship(&prefs,voter).unwrap()));
        }
    }
}

/// Move `favourite` to the top of every ballot.
fn make_unanimous(prefs:&Preferences,favourite:CandidateId) -> Preferences {
    let ballots = prefs.voters().iter().map(|&v|{
        let mut ballot = prefs.ballot(v).unwrap().to_vec();
        ballot.retain(|&c|c!=favourite);
        ballot.insert(0,favourite);
        ballot
    }).collect();
    Preferences::new(ElectionMetadata::default(),prefs.voters().to_vec(),prefs.candidates().to_vec(),ballots).unwrap()
}

#[test]
fn test_everyone_agrees_on_favourite() {
    let mut rng = seeded_rng(7);
    for size in 1..8 {
        let random = random_preferences_of_size(size+2,size,&mut rng).unwrap();
        let favourite = random.candidates()[size/2];
        let prefs = make_unanimous(&random,favourite);
        let decreasing = ScoreVector::new((0..size).map(|rank|10.0-rank as f64*1.5).collect());
        for voter in prefs.voters() {
            assert_eq!(favourite,plurality(&prefs,voter).unwrap());
            assert_eq!(favourite,borda(&prefs,voter).unwrap());
            assert_eq!(favourite,veto(&prefs,voter).unwrap());
            assert_eq!(favourite,stv(&prefs,voter).unwrap());
            assert_eq!(favourite,dictatorship(&prefs,voter).unwrap());
            assert_eq!(favourite,scoring_rule(&prefs,&decreasing,voter).unwrap());
        }
    }
}
