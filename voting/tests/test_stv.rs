// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


use voting::ballot_metadata::{CandidateId, VoterId};
use voting::preferences::Preferences;
use voting::single_transferable_vote::{stv, stv_with_transcript, StvConclusion, StvRound};

fn c(n:u32) -> CandidateId { CandidateId(n) }

#[test]
fn test_votes_move_to_next_remaining_preference() {
    // 3 has the fewest first preferences. Once excluded, voter 5's vote goes to 2, who then beats 1.
    let prefs = Preferences::from_rankings(vec![vec![1,2,3],vec![1,3,2],vec![2,3,1],vec![2,1,3],vec![3,2,1]]).unwrap();
    let transcript = stv_with_transcript(&prefs,&VoterId(1)).unwrap();
    assert_eq!(c(2),transcript.winner);
    assert_eq!(StvConclusion::LastRemaining,transcript.conclusion);
    assert_eq!(vec![
        StvRound{ active: vec![c(1),c(2),c(3)], first_preferences: vec![2,2,1], eliminated: vec![c(3)] },
        StvRound{ active: vec![c(1),c(2)], first_preferences: vec![2,3], eliminated: vec![c(1)] },
    ],transcript.rounds);
    assert_eq!("Round 1 : 1:2 2:2 3:1 excluded 3\nRound 2 : 1:2 2:3 excluded 1\n2 wins as the last remaining candidate",transcript.to_string());
}

#[test]
fn test_all_lowest_excluded_together() {
    let prefs = Preferences::from_rankings(vec![vec![1,2,3,4],vec![1,2,3,4],vec![2,1,3,4],vec![3,2,1,4],vec![4,2,1,3]]).unwrap();
    let transcript = stv_with_transcript(&prefs,&VoterId(5)).unwrap();
    assert_eq!(c(1),transcript.winner);
    assert_eq!(1,transcript.rounds.len());
    assert_eq!(vec![c(2),c(3),c(4)],transcript.rounds[0].eliminated);
}

#[test]
fn test_candidate_with_no_first_preferences_goes_first() {
    let prefs = Preferences::from_rankings(vec![vec![1,3,2,4],vec![1,2,3,4],vec![2,1,3,4],vec![2,3,1,4],vec![3,1,2,4]]).unwrap();
    let transcript = stv_with_transcript(&prefs,&VoterId(3)).unwrap();
    let eliminated : Vec<Vec<CandidateId>> = transcript.rounds.iter().map(|r|r.eliminated.clone()).collect();
    assert_eq!(vec![vec![c(4)],vec![c(3)],vec![c(2)]],eliminated);
    assert_eq!(c(1),transcript.winner);
}

#[test]
fn test_tie_among_all_remaining() {
    // after 3 is excluded, 1 and 2 have 3 votes each.
    let prefs = Preferences::from_rankings(vec![vec![1,2,3],vec![1,2,3],vec![1,2,3],vec![2,1,3],vec![2,1,3],vec![3,2,1]]).unwrap();
    let for_1 = stv_with_transcript(&prefs,&VoterId(1)).unwrap();
    let for_2 = stv_with_transcript(&prefs,&VoterId(4)).unwrap();
    assert_eq!(StvConclusion::AllTied,for_1.conclusion);
    assert_eq!(c(1),for_1.winner);
    assert_eq!(c(2),for_2.winner);
    assert_eq!(for_1.rounds,for_2.rounds);
    let last = for_1.rounds.last().unwrap();
    assert_eq!(vec![c(1),c(2)],last.active);
    assert!(last.eliminated.is_empty());
}

#[test]
fn test_tie_at_start() {
    let prefs = Preferences::from_rankings(vec![vec![1,2,3],vec![2,3,1],vec![3,1,2]]).unwrap();
    assert_eq!(c(3),stv(&prefs,&VoterId(3)).unwrap());
    assert_eq!(c(2),stv(&prefs,&VoterId(2)).unwrap());
    assert_eq!(1,stv_with_transcript(&prefs,&VoterId(1)).unwrap().rounds.len());
}

#[test]
fn test_transcript_serializes() -> anyhow::Result<()> {
    let prefs = Preferences::from_rankings(vec![vec![1,2],vec![1,2],vec![2,1]])?;
    let transcript = stv_with_transcript(&prefs,&VoterId(1))?;
    let json = serde_json::to_string(&transcript)?;
    assert_eq!(r#"{"rounds":[{"active":[1,2],"first_preferences":[2,1],"eliminated":[2]}],"conclusion":"LastRemaining","winner":1}"#,json);
    Ok(())
}
