// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


//! Per candidate scores, and the common "add up, find the best, break ties" pattern used by most rules.

use std::fmt::Debug;
use std::ops::AddAssign;
use log::debug;
use serde::{Serialize,Deserialize};
use crate::error::VotingError;
use crate::preference_table::PreferenceTable;
use crate::tie_resolution::tie_break_required;

/// Something that can be accumulated per candidate. Implemented for all the usual numbers.
pub trait Score : Copy+PartialOrd+AddAssign+Default+Debug {}
impl <S:Copy+PartialOrd+AddAssign+Default+Debug> Score for S {}

/// A score for each candidate, in the order the table lists candidates.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Tally<C,S> {
    pub candidates : Vec<C>,
    pub scores : Vec<S>,
}

impl <C:Clone+PartialEq,S:Score> Tally<C,S> {
    /// Everyone starts on zero.
    pub fn zero(candidates:&[C]) -> Self {
        Tally{ candidates:candidates.to_vec(), scores: vec![S::default();candidates.len()] }
    }

    pub fn get(&self,candidate:&C) -> Option<S> {
        self.candidates.iter().position(|c|c==candidate).map(|i|self.scores[i])
    }

    pub fn iter(&self) -> impl Iterator<Item=(&C,S)> {
        self.candidates.iter().zip(self.scores.iter().copied())
    }

    fn extreme_candidates(&self,better:impl Fn(S,S)->bool) -> Vec<C> {
        let mut best : Option<S> = None;
        for &s in &self.scores {
            if best.is_none_or(|b|better(s,b)) { best=Some(s); }
        }
        match best {
            None => vec![],
            Some(best) => self.iter().filter(|(_,s)|*s==best).map(|(c,_)|c.clone()).collect(),
        }
    }

    /// All candidates with the highest score (in table order). Empty only if there are no candidates.
    /// ```
    /// use voting::tally::Tally;
    /// let tally = Tally{ candidates: vec!['a','b','c'], scores: vec![3,5,5] };
    /// assert_eq!(tally.max_candidates(),vec!['b','c']);
    /// assert_eq!(tally.min_candidates(),vec!['a']);
    /// ```
    pub fn max_candidates(&self) -> Vec<C> { self.extreme_candidates(|s,best|s>best) }
    /// All candidates with the lowest score (in table order).
    pub fn min_candidates(&self) -> Vec<C> { self.extreme_candidates(|s,best|s<best) }
}

/// Add up, for every voter and every candidate, the score that voter gives that candidate.
/// The score may only depend upon the rank (0 = first) the voter gives the candidate.
/// Each voter must give each rank to exactly one candidate, otherwise it is a DataIntegrity error.
/// ```
/// use voting::preferences::Preferences;
/// use voting::tally::tally_by_rank;
/// let prefs = Preferences::from_rankings(vec![vec![2,1,3],vec![2,3,1]]).unwrap();
/// let first_places = tally_by_rank(&prefs,|rank|if rank==0 {1} else {0}).unwrap();
/// assert_eq!(first_places.scores,vec![0,2,0]);
/// ```
pub fn tally_by_rank<T:PreferenceTable+?Sized,S:Score>(table:&T,score_for_rank:impl Fn(usize)->S) -> Result<Tally<T::Candidate,S>,VotingError> {
    let mut tally = Tally::zero(table.candidates());
    let mut rank_used = vec![false;table.num_candidates()];
    for voter in table.voters() {
        rank_used.fill(false);
        for (candidate,score) in table.candidates().iter().zip(tally.scores.iter_mut()) {
            let rank = table.rank_or_err(candidate,voter)?;
            if std::mem::replace(&mut rank_used[rank],true) {
                return Err(VotingError::DataIntegrity(format!("Voter {:?} gives rank {} to more than one candidate",voter,rank)));
            }
            *score+=score_for_rank(rank);
        }
    }
    debug!("Tally {:?}",tally);
    Ok(tally)
}

/// The candidate with the highest score, ties being resolved by tie_agent's preferences.
pub fn highest_score_wins<T:PreferenceTable+?Sized,S:Score>(table:&T,tally:&Tally<T::Candidate,S>,tie_agent:&T::Voter) -> Result<T::Candidate,VotingError> {
    tie_break_required(table,&tally.max_candidates(),tie_agent)
}
