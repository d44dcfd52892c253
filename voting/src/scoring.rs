// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


//! Positional scoring rules, where each rank position is worth a given number of points.

use std::fmt::{Display, Formatter};
use serde::{Serialize,Deserialize};
use crate::error::VotingError;
use crate::preference_table::PreferenceTable;
use crate::tally::{highest_score_wins, tally_by_rank, Tally};

/// The points given for each rank position. weights[0] is what a voter's first choice gets.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(transparent)]
pub struct ScoreVector {
    pub weights : Vec<f64>
}

impl ScoreVector {
    pub fn new(weights:Vec<f64>) -> Self { ScoreVector{weights} }

    /// 1 point for first place, nothing else.
    /// ```
    /// use voting::scoring::ScoreVector;
    /// assert_eq!(ScoreVector::plurality(3).weights,vec![1.0,0.0,0.0]);
    /// assert_eq!(ScoreVector::veto(3).weights,vec![1.0,1.0,0.0]);
    /// assert_eq!(ScoreVector::borda(3).weights,vec![2.0,1.0,0.0]);
    /// ```
    pub fn plurality(num_candidates:usize) -> Self {
        ScoreVector{weights:(0..num_candidates).map(|rank|if rank==0 {1.0} else {0.0}).collect()}
    }
    /// 1 point for everyone but last place.
    pub fn veto(num_candidates:usize) -> Self {
        ScoreVector{weights:(0..num_candidates).map(|rank|if rank+1==num_candidates {0.0} else {1.0}).collect()}
    }
    /// n-1 points for first place down to 0 for last place.
    pub fn borda(num_candidates:usize) -> Self {
        ScoreVector{weights:(0..num_candidates).map(|rank|(num_candidates-1-rank) as f64).collect()}
    }

    /// Make sure there is exactly one usable weight per candidate.
    pub fn check(&self,num_candidates:usize) -> Result<(),VotingError> {
        if self.weights.is_empty() || self.weights.len()!=num_candidates {
            return Err(VotingError::InvalidScoreVector{expected:num_candidates,got:self.weights.len()});
        }
        if let Some(position) = self.weights.iter().position(|w|!w.is_finite()) {
            return Err(VotingError::ScoreNotFinite{position});
        }
        Ok(())
    }
}

impl Display for ScoreVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f,"[{}]",self.weights.iter().map(|w|w.to_string()).collect::<Vec<_>>().join(","))
    }
}

impl From<Vec<f64>> for ScoreVector {
    fn from(weights: Vec<f64>) -> Self { ScoreVector{weights} }
}

/// The total points each candidate gets under the score vector.
pub fn scoring_rule_scores<T:PreferenceTable+?Sized>(table:&T,score_vector:&ScoreVector) -> Result<Tally<T::Candidate,f64>,VotingError> {
    score_vector.check(table.num_candidates())?;
    tally_by_rank(table,|rank|score_vector.weights[rank])
}

/// The candidate with the most points, ties resolved by tie_agent.
pub fn scoring_rule<T:PreferenceTable+?Sized>(table:&T,score_vector:&ScoreVector,tie_agent:&T::Voter) -> Result<T::Candidate,VotingError> {
    let tally = scoring_rule_scores(table,score_vector)?;
    highest_score_wins(table,&tally,tie_agent)
}
