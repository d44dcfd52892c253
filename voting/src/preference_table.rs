// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.

//! The read only view of an election that all the rules work from.

use std::fmt::Debug;
use std::hash::Hash;
use crate::error::VotingError;

/// Anything that can say who the voters and candidates are, and how each voter ranks each candidate.
///
/// Each voter's ranks must be a permutation of `0..num_candidates()`, 0 being most preferred.
/// The voter and candidate lists must be non-empty and must not change between calls.
pub trait PreferenceTable {
    type Voter : Clone+Eq+Hash+Debug;
    type Candidate : Clone+Eq+Hash+Debug;

    fn voters(&self) -> &[Self::Voter];
    fn candidates(&self) -> &[Self::Candidate];
    /// The position of `candidate` in `voter`'s ranking, 0 being first.
    /// None means the data is broken, and is reported as [VotingError::DataIntegrity] by the rules.
    fn rank(&self,candidate:&Self::Candidate,voter:&Self::Voter) -> Option<usize>;

    fn num_candidates(&self) -> usize { self.candidates().len() }

    fn contains_voter(&self,voter:&Self::Voter) -> bool { self.voters().contains(voter) }

    /// Err(InvalidAgent) unless `voter` is one of the voters.
    fn check_voter(&self,voter:&Self::Voter) -> Result<(),VotingError> {
        if self.contains_voter(voter) { Ok(()) } else { Err(VotingError::InvalidAgent(format!("{:?}",voter))) }
    }

    /// Like [PreferenceTable::rank], but a missing or out of range rank is an error.
    fn rank_or_err(&self,candidate:&Self::Candidate,voter:&Self::Voter) -> Result<usize,VotingError> {
        let num_candidates = self.num_candidates();
        match self.rank(candidate,voter) {
            Some(rank) if rank<num_candidates => Ok(rank),
            Some(rank) => Err(VotingError::DataIntegrity(format!("Voter {:?} gives candidate {:?} rank {} but there are only {} candidates",voter,candidate,rank,num_candidates))),
            None => Err(VotingError::DataIntegrity(format!("Voter {:?} does not rank candidate {:?}",voter,candidate))),
        }
    }
}
