// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


//! The simple single winner rules. Apart from dictatorship, these are all of the form
//! "add up points for each candidate based on rank, most points wins, ties to the tie agent's favourite".

use crate::error::VotingError;
use crate::preference_table::PreferenceTable;
use crate::tally::{highest_score_wins, tally_by_rank, Tally};

/// The winner is whoever `agent` ranks first.
pub fn dictatorship<T:PreferenceTable+?Sized>(table:&T,agent:&T::Voter) -> Result<T::Candidate,VotingError> {
    table.check_voter(agent)?;
    table.candidates().iter().find(|c|table.rank(c,agent)==Some(0)).cloned()
        .ok_or_else(||VotingError::DataIntegrity(format!("Voter {:?} does not rank any candidate first",agent)))
}

/// Number of voters who rank each candidate first.
pub fn plurality_scores<T:PreferenceTable+?Sized>(table:&T) -> Result<Tally<T::Candidate,usize>,VotingError> {
    tally_by_rank(table,|rank|if rank==0 {1} else {0})
}

/// Most first preferences wins.
pub fn plurality<T:PreferenceTable+?Sized>(table:&T,tie_agent:&T::Voter) -> Result<T::Candidate,VotingError> {
    highest_score_wins(table,&plurality_scores(table)?,tie_agent)
}

/// Number of voters who do not rank each candidate last.
pub fn veto_scores<T:PreferenceTable+?Sized>(table:&T) -> Result<Tally<T::Candidate,usize>,VotingError> {
    let last = table.num_candidates().saturating_sub(1);
    tally_by_rank(table,|rank|if rank==last {0} else {1})
}

/// Fewest last places wins.
pub fn veto<T:PreferenceTable+?Sized>(table:&T,tie_agent:&T::Voter) -> Result<T::Candidate,VotingError> {
    highest_score_wins(table,&veto_scores(table)?,tie_agent)
}

/// Borda count: a candidate gets n-1-rank points from each voter, where n is the number of candidates.
pub fn borda_scores<T:PreferenceTable+?Sized>(table:&T) -> Result<Tally<T::Candidate,usize>,VotingError> {
    let last = table.num_candidates().saturating_sub(1);
    tally_by_rank(table,|rank|last-rank)
}

pub fn borda<T:PreferenceTable+?Sized>(table:&T,tie_agent:&T::Voter) -> Result<T::Candidate,VotingError> {
    highest_score_wins(table,&borda_scores(table)?,tie_agent)
}
