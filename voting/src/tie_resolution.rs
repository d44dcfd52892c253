// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


//! Resolving ties between candidates who have equal tallies.

use log::trace;
use crate::error::VotingError;
use crate::preference_table::PreferenceTable;

/// Choose, out of possible_winners, the candidate that `agent` ranks best.
///
/// Returns Ok(None) if there are no possible winners. The agent is checked first, so an
/// agent who is not a voter is an error even then.
/// As each voter's ranks are all different, the result is unique.
pub fn tie_break<T:PreferenceTable+?Sized>(table:&T,possible_winners:&[T::Candidate],agent:&T::Voter) -> Result<Option<T::Candidate>,VotingError> {
    table.check_voter(agent)?;
    let mut best : Option<(usize,&T::Candidate)> = None;
    for candidate in possible_winners {
        let rank = table.rank_or_err(candidate,agent)?;
        if best.is_none_or(|(best_rank,_)|rank<best_rank) { best=Some((rank,candidate)); }
    }
    if possible_winners.len()>1 {
        if let Some((rank,winner)) = best { trace!("Tie between {:?} resolved in favour of {:?}, ranked {} by {:?}",possible_winners,winner,rank,agent); }
    }
    Ok(best.map(|(_,candidate)|candidate.clone()))
}

/// Like [tie_break], but having no one to choose from is [VotingError::NoWinner].
pub fn tie_break_required<T:PreferenceTable+?Sized>(table:&T,possible_winners:&[T::Candidate],agent:&T::Voter) -> Result<T::Candidate,VotingError> {
    tie_break(table,possible_winners,agent)?.ok_or(VotingError::NoWinner)
}
