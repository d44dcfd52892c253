// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


//! Single transferable vote for one seat: repeatedly exclude whoever has the fewest first preferences
//! among the candidates still standing, until one is left.
//!
//! All candidates tied on the fewest first preferences are excluded together. If that would exclude
//! everyone still standing, the count stops and the tie agent chooses among them.

use std::fmt::{Display, Formatter};
use log::debug;
use serde::{Serialize,Deserialize};
use crate::error::VotingError;
use crate::preference_table::PreferenceTable;
use crate::tie_resolution::tie_break_required;

/// One round of counting.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct StvRound<C> {
    /// The candidates still standing at the start of the round, in table order.
    pub active : Vec<C>,
    /// first_preferences[i] is the number of voters whose favourite remaining candidate is active[i].
    pub first_preferences : Vec<usize>,
    /// The candidates excluded at the end of the round. Empty for a final round that ends in a tie.
    pub eliminated : Vec<C>,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum StvConclusion {
    /// Everyone else was excluded.
    LastRemaining,
    /// All remaining candidates had the same number of first preferences; the tie agent decided.
    AllTied,
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct StvTranscript<C> {
    pub rounds : Vec<StvRound<C>>,
    pub conclusion : StvConclusion,
    pub winner : C,
}

impl <C:Display> Display for StvTranscript<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i,round) in self.rounds.iter().enumerate() {
            let counts = round.active.iter().zip(round.first_preferences.iter()).map(|(c,n)|format!("{}:{}",c,n)).collect::<Vec<_>>().join(" ");
            write!(f,"Round {} : {}",i+1,counts)?;
            if !round.eliminated.is_empty() {
                write!(f," excluded {}",round.eliminated.iter().map(|c|c.to_string()).collect::<Vec<_>>().join(","))?;
            }
            writeln!(f)?;
        }
        match self.conclusion {
            StvConclusion::LastRemaining => write!(f,"{} wins as the last remaining candidate",self.winner),
            StvConclusion::AllTied => write!(f,"{} wins on tie resolution",self.winner),
        }
    }
}

/// For each voter, the candidate indices in preference order.
fn preference_orders<T:PreferenceTable+?Sized>(table:&T) -> Result<Vec<Vec<usize>>,VotingError> {
    let num_candidates = table.num_candidates();
    let mut res = Vec::with_capacity(table.voters().len());
    for voter in table.voters() {
        let mut order : Vec<Option<usize>> = vec![None;num_candidates];
        for (index,candidate) in table.candidates().iter().enumerate() {
            let rank = table.rank_or_err(candidate,voter)?;
            if order[rank].replace(index).is_some() {
                return Err(VotingError::DataIntegrity(format!("Voter {:?} gives rank {} to more than one candidate",voter,rank)));
            }
        }
        res.push(order.into_iter().flatten().collect());
    }
    Ok(res)
}

/// Run the count, recording each round.
pub fn stv_with_transcript<T:PreferenceTable+?Sized>(table:&T,tie_agent:&T::Voter) -> Result<StvTranscript<T::Candidate>,VotingError> {
    table.check_voter(tie_agent)?;
    let candidates = table.candidates();
    let orders = preference_orders(table)?;
    let mut standing = vec![true;candidates.len()];
    let mut rounds = vec![];
    loop {
        let active : Vec<usize> = (0..candidates.len()).filter(|&i|standing[i]).collect();
        match active.len() {
            0 => return Err(VotingError::NoWinner),
            1 => return Ok(StvTranscript{ rounds, conclusion: StvConclusion::LastRemaining, winner: candidates[active[0]].clone() }),
            _ => {}
        }
        let mut counts = vec![0usize;candidates.len()];
        for order in &orders {
            if let Some(&favourite) = order.iter().find(|&&c|standing[c]) { counts[favourite]+=1; }
        }
        let fewest = active.iter().map(|&i|counts[i]).min().unwrap_or(0);
        let lowest : Vec<usize> = active.iter().copied().filter(|&i|counts[i]==fewest).collect();
        let mut round = StvRound{
            active: active.iter().map(|&i|candidates[i].clone()).collect(),
            first_preferences: active.iter().map(|&i|counts[i]).collect(),
            eliminated: vec![],
        };
        debug!("STV round {} first preferences {:?} for {:?}",rounds.len()+1,round.first_preferences,round.active);
        if lowest.len()==active.len() {
            let winner = tie_break_required(table,&round.active,tie_agent)?;
            debug!("All {} remaining candidates tied on {}",active.len(),fewest);
            rounds.push(round);
            return Ok(StvTranscript{ rounds, conclusion: StvConclusion::AllTied, winner });
        }
        for &i in &lowest { standing[i]=false; }
        round.eliminated = lowest.iter().map(|&i|candidates[i].clone()).collect();
        debug!("Excluding {:?}",round.eliminated);
        rounds.push(round);
    }
}

/// The STV winner.
pub fn stv<T:PreferenceTable+?Sized>(table:&T,tie_agent:&T::Voter) -> Result<T::Candidate,VotingError> {
    Ok(stv_with_transcript(table,tie_agent)?.winner)
}
