// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.

//! An in memory preference table, as read from a file or generated randomly.

use std::collections::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use crate::ballot_metadata::{CandidateId, ElectionMetadata, VoterId};
use crate::error::VotingError;
use crate::preference_table::PreferenceTable;

/// What is actually stored in a file. Checked and indexed on the way in.
#[derive(Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    metadata : ElectionMetadata,
    voters : Vec<VoterId>,
    candidates : Vec<CandidateId>,
    ballots : Vec<Vec<CandidateId>>,
}

impl TryFrom<PreferencesFile> for Preferences {
    type Error = VotingError;
    fn try_from(file: PreferencesFile) -> Result<Self, Self::Error> {
        Preferences::new(file.metadata,file.voters,file.candidates,file.ballots)
    }
}

/// Every voter's complete ranking of every candidate.
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(try_from = "PreferencesFile")]
pub struct Preferences {
    pub metadata : ElectionMetadata,
    voters : Vec<VoterId>,
    candidates : Vec<CandidateId>,
    /// ballots[i] is the ranking of voters[i], most preferred first.
    ballots : Vec<Vec<CandidateId>>,
    #[serde(skip)]
    voter_index : HashMap<VoterId,usize>,
    #[serde(skip)]
    candidate_index : HashMap<CandidateId,usize>,
    /// ranks[voter index][candidate index]
    #[serde(skip)]
    ranks : Vec<Vec<usize>>,
}

fn check_unique<T:Copy+Eq+std::hash::Hash+std::fmt::Debug>(what:&str,list:&[T]) -> Result<HashMap<T,usize>,VotingError> {
    if list.is_empty() { return Err(VotingError::DataIntegrity(format!("There are no {}",what))); }
    let mut index = HashMap::with_capacity(list.len());
    for (i,&t) in list.iter().enumerate() {
        if index.insert(t,i).is_some() { return Err(VotingError::DataIntegrity(format!("{:?} is listed twice among the {}",t,what))); }
    }
    Ok(index)
}

impl Preferences {
    /// Check that every voter ranks every candidate exactly once, and index the data for fast rank lookups.
    pub fn new(metadata:ElectionMetadata,voters:Vec<VoterId>,candidates:Vec<CandidateId>,ballots:Vec<Vec<CandidateId>>) -> Result<Self,VotingError> {
        let voter_index = check_unique("voters",&voters)?;
        let candidate_index = check_unique("candidates",&candidates)?;
        if ballots.len()!=voters.len() {
            return Err(VotingError::DataIntegrity(format!("There are {} voters but {} ballots",voters.len(),ballots.len())));
        }
        let mut ranks = Vec::with_capacity(ballots.len());
        for (voter,ballot) in voters.iter().zip(ballots.iter()) {
            if ballot.len()!=candidates.len() {
                return Err(VotingError::DataIntegrity(format!("Voter {:?} ranks {} candidates, expecting {}",voter,ballot.len(),candidates.len())));
            }
            let mut voter_ranks : Vec<Option<usize>> = vec![None;candidates.len()];
            for (rank,candidate) in ballot.iter().enumerate() {
                let index = *candidate_index.get(candidate).ok_or_else(||VotingError::DataIntegrity(format!("Voter {:?} ranks unknown candidate {:?}",voter,candidate)))?;
                if voter_ranks[index].replace(rank).is_some() {
                    return Err(VotingError::DataIntegrity(format!("Voter {:?} ranks candidate {:?} more than once",voter,candidate)));
                }
            }
            // every slot is filled as the ballot has the right length and no repeats.
            ranks.push(voter_ranks.into_iter().flatten().collect());
        }
        Ok(Preferences{metadata,voters,candidates,ballots,voter_index,candidate_index,ranks})
    }

    /// Convenience constructor. Voters are numbered from 1 in the order given, and the candidates
    /// are whoever is on the first ranking, in increasing numerical order.
    /// ```
    /// use voting::preferences::Preferences;
    /// use voting::preference_table::PreferenceTable;
    /// use voting::ballot_metadata::{CandidateId, VoterId};
    /// let prefs = Preferences::from_rankings(vec![vec![2,1,3],vec![3,2,1]]).unwrap();
    /// assert_eq!(prefs.voters(),&[VoterId(1),VoterId(2)]);
    /// assert_eq!(prefs.candidates(),&[CandidateId(1),CandidateId(2),CandidateId(3)]);
    /// assert_eq!(prefs.rank(&CandidateId(1),&VoterId(2)),Some(2));
    /// assert!(Preferences::from_rankings(vec![vec![1,2],vec![1,1]]).is_err());
    /// ```
    pub fn from_rankings(rankings:Vec<Vec<u32>>) -> Result<Self,VotingError> {
        let mut candidates : Vec<CandidateId> = rankings.first().map(|r|r.iter().map(|&c|CandidateId(c)).collect()).unwrap_or_default();
        candidates.sort();
        let voters = (1..=rankings.len() as u32).map(VoterId).collect();
        let ballots = rankings.into_iter().map(|r|r.into_iter().map(CandidateId).collect()).collect();
        Preferences::new(ElectionMetadata::default(),voters,candidates,ballots)
    }

    pub fn num_voters(&self) -> usize { self.voters.len() }

    /// The ranking of the given voter, most preferred first.
    pub fn ballot(&self,voter:VoterId) -> Option<&[CandidateId]> {
        self.voter_index.get(&voter).map(|&i|self.ballots[i].as_slice())
    }

    pub fn candidate_name(&self,candidate:CandidateId) -> String { self.metadata.candidate_name(candidate) }

    pub fn print_summary(&self) {
        if !self.metadata.name.is_empty() { println!("Summary for {}",self.metadata.name); }
        println!("{} voters, {} candidates",self.voters.len(),self.candidates.len());
        println!("voters: {}",self.voters.iter().map(|v|v.to_string()).collect::<Vec<_>>().join(","));
        println!("candidates: {}",self.candidates.iter().map(|&c|self.candidate_name(c)).collect::<Vec<_>>().join(","));
        for (voter,ballot) in self.voters.iter().zip(self.ballots.iter()) {
            println!("  {} : {}",voter,ballot.iter().map(|c|c.to_string()).collect::<Vec<_>>().join(","));
        }
    }

    /// The distinct rankings, with how many voters gave each. Useful for writing compact files.
    pub fn distinct_ballots(&self) -> Vec<(usize,&[CandidateId])> {
        let mut res : Vec<(usize,&[CandidateId])> = vec![];
        let mut seen : HashMap<&[CandidateId],usize> = HashMap::new();
        for ballot in &self.ballots {
            match seen.get(ballot.as_slice()) {
                Some(&i) => res[i].0+=1,
                None => { seen.insert(ballot.as_slice(),res.len()); res.push((1,ballot.as_slice())); }
            }
        }
        res
    }

    pub fn candidate_set(&self) -> HashSet<CandidateId> { self.candidates.iter().cloned().collect() }
}

impl PreferenceTable for Preferences {
    type Voter = VoterId;
    type Candidate = CandidateId;

    fn voters(&self) -> &[VoterId] { &self.voters }
    fn candidates(&self) -> &[CandidateId] { &self.candidates }

    fn rank(&self, candidate: &CandidateId, voter: &VoterId) -> Option<usize> {
        let voter = *self.voter_index.get(voter)?;
        let candidate = *self.candidate_index.get(candidate)?;
        Some(self.ranks[voter][candidate])
    }

    fn contains_voter(&self, voter: &VoterId) -> bool { self.voter_index.contains_key(voter) }
}
