// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


//! Making up elections with pseudo-random numbers, for demonstrations and tests.

use rand::{Rng, SeedableRng};
use rand::seq::{IndexedRandom, SliceRandom};
use rand_chacha::ChaCha20Rng;
use crate::ballot_metadata::{CandidateId, ElectionMetadata, VoterId};
use crate::error::VotingError;
use crate::preference_table::PreferenceTable;
use crate::preferences::Preferences;
use crate::scoring::ScoreVector;

/// A reproducible source of randomness.
pub fn seeded_rng(seed:u64) -> ChaCha20Rng { ChaCha20Rng::seed_from_u64(seed) }

/// Voters numbered 1..=num_voters each ranking candidates 1..=num_candidates in a uniformly random order.
/// ```
/// use voting::random_util::{random_preferences_of_size, seeded_rng};
/// use voting::preference_table::PreferenceTable;
/// let prefs = random_preferences_of_size(4,7,&mut seeded_rng(1)).unwrap();
/// assert_eq!(4,prefs.voters().len());
/// assert_eq!(7,prefs.candidates().len());
/// ```
pub fn random_preferences_of_size<R:Rng+?Sized>(num_voters:usize,num_candidates:usize,rng:&mut R) -> Result<Preferences,VotingError> {
    let voters : Vec<VoterId> = (1..=num_voters as u32).map(VoterId).collect();
    let candidates : Vec<CandidateId> = (1..=num_candidates as u32).map(CandidateId).collect();
    let ballots = voters.iter().map(|_|{
        let mut ballot = candidates.clone();
        ballot.shuffle(rng);
        ballot
    }).collect();
    let metadata = ElectionMetadata{ name:"Random sample".to_string(), ..Default::default() };
    Preferences::new(metadata,voters,candidates,ballots)
}

/// Between 5 and 10 voters, and separately between 5 and 10 candidates.
pub fn random_preferences<R:Rng+?Sized>(rng:&mut R) -> Result<Preferences,VotingError> {
    let num_voters = rng.random_range(5..=10);
    let num_candidates = rng.random_range(5..=10);
    random_preferences_of_size(num_voters,num_candidates,rng)
}

/// Weights uniformly between 1 and 10, to 2 decimal places. Not necessarily decreasing.
pub fn random_score_vector<R:Rng+?Sized>(num_candidates:usize,rng:&mut R) -> ScoreVector {
    ScoreVector::new((0..num_candidates).map(|_|(rng.random_range(1.0..=10.0f64)*100.0).round()/100.0).collect())
}

/// Any one of the voters.
pub fn random_voter<R:Rng+?Sized>(preferences:&Preferences,rng:&mut R) -> Option<VoterId> {
    preferences.voters().choose(rng).copied()
}
