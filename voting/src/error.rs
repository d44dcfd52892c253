// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.

use thiserror::Error;

/// Everything that can stop a rule from producing a winner.
#[derive(Error,Debug,Clone,PartialEq)]
pub enum VotingError {
    /// A dictator or tie breaking agent was given who is not one of the voters.
    #[error("Agent {0} is not one of the voters")]
    InvalidAgent(String),
    #[error("Score vector has {got} weights but there are {expected} candidates")]
    InvalidScoreVector{expected:usize,got:usize},
    #[error("Score vector weight for rank {position} is not a finite number")]
    ScoreNotFinite{position:usize},
    /// The preference data does not describe a complete strict order for every voter.
    #[error("Inconsistent preference data : {0}")]
    DataIntegrity(String),
    #[error("There are no candidates to choose a winner from")]
    NoWinner,
}
