// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.

//! Single winner social choice rules (dictatorship, scoring rules, plurality, veto, Borda, STV)
//! over complete preference orders, with ties resolved by a designated voter.

pub mod ballot_metadata;
pub mod error;
pub mod preference_table;
pub mod preferences;
pub mod tie_resolution;
pub mod tally;
pub mod scoring;
pub mod rules;
pub mod single_transferable_vote;
pub mod random_util;
