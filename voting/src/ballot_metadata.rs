// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.

//! Information about the contest, such as who the candidates and voters are.

use serde::{Serialize,Deserialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// a candidate, referred to by the number it has in the source data.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u32);
// type alias really, don't want long display
impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}
impl FromStr for CandidateId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(CandidateId(s.parse()?)) }
}

/// a voter, referred to by the number it has in the source data.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(pub u32);

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
impl fmt::Debug for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "v#{}", self.0) }
}
impl FromStr for VoterId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(VoterId(s.parse()?)) }
}

/// Optional human readable information about the election. None of it affects who wins.
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct ElectionMetadata {
    #[serde(default)]
    pub name : String,
    /// names of candidates, where known.
    #[serde(skip_serializing_if = "BTreeMap::is_empty",default)]
    pub candidate_names : BTreeMap<CandidateId,String>,
    /// where the data came from, such as a file name or URL.
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub source : Option<String>,
}

impl ElectionMetadata {
    /// The name of the candidate if known, otherwise their number.
    /// ```
    /// use voting::ballot_metadata::{CandidateId, ElectionMetadata};
    /// let mut metadata = ElectionMetadata::default();
    /// metadata.candidate_names.insert(CandidateId(2),"Alice".to_string());
    /// assert_eq!(metadata.candidate_name(CandidateId(2)),"Alice");
    /// assert_eq!(metadata.candidate_name(CandidateId(3)),"3");
    /// ```
    pub fn candidate_name(&self,candidate:CandidateId) -> String {
        self.candidate_names.get(&candidate).cloned().unwrap_or_else(||candidate.to_string())
    }
}
