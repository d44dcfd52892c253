// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Serialize,Deserialize};
use voting::ballot_metadata::{CandidateId, VoterId};
use voting::error::VotingError;
use voting::preference_table::PreferenceTable;
use voting::preferences::Preferences;
use voting::rules::{borda, dictatorship, plurality, veto};
use voting::scoring::{scoring_rule, ScoreVector};
use voting::single_transferable_vote::stv;

#[derive(Copy,Clone,Debug,PartialEq,Eq,Serialize,Deserialize)]
pub enum Rule {
    Dictatorship,
    ScoringRule,
    Plurality,
    Veto,
    Borda,
    STV,
}

impl Rule {
    pub const ALL : [Rule;6] = [Rule::Dictatorship,Rule::ScoringRule,Rule::Plurality,Rule::Veto,Rule::Borda,Rule::STV];

    /// Find the winner. Only dictatorship uses `dictator`, only the scoring rule uses `score_vector`,
    /// and everything except dictatorship uses `tie_agent`.
    pub fn choose_winner<T:PreferenceTable+?Sized>(&self,table:&T,dictator:&T::Voter,tie_agent:&T::Voter,score_vector:Option<&ScoreVector>) -> Result<T::Candidate,VotingError> {
        match self {
            Rule::Dictatorship => dictatorship(table,dictator),
            Rule::ScoringRule => {
                let score_vector = score_vector.ok_or(VotingError::InvalidScoreVector{expected:table.num_candidates(),got:0})?;
                scoring_rule(table,score_vector,tie_agent)
            }
            Rule::Plurality => plurality(table,tie_agent),
            Rule::Veto => veto(table,tie_agent),
            Rule::Borda => borda(table,tie_agent),
            Rule::STV => stv(table,tie_agent),
        }
    }
}

impl FromStr for Rule {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dictatorship" => Ok(Rule::Dictatorship),
            "scoringrule" | "scoring_rule" | "scoring" => Ok(Rule::ScoringRule),
            "plurality" => Ok(Rule::Plurality),
            "veto" => Ok(Rule::Veto),
            "borda" => Ok(Rule::Borda),
            "stv" => Ok(Rule::STV),
            _ => Err("No such rule supported")
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rule::Dictatorship => "Dictatorship",
            Rule::ScoringRule => "ScoringRule",
            Rule::Plurality => "Plurality",
            Rule::Veto => "Veto",
            Rule::Borda => "Borda",
            Rule::STV => "STV",
        };
        f.write_str(s)
    }
}

/// The result of running one rule on a preferences file, suitable for JSON output.
#[derive(Serialize,Deserialize,Clone,Debug,PartialEq)]
pub struct ElectionOutcome {
    pub rule : Rule,
    pub winner : CandidateId,
    pub winner_name : String,
}

impl ElectionOutcome {
    pub fn compute(rule:Rule,preferences:&Preferences,dictator:VoterId,tie_agent:VoterId,score_vector:Option<&ScoreVector>) -> Result<Self,VotingError> {
        let winner = rule.choose_winner(preferences,&dictator,&tie_agent,score_vector)?;
        Ok(ElectionOutcome::new(rule,preferences,winner))
    }

    /// Wrap up a winner already found, e.g. from an STV transcript.
    pub fn new(rule:Rule,preferences:&Preferences,winner:CandidateId) -> Self {
        ElectionOutcome{ rule, winner, winner_name: preferences.candidate_name(winner) }
    }
}

impl Display for ElectionOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.winner_name==self.winner.to_string() { write!(f,"{} winner : {}",self.rule,self.winner) }
        else { write!(f,"{} winner : {} ({})",self.rule,self.winner_name,self.winner) }
    }
}
