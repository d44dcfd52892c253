// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


//! Parsing preference data from https://www.preflib.org/
//!
//! Only complete strict orders (data type soc) are accepted, as every voter must rank every candidate.
//! A line `n: a,b,c` means n voters ranked a first, then b, then c. Each becomes a separate voter.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use anyhow::anyhow;
use log::debug;
use voting::ballot_metadata::{CandidateId, ElectionMetadata, VoterId};
use voting::preference_table::PreferenceTable;
use voting::preferences::Preferences;

pub fn parse<P:AsRef<Path>>(path:P) -> anyhow::Result<Preferences> {
    let file = File::open(path.as_ref())?;
    let filename = path.as_ref().file_name().and_then(|s|s.to_str()).unwrap_or("");
    parse_reader(BufReader::new(file),filename)
}

/// Parse from a string, mainly for testing.
pub fn parse_str(contents:&str) -> anyhow::Result<Preferences> { parse_reader(contents.as_bytes(),"") }

/// `source` is recorded in the metadata, unless the file names itself.
pub fn parse_reader<R:BufRead>(reader:R,source:&str) -> anyhow::Result<Preferences> {
    let mut metadata = ElectionMetadata{ source: if source.is_empty() { None } else { Some(source.to_string()) }, ..Default::default() };
    let mut num_candidates : Option<usize> = None;
    let mut ballots : Vec<Vec<CandidateId>> = vec![];
    let mut num_voters : u32 = 0;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if let Some(metadata_line) = line.strip_prefix('#') {
            if let Some((metadata_name,metadata_value)) = metadata_line.split_once(':') {
                let metadata_value = metadata_value.trim();
                match metadata_name.trim() {
                    "FILE NAME" => { metadata.source=Some(metadata_value.to_string()); }
                    "TITLE" => { metadata.name=metadata_value.to_string(); }
                    "DATA TYPE" => {
                        if metadata_value!="soc" {
                            return Err(anyhow!("Can only handle format soc (complete strict orders), got {}",metadata_value));
                        }
                    }
                    "NUMBER ALTERNATIVES" => { num_candidates=Some(metadata_value.parse()?); }
                    s if s.starts_with("ALTERNATIVE NAME") => { // #ALTERNATIVE NAME n : name
                        let n : u32 = s.trim_start_matches("ALTERNATIVE NAME").trim_start().parse()?;
                        if n==0 { return Err(anyhow!("ALTERNATIVE NAME 0 is not understood")) }
                        metadata.candidate_names.insert(CandidateId(n),metadata_value.to_string());
                    }
                    _ => {}
                }
            } else {
                return Err(anyhow!("Metadata line without colon : {}",line));
            }
        } else if line.is_empty() {}
        else { // preferences line
            let num_candidates = num_candidates.ok_or_else(||anyhow!("Preferences given before NUMBER ALTERNATIVES"))?;
            let (n,prefs) = line.split_once(':').ok_or_else(||anyhow!("Expecting line of the form n : <preference list> got {}",line))?;
            let n : u32 = n.trim().parse().map_err(|_|anyhow!("Expecting a voter count that fits in 32 bits, got {}",n.trim()))?;
            num_voters = num_voters.checked_add(n).ok_or_else(||anyhow!("More than {} voters",u32::MAX))?;
            let mut ballot : Vec<CandidateId> = vec![];
            for candidate in prefs.trim().split(',') {
                let candidate : usize = candidate.trim().parse().map_err(|_|anyhow!("Expecting a candidate number, got {}. Ties are not supported.",candidate.trim()))?;
                if candidate<1 || candidate>num_candidates { return Err(anyhow!("Expecting candidate index between 1 and {}, got {}",num_candidates,candidate)) }
                ballot.push(CandidateId(candidate as u32));
            }
            if ballot.len()!=num_candidates { return Err(anyhow!("Expecting all {} candidates to be ranked in line {}",num_candidates,line)); }
            for _ in 0..n { ballots.push(ballot.clone()); }
        }
    }
    let num_candidates = num_candidates.ok_or_else(||anyhow!("No NUMBER ALTERNATIVES line"))?;
    let candidates = (1..=num_candidates as u32).map(CandidateId).collect();
    let voters = (1..=num_voters).map(VoterId).collect();
    debug!("Read {} voters and {} candidates",ballots.len(),num_candidates);
    Ok(Preferences::new(metadata,voters,candidates,ballots)?)
}

/// Write in preflib soc format, merging identical ballots. Voter numbers are not preserved.
/// Candidate numbers are written as is, so this can only be read back if they are 1 up to the number of candidates.
pub fn to_soc(preferences:&Preferences) -> String {
    let distinct = preferences.distinct_ballots();
    let mut res = String::new();
    if !preferences.metadata.name.is_empty() { res.push_str(&format!("# TITLE: {}\n",preferences.metadata.name)); }
    res.push_str("# DATA TYPE: soc\n");
    res.push_str(&format!("# NUMBER ALTERNATIVES: {}\n",preferences.num_candidates()));
    res.push_str(&format!("# NUMBER VOTERS: {}\n",preferences.num_voters()));
    res.push_str(&format!("# NUMBER UNIQUE ORDERS: {}\n",distinct.len()));
    for (id,name) in &preferences.metadata.candidate_names {
        res.push_str(&format!("# ALTERNATIVE NAME {}: {}\n",id,name));
    }
    for (n,ballot) in distinct {
        res.push_str(&format!("{}: {}\n",n,ballot.iter().map(|c|c.to_string()).collect::<Vec<_>>().join(",")));
    }
    res
}
