// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.

use voting::ballot_metadata::{CandidateId, VoterId};
use voting::preference_table::PreferenceTable;
use voting::rules::plurality;

const BREAKFAST : &str = "# FILE NAME: 00099-00000001.soc
# TITLE: Breakfast
# DATA TYPE: soc
# NUMBER ALTERNATIVES: 3
# NUMBER VOTERS: 5
# NUMBER UNIQUE ORDERS: 3
# ALTERNATIVE NAME 1: Eggs
# ALTERNATIVE NAME 2: Toast
# ALTERNATIVE NAME 3: Cereal
2: 1,2,3
2: 2,3,1

1: 3,2,1
";

#[test]
fn test_parse_soc() -> anyhow::Result<()> {
    let prefs = preflib::parse_str(BREAKFAST)?;
    assert_eq!("Breakfast",prefs.metadata.name);
    assert_eq!(Some("00099-00000001.soc".to_string()),prefs.metadata.source);
    assert_eq!("Toast",prefs.candidate_name(CandidateId(2)));
    assert_eq!(5,prefs.num_voters());
    assert_eq!(3,prefs.num_candidates());
    assert_eq!(Some(0),prefs.rank(&CandidateId(2),&VoterId(4)));
    assert_eq!(Some(2),prefs.rank(&CandidateId(1),&VoterId(5)));
    assert_eq!(CandidateId(1),plurality(&prefs,&VoterId(1))?);
    assert_eq!(CandidateId(2),plurality(&prefs,&VoterId(3))?);
    Ok(())
}

#[test]
fn test_write_and_read_back() -> anyhow::Result<()> {
    let prefs = preflib::parse_str(BREAKFAST)?;
    let written = preflib::to_soc(&prefs);
    assert!(written.contains("# ALTERNATIVE NAME 3: Cereal\n"));
    assert!(written.ends_with("2: 1,2,3\n2: 2,3,1\n1: 3,2,1\n"));
    let read = preflib::parse_str(&written)?;
    for voter in prefs.voters() {
        assert_eq!(prefs.ballot(*voter),read.ballot(*voter));
    }
    Ok(())
}

#[test]
fn test_rejected() {
    // partial orders
    assert!(preflib::parse_str("# DATA TYPE: soi\n# NUMBER ALTERNATIVES: 2\n1: 1\n").is_err());
    // missing a candidate even though it says soc
    assert!(preflib::parse_str("# DATA TYPE: soc\n# NUMBER ALTERNATIVES: 3\n1: 1,2\n").is_err());
    // repeated candidate
    assert!(preflib::parse_str("# DATA TYPE: soc\n# NUMBER ALTERNATIVES: 2\n1: 1,1\n").is_err());
    // out of range
    assert!(preflib::parse_str("# NUMBER ALTERNATIVES: 2\n1: 1,3\n").is_err());
    // ties
    assert!(preflib::parse_str("# NUMBER ALTERNATIVES: 2\n1: {1,2}\n").is_err());
    // no voters
    assert!(preflib::parse_str("# NUMBER ALTERNATIVES: 2\n").is_err());
    assert!(preflib::parse_str("1: 1,2\n").is_err());
    assert!(preflib::parse_str("# NUMBER ALTERNATIVES 2\n").is_err());
}

#[test]
fn test_voter_count_must_fit() {
    // rejected while reading the count, before any ballots are made.
    assert!(preflib::parse_str("# NUMBER ALTERNATIVES: 2\n4294967297: 1,2\n").is_err());
    assert!(preflib::parse_str("# NUMBER ALTERNATIVES: 2\n-1: 1,2\n").is_err());
    assert!(preflib::parse_str("# NUMBER ALTERNATIVES: 2\n1: 2,1\n4294967295: 1,2\n").is_err());
}
