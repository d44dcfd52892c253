// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.

//! This crate provides a unified API to the different file formats and voting rules.
//! It also contains the main binaries.

use std::fs::File;
use std::num::ParseFloatError;
use std::path::Path;
use anyhow::anyhow;
use voting::preferences::Preferences;
use voting::scoring::ScoreVector;

pub mod rules;

/// Utility that is helpful for parsing a score vector in clap, e.g. "3,2,0.5,0".
pub fn try_parse_score_vector(s:&str) -> Result<ScoreVector,ParseFloatError> {
    let weights : Result<Vec<f64>,ParseFloatError> = s.split(',').map(|s|s.trim().parse::<f64>()).collect();
    Ok(ScoreVector::new(weights?))
}

fn has_extension(path:&Path,extension:&str) -> bool {
    path.extension().and_then(|e|e.to_str()).is_some_and(|e|e.eq_ignore_ascii_case(extension))
}

/// Read a .json preferences file, or a .soc preflib file.
pub fn load_preferences(path:&Path) -> anyhow::Result<Preferences> {
    if has_extension(path,"soc") { preflib::parse(path) }
    else if has_extension(path,"json") { Ok(serde_json::from_reader(File::open(path)?)?) }
    else { Err(anyhow!("Do not know how to read {}. Expecting a .json or .soc file.",path.display())) }
}

/// Write a .json preferences file, or a .soc preflib file.
pub fn save_preferences(preferences:&Preferences,path:&Path) -> anyhow::Result<()> {
    if has_extension(path,"soc") { std::fs::write(path,preflib::to_soc(preferences))?; }
    else if has_extension(path,"json") { serde_json::to_writer_pretty(File::create(path)?,preferences)?; }
    else { return Err(anyhow!("Do not know how to write {}. Expecting a .json or .soc file.",path.display())); }
    Ok(())
}
