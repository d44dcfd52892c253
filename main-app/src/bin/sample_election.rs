// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


use clap::Parser;
use std::path::PathBuf;
use anyhow::anyhow;
use main_app::rules::{ElectionOutcome, Rule};
use voting::random_util::{random_preferences, random_score_vector, random_voter, seeded_rng};
use voting::preference_table::PreferenceTable;

#[derive(Parser)]
#[clap(version = "0.1", author = "Andrew Conway", name="ConcreteVote")]
/// Make up a random election, with random dictator, tie breaking agent and score vector,
/// and show who each rule elects.
struct Opts {
    /// The seed for the pseudo-random number generator, so results can be reproduced.
    #[clap(long,default_value_t=0)]
    seed : u64,

    /// Optionally save the made up votes to a .json or .soc file.
    #[clap(short, long,value_parser)]
    out : Option<PathBuf>,
}

const SEPARATOR : &str = "==============================================";

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt : Opts = Opts::parse();
    let mut rng = seeded_rng(opt.seed);
    let preferences = random_preferences(&mut rng)?;
    if let Some(out) = &opt.out { main_app::save_preferences(&preferences,out)?; }
    let tie_agent = random_voter(&preferences,&mut rng).ok_or_else(||anyhow!("No voters"))?;
    let dictator = random_voter(&preferences,&mut rng).ok_or_else(||anyhow!("No voters"))?;
    let score_vector = random_score_vector(preferences.num_candidates(),&mut rng);

    println!("These are the sample data:");
    preferences.print_summary();
    println!();
    println!("dictator : {}",dictator);
    println!("tie breaking agent : {}",tie_agent);
    println!("score vector : {}",score_vector);
    println!("{}",SEPARATOR);
    for rule in Rule::ALL {
        match ElectionOutcome::compute(rule,&preferences,dictator,tie_agent,Some(&score_vector)) {
            Ok(outcome) => println!("{}",outcome),
            Err(e) => println!("Could not run {} : {}",rule,e),
        }
        println!("{}",SEPARATOR);
    }
    Ok(())
}
