// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.


use clap::Parser;
use std::path::PathBuf;
use anyhow::anyhow;
use log::info;
use main_app::rules::{ElectionOutcome, Rule};
use voting::ballot_metadata::VoterId;
use voting::preference_table::PreferenceTable;
use voting::preferences::Preferences;
use voting::random_util::{random_preferences, seeded_rng};
use voting::scoring::ScoreVector;
use voting::single_transferable_vote::stv_with_transcript;

#[derive(Parser)]
#[clap(version = "0.1", author = "Andrew Conway", name="ConcreteVote")]
/// Choose the winner of a single winner election using one of a variety of classical rules.
struct Opts {
    /// The rule to use. One of Dictatorship, ScoringRule, Plurality, Veto, Borda, STV.
    rules : Rule,

    /// The name of the .json or .soc (preflib) file to get votes from.
    /// If not given, a random election is made up.
    #[clap(value_parser)]
    votes : Option<PathBuf>,

    /// The seed used to make up a random election if no votes file is given.
    #[clap(long,default_value_t=0)]
    random_seed : u64,

    /// The voter whose preferences resolve ties. Defaults to the first voter.
    #[clap(short, long)]
    tie_agent : Option<VoterId>,

    /// The voter who chooses the winner for the Dictatorship rule. Defaults to the first voter.
    #[clap(short, long)]
    dictator : Option<VoterId>,

    /// Points for each rank, first place first, for the ScoringRule rule. E.g. --scores 3,2,1,0
    #[clap(short, long,value_parser=main_app::try_parse_score_vector)]
    scores : Option<ScoreVector>,

    /// Whether the outcome should be printed as JSON rather than human readable text.
    #[clap(long)]
    json: bool,

    /// For STV, print each round of the count.
    #[clap(long)]
    transcript: bool,

    /// Print out the votes before counting.
    #[clap(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt : Opts = Opts::parse();

    let preferences : Preferences = match &opt.votes {
        Some(path) => main_app::load_preferences(path)?,
        None => {
            info!("Making up a random election with seed {}",opt.random_seed);
            random_preferences(&mut seeded_rng(opt.random_seed))?
        }
    };
    if opt.verbose { preferences.print_summary(); }
    let first_voter = *preferences.voters().first().ok_or_else(||anyhow!("No voters"))?;
    let tie_agent = opt.tie_agent.unwrap_or(first_voter);
    let dictator = opt.dictator.unwrap_or(first_voter);

    let outcome = if opt.transcript && opt.rules==Rule::STV {
        let transcript = stv_with_transcript(&preferences,&tie_agent)?;
        if opt.json { println!("{}",serde_json::to_string(&transcript)?); }
        else { println!("{}",transcript); }
        ElectionOutcome::new(Rule::STV,&preferences,transcript.winner)
    } else {
        ElectionOutcome::compute(opt.rules,&preferences,dictator,tie_agent,opt.scores.as_ref())?
    };
    if opt.json { println!("{}",serde_json::to_string(&outcome)?) }
    else { println!("{}",outcome) }
    Ok(())
}
