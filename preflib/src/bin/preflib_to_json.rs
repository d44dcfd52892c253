// Copyright 2024 Andrew Conway.
// This file is part of ConcreteVote.
// ConcreteVote is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteVote is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteVote.  If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use std::path::PathBuf;
use std::fs::File;
use voting::preference_table::PreferenceTable;

#[derive(Parser)]
#[clap(version = "0.1", author = "Andrew Conway", name="ConcreteVote")]
/// Convert a .soc file from preflib to the ConcreteVote .json preferences format. See https://www.preflib.org/.
/// Each line of the preflib file that is voted by n people becomes n separate voters, numbered from 1.
struct Opts {
    /// The name of the .soc preflib file to convert
    #[clap(value_parser)]
    file : PathBuf,

    /// An optional output file. If not specified, the input file name is used with the extension changed to .json
    #[clap(short, long,value_parser)]
    out : Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opt : Opts = Opts::parse();
    let data = preflib::parse(&opt.file)?;
    let out_path = if let Some(path) = &opt.out { path.clone() } else {
        let mut path = PathBuf::from(opt.file.file_name().unwrap_or_default());
        path.set_extension("json");
        path
    };
    let out = File::create(&out_path)?;
    serde_json::to_writer(out,&data)?;
    println!("Wrote {} voters and {} candidates to {}",data.num_voters(),data.num_candidates(),out_path.display());
    Ok(())
}
