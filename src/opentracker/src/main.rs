#[macro_use]
extern crate log;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use opentracker::{demo_packets, summarize};
use opentracker_codec::SensorPacket;

#[derive(Parser)]
pub struct OpenTrackerCli {
    #[clap(subcommand)]
    pub subcommand: OpenTrackerCommand,
}

#[derive(Subcommand)]
pub enum OpenTrackerCommand {
    ///
    /// Summarize the built-in demo packets
    ///
    Demo,
    ///
    /// Summarize sensor packets from a JSON file
    ///
    Process {
        #[arg(long, env)]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = OpenTrackerCli::parse();
    let packets = match cli.subcommand {
        OpenTrackerCommand::Demo => demo_packets(),
        OpenTrackerCommand::Process { file } => {
            let raw = std::fs::read_to_string(&file)?;
            serde_json::from_str::<Vec<SensorPacket>>(&raw)?
        }
    };

    debug!("summarizing {} packets", packets.len());
    for line in summarize(&packets)? {
        println!("{}", line);
    }

    Ok(())
}
