pub mod rates;

use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use rates::get_humo_rates;

use crate::services::{
    files::save_rates_csv, market_data::humo::RatesSource, parsers::MarkupLayout,
    shared::constants::DEFAULT_OUT_FILE,
};

#[derive(Parser, Debug)]
#[command(about = "Current HUMO.TJ currency exchange rates")]
struct Args {
    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
enum Command {
    /// Fetch and display the current rates
    Show,
    /// Fetch and display the current rates, then save them as CSV
    Save {
        #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
        path: PathBuf,
    },
}

pub async fn cli() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let cmd = args.cmd.unwrap_or(Command::Show);

    let source = RatesSource::default();
    let layout = MarkupLayout::default();

    let Some(records) = get_humo_rates(&source, &layout, &mut io::stdout()).await? else {
        return Ok(ExitCode::FAILURE);
    };

    if let Command::Save { path } = cmd {
        save_rates_csv(&records, &path)?;
    }

    Ok(ExitCode::SUCCESS)
}
