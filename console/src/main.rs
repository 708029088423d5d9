mod predict;
mod query;
mod strings;
mod utils;

use std::process::exit;

use clap::{Parser, Subcommand};
use console::style;
use predict::PredictArgs;
use query::QueryArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

pub(crate) trait PipelineCommand {
    fn run(
        &self,
        utils: &UtilsArgs,
    ) -> anyhow::Result<()>;
}

#[derive(Parser, Debug)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    /// Predict the amino-acid effect of SNPs
    Predict {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  PredictArgs,
    },

    /// Query features of a GFF3 annotation
    Query {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  QueryArgs,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        MainMenu::Predict { utils, args } => {
            utils.setup()?;
            args.run(&utils)
        },
        MainMenu::Query { utils, args } => {
            utils.setup()?;
            args.run(&utils)
        },
    }
}

fn main() {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        exit(1);
    }
}
