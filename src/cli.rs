use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[clap(name = "lowerclass", author, version, about)]
pub struct Arguments {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lower every class of a program and write the artifacts as json
    Lower {
        /// Program description (.json5)
        program: PathBuf,
        /// Directory to write the artifacts into
        #[clap(short, long, default_value = "out")]
        out_dir: PathBuf,
    },
    /// Show the artifacts each class would be lowered into
    Plan {
        program: PathBuf,
        /// Print the plans as json
        #[clap(long)]
        json: bool,
    },
}

pub fn parse_command_line_args() -> Arguments {
    Arguments::parse()
}
