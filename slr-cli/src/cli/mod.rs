use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};
use thiserror::Error;

mod cpf;
mod crd;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to parse input file")]
    ParsingError(#[from] slr::Error),
    #[error("failed to serialize content")]
    JsonError(#[from] serde_json::Error),
    #[error("i/o error")]
    IoError(#[from] std::io::Error),
}

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        let cmd = Command::new("slr-cli")
            .author("Olli Wilkman <olli.wilkman@iki.fi>")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Satellite Laser Ranging data inspection")
            .arg_required_else_help(true)
            .color(ColorChoice::Always)
            .arg(
                Arg::new("quiet")
                    .short('q')
                    .long("quiet")
                    .action(ArgAction::SetTrue)
                    .help("Only report errors"),
            )
            .subcommand(crd::subcommand())
            .subcommand(cpf::subcommand());
        Self {
            matches: cmd.get_matches(),
        }
    }
    /// Returns true if user requested quiet mode
    pub fn quiet(&self) -> bool {
        self.matches.get_flag("quiet")
    }
}
