// CRD opmode
use clap::{Arg, ArgAction, Command};

pub fn subcommand() -> Command {
    Command::new("crd")
        .arg_required_else_help(true)
        .about("Parse a CRD file and summarize its content.")
        .arg(
            Arg::new("filepath")
                .value_name("FILEPATH")
                .action(ArgAction::Set)
                .required(true)
                .help("Input CRD file (optionally gzip compressed)."),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the parsed content as JSON, instead of a summary."),
        )
        .arg(
            Arg::new("dump")
                .short('d')
                .long("dump")
                .value_name("PREFIX")
                .action(ArgAction::Set)
                .help("Dump each unit into PREFIX_N.txt, as delimited time / range pairs."),
        )
        .arg(
            Arg::new("delimiter")
                .long("delimiter")
                .value_name("DELIMITER")
                .default_value(",")
                .help("Delimiter used in dumped files."),
        )
}
