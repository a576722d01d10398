// CPF opmode
use clap::{value_parser, Arg, ArgAction, Command};
use hifitime::{Duration, Epoch};

pub fn subcommand() -> Command {
    Command::new("cpf")
        .arg_required_else_help(true)
        .about("Interpolate positions from a CPF prediction file.")
        .arg(
            Arg::new("filepath")
                .value_name("FILEPATH")
                .action(ArgAction::Set)
                .required(true)
                .help("Input CPF file (optionally gzip compressed)."),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("EPOCH")
                .value_parser(value_parser!(Epoch))
                .help("First instant to interpolate at. Defaults to the start of validity span."),
        )
        .arg(
            Arg::new("step")
                .long("step")
                .value_name("DURATION")
                .value_parser(value_parser!(Duration))
                .default_value("1 min")
                .help("Time interval between successive positions."),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("10")
                .help("Number of positions to interpolate."),
        )
}
