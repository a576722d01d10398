//! Command line tool to inspect SLR data files
use env_logger::{Builder, Target};
use log::{error, info, warn};
use std::path::Path;

use slr::prelude::*;

mod cli;
use cli::{Cli, CliError};

fn crd_opmode(cli: &Cli, matches: &clap::ArgMatches) -> Result<(), CliError> {
    let fp = matches
        .get_one::<String>("filepath")
        .map(String::as_str)
        .unwrap_or_default();
    info!("reading {}", fp);
    let crd = CRD::from_file(fp)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&crd)?);
    } else if !cli.quiet() {
        for (n, unit) in crd.units().enumerate() {
            println!(
                "unit #{} {} v{} created {}: {} session(s), {} range(s)",
                n,
                unit.format,
                unit.version,
                unit.created,
                unit.nb_sessions(),
                unit.nb_ranges()
            );
            for (m, session) in unit.sessions().enumerate() {
                let station = match session.station() {
                    Ok(station) => station.name.clone(),
                    Err(e) => {
                        warn!("unit #{} session #{}: {}", n, m, e);
                        String::from("?")
                    },
                };
                let target = match session.target() {
                    Ok(target) => target.name.clone(),
                    Err(e) => {
                        warn!("unit #{} session #{}: {}", n, m, e);
                        String::from("?")
                    },
                };
                println!(
                    "  session #{} {} -> {} [{:?}, {:?}] {} range(s)",
                    m,
                    station,
                    target,
                    session.start,
                    session.end,
                    session.nb_ranges()
                );
            }
        }
    }

    if let Some(prefix) = matches.get_one::<String>("dump") {
        let delimiter = matches
            .get_one::<String>("delimiter")
            .map(String::as_str)
            .unwrap_or(",");
        for (n, unit) in crd.units().enumerate() {
            let path = format!("{}_{}.txt", prefix, n);
            unit.dump_to_file(Path::new(&path), delimiter)?;
            info!("generated {}", path);
        }
    }
    Ok(())
}

fn cpf_opmode(matches: &clap::ArgMatches) -> Result<(), CliError> {
    let fp = matches
        .get_one::<String>("filepath")
        .map(String::as_str)
        .unwrap_or_default();
    info!("reading {}", fp);
    let mut cpf = Prediction::from_file(fp)?;
    info!(
        "{}: {} samples, valid from {} to {}",
        cpf.name,
        cpf.nb_samples(),
        cpf.start,
        cpf.end
    );

    let start = matches.get_one::<Epoch>("start").copied().unwrap_or(cpf.start);
    let step = matches
        .get_one::<Duration>("step")
        .copied()
        .unwrap_or(Duration::from_seconds(60.0));
    let count = matches.get_one::<usize>("count").copied().unwrap_or(10);

    let mut t = start;
    for _ in 0..count {
        match cpf.interpolate(t) {
            Ok((x, y, z)) => println!("{} {:.3} {:.3} {:.3}", t, x, y, z),
            Err(e) => error!("{}: {}", t, e),
        }
        t += step;
    }
    Ok(())
}

pub fn main() -> Result<(), CliError> {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();

    match cli.matches.subcommand() {
        Some(("crd", matches)) => crd_opmode(&cli, matches),
        Some(("cpf", matches)) => cpf_opmode(matches),
        _ => Ok(()),
    }
}
