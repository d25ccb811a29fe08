use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use jadarat_cli::report::input::RunConfig;
use jadarat_cli::report::render::{run_render, run_summarize};
use jadarat_cli::util::write_bytes_to_file;

fn data_arg() -> Arg {
    Arg::new("data")
        .help("Path to the cleaned postings export (*.csv or *.tsv). Overrides the data file \
               specified in the configuration file.")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to a JSON report configuration file")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn top_jobs_arg() -> Arg {
    Arg::new("top_jobs")
        .long("top-jobs")
        .help("Number of job titles shown in the demand chart. Overrides the configuration file.")
        .value_parser(clap::value_parser!(usize))
        .value_hint(ValueHint::Other)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("JADARAT_LOG", "error,jadarat=info"))
        .init();

    let matches = Command::new("jadarat")
        .version(clap::crate_version!())
        .about("\u{1F4CA} Jadarat job postings report")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render the HTML report with charts and commentary")
                .arg(data_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help(
                            "Path the HTML report is written to. Overrides the configuration \
                             file.",
                        )
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(top_jobs_arg()),
        )
        .subcommand(
            Command::new("summarize")
                .about("Print the computed aggregates as JSON")
                .arg(data_arg())
                .arg(config_arg())
                .arg(top_jobs_arg()),
        )
        .subcommand(
            Command::new("config")
                .about("Print the default configuration as JSON")
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Write the configuration to this file instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("render", sub_m)) => handle_render(sub_m),
        Some(("summarize", sub_m)) => handle_summarize(sub_m),
        Some(("config", sub_m)) => handle_config(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_render(matches: &ArgMatches) -> Result<()> {
    let config = RunConfig::from_arguments(matches.get_one::<PathBuf>("config"), matches)?;
    log::info!("[Jadarat::Render] Rendering report from: {}", config.data_file);

    match run_render(&config) {
        Ok(_) => {
            eprintln!("[Jadarat::Render] Report written to {}", config.output_file);
            Ok(())
        }
        Err(e) => {
            log::error!("Rendering failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_summarize(matches: &ArgMatches) -> Result<()> {
    let config = RunConfig::from_arguments(matches.get_one::<PathBuf>("config"), matches)?;
    log::info!("[Jadarat::Summarize] Summarizing: {}", config.data_file);

    match run_summarize(&config) {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            log::error!("Summary failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_config(matches: &ArgMatches) -> Result<()> {
    let json = serde_json::to_string_pretty(&RunConfig::default())?;
    match matches.get_one::<PathBuf>("output_file") {
        Some(path) => {
            write_bytes_to_file(path, json.as_bytes())?;
            eprintln!("[Jadarat::Config] Default config written to {:?}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
