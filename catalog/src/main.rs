use anyhow::Context;
use catalog::{CatalogSource, MockCatalogSource};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use common::config::Settings;
use std::process;

async fn run_generate(matches: &ArgMatches) -> anyhow::Result<()> {
    let mut settings = match matches.get_one::<String>("config") {
        Some(path) => Settings::new(path).with_context(|| format!("loading config {}", path))?,
        None => Settings::default(),
    };

    if let Some(seed) = matches.get_one::<u64>("seed") {
        settings.catalog.seed = Some(*seed);
    }
    if let Some(count) = matches.get_one::<usize>("count") {
        settings.catalog.provider_count = *count;
    }

    common::logging::init_tracing(&settings.logging)?;

    let source = MockCatalogSource::from_config(&settings.catalog)?;
    let services = source.fetch_services().await?;

    let json = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&services)?
    } else {
        serde_json::to_string(&services)?
    };
    println!("{}", json);

    Ok(())
}

#[tokio::main]
async fn main() {
    let matches = Command::new("Catalog Generator")
        .version("1.0")
        .about("Generates the mock marketplace catalog")
        .subcommand(
            Command::new("generate")
                .about("Print a generated service list as JSON")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("FILE")
                        .help("Sets a custom config file"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("N")
                        .value_parser(value_parser!(u64))
                        .help("Seed for a reproducible catalog"),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_name("N")
                        .value_parser(value_parser!(usize))
                        .help("Number of providers to generate"),
                )
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print the JSON output"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("generate", generate_matches)) => {
            if let Err(e) = run_generate(generate_matches).await {
                eprintln!("Catalog generation error: {:#}", e);
                process::exit(1);
            }
        }

        _ => {
            eprintln!("Please specify a valid subcommand");
            process::exit(1);
        }
    }
}
