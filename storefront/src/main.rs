use clap::{Command, Arg};
use std::process;


#[tokio::main]
async fn main() {
    let matches = Command::new("Storefront Server")
        .version("1.0")
        .about("Serves the marketplace catalog and listing filters")
        .subcommand(
            Command::new("serve")
                .about("Generate the catalog and start the API server")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("FILE")
                        .help("Sets a custom config file"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("serve", serve_matches)) => {
            let config_path = serve_matches.get_one::<String>("config")
                .map(|s| s.as_str())
                .unwrap_or("config/storefront.toml");
            println!("Starting storefront with config: {}", config_path);

            if let Err(e) = storefront::run_storefront(config_path).await {
                eprintln!("Storefront error: {}", e);
                process::exit(1);
            }
        }
        _ => {
            println!("No subcommand specified. Use --help for usage information.");
            process::exit(1);
        }
    }
}
