use clap::Parser;
use user_fetch::app::cli;
use user_fetch::utils::logger;
use user_fetch::CliConfig;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    let exit_code = cli::run(&config, &mut std::io::stdout()).await;
    std::process::exit(exit_code);
}
