use clap::Parser;
use lizzycalc::api::HttpCalculatorApi;
use lizzycalc::cli::{
    handle_calc, handle_completions, handle_config_init, handle_history,
    load_config_with_overrides, run_session, Cli, Commands, ConfigCommands,
};
use lizzycalc::form::CalculatorForm;
use lizzycalc::logging::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calc(args) => match setup_form(&cli.global) {
            Ok(form) => handle_calc(&args, &form).await.map(|output| println!("{}", output)),
            Err(e) => Err(e),
        },
        Commands::History(args) => match setup_form(&cli.global) {
            Ok(form) => handle_history(&args, &form)
                .await
                .map(|output| println!("{}", output)),
            Err(e) => Err(e),
        },
        Commands::Session(args) => match setup_form(&cli.global) {
            Ok(form) => {
                if args.auto_refresh {
                    form.set_auto_refresh(true);
                }
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                run_session(&form, stdin, std::io::stdout()).await
            }
            Err(e) => Err(e),
        },
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => {
                handle_config_init(&args).map(|message| println!("{}", message))
            }
        },
        Commands::Completions(args) => {
            handle_completions(&args, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Load config, start tracing, and build a fresh form session.
fn setup_form(
    global: &lizzycalc::cli::GlobalArgs,
) -> Result<CalculatorForm<HttpCalculatorApi>, Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(global)?;
    init_tracing(&config.logging)?;
    tracing::debug!(?config, "Loaded configuration");

    let api = HttpCalculatorApi::from_config(&config.client);
    Ok(CalculatorForm::new(api).with_auto_refresh(config.client.auto_refresh))
}
