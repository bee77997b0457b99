use clap::Parser;
use small_restaurant::utils::logger::{self, LogFormat};
use small_restaurant::utils::validation::Validate;
use small_restaurant::{build_report, clock_for, CliConfig, Report, RestaurantConfig, RestaurantError};

fn run(config: &CliConfig) -> Result<Report, RestaurantError> {
    tracing::info!("📁 Loading restaurant from: {}", config.config);
    let restaurant = RestaurantConfig::from_file(&config.config)?.into_restaurant()?;
    tracing::debug!("Loaded {} menu items", restaurant.get_menu().len());

    let clock = clock_for(config.at.as_deref())?;
    build_report(restaurant, &clock, &config.remove, &config.order)
}

fn fail(e: &RestaurantError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(config.verbose, format);

    tracing::info!("Starting small-restaurant CLI");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    if config.json {
        match report.to_json() {
            Ok(output) => println!("{}", output),
            Err(e) => fail(&e),
        }
    } else {
        print!("{}", report.render_text());
    }
}
