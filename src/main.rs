mod catalog;
mod config;
mod error;
mod models;
mod seeder;
mod store;

use dotenv::dotenv;
use rand::{rngs::StdRng, SeedableRng};
use std::process::ExitCode;

use config::SeedConfig;
use seeder::SeedPlan;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let config = SeedConfig::from_env();
    let store = match config::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = StdRng::from_os_rng();
    let result = seeder::run(&store, &SeedPlan::default(), &mut rng).await;
    store.close().await;

    match result {
        Ok(report) => {
            log::info!(
                "{} accounts, {} vendors, {} products in '{}'",
                report.total_users(),
                report.vendors,
                report.products,
                config.database_name
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Seeding aborted: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
