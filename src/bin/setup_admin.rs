//! CLI tool to provision the master administrator account.
//!
//! Usage:
//!   cargo run --bin setup-admin
//!
//! Idempotent: a second run reports that the account already exists and
//! leaves it untouched. Exits 0 in both cases.

use hybex_qa_lib::config::Config;
use hybex_qa_lib::db::DbPool;
use hybex_qa_lib::services::auth::{
    MASTER_ADMIN_EMAIL, MASTER_ADMIN_PASSWORD, ProvisionOutcome, ensure_master_account,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match DbPool::connect(&config.database_url).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error connecting to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = pool.run_migrations().await {
        eprintln!("Error running migrations: {}", e);
        std::process::exit(1);
    }

    match ensure_master_account(&pool).await {
        Ok(ProvisionOutcome::Created) => {
            println!("Master administrator account created.");
            println!();
            println!("  Email:    {}", MASTER_ADMIN_EMAIL);
            println!("  Password: {}", MASTER_ADMIN_PASSWORD);
            println!();
            println!("Change the password after the first login.");
        }
        Ok(ProvisionOutcome::AlreadyExists) => {
            println!(
                "Master administrator account already exists ({}).",
                MASTER_ADMIN_EMAIL
            );
        }
        Err(e) => {
            eprintln!("Error creating master administrator account: {}", e);
            std::process::exit(1);
        }
    }
}
