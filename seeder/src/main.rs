use crate::seed::{Seeder, run_seeder};
use crate::seeds::tickets::TicketSeeder;
use colored::*;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use util::config;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {err}", "Failed to connect to database:".red());
            std::process::exit(1);
        }
    };

    if let Err(err) = Migrator::up(&db, None).await {
        eprintln!("{} {err}", "Failed to apply migrations:".red());
        std::process::exit(1);
    }

    println!("Seeding {}", config::database_path().cyan());

    for (seeder, name) in [(
        Box::new(TicketSeeder) as Box<dyn Seeder + Send + Sync>,
        "Ticket",
    )] {
        run_seeder(&*seeder, name, &db).await;
    }
}
