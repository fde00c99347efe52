use std::{fs, path::Path};
use util::config;

mod runner;

#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let url = config::database_url(&db_path);
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await;
        }
        _ => {
            create_db_dir(&db_path);
            runner::run_all_migrations(&url).await;
        }
    }
}

/// The SQLite file behind `DATABASE_PATH`, or `None` for a connection URL.
fn db_file(path_or_url: &str) -> Option<&Path> {
    (!config::is_database_url(path_or_url)).then(|| Path::new(path_or_url))
}

fn remove_db_file(path_or_url: &str) {
    let Some(db_path) = db_file(path_or_url) else {
        println!("DATABASE_PATH is a connection URL, no file to delete: {path_or_url}");
        return;
    };
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(path_or_url: &str) {
    if let Some(parent) = db_file(path_or_url).and_then(Path::parent) {
        fs::create_dir_all(parent).expect("Failed to create DB directory");
    }
}
