use std::process::exit;

use clap::Parser;
use dotenv::dotenv;
use log::warn;

use contact_book::cli::{self, Cli};
use contact_book::domain::book::ContactBook;
use contact_book::logger;
use contact_book::store::json::JsonStore;

fn main() {
    dotenv().ok();
    logger::setup();

    let cli = Cli::parse();

    let storage = JsonStore::new(&cli.path);
    let mut book = ContactBook::new(Box::new(storage));

    // A broken or unreadable contacts file must not kill the session;
    // start empty and tell the user
    if let Err(e) = book.load() {
        warn!("{e}; starting with an empty contact book");
    }

    println!("\n--- CONTACT BOOK ---");

    if let Err(e) = cli::run_app(&mut book) {
        eprintln!("{e}");
        exit(1);
    }
}
