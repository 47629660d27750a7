use std::io::{self, Write};

use clap::Parser;

use crate::domain::book::ContactBook;
use crate::domain::contact::Contact;
use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Personal contact book")]
pub struct Cli {
    /// Path to the contacts file
    #[arg(long, env = "CONTACTS_PATH", default_value_t = String::from("contacts.json"))]
    pub path: String,
}

pub enum Command {
    AddContact,
    ListContacts,
    SearchContacts,
    EditContact,
    DeleteContact,
    Exit,
}

// OUTPUT FUNCTIONS
pub fn parse_command_from_menu() -> Result<Command, AppError> {
    println!("\n=== CONTACT BOOK MENU ===");
    println!("1. Add contact");
    println!("2. List contacts");
    println!("3. Search by name");
    println!("4. Edit contact");
    println!("5. Delete contact");
    println!("0. Exit");
    print!("> ");
    io::stdout().flush()?;

    let action = get_input()?;

    match action.as_str() {
        "1" => Ok(Command::AddContact),
        "2" => Ok(Command::ListContacts),
        "3" => Ok(Command::SearchContacts),
        "4" => Ok(Command::EditContact),
        "5" => Ok(Command::DeleteContact),
        "0" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(action)),
    }
}

pub fn display_contact(contact: &Contact) -> String {
    let email = if contact.email.is_empty() {
        "not provided"
    } else {
        contact.email.as_str()
    };

    format!(
        "{} | Phone: {} | Email: {}",
        contact.name, contact.phone, email
    )
}

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();

    if io::stdin().read_line(&mut input)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        )));
    }
    Ok(input.trim().to_string())
}

pub fn prompt(message: &str) -> Result<String, AppError> {
    println!("{message}");
    print!("> ");
    io::stdout().flush()?;
    get_input()
}

/// Reads a full contact from stdin, re-prompting until the input passes
/// construction.
pub fn read_contact_data() -> Result<Contact, AppError> {
    loop {
        let name = prompt("Name:")?;
        let phone = prompt("Phone:")?;
        let email = prompt("Email (optional):")?;

        match Contact::new(&name, &phone, &email) {
            Ok(contact) => return Ok(contact),
            Err(e) => println!("{e}"),
        }
    }
}

/// The interactive loop. The book is injected by the caller; this layer
/// only translates menu choices into store operations and prints their
/// outcomes.
pub fn run_app(book: &mut ContactBook) -> Result<(), AppError> {
    loop {
        let command = match parse_command_from_menu() {
            Ok(command) => command,
            Err(AppError::ParseCommand(choice)) => {
                println!("Invalid choice '{choice}'. Try again.");
                continue;
            }
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match command {
            Command::AddContact => {
                let contact = read_contact_data()?;
                match book.add(contact) {
                    Ok(()) => println!("Contact added."),
                    Err(e) => eprintln!("{e}"),
                }
            }

            Command::ListContacts => {
                if book.list().is_empty() {
                    println!("No contacts yet.");
                    continue;
                }

                println!("\nTotal contacts: {}", book.list().len());
                for contact in book.list() {
                    println!("- {}", display_contact(contact));
                }
            }

            Command::SearchContacts => {
                let query = prompt("Enter a name to search for:")?;
                let found = book.find(&query);

                if found.is_empty() {
                    println!("No contacts found.");
                    continue;
                }

                for contact in found {
                    println!("- {}", display_contact(contact));
                }
            }

            Command::EditContact => {
                let name = prompt("Name of the contact to edit:")?;

                if book.find(&name).is_empty() {
                    println!("Contact not found.");
                    continue;
                }

                println!("Enter the new data:");
                let new_contact = read_contact_data()?;

                match book.update(&name, new_contact) {
                    Ok(true) => println!("Contact updated."),
                    Ok(false) => println!("Contact not found."),
                    Err(e) => eprintln!("{e}"),
                }
            }

            Command::DeleteContact => {
                let name = prompt("Name of the contact to delete:")?;

                match book.remove(&name) {
                    Ok(0) => println!("No contact matched that name."),
                    Ok(n) => println!("Removed {n} contact(s)."),
                    Err(e) => eprintln!("{e}"),
                }
            }

            Command::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}
