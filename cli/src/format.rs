use cli_table::{Cell, Style, Table, print_stdout};
use colored::Colorize;
use engine::Error;
use engine::query::{HELP_TEXT, QueryResult};
use engine::storage::Record;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

pub fn print_result(result: &QueryResult<'_>, mode: OutputMode) {
    match result {
        QueryResult::Help => println!("{}", HELP_TEXT),
        QueryResult::Quit => {}
        QueryResult::Product(record) => match mode {
            OutputMode::Json => print_json(record),
            OutputMode::Human => print_record(record),
        },
        QueryResult::ProductNotFound(_) => println!("{}", "Inventory/Product not found".red()),
        QueryResult::Category { name, records } if records.is_empty() => {
            println!("No products found in category: {}", name)
        }
        QueryResult::Category { name, records } => match mode {
            OutputMode::Json => print_json(records.as_slice()),
            OutputMode::Human => {
                println!("\n{}", format!("Products in category '{}':", name).green());

                let table = records
                    .iter()
                    .map(|r| vec![r.id.as_str().cell(), r.name.as_str().cell()])
                    .collect::<Vec<_>>()
                    .table()
                    .title(vec!["ID".cell().bold(true), "Name".cell().bold(true)]);

                if let Err(e) = print_stdout(table) {
                    eprintln!("Failed to print table: {}", e);
                }
                println!("Total: {} products", records.len());
            }
        },
        QueryResult::InvalidCategory(_) => println!("{}", "Invalid Category".red()),
    }
}

pub fn print_error(err: &Error) {
    match err {
        Error::Usage(_) => println!("{}", err.to_string().yellow()),
        _ => println!("{}", err),
    }
}

fn print_record(record: &Record) {
    println!("\n{}", "Product Found:".green().bold());
    println!("ID: {}", record.id);
    println!("Name: {}", record.name);
    println!("Category: {}", record.category);
    println!("Price: {}", record.price);
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to encode result: {}", e),
    }
}
