#![forbid(unsafe_code)]

//! boxtab demo showcase.
//!
//! Prints a handful of tables exercising the main configuration surfaces:
//! derived columns, selected columns with custom labels, periodic header
//! and separator repetition, fragment streaming, and ANSI decoration.
//! Run with `RUST_LOG=debug` to see the render spans.

use boxtab::{BorderFn, CellFn, Table};
use serde_json::{Value, json};

fn people() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "First Max",
            "followers": 32,
            "subscribers": 4,
            "description": "This is a big boy who doesn't like small boys",
        }),
        json!({
            "id": 2,
            "name": "Second Jim",
            "followers": 123,
            "subscribers": 41,
            "description": "This is a second big boy who very much likes small boys",
        }),
        json!({
            "id": 3,
            "name": "John",
            "followers": 320,
            "subscribers": 0,
            "description": "This is a tall boy who doesn't like short boys but likes short girls",
        }),
        json!({
            "id": 4,
            "name": "Mary",
            "followers": 3200,
            "subscribers": 485,
            "description": "This is a short girl who doesn't like small boys",
        }),
        json!({
            "id": 5,
            "name": "Jack",
            "followers": 12,
            "subscribers": 0,
            "description": "This is a Jack who is named as Jack",
        }),
    ]
}

/// All columns derived from the data, default width.
fn demo_derived_columns() {
    println!("derived columns, width 120:");
    let table: Table<Value> = Table::new();
    for line in table.build(&people()) {
        println!("{line}");
    }
}

/// Narrow table with periodic rules and repeated headers.
fn demo_cadence() {
    println!("\nwidth 40, rule every 2 rows, header every 4:");
    let table: Table<Value> = Table::new()
        .width(40)
        .hr_on_every(2)
        .title_on_every(4)
        .only_keys(["id", "name", "followers", "description"])
        .header_label("id", "#")
        .header_label("name", "User name")
        .header_label("followers", "Followers")
        .header_label("description", "Description");
    for line in table.build(&people()) {
        println!("{line}");
    }
}

/// Streaming output: header, rows one at a time, footer.
fn demo_fragments() -> Result<(), Box<dyn std::error::Error>> {
    println!("\nfragment streaming, width 60:");
    let table: Table<Value> = Table::new()
        .width(60)
        .only_keys(["id", "name", "followers"])
        .header_label("id", "#")
        .header_label("name", "User name");
    for line in table.header()? {
        println!("{line}");
    }
    for (i, person) in people().iter().enumerate() {
        if i == 3 {
            for line in table.inner_header()? {
                println!("{line}");
            }
        }
        for line in table.row(person)? {
            println!("{line}");
        }
    }
    println!("{}", table.footer()?);
    Ok(())
}

/// ANSI-decorated borders and cells.
fn demo_ansi() {
    println!("\nANSI decoration, width 60:");
    let table: Table<Value> = Table::new()
        .width(60)
        .only_keys(["id", "name", "followers"])
        .map_border(BorderFn(|border: &str| format!("\x1b[90m{border}\x1b[0m")))
        .map_value(CellFn(
            |key: &str, text: &str, is_header: bool, record: Option<&Value>, _: usize| {
                if is_header {
                    return format!("\x1b[1m{text}\x1b[0m");
                }
                let followers = record
                    .and_then(|person| person.get("followers"))
                    .and_then(Value::as_i64);
                match followers {
                    Some(n) if key == "followers" && n >= 100 => {
                        format!("\x1b[32m{text}\x1b[0m")
                    }
                    _ => text.to_string(),
                }
            },
        ));
    for line in table.build(&people()) {
        println!("{line}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    demo_derived_columns();
    demo_cadence();
    if let Err(e) = demo_fragments() {
        eprintln!("fragment demo failed: {e}");
        std::process::exit(1);
    }
    demo_ansi();
}
