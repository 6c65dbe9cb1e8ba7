use log::debug;
use plain_json_parser::{parse_file, walk::lookup};
use std::{env, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let path = match args.get(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: plain-json <file> [path]");
            process::exit(2);
        }
    };

    let parsed = match parse_file(path) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let selected = match args.get(2) {
        None => Some(&parsed),
        Some(pointer) => match lookup(&parsed, pointer) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
    };

    let value = match selected {
        Some(value) => value,
        None => {
            eprintln!("Nothing found at {}", args[2]);
            process::exit(1);
        }
    };

    debug!("printing {} value", value.kind());

    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
