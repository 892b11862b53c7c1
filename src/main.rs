//! Command-line state lookups
//!
//! Usage:
//!   us_states [--json] valid <CODE>
//!   us_states [--json] name <NAME>
//!   us_states [--json] coords <LAT> <LON>
//!   us_states [--json] list
//!
//! With no subcommand, runs a few sample lookups.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use us_states::{StateDirectory, StateRecord};

/// Look up US states by code, name or coordinate
#[derive(Parser, Debug)]
#[command(name = "us_states")]
#[command(about = "Look up US states by code, name or coordinate")]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a two-letter code is listed (case-sensitive)
    Valid { code: String },
    /// Find the code for an exact state name
    Name { name: String },
    /// Find the state nearest to a point
    Coords {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
    /// List every state and territory
    List,
}

#[derive(Serialize)]
struct Lookup {
    query: String,
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance_km: Option<f64>,
}

impl Lookup {
    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(self).context("serializing lookup")?);
            return Ok(());
        }
        match (self.code, self.distance_km) {
            (Some(code), Some(d)) => println!("{} ({:.1} km)", code, d),
            (Some(code), None) => println!("{}", code),
            (None, _) => println!("not found"),
        }
        Ok(())
    }
}

fn lookup_coords(directory: &StateDirectory, latitude: f64, longitude: f64) -> Lookup {
    let nearest = directory.nearest(latitude, longitude);
    Lookup {
        query: format!("{}, {}", latitude, longitude),
        code: nearest.as_ref().map(|n| n.code),
        distance_km: nearest.map(|n| n.distance_km),
    }
}

fn lookup_name(directory: &StateDirectory, name: &str) -> Lookup {
    Lookup {
        query: name.to_string(),
        code: directory.by_name(name),
        distance_km: None,
    }
}

fn print_records<'a>(records: impl Iterator<Item = &'a StateRecord>, json: bool) -> Result<()> {
    let records: Vec<_> = records.collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&records).context("serializing states")?);
        return Ok(());
    }
    for r in records {
        println!(
            "{}  {:<26} {:>9.4} {:>10.4}",
            r.code, r.name, r.centroid.latitude, r.centroid.longitude
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let directory = StateDirectory::shared();
    debug!("Loaded {} states", directory.len());

    match args.command {
        Some(Command::Valid { code }) => {
            let valid = directory.is_valid_code(&code);
            if args.json {
                println!("{}", serde_json::json!({ "code": code, "valid": valid }));
            } else {
                println!("{}", valid);
            }
        }
        Some(Command::Name { name }) => lookup_name(directory, &name).print(args.json)?,
        Some(Command::Coords { latitude, longitude }) => {
            lookup_coords(directory, latitude, longitude).print(args.json)?
        }
        Some(Command::List) => print_records(directory.records(), args.json)?,
        None => {
            lookup_name(directory, "California").print(args.json)?;
            // Sacramento, California
            lookup_coords(directory, 38.3454, -121.2935).print(args.json)?;
            // Austin, Texas
            lookup_coords(directory, 30.25, -97.75).print(args.json)?;
        }
    }

    Ok(())
}
