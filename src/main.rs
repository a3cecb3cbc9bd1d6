use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use seatplan::boarding::console_card;
use seatplan::manifest::Manifest;
use seatplan::{Flight, SeatResult};
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Path to the JSON flight manifest
    #[arg(short, long, value_name = "FILE", default_value = "data/ba758.json")]
    manifest: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn paginate(content: &str) -> io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    pager.wait().map(|_| ())
}

fn show(content: String, lines: usize) {
    if lines > 20 {
        if let Err(e) = paginate(&content) {
            tracing::warn!(error = %e, "pager unavailable");
            println!("{}", content);
        }
    } else {
        println!("{}", content);
    }
}

fn seat_map(flight: &Flight) -> String {
    let plan = flight.seating_plan();
    let mut builder = Builder::default();
    builder.push_record(std::iter::once("Row".to_string()).chain(plan.letters().chars().map(String::from)));

    let mut seats = flight.seats().peekable();
    for row in plan.rows() {
        let mut record = vec![row.to_string()];
        while let Some((_, name)) = seats.next_if(|(seat, _)| seat.row == row) {
            record.push(name.map(|n| n.to_string()).unwrap_or_else(|| "·".dimmed().to_string()));
        }
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    table.to_string()
}

fn report(result: SeatResult<String>) {
    match result {
        Ok(msg) => println!("{}", msg.green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let path = args.manifest.to_string_lossy();
    let mut flight = Manifest::load_from_file(&path)?.into_flight()?;
    println!(
        "Seat desk open for {} ({}, {}). Loaded manifest from {}",
        flight.number(),
        flight.aircraft_model(),
        flight.aircraft().registration(),
        args.manifest.display()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["ls", "alloc", "move", "rm", "seat", "find", "avail", "cards", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                let rest = parts[1..].join(" ");
                match parts[0] {
                    "ls" => show(seat_map(&flight), flight.seating_plan().rows().count()),
                    "alloc" => {
                        if let (Some(seat), Some(_)) = (parts.get(1), parts.get(2)) {
                            let name = parts[2..].join(" ");
                            report(flight.allocate_seat(seat, name.as_str()).map(|_| format!("{} seated in {}.", name, seat)));
                        } else {
                            println!("Usage: alloc <seat> <passenger name>");
                        }
                    },
                    "move" => {
                        if let (Some(from), Some(to)) = (parts.get(1), parts.get(2)) {
                            report(flight.relocate_passenger(from, to).map(|_| format!("Moved {} to {}.", from, to)));
                        } else {
                            println!("Usage: move <from seat> <to seat>");
                        }
                    },
                    "rm" => {
                        if let Some(seat) = parts.get(1) {
                            report(flight.remove_passenger(seat).map(|name| format!("{} removed from {}.", name, seat)));
                        } else {
                            println!("Usage: rm <seat>");
                        }
                    },
                    "seat" => {
                        if let Some(seat) = parts.get(1) {
                            report(flight.return_seat(seat).map(|name| format!("{}: {}", seat, name)));
                        } else {
                            println!("Usage: seat <seat>");
                        }
                    },
                    "find" => {
                        if rest.is_empty() {
                            println!("Usage: find <passenger name>");
                        } else {
                            match flight.find_passenger(&rest) {
                                Some(seat) => println!("{} is in {}.", rest, seat),
                                None => println!("{}", format!("{} is not on {}.", rest, flight.number()).yellow()),
                            }
                        }
                    },
                    "avail" => println!(
                        "{} of {} seats available.",
                        flight.num_available_seats(),
                        flight.capacity()
                    ),
                    "cards" => {
                        let mut cards = vec![];
                        flight.make_boarding_cards(|passenger, seat, number, model| {
                            cards.push(console_card(passenger, seat, number, model))
                        });
                        if cards.is_empty() {
                            println!("No passengers seated.");
                        } else {
                            let count = cards.len();
                            show(cards.join("\n\n") + "\n", count * 6);
                        }
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                  - Show the seat map");
                        println!("  alloc <seat> <name> - Seat passenger <name> in <seat>");
                        println!("  move <from> <to>    - Move the passenger in <from> to <to>");
                        println!("  rm <seat>           - Remove the passenger in <seat>");
                        println!("  seat <seat>         - Show who sits in <seat>");
                        println!("  find <name>         - Find the seat of passenger <name>");
                        println!("  avail               - Count available seats");
                        println!("  cards               - Print boarding cards");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Close the seat desk\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
