// seatmap-lookup: Find guests and their tables.
//
// Looks up each NAME argument, or each stdin line when no names are given,
// on the chosen side of the party and prints the table, seat and tablemates.
//
// Usage:
//   seatmap-lookup [-r ROSTER] [--side bride|groom] [--lang en|vi] [--json] [NAME...]
//
// Options:
//   -r, --roster PATH      Roster file, or a directory containing guests.csv
//   --side SIDE            bride (default) or groom
//   --lang LANG            en (default) or vi
//   --threshold F          Similarity threshold in [0, 1] (default 0.4)
//   --delimiter C          Field delimiter (default ',')
//   --json                 Print one JSON object per lookup
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use seatmap_core::Side;
use seatmap_engine::handle::SeatmapHandle;

fn main() {
    seatmap_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = seatmap_cli::parse_options(&args).unwrap_or_else(|e| seatmap_cli::fatal(&e));

    if seatmap_cli::wants_help(&opts.rest) {
        println!("seatmap-lookup: Find a wedding guest's table.");
        println!();
        println!("Usage: seatmap-lookup [-r ROSTER] [--side bride|groom] [--lang en|vi] [--json] [NAME...]");
        println!();
        println!("If NAME arguments are given, looks up each name.");
        println!("Otherwise reads names from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -r, --roster PATH      Roster file, or a directory containing guests.csv");
        println!("  --side SIDE            bride (default) or groom");
        println!("  --lang LANG            en (default) or vi");
        println!("  --threshold F          Similarity threshold in [0, 1] (default 0.4)");
        println!("  --delimiter C          Field delimiter (default ',')");
        println!("  --json                 Print one JSON object per lookup");
        println!("  -h, --help             Print this help");
        return;
    }

    let handle = seatmap_cli::load_handle(&opts).unwrap_or_else(|e| seatmap_cli::fatal(&e));
    let side = opts.side;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if opts.rest.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            lookup_one(&handle, &line, side, opts.json, &mut out);
        }
    } else {
        for name in &opts.rest {
            lookup_one(&handle, name, side, opts.json, &mut out);
        }
    }
}

fn lookup_one(handle: &SeatmapHandle, query: &str, side: Side, json: bool, out: &mut impl Write) {
    match seatmap_cli::render_lookup(handle, query, side, json) {
        Ok(Some(text)) => {
            let _ = writeln!(out, "{text}");
        }
        Ok(None) => {}
        Err(e) => eprintln!("error encoding {query:?}: {e}"),
    }
}
