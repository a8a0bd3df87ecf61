// seatmap-layout: Print the venue layout for a roster.
//
// Prints the canvas size, the fixed venue fixtures and every table with its
// position and guest count, in roster first-seen order.
//
// Usage:
//   seatmap-layout [-r ROSTER] [--lang en|vi] [--json]
//
// Options:
//   -r, --roster PATH      Roster file, or a directory containing guests.csv
//   --lang LANG            en (default) or vi, for fixture labels
//   --delimiter C          Field delimiter (default ',')
//   --json                 Print the layout as one JSON object
//   -h, --help             Print help

use std::io::{self, Write};

fn main() {
    seatmap_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = seatmap_cli::parse_options(&args).unwrap_or_else(|e| seatmap_cli::fatal(&e));

    if seatmap_cli::wants_help(&opts.rest) {
        println!("seatmap-layout: Print the venue layout for a roster.");
        println!();
        println!("Usage: seatmap-layout [-r ROSTER] [--lang en|vi] [--json]");
        println!();
        println!("Options:");
        println!("  -r, --roster PATH      Roster file, or a directory containing guests.csv");
        println!("  --lang LANG            en (default) or vi, for fixture labels");
        println!("  --delimiter C          Field delimiter (default ',')");
        println!("  --json                 Print the layout as one JSON object");
        println!("  -h, --help             Print this help");
        return;
    }

    let handle = seatmap_cli::load_handle(&opts).unwrap_or_else(|e| seatmap_cli::fatal(&e));
    let layout = seatmap_cli::layout_json(&handle);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if opts.json {
        match serde_json::to_string_pretty(&layout) {
            Ok(text) => {
                let _ = writeln!(out, "{text}");
            }
            Err(e) => seatmap_cli::fatal(&format!("failed to encode layout: {e}")),
        }
        return;
    }

    let _ = writeln!(out, "canvas: {}x{}", layout.width, layout.height);
    let _ = writeln!(out, "fixtures:");
    for f in &layout.fixtures {
        let _ = writeln!(
            out,
            "  {:<12} ({:>4}, {:>4})  {}x{}  {}",
            f.name, f.x, f.y, f.width, f.height, f.label
        );
    }
    let _ = writeln!(out, "tables:");
    for t in &layout.tables {
        let _ = writeln!(
            out,
            "  {:>3}  ({:>4}, {:>4})  {:>3} guests  {}",
            t.id, t.x, t.y, t.guests, t.name
        );
    }

    let skipped = handle.skipped_rows();
    if !skipped.is_empty() {
        let _ = writeln!(out, "skipped rows:");
        for row in skipped {
            let _ = writeln!(out, "  line {}: {}", row.line, row.reason);
        }
    }
}
