// seatmap-cli: shared utilities for CLI tools.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process;

use seatmap_core::{Side, VenueLayout};
use seatmap_engine::handle::{GuestView, SeatmapHandle};
use seatmap_engine::locale::Locale;
use seatmap_engine::matcher::SearchOutcome;
use seatmap_engine::roster::RosterOptions;
use seatmap_engine::source::FileSource;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Default roster file name.
pub const ROSTER_FILE: &str = "guests.csv";

/// Environment variable naming a roster file or a directory containing one.
pub const ROSTER_ENV: &str = "SEATMAP_ROSTER";

/// Options shared by all seatmap tools.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub roster: Option<String>,
    pub side: Side,
    pub locale: Locale,
    pub threshold: Option<f64>,
    pub delimiter: char,
    pub json: bool,
    /// Positional arguments, in order.
    pub rest: Vec<String>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            roster: None,
            side: Side::default(),
            locale: Locale::default(),
            threshold: None,
            delimiter: RosterOptions::default().delimiter,
            json: false,
            rest: Vec::new(),
        }
    }
}

/// Parse command line args (without the program name).
///
/// Accepts `--flag VALUE` and `--flag=VALUE`. Help flags are left in
/// `rest` for [`wants_help`].
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = || {
            inline
                .clone()
                .or_else(|| iter.next().cloned())
                .ok_or_else(|| format!("{flag} requires a value"))
        };

        match flag {
            "-r" | "--roster" => opts.roster = Some(value()?),
            "--side" => opts.side = value()?.parse::<Side>().map_err(|e| e.to_string())?,
            "--lang" => opts.locale = value()?.parse::<Locale>().map_err(|e| e.to_string())?,
            "--threshold" => {
                let raw = value()?;
                let threshold: f64 = raw
                    .parse()
                    .map_err(|_| format!("invalid threshold: {raw:?}"))?;
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(format!("threshold must be between 0 and 1, got {threshold}"));
                }
                opts.threshold = Some(threshold);
            }
            "--delimiter" => {
                let raw = value()?;
                let mut chars = raw.chars();
                opts.delimiter = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ if raw == "\\t" => '\t',
                    _ => return Err(format!("delimiter must be a single character, got {raw:?}")),
                };
            }
            "--json" => opts.json = true,
            _ => opts.rest.push(arg.clone()),
        }
    }

    Ok(opts)
}

/// Search for the roster file and create a SeatmapHandle.
///
/// Search order:
/// 1. `--roster` argument (if provided)
/// 2. `SEATMAP_ROSTER` environment variable
/// 3. `guests.csv` in the current working directory
///
/// Each entry may name the file itself or a directory containing
/// `guests.csv`.
pub fn load_handle(opts: &CliOptions) -> Result<SeatmapHandle, String> {
    let search_paths = build_search_paths(
        opts.roster.as_deref(),
        std::env::var(ROSTER_ENV).ok(),
        std::env::current_dir().ok(),
    );

    let Some(path) = search_paths.iter().find_map(|p| resolve_roster_file(p)) else {
        return Err(format!(
            "could not find {} in any of the search paths:\n{}",
            ROSTER_FILE,
            search_paths
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    };

    let roster_options = RosterOptions {
        delimiter: opts.delimiter,
    };
    let mut handle = SeatmapHandle::load(&FileSource::new(path), roster_options)
        .map_err(|e| e.to_string())?;
    handle.set_locale(opts.locale);
    if let Some(threshold) = opts.threshold {
        handle.set_threshold(threshold);
    }
    Ok(handle)
}

/// Build the list of candidate roster locations.
fn build_search_paths(
    explicit: Option<&str>,
    env_path: Option<String>,
    cwd: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = explicit {
        paths.push(PathBuf::from(p));
    }

    // 2. SEATMAP_ROSTER environment variable
    if let Some(p) = env_path.filter(|p| !p.is_empty()) {
        paths.push(PathBuf::from(p));
    }

    // 3. Current directory
    if let Some(cwd) = cwd {
        paths.push(cwd);
    }

    paths
}

/// A roster file at `path`, or `guests.csv` inside it when it is a directory.
fn resolve_roster_file(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    let inner = path.join(ROSTER_FILE);
    inner.is_file().then_some(inner)
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level. Colour codes are only written when stderr is a terminal.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let _ = tracing::subscriber::set_global_default(log_subscriber(filter, std::io::stderr, ansi));
}

fn log_subscriber<W>(filter: EnvFilter, writer: W, ansi: bool) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .finish()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

// ---------------------------------------------------------------------------
// Lookup output
// ---------------------------------------------------------------------------

/// Render one lookup as text or a JSON line.
///
/// Returns `Ok(None)` for a blank query: nothing was searched, so nothing is
/// printed.
pub fn render_lookup(
    handle: &SeatmapHandle,
    query: &str,
    side: Side,
    json: bool,
) -> Result<Option<String>, serde_json::Error> {
    let outcome = handle.search(query, side);
    if outcome == SearchOutcome::NoSearch {
        return Ok(None);
    }
    let view = handle.outcome_view(&outcome, query);

    if json {
        let record = LookupJson {
            query,
            side: side.as_str(),
            found: view.is_some(),
            guest: view.map(GuestJson::from),
        };
        return serde_json::to_string(&record).map(Some);
    }

    let mut text = String::new();
    match view {
        Some(view) => {
            if let Some(notice) = &view.notice {
                let _ = writeln!(text, "{notice}");
            }
            let _ = write!(text, "{}: table {} ({})", view.guest_name, view.table_id, view.table_label);
            if !view.seat_label.is_empty() {
                let _ = write!(text, ", {}", view.seat_label);
            }
            if !view.tablemates.is_empty() {
                let _ = write!(text, "\n  tablemates: {}", view.tablemates.join(", "));
            }
        }
        None => {
            let _ = write!(text, "{}: (no match)", query.trim());
        }
    }
    Ok(Some(text))
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

/// JSON shape of one lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupJson<'a> {
    pub query: &'a str,
    pub side: &'static str,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<GuestJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestJson {
    pub guest_name: String,
    pub table_id: u32,
    pub table_label: String,
    pub x: i32,
    pub y: i32,
    pub seat_label: String,
    pub tablemates: Vec<String>,
    pub approximate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl From<GuestView> for GuestJson {
    fn from(view: GuestView) -> Self {
        Self {
            guest_name: view.guest_name,
            table_id: view.table_id,
            table_label: view.table_label,
            x: view.table_position.x,
            y: view.table_position.y,
            seat_label: view.seat_label,
            tablemates: view.tablemates,
            approximate: view.approximate,
            notice: view.notice,
        }
    }
}

/// JSON shape of the venue layout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutJson {
    pub width: u32,
    pub height: u32,
    pub fixtures: Vec<FixtureJson>,
    pub tables: Vec<TableJson>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureJson {
    pub name: &'static str,
    pub label: &'static str,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableJson {
    pub id: u32,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub size: u32,
    pub guests: usize,
}

/// Convert the handle's layout, with fixture labels in its locale.
pub fn layout_json(handle: &SeatmapHandle) -> LayoutJson {
    let layout: &VenueLayout = handle.layout();
    LayoutJson {
        width: layout.width,
        height: layout.height,
        fixtures: layout
            .fixtures
            .iter()
            .map(|f| {
                let (_, _, width, height) = f.bounds();
                FixtureJson {
                    name: f.name,
                    label: handle.fixture_label(f),
                    x: f.center.x,
                    y: f.center.y,
                    width,
                    height,
                }
            })
            .collect(),
        tables: layout
            .tables
            .iter()
            .map(|t| TableJson {
                id: t.id,
                name: t.name.clone(),
                x: t.position.x,
                y: t.position.y,
                size: t.size,
                guests: t.members.len(),
            })
            .collect(),
    }
}
