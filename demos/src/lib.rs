//! Shared logic for the `findpath` demo: argument parsing, TOML settings and
//! running one search on a [`Board`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use tilepath_core::Point;
use tilepath_grid::{Board, BoardError, Layout, LayoutError, WalkGrid, layout};
use tilepath_paths::SearchConfig;

pub const DEFAULT_CONFIG: &str = "findpath.toml";

pub const HELP: &str = "\
findpath - shortest 4-connected path on a grid

USAGE:
    findpath [OPTIONS]

OPTIONS:
    -c, --config <FILE>     Settings file (default: findpath.toml if present)
    -m, --map <FILE>        Layout file: . floor, # wall, ~ removed, S start, G goal
    -s, --start <X,Y>       Start cell (overrides the layout's S)
    -g, --goal <X,Y>        Goal cell (overrides the layout's G)
        --json              Print the result as JSON
    -h, --help              Print help information

Set RUST_LOG=debug to trace board and search decisions.";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// `[grid]` section of the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub width: i32,
    pub height: i32,
    /// Layout file, relative to the working directory.
    pub layout: Option<PathBuf>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: WalkGrid::DEFAULT_WIDTH,
            height: WalkGrid::DEFAULT_HEIGHT,
            layout: None,
        }
    }
}

/// Contents of the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub search: SearchConfig,
}

impl Settings {
    pub fn parse(s: &str) -> Result<Self, DemoError> {
        toml::from_str(s).map_err(DemoError::Settings)
    }

    /// Load settings from `path`, or from [`DEFAULT_CONFIG`] when it exists,
    /// or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, DemoError> {
        match path {
            Some(path) => {
                let settings = Self::parse(&read(path)?)?;
                info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG);
                if !default.exists() {
                    return Ok(Self::default());
                }
                match read(default).and_then(|s| Self::parse(&s)) {
                    Ok(settings) => {
                        info!("Loaded settings from {DEFAULT_CONFIG}");
                        Ok(settings)
                    }
                    Err(e) => {
                        warn!("Ignoring {DEFAULT_CONFIG}: {e}");
                        Ok(Self::default())
                    }
                }
            }
        }
    }
}

fn read(path: &Path) -> Result<String, DemoError> {
    fs::read_to_string(path).map_err(|e| DemoError::Io(path.to_path_buf(), e))
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub map: Option<PathBuf>,
    pub start: Option<Point>,
    pub goal: Option<Point>,
    pub json: bool,
    pub help: bool,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Args, DemoError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = Args::default();
    let mut it = args.into_iter();

    while let Some(arg) = it.next() {
        let arg = arg.as_ref();
        let mut value = || {
            it.next()
                .map(|v| v.as_ref().to_string())
                .ok_or_else(|| DemoError::Usage(format!("{arg} needs a value")))
        };
        match arg {
            "--config" | "-c" => result.config = Some(value()?.into()),
            "--map" | "-m" => result.map = Some(value()?.into()),
            "--start" | "-s" => result.start = Some(parse_point(&value()?)?),
            "--goal" | "-g" => result.goal = Some(parse_point(&value()?)?),
            "--json" => result.json = true,
            "--help" | "-h" => result.help = true,
            other => return Err(DemoError::Usage(format!("unknown argument: {other}"))),
        }
    }

    Ok(result)
}

/// Parse `X,Y`.
pub fn parse_point(s: &str) -> Result<Point, DemoError> {
    let bad = || DemoError::Usage(format!("expected X,Y, got {s:?}"));
    let (x, y) = s.split_once(',').ok_or_else(bad)?;
    let x = x.trim().parse().map_err(|_| bad())?;
    let y = y.trim().parse().map_err(|_| bad())?;
    Ok(Point::new(x, y))
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

/// Build the board described by `settings` and `args`.
pub fn build_board(settings: &Settings, args: &Args) -> Result<Board, DemoError> {
    let layout_path = args.map.as_ref().or(settings.grid.layout.as_ref());
    let mut board = match layout_path {
        Some(path) => {
            let layout = Layout::parse(&read(path)?).map_err(DemoError::Layout)?;
            info!(
                "Loaded {}x{} layout from {}",
                layout.grid.width(),
                layout.grid.height(),
                path.display()
            );
            Board::from_layout(layout)
        }
        None => Board::new(settings.grid.width, settings.grid.height),
    };
    board.set_search_config(settings.search);

    if let Some(p) = args.start {
        board.select_start(p).map_err(DemoError::Board)?;
    }
    if let Some(p) = args.goal {
        board.select_goal(p).map_err(DemoError::Board)?;
    }
    Ok(board)
}

/// Run one search and format the result.
pub fn run(settings: &Settings, args: &Args) -> Result<String, DemoError> {
    let mut board = build_board(settings, args)?;
    // Endpoints are cleared when no path exists; report what was asked for.
    let (start, goal) = (board.start(), board.goal());
    let path = board.execute().map_err(DemoError::Board)?;

    match &path {
        Some(p) => info!("Found a path of {} steps", p.len() - 1),
        None => info!("No path between the selected cells"),
    }

    if args.json {
        let out = serde_json::json!({
            "width": board.grid().width(),
            "height": board.grid().height(),
            "start": start,
            "goal": goal,
            "steps": path.as_ref().map(|p| p.len() - 1),
            "path": path,
        });
        return serde_json::to_string_pretty(&out).map_err(DemoError::Json);
    }

    let mut out = layout::render(board.grid(), start, goal, path.as_deref().unwrap_or(&[]));
    match &path {
        Some(p) => out.push_str(&format!("{} steps\n", p.len() - 1)),
        None => out.push_str("no path\n"),
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum DemoError {
    Usage(String),
    Io(PathBuf, std::io::Error),
    Settings(toml::de::Error),
    Layout(LayoutError),
    Board(BoardError),
    Json(serde_json::Error),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{msg}"),
            Self::Io(path, e) => write!(f, "{}: {e}", path.display()),
            Self::Settings(e) => write!(f, "invalid settings: {e}"),
            Self::Layout(e) => write!(f, "{e}"),
            Self::Board(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(_) => None,
            Self::Io(_, e) => Some(e),
            Self::Settings(e) => Some(e),
            Self::Layout(e) => Some(e),
            Self::Board(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maps_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("maps")
    }

    fn args_for(map: &str) -> Args {
        Args {
            map: Some(maps_dir().join(map)),
            ..Args::default()
        }
    }

    #[test]
    fn parse_all_flags() {
        let args = parse_args(["-m", "a.txt", "--start", "1,2", "-g", " 3 , 4", "--json"]).unwrap();
        assert_eq!(args.map, Some(PathBuf::from("a.txt")));
        assert_eq!(args.start, Some(Point::new(1, 2)));
        assert_eq!(args.goal, Some(Point::new(3, 4)));
        assert!(args.json);
        assert!(!args.help);
    }

    #[test]
    fn parse_rejects_unknown_and_incomplete() {
        assert!(matches!(parse_args(["--bogus"]), Err(DemoError::Usage(_))));
        assert!(matches!(parse_args(["--map"]), Err(DemoError::Usage(_))));
        assert!(matches!(parse_args(["-s", "1;2"]), Err(DemoError::Usage(_))));
    }

    #[test]
    fn settings_defaults_and_overrides() {
        let s = Settings::parse("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.grid.width, 5);

        let s = Settings::parse("[grid]\nwidth = 8\n[search]\nmax_expansions = 40\n").unwrap();
        assert_eq!(s.grid.width, 8);
        assert_eq!(s.grid.height, 5);
        assert_eq!(s.search.max_expansions, Some(40));

        assert!(matches!(Settings::parse("[grid]\nwidth = \"x\""), Err(DemoError::Settings(_))));
    }

    #[test]
    fn run_gap_map() {
        let out = run(&Settings::default(), &args_for("gap.txt")).unwrap();
        assert_eq!(out, "S*.\n#*#\n.*G\n4 steps\n");
    }

    #[test]
    fn run_walled_map() {
        let out = run(&Settings::default(), &args_for("walled.txt")).unwrap();
        assert_eq!(out, "..#..\n.#S#.\n..#.G\nno path\n");
    }

    #[test]
    fn run_maze_map() {
        let out = run(&Settings::default(), &args_for("maze.txt")).unwrap();
        assert!(out.ends_with("steps\n"));
    }

    #[test]
    fn run_default_grid_as_json() {
        let args = Args {
            start: Some(Point::new(0, 0)),
            goal: Some(Point::new(4, 4)),
            json: true,
            ..Args::default()
        };
        let out = run(&Settings::default(), &args).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["steps"], 8);
        assert_eq!(v["path"].as_array().map(|a| a.len()), Some(9));
        assert_eq!(v["start"]["x"], 0);
    }

    #[test]
    fn run_without_endpoints_fails() {
        let err = run(&Settings::default(), &Args::default()).unwrap_err();
        assert!(matches!(err, DemoError::Board(BoardError::MissingEndpoints)));
    }

    #[test]
    fn missing_map_is_io_error() {
        let err = run(&Settings::default(), &args_for("nope.txt")).unwrap_err();
        assert!(matches!(err, DemoError::Io(..)));
    }
}
