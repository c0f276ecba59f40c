//! Grids described as text.
//!
//! A [`Layout`] parses a block of ASCII art into a [`WalkGrid`] plus optional
//! start and goal markers. Line `n` of the text is row `y = n`.
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | floor |
//! | `#` | wall |
//! | ` ` or `~` | removed cell |
//! | `S` | start (floor) |
//! | `G` | goal (floor) |

use std::fmt;

use tilepath_core::Point;

use crate::grid::{Tile, WalkGrid};

const FLOOR: char = '.';
const WALL: char = '#';
const VOID: char = '~';
const START: char = 'S';
const GOAL: char = 'G';
const PATH: char = '*';

/// A grid with its start and goal markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: WalkGrid,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

impl Layout {
    /// Parse a layout.
    ///
    /// Empty lines before the first row and after the last row are ignored;
    /// every remaining line must have the same width.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let last = lines.iter().rposition(|l| !l.is_empty()).map_or(first, |i| i + 1);
        let rows = &lines[first..last];

        let width = rows.first().map_or(0, |l| l.chars().count());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentSize {
                    line: y,
                    expected: width,
                    found,
                });
            }
        }

        let (w, h) = grid_size(width, rows.len())?;
        let mut layout = Layout {
            grid: WalkGrid::new(w, h),
            start: None,
            goal: None,
        };

        for (y, row) in (0..h).zip(rows) {
            for (x, ch) in (0..w).zip(row.chars()) {
                let pos = Point::new(x, y);
                let tile = match ch {
                    FLOOR => Tile::Floor,
                    WALL => Tile::Wall,
                    ' ' | VOID => Tile::Void,
                    START | GOAL => {
                        let slot = if ch == START {
                            &mut layout.start
                        } else {
                            &mut layout.goal
                        };
                        if slot.is_some() {
                            return Err(LayoutError::DuplicateMarker { ch, pos });
                        }
                        *slot = Some(pos);
                        Tile::Floor
                    }
                    _ => return Err(LayoutError::InvalidRune { ch, pos }),
                };
                layout.grid.set(pos, tile);
            }
        }

        Ok(layout)
    }

    /// Render this layout, overlaying `path` with `*` between the markers.
    pub fn to_text(&self, path: &[Point]) -> String {
        render(&self.grid, self.start, self.goal, path)
    }
}

fn grid_size(width: usize, height: usize) -> Result<(i32, i32), LayoutError> {
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(LayoutError::TooLarge { width, height }),
    }
}

/// Render `grid` in layout syntax. Removed cells are written as `~`, interior
/// path cells as `*`, and markers take precedence over the path.
pub fn render(grid: &WalkGrid, start: Option<Point>, goal: Option<Point>, path: &[Point]) -> String {
    let w = grid.width().max(0) as usize;
    let h = grid.height().max(0) as usize;
    let mut chars: Vec<Vec<char>> = vec![Vec::with_capacity(w); h];

    for (p, tile) in grid.iter() {
        chars[p.y as usize].push(match tile {
            Tile::Floor => FLOOR,
            Tile::Wall => WALL,
            Tile::Void => VOID,
        });
    }

    let mut mark = |p: Point, ch: char| {
        if grid.bounds().contains(p) {
            chars[p.y as usize][p.x as usize] = ch;
        }
    };
    for &p in path {
        mark(p, PATH);
    }
    if let Some(p) = start {
        mark(p, START);
    }
    if let Some(p) = goal {
        mark(p, GOAL);
    }

    let mut out = String::with_capacity(h * (w + 1));
    for row in chars {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A row's width differs from the first row's.
    InconsistentSize {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the layout alphabet.
    InvalidRune { ch: char, pos: Point },
    /// `S` or `G` appears more than once.
    DuplicateMarker { ch: char, pos: Point },
    /// A dimension does not fit in grid coordinates.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: row {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "layout: second \u{201c}{ch}\u{201d} marker at {pos}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "layout: {width}x{height} is too large")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
