//! Tile-grid level data
//!
//! A level is a rectangular grid of cell codes, one row per line and cells
//! separated by commas. See [`ObstacleKind::from_code`] for the recognized codes.

use std::path::Path;

use crate::error::LevelError;
use crate::sim::ObstacleKind;

/// Directory the level files are read from
pub const LEVEL_DIR: &str = "levels";

/// Level files shipped with the game, in play order
pub const LEVEL_FILES: [&str; 2] = ["level_1.csv", "level_2.csv"];

/// Parsed tile grid (row-major, every row the same length)
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    rows: Vec<Vec<Option<ObstacleKind>>>,
    columns: usize,
}

impl TileGrid {
    /// Parse grid text. Unrecognized codes become empty cells; ragged rows are an error.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }

        let mut rows = Vec::with_capacity(lines.len());
        let mut columns = None;
        let mut unknown = 0usize;

        for (row_index, line) in lines.iter().enumerate() {
            let cells: Vec<&str> = if line.is_empty() {
                Vec::new()
            } else {
                line.split(',').map(clean_cell).collect()
            };

            let expected = *columns.get_or_insert(cells.len());
            if cells.len() != expected {
                return Err(LevelError::Ragged {
                    row: row_index,
                    expected,
                    found: cells.len(),
                });
            }

            let row = cells
                .iter()
                .map(|code| {
                    let kind = ObstacleKind::from_code(code);
                    if kind.is_none() && !code.is_empty() {
                        unknown += 1;
                    }
                    kind
                })
                .collect();
            rows.push(row);
        }

        let columns = columns.unwrap_or(0);
        if rows.is_empty() || columns == 0 {
            return Err(LevelError::Empty);
        }
        if unknown > 0 {
            log::warn!("Level grid has {} unrecognized cell codes, treated as empty", unknown);
        }

        Ok(Self { rows, columns })
    }

    /// Read and parse a grid file
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, col: usize) -> Option<ObstacleKind> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Occupied cells in row-major order as (row, col, kind)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, ObstacleKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, kind)| kind.map(|k| (r, c, k)))
        })
    }
}

/// Strip whitespace and CSV quoting from a cell
fn clean_cell(cell: &str) -> &str {
    let cell = cell.trim();
    cell.strip_prefix('"')
        .and_then(|c| c.strip_suffix('"'))
        .unwrap_or(cell)
}

/// One named level
#[derive(Debug, Clone)]
pub struct LevelEntry {
    pub name: String,
    pub grid: TileGrid,
}

/// Ordered catalog of playable levels (never empty)
#[derive(Debug, Clone)]
pub struct LevelSet {
    entries: Vec<LevelEntry>,
}

impl LevelSet {
    pub fn new(entries: Vec<LevelEntry>) -> Result<Self, LevelError> {
        if entries.is_empty() {
            return Err(LevelError::NoLevels);
        }
        Ok(Self { entries })
    }

    /// Load each file in `files` from `dir`, in order
    pub fn load(dir: &Path, files: &[&str]) -> Result<Self, LevelError> {
        let mut entries = Vec::with_capacity(files.len());
        for file in files {
            let path = dir.join(file);
            let grid = TileGrid::load(&path)?;
            log::info!(
                "Loaded level {} ({}x{} cells)",
                path.display(),
                grid.columns(),
                grid.rows()
            );
            let name = Path::new(file)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.to_string());
            entries.push(LevelEntry { name, grid });
        }
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelEntry> {
        self.entries.get(index)
    }

    /// Whether `index` is the final level
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_grid() {
        let grid = TileGrid::parse(",Coin,\n0,0,End\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.get(0, 1), Some(ObstacleKind::Collectible { consumed: false }));
        assert_eq!(grid.get(1, 2), Some(ObstacleKind::Goal));
        assert_eq!(grid.cells().count(), 4);
    }

    #[test]
    fn test_unknown_codes_are_empty() {
        let grid = TileGrid::parse("Lava,0\n?,Spike").unwrap();
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.cells().count(), 2);
    }

    #[test]
    fn test_quoted_and_crlf_cells() {
        let grid = TileGrid::parse("\"Orb\", T \r\n0,0\r\n").unwrap();
        assert_eq!(grid.get(0, 0), Some(ObstacleKind::Booster));
        assert_eq!(grid.get(0, 1), Some(ObstacleKind::Passthrough));
    }

    #[test]
    fn test_ragged_rows_are_fatal() {
        let err = TileGrid::parse("0,0,0\n0,0\n").unwrap_err();
        assert!(matches!(
            err,
            LevelError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_blank_line_inside_grid_is_ragged() {
        assert!(matches!(
            TileGrid::parse("0,0\n\n0,0").unwrap_err(),
            LevelError::Ragged { row: 1, .. }
        ));
    }

    #[test]
    fn test_empty_grid() {
        assert!(matches!(TileGrid::parse("\n\n").unwrap_err(), LevelError::Empty));
    }

    #[test]
    fn test_level_set() {
        assert!(matches!(LevelSet::new(Vec::new()).unwrap_err(), LevelError::NoLevels));

        let grid = TileGrid::parse("0").unwrap();
        let set = LevelSet::new(vec![
            LevelEntry {
                name: "a".into(),
                grid: grid.clone(),
            },
            LevelEntry {
                name: "b".into(),
                grid,
            },
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
        assert!(!set.is_last(0));
        assert!(set.is_last(1));
        assert_eq!(set.get(1).map(|e| e.name.as_str()), Some("b"));
    }

    #[test]
    fn test_shipped_levels_load() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(LEVEL_DIR);
        let set = LevelSet::load(&dir, &LEVEL_FILES).unwrap();
        assert_eq!(set.len(), LEVEL_FILES.len());

        for index in 0..set.len() {
            let grid = &set.get(index).unwrap().grid;
            assert!(grid.cells().any(|(_, _, kind)| kind == ObstacleKind::Goal));
        }
        let last = &set.get(set.len() - 1).unwrap().grid;
        let coins = last
            .cells()
            .filter(|(_, _, kind)| matches!(kind, ObstacleKind::Collectible { .. }))
            .count();
        assert_eq!(coins, crate::consts::MAX_TOKENS as usize);
    }

    #[test]
    fn test_missing_file() {
        let err = LevelSet::load(Path::new("no/such/dir"), &["level_1.csv"]).unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
    }
}
