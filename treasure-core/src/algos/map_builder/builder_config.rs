use crate::{constants::MAX_CELLS, errors::ConfigurationError};

pub(crate) const DEFAULT_ROWS: i64 = 8;
pub(crate) const DEFAULT_COLS: i64 = 8;
pub(crate) const DEFAULT_CHESTS: i64 = 5;
pub(crate) const DEFAULT_HINTS: i64 = 6;
pub(crate) const DEFAULT_SEARCH_AGAIN: i64 = 3;

/// Raw, unvalidated generation inputs as they come from a form or the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct MapRequest {
    /// Number of rows in the map
    #[cfg_attr(feature = "cli", arg(short, long, default_value_t = DEFAULT_ROWS, allow_negative_numbers = true))]
    pub rows: i64,

    /// Number of columns in the map
    #[cfg_attr(feature = "cli", arg(short, long, default_value_t = DEFAULT_COLS, allow_negative_numbers = true))]
    pub cols: i64,

    /// Number of treasure chests to hide
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_CHESTS, allow_negative_numbers = true))]
    pub chests: i64,

    /// Number of hint fields
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_HINTS, allow_negative_numbers = true))]
    pub hints: i64,

    /// Number of "search again" fields
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_SEARCH_AGAIN, allow_negative_numbers = true))]
    pub search_again: i64,

    /// Number of novelty fillers; enables the novelty variant when given
    #[cfg_attr(feature = "cli", arg(long, allow_negative_numbers = true))]
    pub novelty: Option<i64>,
}

impl Default for MapRequest {
    fn default() -> Self {
        MapRequest {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            chests: DEFAULT_CHESTS,
            hints: DEFAULT_HINTS,
            search_again: DEFAULT_SEARCH_AGAIN,
            novelty: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapBuilderConfig {
    pub(crate) rows: u32,
    pub(crate) cols: u32,
    pub(crate) chests: usize,
    pub(crate) hints: usize,
    pub(crate) search_again: usize,
    // When set, this many cells get a novelty phrase and the remaining
    // filler cells use the placeholder instead of the descriptions list.
    pub(crate) novelty: Option<usize>,
}

impl MapBuilderConfig {
    pub fn new(
        rows: u32,
        cols: u32,
        chests: usize,
        hints: usize,
        search_again: usize,
    ) -> Result<Self, ConfigurationError> {
        if rows == 0 {
            return Err(ConfigurationError::NonPositiveRows(0));
        }

        if cols == 0 {
            return Err(ConfigurationError::NonPositiveColumns(0));
        }

        if u64::from(rows) * u64::from(cols) > MAX_CELLS as u64 {
            return Err(ConfigurationError::GridTooLarge {
                rows: rows as i64,
                cols: cols as i64,
            });
        }

        Ok(MapBuilderConfig {
            rows,
            cols,
            chests,
            hints,
            search_again,
            novelty: None,
        })
    }

    pub fn with_novelty(mut self, count: usize) -> Self {
        self.novelty = Some(count);
        self
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn chests(&self) -> usize {
        self.chests
    }

    pub fn hints(&self) -> usize {
        self.hints
    }

    pub fn search_again(&self) -> usize {
        self.search_again
    }

    pub fn novelty(&self) -> Option<usize> {
        self.novelty
    }

    fn dimension(value: i64, rows: bool) -> Result<i64, ConfigurationError> {
        if value <= 0 {
            return Err(if rows {
                ConfigurationError::NonPositiveRows(value)
            } else {
                ConfigurationError::NonPositiveColumns(value)
            });
        }

        Ok(value)
    }

    // Counts beyond the addressable range saturate; placement caps them at
    // the free cells anyway.
    fn count(field: &'static str, value: i64) -> Result<usize, ConfigurationError> {
        if value < 0 {
            return Err(ConfigurationError::NegativeCount { field, value });
        }

        Ok(usize::try_from(value).unwrap_or(usize::MAX))
    }
}

impl TryFrom<MapRequest> for MapBuilderConfig {
    type Error = ConfigurationError;

    fn try_from(request: MapRequest) -> Result<Self, Self::Error> {
        let rows = Self::dimension(request.rows, true)?;
        let cols = Self::dimension(request.cols, false)?;

        let too_large = || ConfigurationError::GridTooLarge { rows, cols };
        let rows = u32::try_from(rows).map_err(|_| too_large())?;
        let cols = u32::try_from(cols).map_err(|_| too_large())?;

        let config = MapBuilderConfig::new(
            rows,
            cols,
            Self::count("chest", request.chests)?,
            Self::count("hint", request.hints)?,
            Self::count("search again", request.search_again)?,
        )?;

        Ok(match request.novelty {
            Some(novelty) => config.with_novelty(Self::count("novelty", novelty)?),
            None => config,
        })
    }
}
