//! Supported cities and the files backing them
//!
//! The city set is closed; `CityFiles` is built once at startup and handed
//! to the loader so nothing resolves paths through global state.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub(crate) const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Name the user types at the city prompt
    pub(crate) fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub(crate) fn default_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Match user input against the city keys, ignoring case and surrounding whitespace
    pub(crate) fn lookup(input: &str) -> Option<City> {
        let wanted = input.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.key() == wanted)
    }

    /// Accepts the prompt key or the snake_case file stem (config `[files]` tables)
    pub(crate) fn from_config_key(key: &str) -> Option<City> {
        City::lookup(&key.replace('_', " "))
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Immutable city → data file mapping
#[derive(Debug, Clone)]
pub(crate) struct CityFiles {
    files: BTreeMap<City, PathBuf>,
}

impl CityFiles {
    /// Default file names inside `data_dir`
    pub(crate) fn new(data_dir: &Path) -> Self {
        let files = City::ALL
            .into_iter()
            .map(|c| (c, data_dir.join(c.default_file())))
            .collect();
        CityFiles { files }
    }

    /// Defaults plus per-city overrides; relative overrides resolve against `data_dir`
    pub(crate) fn with_overrides<'a, I>(data_dir: &Path, overrides: I) -> Self
    where
        I: IntoIterator<Item = (City, &'a Path)>,
    {
        let mut registry = Self::new(data_dir);
        for (city, path) in overrides {
            let resolved = if path.is_absolute() {
                path.to_path_buf()
            } else {
                data_dir.join(path)
            };
            registry.files.insert(city, resolved);
        }
        registry
    }

    pub(crate) fn path(&self, city: City) -> &Path {
        // Every city is inserted in `new`
        self.files[&city].as_path()
    }
}
