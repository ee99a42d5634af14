use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

// Art shipped inside the binary, keyed by locator.
const BUNDLED: [(&str, &str); 3] = [
    (
        "midnight-dreams",
        include_str!("../../assets/covers/midnight-dreams.txt"),
    ),
    (
        "ocean-waves",
        include_str!("../../assets/covers/ocean-waves.txt"),
    ),
    (
        "city-lights",
        include_str!("../../assets/covers/city-lights.txt"),
    ),
];

const PLACEHOLDER: &str = include_str!("../../assets/covers/placeholder.txt");

/// Where a resolved cover came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverSource {
    /// Read from `<covers_dir>/<locator>.txt`.
    Disk(PathBuf),
    /// Compiled into the binary.
    Bundled,
    /// The locator did not resolve.
    Placeholder,
}

/// Text-art cover ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub art: String,
    pub source: CoverSource,
}

impl Cover {
    fn placeholder() -> Self {
        Self {
            art: PLACEHOLDER.to_string(),
            source: CoverSource::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == CoverSource::Placeholder
    }

    /// Number of text rows the art occupies.
    pub fn height(&self) -> u16 {
        self.art.lines().count().min(u16::MAX as usize) as u16
    }

    /// Widest row, in characters.
    pub fn width(&self) -> u16 {
        self.art
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16
    }
}

/// Resolves cover locators and caches the result per locator.
///
/// Lookup order: the optional covers directory, then bundled art, then the
/// placeholder. Each unresolved locator is logged once.
#[derive(Debug, Default)]
pub struct CoverResolver {
    covers_dir: Option<PathBuf>,
    cache: HashMap<String, Cover>,
}

impl CoverResolver {
    pub fn new(covers_dir: Option<PathBuf>) -> Self {
        Self {
            covers_dir,
            cache: HashMap::new(),
        }
    }

    /// Resolve `locator`, loading it on first use.
    pub fn resolve(&mut self, locator: &str) -> &Cover {
        let covers_dir = self.covers_dir.as_deref();
        self.cache
            .entry(locator.to_string())
            .or_insert_with(|| load_cover(covers_dir, locator))
    }
}

fn load_cover(covers_dir: Option<&Path>, locator: &str) -> Cover {
    let locator = locator.trim();
    if locator.is_empty() {
        warn!("empty cover locator, using placeholder");
        return Cover::placeholder();
    }

    if let Some(dir) = covers_dir {
        let path = dir.join(format!("{locator}.txt"));
        match fs::read_to_string(&path) {
            Ok(art) if !art.trim().is_empty() => {
                debug!(path = %path.display(), "loaded cover from disk");
                return Cover {
                    art,
                    source: CoverSource::Disk(path),
                };
            }
            Ok(_) => debug!(path = %path.display(), "cover file is empty"),
            Err(e) => debug!(path = %path.display(), error = %e, "cover file not readable"),
        }
    }

    if let Some((_, art)) = BUNDLED.iter().find(|(name, _)| *name == locator) {
        return Cover {
            art: (*art).to_string(),
            source: CoverSource::Bundled,
        };
    }

    warn!(locator, "cover locator did not resolve, using placeholder");
    Cover::placeholder()
}
