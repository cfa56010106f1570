//! Volume discovery and output naming

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Where volume sources live, one `volN` directory per volume
pub const DEFAULT_CONTENT_DIR: &str = "src/content/issues";

/// Where the reader and booklet PDFs are written
pub const DEFAULT_OUT_DIR: &str = "dist/zine";

/// Prefix of every exported file
pub const ZINE_NAME: &str = "terminull";

/// Parse a `volN` directory name
pub fn parse_volume_dir(name: &str) -> Option<u32> {
    let digits = name.strip_prefix("vol")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Highest volume number found under `content_dir`
pub fn find_highest_volume(content_dir: &Path) -> Result<u32> {
    let entries = std::fs::read_dir(content_dir)
        .with_context(|| format!("No issues directory found at {}", content_dir.display()))?;

    let mut highest = None;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(volume) = entry.file_name().to_str().and_then(parse_volume_dir) {
            highest = highest.max(Some(volume));
        }
    }

    match highest {
        Some(volume) => Ok(volume),
        None => bail!("No volumes found in {}", content_dir.display()),
    }
}

/// Reader and booklet PDF paths for one volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumePaths {
    pub volume: u32,
    pub reader: PathBuf,
    pub booklet: PathBuf,
}

impl VolumePaths {
    pub fn new(out_dir: &Path, volume: u32) -> Self {
        Self {
            volume,
            reader: out_dir.join(format!("{}-vol{}.pdf", ZINE_NAME, volume)),
            booklet: out_dir.join(format!("{}-vol{}-booklet.pdf", ZINE_NAME, volume)),
        }
    }
}

/// Default booklet path next to an arbitrary reader PDF: `foo.pdf` -> `foo-booklet.pdf`
pub fn booklet_path_for(reader: &Path) -> PathBuf {
    let stem = reader
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| ZINE_NAME.to_string());
    reader.with_file_name(format!("{}-booklet.pdf", stem))
}
