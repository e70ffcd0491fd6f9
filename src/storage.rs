//! Response body persistence: parent-directory creation and plain or gzip
//! file writes.
//!
//! Writes always truncate, so a second write to the same path leaves exactly
//! the last body. Same-path writes from concurrent workers are not
//! synchronized here; resolvers are expected to hand out unique paths.

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Write `body` to `path`, creating missing parent directories first.
///
/// With `gzip` set, the body passes through a gzip encoder on its way to the
/// same path; no suffix is appended, the caller owns the file name. Accepts
/// text (`&str`) and raw bytes alike.
pub fn write_body(path: &Path, body: impl AsRef<[u8]>, gzip: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let mut file = File::create(path)
        .with_context(|| format!("failed to create file: {}", path.display()))?;

    if gzip {
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(body.as_ref())
            .with_context(|| format!("failed to write gzip body: {}", path.display()))?;
        encoder
            .finish()
            .with_context(|| format!("failed to finish gzip stream: {}", path.display()))?;
    } else {
        file.write_all(body.as_ref())
            .with_context(|| format!("failed to write body: {}", path.display()))?;
    }

    Ok(())
}
