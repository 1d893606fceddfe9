// crates/crgeo-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// `true` when the file name ends in `.gz`.
pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`. The caller never cares about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)
        .map_err(|e| GeoError::NotFound(format!("{}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(format!(
                "{} is gzip-compressed but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Replaces `path` with `bytes` (gzip-encoded first for `.gz` names).
///
/// The bytes go to a uniquely named temporary sibling (`.name.XXXXXX.tmp`),
/// which is fsynced and then renamed over `path`. Concurrent writers never
/// share a temporary file. If anything fails before the rename, `path` is
/// untouched and the temporary file is removed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut tmp = tempfile::Builder::new()
        .prefix(&format!(".{name}."))
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(GeoError::Io)?;

    write_file(tmp.as_file_mut(), path, bytes)?;
    tmp.persist(path).map_err(|e| GeoError::Io(e.error))?;
    Ok(())
}

fn write_file(file: &mut File, target: &Path, bytes: &[u8]) -> Result<()> {
    if is_gzip(target) {
        #[cfg(feature = "compact")]
        {
            let mut encoder = GzEncoder::new(&mut *file, Compression::default());
            encoder.write_all(bytes)?;
            encoder.finish()?;
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GeoError::InvalidData(format!(
                "cannot write {}: gzip requested but 'compact' disabled",
                target.display()
            )));
        }
    } else {
        file.write_all(bytes)?;
    }

    file.flush()?;
    file.sync_all()?;
    Ok(())
}
