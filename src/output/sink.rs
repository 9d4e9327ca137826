use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{CdxError, Result};

/// Write rendered output to a stream such as stdout
pub fn write_stream<W: Write>(mut out: W, rendered: &str) -> io::Result<()> {
    out.write_all(rendered.as_bytes())?;
    out.flush()
}

/// Save rendered output to `path`, replacing any previous content.
///
/// The text goes to a temporary file in the same directory and is persisted
/// over the destination, so an interrupted run never leaves a half-written
/// file. The temporary file is removed if anything fails before that.
pub fn save_to_file(rendered: &str, path: &Path) -> Result<()> {
    let io_error = |source: io::Error| CdxError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".wayrecon-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(io_error)?;
    tmp.write_all(rendered.as_bytes()).map_err(io_error)?;
    tmp.as_file().sync_all().map_err(io_error)?;
    persist(tmp, path).map_err(io_error)?;

    debug!("saved output to {}", path.display());
    Ok(())
}

fn persist(tmp: NamedTempFile, path: &Path) -> io::Result<()> {
    tmp.persist(path).map(|_| ()).map_err(|e| e.error)
}

/// Write output to `out` and, when a path is given, save the same text to that file.
///
/// The file is saved even if the stream fails. A closed pipe on the stream
/// (e.g. `| head`) is not an error.
pub fn write_output_to<W: Write>(
    out: W,
    rendered: &str,
    output_path: Option<&Path>,
) -> Result<()> {
    let stream_result = match write_stream(out, rendered) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early: {}", e);
            Ok(())
        }
        other => other,
    };

    if let Some(path) = output_path {
        save_to_file(rendered, path)?;
    }

    stream_result.map_err(|source| {
        warn!("failed to write results to stdout: {}", source);
        CdxError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        }
    })
}

/// Write output to stdout and, when a path is given, to that file as well
pub fn write_output(rendered: &str, output_path: Option<&Path>) -> Result<()> {
    write_output_to(io::stdout().lock(), rendered, output_path)
}
