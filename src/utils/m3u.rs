//! M3U playlist rendering and writing

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

#[cfg(windows)]
const LINE_ENDING: &[u8] = b"\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &[u8] = b"\n";

/// How an existing playlist file is treated when written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Keep existing lines and add new ones at the end
    Append,
    /// Replace the file contents
    Overwrite,
}

/// Render M3U playlist content
///
/// One path per line, no `#EXTM3U` header, so appending two renders
/// yields a valid playlist.
pub fn render_m3u(entries: &[PathBuf]) -> Vec<u8> {
    let mut content = Vec::new();
    for entry in entries {
        content.extend_from_slice(entry.as_os_str().as_encoded_bytes());
        content.extend_from_slice(LINE_ENDING);
    }
    content
}

/// Write entries to an M3U file, creating parent directories first
pub fn write_m3u(path: &Path, entries: &[PathBuf], mode: WriteMode) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = match mode {
        WriteMode::Append => {
            let mut file = OpenOptions::new()
                .create(true)
                .read(true)
                .append(true)
                .open(path)?;
            // Keep the previous last line intact if it was left unterminated
            if !ends_with_newline(&mut file)? {
                file.write_all(LINE_ENDING)?;
            }
            file
        }
        WriteMode::Overwrite => OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?,
    };

    file.write_all(&render_m3u(entries))?;
    file.flush()
}

/// Whether a file is empty or its last byte ends a line
fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
