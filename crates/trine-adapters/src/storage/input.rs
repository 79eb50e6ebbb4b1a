//! Statement input streams.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::debug;
use trine_common::utils::error::Result;

const READ_BUFFER: usize = 1 << 20;
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Compression of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Plain text.
    None,
    /// One or more concatenated gzip members.
    Gzip,
}

impl Compression {
    /// Detects the compression of a file from its extension, falling back to
    /// the gzip magic bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    pub fn detect(path: &Path) -> io::Result<Self> {
        if path.extension().is_some_and(|ext| ext == "gz") {
            return Ok(Self::Gzip);
        }
        let mut magic = [0u8; 2];
        let mut file = File::open(path)?;
        let mut filled = 0;
        while filled < magic.len() {
            match file.read(&mut magic[filled..])? {
                0 => break,
                n => filled += n,
            }
        }
        Ok(if filled == magic.len() && magic == GZIP_MAGIC {
            Self::Gzip
        } else {
            Self::None
        })
    }

    /// Returns the lowercase name of the compression.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
        }
    }
}

/// Opens a statement file for buffered line reading, decompressing gzip
/// input transparently.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let compression = Compression::detect(path)?;
    debug!(path = %path.display(), compression = compression.name(), "opening input");
    let file = File::open(path)?;
    Ok(match compression {
        Compression::None => Box::new(BufReader::with_capacity(READ_BUFFER, file)),
        Compression::Gzip => Box::new(BufReader::with_capacity(
            READ_BUFFER,
            MultiGzDecoder::new(file),
        )),
    })
}
