use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::error::{Result, SplitError};
use crate::models::SplitReport;

/// Remembers whether a failure during `io::copy` came from the source
struct TrackedRead<R> {
    inner: R,
    failed: bool,
}

impl<R: Read> Read for TrackedRead<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).map_err(|e| {
            if e.kind() != io::ErrorKind::Interrupted {
                self.failed = true;
            }
            e
        })
    }
}

/// A part being written.
///
/// The file is created (truncating any existing file of the same name) when
/// the writer is built and closed when it is dropped. `finish` flushes first
/// so buffered write failures are reported instead of lost on drop.
pub struct PartWriter {
    index: usize,
    path: PathBuf,
    inner: BufWriter<File>,
    written: u64,
}

impl PartWriter {
    pub fn create(index: usize, path: PathBuf) -> Result<Self> {
        let file = File::create(&path).map_err(|e| SplitError::Create(path.clone(), e))?;
        Ok(Self {
            index,
            path,
            inner: BufWriter::new(file),
            written: 0,
        })
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Write `line` followed by a single `\n`
    pub fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.write_bytes(line)?;
        self.write_bytes(b"\n")
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.inner
            .write_all(buf)
            .map_err(|e| SplitError::Write(self.path.clone(), e))?;
        self.written += buf.len() as u64;
        Ok(())
    }

    /// Copy exactly `len` bytes from `reader` into this part.
    ///
    /// On `ShortRead` the bytes that did arrive stay in the part.
    pub fn copy_from<R: Read + ?Sized>(&mut self, reader: &mut R, len: u64) -> Result<()> {
        let mut source = TrackedRead {
            inner: Read::take(reader, len),
            failed: false,
        };
        let copied = io::copy(&mut source, &mut self.inner).map_err(|e| {
            if source.failed {
                SplitError::Read(e)
            } else {
                SplitError::Write(self.path.clone(), e)
            }
        })?;
        self.written += copied;

        if copied < len {
            return Err(SplitError::ShortRead {
                path: self.path.clone(),
                expected: len,
                actual: copied,
            });
        }
        Ok(())
    }

    /// Flush and close the part, recording it in `report`
    pub fn finish(mut self, report: &mut SplitReport) -> Result<()> {
        self.inner
            .flush()
            .map_err(|e| SplitError::Write(self.path.clone(), e))?;
        debug!("Wrote {} ({} bytes)", self.path.display(), self.written);
        report.push(self.index, self.path, self.written);
        Ok(())
    }
}
