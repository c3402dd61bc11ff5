use std::fs::File;
use std::io::{self, Cursor, Read, Seek, Stdin};
use tracing::debug;

use crate::error::{Result, SplitError};

/// A readable input that may also know how many bytes it has left.
///
/// Byte and chunk splitting need the total size before writing the first
/// part. Sources that can answer cheaply (regular files, in-memory buffers)
/// report it here; everything else keeps the default and gets buffered.
pub trait SplitSource: Read {
    /// Number of bytes remaining from the current position, if cheaply known
    fn known_len(&mut self) -> io::Result<Option<u64>> {
        Ok(None)
    }
}

impl SplitSource for File {
    fn known_len(&mut self) -> io::Result<Option<u64>> {
        let metadata = self.metadata()?;
        // pipes and character devices report a meaningless length
        if !metadata.is_file() {
            return Ok(None);
        }
        let position = self.stream_position()?;
        Ok(Some(metadata.len().saturating_sub(position)))
    }
}

impl<T: AsRef<[u8]>> SplitSource for Cursor<T> {
    fn known_len(&mut self) -> io::Result<Option<u64>> {
        let len = self.get_ref().as_ref().len() as u64;
        Ok(Some(len.saturating_sub(self.position())))
    }
}

impl SplitSource for &[u8] {
    fn known_len(&mut self) -> io::Result<Option<u64>> {
        Ok(Some(self.len() as u64))
    }
}

impl SplitSource for Stdin {}

impl<T: SplitSource + ?Sized> SplitSource for Box<T> {
    fn known_len(&mut self) -> io::Result<Option<u64>> {
        (**self).known_len()
    }
}

impl<T: SplitSource + ?Sized> SplitSource for &mut T {
    fn known_len(&mut self) -> io::Result<Option<u64>> {
        (**self).known_len()
    }
}

/// Reader over a source whose total size has been determined
pub enum Measured<'a, R: ?Sized> {
    /// Reads continue from the source itself
    Direct(&'a mut R),
    /// The whole input was read into memory first
    Buffered(Cursor<Vec<u8>>),
}

impl<R: Read + ?Sized> Read for Measured<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Measured::Direct(source) => source.read(buf),
            Measured::Buffered(cursor) => cursor.read(buf),
        }
    }
}

/// Determine the total input size and return a reader positioned at the start
/// of the remaining input.
///
/// Sources without a known length are read to the end into memory, so memory
/// use for those is proportional to the input size.
pub fn measure<R: SplitSource + ?Sized>(source: &mut R) -> Result<(u64, Measured<'_, R>)> {
    if let Some(len) = source.known_len().map_err(SplitError::Read)? {
        debug!("Input size known from source: {} bytes", len);
        return Ok((len, Measured::Direct(source)));
    }

    let mut buffer = Vec::new();
    source.read_to_end(&mut buffer).map_err(SplitError::Read)?;
    let len = buffer.len() as u64;
    debug!("Buffered {} bytes from input of unknown size", len);
    Ok((len, Measured::Buffered(Cursor::new(buffer))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, SeekFrom, Write};
    use tempfile::NamedTempFile;

    /// Reader that hides its length
    struct Opaque<'a>(&'a [u8]);

    impl Read for Opaque<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.0.read(buf)
        }
    }

    impl SplitSource for Opaque<'_> {}

    #[test]
    fn test_cursor_known_len_tracks_position() {
        let mut cursor = Cursor::new(b"abcdef".to_vec());
        assert_eq!(cursor.known_len().unwrap(), Some(6));

        let mut skip = [0u8; 2];
        cursor.read_exact(&mut skip).unwrap();
        assert_eq!(cursor.known_len().unwrap(), Some(4));
    }

    #[test]
    fn test_file_known_len_after_seek() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"0123456789").unwrap();

        let mut file = File::open(temp.path()).unwrap();
        assert_eq!(file.known_len().unwrap(), Some(10));

        file.seek(SeekFrom::Start(3)).unwrap();
        assert_eq!(file.known_len().unwrap(), Some(7));
    }

    #[test]
    fn test_measure_direct() {
        let mut source: &[u8] = b"hello";
        let (len, mut reader) = measure(&mut source).unwrap();
        assert_eq!(len, 5);
        assert!(matches!(reader, Measured::Direct(_)));

        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_measure_buffers_unknown_length() {
        let mut source = Opaque(b"streamed input");
        let (len, mut reader) = measure(&mut source).unwrap();
        assert_eq!(len, 14);
        assert!(matches!(reader, Measured::Buffered(_)));

        let mut out = String::new();
        reader.read_to_string(&mut out).unwrap();
        assert_eq!(out, "streamed input");
    }

    #[test]
    fn test_boxed_source_forwards_len() {
        let mut boxed: Box<dyn SplitSource> = Box::new(Cursor::new(vec![1u8, 2, 3]));
        assert_eq!(boxed.known_len().unwrap(), Some(3));
    }
}
