use std::io::{self, Read, Seek, SeekFrom};

/// Failure modes of a [`ByteWindow`] read. Short reads are kept apart from
/// other I/O failures so callers can treat end-of-stream as termination.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("seek to offset {offset} failed: {source}")]
    Seek { offset: u64, source: io::Error },
    #[error("short read at offset {offset}: wanted {expected} bytes, got {actual}")]
    ShortRead {
        offset: u64,
        expected: usize,
        actual: usize,
    },
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}

/// Absolute-offset reads over a seekable byte source.
#[derive(Debug)]
pub struct ByteWindow<R> {
    inner: R,
}

impl<R: Read + Seek> ByteWindow<R> {
    pub fn new(inner: R) -> Self {
        ByteWindow { inner }
    }

    pub fn seek_to(&mut self, offset: u64) -> Result<(), WindowError> {
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(|source| WindowError::Seek { offset, source })?;
        Ok(())
    }

    pub fn position(&mut self) -> Result<u64, WindowError> {
        Ok(self.inner.stream_position()?)
    }

    /// Read exactly `len` bytes from the current position.
    pub fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, WindowError> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WindowError> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    pub fn read_at(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, WindowError> {
        self.seek_to(offset)?;
        self.read_exact(len)
    }

    /// Hand the underlying source back, positioned wherever the last read left it.
    pub fn into_inner(self) -> R {
        self.inner
    }

    // `Read::read_exact` does not say how much it consumed before hitting EOF,
    // so the loop is spelled out to report `actual`.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), WindowError> {
        let offset = self.position()?;
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(WindowError::ShortRead {
                        offset,
                        expected: buf.len(),
                        actual: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(WindowError::Io(e)),
            }
        }
        Ok(())
    }
}
