//! Sequential primitive reader over a byte stream.
//!
//! The session stream mixes little-endian integers with big-endian doubles,
//! so each read names its byte order explicitly.

use std::io::{self, Read};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use super::DecodeError;

/// Reader that tracks how many bytes have been consumed.
pub struct ByteCursor<R> {
    inner: R,
    position: u64,
}

impl<R: Read> ByteCursor<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    fn eof(&self, err: io::Error) -> DecodeError {
        // Only truncation reaches here for in-memory streams.
        tracing::trace!("stream read failed at {}: {err}", self.position);
        DecodeError::PrematureEof { position: self.position }
    }

    /// Next byte, or `None` at a clean end of stream.
    pub fn next_byte(&mut self) -> Option<u8> {
        let b = self.inner.read_u8().ok()?;
        self.position += 1;
        Some(b)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let v = self.inner.read_u8().map_err(|e| self.eof(e))?;
        self.position += 1;
        Ok(v)
    }

    pub fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        let v = self.inner.read_u16::<LittleEndian>().map_err(|e| self.eof(e))?;
        self.position += 2;
        Ok(v)
    }

    pub fn read_i32_le(&mut self) -> Result<i32, DecodeError> {
        let v = self.inner.read_i32::<LittleEndian>().map_err(|e| self.eof(e))?;
        self.position += 4;
        Ok(v)
    }

    pub fn read_f64_be(&mut self) -> Result<f64, DecodeError> {
        let v = self.inner.read_f64::<BigEndian>().map_err(|e| self.eof(e))?;
        self.position += 8;
        Ok(v)
    }

    /// Exactly `n` raw bytes.
    ///
    /// The buffer grows with the data actually read, so a length prefix
    /// larger than the stream fails without allocating it up front.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, DecodeError> {
        let mut buf = Vec::new();
        let read = (&mut self.inner).take(n as u64).read_to_end(&mut buf);
        let got = read.map_err(|e| self.eof(e))?;
        self.position += got as u64;
        if got < n {
            return Err(DecodeError::PrematureEof { position: self.position });
        }
        Ok(buf)
    }

    /// Append bytes up to (not including) `delim` into `buf`, consuming the
    /// delimiter. `buf` is cleared first so callers can reuse it.
    pub fn read_until_into(&mut self, delim: u8, buf: &mut Vec<u8>) -> Result<(), DecodeError> {
        buf.clear();
        loop {
            let b = self.read_u8()?;
            if b == delim {
                return Ok(());
            }
            buf.push(b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_endianness() {
        let mut data = vec![0x01, 0x00, 0x00, 0x00];
        data.extend_from_slice(&1.5f64.to_be_bytes());
        let mut c = ByteCursor::new(&data[..]);
        assert_eq!(c.read_i32_le().unwrap(), 1);
        assert_eq!(c.read_f64_be().unwrap(), 1.5);
        assert_eq!(c.position(), 12);
        assert!(c.next_byte().is_none());
    }

    #[test]
    fn test_read_until_reuses_buffer() {
        let data = b"abc\nxy\n";
        let mut c = ByteCursor::new(&data[..]);
        let mut buf = Vec::new();
        c.read_until_into(b'\n', &mut buf).unwrap();
        assert_eq!(buf, b"abc");
        c.read_until_into(b'\n', &mut buf).unwrap();
        assert_eq!(buf, b"xy");
        assert_eq!(c.position(), 7);
    }

    #[test]
    fn test_truncation_reports_position() {
        let data = [0x01, 0x02];
        let mut c = ByteCursor::new(&data[..]);
        c.read_u8().unwrap();
        let err = c.read_i32_le().unwrap_err();
        assert_eq!(err, DecodeError::PrematureEof { position: 1 });
    }

    #[test]
    fn test_oversized_length_fails_cleanly() {
        let data = b"abc";
        let mut c = ByteCursor::new(&data[..]);
        let err = c.read_bytes(i32::MAX as usize).unwrap_err();
        assert_eq!(err, DecodeError::PrematureEof { position: 3 });

        let mut c = ByteCursor::new(&data[..]);
        assert_eq!(c.read_bytes(2).unwrap(), b"ab");
        assert_eq!(c.position(), 2);
    }
}
