//! Frame buffering.
//!
//! All drawing for a frame is queued into a [`FrameBuffer`] and flushed
//! to stdout in a single write, so a frame never appears half-painted
//! and syscall overhead stays flat regardless of how busy a screen is.

use std::io::{self, Write};

/// Accumulates one frame of terminal output for batch writing.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a buffer sized for a typical frame.
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(8192),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write the accumulated frame to stdout and clear the buffer.
    pub fn present(&mut self) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.data)?;
        stdout.flush()?;
        self.data.clear();
        Ok(())
    }

    /// The accumulated bytes (for tests).
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Write for FrameBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // Buffering only; the real flush is present().
        Ok(())
    }
}
