pub use arena_core::testing::TestGame;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Write(Vec<u8>),
    Flush,
}

/// Sink that remembers every write and flush in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn bytes(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Write(data) => Some(data.as_slice()),
                SinkEvent::Flush => None,
            })
            .flatten()
            .copied()
            .collect()
    }

    pub fn flush_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SinkEvent::Flush))
            .count()
    }

    /// Bytes written between consecutive flushes
    pub fn segments(&self) -> Vec<Vec<u8>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for event in &self.events {
            match event {
                SinkEvent::Write(data) => current.extend_from_slice(data),
                SinkEvent::Flush => segments.push(std::mem::take(&mut current)),
            }
        }
        segments
    }
}

impl Write for RecordingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.events.push(SinkEvent::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.events.push(SinkEvent::Flush);
        Ok(())
    }
}

/// Sink that fails on its first write or its first flush
#[derive(Debug, Default)]
pub struct FailingSink {
    fail_write: bool,
    fail_flush: bool,
    pub write_calls: usize,
    pub flush_calls: usize,
}

impl FailingSink {
    pub fn on_write() -> Self {
        Self {
            fail_write: true,
            ..Default::default()
        }
    }

    pub fn on_flush() -> Self {
        Self {
            fail_flush: true,
            ..Default::default()
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_calls += 1;
        if self.fail_write {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_calls += 1;
        if self.fail_flush {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        Ok(())
    }
}
