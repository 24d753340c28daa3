//! JSON-lines sample log reader and writer.
//!
//! One [`OrientationSample`] per line:
//!
//! ```text
//! {"pitch_rad":1.5184,"roll_rad":1.5533,"timestamp_us":0}
//! {"pitch_rad":1.5190,"roll_rad":1.5531,"timestamp_us":50000}
//! ```
//!
//! Blank lines are skipped. A missing `timestamp_us` reads as 0. Non-finite
//! angles are written as `null` and read back as NaN.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::core::types::OrientationSample;
use crate::error::{Error, Result};

/// Streaming reader over a sample log.
pub struct SampleLogReader<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl SampleLogReader<BufReader<File>> {
    /// Open a sample log file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> SampleLogReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines consumed so far, blank lines included.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Read the next sample, or `None` at end of input.
    pub fn next_sample(&mut self) -> Result<Option<OrientationSample>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let text = self.buffer.trim();
            if text.is_empty() {
                continue;
            }

            let sample: OrientationSample =
                serde_json::from_str(text).map_err(|e| Error::SampleLog {
                    line: self.line,
                    message: e.to_string(),
                })?;
            return Ok(Some(sample));
        }
    }
}

impl<R: BufRead> Iterator for SampleLogReader<R> {
    type Item = Result<OrientationSample>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sample().transpose()
    }
}

/// Buffered sample log writer.
pub struct SampleLogWriter<W: Write> {
    writer: BufWriter<W>,
    samples_written: u64,
}

impl SampleLogWriter<File> {
    /// Create (or truncate) a sample log file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> SampleLogWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            samples_written: 0,
        }
    }

    pub fn write_sample(&mut self, sample: &OrientationSample) -> Result<()> {
        let line = serde_json::to_string(sample).map_err(|e| Error::SampleLog {
            line: self.samples_written as usize + 1,
            message: e.to_string(),
        })?;
        writeln!(self.writer, "{}", line)?;
        self.samples_written += 1;
        Ok(())
    }

    pub fn samples_written(&self) -> u64 {
        self.samples_written
    }

    /// Flush buffered output.
    pub fn finish(mut self) -> Result<u64> {
        self.writer.flush()?;
        Ok(self.samples_written)
    }
}

/// Read a whole sample log into memory.
pub fn read_sample_log(path: impl AsRef<Path>) -> Result<Vec<OrientationSample>> {
    let path = path.as_ref();
    let samples = SampleLogReader::open(path)?.collect::<Result<Vec<_>>>()?;
    log::info!("Read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Write samples to a new sample log.
pub fn write_sample_log(path: impl AsRef<Path>, samples: &[OrientationSample]) -> Result<u64> {
    let mut writer = SampleLogWriter::create(path)?;
    for sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finish()
}
