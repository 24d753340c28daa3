//! Recorded sample streams.
//!
//! Motion samples are logged as JSON lines so a field session can be
//! replayed through [`MeasurementSession`](crate::MeasurementSession) later.

mod sample_log;

pub use sample_log::{read_sample_log, write_sample_log, SampleLogReader, SampleLogWriter};
