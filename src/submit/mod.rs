//! Sinks that consume accepted login submissions

mod record;
mod traits;

pub use record::RecordSink;
pub use traits::{LogSink, SubmitSink};

#[cfg(test)]
pub use traits::{MockSubmitSink, SinkError};
