/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Frame parser of the newline-delimited JSON streams.
//!
//! The transport hands over raw chunks with arbitrary boundaries. The parser
//! keeps the trailing partial record between chunks, splits on `\n`, and
//! delivers each complete record, heartbeat or payload, in arrival order.

use crate::constants::{DEFAULT_MAX_RECORD_BYTES, HEARTBEAT_TYPE};
use crate::error::AppError;
use crate::model::registry::TAG_FIELD;
use crate::presentation::pricing::{ClientPrice, PricingHeartbeat};
use crate::presentation::transaction::{Transaction, TransactionHeartbeat};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::{debug, warn};

/// What the parser does with a record it cannot decode
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRecordPolicy {
    /// Log, count and continue with the next record
    #[default]
    Skip,
    /// Stop the stream with [`AppError::MalformedRecord`]
    Abort,
}

impl FromStr for MalformedRecordPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(MalformedRecordPolicy::Skip),
            "abort" => Ok(MalformedRecordPolicy::Abort),
            other => Err(AppError::InvalidInput(format!(
                "unknown malformed record policy {other}"
            ))),
        }
    }
}

/// A record of one stream family
pub trait StreamRecord: Sized {
    /// Stream name used in log messages
    const STREAM: &'static str;

    /// Builds the heartbeat record
    fn heartbeat(value: &Value) -> Result<Self, serde_json::Error>;

    /// Builds the payload record
    fn payload(value: &Value) -> Result<Self, serde_json::Error>;

    /// Whether the record is a heartbeat
    fn is_heartbeat(&self) -> bool;
}

/// Record of the transaction stream
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionStreamRecord {
    /// Liveness record
    Heartbeat(TransactionHeartbeat),
    /// A transaction, decoded through the transaction registry
    Transaction(Transaction),
}

impl StreamRecord for TransactionStreamRecord {
    const STREAM: &'static str = "transaction";

    fn heartbeat(value: &Value) -> Result<Self, serde_json::Error> {
        TransactionHeartbeat::deserialize(value).map(TransactionStreamRecord::Heartbeat)
    }

    fn payload(value: &Value) -> Result<Self, serde_json::Error> {
        Ok(TransactionStreamRecord::Transaction(Transaction::from_value(value)))
    }

    fn is_heartbeat(&self) -> bool {
        matches!(self, TransactionStreamRecord::Heartbeat(_))
    }
}

/// Record of the pricing stream
#[derive(Debug, Clone, PartialEq)]
pub enum PricingStreamRecord {
    /// Liveness record
    Heartbeat(PricingHeartbeat),
    /// A price update
    Price(ClientPrice),
}

impl StreamRecord for PricingStreamRecord {
    const STREAM: &'static str = "pricing";

    fn heartbeat(value: &Value) -> Result<Self, serde_json::Error> {
        PricingHeartbeat::deserialize(value).map(PricingStreamRecord::Heartbeat)
    }

    fn payload(value: &Value) -> Result<Self, serde_json::Error> {
        ClientPrice::deserialize(value).map(PricingStreamRecord::Price)
    }

    fn is_heartbeat(&self) -> bool {
        matches!(self, PricingStreamRecord::Heartbeat(_))
    }
}

/// Counters of a parser
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StreamStats {
    /// Payload records delivered
    pub records: u64,
    /// Heartbeats delivered
    pub heartbeats: u64,
    /// Malformed or oversized records skipped
    pub skipped: u64,
}

/// Incremental parser of one stream
#[derive(Debug)]
pub struct StreamParser<R> {
    buffer: Vec<u8>,
    policy: MalformedRecordPolicy,
    max_record_bytes: usize,
    discarding: bool,
    next_index: u64,
    stats: StreamStats,
    _record: PhantomData<fn() -> R>,
}

impl<R: StreamRecord> Default for StreamParser<R> {
    fn default() -> Self {
        Self::new(MalformedRecordPolicy::default(), DEFAULT_MAX_RECORD_BYTES)
    }
}

impl<R: StreamRecord> StreamParser<R> {
    /// Creates a parser with the given policy and record size cap
    pub fn new(policy: MalformedRecordPolicy, max_record_bytes: usize) -> Self {
        Self {
            buffer: Vec::new(),
            policy,
            max_record_bytes: max_record_bytes.max(1),
            discarding: false,
            next_index: 0,
            stats: StreamStats::default(),
            _record: PhantomData,
        }
    }

    /// Counters so far
    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    /// Bytes of the partial record held between chunks
    pub fn pending_bytes(&self) -> usize {
        self.buffer.len()
    }

    /// Feeds one chunk, delivering every record it completes.
    ///
    /// Records are delivered synchronously in arrival order. An error from
    /// `on_record` stops the parse and is returned as is.
    pub fn feed<F>(&mut self, chunk: &[u8], mut on_record: F) -> Result<(), AppError>
    where
        F: FnMut(R) -> Result<(), AppError>,
    {
        let mut rest = chunk;
        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            let line = &rest[..pos];
            rest = &rest[pos + 1..];

            if self.discarding {
                debug!("{} stream resynchronised after oversized record", R::STREAM);
                self.discarding = false;
                continue;
            }
            if self.buffer.len() + line.len() > self.max_record_bytes {
                self.buffer.clear();
                let index = self.take_index();
                self.reject(index, self.oversized_message())?;
                continue;
            }

            self.buffer.extend_from_slice(line);
            let record = std::mem::take(&mut self.buffer);
            self.process(&record, &mut on_record)?;
        }

        if rest.is_empty() || self.discarding {
            return Ok(());
        }
        if self.buffer.len() + rest.len() > self.max_record_bytes {
            self.buffer.clear();
            self.discarding = true;
            let index = self.take_index();
            return self.reject(index, self.oversized_message());
        }
        self.buffer.extend_from_slice(rest);
        Ok(())
    }

    /// Flushes a trailing record that was not terminated by a newline
    pub fn finish<F>(&mut self, mut on_record: F) -> Result<(), AppError>
    where
        F: FnMut(R) -> Result<(), AppError>,
    {
        self.discarding = false;
        if self.buffer.is_empty() {
            return Ok(());
        }
        let record = std::mem::take(&mut self.buffer);
        self.process(&record, &mut on_record)
    }

    /// Parses a complete body, returning every record it holds
    pub fn parse_all(&mut self, body: &[u8]) -> Result<Vec<R>, AppError> {
        let mut records = Vec::new();
        self.feed(body, |record| {
            records.push(record);
            Ok(())
        })?;
        self.finish(|record| {
            records.push(record);
            Ok(())
        })?;
        Ok(records)
    }

    fn take_index(&mut self) -> u64 {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    fn oversized_message(&self) -> String {
        format!("record exceeds {} bytes", self.max_record_bytes)
    }

    fn process<F>(&mut self, raw: &[u8], on_record: &mut F) -> Result<(), AppError>
    where
        F: FnMut(R) -> Result<(), AppError>,
    {
        let raw = raw.trim_ascii();
        if raw.is_empty() {
            return Ok(());
        }
        let index = self.take_index();

        let value: Value = match serde_json::from_slice(raw) {
            Ok(value) => value,
            Err(e) => return self.reject(index, format!("invalid JSON: {e}")),
        };

        let is_heartbeat = value.get(TAG_FIELD).and_then(Value::as_str) == Some(HEARTBEAT_TYPE);
        let decoded = if is_heartbeat {
            R::heartbeat(&value)
        } else {
            R::payload(&value)
        };

        match decoded {
            Ok(record) => {
                if record.is_heartbeat() {
                    self.stats.heartbeats += 1;
                } else {
                    self.stats.records += 1;
                }
                debug!("{} stream record {}", R::STREAM, index);
                on_record(record)
            }
            Err(e) => self.reject(index, format!("undecodable record: {e}")),
        }
    }

    fn reject(&mut self, index: u64, message: String) -> Result<(), AppError> {
        match self.policy {
            MalformedRecordPolicy::Skip => {
                warn!("Skipping malformed {} stream record {}: {}", R::STREAM, index, message);
                self.stats.skipped += 1;
                Ok(())
            }
            MalformedRecordPolicy::Abort => Err(AppError::MalformedRecord { index, message }),
        }
    }
}
