//! Employee record input for the Payroll Engine.
//!
//! Turns the text of an employee file into [`RawRecord`](crate::models::RawRecord)
//! values for the registry to validate and price.

mod reader;

pub use reader::{END_SENTINEL, RecordReader, load_input, read_records};
