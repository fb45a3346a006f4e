//! Shared helpers for moneytree.
//!
//! This crate contains:
//! - A caller-owned memoization cache keyed by canonical JSON arguments
//! - Ticker cleanup and csv/list argument parsing
//! - Scalar and tabular display formatters
//! - Frequency-code names and linear range scaling

pub mod args;
pub mod error;
pub mod format;
pub mod freq;
pub mod memo;
pub mod scale;
pub mod table;
pub mod ticker;

pub use args::{parse_arg, ArgList};
pub use error::{MemoError, UtilError};
pub use format::{fmtn, fmtp, fmtpn, NumberFormat};
pub use freq::{get_freq_name, Frequency};
pub use memo::MemoCache;
pub use scale::scale;
pub use table::{as_format, as_percent, AsFormat, Column, Table};
pub use ticker::{clean_ticker, clean_tickers};
