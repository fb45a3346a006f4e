// Test library re-exporting the helper surface under test
pub use moneytree_util::{
    as_format, as_percent, clean_ticker, clean_tickers, fmtn, fmtp, fmtpn, get_freq_name,
    parse_arg, scale, ArgList, AsFormat, Column, Frequency, MemoCache, MemoError, NumberFormat,
    Table, UtilError,
};
