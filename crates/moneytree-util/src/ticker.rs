/// Normalizes a raw ticker label.
///
/// Keeps the text before the first space, drops every non-alphanumeric
/// character (punctuation, symbols, underscores), and lowercases the rest.
/// Total: empty or symbol-only input yields an empty string.
///
/// ```
/// use moneytree_util::clean_ticker;
///
/// assert_eq!(clean_ticker("^VIX"), "vix");
/// assert_eq!(clean_ticker("SPX Index"), "spx");
/// ```
pub fn clean_ticker(ticker: &str) -> String {
    let first = ticker.split(' ').next().unwrap_or_default();
    first
        .chars()
        .filter(|ch| ch.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Maps [`clean_ticker`] over a sequence of labels, preserving order.
pub fn clean_tickers<I, S>(tickers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tickers
        .into_iter()
        .map(|ticker| clean_ticker(ticker.as_ref()))
        .collect()
}
