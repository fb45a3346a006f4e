//! Integration workflows combining the helpers the way report code uses them:
//! parse a ticker argument, normalize it, memoize a per-ticker computation,
//! and render the result for display.

use moneytree_tests::{
    clean_tickers, fmtp, get_freq_name, parse_arg, scale, AsFormat, Column, Frequency, MemoCache,
    NumberFormat, Table,
};

#[test]
fn csv_argument_flows_through_cleanup_memoization_and_display() {
    // Parse and normalize the user-supplied ticker list
    let tickers = clean_tickers(parse_arg("^VIX, SPX Index ,TLT"));
    assert_eq!(tickers, vec!["vix", "spx", "tlt"]);

    // Memoize a mean-return lookup per ticker
    let cache = MemoCache::new();
    let mut means = Vec::new();
    for ticker in &tickers {
        let mean = cache
            .get_or_compute(ticker.as_str(), false, || 0.01 * ticker.len() as f64)
            .expect("ticker keys always encode");
        means.push(mean);
    }
    assert_eq!(cache.len(), tickers.len());

    // Render the column for the report
    let column = Column::new("mean return", tickers, means);
    let rendered = column.as_format(NumberFormat::Percent { digits: 2 });
    assert_eq!(rendered.values, vec!["3.00%", "3.00%", "3.00%"]);
    assert_eq!(rendered.labels, vec!["vix", "spx", "tlt"]);
}

#[test]
fn report_header_combines_frequency_name_and_percent_display() {
    let header = format!(
        "{} returns: {}",
        get_freq_name("m").expect("monthly is a known code"),
        fmtp(0.0123),
    );
    assert_eq!(header, "monthly returns: 1.23%");
}

#[test]
fn scaled_scores_render_into_a_labeled_table() {
    // Map raw scores onto a [-1, 1] gauge, then format the gauge
    let raw = [0.0, 49.5, 99.0];
    let gauge: Vec<f64> = raw
        .iter()
        .map(|value| scale(*value, (0.0, 99.0), (-1.0, 1.0)).expect("bounds are distinct"))
        .collect();

    let table = Table::new(
        vec!["low".to_owned(), "mid".to_owned(), "high".to_owned()],
        vec!["gauge".to_owned()],
        gauge.into_iter().map(|value| vec![value]).collect(),
    );
    let rendered = table.map(|value| NumberFormat::Fixed { digits: 2 }.apply(*value));

    assert_eq!(rendered.values[0], vec!["-1.00"]);
    assert_eq!(rendered.values[1], vec!["0.00"]);
    assert_eq!(rendered.values[2], vec!["1.00"]);
}

#[test]
fn frequency_and_column_serialize_with_their_wire_codes() {
    let code = serde_json::to_string(&Frequency::BusinessMonthEnd).expect("serializes");
    assert_eq!(code, "\"BM\"");

    let column = Column::new("w", vec!["a".to_owned()], vec![1.5]);
    let json = serde_json::to_string(&column).expect("serializes");
    let back: Column<f64> = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, column);
}
