use super::*;

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(REVENUE), "$59,342.32");
    assert_eq!(format_currency(1_234_567.0), "$1,234,567.00");
    assert_eq!(format_currency(999.5), "$999.50");
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(-1_000.0), "-$1,000.00");
}

#[test]
fn report_csv_has_header_and_one_line_per_row() {
    let csv = report_csv(&TRANSPORT_ROWS);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 13);
    assert_eq!(lines[0], "Name,US,France,Japan");
    assert_eq!(lines[1], "plane,400,240,100");
    assert_eq!(lines[12], "others,190,400,90");
}

#[test]
fn csv_data_uri_percent_encodes_payload() {
    let uri = csv_data_uri("Name,US\nplane,400");
    assert_eq!(uri, "data:text/csv;charset=utf-8,Name%2CUS%0Aplane%2C400");
}

#[test]
fn series_max_spans_all_series() {
    assert_eq!(series_max(&TRANSPORT_ROWS), 980);
    assert_eq!(series_max(&[]), 0);
}

#[test]
fn polyline_points_scale_into_box() {
    let rows = [TRANSPORT_ROWS[0], TRANSPORT_ROWS[2]];
    let points = polyline_points(&rows, Series::France, 100.0, 50.0, 980);
    assert_eq!(points, "0.0,37.8 100.0,0.0");
}

#[test]
fn polyline_points_single_row_sits_on_left_edge() {
    let points = polyline_points(&TRANSPORT_ROWS[..1], Series::Us, 100.0, 40.0, 400);
    assert_eq!(points, "0.0,0.0");
}

#[test]
fn series_metadata() {
    assert_eq!(Series::ALL.map(Series::label), ["us", "france", "japan"]);
    assert_eq!(Series::Japan.value(&TRANSPORT_ROWS[1]), 200);
    assert_eq!(STAT_CARDS.len(), 8);
}
