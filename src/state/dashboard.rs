//! Static dashboard dataset and the pure helpers that render it.
//!
//! The dashboard has no backend; everything here is fixed sample data plus
//! formatting for the revenue figure, the CSV report link, and chart geometry.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportRow {
    pub name: &'static str,
    pub us: u32,
    pub france: u32,
    pub japan: u32,
}

const fn row(name: &'static str, us: u32, france: u32, japan: u32) -> TransportRow {
    TransportRow { name, us, france, japan }
}

pub const TRANSPORT_ROWS: [TransportRow; 12] = [
    row("plane", 400, 240, 100),
    row("helicopter", 300, 139, 200),
    row("boat", 200, 980, 80),
    row("train", 278, 390, 90),
    row("subway", 189, 480, 140),
    row("bus", 239, 380, 100),
    row("car", 349, 430, 150),
    row("moto", 300, 300, 120),
    row("bicycle", 260, 350, 160),
    row("horse", 210, 410, 180),
    row("skateboard", 250, 360, 100),
    row("others", 190, 400, 90),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    Us,
    France,
    Japan,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::Us, Series::France, Series::Japan];

    pub fn label(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::France => "france",
            Self::Japan => "japan",
        }
    }

    pub fn stroke(self) -> &'static str {
        match self {
            Self::Us => "#f472b6",
            Self::France => "#60a5fa",
            Self::Japan => "#34d399",
        }
    }

    pub fn value(self, row: &TransportRow) -> u32 {
        match self {
            Self::Us => row.us,
            Self::France => row.france,
            Self::Japan => row.japan,
        }
    }
}

/// Stat card label and growth percentage.
pub const STAT_CARDS: [(&str, u32); 8] = [
    ("Posts", 12),
    ("Categories", 4),
    ("Tags", 21),
    ("Projects", 9),
    ("Portfolio Visitor", 27),
    ("Users", 15),
    ("Views", 18),
    ("Comments", 6),
];

pub const REVENUE: f64 = 59_342.32;

/// `$59,342.32`-style currency string.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// CSV report with a `Name,US,France,Japan` header.
pub fn report_csv(rows: &[TransportRow]) -> String {
    let mut out = String::from("Name,US,France,Japan");
    for r in rows {
        out.push_str(&format!("\n{},{},{},{}", r.name, r.us, r.france, r.japan));
    }
    out
}

/// `data:` URI that downloads `csv` as a file.
pub fn csv_data_uri(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8,{}", urlencoding::encode(csv))
}

/// Largest value across every series, used as the chart's y ceiling.
pub fn series_max(rows: &[TransportRow]) -> u32 {
    rows.iter()
        .flat_map(|r| Series::ALL.map(|s| s.value(r)))
        .max()
        .unwrap_or(0)
}

/// SVG `points` attribute for one series scaled into `width` x `height`.
#[allow(clippy::cast_precision_loss)]
pub fn polyline_points(rows: &[TransportRow], series: Series, width: f64, height: f64, max: u32) -> String {
    let step = if rows.len() > 1 { width / (rows.len() - 1) as f64 } else { 0.0 };
    let ceiling = f64::from(max.max(1));
    rows.iter()
        .enumerate()
        .map(|(i, r)| {
            let x = step * i as f64;
            let y = height - f64::from(series.value(r)) / ceiling * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
