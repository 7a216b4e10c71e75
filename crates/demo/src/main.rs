// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV dataset, builds a chart of the requested kind, and prints its range, labels, points and touch hits.

use anyhow::{Context, Result};
use chart_layout::types::{HEIGHT, WIDTH};
use chart_layout::{
    Chart, ChartData, ChartStyle, DataPoint, FixedFormatter, GroupIdentity, GroupedDataSets, MonospaceMeasure,
    MultiDataSet, Orientation, Point, RangedDataPoint, RangedDataSet, SingleDataSet, Size, StackedDataSets, StyleRef,
};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, ValueEnum};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Line,
    MultiLine,
    Bar,
    MultiBar,
    Grouped,
    Stacked,
    Ranged,
}

#[derive(Parser, Debug)]
#[command(name = "chart-layout-demo", version, about = "Lay out a chart from a CSV file and resolve touches")]
struct Cli {
    /// CSV with columns series,label,value and optional lower,date
    #[arg(short, long, default_value = "crates/demo/data/quarterly.csv")]
    input: PathBuf,
    #[arg(short, long, value_enum, default_value_t = Kind::Bar)]
    kind: Kind,
    /// Width of the whole chart, axis labels included.
    #[arg(long, default_value_t = WIDTH)]
    width: f64,
    #[arg(long, default_value_t = HEIGHT)]
    height: f64,
    /// ChartStyle JSON file; missing fields take their defaults.
    #[arg(long)]
    style: Option<PathBuf>,
    /// Values along X, categories down Y.
    #[arg(long, default_value_t = false)]
    horizontal: bool,
    /// Pointer position `x,y` in plot-area pixels. Repeat for several touches.
    #[arg(long = "touch", value_parser = parse_point)]
    touches: Vec<Point>,
}

/// One CSV record.
#[derive(Clone, Debug)]
struct Row {
    series: String,
    label: Option<String>,
    value: f64,
    lower: Option<f64>,
    date: Option<DateTime<Utc>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let mut style = match &cli.style {
        Some(path) => load_style(path)?,
        None => ChartStyle::default(),
    };
    if cli.horizontal {
        style.orientation = Orientation::Horizontal;
    }

    println!("Using input file: {}", cli.input.display());
    let rows = load_rows(&cli.input).with_context(|| format!("failed to load CSV '{}'", cli.input.display()))?;
    println!("Loaded {} rows", rows.len());
    if rows.is_empty() {
        anyhow::bail!("no rows loaded, check headers/delimiter.");
    }

    let chart = Chart::new(build_data(cli.kind, &rows)?).with_style(style);
    println!("Topology: {:?} ({} points)", chart.data.topology(), chart.data.point_count());
    println!(
        "Values: min {:.4}  max {:.4}  range {:.4}  average {:.4}",
        chart.min_value(),
        chart.max_value(),
        chart.range(),
        chart.average()
    );

    let slots = slot_labels(&chart.data);
    let layout = chart.layout(Size::new(cli.width, cli.height), &slots, &MonospaceMeasure::default())?;
    let plot = layout.plot.size();
    println!(
        "Plot area: {:.1}x{:.1} at ({:.1}, {:.1})",
        plot.width, plot.height, layout.plot.left, layout.plot.top
    );

    for label in chart.placed_y_axis_labels(plot, &FixedFormatter)? {
        println!("  value label {:>12} at {:8.2}", label.text, label.position);
    }
    for (text, at) in slots.iter().zip(chart.x_axis_label_anchors(plot)) {
        println!("  slot label  {:>12} at {:8.2}", text, at);
    }
    if let Some(avg) = chart.average_marker(plot) {
        println!("  average line at {:.2}", avg);
    }

    for p in chart.points(plot)? {
        println!(
            "  point #{:<3} series {:<8} group {:<8} at ({:8.2}, {:8.2})",
            p.index,
            fmt_index(p.series_index),
            fmt_index(p.group_index),
            p.position.x,
            p.position.y
        );
    }

    for pointer in &cli.touches {
        let hits = chart.resolve(*pointer, plot)?;
        if hits.is_empty() {
            println!("Touch ({:.1}, {:.1}): no hit", pointer.x, pointer.y);
        }
        for hit in hits {
            println!(
                "Touch ({:.1}, {:.1}): #{} {} = {:.4} (series {}, group {}) drawn at ({:.2}, {:.2})",
                pointer.x,
                pointer.y,
                hit.index,
                hit.point.label().unwrap_or("-"),
                hit.point.value(),
                fmt_index(hit.series_index),
                fmt_index(hit.group_index),
                hit.location.x,
                hit.location.y
            );
        }
    }

    Ok(())
}

fn load_style(path: &Path) -> Result<ChartStyle> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading style '{}'", path.display()))?;
    ChartStyle::from_json_str(&text).with_context(|| format!("parsing style '{}'", path.display()))
}

/// Load `series,label,value[,lower][,date]` rows. Rows without a numeric value are skipped.
fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_series = idx(&["series", "group", "name"]);
    let i_label = idx(&["label", "category", "x"]);
    let i_value = idx(&["value", "upper", "y"]).context("no value column (expected 'value')")?;
    let i_lower = idx(&["lower", "low"]);
    let i_date = idx(&["date", "time", "timestamp"]);

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).filter(|s| !s.is_empty());
        let Some(value) = field(Some(i_value)).and_then(|s| s.parse::<f64>().ok()) else {
            tracing::warn!(line = line + 2, "skipping row without a numeric value");
            continue;
        };
        out.push(Row {
            series: field(i_series).unwrap_or("series").to_string(),
            label: field(i_label).map(str::to_string),
            value,
            lower: field(i_lower).and_then(|s| s.parse::<f64>().ok()),
            date: field(i_date).and_then(parse_date),
        });
    }
    tracing::info!(rows = out.len(), "loaded csv");
    Ok(out)
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0).map(|n| n.and_utc())
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let coord = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("bad coordinate '{v}': {e}"));
    Ok(Point::new(coord(x)?, coord(y)?))
}

/// Rows split by series, series in order of first appearance.
fn by_series(rows: &[Row]) -> Vec<(&str, Vec<&Row>)> {
    let mut out: Vec<(&str, Vec<&Row>)> = Vec::new();
    for row in rows {
        match out.iter().position(|(name, _)| *name == row.series) {
            Some(i) => out[i].1.push(row),
            None => out.push((row.series.as_str(), vec![row])),
        }
    }
    out
}

fn to_point(row: &Row) -> DataPoint {
    let mut p = DataPoint::new(row.value);
    if let Some(label) = &row.label {
        p = p.with_label(label.clone());
    }
    if let Some(date) = row.date {
        p = p.with_date(date);
    }
    p
}

fn to_set(name: &str, rows: &[&Row]) -> SingleDataSet {
    SingleDataSet::new(rows.iter().map(|r| to_point(r)).collect(), name)
}

/// Sets whose points share one `GroupIdentity` per category label.
fn categorised_sets(series: &[(&str, Vec<&Row>)]) -> Vec<SingleDataSet> {
    let mut identities: HashMap<String, Arc<GroupIdentity>> = HashMap::new();
    series
        .iter()
        .enumerate()
        .map(|(s, (name, rows))| {
            let points = rows
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    let category = r.label.clone().unwrap_or_else(|| i.to_string());
                    let next = identities.len() as u64;
                    let identity = identities
                        .entry(category.clone())
                        .or_insert_with(|| GroupIdentity::new(category, StyleRef(next)));
                    to_point(r).with_group(identity)
                })
                .collect();
            SingleDataSet::new(points, *name).with_style(StyleRef(s as u64))
        })
        .collect()
}

fn build_data(kind: Kind, rows: &[Row]) -> Result<ChartData> {
    let series = by_series(rows);
    let (first_name, first_rows) = series.first().context("no series in input")?;
    if series.len() > 1 && matches!(kind, Kind::Line | Kind::Bar | Kind::Ranged) {
        tracing::warn!(series = series.len(), "single-series chart, using '{}' only", first_name);
    }
    let all = || MultiDataSet::new(series.iter().map(|(name, rows)| to_set(name, rows)).collect());

    let data = match kind {
        Kind::Line => ChartData::Line(to_set(first_name, first_rows)),
        Kind::Bar => ChartData::Bar(to_set(first_name, first_rows)),
        Kind::MultiLine => ChartData::MultiLine(all()),
        Kind::MultiBar => ChartData::MultiBar(all()),
        Kind::Grouped => ChartData::GroupedBar(GroupedDataSets::new(categorised_sets(&series))),
        Kind::Stacked => ChartData::StackedBar(StackedDataSets::new(categorised_sets(&series))),
        Kind::Ranged => {
            let points = first_rows
                .iter()
                .map(|r| -> Result<RangedDataPoint> {
                    let lower = r.lower.with_context(|| format!("ranged row '{}' has no lower value", r.series))?;
                    let mut p = RangedDataPoint::new(r.value, lower);
                    if let Some(label) = &r.label {
                        p = p.with_label(label.clone());
                    }
                    Ok(p)
                })
                .collect::<Result<Vec<_>>>()?;
            ChartData::RangedBar(RangedDataSet::new(points, *first_name))
        }
    };
    Ok(data)
}

/// Text under each index-axis slot: point labels, or set titles for grouped and stacked charts.
fn slot_labels(data: &ChartData) -> Vec<String> {
    match data {
        ChartData::Line(set) | ChartData::Bar(set) => point_labels(set),
        ChartData::MultiLine(multi) | ChartData::MultiBar(multi) => {
            multi.data_sets.iter().max_by_key(|s| s.len()).map(point_labels).unwrap_or_default()
        }
        ChartData::GroupedBar(grouped) => grouped.data_sets.iter().map(|s| s.legend_title.clone()).collect(),
        ChartData::StackedBar(stacked) => stacked.data_sets.iter().map(|s| s.legend_title.clone()).collect(),
        ChartData::RangedBar(ranged) => ranged
            .data_points
            .iter()
            .enumerate()
            .map(|(i, p)| p.label().map_or_else(|| i.to_string(), str::to_string))
            .collect(),
    }
}

fn point_labels(set: &SingleDataSet) -> Vec<String> {
    set.data_points
        .iter()
        .enumerate()
        .map(|(i, p)| p.label().map_or_else(|| i.to_string(), str::to_string))
        .collect()
}

fn fmt_index(i: Option<usize>) -> String { i.map_or_else(|| "-".to_string(), |i| i.to_string()) }
