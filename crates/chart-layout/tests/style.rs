// File: crates/chart-layout/tests/style.rs
// Purpose: ChartStyle JSON loading, defaults and error reporting.

use chart_layout::{Baseline, ChartStyle, Insets, LayoutError, Orientation, Topline};

#[test]
fn defaults() {
    let style = ChartStyle::default();
    assert_eq!(style.baseline, Baseline::MinimumValue);
    assert_eq!(style.topline, Topline::MaximumValue);
    assert_eq!(style.orientation, Orientation::Vertical);
    assert_eq!(style.y_axis_label_count, 3);
    assert_eq!(style.label_specifier, "%.0f");
    assert_eq!(style.padding, Insets::uniform(8.0));
    assert_eq!(style.bar_fraction(), 0.7);
}

#[test]
fn missing_fields_take_defaults() {
    let style = ChartStyle::from_json_str(r#"{ "baseline": "zero", "group_spacing": 10.0 }"#).unwrap();
    assert_eq!(style.baseline, Baseline::Zero);
    assert_eq!(style.group_spacing, 10.0);
    assert_eq!(style.topline, Topline::MaximumValue);
    assert_eq!(style.bar_width, 0.7);

    assert_eq!(ChartStyle::from_json_str("{}").unwrap(), ChartStyle::default());
}

#[test]
fn policies_with_values() {
    let json = r#"{
        "baseline": { "minimum_with_maximum": 5.0 },
        "topline": { "maximum": 100.0 },
        "orientation": "horizontal",
        "label_specifier": "%.2f",
        "padding": { "left": 1.0, "right": 2.0, "top": 3.0, "bottom": 4.0 }
    }"#;
    let style = ChartStyle::from_json_str(json).unwrap();
    assert_eq!(style.baseline, Baseline::MinimumWithMaximum(5.0));
    assert_eq!(style.topline, Topline::Maximum(100.0));
    assert_eq!(style.orientation, Orientation::Horizontal);
    assert_eq!(style.label_format().unwrap().precision, 2);
    assert_eq!(style.padding, Insets::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn saved_style_loads_back() {
    let style = ChartStyle { baseline: Baseline::Zero, group_spacing: 4.0, ..ChartStyle::default() };
    let json = style.to_json_string().unwrap();
    assert_eq!(ChartStyle::from_json_str(&json).unwrap(), style);
}

#[test]
fn invalid_json_is_a_config_error() {
    for json in ["not json", r#"{ "baseline": "sideways" }"#, r#"{ "bar_width": "wide" }"#] {
        assert!(matches!(ChartStyle::from_json_str(json), Err(LayoutError::Config(_))), "{json}");
    }
}

#[test]
fn bar_fraction_is_clamped() {
    let mut style = ChartStyle { bar_width: -1.0, ..ChartStyle::default() };
    assert_eq!(style.bar_fraction(), 0.0);
    style.bar_width = 1.5;
    assert_eq!(style.bar_fraction(), 1.0);
    style.bar_width = f64::NAN;
    assert_eq!(style.bar_fraction(), 1.0);
}

#[test]
fn negative_padding_loads_as_zero() {
    let json = r#"{ "padding": { "left": -4.0, "right": 2.0, "top": -0.5, "bottom": 0.0 } }"#;
    let style = ChartStyle::from_json_str(json).unwrap();
    assert_eq!(style.padding, Insets { left: 0.0, right: 2.0, top: 0.0, bottom: 0.0 });

    let insets: Insets = serde_json::from_str(r#"{ "left": -1.0, "right": -1.0, "top": 3.0, "bottom": -9.0 }"#).unwrap();
    assert_eq!(insets, Insets::new(0.0, 0.0, 3.0, 0.0));
}
