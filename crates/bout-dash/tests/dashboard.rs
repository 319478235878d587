//! End-to-end dashboard renders over in-memory workbooks

use bout_dash::prelude::*;
use bout_dash::{
    AxisPosition, ChartError, CsvWriteOptions, DataReference, Interpretation, Sheet, TextColor,
};
use pretty_assertions::assert_eq;

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("value should be present");
    assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
}

fn base_sheet() -> Sheet {
    let e = RawValue::Empty;
    Sheet::new(
        "Overview",
        RawGrid::from_rows(vec![
            vec![e.clone(), "Boxer".into(), "Striker".into(), "Wrestler".into(), "BJJ".into()],
            vec!["Share".into(), e.clone(), RawValue::from(0.5), "0.25".into(), RawValue::from(0.25)],
            vec![e.clone()],
            vec![e.clone()],
            vec![e.clone()],
            vec!["Win".into(), RawValue::from(0.4), RawValue::from(0.55), RawValue::from(0.65), "n/a".into()],
        ]),
    )
}

fn cross_sheet(name: &str) -> Sheet {
    let e = RawValue::Empty;
    Sheet::new(
        name,
        RawGrid::from_rows(vec![
            vec!["Cross Source".into()],
            vec!["Style".into(), "Obs".into(), "ESPN".into(), "Obs conv".into(), "ESPN conv".into()],
            vec!["Striker".into(), RawValue::from(3.0), RawValue::from(4.0), RawValue::from(0.25), RawValue::from(0.5)],
            vec!["Wrestler".into(), RawValue::from(5.0), e.clone(), RawValue::from(0.75), "0.5".into()],
            vec![e.clone(), RawValue::from(1.0), e.clone(), RawValue::from(0.1)],
        ]),
    )
}

fn workbook() -> Workbook {
    Workbook::new(vec![base_sheet(), cross_sheet("Cross Source Analysis")])
}

#[test]
fn renders_all_panels() {
    let dashboard = Dashboard::render(&workbook(), &DashboardOptions::default()).unwrap();
    assert_eq!(dashboard.cross_sheet, "Cross Source Analysis");

    // Representation: text cells coerce like numbers; max 0.5 reads as proportions
    let rep = &dashboard.representation;
    assert_eq!(rep.table.label_strings(), vec!["Striker", "Wrestler", "BJJ"]);
    assert_eq!(rep.interpretation, Interpretation::FromProportion);
    assert_eq!(
        rep.percent.column("Representation (%)").unwrap().as_slice(),
        &[Some(50.0), Some(25.0), Some(25.0)]
    );
    assert_eq!(
        rep.percent_chart.title.as_deref(),
        Some("Overall Style Representation (converted from proportion)")
    );
    assert_eq!(
        rep.percent_chart.value_axis.as_ref().unwrap().tick_suffix.as_deref(),
        Some("%")
    );
    // Raw view: horizontal bars, smallest first, ties in sheet order
    assert_eq!(rep.raw_chart.chart_type, ChartType::BarHorizontal);
    assert_eq!(
        rep.raw_chart.series[0].categories,
        Some(DataReference::Strings(vec![
            "Wrestler".into(),
            "BJJ".into(),
            "Striker".into()
        ]))
    );
    assert_eq!(
        rep.raw_chart.category_axis.as_ref().unwrap().position,
        AxisPosition::Left
    );

    // Win ratio: missing value dropped, chart sorted descending
    let win = &dashboard.win_ratio;
    assert_eq!(win.table.label_strings(), vec!["Boxer", "Striker", "Wrestler"]);
    assert_close(win.mean, 1.6 / 3.0);
    assert_eq!(win.chart.title.as_deref(), Some("Overall Win Ratio by Style (UW Avg: 0.533)"));
    assert_eq!(
        win.chart.series[0].categories,
        Some(DataReference::Strings(vec![
            "Wrestler".into(),
            "Striker".into(),
            "Boxer".into()
        ]))
    );

    // Conversion: unlabeled row dropped, shared proportion scale
    let conv = &dashboard.conversion;
    assert_eq!(conv.table.label_strings(), vec!["Striker", "Wrestler"]);
    assert_eq!(conv.interpretation, Interpretation::FromProportion);
    assert_eq!(
        conv.percent.column("Conversion (Observed)").unwrap().as_slice(),
        &[Some(25.0), Some(75.0)]
    );
    assert_eq!(
        conv.percent.column("Conversion (ESPN)").unwrap().as_slice(),
        &[Some(50.0), Some(50.0)]
    );
    assert_eq!(conv.raw_chart.series.len(), 2);
    assert_eq!(conv.raw_chart.chart_type, ChartType::GroupedBarHorizontal);
    assert_eq!(dashboard.champions.chart.chart_type, ChartType::GroupedBarHorizontal);

    // Champions: missing reference kept as a gap
    let champions = &dashboard.champions;
    assert_eq!(
        champions.table.column("Champions (ESPN)").unwrap().as_slice(),
        &[Some(4.0), None]
    );
    assert_eq!(
        champions.chart.title.as_deref(),
        Some("Champion Representation by Style (Observed vs ESPN)")
    );

    let summary = dashboard.summary;
    assert_close(summary.average_win_ratio, 1.6 / 3.0);
    assert_close(summary.average_conversion_observed, 0.5);
    assert_close(summary.average_conversion_reference, 0.5);
    assert_close(summary.average_representation, 1.0 / 3.0);
}

#[test]
fn bubble_plans_rank_and_annotate() {
    let options = DashboardOptions::default().with_bubble(BubbleOptions::default().with_top_k(2));
    let dashboard = Dashboard::render(&workbook(), &options).unwrap();

    let plan = dashboard.win_ratio.bubbles.as_ref().unwrap();
    // Every labeled style is present, the missing win ratio as the smallest
    assert_eq!(plan.legend.len(), 4);
    let labels: Vec<&str> = plan.circles.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Wrestler", "Striker", "Boxer", "BJJ"]);
    let annotated: Vec<&str> = plan.annotated().map(|c| c.label.as_str()).collect();
    assert_eq!(annotated, vec!["Wrestler", "Striker"]);

    // Default palette: #636EFA then #EF553B, both dark enough for white text
    for circle in plan.annotated() {
        assert_eq!(circle.annotation.as_ref().unwrap().text_color, TextColor::White);
    }
    for circle in &plan.circles {
        assert!(circle.x.hypot(circle.y) + circle.radius <= 1.0 + 1e-9);
    }
}

#[test]
fn conversion_bubbles_pair_style_and_source() {
    let dashboard = Dashboard::render(&workbook(), &DashboardOptions::default()).unwrap();
    let conv = &dashboard.conversion;
    let plan = conv.bubbles.as_ref().unwrap();

    assert_eq!(plan.legend.len(), 2 * conv.table.len());
    let labels: Vec<&str> = plan.circles.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Wrestler (Observed)",
            "Striker (ESPN)",
            "Wrestler (ESPN)",
            "Striker (Observed)",
        ]
    );
    assert_eq!(plan.circles[0].value, 75.0);
    assert_eq!(plan.annotated().count(), 4);
}

#[test]
fn missing_cross_sheet_aborts_render() {
    let wb = Workbook::new(vec![base_sheet(), cross_sheet("Notes")]);
    let err = Dashboard::render(&wb, &DashboardOptions::default()).unwrap_err();
    assert_eq!(err, Error::MissingRequiredSheet("Cross Source Analysis".into()));
    assert_eq!(
        err.to_string(),
        "Could not find a sheet named like 'Cross Source Analysis'"
    );
}

#[test]
fn cross_sheet_match_ignores_case() {
    let wb = Workbook::new(vec![base_sheet(), cross_sheet("Notes"), cross_sheet("ESPN CROSS check")]);
    let dashboard = Dashboard::render(&wb, &DashboardOptions::default()).unwrap();
    assert_eq!(dashboard.cross_sheet, "ESPN CROSS check");
}

#[test]
fn missing_packer_only_fails_bubbles() {
    let dashboard = Dashboard::render_with(
        &workbook(),
        &DashboardOptions::default(),
        &BubbleComposer::without_packer(),
    )
    .unwrap();

    assert_eq!(
        dashboard.representation.bubbles,
        Err(ChartError::MissingPackingDependency)
    );
    assert_eq!(dashboard.win_ratio.bubbles, Err(ChartError::MissingPackingDependency));
    assert_eq!(dashboard.conversion.bubbles, Err(ChartError::MissingPackingDependency));
    assert_eq!(dashboard.representation.table.len(), 3);
    assert_eq!(dashboard.conversion.table.len(), 2);
}

#[test]
fn invalid_range_empties_only_its_panel() {
    let mut options = DashboardOptions::default();
    options.layout.win_values = "B6:L0".into();

    let dashboard = Dashboard::render(&workbook(), &options).unwrap();
    assert!(dashboard.win_ratio.table.is_empty());
    assert_eq!(dashboard.win_ratio.mean, None);
    assert_eq!(
        dashboard.win_ratio.chart.title.as_deref(),
        Some("Overall Win Ratio by Style (UW Avg: n/a)")
    );
    assert_eq!(dashboard.representation.table.len(), 3);
}

#[test]
fn reference_name_and_marker_are_configurable() {
    let mut options = DashboardOptions::default();
    options.layout.reference_name = "Tapology".into();
    options.layout.cross_sheet_marker = "notes".into();

    let wb = Workbook::new(vec![base_sheet(), cross_sheet("Notes")]);
    let dashboard = Dashboard::render(&wb, &options).unwrap();
    assert!(dashboard.conversion.table.column("Conversion (Tapology)").is_some());
}

#[test]
fn empty_workbook_is_an_error() {
    assert!(Dashboard::render(&Workbook::default(), &DashboardOptions::default()).is_err());
}

#[test]
fn exports_download_files() {
    let dashboard = Dashboard::render(&workbook(), &DashboardOptions::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("downloads");

    let written = dashboard.export_csv(&out, &CsvWriteOptions::default()).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "style_representation.csv",
            "win_ratios.csv",
            "conversion_rates_cross_source.csv",
            "champion_representation_cross_source.csv",
        ]
    );

    let win = std::fs::read_to_string(out.join("win_ratios.csv")).unwrap();
    assert_eq!(win, "Style,Win Ratio\nBoxer,0.4\nStriker,0.55\nWrestler,0.65\n");

    let champions = std::fs::read_to_string(out.join("champion_representation_cross_source.csv")).unwrap();
    assert_eq!(
        champions,
        "Style,Champions (Observed),Champions (ESPN)\nStriker,3,4\nWrestler,5,\n"
    );
}

#[test]
fn opens_csv_workbooks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overview.csv");
    std::fs::write(&path, ",Boxer,Striker\nShare,,0.5\n").unwrap();

    let wb = Workbook::open(&path).unwrap();
    assert_eq!(wb.sheet_names(), vec!["overview"]);
    assert!(matches!(
        Dashboard::render(&wb, &DashboardOptions::default()),
        Err(Error::MissingRequiredSheet(_))
    ));

    assert!(Workbook::open(dir.path().join("notes.txt")).is_err());
}
