//! Integration tests for gradepair-core.
//!
//! These tests run the whole pipeline the way the CLI does:
//! dataset → grid → normalized grid → surface, plus the correlation report.

use gradepair_core::{
    CorrelationOutcome, CountGrid, Dataset, GradeVizError, Layout, RecordingSurface, Rgb,
    SvgSurface, datasets, pearson, process_dataset, run_all,
};

#[test]
fn small_dataset_end_to_end() {
    let layout = Layout::default();
    let ds = Dataset::from_literals("tiny", &[[0, 0], [0, 0], [5, 5]]);
    let mut surface = RecordingSurface::new(400, 400);
    let report = process_dataset(&ds, &layout, &mut surface).unwrap();

    for y in 0..6 {
        for x in 0..6 {
            let expected = match (x, y) {
                (0, 0) => 2,
                (5, 5) => 1,
                _ => 0,
            };
            assert_eq!(report.counts.get(x, y), expected, "count at ({x}, {y})");
        }
    }
    assert_eq!(report.weights.get(0, 0), 1.0);
    assert_eq!(report.weights.get(5, 5), 0.5);

    // Cell (0, 0) is bottom-left and fully blue, (5, 5) top-right and half blue.
    let at = |x: i32, y: i32| {
        surface
            .rects()
            .find(|(r, _)| r.x == x && r.y == y)
            .map(|(_, c)| *c)
    };
    assert_eq!(at(40, 300), Some(Rgb::BLUE));
    assert_eq!(at(340, 0), Some(Rgb::new(128, 128, 255)));
    assert_eq!(at(160, 120), Some(Rgb::WHITE));
}

#[test]
fn builtin_datasets_render_and_correlate() {
    let layout = Layout::default();
    let all = datasets::builtin_datasets();
    let results = run_all(&all, &layout, |_| {
        SvgSurface::new(layout.canvas_width, layout.canvas_height)
    })
    .unwrap();

    assert_eq!(results.len(), 2);
    for (report, surface) in &results {
        assert_eq!(report.counts.total(), report.pair_count as u64);
        assert_eq!(report.weights.max_cell(), 1.0);
        let r = report
            .correlation
            .value()
            .expect("embedded datasets have non-zero variance");
        assert!((-1.0..=1.0).contains(&r));

        let svg = surface.to_svg();
        assert_eq!(svg.matches("<rect ").count(), 36);
        assert_eq!(svg.matches("<text ").count(), 12);
    }
    assert_eq!(results[0].0.name, "old");
    assert_eq!(results[1].0.name, "new");
}

#[test]
fn report_matches_direct_correlation() {
    let layout = Layout::default();
    let ds = datasets::new_dataset();
    let report = process_dataset(&ds, &layout, &mut RecordingSurface::new(400, 400)).unwrap();
    let direct = pearson(ds.pairs()).unwrap();
    assert_eq!(report.correlation, CorrelationOutcome::Defined { r: direct });
    assert!(report.message().starts_with("New correlation: "));
}

#[test]
fn grid_is_rebuilt_per_dataset() {
    let layout = Layout::default();
    let first = Dataset::from_literals("a", &[[0, 0]]);
    let second = Dataset::from_literals("b", &[[5, 5]]);
    let results = run_all(&[first, second], &layout, |_| RecordingSurface::new(400, 400)).unwrap();
    assert_eq!(results[0].0.counts.get(5, 5), 0);
    assert_eq!(results[1].0.counts.get(0, 0), 0);
}

#[test]
fn json_loaded_dataset_flows_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extra.json");
    std::fs::write(&path, "[[1, 3], [2, 2], [3, 1]]").unwrap();

    let ds = Dataset::from_json_file(&path).unwrap();
    let layout = Layout::default();
    let mut surface = SvgSurface::new(400, 400);
    let report = process_dataset(&ds, &layout, &mut surface).unwrap();
    assert_eq!(report.name, "extra");
    assert_eq!(report.correlation.value(), Some(-1.0));

    let out = dir.path().join("extra.svg");
    surface.save(&out).unwrap();
    assert!(std::fs::read_to_string(out).unwrap().contains("#0000ff"));
}

#[test]
fn out_of_range_input_is_rejected() {
    let ds = Dataset::from_literals("x", &[[2, 9]]);
    let err = CountGrid::from_pairs(ds.pairs()).unwrap_err();
    assert!(matches!(err, GradeVizError::OutOfRangeIndex { x: 2, y: 9, .. }));
}
