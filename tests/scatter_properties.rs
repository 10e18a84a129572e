use gpui_scatterplot::{
    Axis, AxisPlacement, ClickEvent, DataPoint, PlotError, Point, PointId, Range, Renderer,
    ScaleModel, ScatterPlot, SelectionEngine, SelectionState, Transition, Viewport, ticks,
};

fn grid(width: i32, height: i32, offset: (f64, f64)) -> Vec<DataPoint> {
    let mut points = Vec::new();
    for x in 0..width {
        for y in 0..height {
            let category = if (x + y) % 2 == 0 { "even" } else { "odd" };
            points.push(DataPoint::new(
                x as f64 + offset.0,
                y as f64 + offset.1,
                category,
            ));
        }
    }
    points
}

#[test]
fn data_to_pixel_to_data_recovers_identity() {
    let data = grid(12, 9, (-4.0, -3.0));
    for viewport in [
        Viewport::new(800.0, 600.0, 70.0),
        Viewport::new(333.0, 251.0, 12.5),
    ] {
        let scale = ScaleModel::derive(&data, viewport).unwrap();
        for point in &data {
            let pixel = scale.data_to_screen(point.position());
            let back = PointId::from_point(scale.screen_to_data(pixel));
            assert_eq!(back, point.id());
        }
    }
}

#[test]
fn pixel_x_increases_and_pixel_y_decreases() {
    let scale = ScaleModel::from_ranges(
        Range::new(-50.0, 50.0),
        Range::new(0.5, 2.5),
        Viewport::default(),
    )
    .unwrap();
    let start = -60.0;
    let mut previous = scale.data_to_screen(Point::new(start, start / 40.0));
    for step in 1..200 {
        let value = start + step as f64 * 0.75;
        let pixel = scale.data_to_screen(Point::new(value, value / 40.0));
        assert!(pixel.x > previous.x);
        assert!(pixel.y < previous.y);
        previous = pixel;
    }
}

#[test]
fn axis_branch_survives_positive_scaling() {
    let domains = [
        ((-3.0, 7.0), (-2.0, 5.0)),
        ((1.0, 7.0), (2.0, 5.0)),
        ((-9.0, -1.0), (-5.0, -0.5)),
        ((0.0, 4.0), (-6.0, 0.0)),
    ];
    for ((x_min, x_max), (y_min, y_max)) in domains {
        let base = ScaleModel::from_ranges(
            Range::new(x_min, x_max),
            Range::new(y_min, y_max),
            Viewport::default(),
        )
        .unwrap();
        let base = AxisPlacement::place(&base);
        for factor in [0.001, 0.5, 3.0, 1e6] {
            let scaled = ScaleModel::from_ranges(
                Range::new(x_min * factor, x_max * factor),
                Range::new(y_min * factor, y_max * factor),
                Viewport::default(),
            )
            .unwrap();
            let scaled = AxisPlacement::place(&scaled);
            assert_eq!(scaled.x_anchor, base.x_anchor);
            assert_eq!(scaled.y_anchor, base.y_anchor);
        }
    }
}

#[test]
fn six_ticks_span_the_domain() {
    for (min, max) in [(0.0, 1.0), (-7.3, 12.9), (1e-3, 2e-3), (-5.0, -4.0)] {
        let values = ticks::generate(min, max, 6).unwrap();
        assert_eq!(values.len(), 6);
        assert!((values[0] - min).abs() < 1e-12);
        assert!((values[5] - max).abs() < 1e-12);
        assert!(values.windows(2).all(|pair| pair[1] > pair[0]));
    }
}

#[test]
fn clicking_the_same_point_twice_returns_to_idle() {
    let mut plot = ScatterPlot::new(grid(6, 6, (0.0, 0.0)));
    let scale = plot.scale().unwrap();
    let pixel = scale.data_to_screen(Point::new(3.0, 2.0));

    let click = ClickEvent::right(pixel.x, pixel.y);
    assert_eq!(plot.click(click), Ok(Transition::Selected(PointId::new(3, 2))));
    assert_eq!(plot.selection().highlighted().len(), 5);

    // a nearby pixel resolves to the same identity
    let again = ClickEvent::right(pixel.x + 3.0, pixel.y - 3.0);
    assert_eq!(plot.click(again), Ok(Transition::Cleared));
    assert_eq!(plot.selection().state(), &SelectionState::Idle);
    assert!(plot.selection().highlighted().is_empty());
}

#[test]
fn neighbors_are_ordered_and_include_self() {
    let data = vec![
        DataPoint::new(0.0, 0.0, "A"),
        DataPoint::new(1.0, 0.0, "A"),
        DataPoint::new(5.0, 5.0, "B"),
        DataPoint::new(2.0, 0.0, "A"),
    ];
    let mut engine = SelectionEngine::new(2);
    engine.select(&data, PointId::new(0, 0));
    let highlighted: Vec<PointId> = engine.highlighted().into_iter().collect();
    assert_eq!(highlighted, vec![PointId::new(0, 0), PointId::new(1, 0)]);
    let distances: Vec<f64> = engine.neighbors().iter().map(|n| n.distance).collect();
    assert_eq!(distances, vec![0.0, 1.0]);

    let mut engine = SelectionEngine::new(3);
    engine.select(&data, PointId::new(0, 0));
    let distances: Vec<f64> = engine.neighbors().iter().map(|n| n.distance).collect();
    assert_eq!(distances, vec![0.0, 1.0, 2.0]);
}

#[test]
fn constant_x_is_a_degenerate_domain() {
    let data = vec![
        DataPoint::new(3.0, 1.0, "a"),
        DataPoint::new(3.0, 4.0, "b"),
        DataPoint::new(3.0, -2.0, "a"),
    ];
    assert_eq!(
        ScaleModel::derive(&data, Viewport::default()),
        Err(PlotError::DegenerateDomain { axis: Axis::X })
    );
}

#[test]
fn empty_dataset_renders_an_empty_list() {
    let render = Renderer::default()
        .render(&[], Viewport::default())
        .unwrap();
    assert!(render.is_empty());
}

#[test]
fn clicks_outside_the_viewport_still_select() {
    let mut plot = ScatterPlot::builder()
        .data(grid(4, 4, (0.0, 0.0)))
        .neighbors(1)
        .build();
    let transition = plot.click(ClickEvent::right(-500.0, 5000.0)).unwrap();
    assert!(matches!(transition, Transition::Selected(_)));
    assert_eq!(plot.selection().neighbors()[0].id, PointId::new(0, 0));
}
