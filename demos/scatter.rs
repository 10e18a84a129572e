use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_scatterplot::{DataPoint, GpuiScatterView, ScatterPlot, ScatterViewConfig};

fn main() {
    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(850.0), px(650.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let categories = ["alpha", "beta", "gamma", "delta"];
            let data = (0..60)
                .map(|i| {
                    let t = i as f64 * 0.35;
                    DataPoint::new(
                        t * 1.7 - 20.0,
                        (t * 0.9).sin() * 12.0 + t * 0.4,
                        categories[i % categories.len()],
                    )
                })
                .collect();

            let plot = ScatterPlot::builder().data(data).neighbors(5).build();
            let view = GpuiScatterView::with_config(plot, ScatterViewConfig::default());
            cx.new(|_| view)
        })
        .unwrap();
    });
}
