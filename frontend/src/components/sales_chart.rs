//! Seven-day revenue line chart drawn with plotters on a canvas element.

use chrono::NaiveDate;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::SalesPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::services::calendar::parse_iso;
use crate::services::format::{axis_date, rupiah_compact};

#[derive(Properties, PartialEq)]
pub struct SalesChartProps {
    pub data: Vec<SalesPoint>,
}

pub enum Msg {}

pub struct SalesChart {
    canvas_ref: NodeRef,
}

impl Component for SalesChart {
    type Message = Msg;
    type Properties = SalesChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().data != old_props.data {
            self.draw(&ctx.props().data);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().data.is_empty() {
            self.draw(&ctx.props().data);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if ctx.props().data.is_empty() {
            return html! {
                <div class="chart-empty">{"Belum ada data penjualan."}</div>
            };
        }
        html! {
            <div class="sales-chart">
                <canvas ref={self.canvas_ref.clone()} width="800" height="300"></canvas>
            </div>
        }
    }
}

impl SalesChart {
    fn draw(&self, data: &[SalesPoint]) {
        let series = chart_series(data);
        if series.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(800);
        canvas.set_height(300);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let first = series.first().map(|(d, _)| *d).unwrap_or_default();
        let last = series.last().map(|(d, _)| *d).unwrap_or_default();
        let max_total = series.iter().map(|(_, t)| *t).fold(0.0_f64, f64::max);
        let y_max = (max_total * 1.1).max(1.0);

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(60)
            .build_cartesian_2d(first..last, 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .y_label_formatter(&|v| rupiah_compact(*v))
            .x_label_formatter(&|d| axis_date(*d))
            .label_style(("sans-serif", 12, &RGBColor(99, 102, 241)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .x_labels(7)
            .y_labels(6)
            .draw()
            .is_err()
        {
            return;
        }

        let line_color = RGBColor(99, 102, 241);
        if chart
            .draw_series(LineSeries::new(
                series.iter().map(|&(date, total)| (date, total)),
                line_color.stroke_width(3),
            ))
            .is_err()
        {
            return;
        }

        for &(date, total) in &series {
            let _ = chart.draw_series(std::iter::once(Circle::new(
                (date, total),
                4,
                line_color.filled(),
            )));
        }

        let _ = root.present();
    }
}

/// Parsed and chronologically sorted chart points; entries with malformed
/// dates are dropped rather than breaking the drawing.
fn chart_series(data: &[SalesPoint]) -> Vec<(NaiveDate, f64)> {
    let mut series: Vec<(NaiveDate, f64)> = data
        .iter()
        .filter_map(|point| parse_iso(&point.date).map(|date| (date, point.total)))
        .collect();
    series.sort_by_key(|&(date, _)| date);
    series
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn drawing_with_no_data_is_a_no_op() {
        let chart = SalesChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw(&[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_series_sorts_and_drops_malformed_dates() {
        let data = vec![
            SalesPoint { date: "2025-03-03".to_string(), total: 300.0 },
            SalesPoint { date: "not-a-date".to_string(), total: 999.0 },
            SalesPoint { date: "2025-03-01".to_string(), total: 100.0 },
        ];
        let series = chart_series(&data);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].1, 100.0);
        assert_eq!(series[1].1, 300.0);
    }
}
