use std::rc::Rc;

use compute::{fill_to_previous_order, ChartData, ChartOptions, ChartSlot, ChartSurface, RenderableSeries};
use plotly::common::{Fill, Line, LineShape, Marker, Mode, Orientation, Title};
use plotly::layout::{Axis, HoverMode, Legend, Margin};
use plotly::{Layout, Scatter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{window, Document};
use yew::prelude::*;

pub const CHART_DIV_ID: &str = "forecastChart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(div_id: &str) -> Result<JsValue, JsValue>;
}

type Trace = Box<Scatter<String, Option<f64>>>;

/// Builds one Plotly trace from a composed series.
fn series_trace(labels: &[String], series: &RenderableSeries) -> Trace {
    let style = &series.style;

    let mut line = Line::new().color(style.border_color.clone());
    line = match style.tension {
        Some(tension) if tension > 0.0 => line.shape(LineShape::Spline).smoothing(tension),
        _ => line.shape(LineShape::Linear),
    };

    let mut trace = Scatter::new(labels.to_vec(), series.data.clone())
        .name(&series.label)
        .line(line);

    trace = match style.point_radius {
        Some(radius) if radius > 0.0 => trace.mode(Mode::LinesMarkers).marker(
            Marker::new()
                .size((radius * 2.0).round() as usize)
                .color(style.border_color.clone()),
        ),
        _ => trace.mode(Mode::Lines),
    };

    if series.fill_target.is_some() {
        trace = trace
            .fill(Fill::ToNextY)
            .fill_color(style.background_color.clone());
    }

    trace
}

/// Traces in drawing order, each fill target right before its filler.
fn plot_traces(chart: &ChartData) -> Vec<Trace> {
    fill_to_previous_order(&chart.series)
        .into_iter()
        .map(|series| series_trace(&chart.labels, series))
        .collect()
}

fn plot_legend(position: &str) -> Legend {
    match position {
        "bottom" => Legend::new().orientation(Orientation::Horizontal).y(-0.2),
        "left" => Legend::new().orientation(Orientation::Vertical).x(-0.15),
        "right" => Legend::new().orientation(Orientation::Vertical).x(1.02),
        _ => Legend::new().orientation(Orientation::Horizontal).y(1.12),
    }
}

fn plot_layout(options: &ChartOptions) -> Layout {
    Layout::new()
        .legend(plot_legend(&options.legend_position))
        .y_axis(Axis::new().title(Title::with_text(&options.y_axis_title)))
        .hover_mode(HoverMode::XUnified)
        .margin(Margin::new().top(40).right(10).left(60).bottom(40))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(js_error)
}

fn js_error(error: JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("Chart error: {:?}", error))
}

/// Plotly-backed chart surface.
///
/// Every draw gets its own child div inside the container, so a new plot
/// exists before the previous one is purged.
pub struct PlotlySurface {
    container_id: String,
    next_id: usize,
}

impl PlotlySurface {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
            next_id: 0,
        }
    }
}

fn document() -> Result<Document, String> {
    window()
        .and_then(|window| window.document())
        .ok_or_else(|| "No document available".to_string())
}

impl ChartSurface for PlotlySurface {
    /// Id of the child div holding the plot
    type Instance = String;
    type Error = String;

    fn draw(&mut self, chart: &ChartData) -> Result<String, String> {
        let data = to_js(&plot_traces(chart))?;
        let layout = to_js(&plot_layout(&chart.options))?;
        let config = to_js(&serde_json::json!({"responsive": true, "displayModeBar": false}))?;

        let document = document()?;
        let container = document
            .get_element_by_id(&self.container_id)
            .ok_or_else(|| format!("Chart container #{} not found", self.container_id))?;

        self.next_id += 1;
        let div_id = format!("{}-{}", self.container_id, self.next_id);
        let div = document.create_element("div").map_err(js_error)?;
        div.set_id(&div_id);
        div.set_attribute("style", "width: 100%; height: 100%;")
            .map_err(js_error)?;
        container.append_child(&div).map_err(js_error)?;

        if let Err(e) = new_plot(&div_id, data, layout, config) {
            div.remove();
            return Err(js_error(e));
        }
        log::debug!("Drew forecast chart into #{}", div_id);
        Ok(div_id)
    }

    fn destroy(&mut self, instance: String) {
        if let Err(e) = purge(&instance) {
            log::warn!("Failed to purge chart #{}: {}", instance, js_error(e));
        }
        if let Some(element) = document().ok().and_then(|d| d.get_element_by_id(&instance)) {
            element.remove();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub composed: Rc<compute::Result<ChartData>>,
    pub on_error: Callback<String>,
}

#[function_component(ForecastChart)]
pub fn forecast_chart(props: &ForecastChartProps) -> Html {
    let slot = use_mut_ref(|| ChartSlot::new(PlotlySurface::new(CHART_DIV_ID)));

    {
        let slot = slot.clone();
        let on_error = props.on_error.clone();
        use_effect_with(props.composed.clone(), move |composed| {
            if let Err(message) = slot.borrow_mut().apply((**composed).clone()) {
                on_error.emit(message);
            }
            || ()
        });
    }

    {
        let slot = slot.clone();
        use_effect_with((), move |_| move || slot.borrow_mut().clear());
    }

    html! {
        <div id={CHART_DIV_ID} class="w-full" style="height: 420px;"></div>
    }
}
