use std::rc::Rc;

use common::{parse_history, parse_horizon, ForecastRequest};
use compute::{render_forecast, ChartData};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::chart::ForecastChart;
use super::stats::ForecastStats;
use crate::api_client::forecast::predict;
use crate::common::error::ErrorDisplay;
use crate::hooks::FetchState;
use crate::settings::get_settings;

const EXAMPLE_HISTORY: &str = "45,56";
const EXAMPLE_HORIZON: &str = "24";

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// What is shown below the form.
#[derive(Clone, PartialEq, Default)]
struct ForecastDisplay {
    /// Last composition handed to the chart; a failed one keeps the old plot
    composed: Option<Rc<compute::Result<ChartData>>>,
    /// Last chart that composed successfully, backing the stats row
    last_chart: Option<ChartData>,
}

impl ForecastDisplay {
    fn record(&self, result: compute::Result<ChartData>) -> Self {
        let last_chart = match &result {
            Ok(chart) => Some(chart.clone()),
            Err(_) => self.last_chart.clone(),
        };
        Self {
            composed: Some(Rc::new(result)),
            last_chart,
        }
    }

    /// Composition for the chart, once any chart has composed successfully.
    fn chart(&self) -> Option<Rc<compute::Result<ChartData>>> {
        self.last_chart.as_ref()?;
        self.composed.clone()
    }
}

#[function_component(Forecast)]
pub fn forecast() -> Html {
    let history_text = use_state(String::new);
    let horizon_text = use_state(String::new);
    let fetch_state = use_state(FetchState::<()>::default);
    let display = use_state(ForecastDisplay::default);

    let on_history_input = {
        let history_text = history_text.clone();
        Callback::from(move |e: InputEvent| history_text.set(input_value(&e)))
    };

    let on_horizon_input = {
        let horizon_text = horizon_text.clone();
        Callback::from(move |e: InputEvent| horizon_text.set(input_value(&e)))
    };

    let on_example = {
        let history_text = history_text.clone();
        let horizon_text = horizon_text.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("Filling example input");
            history_text.set(EXAMPLE_HISTORY.to_string());
            horizon_text.set(EXAMPLE_HORIZON.to_string());
        })
    };

    let submit = {
        let history_text = history_text.clone();
        let horizon_text = horizon_text.clone();
        let fetch_state = fetch_state.clone();
        let display = display.clone();
        Callback::from(move |_: ()| {
            let history = match parse_history(&history_text) {
                Ok(history) => history,
                Err(e) => {
                    log::warn!("Rejected history input: {}", e);
                    fetch_state.set(FetchState::Error(e.to_string()));
                    return;
                }
            };
            let horizon = parse_horizon(&horizon_text, get_settings().default_horizon);
            log::info!("Forecasting {} steps from {} observations", horizon, history.len());

            fetch_state.set(FetchState::Loading);
            let fetch_state = fetch_state.clone();
            let display = display.clone();
            spawn_local(async move {
                let request = ForecastRequest::new(history, horizon);
                match predict(&request).await {
                    Ok(response) => {
                        let result =
                            render_forecast(&request.historical_temps, &response.forecast, horizon);
                        match &result {
                            Ok(_) => fetch_state.set(FetchState::Success(())),
                            Err(e) => fetch_state.set(FetchState::Error(e.to_string())),
                        }
                        display.set(display.record(result));
                    }
                    Err(e) => {
                        log::error!("Forecast request failed: {}", e);
                        fetch_state.set(FetchState::Error(e));
                    }
                }
            });
        })
    };

    let on_submit = {
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let on_chart_error = {
        let fetch_state = fetch_state.clone();
        Callback::from(move |message: String| {
            log::error!("Chart update failed: {}", message);
            fetch_state.set(FetchState::Error(message));
        })
    };

    let loading = fetch_state.is_loading();

    html! {
        <>
            <div class="card bg-base-100 shadow mb-4">
                <form class="card-body gap-4" onsubmit={on_submit}>
                    <label class="form-control w-full">
                        <div class="label">
                            <span class="label-text">{"Historical temperatures (comma separated)"}</span>
                        </div>
                        <input
                            id="historyInput"
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="e.g. 45, 56, 52.5"
                            value={(*history_text).clone()}
                            oninput={on_history_input}
                        />
                    </label>
                    <label class="form-control w-full max-w-xs">
                        <div class="label">
                            <span class="label-text">{"Prediction length"}</span>
                        </div>
                        <input
                            id="lengthInput"
                            type="number"
                            min="1"
                            class="input input-bordered w-full"
                            placeholder={get_settings().default_horizon.to_string()}
                            value={(*horizon_text).clone()}
                            oninput={on_horizon_input}
                        />
                    </label>
                    <div class="card-actions">
                        <button type="submit" class="btn btn-primary" disabled={loading}>
                            if loading {
                                <span class="loading loading-spinner loading-sm"></span>
                            }
                            {"Forecast"}
                        </button>
                        <button type="button" class="btn btn-ghost" onclick={on_example}>
                            {"Example"}
                        </button>
                    </div>
                </form>
            </div>

            if let Some(message) = fetch_state.error() {
                <ErrorDisplay message={message.clone()} on_retry={Some(submit.clone())} />
            }

            if let Some(chart) = display.last_chart.clone() {
                <ForecastStats chart={chart} />
            }

            if let Some(composed) = display.chart() {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <ForecastChart composed={composed} on_error={on_chart_error} />
                    </div>
                </div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::{ComputeError, compose, StepSummary};

    fn chart(history: &[f64]) -> ChartData {
        let summaries = [StepSummary {
            median: 12.0,
            lower: 10.0,
            upper: 14.0,
        }];
        compose(history, &summaries).unwrap()
    }

    #[test]
    fn test_failed_attempt_keeps_last_chart_for_stats() {
        let first = chart(&[9.0, 11.0]);
        let display = ForecastDisplay::default()
            .record(Ok(first.clone()))
            .record(Err(ComputeError::EmptyForecast));

        assert_eq!(display.last_chart, Some(first));
        assert_eq!(
            display.chart().as_deref(),
            Some(&Err(ComputeError::EmptyForecast))
        );
    }

    #[test]
    fn test_no_chart_until_first_success() {
        let display = ForecastDisplay::default().record(Err(ComputeError::EmptyForecast));
        assert!(display.chart().is_none());
        assert!(display.last_chart.is_none());

        let display = display.record(Ok(chart(&[1.0])));
        assert!(matches!(display.chart().as_deref(), Some(Ok(_))));
    }
}
