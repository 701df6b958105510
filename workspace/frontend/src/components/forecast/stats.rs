use compute::{ChartData, SeriesKey};
use yew::prelude::*;

/// Values at the last observation and at the end of the horizon.
#[derive(Debug, Clone, PartialEq)]
struct HorizonSummary {
    last_observed: f64,
    final_label: String,
    median: f64,
    lower: f64,
    upper: f64,
}

fn last_value(chart: &ChartData, key: SeriesKey) -> Option<f64> {
    chart
        .get(key)?
        .data
        .iter()
        .rev()
        .find_map(|value| *value)
}

fn horizon_summary(chart: &ChartData) -> Option<HorizonSummary> {
    Some(HorizonSummary {
        last_observed: last_value(chart, SeriesKey::History)?,
        final_label: chart.labels.last()?.clone(),
        median: last_value(chart, SeriesKey::Median)?,
        lower: last_value(chart, SeriesKey::BandLower)?,
        upper: last_value(chart, SeriesKey::BandUpper)?,
    })
}

#[derive(Properties, PartialEq)]
pub struct ForecastStatsProps {
    pub chart: ChartData,
}

#[function_component(ForecastStats)]
pub fn forecast_stats(props: &ForecastStatsProps) -> Html {
    let Some(summary) = horizon_summary(&props.chart) else {
        return html! {};
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Last Observed"}</div>
                    <div class="stat-value">{format!("{:.1}", summary.last_observed)}</div>
                    <div class="stat-desc">{"t-1"}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Median Forecast"}</div>
                    <div class="stat-value text-primary">{format!("{:.1}", summary.median)}</div>
                    <div class="stat-desc">{&summary.final_label}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"10-90% Range"}</div>
                    <div class="stat-value text-lg">
                        {format!("{:.1} to {:.1}", summary.lower, summary.upper)}
                    </div>
                    <div class="stat-desc">{&summary.final_label}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compute::{compose, StepSummary};

    #[test]
    fn test_horizon_summary_reads_final_step() {
        let summaries = [
            StepSummary {
                median: 12.0,
                lower: 10.0,
                upper: 14.0,
            },
            StepSummary {
                median: 13.0,
                lower: 11.0,
                upper: 16.0,
            },
        ];
        let chart = compose(&[9.0, 11.5], &summaries).unwrap();

        let summary = horizon_summary(&chart).unwrap();

        assert_eq!(summary.last_observed, 11.5);
        assert_eq!(summary.final_label, "t+2");
        assert_eq!((summary.lower, summary.median, summary.upper), (11.0, 13.0, 16.0));
    }
}
