//! Chart generation handler.

mod generate_chart;

pub use generate_chart::{
    chart_error_message, GenerateChartHandler, CHART_EMPTY_ERROR, CHART_PROVIDER_ERROR,
};
