use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use venture_advisor::advisor::{Level, VentureAdvisor};
use venture_advisor::config::AppConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn advisor_from_config(config: &AppConfig) -> VentureAdvisor {
    VentureAdvisor::new(config.advisor.input_policy)
}

pub(crate) fn parse_level(raw: &str) -> Result<Level, String> {
    raw.parse::<Level>().map_err(|err| err.to_string())
}
