// src/setup.rs

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

pub(super) fn set_up_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Plain => builder.init(),
    }
    tracing::debug!(?format, "tracing initialised");
}
