use std::process::ExitCode;

use flood_dashboard::config::DashboardConfig;
use flood_dashboard::logging::{self, LogSource};
use flood_dashboard::model::DashboardError;
use flood_dashboard::ui::{self, app::App};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DashboardError> {
    let config_path = std::env::args().nth(1);
    let config = DashboardConfig::load(config_path.as_deref())?;

    logging::init_logger(config.log_level()?, config.logging.file.as_deref(), true);
    logging::info(
        LogSource::Config,
        None,
        &format!(
            "threshold {}m, {} history days, seed {}",
            config.alert_threshold_m,
            config.history_days,
            config.seed.map(|s| s.to_string()).unwrap_or_else(|| "random".to_string())
        ),
    );

    let mut app = App::new(config);
    ui::run(&mut app)?;

    logging::info(LogSource::System, None, "dashboard closed");
    Ok(())
}
