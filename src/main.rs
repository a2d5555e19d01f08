//! Stockscope CLI
//!
//! Hosted mode (`RUN_MODE=hosted`) reads TICKER, START_DATE, END_DATE and
//! HORIZON from the environment; otherwise they are prompted for.

use dotenvy::dotenv;
use stockscope::config::{AnalysisConfig, RunMode};
use stockscope::core::runtime::{AnalysisOutcome, Analyzer};
use stockscope::logging;
use stockscope::presentation::chart::{ChartRenderer, NullChartRenderer, TerminalChartRenderer};
use stockscope::services::yahoo::{YahooClient, YahooMarketDataProvider};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let mode = RunMode::from_env();
    let config = AnalysisConfig::resolve(mode)?;
    info!(
        mode = ?mode,
        ticker = %config.ticker,
        start = %config.start_date,
        end = %config.end_date,
        horizon = %config.horizon.horizon,
        "Starting analysis"
    );

    let provider =
        YahooMarketDataProvider::with_client(YahooClient::with_base_url(&config.yahoo_base_url)?);
    let chart: Box<dyn ChartRenderer> = if config.show_chart {
        Box::new(TerminalChartRenderer::default())
    } else {
        Box::new(NullChartRenderer)
    };

    let analyzer = Analyzer::new(&provider, chart.as_ref());
    let mut stdout = std::io::stdout();

    match analyzer.run(&config, &mut stdout).await {
        Ok(AnalysisOutcome::Completed(_)) => Ok(()),
        Ok(AnalysisOutcome::NoData { reason }) => {
            info!(reason = %reason, "Run ended without data");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Analysis aborted");
            Err(e.into())
        }
    }
}
