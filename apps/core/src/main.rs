// Soil Advisor entry point
// Reads one survey as JSON (file argument or stdin), prints the classification as JSON.

use anyhow::Context;
use soil_advisor_core::{
    telemetry, AppError, ClassificationResult, DisabledOracle, GeminiOracle, OracleConfig,
    SoilClassifier, SoilOracle, SurveyAnswers,
};
use std::io::Read;
use std::sync::Arc;
use tracing::{error, info, warn};

const SERVICE_NAME: &str = "soil-advisor";

/// Exit status for a survey that fails validation.
const EXIT_INVALID_INPUT: i32 = 2;

fn build_oracle(config: &OracleConfig) -> anyhow::Result<Arc<dyn SoilOracle>> {
    if !config.is_enabled() {
        warn!("GOOGLE_API_KEY is not set; classifications will use the heuristic only");
        return Ok(Arc::new(DisabledOracle::new("GOOGLE_API_KEY is not set")));
    }
    let oracle = GeminiOracle::new(config).context("Failed to build the oracle adapter")?;
    Ok(Arc::new(oracle))
}

fn read_input(path: Option<String>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read survey file {}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read survey from stdin")?;
            Ok(buffer)
        }
    }
}

async fn classify_input(
    classifier: &SoilClassifier<dyn SoilOracle>,
    input: &str,
) -> Result<ClassificationResult, AppError> {
    let answers = SurveyAnswers::from_json(input)?;
    classifier.classify(&answers).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing(SERVICE_NAME)?;

    let config = OracleConfig::from_env()?;
    info!("Oracle configuration: {:?}", config);
    let classifier = SoilClassifier::new(build_oracle(&config)?);

    let input = read_input(std::env::args().nth(1))?;

    match classify_input(&classifier, &input).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(AppError::Validation(msg)) => {
            error!("Survey rejected: {}", msg);
            eprintln!("{}", msg);
            std::process::exit(EXIT_INVALID_INPUT);
        }
        Err(e) => Err(e.into()),
    }
}
