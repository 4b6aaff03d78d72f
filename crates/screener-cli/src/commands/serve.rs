use std::path::Path;

use screener_web::ServerConfig;

use crate::cli::ServeArgs;
use crate::error::CliError;

pub async fn run(args: &ServeArgs, dataset: &Path) -> Result<(), CliError> {
    let mut config = ServerConfig {
        bind: args.bind,
        dataset: dataset.to_path_buf(),
        ..ServerConfig::default()
    };
    if !args.allowed_origins.is_empty() {
        config.allowed_origins = args.allowed_origins.clone();
    }

    screener_web::serve(config).await?;
    Ok(())
}
