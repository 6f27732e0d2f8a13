mod cli;
mod infra;
mod routes;
mod server;

use chainlink::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
