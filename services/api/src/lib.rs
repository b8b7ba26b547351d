mod cli;
mod console;
mod infra;
mod routes;
mod server;

use cf_diagnosis::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
