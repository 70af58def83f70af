use std::process::ExitCode;

use log::error;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine, the variables may come from the shell
    let _ = dotenvy::dotenv();
    env_logger::init();

    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
