mod cli;
mod interview;
mod render;

use housing_match::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
