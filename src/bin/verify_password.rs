use clap::Parser;

use bcrypt_interchange::config::AppConfig;
use bcrypt_interchange::dto::VerifyArgs;
use bcrypt_interchange::handlers::verify_handler;
use bcrypt_interchange::interceptors::AppResult;
use bcrypt_interchange::middleware::setup_logging;
use bcrypt_interchange::services::HashService;
use bcrypt_interchange::utils::Bcrypt;

fn run(args: VerifyArgs) -> AppResult<String> {
    let config = AppConfig::from_env()?.with_log_level(args.log_level.as_deref())?;
    setup_logging(&config)?;

    let service = HashService::new(Bcrypt, &config);
    verify_handler::handle(&args, &service)
}

fn main() {
    let args = VerifyArgs::parse();

    match run(args) {
        Ok(line) => println!("{}", line),
        Err(e) => e.exit(),
    }
}
