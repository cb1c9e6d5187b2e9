use clap::Parser;

use bcrypt_interchange::config::AppConfig;
use bcrypt_interchange::dto::HashArgs;
use bcrypt_interchange::handlers::hash_handler;
use bcrypt_interchange::interceptors::AppResult;
use bcrypt_interchange::middleware::setup_logging;
use bcrypt_interchange::services::HashService;
use bcrypt_interchange::utils::Bcrypt;

fn run(args: HashArgs) -> AppResult<String> {
    let config = AppConfig::from_env()?.with_log_level(args.log_level.as_deref())?;
    setup_logging(&config)?;

    let service = HashService::new(Bcrypt, &config);
    hash_handler::handle(&args, &service)
}

fn main() {
    let args = HashArgs::parse();

    match run(args) {
        Ok(line) => println!("{}", line),
        Err(e) => e.exit(),
    }
}
