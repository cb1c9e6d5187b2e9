pub mod cli_dto;

pub use cli_dto::{HashArgs, VerifyArgs};
