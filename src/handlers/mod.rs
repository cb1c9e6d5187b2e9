pub mod hash_handler;
pub mod verify_handler;
