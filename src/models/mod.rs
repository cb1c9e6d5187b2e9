pub mod stored_hash;

pub use stored_hash::{
    HashFormatError, HashVersion, StoredHash, BCRYPT_TAG, GENERATION_COST, VERSION_MARKER,
};
