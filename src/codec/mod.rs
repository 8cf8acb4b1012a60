pub mod keys;
mod query;

pub use query::{decode_state, encode_state, query_from_link, share_link, try_decode_state};
