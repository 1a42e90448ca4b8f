//! Short random identifiers for prompts and projects.
//!
//! # Invariants
//! - Ids are lowercase base-36 strings of fixed length.
//! - No uniqueness check against existing collections is performed.

use uuid::Uuid;

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a new short identifier.
///
/// Digits are taken from the low bits of a v4 UUID, which are all random
/// (version and variant bits sit above the 47 bits consumed here).
pub fn generate_id() -> String {
    let mut value = Uuid::new_v4().as_u128();
    let mut id = String::with_capacity(ID_LEN);
    for _ in 0..ID_LEN {
        id.push(char::from(ID_ALPHABET[(value % 36) as usize]));
        value /= 36;
    }
    id
}
