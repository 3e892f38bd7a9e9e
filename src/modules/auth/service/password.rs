use sha2::Sha256;
use ulid::Ulid;

const SCHEME: &str = "pbkdf2-sha256";
const ROUNDS: u32 = 600_000;
const KEY_LENGTH: usize = 32;
const SEPARATOR: char = '$';

fn derive(password: &str, salt: &str, rounds: u32) -> [u8; KEY_LENGTH] {
    let mut key = [0u8; KEY_LENGTH];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), rounds, &mut key);
    key
}

fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .fold(0u8, |diff, (l, r)| diff | (l ^ r))
            == 0
}

/// Hashes `password` under a fresh salt as
/// `pbkdf2-sha256$<rounds>$<salt>$<hex key>`.
pub fn hash(password: &str) -> String {
    let salt = Ulid::new().to_string();
    let key = base16ct::lower::encode_string(&derive(password, &salt, ROUNDS));

    format!("{SCHEME}{SEPARATOR}{ROUNDS}{SEPARATOR}{salt}{SEPARATOR}{key}")
}

pub fn verify(password: &str, stored_hash: &str) -> bool {
    let parts = stored_hash.split(SEPARATOR).collect::<Vec<_>>();
    let (rounds, salt, key) = match parts.as_slice() {
        [SCHEME, rounds, salt, key] => (*rounds, *salt, *key),
        _ => {
            tracing::warn!("Stored password hash has an unexpected format");
            return false;
        }
    };

    let rounds = match rounds.parse::<u32>() {
        Ok(rounds) if rounds > 0 => rounds,
        _ => {
            tracing::warn!("Stored password hash has an invalid round count");
            return false;
        }
    };

    let key = match base16ct::lower::decode_vec(key) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!("Stored password key is not valid hex: {}", err);
            return false;
        }
    };

    constant_time_eq(&derive(password, salt, rounds), &key)
}
