//! Client Identity
//!
//! Opaque per-installation identifier scoping which items a user sees.
//! Created on first run, read on every later run, never rotated.

use std::fmt;

use log::{debug, info, warn};

use crate::sync::KeyValueStore;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_DIGITS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `user_<random base36>_<time base36>`
///
/// `random` is a uniform sample in `[0, 1)`; `now_ms` is milliseconds since
/// the Unix epoch.
pub fn generate_client_id(random: f64, now_ms: u64) -> String {
    format!(
        "user_{}_{}",
        fraction_to_base36(random, RANDOM_DIGITS),
        to_base36(now_ms)
    )
}

/// Identifier seeded from the browser's RNG and clock
pub fn browser_client_id() -> String {
    generate_client_id(js_sys::Math::random(), js_sys::Date::now() as u64)
}

/// Return the stored identity, or create and persist a new one.
///
/// Storage failures are not fatal: the fresh identity is still returned and
/// will simply be regenerated on the next run.
pub fn resolve_identity<S, F>(storage: &S, key: &str, generate: F) -> ClientIdentity
where
    S: KeyValueStore + ?Sized,
    F: FnOnce() -> String,
{
    if let Some(existing) = storage.get(key).filter(|id| !id.is_empty()) {
        debug!("Reusing client id {}", existing);
        return ClientIdentity::new(existing);
    }

    let fresh = generate();
    match storage.set(key, &fresh) {
        Ok(()) => info!("Created client id {}", fresh),
        Err(e) => warn!("Could not persist client id, it will be regenerated next run: {}", e),
    }
    ClientIdentity::new(fresh)
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

fn fraction_to_base36(fraction: f64, max_digits: usize) -> String {
    let mut rest = fraction.fract().abs();
    let mut out = String::with_capacity(max_digits);
    while out.len() < max_digits && rest > 0.0 {
        rest *= 36.0;
        let digit = rest.trunc() as usize;
        out.push(BASE36[digit.min(35)] as char);
        rest = rest.fract();
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}
