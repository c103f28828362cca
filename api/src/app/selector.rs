//! Uniform random message selection

use rand::seq::SliceRandom;

use crate::error::DomainError;

/// Pick one message uniformly at random.
///
/// Uses the thread-local generator, so no locking is needed across requests.
pub fn pick_random(messages: &[String]) -> Result<&str, DomainError> {
    messages
        .choose(&mut rand::thread_rng())
        .map(String::as_str)
        .ok_or(DomainError::EmptyCollection)
}
