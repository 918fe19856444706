use super::*;

use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Length of the ids generated for requests that arrive without one.
const GENERATED_LENGTH: usize = 16;

impl RequestId {
    pub fn generate() -> Self {
        let rng = thread_rng();

        let id: String = rng
            .sample_iter(Alphanumeric)
            .take(GENERATED_LENGTH)
            .map(char::from)
            .collect();

        Self(id)
    }
}
