use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

impl Health {
    pub fn ok() -> Self { Self { status: "ok" } }

    /// Process is up but a dependency (database) is not answering.
    pub fn degraded() -> Self { Self { status: "degraded" } }
}
