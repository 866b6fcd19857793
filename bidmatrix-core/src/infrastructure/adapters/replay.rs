// bidmatrix-core/src/infrastructure/adapters/replay.rs

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::error::BidMatrixError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::{CompletionRequest, ModelCaller};

/// Answers every prompt with a recorded response: `<dir>/<kind>.txt`.
///
/// Lets the whole workflow run offline, for demos and for tests.
pub struct ReplayModelCaller {
    dir: PathBuf,
}

impl ReplayModelCaller {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ModelCaller for ReplayModelCaller {
    #[instrument(skip(self, request), fields(kind = %request.kind))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BidMatrixError> {
        let path = self.dir.join(format!("{}.txt", request.kind));
        debug!(path = ?path, "Replaying recorded response");

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            BidMatrixError::Infrastructure(InfrastructureError::ModelCall(format!(
                "no recorded response at {}: {e}",
                path.display()
            )))
        })
    }
}
