use tracing::debug;

use crate::errors::CoreError;
use crate::models::regression::OpenPriceModel;

use super::format;

/// High-level artifact operations: save/load the pre-trained model
/// to/from bytes or files. The model is trained outside this program;
/// this store only moves it across the process boundary.
pub struct ModelStore;

impl ModelStore {
    /// Serialize a model to raw artifact bytes (portable, platform-independent).
    ///
    /// Flow: OpenPriceModel → bincode → OPRM format bytes
    pub fn save_to_bytes(model: &OpenPriceModel) -> Result<Vec<u8>, CoreError> {
        let payload = bincode::serialize(model)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize model: {e}")))?;
        Ok(format::write_artifact(format::CURRENT_VERSION, &payload))
    }

    /// Deserialize a model from raw artifact bytes.
    ///
    /// Flow: OPRM bytes → parse header → bincode → OpenPriceModel
    pub fn load_from_bytes(data: &[u8]) -> Result<OpenPriceModel, CoreError> {
        let (version, payload) = format::read_artifact(data)?;
        debug!(version, payload_len = payload.len(), "model artifact parsed");

        let model: OpenPriceModel = bincode::deserialize(payload)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize model: {e}")))?;
        Ok(model)
    }

    /// Save a model artifact to disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(model: &OpenPriceModel, path: &str) -> Result<(), CoreError> {
        let bytes = Self::save_to_bytes(model)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a model artifact from disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str) -> Result<OpenPriceModel, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}
