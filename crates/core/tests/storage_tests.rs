// ═══════════════════════════════════════════════════════════════════
// Storage Tests — OPRM artifact format and ModelStore
// ═══════════════════════════════════════════════════════════════════

use stock_dashboard_core::errors::CoreError;
use stock_dashboard_core::models::regression::OpenPriceModel;
use stock_dashboard_core::storage::format;
use stock_dashboard_core::storage::manager::ModelStore;

fn sample_model() -> OpenPriceModel {
    OpenPriceModel::new(-1234.5, [3.2e-9, 0.61, -0.04, 0.003])
}

mod round_trips {
    use super::*;

    #[test]
    fn bytes_round_trip() {
        let model = sample_model();
        let bytes = ModelStore::save_to_bytes(&model).unwrap();
        let loaded = ModelStore::load_from_bytes(&bytes).unwrap();
        assert_eq!(model, loaded);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.oprm");
        let path = path.to_str().unwrap();

        let model = sample_model();
        ModelStore::save_to_file(&model, path).unwrap();
        let loaded = ModelStore::load_from_file(path).unwrap();
        assert_eq!(model, loaded);
    }

    #[test]
    fn artifact_starts_with_magic_and_version() {
        let bytes = ModelStore::save_to_bytes(&sample_model()).unwrap();
        assert_eq!(&bytes[0..4], format::MAGIC);
        assert_eq!(
            u16::from_le_bytes([bytes[4], bytes[5]]),
            format::CURRENT_VERSION
        );
    }
}

mod corruption {
    use super::*;

    #[test]
    fn wrong_magic_is_rejected() {
        let mut bytes = ModelStore::save_to_bytes(&sample_model()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            ModelStore::load_from_bytes(&bytes),
            Err(CoreError::InvalidFileFormat(_))
        ));
    }

    #[test]
    fn truncated_header_is_rejected() {
        let bytes = ModelStore::save_to_bytes(&sample_model()).unwrap();
        assert!(matches!(
            ModelStore::load_from_bytes(&bytes[..format::HEADER_SIZE - 1]),
            Err(CoreError::InvalidFileFormat(_))
        ));
    }

    #[test]
    fn future_version_is_rejected() {
        let mut bytes = ModelStore::save_to_bytes(&sample_model()).unwrap();
        let future = (format::CURRENT_VERSION + 1).to_le_bytes();
        bytes[4] = future[0];
        bytes[5] = future[1];
        assert!(matches!(
            ModelStore::load_from_bytes(&bytes),
            Err(CoreError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn payload_length_mismatch_is_rejected() {
        let mut bytes = ModelStore::save_to_bytes(&sample_model()).unwrap();
        bytes.push(0);
        assert!(matches!(
            ModelStore::load_from_bytes(&bytes),
            Err(CoreError::InvalidFileFormat(_))
        ));
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let bytes = ModelStore::save_to_bytes(&sample_model()).unwrap();
        let cut = &bytes[..bytes.len() - 4];
        assert!(ModelStore::load_from_bytes(cut).is_err());
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(ModelStore::load_from_file("/nonexistent/model.oprm").is_err());
    }
}
