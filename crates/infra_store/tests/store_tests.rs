//! Comprehensive tests for infra_store

use std::io::Write;

use core_kernel::{InsuranceType, PolicyNumber};
use domain_claims::Outcome;

use infra_store::{
    export_history, load_history, load_policy_table, read_history, save_history, StoreError,
};

use test_utils::{ClaimRecordBuilder, PolicyFixtures, TemporalFixtures};

// ============================================================================
// Policy Table Tests
// ============================================================================

mod policy_table_tests {
    use super::*;

    #[test]
    fn test_load_fixture_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PolicyFixtures::CSV.as_bytes()).unwrap();

        let store = load_policy_table(file.path()).unwrap();
        assert_eq!(store.records(), PolicyFixtures::records().as_slice());
        assert_eq!(store.find_holder(PolicyNumber::new(10003)), Some("Kavya Nair"));
        assert!(store
            .find_policy(PolicyNumber::new(10004), InsuranceType::Home)
            .is_some());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_policy_table(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, StoreError::Io { ref path, .. } if path.ends_with("absent.csv")));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "policy_number, policy_holder, insurance_type\n 42 , Dev Patel , Home \n").unwrap();

        let store = load_policy_table(file.path()).unwrap();
        assert_eq!(store.find_holder(PolicyNumber::new(42)), Some("Dev Patel"));
    }
}

// ============================================================================
// History CSV Tests
// ============================================================================

mod history_csv_tests {
    use super::*;

    #[test]
    fn test_export_import_preserves_fields_and_order() {
        let records = vec![
            ClaimRecordBuilder::new()
                .with_name("Asha Rao")
                .with_document_count(2)
                .build(),
            ClaimRecordBuilder::new()
                .with_name("Vikram, Shah")
                .with_timestamp(TemporalFixtures::minutes_later(5))
                .with_description("Line one\nline two, with \"quotes\"")
                .with_outcome(Outcome::PendingReview(InsuranceType::Auto))
                .with_guidance("🚗 Collision detected.\n\n**Next Steps:**\nStep 1\nStep 2")
                .build(),
        ];

        let text = export_history(&records).unwrap();
        assert!(text.starts_with("timestamp,name,policy_number,insurance_type,"));

        let restored = read_history(text.as_bytes()).unwrap();
        assert_eq!(restored, records);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let records = vec![ClaimRecordBuilder::new().build()];

        save_history(&path, &records).unwrap();
        assert_eq!(load_history(&path).unwrap(), records);
    }

    #[test]
    fn test_import_rejects_unknown_type() {
        let text = "timestamp,name,policy_number,insurance_type,description,status,ai_guidance,document_count\n\
                    2024-03-15T10:30:00Z,A,1,Travel,d,s,g,0\n";
        assert!(matches!(read_history(text.as_bytes()), Err(StoreError::Csv(_))));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod history_properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip_preserves_free_text(
            names in prop::collection::vec("[a-zA-Z ,\"\n]{0,20}", 0..6),
            description in ".{0,80}",
        ) {
            let records: Vec<_> = names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    ClaimRecordBuilder::new()
                        .with_name(name.clone())
                        .with_description(description.clone())
                        .with_timestamp(TemporalFixtures::minutes_later(i as i64))
                        .build()
                })
                .collect();

            let text = export_history(&records).unwrap();
            prop_assert_eq!(read_history(text.as_bytes()).unwrap(), records);
        }
    }
}
