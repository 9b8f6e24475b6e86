// ═══════════════════════════════════════════════════════════════════
// Dataset Loader Tests — CSV ingestion, tolerant date parsing,
// fatal paths, feature extraction
// ═══════════════════════════════════════════════════════════════════

use std::io::Write;

use chrono::NaiveDate;
use stock_dashboard_core::models::record::StockRecord;
use stock_dashboard_core::services::dataset_service::DatasetService;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

const SAMPLE_CSV: &str = "\
Date,Open Price,Volume
2001-09-11,26.0,100000000
2001-09-10,17.0,90000000
2001-10-01,15.5,80000000
";

mod loading {
    use super::*;

    #[test]
    fn loads_and_sorts_ascending_by_date() {
        let records = DatasetService::new()
            .from_reader(SAMPLE_CSV.as_bytes())
            .unwrap();
        assert_eq!(records.len(), 3);

        let dates: Vec<NaiveDate> = records.iter().filter_map(|r| r.date).collect();
        assert_eq!(dates, vec![d(2001, 9, 10), d(2001, 9, 11), d(2001, 10, 1)]);
        assert_eq!(records[1].open_price, 26.0);
        assert_eq!(records[1].volume, 100_000_000);
    }

    #[test]
    fn derived_fields_match_the_parsed_date() {
        let records = DatasetService::new()
            .from_reader(SAMPLE_CSV.as_bytes())
            .unwrap();
        for r in &records {
            let date = r.date.unwrap();
            assert_eq!(r.year, Some(2001));
            assert_eq!(r.month, Some(date.format("%m").to_string().parse().unwrap()));
            assert_eq!(r.day, Some(date.format("%d").to_string().parse().unwrap()));
        }
    }

    #[test]
    fn unparseable_date_is_kept_as_none_not_an_error() {
        let csv = "\
Date,Open Price,Volume
2001-09-11,26.0,100000000
not-a-date,17.0,90000000
";
        let records = DatasetService::new().from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        // Dateless rows sort to the end.
        assert_eq!(records[0].date, Some(d(2001, 9, 11)));
        assert_eq!(records[1].date, None);
        assert_eq!(records[1].year, None);
        assert_eq!(records[1].open_price, 17.0);
    }

    #[test]
    fn alternate_date_formats_are_accepted() {
        let csv = "\
Date,Open Price,Volume
2001/09/11,26.0,100000000
09/12/2001,27.0,90000000
";
        let records = DatasetService::new().from_reader(csv.as_bytes()).unwrap();
        let dates: Vec<NaiveDate> = records.iter().filter_map(|r| r.date).collect();
        assert_eq!(dates, vec![d(2001, 9, 11), d(2001, 9, 12)]);
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "\
Date,Volume
2001-09-11,100000000
";
        assert!(DatasetService::new().from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn malformed_number_is_fatal() {
        let csv = "\
Date,Open Price,Volume
2001-09-11,not-a-price,100000000
";
        assert!(DatasetService::new().from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn empty_dataset_is_fatal() {
        let csv = "Date,Open Price,Volume\n";
        assert!(DatasetService::new().from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn missing_file_is_fatal() {
        assert!(DatasetService::new()
            .load_csv("/nonexistent/AppleData.csv")
            .is_err());
    }

    #[test]
    fn loads_from_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let records = DatasetService::new()
            .load_csv(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(records.len(), 3);
    }
}

mod feature_extraction {
    use super::*;

    #[test]
    fn feature_rows_follow_the_trained_order() {
        let records = vec![StockRecord::new(Some(d(2001, 9, 11)), 26.0, 100_000_000)];
        let rows = DatasetService::new().feature_rows(&records);
        assert_eq!(rows.len(), 1);
        let (features, actual) = rows[0];
        assert_eq!(features, [100_000_000.0, 2001.0, 9.0, 11.0]);
        assert_eq!(actual, 26.0);
    }

    #[test]
    fn dateless_rows_have_no_features() {
        let records = vec![
            StockRecord::new(Some(d(2001, 9, 11)), 26.0, 100_000_000),
            StockRecord::new(None, 17.0, 90_000_000),
        ];
        let rows = DatasetService::new().feature_rows(&records);
        assert_eq!(rows.len(), 1);
    }
}
