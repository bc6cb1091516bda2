#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use scan_revenue::models::catalog::ScanCatalogEntry;
    use scan_revenue::models::hospital::HospitalEntry;
    use scan_revenue::models::patient::{Category, PatientScanEntry, ScanStatus};
    use scan_revenue::models::report::SUMMARY_SCAN_SLOTS;
    use scan_revenue::{
        DailyReport, InMemoryStore, ReportConfig, ReportGenerator, ReportMode, Result,
        RevenueError, RevenueStore, ScanCatalog,
    };

    fn service_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn entry(
        cro: &str,
        category: Category,
        hospital_id: u32,
        scan_codes: &str,
        billed_amount: f64,
    ) -> PatientScanEntry {
        PatientScanEntry {
            cro: cro.to_string(),
            patient_name: format!("Patient {cro}"),
            age: "45 Yrs".to_string(),
            gender: "Male".to_string(),
            category,
            hospital_id,
            scan_codes: scan_codes.to_string(),
            status: ScanStatus::Completed,
            service_date: Some(service_date()),
            billed_amount,
        }
    }

    fn store(entries: Vec<PatientScanEntry>) -> InMemoryStore {
        InMemoryStore {
            entries,
            catalog: vec![
                ScanCatalogEntry {
                    code: 3,
                    name: "X-Ray Chest".to_string(),
                    charge: 200.0,
                    multiplier: 1,
                },
                ScanCatalogEntry {
                    code: 7,
                    name: "CT Head".to_string(),
                    charge: 1800.0,
                    multiplier: 1,
                },
                ScanCatalogEntry {
                    code: 9,
                    name: "CT Abdomen Contrast".to_string(),
                    charge: 3000.0,
                    multiplier: 2,
                },
            ],
            hospitals: vec![
                HospitalEntry {
                    id: 1,
                    label: "MDM Hospital".to_string(),
                },
                HospitalEntry {
                    id: 2,
                    label: "MGH Hospital".to_string(),
                },
                HospitalEntry {
                    id: 5,
                    label: "Satellite Hospital".to_string(),
                },
                HospitalEntry {
                    id: 8,
                    label: "Goyal Hospital".to_string(),
                },
                HospitalEntry {
                    id: 10,
                    label: "Paota Hospital".to_string(),
                },
            ],
        }
    }

    /// The worked example: two Sn. CITIZEN bookings, same hospital, same
    /// bundle, appearing consecutively -> one bucket with 4 scans / 4000.00.
    #[test]
    fn test_worked_example() {
        let store = store(vec![
            entry("CT-1", Category::SeniorCitizen, 10, "3,7", 0.0),
            entry("CT-2", Category::SeniorCitizen, 10, "3,7", 0.0),
        ]);
        let generator = ReportGenerator::new(&store);
        let report = generator.generate_detail(service_date()).unwrap();

        assert_eq!(report.tables.len(), 1);
        let table = &report.tables[0];
        assert_eq!(table.hospital_label, "Paota Hospital");
        assert_eq!(table.category, Category::SeniorCitizen);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.totals.scan_count, 4);
        assert_eq!(table.totals.amount, 4000.0);
    }

    #[test]
    fn test_determinism() {
        let store = store(vec![
            entry("CT-1", Category::General, 1, "3,7", 1800.0),
            entry("CT-2", Category::SeniorCitizen, 2, "7", 0.0),
            entry("CT-3", Category::RoadAccident, 1, "3", 0.0),
            entry("CT-4", Category::Bpl, 5, "9", 0.0),
            entry("CT-5", Category::General, 8, "3,7,9", 5000.0),
        ]);
        let generator = ReportGenerator::new(&store);

        let first = generator.generate_detail(service_date()).unwrap();
        let second = generator.generate_detail(service_date()).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let first = generator.generate_summary(service_date()).unwrap();
        let second = generator.generate_summary(service_date()).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Stage order is part of the contract: principal hospitals first, then
    /// free schemes, then the synthetic grouped-hospital buckets.
    #[test]
    fn test_stage_and_bucket_order() {
        let store = store(vec![
            entry("CT-1", Category::RoadAccident, 2, "3", 0.0),
            entry("CT-2", Category::General, 2, "3,7", 2000.0),
            entry("CT-3", Category::SeniorCitizen, 1, "7", 0.0),
            entry("CT-4", Category::Jssy, 5, "3", 0.0),
            entry("CT-5", Category::General, 8, "7", 1800.0),
        ]);
        let generator = ReportGenerator::new(&store);
        let report = generator.generate_detail(service_date()).unwrap();

        let labels: Vec<(&str, Category)> = report
            .tables
            .iter()
            .map(|t| (t.hospital_label.as_str(), t.category))
            .collect();

        assert_eq!(
            labels,
            vec![
                ("MDM Hospital", Category::SeniorCitizen),
                ("MGH Hospital", Category::General),
                ("MGH Hospital", Category::RoadAccident),
                ("Other Govt. Hospital", Category::Jssy),
                ("OTHER HOSPITAL", Category::General),
            ]
        );
    }

    /// Total-consistency: General buckets total stored billed amounts,
    /// catalog-priced buckets total catalog sums.
    #[test]
    fn test_total_consistency() {
        let store = store(vec![
            entry("CT-1", Category::General, 1, "3,7", 1500.0),
            entry("CT-2", Category::General, 1, "3", 150.0),
            entry("CT-3", Category::SeniorCitizen, 1, "3,7", 999.0),
        ]);
        let generator = ReportGenerator::new(&store);
        let report = generator.generate_detail(service_date()).unwrap();

        let general = report
            .tables
            .iter()
            .find(|t| t.category == Category::General)
            .unwrap();
        assert_eq!(general.totals.amount, 1650.0);

        // The stored 999.0 is ignored for catalog-priced categories.
        let senior = report
            .tables
            .iter()
            .find(|t| t.category == Category::SeniorCitizen)
            .unwrap();
        assert_eq!(senior.totals.amount, 2000.0);
    }

    #[test]
    fn test_free_category_buckets_total_zero() {
        let store = store(vec![
            entry("CT-1", Category::RoadAccident, 1, "3,7", 0.0),
            entry("CT-2", Category::Bpl, 1, "9", 0.0),
            entry("CT-3", Category::IpdFree, 2, "7", 0.0),
        ]);
        let generator = ReportGenerator::new(&store);
        let report = generator.generate_detail(service_date()).unwrap();

        assert_eq!(report.tables.len(), 3);
        for table in &report.tables {
            assert!(table.category.is_free());
            assert_eq!(table.totals.amount, 0.0);
            assert!(table.totals.scan_count > 0);
        }
    }

    #[test]
    fn test_summary_rows_have_fixed_slots() {
        let store = store(vec![
            entry("CT-1", Category::SeniorCitizen, 1, "3,7", 0.0),
            entry("CT-2", Category::SeniorCitizen, 1, "3,7", 0.0),
            entry("CT-3", Category::SeniorCitizen, 1, "9", 0.0),
        ]);
        let generator = ReportGenerator::new(&store);
        let report = generator.generate_summary(service_date()).unwrap();

        assert_eq!(report.buckets.len(), 1);
        let bucket = &report.buckets[0];
        assert_eq!(bucket.rows.len(), 2);
        for row in &bucket.rows {
            assert_eq!(row.scan_names.len(), SUMMARY_SCAN_SLOTS);
        }

        let bundle = &bucket.rows[0];
        assert_eq!(bundle.patient_count, 2);
        assert_eq!(bundle.rate, 2000.0);
        assert_eq!(bundle.amount, 4000.0);
        // code 9 has multiplier 2
        assert_eq!(bucket.rows[1].scan_count, 2);
        assert_eq!(bucket.totals.amount, 7000.0);
        assert_eq!(bucket.totals.scan_count, 6);
    }

    #[test]
    fn test_mode_flag_selects_variant() {
        let store = store(vec![entry("CT-1", Category::General, 1, "3", 200.0)]);

        let detail = ReportGenerator::with_config(&store, ReportConfig::for_mode(ReportMode::Detail))
            .generate(service_date())
            .unwrap();
        assert!(matches!(detail, DailyReport::Detail(_)));

        let summary =
            ReportGenerator::with_config(&store, ReportConfig::for_mode(ReportMode::Summary))
                .generate(service_date())
                .unwrap();
        assert!(matches!(summary, DailyReport::Summary(_)));
    }

    #[test]
    fn test_generate_for_parses_front_end_dates() {
        let store = store(vec![entry("CT-1", Category::General, 1, "3", 200.0)]);
        let generator = ReportGenerator::new(&store);

        let report = generator.generate_for("15-03-2024").unwrap();
        assert!(matches!(report, DailyReport::Detail(d) if d.tables.len() == 1));
        assert!(matches!(
            generator.generate_for("2024-03-15"),
            Err(RevenueError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_empty_date_yields_empty_report() {
        let store = store(vec![entry("CT-1", Category::General, 1, "3", 200.0)]);
        let generator = ReportGenerator::new(&store);
        let other_date = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();

        let report = generator.generate_detail(other_date).unwrap();
        assert!(report.tables.is_empty());
    }

    /// Pending and cancelled bookings never participate.
    #[test]
    fn test_only_completed_entries_participate() {
        let mut pending = entry("CT-1", Category::General, 1, "3", 200.0);
        pending.status = ScanStatus::Pending;
        let mut cancelled = entry("CT-2", Category::General, 1, "3", 200.0);
        cancelled.status = ScanStatus::Cancelled;
        let store = store(vec![pending, cancelled, entry("CT-3", Category::General, 1, "3", 200.0)]);

        let generator = ReportGenerator::new(&store);
        let report = generator.generate_detail(service_date()).unwrap();
        assert_eq!(report.tables.len(), 1);
        assert_eq!(report.tables[0].rows.len(), 1);
        assert_eq!(report.tables[0].rows[0].cro, "CT-3");
    }

    struct FailingStore;

    impl RevenueStore for FailingStore {
        fn completed_entries(&self, _date: NaiveDate) -> Result<Vec<PatientScanEntry>> {
            Err(RevenueError::store("connection lost"))
        }

        fn scan_catalog(&self) -> Result<ScanCatalog> {
            Err(RevenueError::store("connection lost"))
        }

        fn hospital_directory(&self) -> Result<scan_revenue::HospitalDirectory> {
            Err(RevenueError::store("connection lost"))
        }
    }

    /// A store failure aborts the whole request with a single error.
    #[test]
    fn test_store_failure_aborts_request() {
        let store = FailingStore;
        let generator = ReportGenerator::new(&store);
        let result = generator.generate_detail(service_date());
        assert!(matches!(result, Err(RevenueError::Store(_))));
    }
}
