use crate::models::{FilterOptions, LawyerRecord};

/// Check if a record satisfies every constraint present in the options.
///
/// Absent (`None`) constraints are skipped; present ones all have to
/// hold. With no constraints set, every record passes.
#[inline]
pub fn matches_filters(record: &LawyerRecord, options: &FilterOptions) -> bool {
    // Check practice area
    if let Some(domain) = options.domain {
        if record.domain != domain {
            return false;
        }
    }

    // Check city
    if let Some(city) = options.city {
        if record.city != city {
            return false;
        }
    }

    // Check gender
    if let Some(gender) = &options.gender {
        if &record.gender != gender {
            return false;
        }
    }

    // Check experience floor
    if let Some(min_experience) = options.min_experience {
        if record.experience < min_experience {
            return false;
        }
    }

    // Check rating floor
    if let Some(min_rating) = options.min_rating {
        if record.rating < min_rating {
            return false;
        }
    }

    // Check fee ceiling
    if let Some(max_fees) = options.max_fees {
        if record.fees_per_hearing > max_fees {
            return false;
        }
    }

    true
}

/// Narrow a record set to those passing the options, preserving input
/// order.
pub fn filter_records(records: &[LawyerRecord], options: &FilterOptions) -> Vec<LawyerRecord> {
    records
        .iter()
        .filter(|record| matches_filters(record, options))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Domain};

    fn create_test_record(id: &str, domain: Domain, city: City, gender: &str) -> LawyerRecord {
        LawyerRecord {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: "Lawyer".to_string(),
            domain,
            city,
            gender: gender.to_string(),
            experience: 10,
            rating: 4.0,
            fees_per_hearing: 2500.0,
            total_cases: 50,
            cases_won: 30,
            law_school: None,
            bar_association: None,
            bio: None,
            avatar: None,
            enrolled_at: None,
        }
    }

    #[test]
    fn test_empty_options_pass_everything() {
        let record = create_test_record("lw_1", Domain::TaxLaw, City::Pune, "male");
        assert!(matches_filters(&record, &FilterOptions::default()));
    }

    #[test]
    fn test_domain_mismatch_fails() {
        let record = create_test_record("lw_1", Domain::TaxLaw, City::Pune, "male");
        let options = FilterOptions {
            domain: Some(Domain::FamilyLaw),
            ..FilterOptions::default()
        };
        assert!(!matches_filters(&record, &options));
    }

    #[test]
    fn test_boundary_values_pass() {
        let record = create_test_record("lw_1", Domain::TaxLaw, City::Pune, "male");
        let options = FilterOptions {
            min_experience: Some(10),
            min_rating: Some(4.0),
            max_fees: Some(2500.0),
            ..FilterOptions::default()
        };
        assert!(matches_filters(&record, &options));
    }

    #[test]
    fn test_fee_ceiling_fails_above() {
        let record = create_test_record("lw_1", Domain::TaxLaw, City::Pune, "male");
        let options = FilterOptions {
            max_fees: Some(2499.0),
            ..FilterOptions::default()
        };
        assert!(!matches_filters(&record, &options));
    }

    #[test]
    fn test_constraints_combine_conjunctively() {
        let record = create_test_record("lw_1", Domain::TaxLaw, City::Pune, "male");
        // Each constraint passes alone, one failing sinks the record.
        let options = FilterOptions {
            domain: Some(Domain::TaxLaw),
            city: Some(City::Pune),
            min_rating: Some(4.5),
            ..FilterOptions::default()
        };
        assert!(!matches_filters(&record, &options));
    }

    #[test]
    fn test_zero_minimum_experience_admits_all() {
        let mut record = create_test_record("lw_1", Domain::TaxLaw, City::Pune, "male");
        record.experience = 0;
        let options = FilterOptions {
            min_experience: Some(0),
            ..FilterOptions::default()
        };
        assert!(matches_filters(&record, &options));
    }

    #[test]
    fn test_filter_records_preserves_order() {
        let records = vec![
            create_test_record("lw_1", Domain::TaxLaw, City::Pune, "male"),
            create_test_record("lw_2", Domain::FamilyLaw, City::Pune, "female"),
            create_test_record("lw_3", Domain::TaxLaw, City::Delhi, "female"),
            create_test_record("lw_4", Domain::TaxLaw, City::Pune, "female"),
        ];
        let options = FilterOptions {
            domain: Some(Domain::TaxLaw),
            ..FilterOptions::default()
        };

        let filtered = filter_records(&records, &options);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["lw_1", "lw_3", "lw_4"]);
    }
}
