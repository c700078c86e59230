use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::models::{City, Domain, LawyerRecord};

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Priya", "Ananya", "Kavita", "Meera", "Sunita", "Deepa", "Lakshmi", "Pooja", "Ritu",
    "Shalini", "Neha", "Aishwarya",
];

const MALE_FIRST_NAMES: &[&str] = &[
    "Arjun", "Rahul", "Vikram", "Suresh", "Amit", "Rajesh", "Karthik", "Sanjay", "Manoj",
    "Aditya", "Nikhil", "Prakash",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Verma", "Iyer", "Reddy", "Patel", "Mehta", "Nair", "Gupta", "Desai", "Rao",
    "Chatterjee", "Kulkarni", "Menon", "Joshi", "Banerjee", "Malhotra",
];

const GENDERS: &[&str] = &["female", "male"];

const LAW_SCHOOLS: &[&str] = &[
    "National Law School of India University",
    "NALSAR University of Law",
    "National Law University Delhi",
    "Government Law College Mumbai",
    "ILS Law College Pune",
    "Faculty of Law, University of Delhi",
    "Symbiosis Law School",
    "Gujarat National Law University",
];

const BAR_ASSOCIATIONS: &[&str] = &[
    "Bar Council of Maharashtra and Goa",
    "Bar Council of Delhi",
    "Bar Council of Karnataka",
    "Bar Council of Telangana",
    "Bar Council of Tamil Nadu",
    "Bar Council of West Bengal",
    "Bar Council of Gujarat",
    "Bar Council of Uttar Pradesh",
];

// 2024-01-01T00:00:00Z; enrollments are spread over the decade before.
const ENROLLMENT_EPOCH: i64 = 1_704_067_200;

/// Generate a deterministic lawyer directory.
///
/// The same `(count, seed)` pair always produces byte-identical
/// records, which keeps seeded environments and test fixtures
/// reproducible. Ratings land between 2.5 and 5.0 in 0.1 steps,
/// experience between 0 and 40 years, hearing fees between 500 and
/// 20000 rupees in 100-rupee steps.
pub fn generate_directory(count: usize, seed: u64) -> Vec<LawyerRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|i| generate_record(&mut rng, i)).collect()
}

fn generate_record(rng: &mut ChaCha8Rng, index: usize) -> LawyerRecord {
    let gender_idx = rng.gen_range(0..GENDERS.len());
    let first_names = if gender_idx == 0 {
        FEMALE_FIRST_NAMES
    } else {
        MALE_FIRST_NAMES
    };
    let first_name = first_names[rng.gen_range(0..first_names.len())];
    let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];

    let domain = Domain::ALL[rng.gen_range(0..Domain::ALL.len())];
    let city = City::ALL[rng.gen_range(0..City::ALL.len())];

    let experience: u8 = rng.gen_range(0..=40);
    let rating = f64::from(rng.gen_range(25..=50u32)) / 10.0;
    let fees_per_hearing = f64::from(rng.gen_range(5..=200u32) * 100);

    // Caseload scales with tenure; fresh enrollees may have none yet.
    let total_cases = rng.gen_range(0..=30u32) * (u32::from(experience) + 1);
    let cases_won = if total_cases == 0 {
        0
    } else {
        rng.gen_range(0..=total_cases)
    };

    let enrolled_offset_days = i64::from(rng.gen_range(0..=3650u32));
    let enrolled_at: Option<DateTime<Utc>> =
        DateTime::from_timestamp(ENROLLMENT_EPOCH - enrolled_offset_days * 86_400, 0);

    let law_school = rng
        .gen_ratio(9, 10)
        .then(|| LAW_SCHOOLS[rng.gen_range(0..LAW_SCHOOLS.len())].to_string());
    let bar_association = rng
        .gen_ratio(9, 10)
        .then(|| BAR_ASSOCIATIONS[rng.gen_range(0..BAR_ASSOCIATIONS.len())].to_string());

    let bio = format!(
        "{} {} practises {} in {} with {} years at the bar.",
        first_name, last_name, domain, city, experience
    );

    LawyerRecord {
        id: Uuid::from_u128(rng.gen()).to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        domain,
        city,
        gender: GENDERS[gender_idx].to_string(),
        experience,
        rating,
        fees_per_hearing,
        total_cases,
        cases_won,
        law_school,
        bar_association,
        bio: Some(bio),
        avatar: Some(format!("avatars/{:04}.png", index)),
        enrolled_at,
    }
}
