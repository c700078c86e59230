use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lexmatch::config::{LoggingSettings, Settings};
use lexmatch::core::{filter_records, sort_records, Matcher};
use lexmatch::models::{City, Domain, FilterOptions, LawyerRecord, SortKey};
use lexmatch::store::{generate_directory, DirectoryStore, JsonFileStore, StoreError};

#[derive(Parser)]
#[command(name = "lexmatch", about = "Lawyer directory matching engine", version)]
struct Cli {
    /// Path to the directory file, overriding configuration
    #[arg(long, global = true)]
    data_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh lawyer directory
    Seed {
        /// Number of records to generate
        #[arg(long)]
        count: Option<usize>,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Recommend lawyers for a free-text query
    Search {
        /// The legal problem, in plain words
        query: String,
        /// Maximum number of recommendations
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// List the directory, optionally filtered and sorted
    List {
        /// Practice area, e.g. "Family Law"
        #[arg(long)]
        domain: Option<Domain>,
        #[arg(long)]
        city: Option<City>,
        #[arg(long)]
        gender: Option<String>,
        /// Minimum years of practice
        #[arg(long)]
        min_experience: Option<u8>,
        /// Minimum rating out of 5
        #[arg(long)]
        min_rating: Option<f64>,
        /// Maximum fee per hearing
        #[arg(long)]
        max_fees: Option<f64>,
        /// Ordering: rating, experience, fees-low or fees-high
        #[arg(long)]
        sort: Option<SortKey>,
        /// Maximum number of rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show one lawyer's full profile
    Show {
        /// Full id or unique prefix
        id: String,
    },
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    init_logging(&settings.logging);

    if let Err(e) = run(cli, settings) {
        eprintln!("Error: {}", e);
        if matches!(e, StoreError::NotFound(_)) {
            eprintln!("Run `lexmatch seed` to create a directory file.");
        }
        std::process::exit(1);
    }
}

fn init_logging(logging: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

fn run(cli: Cli, settings: Settings) -> Result<(), StoreError> {
    let data_file = cli
        .data_file
        .unwrap_or_else(|| settings.directory.data_file.clone());
    let store = JsonFileStore::new(&data_file);

    match cli.command {
        Commands::Seed { count, seed } => {
            let count = count.unwrap_or(settings.directory.population);
            let seed = seed.unwrap_or(settings.directory.seed);
            info!(count, seed, "Seeding directory");

            let records = generate_directory(count, seed);
            store.save(&records)?;
            println!(
                "Seeded {} lawyers into {}",
                records.len(),
                store.path().display()
            );
        }

        Commands::Search { query, limit } => {
            let records = store.load()?;
            let limit = clamp_limit(limit, &settings);

            let matcher = Matcher::with_default_keywords();
            let result = matcher.recommend(&query, &records, limit);

            if result.matched_domains.is_empty() {
                println!("No practice area recognized; showing top-rated lawyers overall.");
            } else {
                let areas: Vec<String> = result
                    .matched_domains
                    .iter()
                    .map(Domain::to_string)
                    .collect();
                println!("Matched practice areas: {}", areas.join(", "));
            }
            print_records(&result.matches);
            println!(
                "{} of {} lawyers shown",
                result.matches.len(),
                result.total_candidates
            );
        }

        Commands::List {
            domain,
            city,
            gender,
            min_experience,
            min_rating,
            max_fees,
            sort,
            limit,
        } => {
            let records = store.load()?;
            let options = FilterOptions {
                domain,
                city,
                gender,
                min_experience,
                min_rating,
                max_fees,
            };

            let mut listed = filter_records(&records, &options);
            if let Some(key) = sort {
                listed = sort_records(&listed, key);
            }
            listed.truncate(clamp_limit(limit, &settings));

            print_records(&listed);
            println!("{} of {} lawyers shown", listed.len(), records.len());
        }

        Commands::Show { id } => {
            let records = store.load()?;
            let found: Vec<&LawyerRecord> = records
                .iter()
                .filter(|record| record.id.starts_with(&id))
                .collect();

            match found.as_slice() {
                [] => println!("No lawyer found with id {}", id),
                [record] => print_profile(record),
                many => {
                    println!("Id prefix {} is ambiguous ({} matches):", id, many.len());
                    for record in many {
                        println!("  {}  {}", record.id, record.full_name());
                    }
                }
            }
        }
    }

    Ok(())
}

fn clamp_limit(requested: Option<usize>, settings: &Settings) -> usize {
    requested
        .unwrap_or(settings.matching.default_limit)
        .min(settings.matching.max_limit)
}

fn print_records(records: &[LawyerRecord]) {
    if records.is_empty() {
        println!("No lawyers matched.");
        return;
    }

    println!(
        "{:<10} {:<26} {:<22} {:<10} {:>4} {:>7} {:>9}",
        "ID", "NAME", "PRACTICE AREA", "CITY", "EXP", "RATING", "FEES"
    );
    for record in records {
        let short_id = record.id.get(..8).unwrap_or(&record.id);
        println!(
            "{:<10} {:<26} {:<22} {:<10} {:>4} {:>7.1} {:>9.0}",
            short_id,
            record.full_name(),
            record.domain,
            record.city,
            record.experience,
            record.rating,
            record.fees_per_hearing
        );
    }
}

fn print_profile(record: &LawyerRecord) {
    println!("{}", record.full_name());
    println!("  Id:            {}", record.id);
    println!("  Practice area: {}", record.domain);
    println!("  City:          {}", record.city);
    println!("  Gender:        {}", record.gender);
    println!("  Experience:    {} years", record.experience);
    println!("  Rating:        {:.1} / 5.0", record.rating);
    println!("  Fees:          {:.0} per hearing", record.fees_per_hearing);
    match record.success_rate() {
        Some(rate) => println!(
            "  Track record:  {} of {} cases won ({:.0}%)",
            record.cases_won,
            record.total_cases,
            rate * 100.0
        ),
        None => println!("  Track record:  no recorded cases"),
    }
    if let Some(school) = &record.law_school {
        println!("  Law school:    {}", school);
    }
    if let Some(bar) = &record.bar_association {
        println!("  Bar:           {}", bar);
    }
    if let Some(enrolled) = record.enrolled_at {
        println!("  Enrolled:      {}", enrolled.format("%Y-%m-%d"));
    }
    if let Some(bio) = &record.bio {
        println!("  {}", bio);
    }
}
