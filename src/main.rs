use anyhow::Result;
use chrono::Utc;
use golf_catalog::{
    catalog::{write_baseline, ProbeOutcome, SourceProbe},
    cli::{Cli, Commands, SeedStep},
    config::Config,
    filter::CourseFilter,
    parser::read_facilities,
    reconcile::{max_id, reconcile, synthesize_missing, KeyCollision},
    schema::{patterns_for, Course, Region},
    seed::{seed_profiles, seed_relationships, Backend, RestClient, Seeder},
    stats::{print_distribution, RegionCounts},
    ui::{LogUi, Ui, UiApp},
    writer::{export_to_sqlite, load_courses, merge_catalog, save_courses},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const MISSING_PREVIEW: usize = 20;
const EXTRA_PREVIEW: usize = 10;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse_args();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            csv,
            catalog,
            missing_out,
        } => {
            let csv = csv.unwrap_or_else(|| config.csv_path.clone());
            let catalog = catalog.unwrap_or_else(|| config.catalog_path.clone());
            let missing_out = missing_out.unwrap_or_else(|| config.missing_path.clone());

            let facilities = read_facilities(&csv, &config.csv_encoding)?;
            println!("Operating facilities in {:?}: {}", csv, facilities.len());
            print_distribution(&RegionCounts::from_resolved(facilities.iter().map(|f| f.region)).by_count());

            let courses = load_courses(&catalog)?;
            println!("\nCourses in catalog: {}", courses.len());

            let result = reconcile(&facilities, &courses);
            let missing = result.unique_missing();

            println!("\nMissing from catalog ({}):", missing.len());
            for facility in missing.iter().take(MISSING_PREVIEW) {
                println!("  {}", facility.preview());
            }
            if missing.len() > MISSING_PREVIEW {
                println!("  ... and {} more", missing.len() - MISSING_PREVIEW);
            }

            println!("\nOnly in catalog ({}):", result.extra.len());
            for course in result.extra.iter().take(EXTRA_PREVIEW) {
                println!("  {} [{}]", course.name, course.region);
            }

            println!("\nSummary:");
            println!("  CSV facilities:  {}", facilities.len());
            println!("  catalog courses: {}", courses.len());
            println!("  matched:         {}", result.matched.len());
            println!("  missing:         {} ({} rows)", missing.len(), result.missing.len());
            println!("  catalog only:    {}", result.extra.len());

            print_collisions("CSV", &result.source_collisions);
            print_collisions("catalog", &result.catalog_collisions);

            if missing.is_empty() {
                println!("\nCatalog already covers every operating facility");
            } else {
                let additions = synthesize_missing(&missing, max_id(&courses));
                save_courses(&missing_out, &additions)?;
                println!(
                    "\nWrote {} missing courses to {:?} (ids {}..={})",
                    additions.len(),
                    missing_out,
                    additions[0].id,
                    additions[additions.len() - 1].id
                );
            }
        }

        Commands::Merge {
            catalog,
            missing,
            backup,
        } => {
            let catalog = catalog.unwrap_or_else(|| config.catalog_path.clone());
            let missing = missing.unwrap_or_else(|| config.missing_path.clone());
            let backup = backup.unwrap_or_else(|| config.backup_path.clone());

            let (merged, summary) = merge_catalog(&catalog, &missing, &backup)?;
            println!("Backup written to {:?}", backup);
            println!(
                "Merged {} existing + {} new = {} courses into {:?}",
                summary.existing, summary.added, summary.total, catalog
            );
            print_distribution(&region_counts(&merged).by_label());
        }

        Commands::Catalog { output, probe } => {
            if probe {
                let prober = SourceProbe::new()?;
                for (target, outcome) in prober.probe_all() {
                    match outcome {
                        ProbeOutcome::Reached { status, length } => {
                            println!("  {}: HTTP {} ({} chars)", target.label, status, length)
                        }
                        ProbeOutcome::Failed(reason) => {
                            println!("  {}: unreachable ({})", target.label, reason)
                        }
                    }
                }
                println!();
            }

            let output = output.unwrap_or_else(|| config.catalog_path.clone());
            let courses = write_baseline(&output)?;
            println!("Wrote {} courses to {:?}", courses.len(), output);
            print_distribution(&region_counts(&courses).by_count());
        }

        Commands::Search {
            catalog,
            region,
            query,
        } => {
            let catalog = catalog.unwrap_or_else(|| config.catalog_path.clone());
            let filter = CourseFilter::new(region, query)?;
            let courses = load_courses(&catalog)?;

            let hits = filter.apply(&courses);
            for course in &hits {
                println!(
                    "{:>4}  {}  [{} {}]  {}",
                    course.id, course.name, course.region, course.city, course.address
                );
            }
            println!("\n{} of {} courses", hits.len(), courses.len());
        }

        Commands::Stats { catalog } => {
            let catalog = catalog.unwrap_or_else(|| config.catalog_path.clone());
            let courses = load_courses(&catalog)?;
            let counts = region_counts(&courses);
            println!("{} courses in {:?}", counts.total(), catalog);
            print_distribution(&counts.by_count());
        }

        Commands::Export { catalog, output_db } => {
            let start = Instant::now();
            let catalog = catalog.unwrap_or_else(|| config.catalog_path.clone());
            let courses = load_courses(&catalog)?;

            println!("\nExporting to SQLite...");
            let count = export_to_sqlite(&courses, &output_db)?;

            println!(
                "\nCreated {:?} ({} courses) in {:.1}s",
                output_db,
                count,
                start.elapsed().as_secs_f64()
            );
        }

        Commands::Seed { step } => {
            let credentials = config.backend_credentials()?;
            let password = config.seed_password()?.to_string();
            let client = RestClient::new(&credentials)?;

            if step.args().tui {
                let mut app = UiApp::new()?;
                let report = run_seed(&client, &mut app, step, &password, &config.seed.dev_email);
                match report {
                    Ok(report) => app.finish(&report)?,
                    Err(err) => {
                        app.restore()?;
                        return Err(err);
                    }
                }
            } else {
                let mut ui = LogUi::new();
                let report = run_seed(&client, &mut ui, step, &password, &config.seed.dev_email)?;
                println!("\n{}", report);
            }
        }

        Commands::Regions => {
            println!("Regions (address patterns, first match wins):\n");
            for region in Region::ALL {
                let patterns = patterns_for(*region);
                if patterns.is_empty() {
                    println!("  {}  (fallback)", region);
                } else {
                    println!("  {}  {}", region, patterns.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn region_counts(courses: &[Course]) -> RegionCounts {
    RegionCounts::from_regions(courses.iter().map(|c| c.region))
}

fn print_collisions(side: &str, collisions: &[KeyCollision]) {
    if collisions.is_empty() {
        return;
    }
    println!("\nNames sharing a matching key in the {} ({}):", side, collisions.len());
    for collision in collisions {
        println!("  {}: {}", collision.key, collision.names.join(" / "));
    }
}

fn run_seed<B: Backend, U: Ui>(
    backend: &B,
    ui: &mut U,
    step: SeedStep,
    password: &str,
    dev_email: &str,
) -> Result<String> {
    let rng = match step.args().rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let start = Instant::now();
    let mut seeder = Seeder::new(backend, ui, rng, Utc::now(), password, dev_email);

    let mut report = Vec::new();
    if step.runs_profiles() {
        report.push(seed_profiles(&mut seeder).to_string());
    }
    if step.runs_relationships() {
        report.push(seed_relationships(&mut seeder)?.to_string());
    }
    report.push(format!("Finished in {:.1}s", start.elapsed().as_secs_f64()));

    Ok(report.join("\n\n"))
}
