//! CLI entry point for the gradebook tool.
//!
//! Every subcommand loads its CSV inputs into fresh in-memory stores, prints a
//! report to stdout and exits. Nothing is written back.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gradebook::config::Config;
use gradebook::import::{load_courses, load_grades, load_students};
use gradebook::ledger::GradeLedger;
use gradebook::output::{
    NO_RECORDS, render_course_summary, render_grades, render_ranking, render_standings,
    render_student_summary, to_json,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Grade statistics and rankings over student and course records", long_about = None)]
struct Cli {
    /// JSON file with registry capacities
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average, extremes and score distribution of one course
    Stats {
        course_id: String,

        /// Grades CSV (student_id,course_id,score)
        #[arg(short, long, default_value = "grades.csv")]
        grades: PathBuf,

        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Students of one course ordered by score, best first
    Rank {
        course_id: String,

        #[arg(short, long, default_value = "grades.csv")]
        grades: PathBuf,
    },
    /// All grades of one student and their average
    Student {
        student_id: String,

        #[arg(short, long, default_value = "grades.csv")]
        grades: PathBuf,
    },
    /// All grades of one course and their average
    Course {
        course_id: String,

        #[arg(short, long, default_value = "grades.csv")]
        grades: PathBuf,
    },
    /// Statistics for every graded course plus the student standings
    Report {
        #[arg(short, long, default_value = "grades.csv")]
        grades: PathBuf,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List registered students, optionally from one department
    Students {
        /// Students CSV (student_id,name,age,gender,department)
        #[arg(short, long, default_value = "students.csv")]
        students: PathBuf,

        #[arg(short, long)]
        department: Option<String>,
    },
    /// List registered courses, optionally taught by one teacher
    Courses {
        /// Courses CSV (course_id,name,credit,teacher,schedule)
        #[arg(short, long, default_value = "courses.csv")]
        courses: PathBuf,

        #[arg(short, long)]
        teacher: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gradebook.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;
    info!(
        max_students = config.max_students,
        max_courses = config.max_courses,
        "Configuration resolved"
    );

    match cli.command {
        Commands::Stats {
            course_id,
            grades,
            json,
        } => {
            let ledger = ledger_from(&grades)?;
            match ledger.course_statistics(&course_id) {
                Some(stats) if json => println!("{}", to_json(&stats)?),
                Some(stats) => print!("{stats}"),
                None => println!("{course_id}: {NO_RECORDS}"),
            }
        }
        Commands::Rank { course_id, grades } => {
            let ledger = ledger_from(&grades)?;
            print!("{}", render_ranking(&course_id, &ledger.ranked_scores(&course_id)));
        }
        Commands::Student { student_id, grades } => {
            let ledger = ledger_from(&grades)?;
            print!(
                "{}",
                render_grades(
                    &student_id,
                    &ledger.student_grades(&student_id),
                    ledger.student_average(&student_id),
                )
            );
        }
        Commands::Course { course_id, grades } => {
            let ledger = ledger_from(&grades)?;
            print!(
                "{}",
                render_grades(
                    &course_id,
                    &ledger.course_grades(&course_id),
                    ledger.course_average(&course_id),
                )
            );
        }
        Commands::Report { grades, json } => {
            let ledger = ledger_from(&grades)?;
            let report = ledger.report();
            if json {
                println!("{}", to_json(&report)?);
            } else {
                for stats in &report.courses {
                    println!("{stats}");
                }
                print!("{}", render_standings(&report.standings));
            }
        }
        Commands::Students {
            students,
            department,
        } => {
            let mut registry = config.student_registry();
            load_students(&students, &mut registry)?;

            let listed = match &department {
                Some(department) => registry.by_department(department),
                None => registry.list(),
            };
            for student in listed {
                println!("{student}");
            }
            print!("{}", render_student_summary(&registry.summary()));
        }
        Commands::Courses { courses, teacher } => {
            let mut registry = config.course_registry();
            load_courses(&courses, &mut registry)?;

            let listed = match &teacher {
                Some(teacher) => registry.by_teacher(teacher),
                None => registry.list(),
            };
            for course in listed {
                println!("{course}");
            }
            print!("{}", render_course_summary(&registry.summary()));
        }
    }

    Ok(())
}

/// Builds a fresh ledger from a grades CSV.
fn ledger_from(path: &Path) -> Result<GradeLedger> {
    let mut ledger = GradeLedger::new();
    load_grades(path, &mut ledger)?;
    Ok(ledger)
}
