use std::env;
use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_summary_engine::engine::{Dashboard, Locale, RegisterError, Resume, Tracker};
use transaction_summary_engine::models::{NewTransaction, Period, TransactionType};
use transaction_summary_engine::storage::FileStorage;

const USAGE: &str = "\
Usage: transaction-summary-engine <command> [store].json [user_id] [arguments]
Commands:
  dashboard                                          totals and listing of every transaction
  resume [YYYY-MM:optional]                          expenses by category for one month
  register [name] [amount] [income|expense] [category] append a transaction
Environment: LOG_LEVEL (off, error, warn, info, debug, trace; default: error), LOCALE (pt-BR, en-US; default: pt-BR)";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("{USAGE}");
        exit(1);
    }

    setup_logging(log_level_from_env());

    let locale = env::var("LOCALE").ok()
        .and_then(|tag| Locale::from_tag(&tag)).unwrap_or_default();

    let storage = Arc::new(FileStorage::new(&args[2]));
    let tracker = Tracker::new(storage).with_locale(locale);
    let user_id = &args[3];

    match args[1].as_str() {
        "dashboard" => {
            let dashboard = tracker.dashboard(user_id).await;
            write_dashboard(&dashboard)?;
        },
        "resume" => {
            let period = match args.get(4) {
                Some(value) => Period::from_str(value)?,
                None => Period::containing(Utc::now().naive_utc())
            };
            let resume = tracker.resume(user_id, period).await;
            write_resume(&resume)?;
        },
        "register" => {
            if args.len() < 8 {
                eprintln!("{USAGE}");
                exit(1);
            }

            let form = NewTransaction {
                name: args[4].clone(),
                amount: args[5].clone(),
                transaction_type: TransactionType::from_str(&args[6]).ok(),
                category: Some(args[7].clone())
            };

            match tracker.register(user_id, &form).await {
                Ok(record) => {
                    info!("Registered transaction [{}]", record.id);
                    println!("{}", record.id);
                },
                Err(RegisterError::Validation(error)) => {
                    eprintln!("{error}");
                    exit(2);
                },
                Err(error) => return Err(error).context("Could not save the transaction")
            }
        },
        command => {
            eprintln!("Unknown command '{command}'\n{USAGE}");
            exit(1);
        }
    }

    Ok(())
}

/// Reads `LOG_LEVEL`. Unset or unrecognised values log errors only.
fn log_level_from_env() -> LevelFilter {
    let Ok(level) = env::var("LOG_LEVEL") else {
        return LevelFilter::ERROR
    };

    LevelFilter::from_str(level.trim()).unwrap_or_else(|_| {
        eprintln!("Ignoring LOG_LEVEL '{level}', logging errors only");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    // stdout is reserved for the CSV tables
    let stderr_log = fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(stderr_log)
        .init();
}

fn write_dashboard(dashboard: &Dashboard) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    {
        let mut writer = csv::Writer::from_writer(&mut output);
        let highlights = &dashboard.highlights;

        writer.write_record(["highlight", "amount", "last_transaction"])?;
        writer.write_record(["entries", highlights.entries.amount.as_str(), highlights.entries.last_transaction.as_str()])?;
        writer.write_record(["expenses", highlights.expenses.amount.as_str(), highlights.expenses.last_transaction.as_str()])?;
        writer.write_record(["total", highlights.total.amount.as_str(), highlights.total.last_transaction.as_str()])?;
        writer.flush()?;
    }

    writeln!(output)?;

    {
        let mut writer = csv::Writer::from_writer(&mut output);

        if dashboard.transactions.is_empty() {
            writer.write_record(["id", "name", "amount", "type", "category", "date"])?;
        }

        for transaction in &dashboard.transactions {
            writer.serialize(transaction)?;
        }

        writer.flush()?;
    }

    output.flush()?;

    Ok(())
}

fn write_resume(resume: &Resume) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    {
        let mut writer = csv::Writer::from_writer(&mut output);
        writer.write_record(["period", "label"])?;
        writer.write_record([&resume.period, &resume.label])?;
        writer.flush()?;
    }

    writeln!(output)?;

    {
        let mut writer = csv::Writer::from_writer(&mut output);

        if resume.categories.is_empty() {
            writer.write_record(["key", "name", "color", "total", "total_formatted", "percent"])?;
        }

        for category in &resume.categories {
            writer.serialize(category)?;
        }

        writer.flush()?;
    }

    output.flush()?;

    Ok(())
}
