use spamsift::train::{self, TrainConfig};
use spamsift::DEFAULT_MODEL_PATH;

const DEFAULT_CORPUS_PATH: &str = "data/spam.csv";

fn usage() -> ! {
    eprintln!("Usage: train [corpus.csv] [artifact.json]");
    eprintln!();
    eprintln!("Trains the spam model and writes the artifact.");
    eprintln!("Defaults: corpus {}, artifact {}.", DEFAULT_CORPUS_PATH, DEFAULT_MODEL_PATH);
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 2 || args.iter().any(|a| a == "-h" || a == "--help") {
        usage();
    }

    let corpus = args.first().map(String::as_str).unwrap_or(DEFAULT_CORPUS_PATH);
    let artifact = args.get(1).map(String::as_str).unwrap_or(DEFAULT_MODEL_PATH);

    let config = TrainConfig::new(corpus, artifact);
    let report = train::run(&config)?;

    println!("trained on {} spam / {} ham examples", report.spam_count, report.ham_count);
    if report.skipped_rows > 0 {
        println!("skipped {} rows with unknown labels", report.skipped_rows);
    }
    println!("train split: {} examples, vocabulary: {} terms", report.train_examples, report.vocabulary_size);
    println!(
        "held-out ({} examples): accuracy {:.3}  precision {:.3}  recall {:.3}  f1 {:.3}",
        report.metrics.test_examples,
        report.metrics.accuracy,
        report.metrics.precision,
        report.metrics.recall,
        report.metrics.f1
    );
    println!("artifact written to {}", artifact);

    println!();
    println!("regression suite:");
    for outcome in &report.regression {
        println!(
            "  [{}] {} -> {} ({:.2}, {}) expected {}",
            if outcome.passed() { "PASS" } else { "FAIL" },
            outcome.text,
            outcome.predicted,
            outcome.confidence,
            outcome.source,
            outcome.expected
        );
    }

    if !report.regression_passed() {
        eprintln!("regression suite failed; artifact needs review before shipping");
        std::process::exit(2);
    }

    Ok(())
}
