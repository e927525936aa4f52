use serde::{Deserialize, Serialize};
use spamsift::{categorize, Category, Pipeline, TrainedModel, DEFAULT_MODEL_PATH};

/// One classification request, as read from stdin.
#[derive(Debug, Default, Deserialize)]
struct Request {
    #[serde(default)]
    title: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    sender: Option<String>,
    #[serde(default)]
    app: Option<String>,
}

#[derive(Debug, Serialize)]
struct Response {
    is_spam: bool,
    confidence: f64,
    category: Category,
}

fn model_path() -> String {
    std::env::var("SPAMSIFT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

fn usage() -> ! {
    eprintln!("Usage: spamsift <title> <message> [sender]");
    eprintln!("   or: spamsift <text>");
    eprintln!("   or: echo '{{\"title\":...,\"message\":...,\"sender\":...,\"app\":...}}' | spamsift");
    eprintln!();
    eprintln!("Classifies one notification message and prints a JSON verdict.");
    eprintln!("Model artifact path comes from SPAMSIFT_MODEL (default: {}).", DEFAULT_MODEL_PATH);
    std::process::exit(1);
}

fn read_request() -> Result<Request, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.len() {
        0 => {
            use std::io::Read;
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            let buffer = buffer.trim();
            if buffer.is_empty() {
                usage();
            }
            // JSON body, or raw text as a fallback.
            match serde_json::from_str::<Request>(buffer) {
                Ok(request) => Ok(request),
                Err(_) => Ok(Request {
                    message: buffer.to_string(),
                    ..Request::default()
                }),
            }
        }
        1 => Ok(Request {
            message: args[0].clone(),
            ..Request::default()
        }),
        2 | 3 => Ok(Request {
            title: args[0].clone(),
            message: args[1].clone(),
            sender: args.get(2).cloned(),
            app: None,
        }),
        _ => usage(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = read_request()?;

    let model = TrainedModel::load(model_path())?;
    let pipeline = Pipeline::with_model(model);

    let verdict = pipeline.classify(
        &request.title,
        &request.message,
        request.sender.as_deref(),
    )?;

    let category = match &request.app {
        Some(app) => categorize(app, &request.message, Category::Other, verdict.is_spam),
        None if verdict.is_spam => Category::Spam,
        None => Category::Other,
    };

    let response = Response {
        is_spam: verdict.is_spam,
        confidence: verdict.confidence,
        category,
    };
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
