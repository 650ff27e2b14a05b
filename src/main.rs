//! `review-emotion` terminal front-end.
//!
//! Presents the review form as a small command prompt: set the category,
//! rating and review text, then `submit` to see the predicted emotion or
//! `refresh` to clear the result.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use review_emotion::app::{Action, Category, DisplayState, FormInput, InteractionController};
use review_emotion::core::{ClassifierConfig, ClassifierGateway, ReviewError};
use review_emotion::pipelines::{DeviceRequest, EmotionClassificationPipelineBuilder};

const TITLE: &str = "SentimentSense: AI-Powered Emotion Detection for E-Commerce Reviews";
const CHATBOT_HEADER: &str = "E-Commerce Review Emotion Detector Chatbot";

const OBJECTIVES: [&str; 6] = [
    "Develop an AI-Powered Emotion Detection Model - Train a DistilBERT-based model to classify emotions (Anger, Doubt, Frustration, Satisfaction, Trust) from Amazon reviews.",
    "Enhance Sentiment Analysis with Deep Learning - Utilize transformers and NLP techniques to extract meaningful insights beyond traditional sentiment analysis (positive/negative).",
    "Handle Imbalanced Data Effectively - Implement class weighting techniques to ensure fair predictions across all emotion categories.",
    "Optimize Model Performance for Real-World Use - Fine-tune tokenization, batch processing, and model hyperparameters to improve accuracy and efficiency.",
    "Develop an Interactive Chatbot for Emotion Prediction - Create a user-friendly chatbot to allow dynamic emotion prediction from customer reviews.",
    "Enable Business Applications in Customer Experience Management - Provide actionable insights for e-commerce businesses to enhance product strategies and customer engagement.",
];

const SAMPLE_PROMPTS: [&str; 8] = [
    "The product is extremely good.",
    "I regret buying this product as it turned out to be extremely unsatisfactory.",
    "The product delivers as promised. My confidence in its quality has only grown since I started using it.",
    "I feel unsure about this product; it doesn't seem to completely deliver on its promises, and I'm left questioning if it was the right choice.",
    "I expected better, and now I'm left wondering if this product can truly deliver what it promises.",
    "While it's functional, I'm uncertain if it genuinely lives up to the claims made about it.",
    "This product has been more trouble than it's worth, and I'm annoyed by how much effort it takes to make it function even moderately well.",
    "I can't shake the feeling that there might be better alternatives out there; this product hasn't fully convinced me.",
];

const HELP: &str = "\
Commands:
  category <name>   books, mobile, smartTv, refrigerator, mobile accessories
  rating <1-5>      star rating
  review <text>     review text
  sample <n>        use sample prompt n as the review
  submit            predict the emotion of the review
  refresh           clear the result
  show              print the current form
  samples           list the sample prompts
  help              print this message
  quit              exit";

#[derive(Parser, Debug)]
#[command(name = "review-emotion", version, about = "Analyze customer emotions from product reviews.")]
struct Cli {
    /// JSON file with `model_id`, `revision` and `device` settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hugging Face model repository to load.
    #[arg(long)]
    model_id: Option<String>,

    /// Git revision of the model repository.
    #[arg(long)]
    revision: Option<String>,

    /// `cpu` or `cuda:N`.
    #[arg(long)]
    device: Option<DeviceRequest>,

    /// Load the model before the first prompt instead of on the first submit.
    #[arg(long)]
    preload: bool,
}

impl Cli {
    fn classifier_config(&self) -> anyhow::Result<ClassifierConfig> {
        let mut config = match &self.config {
            Some(path) => ClassifierConfig::from_file(path)?,
            None => ClassifierConfig::default(),
        };
        if let Some(model_id) = &self.model_id {
            config.model_id = model_id.clone();
        }
        if let Some(revision) = &self.revision {
            config.revision = revision.clone();
        }
        if let Some(device) = self.device {
            config.device = device;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Category(Category),
    Rating(review_emotion::app::Rating),
    Review(String),
    Sample(usize),
    Submit,
    Refresh,
    Show,
    Samples,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, ReviewError> {
    let trimmed = line.trim_start();
    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed.trim_end(), ""));

    match word.to_lowercase().as_str() {
        "category" => Ok(Command::Category(rest.parse()?)),
        "rating" => Ok(Command::Rating(rest.parse()?)),
        // Keep the review verbatim apart from the line terminator.
        "review" => Ok(Command::Review(
            rest.trim_end_matches(['\r', '\n']).to_string(),
        )),
        "sample" => rest
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=SAMPLE_PROMPTS.len()).contains(n))
            .map(Command::Sample)
            .ok_or_else(|| {
                ReviewError::InvalidInput(format!(
                    "sample must be a number from 1 to {}",
                    SAMPLE_PROMPTS.len()
                ))
            }),
        "submit" => Ok(Command::Submit),
        "refresh" => Ok(Command::Refresh),
        "show" => Ok(Command::Show),
        "samples" => Ok(Command::Samples),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ReviewError::InvalidInput(format!(
            "unknown command '{other}', type 'help' for a list"
        ))),
    }
}

fn print_intro() {
    println!("{TITLE}\n");
    println!("Project Objectives");
    for objective in OBJECTIVES {
        println!("- {objective}");
    }
    println!();
    print_samples();
    println!("\n{CHATBOT_HEADER}");
    println!("Analyze customer emotions from Amazon reviews.\n");
    println!("{HELP}\n");
}

fn print_samples() {
    println!("Sample Prompts");
    for (i, prompt) in SAMPLE_PROMPTS.iter().enumerate() {
        println!("{:>2}. {prompt}", i + 1);
    }
}

fn render(state: &DisplayState) {
    match state {
        DisplayState::Idle => {}
        DisplayState::Warning(message) => println!("Warning: {message}"),
        result => println!("{result}"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.classifier_config()?;
    tracing::info!(model = %config.cache_key(), "review-emotion v{} starting", env!("CARGO_PKG_VERSION"));

    let loader_config = config.clone();
    let gateway = ClassifierGateway::new(move || {
        EmotionClassificationPipelineBuilder::from_config(&loader_config).build()
    });
    if cli.preload {
        gateway
            .initialize()
            .with_context(|| format!("failed to load {}", config.model_id))?;
    }
    let mut controller = InteractionController::new(&gateway)?;
    let mut form = FormInput::default();

    print_intro();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Category(category) => form.category = category,
            Command::Rating(rating) => form.rating = rating,
            Command::Review(text) => form.review_text = text,
            Command::Sample(n) => {
                form.review_text = SAMPLE_PROMPTS[n - 1].to_string();
                println!("Review: {}", form.review_text);
            }
            Command::Submit => match controller.dispatch(Action::Submit(form.clone())) {
                Ok(state) => render(state),
                Err(e) => println!("Error: {e}"),
            },
            Command::Refresh => {
                controller.dispatch(Action::Refresh)?;
                println!("Cleared.");
            }
            Command::Show => {
                println!("Category: {}", form.category);
                println!("Rating:   {}", form.rating);
                println!("Review:   {}", form.review_text);
            }
            Command::Samples => print_samples(),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    Ok(())
}
