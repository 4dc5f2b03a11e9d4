mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::path::Path;
use postcraft::catalog;
use postcraft::config::ComposerConfig;
use postcraft::{generate_with_options, ContentIntent, PostInput, PostLength};

#[derive(Parser)]
#[command(name = "postcraft", about = "Deterministic LinkedIn post composer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    Presets,
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct GenerateArgs {
    /// Start from a named starter preset; explicit flags override its fields.
    #[arg(long)]
    preset: Option<String>,
    #[arg(long)]
    topic: Option<String>,
    #[arg(long)]
    audience: Option<String>,
    #[arg(long)]
    outcome: Option<String>,
    #[arg(long)]
    key_points: Option<String>,
    #[arg(long)]
    proof_points: Option<String>,
    #[arg(long)]
    tone: Option<String>,
    #[arg(long)]
    call_to_action: Option<String>,
    #[arg(long)]
    hashtags: Option<String>,
    #[arg(long)]
    intent: Option<String>,
    #[arg(long)]
    length: Option<String>,
    #[arg(long, default_value_t = 0)]
    salt: i64,
    #[arg(long)]
    hashtag_count: Option<usize>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "webapp/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Generate(GenerateArgs::default()));

    match command {
        Command::Generate(args) => run_generate(args),
        Command::Presets => run_presets(),
        Command::Serve(args) => server::serve(args).await,
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let (config, _) = ComposerConfig::load(None)?;
    let defaults = config.defaults;

    let mut input = match args.preset.as_deref() {
        Some(name) => catalog::find_preset(name)
            .map(|preset| preset.payload)
            .ok_or_else(|| format!("unknown preset: {}", name))?,
        None => {
            let mut input = PostInput::default();
            input.tone = defaults.tone.clone();
            input.intent = ContentIntent::from_str(&defaults.intent).unwrap_or_default();
            input.length = PostLength::resolve(&defaults.length);
            input
        }
    };

    if let Some(topic) = args.topic {
        input.topic = topic;
    }
    if let Some(audience) = args.audience {
        input.audience = audience;
    }
    if let Some(outcome) = args.outcome {
        input.outcome = outcome;
    }
    if let Some(key_points) = args.key_points {
        input.key_points = key_points;
    }
    if let Some(proof_points) = args.proof_points {
        input.proof_points = proof_points;
    }
    if let Some(tone) = args.tone {
        input.tone = tone;
    }
    if let Some(call_to_action) = args.call_to_action {
        input.call_to_action = call_to_action;
    }
    if let Some(hashtags) = args.hashtags {
        input.hashtags = hashtags;
    }
    if let Some(intent) = args.intent.as_deref() {
        input.intent = ContentIntent::from_str(intent)
            .ok_or_else(|| format!("invalid intent: {}", intent))?;
    }
    if let Some(length) = args.length.as_deref() {
        input.length = PostLength::resolve(length);
    }

    let hashtag_count = args.hashtag_count.unwrap_or(defaults.hashtag_count);
    let output = generate_with_options(&input, args.salt, hashtag_count);

    if args.json {
        let payload = serde_json::to_string_pretty(&output)
            .map_err(|err| format!("failed to serialize output: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    println!("{}", output.post);

    println!("\nSteps:");
    for (idx, step) in output.steps.iter().enumerate() {
        println!("{}. {}", idx + 1, step.title);
        println!("   {}", step.insight);
    }

    println!("\nRecommendations:");
    for recommendation in &output.recommendations {
        println!("- {}", recommendation);
    }

    println!("\nQuick tips:");
    for tip in &output.quick_tips {
        println!("- {}", tip);
    }

    Ok(())
}

fn run_presets() -> Result<(), String> {
    for preset in catalog::starter_presets() {
        println!("{}", preset.name);
        println!("  {}", preset.description);
        println!(
            "  tone {} | intent {} | length {}",
            preset.payload.tone,
            preset.payload.intent.as_str(),
            preset.payload.length.as_str()
        );
    }
    Ok(())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
