use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trendspark::options::{Audience, Format, GenerationConfig, Tone};
use trendspark::{catalog, generate, output, queue};

#[derive(Parser)]
#[command(name = "trendspark")]
#[command(about = "Deterministic caption studio for tech-trend social posts")]
#[command(long_about = "\
Deterministic caption studio for tech-trend social posts

Pick a trend topic, set the tone, format, and audience, and trendspark
composes a caption plus posting-time, visual-direction, and moodboard
recommendations. Output is deterministic: the same topic and options
always produce the same post.

Topics come from a built-in catalog, or from a TOML file:

  [[topics]]
  id = \"ai-agents\"
  name = \"Autonomous AI Agents\"
  description = \"AI agents are moving from chat toys to real systems.\"
  focus = \"Agentic workflows\"
  hashtags = [\"#AIAgents\", \"#AutonomousAI\"]
  proof_points = [\"70% of teams piloting agents in 2024\"]

Unknown topic ids fall back to the first catalog entry, so generation
never fails on a stale id. Run 'trendspark gen-catalog' for a documented
catalog.toml to start from.")]
#[command(version)]
struct Cli {
    /// Catalog TOML file (built-in stock catalog when omitted)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog topics
    Topics,
    /// Show one topic's description, hashtags, and proof points
    Show {
        /// Topic id (unknown ids fall back to the first entry)
        topic: String,
    },
    /// Generate a post for each given topic
    Generate(GenerateArgs),
    /// Validate the catalog without generating
    Check,
    /// Print a documented stock catalog.toml
    GenCatalog,
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// Topic ids (unknown ids fall back to the first catalog entry)
    #[arg(required = true)]
    topics: Vec<String>,

    /// Sentence register for the caption
    #[arg(long, value_enum, default_value = "high-energy")]
    tone: Tone,

    /// Content format the caption targets
    #[arg(long, value_enum, default_value = "carousel")]
    format: Format,

    /// Audience the framing and call-to-action address
    #[arg(long, value_enum, default_value = "startup-founders")]
    audience: Audience,

    /// Leave proof points out of the caption
    #[arg(long)]
    no_stats: bool,

    /// Skip the hook headline
    #[arg(long)]
    no_hook: bool,

    /// Emit queued posts as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => catalog::load_catalog(path)?,
        None => catalog::stock_catalog(),
    };

    match cli.command {
        Command::Topics => output::print_topic_list(&catalog),
        Command::Show { topic } => output::print_topic_detail(catalog.find_topic(&topic)),
        Command::Generate(args) => {
            let config = GenerationConfig {
                tone: args.tone,
                format: args.format,
                audience: args.audience,
                include_stats: !args.no_stats,
                add_hook: !args.no_hook,
            };

            let mut session = queue::PostQueue::new();
            for id in &args.topics {
                let topic = catalog.find_topic(id);
                let post = generate::generate(topic, &config);
                // Identity and timestamp are attached here, at the caller
                // boundary; the generator itself stays pure.
                session.push(&topic.id, post, Utc::now());
            }

            if args.json {
                println!("{}", serde_json::to_string_pretty(session.posts())?);
            } else if session.len() == 1 {
                let entry = &session.posts()[0];
                let topic = catalog.find_topic(&entry.topic_id);
                output::print_post(&topic.name, config.format, &entry.post);
            } else {
                output::print_queue(&session, &catalog, config.format);
            }
        }
        Command::Check => {
            catalog.validate()?;
            println!("Catalog OK: {} topics", catalog.topics.len());
        }
        Command::GenCatalog => {
            print!("{}", catalog::stock_catalog_toml());
        }
    }

    Ok(())
}
