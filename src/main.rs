use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use storyguard::config::Config;
use storyguard::form::{FormGuard, SafetyMessage, StoryForm};
use storyguard::moderation::check_safety_detailed;
use storyguard::moderation::registry::{Language, RegistryStats};
use storyguard::output::{terminal, CheckReport};

/// Storyguard: content-safety screening for bedtime-story personalization.
///
/// Runs the same synchronous check the input forms use, so maintainers can
/// see what a given name or keyword list would do.
#[derive(Parser)]
#[command(name = "storyguard", version, about)]
struct Cli {
    /// Language for the user-facing safety message (en, es, fr, pt)
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a single piece of text
    Check {
        /// The text to screen
        text: String,

        /// Also print the matched term and which check caught it
        #[arg(long)]
        reveal: bool,

        /// Print a JSON report instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Run the submission gate over a whole personalization form
    Gate {
        #[arg(long, default_value = "")]
        child_name: String,

        /// A friend's name; repeat for each friend
        #[arg(long = "friend")]
        friends: Vec<String>,

        #[arg(long, default_value = "")]
        keywords: String,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show pattern registry statistics
    Terms {
        /// Also list every term in the unified set
        #[arg(long)]
        list: bool,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("storyguard=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?.with_language(cli.lang);

    match cli.command {
        Commands::Check { text, reveal, json } => {
            let found = check_safety_detailed(&text);
            let report = CheckReport::new(found, SafetyMessage::for_language(config.language), reveal);
            if json {
                let out = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize check report")?;
                println!("{out}");
            } else {
                terminal::display_check(&text, &report);
            }
        }
        Commands::Gate {
            child_name,
            friends,
            keywords,
            json,
        } => {
            let form = StoryForm {
                child_name,
                friend_names: friends,
                keywords,
            };
            let mut guard = FormGuard::new(config.language);
            let decision = guard.submit(&form);
            info!(allowed = decision.is_allowed(), "Gate check complete");
            if json {
                let out = serde_json::to_string_pretty(&decision)
                    .context("Failed to serialize gate decision")?;
                println!("{out}");
            } else {
                terminal::display_gate(&form, &decision);
            }
        }
        Commands::Terms { list, json } => {
            let stats = RegistryStats::collect();
            if json {
                let out = serde_json::to_string_pretty(&stats)
                    .context("Failed to serialize registry stats")?;
                println!("{out}");
            } else {
                terminal::display_registry(&stats, list);
            }
        }
    }

    Ok(())
}
