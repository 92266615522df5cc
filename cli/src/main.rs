//! Helm CLI - profile management for Wayfarer model configuration.
//!
//! Each subcommand is one short, synchronous user action over a profile
//! file: inspect it, mutate it, regenerate the bootstrap source, or write
//! the baseline. Every mutation flows through the engine, so a profile on
//! disk is always fully reconciled.

use std::path::{Path, PathBuf};
use std::{fs, io};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use helm_config::{default_profile_path, load_profile, save_profile};
use helm_engine::{SettingsState, StoreView, render_bootstrap};
use helm_types::{AgentRole, MODEL_CATALOG, ModelId, ReasoningEffort, Verbosity, model_support};

#[derive(Parser)]
#[command(name = "helm", about = "Per-agent model configuration for Wayfarer")]
struct Cli {
    /// Profile path. Defaults to the user config directory.
    #[arg(long, global = true)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the baseline profile.
    Defaults,
    /// Show the resolved profile: mode, selection, and active options.
    Inspect,
    /// List the model catalog with each tier's capabilities.
    Models,
    /// Apply one or more edits to the profile, reconcile, and save.
    Set(SetArgs),
    /// Render the Wayfarer bootstrap source from the profile.
    Generate {
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct SetArgs {
    /// Action agent model.
    #[arg(long)]
    action: Option<String>,
    /// Curriculum agent model.
    #[arg(long)]
    curriculum: Option<String>,
    /// Curriculum QA model.
    #[arg(long)]
    curriculum_qa: Option<String>,
    /// Critic agent model.
    #[arg(long)]
    critic: Option<String>,
    /// Skill manager model.
    #[arg(long)]
    skill_manager: Option<String>,

    /// Apply one temperature to all five agents (0 to 2).
    #[arg(long)]
    temperature: Option<f64>,

    /// Reasoning effort: none, low, medium, high, xhigh.
    #[arg(long)]
    reasoning_effort: Option<String>,
    /// Verbosity: low, medium, high.
    #[arg(long)]
    verbosity: Option<String>,
    /// Store flag, shared by both schemas.
    #[arg(long)]
    store: Option<bool>,

    /// Legacy sampling temperature (0 to 2).
    #[arg(long)]
    legacy_temperature: Option<f64>,
    /// Legacy top-p (0 to 2).
    #[arg(long)]
    top_p: Option<f64>,
    /// Legacy max tokens; clamped to the selection's ceiling.
    #[arg(long)]
    max_tokens: Option<u32>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let path = match cli.profile {
        Some(path) => path,
        None => default_profile_path().context("no user config directory available")?,
    };

    match cli.command {
        Command::Defaults => write_defaults(&path),
        Command::Inspect => inspect(&path),
        Command::Models => {
            list_models();
            Ok(())
        }
        Command::Set(args) => apply_edits(&path, &args),
        Command::Generate { out } => generate(&path, out.as_deref()),
    }
}

fn load_or_default(path: &Path) -> Result<SettingsState> {
    if path.exists() {
        Ok(load_profile(path)?)
    } else {
        Ok(SettingsState::new())
    }
}

fn write_defaults(path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let state = SettingsState::new();
    save_profile(path, &state)?;
    println!("Wrote baseline profile to {}", path.display());
    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let state = load_profile(path)?;
    let resolution = state.resolution();

    println!("Profile: {}", path.display());
    println!(
        "Mode: {}",
        if resolution.is_modern() {
            "modern"
        } else {
            "legacy"
        }
    );
    println!();
    for (role, model) in state.selection().iter() {
        println!(
            "  {:<16} {}  (temperature {:.1})",
            role.display_name(),
            model.as_str(),
            state.temperature(role),
        );
    }
    println!();
    if resolution.is_modern() {
        let modern = state.modern();
        println!(
            "  reasoning effort: {}{}",
            modern.reasoning_effort,
            if resolution.reasoning_effort_enabled() {
                ""
            } else {
                " (not adjustable for this selection)"
            }
        );
        println!(
            "  verbosity:        {}{}",
            modern.verbosity,
            if resolution.verbosity_enabled() {
                ""
            } else {
                " (not adjustable for this selection)"
            }
        );
        if resolution.xhigh_available() {
            println!("  xhigh reasoning available");
        }
    } else {
        let legacy = state.legacy();
        println!("  temperature: {:.1}", legacy.temperature);
        println!("  top-p:       {:.1}", legacy.top_p);
        println!(
            "  max tokens:  {} (ceiling {})",
            legacy.max_tokens,
            resolution.max_tokens_ceiling()
        );
    }
    println!("  store:            {}", state.store());
    Ok(())
}

fn list_models() {
    for id in MODEL_CATALOG {
        let support = model_support(id);
        let mut traits = Vec::new();
        if helm_types::is_legacy(id) {
            traits.push("legacy");
        }
        if support.reasoning_effort {
            traits.push("reasoning effort");
        }
        if support.verbosity {
            traits.push("verbosity");
        }
        if support.xhigh_reasoning {
            traits.push("xhigh");
        }
        println!("  {id:<16} {}", traits.join(", "));
    }
}

fn apply_edits(path: &Path, args: &SetArgs) -> Result<()> {
    let mut state = load_or_default(path)?;

    let model_edits = [
        (AgentRole::Action, &args.action),
        (AgentRole::Curriculum, &args.curriculum),
        (AgentRole::CurriculumQa, &args.curriculum_qa),
        (AgentRole::Critic, &args.critic),
        (AgentRole::SkillManager, &args.skill_manager),
    ];
    for (role, raw) in model_edits {
        if let Some(raw) = raw {
            let model = ModelId::new(raw)
                .with_context(|| format!("invalid model for {}", role.display_name()))?;
            state.set_model(role, model);
        }
    }

    if let Some(temperature) = args.temperature {
        state.apply_temperature_to_all(temperature);
    }

    if let Some(raw) = &args.reasoning_effort {
        let effort = ReasoningEffort::parse(raw)
            .with_context(|| format!("invalid reasoning effort '{raw}'"))?;
        state.set_reasoning_effort(effort);
    }
    if let Some(raw) = &args.verbosity {
        let verbosity =
            Verbosity::parse(raw).with_context(|| format!("invalid verbosity '{raw}'"))?;
        state.set_verbosity(verbosity);
    }
    if let Some(store) = args.store {
        // The CLI stands in for whichever schema view is active.
        let origin = if state.resolution().is_modern() {
            StoreView::Modern
        } else {
            StoreView::Legacy
        };
        state.set_store(store, origin);
    }

    if let Some(temperature) = args.legacy_temperature {
        state.set_legacy_temperature(temperature);
    }
    if let Some(top_p) = args.top_p {
        state.set_top_p(top_p);
    }
    if let Some(max_tokens) = args.max_tokens {
        state.set_max_tokens(max_tokens);
    }

    ensure_parent(path)?;
    save_profile(path, &state)?;
    println!("Saved profile to {}", path.display());
    Ok(())
}

fn generate(path: &Path, out: Option<&Path>) -> Result<()> {
    let state = load_or_default(path)?;
    let code = render_bootstrap(&state);
    match out {
        Some(out) => {
            fs::write(out, &code).with_context(|| format!("failed to write {}", out.display()))?;
            println!("Wrote bootstrap source to {}", out.display());
        }
        None => print!("{code}"),
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(())
}
