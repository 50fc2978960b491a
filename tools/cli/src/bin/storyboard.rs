use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use storyboard_engine::{
    build_storyboard, CyclicClassifier, GenerationSettings, Panel, PlaceholderImages,
    RenderBackend, ReviewPanel, SceneAnalyzer, Script, StoryboardGrid, StoryboardRequest,
    StylePanel, TextRenderer, VisualStyle,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Storyboard scene analysis CLI")]
struct Cli {
    /// Settings file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = "storyboard.toml")]
    config: PathBuf,
    /// Print JSON instead of rendered text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a script into scenes and show their emotion tags.
    Review { script: PathBuf },
    /// Assemble storyboard frames for a script.
    Grid {
        script: PathBuf,
        #[arg(short, long, default_value = "cinematic")]
        style: String,
    },
    /// List the available visual styles.
    Styles {
        #[arg(long, default_value = "cinematic")]
        selected: String,
    },
    /// Print the effective generation settings.
    Settings,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli.config)?;
    let output = match cli.command {
        Command::Review { script } => review(&script, &settings, cli.json)?,
        Command::Grid { script, style } => grid(&script, &style, &settings, cli.json)?,
        Command::Styles { selected } => styles(&selected, cli.json)?,
        Command::Settings => settings.to_toml_string()?,
    };
    println!("{output}");
    Ok(())
}

fn load_settings(path: &Path) -> Result<GenerationSettings> {
    let mut settings = GenerationSettings::load_from(path)
        .with_context(|| format!("load settings {}", path.display()))?;
    settings
        .apply_env_overrides()
        .context("apply environment overrides")?;
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn read_script(path: &Path, settings: &GenerationSettings) -> Result<Script> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("read script from stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    };
    info!(bytes = raw.len(), "read script");
    Ok(Script::parse_with_limits(&raw, settings.script_limits())?)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize output")
}

fn review(path: &Path, settings: &GenerationSettings, json: bool) -> Result<String> {
    let script = read_script(path, settings)?;
    let limits = settings.script_limits();
    let analyzer = SceneAnalyzer::new(CyclicClassifier).with_limits(limits);
    let scenes = analyzer.analyze(script.source());
    if json {
        return to_json(&scenes);
    }
    let panel = ReviewPanel::from_scenes(&scenes, settings.review_preview_len);
    Ok(TextRenderer.render(Panel::Review(&panel)).text)
}

fn grid(path: &Path, style: &str, settings: &GenerationSettings, json: bool) -> Result<String> {
    let style: VisualStyle = style.parse()?;
    let script = read_script(path, settings)?;
    let request = StoryboardRequest::new(script.source(), style);
    let storyboard = build_storyboard(&request, settings, &PlaceholderImages)?;
    if json {
        return Ok(storyboard.to_json()?);
    }
    let grid = StoryboardGrid::from_items(&storyboard.storyboard, settings.grid_preview_len);
    Ok(TextRenderer.render(Panel::Grid(&grid)).text)
}

fn styles(selected: &str, json: bool) -> Result<String> {
    let panel = StylePanel::new(selected.parse()?);
    if json {
        return to_json(&panel);
    }
    Ok(TextRenderer.render(Panel::Styles(&panel)).text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("script.txt");
        fs::write(&path, body).expect("write script");
        path
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn review_renders_cards() {
        let dir = tempdir().expect("tempdir");
        let path = write_script(dir.path(), "Opening.\n\nChase.\n\nEnding.");
        let text = review(&path, &GenerationSettings::default(), false).expect("review");
        assert!(text.contains("Scene 3 [melancholic/secondary]"));
    }

    #[test]
    fn review_json_lists_scenes() {
        let dir = tempdir().expect("tempdir");
        let path = write_script(dir.path(), "Opening.\n\nChase.");
        let raw = review(&path, &GenerationSettings::default(), true).expect("review");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("parse json");
        assert_eq!(value[1]["emotion"], "joyful");
    }

    #[test]
    fn grid_rejects_unknown_style() {
        let dir = tempdir().expect("tempdir");
        let path = write_script(dir.path(), "Opening.");
        assert!(grid(&path, "sketch", &GenerationSettings::default(), false).is_err());
    }

    #[test]
    fn grid_rejects_blank_script() {
        let dir = tempdir().expect("tempdir");
        let path = write_script(dir.path(), "\n\n");
        assert!(grid(&path, "anime", &GenerationSettings::default(), true).is_err());
    }

    #[test]
    fn styles_marks_selection() {
        let text = styles("watercolor", false).expect("styles");
        assert!(text.contains("(*) Watercolor [watercolor]"));
    }
}
