use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{expand_home, get_config_path, validate_config, Config, ThemeMode};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    Ok(parse_yes_no(&input, default_yes))
}

fn parse_yes_no(input: &str, default_yes: bool) -> bool {
    let input = input.to_lowercase();
    if input.is_empty() {
        default_yes
    } else {
        input == "y" || input == "yes"
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

fn parse_per_category(input: &str) -> Result<usize, String> {
    match input.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err("must be a whole number".to_string()),
    }
}

fn parse_theme(input: &str) -> Result<ThemeMode, String> {
    match input.to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "dark" => Ok(ThemeMode::Dark),
        "light" => Ok(ThemeMode::Light),
        other => Err(format!("unknown theme '{}' (expected auto, dark or light)", other)),
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    let defaults = Config::default();

    println!();
    typewriter("AI-Q India Configuration Wizard");
    println!("===============================");
    println!();

    // 1. Participant
    typewriter("Your name goes on the certificate. Leave it blank to be asked each time.");
    let name = prompt("Name: ")?;
    let name = if name.is_empty() { None } else { Some(name) };

    // 2. Assessment length
    println!();
    typewriter("Each assessment draws the same number of questions from hustle, mindset and ethics.");
    typewriter("Four per category gives the standard 12-question assessment.");
    let questions_per_category = loop {
        let input = prompt_with_default(
            "Questions per category",
            &defaults.questions_per_category.to_string(),
        )?;
        match parse_per_category(&input) {
            Ok(n) => break n,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    // 3. Analysis pause
    println!();
    typewriter("The result is revealed after a short analysis pause (e.g., '3s', '500ms', '0s').");
    let analysis_delay = loop {
        let input = prompt_with_default("Analysis delay", &defaults.analysis_delay)?;
        match humantime::parse_duration(&input) {
            Ok(_) => break input,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    // 4. Sharing and certificates
    println!();
    let share_url = loop {
        let input = prompt_with_default("Link included in share messages", &defaults.share_url)?;
        if input.starts_with("https://") || input.starts_with("http://") {
            break input;
        }
        println!("  Invalid: must start with http:// or https://. Try again.");
    };
    let certificate_dir = prompt_with_default("Where should certificates be saved?", ".")?;
    let certificate_dir = if certificate_dir == "." {
        None
    } else {
        Some(PathBuf::from(certificate_dir))
    };

    // 5. Theme
    println!();
    let theme = loop {
        let input = prompt_with_default("Theme (auto, dark, light)", "auto")?;
        match parse_theme(&input) {
            Ok(theme) => break theme,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    // 6. Config path
    let default_config_path = match default_path {
        Some(path) => path,
        None => get_config_path()?,
    };
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = expand_home(Path::new(&path_str));

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 7. Write config
    let config = Config {
        name,
        questions_per_category,
        analysis_delay,
        share_url,
        certificate_dir,
        theme,
        ..defaults
    };
    if let Err(errors) = validate_config(&config) {
        anyhow::bail!("Generated config is invalid:\n  {}", errors.join("\n  "));
    }

    write_config(&config, &config_path)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `ai-q` to take the assessment.");

    Ok(())
}

/// Serialize `config` as YAML and write it atomically, creating parent directories.
pub fn write_config(config: &Config, path: &std::path::Path) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = atomic_write_file::AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("", true));
        assert!(!parse_yes_no("", false));
        assert!(parse_yes_no("YES", false));
        assert!(!parse_yes_no("nope", true));
    }

    #[test]
    fn test_parse_per_category() {
        assert_eq!(parse_per_category("6"), Ok(6));
        assert!(parse_per_category("0").is_err());
        assert!(parse_per_category("four").is_err());
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse_theme("Dark"), Ok(ThemeMode::Dark));
        assert!(parse_theme("solarized").is_err());
    }

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config {
            name: Some("Arjun Mehta".to_string()),
            questions_per_category: 5,
            theme: ThemeMode::Light,
            ..Config::default()
        };
        write_config(&config, &path).unwrap();
        assert_eq!(load_config(Some(path)).unwrap(), config);
    }

    #[test]
    fn test_home_relative_certificate_dir_kept_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let config = Config {
            certificate_dir: Some(PathBuf::from("~/Pictures")),
            ..Config::default()
        };
        write_config(&config, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("~/Pictures"));
        let loaded = load_config(Some(path)).unwrap();
        assert_eq!(
            loaded.certificate_dir(),
            dirs::home_dir().unwrap().join("Pictures")
        );
        assert!(!dir.path().join("~").exists());
    }
}
