use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ai_q::assessment::{self, Category, Question, QuestionBank, RngSource};
use ai_q::certificate::{self, Certificate, EXPORT_FAILED_MESSAGE};
use ai_q::config::{self, Config};
use ai_q::output::{self, OutputFormat};
use ai_q::share::{self, SharePlatform};

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_EXPORT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the interactive assessment (default if no subcommand)
    Take {
        /// Participant name (skips the name prompt)
        #[arg(long)]
        name: Option<String>,

        /// Questions drawn from each category
        #[arg(long)]
        per_category: Option<usize>,
    },
    /// List the question bank
    Questions {
        /// Only list one category (hustle, mindset, ethics)
        #[arg(long)]
        category: Option<Category>,

        /// Show one question with its options and weights
        #[arg(long)]
        id: Option<u32>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Draw one balanced sample of questions
    Sample {
        #[arg(long)]
        per_category: Option<usize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Score raw totals without taking the quiz
    Score {
        /// Sum of tech scores
        #[arg(long)]
        tech: u32,

        /// Sum of adaptability scores
        #[arg(long)]
        adapt: u32,

        /// Sum of ethics scores
        #[arg(long, default_value_t = 0)]
        ethics: u32,

        /// Number of questions answered
        #[arg(long, default_value_t = 12)]
        count: u32,

        /// Name printed on the certificate
        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also export an SVG certificate
        #[arg(long)]
        certificate: bool,

        /// Open a share link (whatsapp, linkedin)
        #[arg(long)]
        share: Option<SharePlatform>,
    },
    /// Create a config file interactively
    Init,
    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "ai-q")]
#[command(about = "AI-Q India: find your AI readiness archetype", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/ai-q/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Take {
        name: None,
        per_category: None,
    });
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = config::init::run_init_wizard(config_path) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match config::load_config(config_path.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(e) = ai_q::telemetry::init(&config.log_level, cli.verbose) {
        eprintln!("Config error: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    match config_path
        .or_else(|| config::get_config_path().ok())
        .filter(|path| path.exists())
    {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file, using defaults"),
    }

    // Validate config at startup
    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let bank = match load_bank(&config) {
        Ok(bank) => bank,
        Err(code) => std::process::exit(code),
    };

    let code = match command {
        Commands::Take { name, per_category } => {
            run_take(config, bank, name, per_category).await
        }
        Commands::Questions {
            category,
            id,
            format,
        } => run_questions(&bank, category, id, format),
        Commands::Sample {
            per_category,
            format,
        } => run_sample(&bank, per_category.unwrap_or(config.questions_per_category), format),
        Commands::Score {
            tech,
            adapt,
            ethics,
            count,
            name,
            format,
            certificate,
            share,
        } => run_score(
            &config,
            ScoreArgs {
                tech,
                adapt,
                ethics,
                count,
                name,
                format,
                certificate,
                share,
            },
        ),
        Commands::Contact {
            name,
            email,
            message,
        } => {
            let msg = ai_q::contact::ContactMessage::new(name, email, message);
            match ai_q::contact::submit(&msg) {
                Ok(()) => {
                    println!("Thanks, {}! Your message has been received.", msg.name.trim());
                    EXIT_SUCCESS
                }
                Err(e) => {
                    eprintln!("Contact form error: {}", e);
                    EXIT_USAGE
                }
            }
        }
        Commands::Init => EXIT_SUCCESS,
    };

    std::process::exit(code);
}

/// Load and validate the configured question bank, reporting every problem.
fn load_bank(config: &Config) -> Result<QuestionBank, i32> {
    let bank = match config::load_question_bank(config) {
        Ok(bank) => bank,
        Err(e) => {
            eprintln!("Question bank error: {:#}", e);
            return Err(EXIT_CONFIG);
        }
    };

    if let Err(errors) = assessment::validate_bank(bank.questions()) {
        eprintln!("Question bank errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(EXIT_CONFIG);
    }

    for (category, size) in bank.category_sizes() {
        if size < config.questions_per_category {
            tracing::warn!(
                %category,
                available = size,
                requested = config.questions_per_category,
                "category smaller than questions_per_category; all of it will be used"
            );
        }
    }

    Ok(bank)
}

async fn run_take(
    mut config: Config,
    bank: QuestionBank,
    name: Option<String>,
    per_category: Option<usize>,
) -> i32 {
    if let Some(name) = name {
        config.name = Some(name);
    }
    if let Some(n) = per_category {
        if n == 0 {
            eprintln!("--per-category must be at least 1");
            return EXIT_USAGE;
        }
        config.questions_per_category = n;
    }

    // Query the terminal background before raw mode takes over
    let theme = ai_q::tui::resolve_theme(config.theme);
    let app = ai_q::tui::App::new(config, bank, ai_q::tui::ThemeColors::for_theme(theme));

    match ai_q::tui::run_tui(app).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("TUI error: {:#}", e);
            EXIT_EXPORT
        }
    }
}

fn run_questions(
    bank: &QuestionBank,
    category: Option<Category>,
    id: Option<u32>,
    format: OutputFormat,
) -> i32 {
    let use_colors = output::should_use_colors();

    if let Some(id) = id {
        let Some(question) = bank.find(id) else {
            eprintln!("No question with id {}.", id);
            return EXIT_USAGE;
        };
        return print_output(format, question, || {
            output::format_question_detail(question, use_colors)
        });
    }

    let mut questions: Vec<Question> = bank
        .questions()
        .iter()
        .filter(|q| category.map_or(true, |c| q.category == c))
        .cloned()
        .collect();
    questions.sort_by_key(|q| q.id);

    print_output(format, &questions, || {
        output::format_question_list(&questions, use_colors)
    })
}

fn run_sample(bank: &QuestionBank, per_category: usize, format: OutputFormat) -> i32 {
    if per_category == 0 {
        eprintln!("--per-category must be at least 1");
        return EXIT_USAGE;
    }
    let questions = assessment::sample_questions(bank, per_category, &mut RngSource::thread());
    let use_colors = output::should_use_colors();

    print_output(format, &questions, || {
        questions
            .iter()
            .map(|q| output::format_question_detail(q, use_colors))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

struct ScoreArgs {
    tech: u32,
    adapt: u32,
    ethics: u32,
    count: u32,
    name: Option<String>,
    format: OutputFormat,
    certificate: bool,
    share: Option<SharePlatform>,
}

fn run_score(config: &Config, args: ScoreArgs) -> i32 {
    if args.count == 0 {
        eprintln!("--count must be at least 1");
        return EXIT_USAGE;
    }

    let mut random = RngSource::thread();
    let result = assessment::calculate_result(
        assessment::Totals::new(args.tech, args.adapt, args.ethics),
        args.count,
        &mut random,
    );

    let code = print_output(args.format, &result, || {
        output::format_result(&result, output::should_use_colors())
    });
    if code != EXIT_SUCCESS {
        return code;
    }

    if args.certificate {
        let name = args.name.or_else(|| config.name.clone()).unwrap_or_default();
        let today = chrono::Local::now().date_naive();
        let cert = Certificate::new(&name, &result, today, &mut random);
        match certificate::export_svg(&cert, &config.certificate_dir()) {
            Ok(path) => eprintln!("Certificate saved to {}", path.display()),
            Err(e) => {
                tracing::error!(error = %format!("{:#}", e), "certificate export failed");
                eprintln!("{}", EXPORT_FAILED_MESSAGE);
                return EXIT_EXPORT;
            }
        }
    }

    if let Some(platform) = args.share {
        if let Err(e) = share::share(platform, &result, &config.share_url) {
            eprintln!("Failed to open browser: {:#}", e);
            return EXIT_EXPORT;
        }
        eprintln!("Opened {} share link", platform);
    }

    EXIT_SUCCESS
}

/// Print `value` as JSON, or the text rendering produced by `text`.
fn print_output<T: serde::Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> i32 {
    match format {
        OutputFormat::Text => {
            println!("{}", text());
            EXIT_SUCCESS
        }
        OutputFormat::Json => match output::to_json(value) {
            Ok(json) => {
                println!("{}", json);
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to serialize output: {}", e);
                EXIT_EXPORT
            }
        },
    }
}
