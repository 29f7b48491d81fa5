use jsub_lexer::config::RuntimeConfig;
use jsub_lexer::file_processor;
use jsub_lexer::lexical::{self, LexicalAnalyzer, TokenCounts};
use jsub_lexer::logging;
use jsub_lexer::tokens::LexOutput;
use std::env;

const SAMPLE_PROGRAM: &str = include_str!("../samples/PotionBrewer.java");

#[derive(Debug, Default)]
struct CliOptions {
    input: Option<String>,
    config: Option<String>,
    json: bool,
    comments: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("jsub_lexer");

    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_help(program);
        return Ok(());
    }

    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: {} [FILE] [--json] [--comments] [--config FILE]", program);
            std::process::exit(2);
        }
    };

    let mut config = match &options.config {
        Some(path) => RuntimeConfig::load(path).unwrap_or_else(|error| {
            eprintln!("Error [{}]: {}", error.error_code(), error);
            std::process::exit(1);
        }),
        None => RuntimeConfig::default(),
    }
    .with_env_overrides();
    if options.comments {
        config.lexical.retain_comments = true;
    }

    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    lexical::init_lexical_analysis_logging()?;

    let mut analyzer = LexicalAnalyzer::with_preferences(config.lexical);
    let output = match &options.input {
        Some(path) => {
            let file = file_processor::read_source(path).unwrap_or_else(|error| {
                eprintln!(
                    "Error [{}] ({}): {}",
                    error.error_code(),
                    error.severity(),
                    error
                );
                std::process::exit(1);
            });
            analyzer.tokenize_file(&file)
        }
        None => analyzer.tokenize(SAMPLE_PROGRAM),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&output);
    }

    // each Error token was already logged with its position
    if let Some(summary) = error_summary(&output) {
        eprintln!("{}", summary);
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--comments" => options.comments = true,
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--config requires a file path".to_string())?;
                options.config = Some(path.clone());
            }
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option '{}'", flag));
            }
            path => {
                if options.input.is_some() {
                    return Err(format!("Unexpected extra argument '{}'", path));
                }
                options.input = Some(path.to_string());
            }
        }
    }

    Ok(options)
}

fn print_report(output: &LexOutput) {
    println!("=== Tokens ===");
    for token in output.tokens() {
        println!("{}", token);
    }
    println!();
    print!("{}", output.symbols().render());
}

/// Error tokens do not fail the run; only a count is added to the log output
fn error_summary(output: &LexOutput) -> Option<String> {
    if !output.has_errors() {
        return None;
    }
    let counts = TokenCounts::from_tokens(output.tokens());
    Some(format!(
        "{} lexical error(s) in {} token(s)",
        counts.errors,
        counts.total()
    ))
}

fn print_help(program_name: &str) {
    println!("jsub_lexer v{}", env!("CARGO_PKG_VERSION"));
    println!("Lexical analyzer for a Java language subset");
    println!();
    println!("USAGE:");
    println!("    {} [FILE] [OPTIONS]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    [FILE]    Source file to tokenize (default: bundled PotionBrewer sample)");
    println!();
    println!("OPTIONS:");
    println!("    --help              Show this help message");
    println!("    --json              Print tokens and symbol table as JSON");
    println!("    --comments          Keep comments as COMMENT tokens");
    println!("    --config FILE       Load runtime preferences from a TOML file");
    println!();
    println!("ENVIRONMENT:");
    println!("    JSUB_LEXICAL_RETAIN_COMMENTS   Keep comments (true/false)");
    println!("    JSUB_LOGGING_MIN_LEVEL         error, warning, info, or debug");
    println!("    JSUB_LOGGING_USE_STRUCTURED    Emit JSON log lines (true/false)");
    println!();
    println!("EXIT STATUS:");
    println!("    0 when the input was read, even if it contains lexical errors");
    println!("    non-zero when the input or configuration file cannot be read");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_summary() {
        assert_eq!(error_summary(&lexical::tokenize("int x;")), None);

        let output = lexical::tokenize("x # y \"open");
        assert_eq!(
            error_summary(&output).as_deref(),
            Some("2 lexical error(s) in 4 token(s)")
        );
    }

    #[test]
    fn test_parse_args() {
        let args: Vec<String> = ["Main.java", "--json", "--config", "c.toml"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let options = parse_args(&args).unwrap();
        assert_eq!(options.input.as_deref(), Some("Main.java"));
        assert_eq!(options.config.as_deref(), Some("c.toml"));
        assert!(options.json);
        assert!(!options.comments);

        assert!(parse_args(&["--config".to_string()]).is_err());
        assert!(parse_args(&["--verbose".to_string()]).is_err());
    }
}
