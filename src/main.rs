//! Cuneiform — compile task description files into prompts.
//!
//! Reads each source file, runs it through the compiler and prints the
//! requested stage. With `--execute` the prompt is also sent to the
//! configured model and the response printed.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use cuneiform::ai::Executor;
use cuneiform::dsl::{self, Compiler, TaskNode, Token};

/// Compile Cuneiform task descriptions into LLM prompts.
#[derive(Parser, Debug)]
#[command(name = "cuneiform")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source files to compile.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Pipeline stage to print.
    #[arg(long, value_enum, default_value_t = Emit::Prompt)]
    emit: Emit,

    /// Print tokens and AST as JSON.
    #[arg(long)]
    json: bool,

    /// Send the generated prompt to the model and print its response.
    #[arg(long)]
    execute: bool,

    /// AI config file (defaults to ~/.cuneiform/ai.yaml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the response token limit from the config.
    #[arg(long, value_name = "N")]
    max_tokens: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    Tokens,
    Ast,
    Prompt,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cuneiform=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let executor = if cli.execute {
        match build_executor(&cli) {
            Ok(executor) => Some(executor),
            Err(err) => {
                eprintln!("Error: {err:#}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        None
    };

    let mut failed = 0usize;
    for path in &cli.files {
        if cli.files.len() > 1 {
            println!("==> {} <==", path.display());
        }
        if let Err(err) = run_file(path, &cli, executor.as_deref()) {
            eprintln!("Error: {err:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        tracing::warn!(failed, total = cli.files.len(), "some files failed");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_file(path: &Path, cli: &Cli, executor: Option<&dyn Executor>) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let tokens = Compiler::tokenize(&source);
    tracing::info!(file = %path.display(), tokens = tokens.len(), "tokenized");
    if cli.emit == Emit::Tokens {
        print_tokens(&tokens, cli.json)?;
    }

    let program = dsl::parse(tokens).with_context(|| path.display().to_string())?;
    tracing::info!(file = %path.display(), tasks = program.len(), "parsed");
    if cli.emit == Emit::Ast {
        print_program(&program, cli.json)?;
    }

    let prompt = dsl::generate(&program);
    if cli.emit == Emit::Prompt {
        println!("{prompt}");
    }

    if let Some(executor) = executor {
        tracing::info!(file = %path.display(), "executing prompt");
        let response = executor
            .execute(&prompt)
            .with_context(|| format!("execution failed for {}", path.display()))?;
        println!("{response}");
    }

    Ok(())
}

fn print_tokens(tokens: &[Token], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tokens)?);
    } else {
        for token in tokens {
            println!("{token}");
        }
    }
    Ok(())
}

fn print_program(program: &[TaskNode], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(program)?);
    } else {
        for task in program {
            println!("{task}");
        }
    }
    Ok(())
}

#[cfg(feature = "llm")]
fn build_executor(cli: &Cli) -> Result<Box<dyn Executor>> {
    use cuneiform::ai::config;
    use cuneiform::ai::llm::LlmClient;

    let config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    let mut config = config.with_env_overrides();
    if let Some(max_tokens) = cli.max_tokens {
        config.max_tokens = max_tokens;
    }

    let client = LlmClient::new(config)?;
    tracing::info!(model = client.model(), format = ?client.api_format(), "executor ready");
    Ok(Box::new(client))
}

#[cfg(not(feature = "llm"))]
fn build_executor(_cli: &Cli) -> Result<Box<dyn Executor>> {
    anyhow::bail!("--execute requires building with the `llm` feature")
}
