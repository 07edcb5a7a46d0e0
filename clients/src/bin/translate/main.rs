//! `fedora-translate`: rewrites request bodies between external and internal identifiers.
//!
//! **Usage:**
//! ```text
//! fedora-translate [--config <file>] [--mode <strict|lenient|relaxed>] <command>
//!
//!   graph <file> --content-type <mt> --resource <uri>     client body -> internal N-Triples
//!   external <file> --content-type <mt> --resource <uri>  internal body -> external N-Triples
//!   update <file>                                         JSON update request -> internal SPARQL
//!   id to-internal <uri> | id to-external <id>
//! ```
//!
//! Exits non-zero if the body breaks a repository constraint.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod logger;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fedora_translate::parse::{parse_body, parse_update_json};
use fedora_translate::{
    graph, Config, ConstraintChecker, GraphTranslator, IdentifierTranslator, ModePolicy,
    RewriteError, UpdateRewriter,
};
use fedora_vocab::serializer::{ntriples, sparql};

/// Translate Fedora request bodies.
#[derive(Parser)]
#[command(
    name = "fedora-translate",
    about = "Translate RDF bodies and SPARQL updates between external URIs and internal identifiers"
)]
struct Args {
    /// TOML configuration file (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enforcement mode; overrides `[policy] mode` from the config.
    #[arg(long)]
    mode: Option<ModePolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a client RDF body to internal identifiers.
    Graph {
        /// Body file.
        file: PathBuf,
        /// Media type of the body.
        #[arg(long, default_value = "text/turtle")]
        content_type: String,
        /// External URI of the target resource; relative IRIs resolve against it.
        #[arg(long)]
        resource: Option<String>,
    },
    /// Translate an internal RDF body back to external URIs.
    External {
        /// Body file.
        file: PathBuf,
        /// Media type of the body.
        #[arg(long, default_value = "application/n-triples")]
        content_type: String,
        /// Base IRI for relative references.
        #[arg(long)]
        resource: Option<String>,
    },
    /// Rewrite a JSON-encoded SPARQL Update request.
    Update {
        /// Request file.
        file: PathBuf,
    },
    /// Translate a single identifier.
    Id {
        #[command(subcommand)]
        direction: Direction,
    },
}

#[derive(Subcommand)]
enum Direction {
    /// External URI to internal identifier.
    ToInternal {
        /// The URI.
        uri: String,
    },
    /// Internal identifier to external URI.
    ToExternal {
        /// The identifier.
        id: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    logger::initialize(&config.logger);

    let mode = args.mode.unwrap_or(config.policy.mode);
    let ids = config.identifier_translator()?;
    let checker = ConstraintChecker::new(config.policy_table());

    tracing::debug!(
        mode = %mode,
        external_base = ids.external_base(),
        internal_root = ids.internal_root(),
        "configuration loaded"
    );

    match args.command {
        Command::Graph {
            file,
            content_type,
            resource,
        } => {
            let body = read_bytes(&file)?;
            let parsed = parse_body(&body, &content_type, resource.as_deref())?;
            let result = GraphTranslator::new(checker).translate(parsed, &ids, mode);
            let translated = exit_on_violations(result)?;
            print!("{}", ntriples::to_ntriples(&translated));
        }
        Command::External {
            file,
            content_type,
            resource,
        } => {
            let body = read_bytes(&file)?;
            let parsed = parse_body(&body, &content_type, resource.as_deref())?;
            print!("{}", ntriples::to_ntriples(&graph::to_external(parsed, &ids)));
        }
        Command::Update { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let request = parse_update_json(&text)?;
            let result = UpdateRewriter::new(checker).rewrite(request, &ids, mode);
            let rewritten = exit_on_violations(result)?;
            println!("{}", sparql::to_sparql(&rewritten));
        }
        Command::Id { direction } => print_id(&ids, direction)?,
    }

    Ok(())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("reading {}", path.display()))
}

fn print_id(ids: &IdentifierTranslator, direction: Direction) -> Result<()> {
    match direction {
        Direction::ToInternal { uri } => println!("{}", ids.to_internal(&uri)?),
        Direction::ToExternal { id } => println!("{}", ids.to_external(&id)),
    }
    Ok(())
}

/// Prints a constraint report and exits 1; other errors propagate.
fn exit_on_violations<T>(result: Result<T, RewriteError>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(RewriteError::Constraint(report)) => {
            eprintln!("Constraint violations");
            eprintln!("=====================");
            for violation in &report {
                eprintln!("  [{}] {}", violation.kind.as_str(), violation.statement);
                eprintln!("        {}", violation.message);
            }
            eprintln!();
            eprintln!("{} violation(s)", report.len());
            process::exit(1);
        }
        Err(other) => Err(other.into()),
    }
}
