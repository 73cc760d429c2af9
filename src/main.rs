use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use spring_source_generator::{
    catalog::FixtureCatalog,
    cli::{Cli, Commands},
    error::{CodeGenerationError, Severity},
    generator::generate_sources,
    packaging,
    request::{GenerationFailure, GenerationRequest},
};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(&error),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            tables,
            root_package,
            dto,
            service_repository,
            database,
            output,
            archive,
        } => {
            let request = GenerationRequest {
                table_names: tables,
                root_package,
                generate_dto: dto,
                generate_service_repository: service_repository,
            };

            generate(&request, database.as_deref(), &output, archive)
        }

        Commands::FromRequest {
            request_file,
            database,
            output,
            archive,
        } => {
            let request = GenerationRequest::from_toml_file(&request_file)?;

            generate(&request, database.as_deref(), &output, archive)
        }

        Commands::ListTables => {
            println!("Known fixture tables:\n");
            for name in FixtureCatalog::table_names() {
                println!("  {name}");
            }

            Ok(())
        }
    }
}

fn generate(
    request: &GenerationRequest,
    database: Option<&str>,
    output: &Path,
    archive: bool,
) -> Result<()> {
    let catalog = FixtureCatalog::new();
    let sources = generate_sources(&catalog, request, database)?;

    if archive {
        let file_name = packaging::resolve_output_file_name(&sources, "generated-sources")?;
        let payload = packaging::generate_payload(&sources)?;

        fs::create_dir_all(output)
            .with_context(|| format!("failed to create {}", output.display()))?;
        let path = output.join(&file_name);
        fs::write(&path, payload).with_context(|| format!("failed to write {}", path.display()))?;

        println!("Wrote {} ({} sources)", path.display(), sources.len());
        return Ok(());
    }

    for source in &sources {
        let path = output.join(packaging::source_file_path(source));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, &source.source_code)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    println!("Generated {} source file(s)", sources.len());
    Ok(())
}

/// Print the failure payload and map its severity to the exit code.
fn report_failure(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<CodeGenerationError>() {
        Some(generation_error) => {
            let failure = GenerationFailure::from(generation_error);
            match serde_json::to_string_pretty(&failure) {
                Ok(payload) => eprintln!("{payload}"),
                Err(_) => eprintln!("{generation_error}"),
            }

            match generation_error.severity() {
                Severity::ClientFault => ExitCode::from(1),
                Severity::ServerFault => ExitCode::from(2),
            }
        }
        None => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
