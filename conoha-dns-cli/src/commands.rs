//! Command handlers
//!
//! Each handler runs one user request. Progress and diagnostics go to
//! stderr; listings and results go to stdout.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use conoha_dns_core::{CoreError, DomainService, RecordService, ServiceContext};
use conoha_dns_provider::{
    AuthToken, ConohaProvider, Credentials, ProviderError, TokenSource, authenticate,
};

use crate::args::{Commands, OutputFormat};
use crate::config::{ENV_FILE_NAME, Settings, persist_token};
use crate::render;

/// Services wired to an authenticated gateway.
struct Services {
    domains: Arc<DomainService>,
    records: RecordService,
}

/// Run `command` and report any failure on stderr.
pub async fn run(command: &Commands, format: OutputFormat, settings: &Settings) -> Result<()> {
    let token = obtain_token(settings).await?;
    if matches!(command, Commands::Auth) {
        println!("Authentication succeeded; an API token is available.");
        return Ok(());
    }

    let services = connect(settings, token)?;
    dispatch(command, format, &services).await
}

async fn obtain_token(settings: &Settings) -> Result<AuthToken> {
    if token_needs_grant(settings) {
        eprintln!("No API token found; requesting a new one...");
    }
    let token = authenticate(&settings.auth, &settings.provider).await?;

    if token.source == TokenSource::PasswordGrant {
        eprintln!("Obtained a new API token.");
        save_token(settings, &token.value);
    }
    Ok(token)
}

fn token_needs_grant(settings: &Settings) -> bool {
    !matches!(settings.auth.credentials, Credentials::Token(_))
}

/// A failed write is only a warning: the token still works for this run.
fn save_token(settings: &Settings, token: &str) {
    let Some(path) = settings.env_file.as_deref() else {
        log::warn!("No home directory; the API token was not saved");
        eprintln!("Warning: could not locate a home directory; save CONOHA_TOKEN manually.");
        return;
    };

    match persist_token(path, token) {
        Ok(()) => eprintln!("Saved CONOHA_TOKEN to {}.", path.display()),
        Err(e) => {
            log::warn!("Failed to write token to {}: {e}", path.display());
            eprintln!(
                "Warning: failed to write {}; save CONOHA_TOKEN manually. Error: {e}",
                path.display()
            );
        }
    }
}

fn connect(settings: &Settings, token: AuthToken) -> Result<Services> {
    let provider = ConohaProvider::new(&settings.provider, token.value)?;
    log::debug!("Using API endpoint {}", provider.base_url());
    let ctx = Arc::new(ServiceContext::new(Arc::new(provider)));
    let domains = Arc::new(DomainService::new(Arc::clone(&ctx)));
    let records = RecordService::new(ctx, Arc::clone(&domains));
    Ok(Services { domains, records })
}

async fn dispatch(command: &Commands, format: OutputFormat, services: &Services) -> Result<()> {
    match command {
        Commands::Auth => Ok(()),

        Commands::List { domain: None } => {
            let domains = services.domains.list_domains().await?;
            let (mut out, mut notes) = (io::stdout().lock(), io::stderr().lock());
            render::write_domains(&mut out, &mut notes, format, domains)?;
            Ok(())
        }

        Commands::List {
            domain: Some(identifier),
        } => {
            let domain_id = services.domains.resolve_domain_id(identifier).await?;
            let records = services.records.list_records(&domain_id).await?;
            let (mut out, mut notes) = (io::stdout().lock(), io::stderr().lock());
            render::write_records(&mut out, &mut notes, format, &records)?;
            Ok(())
        }

        Commands::AddDomain { name, email } => {
            eprintln!("Adding domain '{name}'...");
            let domain = services.domains.add_domain(name, email).await?;
            eprintln!("Domain added.");
            println!("  {}", render::describe_domain(&domain));
            Ok(())
        }

        Commands::DeleteDomain { domain } => {
            let target = services.domains.resolve_for_delete(domain).await?;
            eprintln!("Deleting domain '{}' (ID: {})...", target.name, target.id);
            services.domains.delete_resolved_domain(&target).await?;
            eprintln!("Domain deleted.");
            Ok(())
        }

        Commands::AddRecord(args) => {
            let new = args.new_record();
            eprintln!("Adding record '{}' to domain '{}'...", new.name, args.domain);
            let record = services.records.add_record(&args.domain, &new).await?;
            eprintln!("Record added.");
            println!("  {}", render::describe_record(&record));
            Ok(())
        }

        Commands::UpdateRecord(args) => {
            eprintln!("Updating record '{}'...", args.record_id);
            let record = services
                .records
                .update_record(&args.domain, &args.record_id, &args.overrides())
                .await?;
            eprintln!("Record updated.");
            println!("  {}", render::describe_record(&record));
            Ok(())
        }

        Commands::DeleteRecord { domain, record_id } => {
            let full_id = services.records.delete_record(domain, record_id).await?;
            eprintln!("Deleted record '{record_id}' (UUID: {full_id}).");
            Ok(())
        }
    }
}

/// Human-readable diagnostic for a failed command.
///
/// API failures show the status and the (pretty-printed) response body.
/// Configuration problems point at the env file.
pub fn describe_error(err: &anyhow::Error) -> String {
    let core = err.downcast_ref::<CoreError>();
    let provider = err
        .downcast_ref::<ProviderError>()
        .or_else(|| core.and_then(CoreError::provider_error));

    match provider {
        Some(ProviderError::ApiFailure { status, body }) => {
            let headline = match core {
                Some(CoreError::DomainDelete { name, id, .. }) => {
                    format!("failed to delete domain '{name}' (ID: {id})")
                }
                _ => "request failed".to_string(),
            };
            format!(
                "Error: {headline}.\nStatus code: {status}\nResponse: {}",
                body.pretty()
            )
        }
        Some(e) if e.is_configuration() => format!(
            "Error: {err}\nSet CONOHA_TOKEN, or CONOHA_USER_ID, CONOHA_PASSWORD and TENANT_ID, \
             in the environment or in ~/{ENV_FILE_NAME}."
        ),
        _ => format!("Error: {err}"),
    }
}

/// Whether the failure is ordinary (bad input, missing resource) rather
/// than a fault; decides the log level.
pub fn is_expected(err: &anyhow::Error) -> bool {
    if let Some(e) = err.downcast_ref::<CoreError>() {
        return e.is_expected();
    }
    if let Some(e) = err.downcast_ref::<ProviderError>() {
        return e.is_expected();
    }
    false
}

#[cfg(test)]
mod tests {
    use conoha_dns_provider::ErrorBody;

    use super::*;

    #[test]
    fn api_failure_shows_status_and_body() {
        let err = anyhow::Error::from(CoreError::Provider(ProviderError::ApiFailure {
            status: 404,
            body: ErrorBody::parse(r#"{"error":"not found"}"#),
        }));
        let text = describe_error(&err);
        assert!(text.contains("Status code: 404"));
        assert!(text.contains("\"error\": \"not found\""));
        assert!(is_expected(&err));
    }

    #[test]
    fn raw_text_body_is_shown_verbatim() {
        let err = anyhow::Error::from(ProviderError::ApiFailure {
            status: 502,
            body: ErrorBody::parse("Bad Gateway"),
        });
        assert!(describe_error(&err).ends_with("Response: Bad Gateway"));
        assert!(!is_expected(&err));
    }

    #[test]
    fn failed_domain_delete_names_target() {
        let err = anyhow::Error::from(CoreError::DomainDelete {
            name: "example.com.".to_string(),
            id: "dom-1111".to_string(),
            source: ProviderError::ApiFailure {
                status: 500,
                body: ErrorBody::parse("boom"),
            },
        });
        let text = describe_error(&err);
        assert!(
            text.starts_with("Error: failed to delete domain 'example.com.' (ID: dom-1111)."),
            "{text}"
        );
        assert!(text.contains("Status code: 500"));
        assert!(!is_expected(&err));
    }

    #[test]
    fn missing_credentials_point_at_env_file() {
        let err = anyhow::Error::from(ProviderError::MissingCredentials {
            missing: vec!["TENANT_ID".to_string()],
        });
        let text = describe_error(&err);
        assert!(text.contains("missing: TENANT_ID"));
        assert!(text.contains("~/.conoha-env"));
    }

    #[test]
    fn lookup_miss_is_plain_message() {
        let err = anyhow::Error::from(CoreError::DomainNotFound("nosuch.com".to_string()));
        assert_eq!(describe_error(&err), "Error: Domain not found: nosuch.com");
        assert!(is_expected(&err));
    }

    #[test]
    fn io_errors_are_unexpected() {
        let err = anyhow::Error::from(io::Error::other("broken pipe"));
        assert!(!is_expected(&err));
        assert_eq!(describe_error(&err), "Error: broken pipe");
    }
}
