//! AWS Secrets Manager store.
//!
//! Enable with `--features aws` (on by default).
//!
//! Credentials and region come from the default provider chain
//! (`AWS_ACCESS_KEY_ID`, `AWS_REGION`, web identity, ...), usually set up
//! by an earlier `configure-aws-credentials` step.

use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{AppName, BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_secretsmanager::types::{Filter, FilterNameStringType};
use std::time::Duration;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{SecretPage, SecretStore, SecretValue};
use crate::core::config::Settings;
use crate::core::constants;
use crate::error::{Result, StoreError};

/// Secrets Manager client driven from a private current-thread runtime.
pub struct AwsStore {
    client: aws_sdk_secretsmanager::Client,
    rt: tokio::runtime::Runtime,
}

impl AwsStore {
    /// Build a client from the run settings.
    ///
    /// The connect timeout comes from `settings.timeout_ms`. Retries are
    /// disabled so a transient failure surfaces as a per-secret error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the async runtime cannot start.
    pub fn connect(settings: &Settings) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(format!("failed to create runtime: {}", e)))?;

        if let Some(proxy) = &settings.http_proxy {
            // The SDK's default HTTP client picks proxies up from the environment.
            std::env::set_var("HTTPS_PROXY", proxy);
            std::env::set_var("HTTP_PROXY", proxy);
        }

        let client = rt.block_on(async {
            let timeouts = TimeoutConfig::builder()
                .connect_timeout(Duration::from_millis(settings.timeout_ms))
                .build();

            let mut loader = aws_config::defaults(BehaviorVersion::latest())
                .timeout_config(timeouts)
                .retry_config(RetryConfig::disabled());

            if let Ok(app_name) = AppName::new(constants::APP_NAME) {
                loader = loader.app_name(app_name);
            }
            if let Some(region) = &settings.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(endpoint) = &settings.endpoint_url {
                loader = loader.endpoint_url(endpoint);
            }

            let config = loader.load().await;
            debug!(
                region = ?config.region().map(|r| r.as_ref().to_string()),
                timeout_ms = settings.timeout_ms,
                "secrets manager client ready"
            );
            aws_sdk_secretsmanager::Client::new(&config)
        });

        Ok(Self { client, rt })
    }
}

/// Map an SDK failure onto the store error taxonomy by error code.
fn classify<E>(secret_id: &str, err: &E) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    match err.code() {
        Some("ResourceNotFoundException") => StoreError::NotFound(secret_id.to_string()),
        Some("AccessDeniedException") => StoreError::AccessDenied {
            id: secret_id.to_string(),
            message: err.message().unwrap_or("access denied").to_string(),
        },
        _ => StoreError::Request {
            id: secret_id.to_string(),
            message: DisplayErrorContext(err).to_string(),
        },
    }
}

impl SecretStore for AwsStore {
    fn get_secret_value(&self, secret_id: &str) -> Result<SecretValue> {
        trace!(secret_id, "GetSecretValue");

        let output = self
            .rt
            .block_on(
                self.client
                    .get_secret_value()
                    .secret_id(secret_id)
                    .send(),
            )
            .map_err(|e| classify(secret_id, &e))?;

        Ok(SecretValue {
            name: output.name().map(str::to_string),
            string: output
                .secret_string()
                .map(|s| Zeroizing::new(s.to_string())),
            binary: output
                .secret_binary()
                .map(|blob| Zeroizing::new(blob.as_ref().to_vec())),
        })
    }

    fn list_secrets(&self, name_filter: &str, max_results: i32) -> Result<SecretPage> {
        trace!(name_filter, max_results, "ListSecrets");

        let filter = Filter::builder()
            .key(FilterNameStringType::Name)
            .values(name_filter)
            .build();

        let output = self
            .rt
            .block_on(
                self.client
                    .list_secrets()
                    .filters(filter)
                    .max_results(max_results)
                    .send(),
            )
            .map_err(|e| classify(name_filter, &e))?;

        let names = output
            .secret_list()
            .iter()
            .filter_map(|entry| entry.name().map(str::to_string))
            .collect();

        Ok(SecretPage {
            names,
            has_more: output.next_token().is_some_and(|t| !t.is_empty()),
        })
    }
}
