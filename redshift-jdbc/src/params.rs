use std::collections::HashMap;

use itertools::Itertools;
use lazy_static::lazy_static;
use redshift_core::err::{bail, Result};
use redshift_logging::debug;
use regex::Regex;

use crate::{
    derive_tls_properties, JdbcConnectionPoolConfig, RedshiftJdbcConnectionConfig,
    RequestGeneratedKeys,
};

/// Key installed on the pool layer for a connection acquire timeout override
pub const POOL_CONNECTION_TIMEOUT: &str = "ConnectionTimeout";

lazy_static! {
    // Matches driver property keys carrying a connect timeout,
    // eg "connectTimeout", "connect_timeout"
    static ref CONNECT_TIMEOUT_KEY: Regex = Regex::new(r".*connect.*timeout.*").unwrap();
}

/// The normalised parameter bundle handed to the underlying JDBC client
#[derive(Debug, Clone, PartialEq)]
pub struct JdbcConnectionParams {
    /// The JDBC connection URL
    pub jdbc_url: String,
    /// Connection username
    pub user: Option<String>,
    /// Connection password
    pub password: Option<String>,
    /// Datasource class name override
    pub datasource_name: Option<String>,
    /// Flattened driver properties, user-supplied merged with TLS-derived
    pub properties: HashMap<String, String>,
    /// Pool-level connection timeout override, kept separate from
    /// the driver properties
    pub pool_timeout_override: Option<(String, String)>,
    /// Pool config passed through untouched
    pub pool: Option<JdbcConnectionPoolConfig>,
    /// Generated key retrieval modes passed through untouched
    pub request_generated_keys: RequestGeneratedKeys,
}

/// Checks the url is non-empty and carries the `jdbc:` scheme prefix.
///
/// This is a syntactic sanity check only, anything past the prefix is
/// the driver's to validate.
pub fn is_jdbc_url_valid(jdbc_url: &str) -> bool {
    !jdbc_url.is_empty() && jdbc_url.trim().starts_with("jdbc:")
}

/// Finds a connect-timeout property to install as a pool-level override.
///
/// Keys are matched case-insensitively. When multiple keys match, the
/// lexicographically smallest key wins so the result is deterministic.
pub fn extract_pool_timeout(properties: &HashMap<String, String>) -> Option<(String, String)> {
    properties
        .iter()
        .filter(|(key, _)| CONNECT_TIMEOUT_KEY.is_match(&key.to_lowercase()))
        .sorted_by_key(|(key, _)| key.to_lowercase())
        .next()
        .map(|(_, val)| (POOL_CONNECTION_TIMEOUT.to_string(), val.clone()))
}

impl RedshiftJdbcConnectionConfig {
    /// Builds the parameter bundle passed to the underlying JDBC client.
    ///
    /// Driver properties are seeded from the user-supplied properties and
    /// the TLS-derived properties are applied on top, so TLS settings win
    /// on key conflict. A fresh bundle is allocated on every call.
    pub fn build_connection_params(&self) -> Result<JdbcConnectionParams> {
        if !is_jdbc_url_valid(&self.jdbc_url) {
            bail!("Invalid JDBC URL: {}", self.jdbc_url);
        }

        let options = self.options.clone().unwrap_or_default();

        let mut properties = options.properties;
        let pool_timeout_override = extract_pool_timeout(&properties);

        properties.extend(derive_tls_properties(options.tls.as_ref()));

        debug!(
            "Normalised {} connection properties for the JDBC client",
            properties.len()
        );

        Ok(JdbcConnectionParams {
            jdbc_url: self.jdbc_url.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            datasource_name: options.datasource_name,
            properties,
            pool_timeout_override,
            pool: self.pool.clone(),
            request_generated_keys: self.request_generated_keys,
        })
    }
}
