use std::{collections::HashMap, time::Duration};

use redshift_core::{
    config,
    err::{Context, Result},
};
use serde::{Deserialize, Serialize};

use crate::TlsConfig;

/// The connection config for the Redshift JDBC driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedshiftJdbcConnectionConfig {
    /// The JDBC connection URL, eg "jdbc:redshift://host:5439/db"
    pub jdbc_url: String,
    /// Connection username
    pub user: Option<String>,
    /// Connection password
    pub password: Option<String>,
    /// Driver options
    pub options: Option<RedshiftJdbcOptions>,
    /// Connection pool config, passed through to the pooling layer untouched
    pub pool: Option<JdbcConnectionPoolConfig>,
    /// Which statement executions request generated keys from the driver
    #[serde(default)]
    pub request_generated_keys: RequestGeneratedKeys,
}

impl RedshiftJdbcConnectionConfig {
    pub fn new(
        jdbc_url: String,
        user: Option<String>,
        password: Option<String>,
        options: Option<RedshiftJdbcOptions>,
        pool: Option<JdbcConnectionPoolConfig>,
    ) -> Self {
        Self {
            jdbc_url,
            user,
            password,
            options,
            pool,
            request_generated_keys: RequestGeneratedKeys::default(),
        }
    }

    pub fn parse(options: config::Value) -> Result<Self> {
        config::from_value::<Self>(options)
            .context("Failed to parse connection configuration options")
    }
}

/// Additional driver options for the Redshift JDBC driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RedshiftJdbcOptions {
    /// Datasource class name used instead of the default driver datasource
    pub datasource_name: Option<String>,
    /// Driver connection properties
    /// @see https://docs.aws.amazon.com/redshift/latest/mgmt/jdbc20-configuration-options.html
    #[serde(default)]
    pub properties: HashMap<String, String>,
    /// TLS options
    pub tls: Option<TlsConfig>,
}

/// Options for pooling the JDBC connections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdbcConnectionPoolConfig {
    /// Minimum number of connections
    pub min_cons: u32,
    /// Maximum number of connections
    pub max_cons: u32,
    /// Maximum connection lifetime
    pub max_lifetime: Option<Duration>,
    /// How long a connection can remain idle before closing
    pub idle_timeout: Option<Duration>,
    /// Maximum connection timeout
    pub connect_timeout: Option<Duration>,
}

/// Which statement execution modes ask the driver to return generated keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestGeneratedKeys {
    #[default]
    All,
    Execute,
    BatchExecute,
}

impl RequestGeneratedKeys {
    /// Whether single statement executions request generated keys
    pub fn for_execute(&self) -> bool {
        matches!(self, Self::All | Self::Execute)
    }

    /// Whether batched statement executions request generated keys
    pub fn for_batch_execute(&self) -> bool {
        matches!(self, Self::All | Self::BatchExecute)
    }
}
