use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Property keys understood by the Redshift JDBC driver
pub mod props {
    pub const SSL: &str = "ssl";
    pub const SSL_MODE: &str = "sslmode";
    pub const SSL_KEY: &str = "sslkey";
    pub const SSL_CERT: &str = "sslcert";
    pub const SSL_PASSWORD: &str = "sslpassword";
    pub const SSL_ROOT_CERT: &str = "sslrootcert";
}

/// TLS options for the connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Verification level, forwarded to the driver's `sslmode` property
    #[serde(default)]
    pub mode: TlsMode,
    /// Client identity key material
    pub key: Option<KeyMaterial>,
    /// Path of the root certificate used to verify the server
    pub root_cert: Option<String>,
}

/// The TLS modes supported by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TlsMode {
    Disable,
    Allow,
    Prefer,
    Require,
    // verify-ca is the driver default
    #[default]
    VerifyCa,
    VerifyFull,
}

impl TlsMode {
    /// The mode token as the driver expects it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Allow => "allow",
            Self::Prefer => "prefer",
            Self::Require => "require",
            Self::VerifyCa => "verify-ca",
            Self::VerifyFull => "verify-full",
        }
    }

    pub fn is_disabled(&self) -> bool {
        *self == Self::Disable
    }
}

/// Client key material, either a java keystore or a PEM cert/key pair.
///
/// The shape is decided once when the config is parsed. The keystore
/// variant is listed first so a mapping carrying both store and PEM
/// fields resolves as a keystore, while a PEM pair can never be misread
/// as a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyMaterial {
    Keystore {
        store_path: String,
        store_password: String,
    },
    CertKey {
        cert_file: String,
        key_file: String,
        key_password: Option<String>,
    },
}

/// Derives the driver `ssl*` properties from the TLS config.
///
/// When TLS is absent or disabled no key material or root cert is
/// forwarded, even if supplied.
pub fn derive_tls_properties(tls: Option<&TlsConfig>) -> HashMap<String, String> {
    let mut props = HashMap::new();

    let tls = match tls {
        Some(tls) => tls,
        None => {
            props.insert(props::SSL.into(), "false".into());
            return props;
        }
    };

    props.insert(props::SSL_MODE.into(), tls.mode.as_str().into());

    if tls.mode.is_disabled() {
        props.insert(props::SSL.into(), "false".into());
        return props;
    }

    props.insert(props::SSL.into(), "true".into());

    match tls.key.as_ref() {
        Some(KeyMaterial::Keystore {
            store_path,
            store_password,
        }) => {
            props.insert(props::SSL_KEY.into(), store_path.clone());
            props.insert(props::SSL_PASSWORD.into(), store_password.clone());
        }
        Some(KeyMaterial::CertKey {
            cert_file,
            key_file,
            key_password,
        }) => {
            props.insert(props::SSL_CERT.into(), cert_file.clone());
            props.insert(props::SSL_KEY.into(), key_file.clone());
            if let Some(key_password) = key_password {
                props.insert(props::SSL_PASSWORD.into(), key_password.clone());
            }
        }
        None => {}
    }

    if let Some(root_cert) = tls.root_cert.as_ref() {
        props.insert(props::SSL_ROOT_CERT.into(), root_cert.clone());
    }

    props
}
