// Connector config shim for AWS Redshift, built on their JDBC driver.
// This crate normalises the user-supplied connection config into the
// url/properties bundle the driver expects; opening, pooling and closing
// connections is delegated to the underlying JDBC client.

mod conf;
pub use conf::*;
mod tls;
pub use tls::*;
mod params;
pub use params::*;
