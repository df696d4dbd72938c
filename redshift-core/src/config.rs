use anyhow::{Context, Result};
use serde::Deserialize;
use serde_yaml::Deserializer;

pub use serde_yaml::{from_value, Mapping, Number, Sequence, Value};

/// Parses the supplied string as a config value
pub fn parse_config<'a>(conf_str: impl Into<&'a str>) -> Result<Value> {
    Value::deserialize(Deserializer::from_str(conf_str.into()))
        .context("Failed to parse configuration yaml")
}
