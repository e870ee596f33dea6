use clap::Args;

use jwk::{ConvertOptions, Jwk, KeyType};

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the PEM file. If not specified, reads from stdin
    pub(crate) file: Option<String>,

    /// Requested key type. Defaults to the type of the input key
    #[arg(long = "type", value_enum)]
    pub(crate) key_type: Option<KeyTypeArg>,

    /// Extra JWK member as KEY=VALUE. The value is parsed as JSON, falling
    /// back to a plain string. May be repeated
    #[arg(long = "extra", value_name = "KEY=VALUE")]
    pub(crate) extras: Vec<String>,

    /// Output format (json, yaml)
    #[arg(short, long, default_value = "json")]
    pub(crate) output: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum KeyTypeArg {
    /// Emit only the public members (n, e)
    Public,
    /// Emit the full private key, requires a private key input
    Private,
}

impl From<KeyTypeArg> for KeyType {
    fn from(value: KeyTypeArg) -> Self {
        match value {
            KeyTypeArg::Public => KeyType::Public,
            KeyTypeArg::Private => KeyType::Private,
        }
    }
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let contents = read_input(config.file.as_deref())?;

    let mut options = ConvertOptions::new();
    if let Some(key_type) = config.key_type {
        options = options.key_type(key_type.into());
    }
    for pair in &config.extras {
        let (key, value) = parse_extra(pair)?;
        options = options.extra_key(key, value);
    }

    let jwk = Jwk::from_pem_with(&contents, options)?;

    match config.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&jwk)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yml::to_string(&jwk)?);
        }
    }

    Ok(())
}

/// Split a KEY=VALUE argument. The value side is taken as JSON when it
/// parses, as a plain string otherwise.
fn parse_extra(pair: &str) -> Result<(String, serde_json::Value)> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| Error::InvalidInput(format!("expected KEY=VALUE, got '{}'", pair)))?;
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
