//! Rendering and parsing of the console server configuration document.
use std::io::Write;

use serde::Serialize;
use snafu::{ResultExt, Snafu};

use crate::{config::Config, emission};

type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents every error which can be encountered during YAML (de)serialization.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to convert the configuration into a YAML value"))]
    ConvertToValue { source: serde_yaml::Error },

    #[snafu(display("failed to serialize YAML"))]
    SerializeYaml { source: serde_yaml::Error },

    #[snafu(display("failed to write YAML document separator"))]
    WriteDocumentSeparator { source: std::io::Error },

    #[snafu(display("failed to parse bytes as valid UTF-8 string"))]
    ParseUtf8Bytes { source: std::string::FromUtf8Error },

    #[snafu(display("failed to deserialize the configuration document"))]
    DeserializeYaml { source: serde_yaml::Error },
}

/// Provides configurable options during YAML serialization.
pub struct SerializeOptions {
    /// Adds leading triple dashes (`---`) to the output string.
    pub explicit_document: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            explicit_document: true,
        }
    }
}

/// Serializes `config` and writes it to a [`Writer`](Write).
///
/// Fields are emitted according to [`emission::FIELD_EMISSION`].
pub fn serialize<W>(config: &Config, mut writer: W, options: SerializeOptions) -> Result<()>
where
    W: Write,
{
    let mut document = serde_yaml::to_value(config).context(ConvertToValueSnafu)?;
    emission::apply(&mut document);

    if options.explicit_document {
        writer
            .write_all(b"---\n")
            .context(WriteDocumentSeparatorSnafu)?;
    }

    let mut serializer = serde_yaml::Serializer::new(writer);
    document
        .serialize(&mut serializer)
        .context(SerializeYamlSnafu)
}

/// Renders `config` as an explicit YAML document.
pub fn to_document(config: &Config) -> Result<String> {
    let mut buffer = Vec::new();
    serialize(config, &mut buffer, SerializeOptions::default())?;
    String::from_utf8(buffer).context(ParseUtf8BytesSnafu)
}

/// Parses a configuration document. Omitted fields take their zero value.
pub fn from_document(document: &str) -> Result<Config> {
    serde_yaml::from_str(document).context(DeserializeYamlSnafu)
}
