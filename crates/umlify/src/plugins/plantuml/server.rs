//! PlantUML server URLs
//!
//! A PlantUML server renders markup addressed by URL: the text is
//! raw-deflated, then written in PlantUML's own base64 alphabet.

use std::io::Write;

use base64::alphabet::Alphabet;
use base64::engine::{general_purpose, GeneralPurpose};
use base64::Engine;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use tracing::{debug, span, Level};

use crate::core::{DiagramService, ServerConfig, UmlError};

const PLANTUML_ALPHABET: Alphabet =
    match Alphabet::new("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-_") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid PlantUML alphabet"),
    };

const PLANTUML_ENGINE: GeneralPurpose =
    GeneralPurpose::new(&PLANTUML_ALPHABET, general_purpose::NO_PAD);

/// Symbol for a zero sextet, used to complete the final group
const ZERO_SYMBOL: char = '0';

/// Encode bytes in 3-byte groups of four symbols
///
/// A short final group is completed with zero symbols, so the output length
/// is always a multiple of four.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut encoded = PLANTUML_ENGINE.encode(bytes);
    while encoded.len() % 4 != 0 {
        encoded.push(ZERO_SYMBOL);
    }
    encoded
}

/// Compress and encode markup for use in a server URL
pub fn encode_markup(markup: &str) -> Result<String, UmlError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(markup.as_bytes())
        .map_err(|e| UmlError::encoding_error(format!("deflate failed: {}", e)))?;
    let compressed = encoder
        .finish()
        .map_err(|e| UmlError::encoding_error(format!("deflate failed: {}", e)))?;

    Ok(encode_bytes(&compressed))
}

/// Diagram service backed by a PlantUML server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantUmlServer {
    config: ServerConfig,
}

impl PlantUmlServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

impl DiagramService for PlantUmlServer {
    fn diagram_url(&self, markup: &str) -> anyhow::Result<String> {
        let url_span = span!(Level::INFO, "diagram_url", server = %self.config.url);
        let _enter = url_span.enter();

        let encoded = encode_markup(markup)?;
        let url = format!(
            "{}/{}/{}",
            self.config.url.trim_end_matches('/'),
            self.config.format.as_str(),
            encoded
        );

        debug!(encoded_len = encoded.len(), "Built diagram URL");
        Ok(url)
    }

    fn name(&self) -> &'static str {
        "plantuml-server"
    }
}
