//! File-backed fact store
//!
//! Reads destination facts from a JSON or XML file. Records that break the
//! destination invariants are skipped and reported, the rest are kept in file
//! order.

use quick_xml::de::from_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::Result;
use crate::error::AdvisorError;
use crate::facts::FactStore;
use crate::models::Destination;

/// Supported fact file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactFormat {
    Json,
    Xml,
}

impl FactFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("xml") => Ok(Self::Xml),
            _ => Err(AdvisorError::parse(format!(
                "Unsupported fact file extension: {}",
                path.display()
            ))),
        }
    }
}

/// JSON structure for deserialization
#[derive(Debug, Deserialize)]
struct JsonFacts {
    destinations: Vec<RawDestination>,
}

#[derive(Debug, Deserialize)]
struct RawDestination {
    name: String,
    #[serde(default)]
    country: String,
    continent: String,
    #[serde(rename = "type")]
    kind: String,
    cost: f64,
}

/// XML structure for deserialization
#[derive(Debug, Deserialize)]
struct XmlFacts {
    #[serde(rename = "Destination", default)]
    destinations: Vec<XmlDestination>,
}

#[derive(Debug, Deserialize)]
struct XmlDestination {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Country", default)]
    country: String,
    #[serde(rename = "Continent")]
    continent: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Cost")]
    cost: f64,
}

impl From<XmlDestination> for RawDestination {
    fn from(xml: XmlDestination) -> Self {
        Self {
            name: xml.name,
            country: xml.country,
            continent: xml.continent,
            kind: xml.kind,
            cost: xml.cost,
        }
    }
}

impl RawDestination {
    /// Convert a raw record into a validated `Destination`
    fn to_destination(&self) -> Result<Destination> {
        let destination = Destination::new(
            self.name.trim(),
            self.country.trim(),
            self.continent.trim().parse()?,
            self.kind.trim().parse()?,
            self.cost,
        );
        destination.validate()?;
        Ok(destination)
    }
}

/// Fact store backed by a JSON or XML file
#[derive(Debug, Clone)]
pub struct FileFactStore {
    path: PathBuf,
}

impl FileFactStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Parse fact file content in the given format
    pub fn parse(content: &str, format: FactFormat) -> Result<Vec<Destination>> {
        let records: Vec<RawDestination> = match format {
            FactFormat::Json => {
                let facts: JsonFacts = serde_json::from_str(content).map_err(|e| {
                    AdvisorError::parse(format!("Failed to parse destination JSON: {e}"))
                })?;
                facts.destinations
            }
            FactFormat::Xml => {
                let facts: XmlFacts = from_str(content).map_err(|e| {
                    AdvisorError::parse(format!("Failed to parse destination XML: {e}"))
                })?;
                facts.destinations.into_iter().map(Into::into).collect()
            }
        };

        let mut destinations = Vec::with_capacity(records.len());
        let mut parse_errors = 0;

        for record in &records {
            match record.to_destination() {
                Ok(destination) => destinations.push(destination),
                Err(e) => {
                    warn!("Skipping destination '{}': {}", record.name, e);
                    parse_errors += 1;
                }
            }
        }

        info!(
            "Loaded {} destinations ({} parse errors)",
            destinations.len(),
            parse_errors
        );

        if destinations.is_empty() && parse_errors > 0 {
            return Err(AdvisorError::parse(
                "No valid destinations could be parsed from the fact file",
            ));
        }

        Ok(destinations)
    }
}

impl FactStore for FileFactStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_destinations(&self) -> Result<Vec<Destination>> {
        info!("Loading destinations from: {:?}", self.path);

        if !self.path.exists() {
            return Err(AdvisorError::FileNotFound(
                self.path.to_string_lossy().to_string(),
            ));
        }

        let format = FactFormat::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path)?;
        Self::parse(&content, format)
    }
}
