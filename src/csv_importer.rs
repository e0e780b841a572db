use crate::importer::Importer;
use crate::itinerary::{FieldNames, ItineraryRecord, ItinerarySet};

use serde::Deserialize;

const DELIMITER: char = ',';

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CsvImporterConfig {
    #[serde(default)]
    pub fields: FieldNames,
}

/// Comma-delimited importer. Splitting is deliberately naive (no quoting
/// or delimiter escaping): a field value containing a comma shifts the
/// columns of that row, same as the source this data comes from.
pub struct CsvImporter {
    config: CsvImporterConfig,
}

impl CsvImporter {
    pub fn new(config: CsvImporterConfig) -> Self {
        Self { config }
    }
}

impl Importer for CsvImporter {
    fn import(&self, raw: &str) -> ItinerarySet {
        let mut lines = raw.split('\n');

        // line 0 defines field names and positions for every row below
        let headers: Vec<String> = lines
            .next()
            .unwrap_or("")
            .split(DELIMITER)
            .map(|header| header.trim().to_string())
            .collect();

        let mut set = ItinerarySet::new(self.config.fields.clone());
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }

            let values: Vec<&str> = line.split(DELIMITER).collect();
            // pair by position; short rows pad with "", long rows drop
            // the extra trailing values
            let fields = headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    let value = values
                        .get(index)
                        .map(|value| value.trim().to_string())
                        .unwrap_or_default();
                    (header.clone(), value)
                })
                .collect();
            set.push(ItineraryRecord::new(fields));
        }

        set
    }
}
