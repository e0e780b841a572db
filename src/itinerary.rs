use itertools::Itertools;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// Header names of the semantic fields as they appear in the deployed
/// source file. These are locale strings, not translated by us.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FieldNames {
    #[serde(default = "default_day")]
    pub day: String,
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default = "default_activity")]
    pub activity: String,
    #[serde(default = "default_place")]
    pub place: String,
    #[serde(default = "default_transport")]
    pub transport: String,
    #[serde(default = "default_alternative")]
    pub alternative: String,
}

fn default_day() -> String {
    "Día".to_string()
}

fn default_time() -> String {
    "Hora".to_string()
}

fn default_activity() -> String {
    "Actividad".to_string()
}

fn default_place() -> String {
    "Lugar/Detalles".to_string()
}

fn default_transport() -> String {
    "Transporte recomendado".to_string()
}

fn default_alternative() -> String {
    "Actividad alternativa".to_string()
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            day: default_day(),
            time: default_time(),
            activity: default_activity(),
            place: default_place(),
            transport: default_transport(),
            alternative: default_alternative(),
        }
    }
}

/// One parsed row of the schedule. Fields keep the header order of the
/// source file; lookups by unknown name come back as the empty string
/// rather than failing, since field presence is best-effort.
#[derive(Clone, Debug, PartialEq)]
pub struct ItineraryRecord {
    fields: Vec<(String, String)>,
}

impl ItineraryRecord {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn day<'a>(&'a self, names: &FieldNames) -> &'a str {
        self.get(&names.day)
    }

    pub fn time<'a>(&'a self, names: &FieldNames) -> &'a str {
        self.get(&names.time)
    }

    pub fn activity<'a>(&'a self, names: &FieldNames) -> &'a str {
        self.get(&names.activity)
    }

    pub fn place<'a>(&'a self, names: &FieldNames) -> &'a str {
        self.get(&names.place)
    }

    pub fn transport<'a>(&'a self, names: &FieldNames) -> &'a str {
        self.get(&names.transport)
    }

    pub fn alternative<'a>(&'a self, names: &FieldNames) -> &'a str {
        self.get(&names.alternative)
    }
}

// Serialized as a map so the JSON API exposes every captured column,
// recognized or not, in header order.
impl Serialize for ItineraryRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Ordered sequence of records, insertion order = source row order.
#[derive(Clone, Debug)]
pub struct ItinerarySet {
    records: Vec<ItineraryRecord>,
    names: FieldNames,
}

impl ItinerarySet {
    pub fn new(names: FieldNames) -> Self {
        Self {
            records: Vec::new(),
            names,
        }
    }

    pub fn push(&mut self, record: ItineraryRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ItineraryRecord] {
        &self.records
    }

    pub fn names(&self) -> &FieldNames {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct day labels in order of first appearance. Source-row
    /// order, never a calendar or alphabetical sort.
    pub fn day_labels(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.day(&self.names).to_string())
            .unique()
            .collect()
    }

    /// Ordered subsequence of records whose day field equals `label`,
    /// exact case-sensitive match. An unknown label yields nothing.
    pub fn for_day<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a ItineraryRecord> {
        self.records
            .iter()
            .filter(move |record| record.day(&self.names) == label)
    }
}
