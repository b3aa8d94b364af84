use serde_json::{Map, Value};
use zbxtrap_proto::{clock, DataPoint, TrapperResult};

use crate::error::Result;
use crate::sender::Sender;

/// Wrapping applied to discovery macro names, `{#NAME}` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroTemplate {
    pub prefix: String,
    pub suffix: String,
}

impl Default for MacroTemplate {
    fn default() -> Self {
        Self {
            prefix: "{#".to_string(),
            suffix: "}".to_string(),
        }
    }
}

impl MacroTemplate {
    fn apply(&self, name: &str) -> String {
        format!("{}{}{}", self.prefix, name, self.suffix)
    }
}

/// Builder for one low-level discovery payload.
///
/// Rows accumulate in insertion order. The row list is serialized as
/// `{"data": [rows...]}` to a JSON string and sent as the value of a
/// single data point under the discovery key. Every added row refreshes
/// the payload clock to "now" unless an explicit clock was pinned at
/// construction.
#[derive(Debug, Clone)]
pub struct Discovery {
    host: String,
    key: String,
    rows: Vec<Map<String, Value>>,
    template: Option<MacroTemplate>,
    pinned_clock: Option<i64>,
    clock: i64,
}

impl Discovery {
    /// Create a discovery payload for `key` on `host`.
    pub fn new(host: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            key: key.into(),
            rows: Vec::new(),
            template: Some(MacroTemplate::default()),
            pinned_clock: None,
            clock: clock::unix_now(),
        }
    }

    /// Create a discovery payload with a fixed Unix timestamp.
    pub fn with_clock(host: impl Into<String>, key: impl Into<String>, clock: i64) -> Self {
        Self {
            pinned_clock: Some(clock),
            clock,
            ..Self::new(host, key)
        }
    }

    /// Disable macro templating; row keys are stored verbatim.
    pub fn raw_keys(mut self) -> Self {
        self.template = None;
        self
    }

    /// Replace the default `{#NAME}` template.
    pub fn with_template(mut self, template: MacroTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Add one row of macro-name/value pairs.
    pub fn add_row<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Map::new();
        for (name, value) in pairs {
            let name = name.into();
            let key = match &self.template {
                Some(template) => template.apply(&name),
                None => name,
            };
            row.insert(key, Value::String(value.into()));
        }
        self.rows.push(row);
        if self.pinned_clock.is_none() {
            self.clock = clock::unix_now();
        }
        self
    }

    /// Add every row from an iterator of pair collections.
    pub fn add_rows<R, K, V>(&mut self, rows: impl IntoIterator<Item = R>) -> &mut Self
    where
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for row in rows {
            self.add_row(row);
        }
        self
    }

    /// Borrow the accumulated rows.
    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }

    /// The JSON string used as the data point's value.
    pub fn to_value(&self) -> String {
        serde_json::json!({ "data": self.rows }).to_string()
    }

    /// Wrap the payload into the single data point that carries it.
    pub fn to_data_point(&self) -> DataPoint {
        DataPoint::with_clock(
            self.host.clone(),
            self.key.clone(),
            self.to_value(),
            self.pinned_clock.unwrap_or(self.clock),
        )
    }

    /// Send the payload as a one-element envelope.
    pub fn send_with(&self, sender: &Sender) -> Result<TrapperResult> {
        sender.send_one(self.to_data_point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_wraps_keys() {
        let mut discovery = Discovery::new("h1", "net.if.discovery");
        discovery.add_row([("ID", "5")]);

        let row = &discovery.rows()[0];
        assert_eq!(row.get("{#ID}"), Some(&Value::String("5".to_string())));
        assert!(row.get("ID").is_none());
    }

    #[test]
    fn raw_keys_stores_names_verbatim() {
        let mut discovery = Discovery::new("h1", "net.if.discovery").raw_keys();
        discovery.add_row([("ID", "5")]);

        let row = &discovery.rows()[0];
        assert_eq!(row.get("ID"), Some(&Value::String("5".to_string())));
    }

    #[test]
    fn custom_template() {
        let template = MacroTemplate {
            prefix: "{$".to_string(),
            suffix: "}".to_string(),
        };
        let mut discovery = Discovery::new("h1", "fs.discovery").with_template(template);
        discovery.add_row([("MOUNT", "/var")]);

        assert!(discovery.rows()[0].contains_key("{$MOUNT}"));
    }

    #[test]
    fn value_is_nested_json_document() {
        let mut discovery = Discovery::with_clock("h1", "fs.discovery", 1_700_000_000);
        discovery.add_rows([[("FSNAME", "/"), ("FSTYPE", "ext4")]]);

        let point = discovery.to_data_point();
        assert_eq!(point.host, "h1");
        assert_eq!(point.key, "fs.discovery");
        assert_eq!(point.clock, 1_700_000_000);

        let value: serde_json::Value = serde_json::from_str(&point.value).unwrap();
        assert_eq!(value["data"][0]["{#FSNAME}"], "/");
        assert_eq!(value["data"][0]["{#FSTYPE}"], "ext4");
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut discovery = Discovery::new("h1", "fs.discovery");
        discovery.add_row([("A", "1")]);
        discovery.add_row([("B", "2")]);
        discovery.add_row([("C", "3")]);

        let firsts: Vec<&str> = discovery
            .rows()
            .iter()
            .map(|row| row.keys().next().unwrap().as_str())
            .collect();
        assert_eq!(firsts, ["{#A}", "{#B}", "{#C}"]);
    }

    #[test]
    fn add_row_refreshes_clock() {
        let mut discovery = Discovery::new("h1", "fs.discovery");
        let before = clock::unix_now();
        discovery.add_row([("ID", "1")]);

        let point = discovery.to_data_point();
        assert!(point.clock >= before && point.clock <= clock::unix_now() + 2);
    }

    #[test]
    fn pinned_clock_survives_adds() {
        let mut discovery = Discovery::with_clock("h1", "fs.discovery", 42);
        discovery.add_row([("ID", "1")]);
        discovery.add_row([("ID", "2")]);

        assert_eq!(discovery.to_data_point().clock, 42);
    }
}
