//! Form-encoded request assembly
//!
//! The Web API takes flat key/value form bodies. Three inclusion rules
//! cover every endpoint: plain optional fields are sent only when
//! non-empty, explicit-presence fields are sent whenever set (an empty
//! value is then a legal payload), and boolean flags are sent as the
//! literal `"true"` or not at all.

/// One assembled form payload.
///
/// Keys are the fixed wire parameter names; assembly order is
/// deterministic but carries no semantics.
#[derive(Debug, Clone, Default)]
pub struct FormRequest {
    fields: Vec<(&'static str, String)>,
}

impl FormRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mandatory field, always included.
    pub fn field(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.push((name, value.into()));
    }

    /// Optional scalar field, included only when non-empty.
    pub fn field_nonempty(&mut self, name: &'static str, value: &str) {
        if !value.is_empty() {
            self.fields.push((name, value.to_string()));
        }
    }

    /// Explicit-presence scalar field, included whenever `Some`. An
    /// empty string is transmitted as-is and clears the field remotely.
    pub fn field_present(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.fields.push((name, value.to_string()));
        }
    }

    /// Optional list field, comma-joined, included only when non-empty.
    pub fn list_nonempty(&mut self, name: &'static str, values: &[String]) {
        if !values.is_empty() {
            self.fields.push((name, values.join(",")));
        }
    }

    /// Explicit-presence list field, comma-joined, included whenever
    /// `Some`. An empty list transmits an empty value and clears the
    /// field remotely.
    pub fn list_present(&mut self, name: &'static str, values: Option<&[String]>) {
        if let Some(values) = values {
            self.fields.push((name, values.join(",")));
        }
    }

    /// Boolean flag, included as `"true"` only when set. The platform
    /// treats an absent flag as false.
    pub fn flag(&mut self, name: &'static str, on: bool) {
        if on {
            self.fields.push((name, "true".to_string()));
        }
    }

    /// The assembled key/value pairs.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Look up an assembled value by key.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether a key made it into the payload at all.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
