use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The `pyinstaller` block of `build.json`.
///
/// A key written as `null` is kept as `Some(Value::Null)` rather than folded
/// into `None`: it still overrides the base block and reads as false.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PackagingOptions {
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub onefile: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub windowed: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub clean: Option<Value>,
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub noconfirm: Option<Value>,
    /// `"source:destination"` pairs. `Some(None)` is an explicit `null`.
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub add_data: Option<Option<Vec<String>>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wrap whatever is present, `null` included, so that only a missing key
/// ends up as `None` (via `#[serde(default)]`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Truthiness of a JSON value: `null`, `false`, zero and empty strings,
/// arrays and objects are false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn flag(value: &Option<Value>, default: bool) -> bool {
    value.as_ref().map_or(default, truthy)
}

impl PackagingOptions {
    /// Shallow overlay: every key present in `overlay`, `null` included,
    /// replaces the same key here. Lists are replaced, not concatenated.
    pub fn merged_with(&self, overlay: &PackagingOptions) -> PackagingOptions {
        let mut extra = self.extra.clone();
        for (key, value) in &overlay.extra {
            extra.insert(key.clone(), value.clone());
        }

        PackagingOptions {
            onefile: overlay.onefile.clone().or_else(|| self.onefile.clone()),
            windowed: overlay.windowed.clone().or_else(|| self.windowed.clone()),
            clean: overlay.clean.clone().or_else(|| self.clean.clone()),
            noconfirm: overlay.noconfirm.clone().or_else(|| self.noconfirm.clone()),
            add_data: overlay.add_data.clone().or_else(|| self.add_data.clone()),
            extra,
        }
    }

    pub fn onefile(&self) -> bool {
        flag(&self.onefile, false)
    }

    pub fn windowed(&self) -> bool {
        flag(&self.windowed, true)
    }

    pub fn clean(&self) -> bool {
        flag(&self.clean, true)
    }

    pub fn noconfirm(&self) -> bool {
        flag(&self.noconfirm, true)
    }

    /// Configured data entries; absent and `null` both mean none.
    pub fn add_data(&self) -> &[String] {
        self.add_data.as_ref().and_then(Option::as_deref).unwrap_or(&[])
    }
}
