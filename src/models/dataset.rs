//! Typed records for the two static input documents.
//!
//! Both documents are produced upstream (weekly research notes and the daily
//! recap) and are loaded once at startup. Nothing here is mutated after load.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A calendar item attached to a weekly currency entry.
/// Older documents list events as plain strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyEvent {
    Detailed {
        day: String,
        event: String,
        impact: String,
    },
    Note(String),
}

impl KeyEvent {
    pub fn is_high_impact(&self) -> bool {
        match self {
            KeyEvent::Detailed { impact, .. } => is_high_impact(impact),
            KeyEvent::Note(_) => false,
        }
    }
}

/// "Critical" and "High" are the only impacts that get highlighted.
pub fn is_high_impact(impact: &str) -> bool {
    impact == "Critical" || impact == "High"
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyWeeklyEntry {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bias: String,
    pub summary: Option<String>,
    pub headlines: Option<Vec<String>>,
    pub drivers: Option<Vec<String>>,
    pub events: Option<Vec<KeyEvent>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDailyEntry {
    #[serde(default)]
    pub bias: String,
    pub tone: Option<String>,
    pub reaction: Option<String>,
    pub headline: Option<String>,
    pub headlines: Option<Vec<String>>,
}

impl CurrencyDailyEntry {
    /// `headlines` wins over the single `headline` field when both exist.
    pub fn headline_list(&self) -> Vec<&str> {
        match (&self.headlines, &self.headline) {
            (Some(list), _) => list.iter().map(String::as_str).collect(),
            (None, Some(single)) => vec![single.as_str()],
            (None, None) => Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFocus {
    #[serde(default)]
    pub risk_environment: String,
    #[serde(default)]
    pub headlines: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFolderNewsItem {
    pub day: String,
    #[serde(default)]
    pub time: String,
    pub currency: String,
    pub event: String,
    #[serde(default)]
    pub impact: String,
}

/// JSON object keyed by currency code, kept in document order.
///
/// Intraday pair generation walks the daily currencies in the order they were
/// written, so a sorted or hashed map would change its output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for CurrencyMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> CurrencyMap<V> {
    pub fn get(&self, code: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(key, _)| key == code)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for CurrencyMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = CurrencyMap::default();
        for (key, value) in iter {
            // Later duplicates replace earlier ones but keep the first position.
            if let Some(slot) = map.entries.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = value;
            } else {
                map.entries.push((key, value));
            }
        }
        map
    }
}

impl<V: Serialize> Serialize for CurrencyMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct CurrencyMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for CurrencyMapVisitor<V> {
    type Value = CurrencyMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object keyed by currency code")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, V)> = Vec::with_capacity(access.size_hint().unwrap_or(8));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(entries.into_iter().collect())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for CurrencyMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CurrencyMapVisitor(PhantomData))
    }
}

/// `weeklyBias.json`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBiasDocument {
    #[serde(default)]
    pub week: String,
    #[serde(default)]
    pub currencies: Vec<CurrencyWeeklyEntry>,
}

impl WeeklyBiasDocument {
    pub fn find(&self, code: &str) -> Option<&CurrencyWeeklyEntry> {
        self.currencies.iter().find(|c| c.code == code)
    }
}

/// `dailyRecap.json`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecapDocument {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub currencies: CurrencyMap<CurrencyDailyEntry>,
    #[serde(default)]
    pub market_focus: MarketFocus,
    #[serde(default)]
    pub red_folder_news: Vec<RedFolderNewsItem>,
}
