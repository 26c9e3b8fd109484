use crate::domain::currency::display_name_for;
use crate::models::dataset::{CurrencyDailyEntry, CurrencyWeeklyEntry, KeyEvent};

/// One currency as shown on a card, borrowed from whichever dataset is active.
#[derive(Clone, Copy, Debug)]
pub enum CurrencyRecord<'a> {
    Weekly(&'a CurrencyWeeklyEntry),
    Daily {
        code: &'a str,
        entry: &'a CurrencyDailyEntry,
    },
}

impl<'a> CurrencyRecord<'a> {
    pub fn code(&self) -> &'a str {
        match self {
            CurrencyRecord::Weekly(w) => &w.code,
            CurrencyRecord::Daily { code, .. } => code,
        }
    }

    pub fn name(&self) -> String {
        match self {
            CurrencyRecord::Weekly(w) if !w.name.is_empty() => w.name.clone(),
            _ => display_name_for(self.code()),
        }
    }

    pub fn bias(&self) -> &'a str {
        match self {
            CurrencyRecord::Weekly(w) => &w.bias,
            CurrencyRecord::Daily { entry, .. } => &entry.bias,
        }
    }

    pub fn tone(&self) -> Option<&'a str> {
        match self {
            CurrencyRecord::Weekly(_) => None,
            CurrencyRecord::Daily { entry, .. } => entry.tone.as_deref(),
        }
    }

    pub fn summary(&self) -> Option<&'a str> {
        match self {
            CurrencyRecord::Weekly(w) => w.summary.as_deref(),
            CurrencyRecord::Daily { .. } => None,
        }
    }

    pub fn reaction(&self) -> Option<&'a str> {
        match self {
            CurrencyRecord::Weekly(_) => None,
            CurrencyRecord::Daily { entry, .. } => entry.reaction.as_deref(),
        }
    }

    pub fn headlines(&self) -> Vec<&'a str> {
        match self {
            CurrencyRecord::Weekly(w) => w
                .headlines
                .as_ref()
                .map(|list| list.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            CurrencyRecord::Daily { entry, .. } => entry.headline_list(),
        }
    }

    pub fn drivers(&self) -> &'a [String] {
        match self {
            CurrencyRecord::Weekly(w) => w.drivers.as_deref().unwrap_or(&[]),
            CurrencyRecord::Daily { .. } => &[],
        }
    }

    pub fn events(&self) -> &'a [KeyEvent] {
        match self {
            CurrencyRecord::Weekly(w) => w.events.as_deref().unwrap_or(&[]),
            CurrencyRecord::Daily { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_record_derives_name_from_code() {
        let entry = CurrencyDailyEntry {
            bias: "Bullish".to_string(),
            tone: Some("Firm".to_string()),
            ..Default::default()
        };
        let record = CurrencyRecord::Daily {
            code: "CHF",
            entry: &entry,
        };
        assert_eq!(record.name(), "Swiss Franc");
        assert_eq!(record.tone(), Some("Firm"));
        assert!(record.drivers().is_empty());
        assert!(record.summary().is_none());
    }

    #[test]
    fn weekly_record_prefers_dataset_name() {
        let entry = CurrencyWeeklyEntry {
            code: "AUD".to_string(),
            name: "Aussie".to_string(),
            bias: "Bearish".to_string(),
            drivers: Some(vec!["China".to_string()]),
            ..Default::default()
        };
        let record = CurrencyRecord::Weekly(&entry);
        assert_eq!(record.name(), "Aussie");
        assert_eq!(record.bias(), "Bearish");
        assert_eq!(record.drivers(), ["China".to_string()]);
        assert!(record.headlines().is_empty());
    }
}
