// Typed view of the vnStat JSON export. Only the fields the date filter
// needs are modeled; everything else rides along in flattened maps so the
// written files stay faithful to the upstream document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The six traffic-aggregation buckets vnStat exports, in its output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    FiveMinute,
    Hour,
    Day,
    Month,
    Year,
    Top,
}

impl Granularity {
    pub const ALL: [Granularity; 6] = [
        Granularity::FiveMinute,
        Granularity::Hour,
        Granularity::Day,
        Granularity::Month,
        Granularity::Year,
        Granularity::Top,
    ];
}

/// Top-level vnStat export. A document without `interfaces` is an empty
/// document, not an error. Fields like `vnstatversion` and `jsonversion`
/// are preserved verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StatisticsDocument {
    #[serde(default)]
    pub interfaces: Vec<InterfaceRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One monitored interface. `name`, `alias`, `created`, `updated` and any
/// future fields pass through `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InterfaceRecord {
    #[serde(default, skip_serializing_if = "Traffic::is_empty")]
    pub traffic: Traffic,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-granularity entry lists. Serialized keys keep vnStat's fixed order;
/// absent granularities are omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Traffic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiveminute: Option<Vec<TrafficEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour: Option<Vec<TrafficEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<Vec<TrafficEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<Vec<TrafficEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<Vec<TrafficEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Vec<TrafficEntry>>,
}

impl Traffic {
    pub fn get(&self, granularity: Granularity) -> Option<&[TrafficEntry]> {
        match granularity {
            Granularity::FiveMinute => self.fiveminute.as_deref(),
            Granularity::Hour => self.hour.as_deref(),
            Granularity::Day => self.day.as_deref(),
            Granularity::Month => self.month.as_deref(),
            Granularity::Year => self.year.as_deref(),
            Granularity::Top => self.top.as_deref(),
        }
    }

    pub fn set(&mut self, granularity: Granularity, entries: Vec<TrafficEntry>) {
        let slot = match granularity {
            Granularity::FiveMinute => &mut self.fiveminute,
            Granularity::Hour => &mut self.hour,
            Granularity::Day => &mut self.day,
            Granularity::Month => &mut self.month,
            Granularity::Year => &mut self.year,
            Granularity::Top => &mut self.top,
        };
        *slot = Some(entries);
    }

    pub fn is_empty(&self) -> bool {
        Granularity::ALL.iter().all(|g| self.get(*g).is_none())
    }
}

/// One traffic sample. Counters (`rx`, `tx`, `id`, ...) pass through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TrafficEntry {
    #[serde(default)]
    pub date: EntryDate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Calendar stamp of an entry. Coarser granularities omit `month`/`day`;
/// an absent field means the entry cannot match on that field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct EntryDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

impl EntryDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }
}
