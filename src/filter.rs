// Date filter: reduce a full vnStat export to the entries relevant to one
// calendar date. Pure - the input document is never mutated, so one fetched
// document can be filtered for every day of the batch.

use chrono::{Datelike, NaiveDate};

use crate::models::{EntryDate, Granularity, InterfaceRecord, StatisticsDocument, Traffic};

impl Granularity {
    /// Whether an entry stored under this granularity belongs to `target`.
    /// Entries are matched under the granularity they are stored in, never
    /// reclassified. An absent required field never matches.
    pub fn matches(self, date: &EntryDate, target: NaiveDate) -> bool {
        let year_ok = date.year == Some(target.year());
        match self {
            Granularity::Year => year_ok,
            Granularity::Month => year_ok && date.month == Some(target.month()),
            Granularity::FiveMinute | Granularity::Hour | Granularity::Day | Granularity::Top => {
                year_ok && date.month == Some(target.month()) && date.day == Some(target.day())
            }
        }
    }
}

/// Keep, per interface and per granularity, only the entries matching
/// `target`. A granularity with no surviving entries is omitted from that
/// interface; an interface left with no granularities is dropped entirely.
/// Surviving entries and interfaces keep the input order.
pub fn filter_for_date(doc: &StatisticsDocument, target: NaiveDate) -> StatisticsDocument {
    let interfaces = doc
        .interfaces
        .iter()
        .filter_map(|iface| filter_interface(iface, target))
        .collect();
    StatisticsDocument {
        interfaces,
        extra: doc.extra.clone(),
    }
}

fn filter_interface(iface: &InterfaceRecord, target: NaiveDate) -> Option<InterfaceRecord> {
    let mut traffic = Traffic::default();
    for granularity in Granularity::ALL {
        let Some(entries) = iface.traffic.get(granularity) else {
            continue;
        };
        let kept: Vec<_> = entries
            .iter()
            .filter(|entry| granularity.matches(&entry.date, target))
            .cloned()
            .collect();
        if !kept.is_empty() {
            traffic.set(granularity, kept);
        }
    }
    if traffic.is_empty() {
        return None;
    }
    Some(InterfaceRecord {
        traffic,
        extra: iface.extra.clone(),
    })
}
