//! Usage counters and the aggregate dashboard snapshot. `snapshot` is a pure
//! function of the note collection, the recorded AI usage and `now`.

mod routes;

pub use routes::router;

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ai::AiAction, notes::Note};

/// Process-wide AI usage counters; incremented once per successful AI
/// action, reset only explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiUsage {
    pub count: u64,
    pub feature_usage: AiFeatureUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiFeatureUsage {
    pub summarize: u64,
    pub auto_title: u64,
    pub generate: u64,
}

impl AiUsage {
    pub fn record(&mut self, action: AiAction) {
        self.count += 1;
        match action {
            AiAction::Summarize => self.feature_usage.summarize += 1,
            AiAction::AutoTitle => self.feature_usage.auto_title += 1,
            AiAction::Generate => self.feature_usage.generate += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub total_notes: usize,
    pub notes_this_week: usize,
    pub notes_this_month: usize,
    pub ai_usage_count: u64,
    pub daily_note_count: Vec<DailyCount>,
    pub weekly_note_count: Vec<WeeklyCount>,
    pub tag_popularity: Vec<TagCount>,
    pub ai_feature_usage: AiFeatureUsage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyCount {
    pub week: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
}

pub fn snapshot(notes: &[Note], usage: &AiUsage, now: DateTime<Utc>) -> AnalyticsData {
    let today = now.date_naive();
    let week_start = start_of_week(today);
    let month_start = today.with_day(1).unwrap_or(today);

    let notes_this_week = notes
        .iter()
        .filter(|note| note.created_at.date_naive() >= week_start)
        .count();
    let notes_this_month = notes
        .iter()
        .filter(|note| note.created_at.date_naive() >= month_start)
        .count();

    // One bucket per calendar day, 6 days ago through today.
    let mut daily_note_count = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let day = today - Days::new(offset);
        let count = notes
            .iter()
            .filter(|note| note.created_at.date_naive() == day)
            .count();
        daily_note_count.push(DailyCount {
            date: day.format("%b %d").to_string(),
            count,
        });
    }

    // One bucket per calendar week, 3 weeks ago through the current week.
    let mut weekly_note_count = Vec::with_capacity(4);
    for offset in (0..4).rev() {
        let start = start_of_week(today - Days::new(7 * offset));
        let end = start + Days::new(6);
        let count = notes
            .iter()
            .filter(|note| {
                let day = note.created_at.date_naive();
                day >= start && day <= end
            })
            .count();
        weekly_note_count.push(WeeklyCount {
            week: start.format("%b %d").to_string(),
            count,
        });
    }

    // IndexMap keeps first-encounter order, so equal counts stay in the
    // order the tags were first seen.
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for note in notes {
        for tag in &note.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }
    let mut tag_popularity: Vec<TagCount> = counts
        .into_iter()
        .map(|(name, count)| TagCount {
            name: name.into(),
            count,
        })
        .collect();
    tag_popularity.sort_by(|a, b| b.count.cmp(&a.count));
    tag_popularity.truncate(10);

    AnalyticsData {
        total_notes: notes.len(),
        notes_this_week,
        notes_this_month,
        ai_usage_count: usage.count,
        daily_note_count,
        weekly_note_count,
        tag_popularity,
        ai_feature_usage: usage.feature_usage.clone(),
    }
}

// Weeks start on Sunday.
fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_sunday() as u64)
}
