use chrono::{DateTime, Local};
use serde::Serialize;

use crate::api::{ActivityPayload, StatsPayload};

/// Aggregate counts shown on the stat cards. Absent fields read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_books: u64,
    pub available_books: u64,
    pub issued_books: u64,
    pub total_members: u64,
    pub active_members: u64,
    pub overdue_books: u64,
}

impl From<StatsPayload> for DashboardStats {
    fn from(p: StatsPayload) -> Self {
        Self {
            total_books: p.total_books.unwrap_or(0),
            available_books: p.available_books.unwrap_or(0),
            issued_books: p.issued_books.unwrap_or(0),
            total_members: p.total_members.unwrap_or(0),
            active_members: p.active_members.unwrap_or(0),
            overdue_books: p.overdue_books.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u64,
    /// Icon name from the sprite in `static/icons.svg`.
    pub icon: &'static str,
    /// Colour family used for the card gradient (`blue`, `green`, ...).
    pub tone: &'static str,
}

impl StatCard {
    pub fn display_value(&self) -> String {
        format_count(self.value)
    }
}

impl DashboardStats {
    /// The six dashboard tiles, in display order.
    pub fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard { title: "Total Books", value: self.total_books, icon: "book-open", tone: "blue" },
            StatCard { title: "Available Books", value: self.available_books, icon: "book-open", tone: "green" },
            StatCard { title: "Issued Books", value: self.issued_books, icon: "arrow-left-right", tone: "amber" },
            StatCard { title: "Total Members", value: self.total_members, icon: "users", tone: "purple" },
            StatCard { title: "Active Members", value: self.active_members, icon: "users", tone: "indigo" },
            StatCard { title: "Overdue Books", value: self.overdue_books, icon: "alert-triangle", tone: "red" },
        ]
    }
}

pub const SYSTEM_ACTOR: &str = "System";

/// One row of the recent-activity feed, ready for the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityView {
    pub actor: String,
    pub details: String,
    pub timestamp: String,
}

impl From<ActivityPayload> for ActivityView {
    fn from(p: ActivityPayload) -> Self {
        let actor = p
            .user
            .and_then(|u| u.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| SYSTEM_ACTOR.to_string());
        Self {
            actor,
            details: p.details.unwrap_or_default(),
            timestamp: p.created_at.as_deref().map(format_timestamp).unwrap_or_default(),
        }
    }
}

/// en-US style grouping: 1234567 -> "1,234,567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// RFC 3339 timestamp rendered in the server's local zone as
/// `3/5/2024, 2:07:09 PM`. Anything unparseable is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
