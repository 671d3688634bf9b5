use serde::Serialize;

use crate::api::{CategoryPayload, TransactionPayload};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const ISSUED_FILL: &str = "rgba(59, 130, 246, 0.8)";
pub const ISSUED_BORDER: &str = "rgba(59, 130, 246, 1)";
pub const RETURNED_FILL: &str = "rgba(16, 185, 129, 0.8)";
pub const RETURNED_BORDER: &str = "rgba(16, 185, 129, 1)";

/// Doughnut palette. Indexed by position, no wraparound.
pub const CATEGORY_PALETTE: [&str; 6] = [
    "rgba(59, 130, 246, 0.8)",
    "rgba(16, 185, 129, 0.8)",
    "rgba(245, 158, 11, 0.8)",
    "rgba(239, 68, 68, 0.8)",
    "rgba(139, 92, 246, 0.8)",
    "rgba(236, 72, 153, 0.8)",
];

pub const UNCATEGORIZED: &str = "Uncategorized";

/// Chart.js `data` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u64>,
    pub background_color: Colors,
    pub border_color: Colors,
    pub border_width: u32,
}

/// Chart.js accepts either one colour for the series or one per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

/// `"Mar 2024"`; months outside 1..=12 show as `"? 2024"`.
pub fn month_label(month: Option<u32>, year: Option<i32>) -> String {
    let name = month
        .and_then(|m| m.checked_sub(1))
        .and_then(|idx| MONTHS.get(idx as usize))
        .copied()
        .unwrap_or("?");
    match year {
        Some(year) => format!("{name} {year}"),
        None => name.to_string(),
    }
}

/// Monthly issue/return bar chart, one label per record in server order.
pub fn transaction_chart(rows: &[TransactionPayload]) -> ChartData {
    let labels = rows.iter().map(|r| month_label(r.id.month, r.id.year)).collect();
    let issued = rows.iter().map(|r| r.issued.unwrap_or(0)).collect();
    let returned = rows.iter().map(|r| r.returned.unwrap_or(0)).collect();

    ChartData {
        labels,
        datasets: vec![
            ChartSeries {
                label: Some("Books Issued".to_string()),
                data: issued,
                background_color: Colors::Single(ISSUED_FILL.to_string()),
                border_color: Colors::Single(ISSUED_BORDER.to_string()),
                border_width: 1,
            },
            ChartSeries {
                label: Some("Books Returned".to_string()),
                data: returned,
                background_color: Colors::Single(RETURNED_FILL.to_string()),
                border_color: Colors::Single(RETURNED_BORDER.to_string()),
                border_width: 1,
            },
        ],
    }
}

/// Books-per-category doughnut. Only the first six slices get colours.
pub fn category_chart(rows: &[CategoryPayload]) -> ChartData {
    let labels = rows
        .iter()
        .map(|r| {
            r.name
                .clone()
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNCATEGORIZED.to_string())
        })
        .collect();
    let data = rows.iter().map(|r| r.count.unwrap_or(0)).collect();

    let fills: Vec<String> = CATEGORY_PALETTE
        .iter()
        .take(rows.len())
        .map(|c| c.to_string())
        .collect();
    let borders = fills.iter().map(|c| c.replacen("0.8", "1", 1)).collect();

    ChartData {
        labels,
        datasets: vec![ChartSeries {
            label: None,
            data,
            background_color: Colors::PerPoint(fills),
            border_color: Colors::PerPoint(borders),
            border_width: 2,
        }],
    }
}

impl ChartData {
    /// JSON for an inline `<script type="application/json">` block.
    /// `</` is escaped so a label can never close the script element.
    pub fn to_script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "null".to_string())
            .replace("</", "<\\/")
    }
}
