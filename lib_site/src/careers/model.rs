use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::parse_posted_date;

/// Shown when a valid careers page lists no positions.
pub const NO_OPEN_POSITIONS: &str = "There are no open positions right now. Please check back soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
        EmploymentType::Internship,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPosition {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub experience: String,
    pub summary: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub apply_url: String,
    /// `YYYY-MM-DD` or a full RFC 3339 timestamp.
    pub posted_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareersPage {
    pub heading: String,
    pub subheading: String,
    pub positions: Vec<CareerPosition>,
}

impl CareersPage {
    /// Positions newest first. Equal dates keep their input order and
    /// unparseable dates sort last.
    pub fn sorted_positions(&self) -> Vec<&CareerPosition> {
        let mut positions: Vec<(&CareerPosition, _)> = self
            .positions
            .iter()
            .map(|p| (p, parse_posted_date(&p.posted_date)))
            .collect();
        positions.sort_by(|(_, a), (_, b)| match (a, b) {
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        positions.into_iter().map(|(p, _)| p).collect()
    }

    pub fn has_openings(&self) -> bool {
        !self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(id: &str, posted: &str) -> CareerPosition {
        CareerPosition {
            id: id.into(),
            title: "T".into(),
            department: "D".into(),
            location: "L".into(),
            employment_type: EmploymentType::Contract,
            experience: "E".into(),
            summary: "S".into(),
            requirements: vec![],
            responsibilities: vec![],
            apply_url: "mailto:careers@zenture.in".into(),
            posted_date: posted.into(),
        }
    }

    #[test]
    fn newest_first_ties_stable_garbage_last() {
        let page = CareersPage {
            heading: "H".into(),
            subheading: "S".into(),
            positions: vec![
                position("a", "2026-02-18"),
                position("bad", "soon"),
                position("b", "2026-02-27"),
                position("c", "2026-02-18"),
                position("d", "2026-02-20T10:00:00Z"),
            ],
        };
        let order: Vec<&str> = page.sorted_positions().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a", "c", "bad"]);
    }

    #[test]
    fn employment_type_labels() {
        let t: EmploymentType = serde_json::from_str(r#""Part-time""#).unwrap();
        assert_eq!(t, EmploymentType::PartTime);
        assert_eq!(EmploymentType::from_label("Full-time"), Some(EmploymentType::FullTime));
        assert_eq!(EmploymentType::from_label("full-time"), None);
        assert_eq!(EmploymentType::Internship.to_string(), "Internship");
    }
}
