//! Catalog records for fan engagement ideas.
//!
//! Ideas are loaded once and never mutated; every engine stage clones the
//! records it keeps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Low / medium / high scale shared by budget and complexity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Level
{
    Low,
    Medium,
    High,
    /// Any value outside the scale, kept so comparisons degrade instead of failing
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl Default for Level
{
    /// Missing levels degrade the same way unrecognized ones do
    fn default() -> Self
    {
        Level::Unknown
    }
}

impl Level
{
    /// Position on the ordinal map; unknown values sit at 0
    pub const fn ordinal(self) -> u8
    {
        match self
        {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
            Level::Unknown => 0,
        }
    }

    pub const fn as_str(self) -> &'static str
    {
        match self
        {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::Unknown => "unknown",
        }
    }

    /// Badge text, e.g. "Low Budget" or "High Complexity"
    pub fn badge(
        self,
        noun: &str,
    ) -> String
    {
        let prefix = match self
        {
            Level::Low => "Low",
            Level::Medium => "Medium",
            // Matches the form's fallthrough: anything not low/medium reads as high
            Level::High | Level::Unknown => "High",
        };
        format!("{prefix} {noun}")
    }
}

impl fmt::Display for Level
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result
    {
        f.write_str(self.as_str())
    }
}

/// Catalog identifier; catalogs use either numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdeaId
{
    Number(u64),
    Text(String),
}

impl IdeaId
{
    /// Compare against an id typed on the command line
    pub fn matches(
        &self,
        raw: &str,
    ) -> bool
    {
        match self
        {
            IdeaId::Number(n) => raw
                .trim()
                .parse::<u64>()
                .is_ok_and(|r| r == *n),
            IdeaId::Text(s) => s == raw.trim(),
        }
    }
}

impl fmt::Display for IdeaId
{
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result
    {
        match self
        {
            IdeaId::Number(n) => write!(f, "{n}"),
            IdeaId::Text(s) => f.write_str(s),
        }
    }
}

/// One fan engagement tactic from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea
{
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    /// Grouping label, e.g. "Social Media"
    pub category: String,
    #[serde(default)]
    pub budget_range: Level,
    #[serde(default)]
    pub complexity: Level,
    /// Audience tags such as "fans" or "families"; never empty in a valid catalog
    pub audience_types: Vec<String>,

    #[serde(default)]
    pub implementation: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub time_to_implement: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub required_resources: Vec<String>,
}

impl Idea
{
    /// Whether this idea targets the given audience tag
    pub fn targets(
        &self,
        audience: &str,
    ) -> bool
    {
        self.audience_types
            .iter()
            .any(|a| a == audience)
    }
}


#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_ordinal_map()
    {
        assert_eq!(Level::Low.ordinal(), 1);
        assert_eq!(Level::Medium.ordinal(), 2);
        assert_eq!(Level::High.ordinal(), 3);
        assert_eq!(Level::Unknown.ordinal(), 0);
    }

    #[test]
    fn test_unknown_level_deserializes()
    {
        let level: Level = serde_json::from_str("\"enormous\"").unwrap();
        assert_eq!(level, Level::Unknown);
    }

    #[test]
    fn test_idea_from_camel_case_json()
    {
        let raw = r#"{
            "id": "vip-1",
            "title": "VIP Tunnel Walk",
            "description": "Walk out with the team",
            "category": "In-Venue",
            "budgetRange": "high",
            "complexity": "medium",
            "audienceTypes": ["die-hard fans"]
        }"#;

        let idea: Idea = serde_json::from_str(raw).unwrap();
        assert_eq!(idea.id, IdeaId::Text("vip-1".to_string()));
        assert_eq!(idea.budget_range, Level::High);
        assert_eq!(idea.complexity, Level::Medium);
        assert!(idea.benefits.is_empty());
        assert!(idea.targets("die-hard fans"));
        assert!(!idea.targets("fans"));
    }

    #[test]
    fn test_missing_levels_default_to_unknown()
    {
        let raw = r#"{
            "id": 3,
            "title": "Pop-up Fan Fest",
            "description": "Street party before kickoff",
            "category": "Community",
            "audienceTypes": ["local fans"]
        }"#;

        let idea: Idea = serde_json::from_str(raw).unwrap();
        assert_eq!(idea.budget_range, Level::Unknown);
        assert_eq!(idea.complexity, Level::Unknown);
        assert_eq!(idea.budget_range.ordinal(), 0);
    }

    #[test]
    fn test_id_matching()
    {
        assert!(IdeaId::Number(7).matches("7"));
        assert!(IdeaId::Number(7).matches(" 7 "));
        assert!(!IdeaId::Number(7).matches("seven"));
        assert!(IdeaId::Text("a-1".into()).matches("a-1"));
    }

    #[test]
    fn test_badges()
    {
        assert_eq!(Level::Low.badge("Budget"), "Low Budget");
        assert_eq!(Level::Medium.badge("Complexity"), "Medium Complexity");
        assert_eq!(Level::High.badge("Budget"), "High Budget");
    }
}
