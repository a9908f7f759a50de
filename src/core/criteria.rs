//! User criteria and the form layer that validates them.
//!
//! The engine trusts `UserCriteria` as given. `CriteriaForm` is the
//! untrusted side: raw selections that must pass the same rules the
//! submission form enforces before they become criteria.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::idea::Level;
use crate::core::options::{is_known_audience, is_known_goal};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum OrganizationType
{
    #[value(name = "sportsTeam")]
    SportsTeam,
    #[value(name = "league")]
    League,
    #[value(name = "sportsBrand")]
    SportsBrand,
    #[value(name = "sportsMedia")]
    SportsMedia,
    #[value(name = "venue")]
    Venue,
}

impl OrganizationType
{
    pub const ALL: [OrganizationType; 5] = [
        OrganizationType::SportsTeam,
        OrganizationType::League,
        OrganizationType::SportsBrand,
        OrganizationType::SportsMedia,
        OrganizationType::Venue,
    ];

    pub const fn as_str(self) -> &'static str
    {
        match self
        {
            OrganizationType::SportsTeam => "sportsTeam",
            OrganizationType::League => "league",
            OrganizationType::SportsBrand => "sportsBrand",
            OrganizationType::SportsMedia => "sportsMedia",
            OrganizationType::Venue => "venue",
        }
    }

    pub const fn label(self) -> &'static str
    {
        match self
        {
            OrganizationType::SportsTeam => "Sports Team",
            OrganizationType::League => "Sports League",
            OrganizationType::SportsBrand => "Sports Brand",
            OrganizationType::SportsMedia => "Sports Media",
            OrganizationType::Venue => "Venue or Stadium",
        }
    }
}

/// How soon the organization wants to launch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe
{
    Immediate,
    Short,
    Medium,
    Long,
}

impl Timeframe
{
    pub const ALL: [Timeframe; 4] =
        [Timeframe::Immediate, Timeframe::Short, Timeframe::Medium, Timeframe::Long];

    pub const fn as_str(self) -> &'static str
    {
        match self
        {
            Timeframe::Immediate => "immediate",
            Timeframe::Short => "short",
            Timeframe::Medium => "medium",
            Timeframe::Long => "long",
        }
    }

    pub const fn label(self) -> &'static str
    {
        match self
        {
            Timeframe::Immediate => "Immediate (< 2 weeks)",
            Timeframe::Short => "Short-term (2-4 weeks)",
            Timeframe::Medium => "Medium-term (1-3 months)",
            Timeframe::Long => "Long-term (3+ months)",
        }
    }
}

/// Preferences submitted for one recommendation request.
///
/// `organization_type`, `implementation_time`, `engagement_goals` and
/// `current_challenges` are carried through to reports but not consulted by
/// filtering or scoring. `complexity` and `categories` are never produced by
/// the form; the engine honors them when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCriteria
{
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_type: Option<OrganizationType>,
    pub audience_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_time: Option<Timeframe>,
    pub engagement_goals: Vec<String>,
    pub current_challenges: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Level>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
}

impl UserCriteria
{
    /// True when nothing at all was selected
    pub fn is_empty(&self) -> bool
    {
        self.organization_type
            .is_none()
            && self
                .audience_types
                .is_empty()
            && self
                .budget_range
                .is_none()
            && self
                .implementation_time
                .is_none()
            && self
                .engagement_goals
                .is_empty()
            && self
                .current_challenges
                .is_empty()
            && self
                .complexity
                .is_none()
            && self
                .categories
                .is_empty()
    }
}

/// A single failed form rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriteriaError
{
    #[error("Please select an organization type")]
    MissingOrganizationType,
    #[error("Select at least one audience type")]
    NoAudienceTypes,
    #[error("Please select a budget range")]
    MissingBudgetRange,
    #[error("Please select an implementation timeframe")]
    MissingImplementationTime,
    #[error("Select at least one engagement goal")]
    NoEngagementGoals,
    #[error("Unrecognized audience type '{0}'")]
    UnknownAudienceType(String),
    #[error("Unrecognized engagement goal '{0}'")]
    UnknownEngagementGoal(String),
}

/// Every rule the submission broke, in form field order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid criteria: {}", .problems.iter().join("; "))]
pub struct FormErrors
{
    pub problems: Vec<CriteriaError>,
}

/// Raw, unvalidated selections
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CriteriaForm
{
    pub organization_type: Option<OrganizationType>,
    pub audience_types: Vec<String>,
    pub budget_range: Option<Level>,
    pub implementation_time: Option<Timeframe>,
    pub engagement_goals: Vec<String>,
    pub current_challenges: Option<String>,
    pub complexity: Option<Level>,
    pub categories: Vec<String>,
}

impl CriteriaForm
{
    /// Apply the submission rules and build criteria.
    ///
    /// Required: organization type, at least one audience type, a budget
    /// range, an implementation timeframe and at least one engagement goal.
    /// Audience and goal tags must be recognized options.
    pub fn validate(self) -> Result<UserCriteria, FormErrors>
    {
        let mut problems = Vec::new();

        if self
            .organization_type
            .is_none()
        {
            problems.push(CriteriaError::MissingOrganizationType);
        }
        if self
            .audience_types
            .is_empty()
        {
            problems.push(CriteriaError::NoAudienceTypes);
        }
        problems.extend(
            self.audience_types
                .iter()
                .filter(|t| !is_known_audience(t))
                .map(|t| CriteriaError::UnknownAudienceType(t.clone())),
        );
        if self
            .budget_range
            .is_none()
        {
            problems.push(CriteriaError::MissingBudgetRange);
        }
        if self
            .implementation_time
            .is_none()
        {
            problems.push(CriteriaError::MissingImplementationTime);
        }
        if self
            .engagement_goals
            .is_empty()
        {
            problems.push(CriteriaError::NoEngagementGoals);
        }
        problems.extend(
            self.engagement_goals
                .iter()
                .filter(|g| !is_known_goal(g))
                .map(|g| CriteriaError::UnknownEngagementGoal(g.clone())),
        );

        if !problems.is_empty()
        {
            debug!(count = problems.len(), "criteria form rejected");
            return Err(FormErrors { problems });
        }

        Ok(self.into_criteria())
    }

    /// Build criteria without enforcing the form rules; absent fields stay
    /// absent and the engine skips them
    pub fn into_criteria(self) -> UserCriteria
    {
        UserCriteria {
            organization_type: self.organization_type,
            audience_types: dedup_preserving(self.audience_types),
            budget_range: self.budget_range,
            implementation_time: self.implementation_time,
            engagement_goals: dedup_preserving(self.engagement_goals),
            current_challenges: self
                .current_challenges
                .unwrap_or_default()
                .trim()
                .to_string(),
            complexity: self.complexity,
            categories: dedup_preserving(self.categories),
        }
    }
}

// Checkbox groups are sets; repeated flags must not double-count in scoring
fn dedup_preserving(values: Vec<String>) -> Vec<String>
{
    values
        .into_iter()
        .unique()
        .collect()
}
