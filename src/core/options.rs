//! Recognized form options: the values the criteria form accepts, each with
//! the label shown to users.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

use crate::cli::{AppContext, OptionsArgs};
use crate::core::criteria::{OrganizationType, Timeframe};
use crate::core::idea::Level;

/// A selectable value and its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormOption
{
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(
    value: &'static str,
    label: &'static str,
) -> FormOption
{
    FormOption { value, label }
}

pub const AUDIENCE_TYPES: &[FormOption] = &[
    opt("fans", "Casual Fans"),
    opt("die-hard fans", "Die-hard Fans"),
    opt("younger audience", "Youth/Teen Audience"),
    opt("families", "Families"),
    opt("merchandise buyers", "Merchandise Buyers"),
    opt("social media followers", "Social Media Followers"),
    opt("gamers", "Gamers"),
    opt("local fans", "Local Community"),
    opt("remote fans", "Remote/International Fans"),
];

pub const ENGAGEMENT_GOALS: &[FormOption] = &[
    opt("increase_followers", "Increase Social Following"),
    opt("boost_attendance", "Boost Event Attendance"),
    opt("drive_merchandise", "Drive Merchandise Sales"),
    opt("deepen_loyalty", "Deepen Fan Loyalty"),
    opt("expand_audience", "Expand to New Audiences"),
    opt("increase_content_consumption", "Increase Content Consumption"),
    opt("community_building", "Build Community"),
    opt("fan_data", "Collect Fan Data"),
];

pub fn is_known_audience(tag: &str) -> bool
{
    AUDIENCE_TYPES
        .iter()
        .any(|o| o.value == tag)
}

pub fn is_known_goal(goal: &str) -> bool
{
    ENGAGEMENT_GOALS
        .iter()
        .any(|o| o.value == goal)
}

/// Label for a budget choice as printed on the form
pub const fn budget_label(level: Level) -> &'static str
{
    match level
    {
        Level::Low => "Low (Under $5,000)",
        Level::Medium => "Medium ($5,000 - $25,000)",
        Level::High => "High ($25,000+)",
        Level::Unknown => "Any",
    }
}

fn organization_options() -> Vec<FormOption>
{
    OrganizationType::ALL
        .iter()
        .map(|o| opt(o.as_str(), o.label()))
        .collect()
}

fn budget_options() -> Vec<FormOption>
{
    [Level::Low, Level::Medium, Level::High]
        .into_iter()
        .map(|l| opt(l.as_str(), budget_label(l)))
        .collect()
}

fn timeframe_options() -> Vec<FormOption>
{
    Timeframe::ALL
        .iter()
        .map(|t| opt(t.as_str(), t.label()))
        .collect()
}

/// Print every recognized option, grouped by form field
pub fn run(
    args: OptionsArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let sections: [(&str, Vec<FormOption>); 5] = [
        ("organizationType", organization_options()),
        ("audienceTypes", AUDIENCE_TYPES.to_vec()),
        ("budgetRange", budget_options()),
        ("implementationTime", timeframe_options()),
        ("engagementGoals", ENGAGEMENT_GOALS.to_vec()),
    ];

    if args.json
    {
        let mut obj = serde_json::Map::new();
        for (field, options) in &sections
        {
            obj.insert(field.to_string(), json!(options));
        }
        println!("{}", serde_json::Value::Object(obj));
        return Ok(());
    }

    if ctx.quiet
    {
        return Ok(());
    }

    for (field, options) in &sections
    {
        if ctx.no_color
        {
            println!("{field}");
        }
        else
        {
            println!("{}", field.bold());
        }
        for o in options
        {
            println!("  {:<30} {}", o.value, o.label);
        }
        println!();
    }

    Ok(())
}
