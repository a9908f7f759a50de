//! Category grouping for presentation.

use indexmap::IndexMap;

use crate::core::idea::Idea;

/// Ideas bucketed by category, largest bucket first
pub type CategoryGroups = IndexMap<String, Vec<Idea>>;

/// Partition `ideas` by category.
///
/// Each bucket keeps the input order of its members. Buckets are ordered by
/// descending size; equally sized buckets stay in the order their category
/// first appeared in the input.
pub fn group_ideas_by_category(ideas: &[Idea]) -> CategoryGroups
{
    let mut grouped = CategoryGroups::new();

    for idea in ideas
    {
        grouped
            .entry(idea.category.clone())
            .or_default()
            .push(idea.clone());
    }

    // IndexMap::sort_by is stable, which gives the first-seen tie-break
    grouped.sort_by(|_, a, _, b| b.len().cmp(&a.len()));
    grouped
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::core::idea::Level;
    use crate::core::idea::fixtures::idea;

    #[test]
    fn test_largest_category_first()
    {
        let ideas = vec![
            idea(1, "a", "Content", Level::Low, Level::Low, &["fans"]),
            idea(2, "b", "In-Venue", Level::Low, Level::Low, &["fans"]),
            idea(3, "c", "In-Venue", Level::Low, Level::Low, &["fans"]),
            idea(4, "d", "Community", Level::Low, Level::Low, &["fans"]),
            idea(5, "e", "In-Venue", Level::Low, Level::Low, &["fans"]),
            idea(6, "f", "Content", Level::Low, Level::Low, &["fans"]),
        ];

        let groups = group_ideas_by_category(&ideas);
        let keys: Vec<&str> = groups
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["In-Venue", "Content", "Community"]);

        let in_venue: Vec<String> = groups["In-Venue"]
            .iter()
            .map(|i| i.id.to_string())
            .collect();
        assert_eq!(in_venue, ["2", "3", "5"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order()
    {
        let ideas = vec![
            idea(1, "a", "Zeta", Level::Low, Level::Low, &["fans"]),
            idea(2, "b", "Alpha", Level::Low, Level::Low, &["fans"]),
            idea(3, "c", "Mid", Level::Low, Level::Low, &["fans"]),
        ];
        let groups = group_ideas_by_category(&ideas);
        let keys: Vec<&str> = groups
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_empty_input()
    {
        assert!(group_ideas_by_category(&[]).is_empty());
    }
}
