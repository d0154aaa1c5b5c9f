//! Roster construction.
//!
//! Orders teams into the linear rotation used for event assignment.
//!
//! # Algorithm
//!
//! 1. Group teams by the earliest weekday of their affinity, measured
//!    cyclically from the week start. Groups are ordered by that distance.
//! 2. Sort each group by team name.
//! 3. Interleave ("zigzag"): round 0 takes the first team of every group,
//!    round 1 the second team of every group that still has one, and so on.
//!
//! Interleaving keeps the rotation fair when groups differ in size: three
//! Monday teams and one Wednesday team yield `[Mon1, Wed1, Mon2, Mon3]`,
//! not `[Mon1, Mon2, Mon3, Wed1]`.

use std::cmp::Ordering;

use chrono::Weekday;
use tracing::debug;

use crate::models::{CookingTeam, Roster, WeekdaySelection};

/// Orders affinities by the cyclic distance from `start` to their earliest
/// flagged weekday.
///
/// Equal distances compare `Equal`. An empty affinity sorts last.
pub fn compare_affinities(
    start: Weekday,
) -> impl Fn(&WeekdaySelection, &WeekdaySelection) -> Ordering {
    move |a, b| affinity_distance(a, start).cmp(&affinity_distance(b, start))
}

fn affinity_distance(affinity: &WeekdaySelection, start: Weekday) -> u32 {
    affinity
        .earliest_from(start)
        .map(|(_, distance)| distance)
        .unwrap_or(u32::MAX)
}

/// Teams grouped by their earliest affinity weekday.
///
/// Group order follows the cyclic distance from the week start; teams
/// within a group are sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffinityGroups<'a> {
    groups: Vec<(Weekday, Vec<&'a CookingTeam>)>,
}

impl<'a> AffinityGroups<'a> {
    /// Groups in key order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[&'a CookingTeam])> {
        self.groups.iter().map(|(day, teams)| (*day, teams.as_slice()))
    }

    /// Group keys in order.
    pub fn weekdays(&self) -> Vec<Weekday> {
        self.groups.iter().map(|(day, _)| *day).collect()
    }

    /// Teams of one group.
    pub fn get(&self, day: Weekday) -> Option<&[&'a CookingTeam]> {
        self.groups
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, teams)| teams.as_slice())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Size of the largest group.
    pub fn max_group_size(&self) -> usize {
        self.groups.iter().map(|(_, t)| t.len()).max().unwrap_or(0)
    }
}

/// Groups teams by earliest affinity weekday relative to `start`.
///
/// Teams without an affinity, or with an empty one, are left out.
pub fn create_sorted_affinities_to_teams_map(
    teams: &[CookingTeam],
    start: Weekday,
) -> AffinityGroups<'_> {
    let mut keyed: Vec<(Weekday, u32, &CookingTeam)> = teams
        .iter()
        .filter_map(|team| {
            let (day, distance) = team.affinity.as_ref()?.earliest_from(start)?;
            Some((day, distance, team))
        })
        .collect();

    // Stable: equal names keep input order.
    keyed.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.2.name.cmp(&b.2.name)));

    let mut groups: Vec<(Weekday, Vec<&CookingTeam>)> = Vec::new();
    for (day, _, team) in keyed {
        match groups.last_mut() {
            Some((last_day, members)) if *last_day == day => members.push(team),
            _ => groups.push((day, vec![team])),
        }
    }

    AffinityGroups { groups }
}

/// Builds the interleaved rotation roster.
///
/// Every team with a non-empty affinity appears exactly once.
pub fn create_team_roster(start: Weekday, teams: &[CookingTeam]) -> Roster {
    let groups = create_sorted_affinities_to_teams_map(teams, start);

    let roster: Roster = (0..groups.max_group_size())
        .flat_map(|round| {
            groups
                .iter()
                .filter_map(move |(_, members)| members.get(round))
                .map(|team| team.id.clone())
        })
        .collect();

    debug!(
        groups = groups.len(),
        roster = roster.len(),
        skipped = teams.len() - roster.len(),
        "team roster built"
    );
    roster
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, name: &str, days: &[Weekday]) -> CookingTeam {
        CookingTeam::new(id)
            .with_name(name)
            .with_affinity(WeekdaySelection::from_weekdays(days.iter().copied()))
    }

    #[test]
    fn test_compare_affinities() {
        let cmp = compare_affinities(Weekday::Mon);
        let mon = WeekdaySelection::from_weekdays([Weekday::Mon]);
        let wed = WeekdaySelection::from_weekdays([Weekday::Wed]);
        let wed_fri = WeekdaySelection::from_weekdays([Weekday::Wed, Weekday::Fri]);

        assert_eq!(cmp(&mon, &wed), Ordering::Less);
        assert_eq!(cmp(&wed, &mon), Ordering::Greater);
        assert_eq!(cmp(&wed, &wed_fri), Ordering::Equal);
        assert_eq!(cmp(&WeekdaySelection::none(), &wed), Ordering::Greater);
    }

    #[test]
    fn test_compare_affinities_cyclic_start() {
        let cmp = compare_affinities(Weekday::Thu);
        let mon = WeekdaySelection::from_weekdays([Weekday::Mon]);
        let fri = WeekdaySelection::from_weekdays([Weekday::Fri]);
        // Thu → Fri is 1, Thu → Mon is 4
        assert_eq!(cmp(&fri, &mon), Ordering::Less);
    }

    #[test]
    fn test_grouping_and_name_order() {
        let teams = vec![
            team("3", "Charlie", &[Weekday::Wed]),
            team("1", "Bravo", &[Weekday::Mon]),
            team("2", "Alpha", &[Weekday::Mon, Weekday::Fri]),
            CookingTeam::new("4").with_name("No affinity"),
        ];
        let groups = create_sorted_affinities_to_teams_map(&teams, Weekday::Mon);

        assert_eq!(groups.weekdays(), vec![Weekday::Mon, Weekday::Wed]);
        let mon: Vec<&str> = groups
            .get(Weekday::Mon)
            .unwrap()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(mon, vec!["Alpha", "Bravo"]);
        assert_eq!(groups.get(Weekday::Wed).unwrap().len(), 1);
        assert!(groups.get(Weekday::Fri).is_none());
    }

    #[test]
    fn test_grouping_uses_start_day() {
        let teams = vec![
            team("1", "A", &[Weekday::Mon, Weekday::Fri]),
            team("2", "B", &[Weekday::Wed]),
        ];
        // From Thursday, team A's earliest weekday is Friday.
        let groups = create_sorted_affinities_to_teams_map(&teams, Weekday::Thu);
        assert_eq!(groups.weekdays(), vec![Weekday::Fri, Weekday::Wed]);
    }

    #[test]
    fn test_name_sort_is_case_sensitive() {
        let teams = vec![
            team("1", "alpha", &[Weekday::Mon]),
            team("2", "Bravo", &[Weekday::Mon]),
        ];
        let roster = create_team_roster(Weekday::Mon, &teams);
        // Uppercase sorts before lowercase.
        assert_eq!(roster.iter().collect::<Vec<_>>(), vec!["2", "1"]);
    }

    #[test]
    fn test_zigzag_roster() {
        let teams = vec![
            team("m1", "Mon A", &[Weekday::Mon]),
            team("m2", "Mon B", &[Weekday::Mon]),
            team("m3", "Mon C", &[Weekday::Mon]),
            team("w1", "Wed A", &[Weekday::Wed]),
        ];
        let roster = create_team_roster(Weekday::Mon, &teams);
        assert_eq!(
            roster.iter().collect::<Vec<_>>(),
            vec!["m1", "w1", "m2", "m3"]
        );
    }

    #[test]
    fn test_roster_round_robin_even_groups() {
        let teams = vec![
            team("f1", "F1", &[Weekday::Fri]),
            team("w1", "W1", &[Weekday::Wed]),
            team("m1", "M1", &[Weekday::Mon]),
            team("f2", "F2", &[Weekday::Fri]),
            team("w2", "W2", &[Weekday::Wed]),
            team("m2", "M2", &[Weekday::Mon]),
        ];
        let roster = create_team_roster(Weekday::Mon, &teams);
        assert_eq!(
            roster.iter().collect::<Vec<_>>(),
            vec!["m1", "w1", "f1", "m2", "w2", "f2"]
        );
    }

    #[test]
    fn test_roster_excludes_unassigned() {
        let teams = vec![
            CookingTeam::new("x"),
            team("a", "A", &[Weekday::Tue]),
            CookingTeam::new("y").with_affinity(WeekdaySelection::none()),
        ];
        let roster = create_team_roster(Weekday::Mon, &teams);
        assert_eq!(roster.iter().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn test_empty_roster() {
        assert!(create_team_roster(Weekday::Mon, &[]).is_empty());
        assert!(create_sorted_affinities_to_teams_map(&[], Weekday::Mon).is_empty());
    }
}
