// Roster storage and list upkeep.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::person::{IdGenerator, Person, PersonId};

/// Built-in sample list for trying the app without typing names.
///
/// Intentionally contains two duplicated names so the duplicate
/// highlighting is visible immediately.
pub const DEMO_NAMES: &[&str] = &[
    "陳小美",
    "林志豪",
    "張雅婷",
    "王冠宇",
    "李淑芬",
    "陳小美",
    "黃柏翰",
    "林怡君",
    "陳家豪",
    "張婷婷",
    "王冠宇",
    "許志明",
    "蔡嘉玲",
    "楊宗緯",
    "吳建豪",
];

/// Create the demo people with fresh ids.
pub fn demo_people(ids: &IdGenerator) -> Vec<Person> {
    DEMO_NAMES.iter().map(|name| ids.person(*name)).collect()
}

/// The ordered collection of people under management.
///
/// Insertion order is preserved; membership is a multiset keyed by id.
/// Names are free to repeat, which is exactly what the duplicate
/// detection below reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Roster { people: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Append parsed records to the end of the roster.
    pub fn extend(&mut self, new_people: Vec<Person>) {
        self.people.extend(new_people);
    }

    /// Remove one person by id. Returns `false` if the id is unknown.
    pub fn remove(&mut self, id: &PersonId) -> bool {
        let before = self.people.len();
        self.people.retain(|p| &p.id != id);
        self.people.len() < before
    }

    /// Drop everyone.
    pub fn clear(&mut self) {
        self.people.clear();
    }

    /// Names that occur on two or more records.
    pub fn duplicate_names(&self) -> HashSet<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for person in &self.people {
            *counts.entry(person.name.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count >= 2)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicate_names().is_empty()
    }

    /// Drop repeated names, keeping the first occurrence of each (by
    /// current order) and preserving the order of survivors. Returns how
    /// many records were removed.
    pub fn remove_duplicates(&mut self) -> usize {
        let before = self.people.len();
        let mut seen: HashSet<String> = HashSet::new();
        self.people.retain(|p| seen.insert(p.name.clone()));
        before - self.people.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(names: &[&str]) -> (Roster, IdGenerator) {
        let ids = IdGenerator::new();
        let mut roster = Roster::new();
        roster.extend(names.iter().map(|n| ids.person(*n)).collect());
        (roster, ids)
    }

    fn names(roster: &Roster) -> Vec<&str> {
        roster.people().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn extend_preserves_insertion_order() {
        let (mut roster, ids) = roster_of(&["a", "b"]);
        roster.extend(vec![ids.person("c")]);
        assert_eq!(names(&roster), vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_by_id_only_touches_that_record() {
        let (mut roster, _ids) = roster_of(&["a", "b", "a"]);
        let target = roster.people()[0].id.clone();
        assert!(roster.remove(&target));
        // The other "a" record survives; removal is keyed by id, not name.
        assert_eq!(names(&roster), vec!["b", "a"]);
        assert!(!roster.remove(&target), "second removal is a no-op");
    }

    #[test]
    fn clear_empties_the_roster() {
        let (mut roster, _ids) = roster_of(&["a", "b"]);
        roster.clear();
        assert!(roster.is_empty());
    }

    #[test]
    fn duplicate_detection_groups_by_name() {
        let (roster, _ids) = roster_of(&["A", "B", "A"]);
        let dups = roster.duplicate_names();
        assert_eq!(dups.len(), 1);
        assert!(dups.contains("A"));
        assert!(roster.has_duplicates());
    }

    #[test]
    fn no_duplicates_on_distinct_names() {
        let (roster, _ids) = roster_of(&["A", "B", "C"]);
        assert!(roster.duplicate_names().is_empty());
        assert!(!roster.has_duplicates());
    }

    #[test]
    fn remove_duplicates_keeps_first_occurrence() {
        let (mut roster, _ids) = roster_of(&["A", "B", "A"]);
        let first_a = roster.people()[0].id.clone();
        let removed = roster.remove_duplicates();
        assert_eq!(removed, 1);
        assert_eq!(names(&roster), vec!["A", "B"]);
        assert_eq!(roster.people()[0].id, first_a);
        assert!(!roster.has_duplicates());
    }

    #[test]
    fn remove_duplicates_preserves_survivor_order() {
        let (mut roster, _ids) = roster_of(&["c", "a", "c", "b", "a", "c"]);
        roster.remove_duplicates();
        assert_eq!(names(&roster), vec!["c", "a", "b"]);
    }

    #[test]
    fn demo_people_contain_duplicates() {
        let ids = IdGenerator::new();
        let mut roster = Roster::new();
        roster.extend(demo_people(&ids));
        assert_eq!(roster.len(), DEMO_NAMES.len());
        let dups = roster.duplicate_names();
        assert!(dups.contains("陳小美"));
        assert!(dups.contains("王冠宇"));
        assert_eq!(dups.len(), 2);
    }
}
