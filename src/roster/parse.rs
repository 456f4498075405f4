// Free-text name parsing.
//
// Accepts whatever the user typed or whatever a text/CSV file contained:
// no schema awareness, every non-empty segment becomes one name.

use super::person::{IdGenerator, Person};

/// Split raw text into person records.
///
/// Delimiters are newlines and commas; runs of consecutive delimiters
/// collapse to a single split point. Each token is whitespace-trimmed and
/// empty tokens are dropped, so blank or malformed input simply yields no
/// records. Surviving tokens keep their left-to-right order and each gets
/// a fresh id.
pub fn parse_names(input: &str, ids: &IdGenerator) -> Vec<Person> {
    input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|name| ids.person(name))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn names(people: &[Person]) -> Vec<&str> {
        people.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn splits_on_commas_and_newlines() {
        let ids = IdGenerator::new();
        let people = parse_names("a, b\nc", &ids);
        assert_eq!(names(&people), vec!["a", "b", "c"]);
    }

    #[test]
    fn each_record_gets_a_distinct_id() {
        let ids = IdGenerator::new();
        let people = parse_names("a, b\nc", &ids);
        assert_ne!(people[0].id, people[1].id);
        assert_ne!(people[1].id, people[2].id);
        assert_ne!(people[0].id, people[2].id);
    }

    #[test]
    fn blank_input_yields_nothing() {
        let ids = IdGenerator::new();
        assert!(parse_names("", &ids).is_empty());
        assert!(parse_names("   \n  ,  ", &ids).is_empty());
    }

    #[test]
    fn consecutive_delimiters_collapse() {
        let ids = IdGenerator::new();
        let people = parse_names("a,,\n,b", &ids);
        assert_eq!(names(&people), vec!["a", "b"]);
    }

    #[test]
    fn tokens_are_trimmed() {
        let ids = IdGenerator::new();
        let people = parse_names("  王小明 \n\t李大同  ", &ids);
        assert_eq!(names(&people), vec!["王小明", "李大同"]);
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let ids = IdGenerator::new();
        let people = parse_names("a\r\nb\r\n", &ids);
        assert_eq!(names(&people), vec!["a", "b"]);
    }

    #[test]
    fn order_is_preserved() {
        let ids = IdGenerator::new();
        let people = parse_names("z\ny, x, w\nv", &ids);
        assert_eq!(names(&people), vec!["z", "y", "x", "w", "v"]);
    }

    #[test]
    fn duplicate_names_survive_parsing() {
        // Deduplication is the roster's concern, not the parser's.
        let ids = IdGenerator::new();
        let people = parse_names("a, a, a", &ids);
        assert_eq!(people.len(), 3);
    }
}
