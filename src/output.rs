use std::collections::HashMap;

use crate::parser::Gem;

/// Flatten the keyed collection into ranking order.
pub fn by_position(gems: HashMap<String, Gem>) -> Vec<Gem> {
    let mut ordered: Vec<Gem> = gems.into_values().collect();
    ordered.sort_by_key(|gem| gem.position);
    ordered
}

/// Render the summary line plus one `name version url` line per gem.
pub fn render(gems: &[Gem]) -> String {
    let mut out = format!("Found {} gems:\n", gems.len());
    for gem in gems {
        out.push_str(&format!("{} {} {} \n", gem.name, gem.version, gem.url));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gem(name: &str, version: &str, url: &str, position: usize) -> Gem {
        Gem {
            name: name.to_string(),
            url: url.to_string(),
            version: version.to_string(),
            description: String::new(),
            position,
        }
    }

    #[test]
    fn sorts_by_position() {
        let mut gems = HashMap::new();
        gems.insert("b".to_string(), gem("b", "2.0", "http://rubygems.org/gems/b", 2));
        gems.insert("a".to_string(), gem("a", "1.0", "http://rubygems.org/gems/a", 1));
        gems.insert("c".to_string(), gem("c", "3.0", "http://rubygems.org/gems/c", 3));

        let ordered = by_position(gems);
        let names: Vec<&str> = ordered.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn renders_lines_with_trailing_space() {
        let gems = [gem("foo", "1.0", "http://rubygems.org/gems/foo", 1)];
        assert_eq!(
            render(&gems),
            "Found 1 gems:\nfoo 1.0 http://rubygems.org/gems/foo \n"
        );
    }

    #[test]
    fn renders_empty_result() {
        assert_eq!(render(&[]), "Found 0 gems:\n");
    }

    #[test]
    fn empty_fields_still_render() {
        let gems = [gem("bare", "", "", 1)];
        assert_eq!(render(&gems), "Found 1 gems:\nbare   \n");
    }
}
