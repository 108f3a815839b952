use std::collections::HashMap;
use std::mem;

use super::classify::Field;
use crate::fetch::RUBYGEMS_ROOT;

/// One search result in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gem {
    pub name: String,
    pub url: String,
    pub version: String,
    pub description: String,
    pub position: usize,
}

/// Builds gem records from classified token events.
///
/// A record commits only when the *next* boundary arrives and the shell has
/// a non-empty name. The collection is keyed by name, so a repeated name
/// keeps the later record (the position counter still advances) — a quirk
/// of the accumulation strategy, kept deliberately.
pub struct Accumulator {
    current: Gem,
    gems: HashMap<String, Gem>,
    next_position: usize,
    keep_trailing: bool,
}

impl Accumulator {
    pub fn new(keep_trailing: bool) -> Self {
        Accumulator {
            current: Gem::default(),
            gems: HashMap::new(),
            next_position: 1,
            keep_trailing,
        }
    }

    /// Boundary marker: commit the current shell if it earned a name.
    /// A nameless shell is kept as-is and keeps accumulating.
    pub fn start_record(&mut self) {
        if self.current.name.is_empty() {
            return;
        }
        let mut gem = mem::take(&mut self.current);
        gem.position = self.next_position;
        self.next_position += 1;
        self.gems.insert(gem.name.clone(), gem);
    }

    /// Store the detail link on the current shell: root + href, verbatim.
    pub fn set_link(&mut self, href: &str) {
        self.current.url = format!("{}{}", RUBYGEMS_ROOT, href);
    }

    /// Assign trimmed text to a field of the current shell.
    pub fn set_field(&mut self, field: Field, raw: &str) {
        let text = raw.trim().to_string();
        match field {
            Field::Name => self.current.name = text,
            Field::Version => self.current.version = text,
            Field::Description => self.current.description = text,
        }
    }

    /// End of stream: the open shell is dropped unless trailing records
    /// were requested.
    pub fn finish(mut self) -> HashMap<String, Gem> {
        if self.keep_trailing {
            self.start_record();
        }
        self.gems
    }
}
