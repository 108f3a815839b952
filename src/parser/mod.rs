pub mod classify;
pub mod records;

pub use records::Gem;

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use classify::{Field, TagClass};
use records::Accumulator;

/// Stream the search-results markup and collect gem records keyed by name.
///
/// Any tokenizer error is treated as end-of-document: everything
/// accumulated so far is returned.
pub fn extract_gems(html: &str, keep_trailing: bool) -> HashMap<String, Gem> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut acc = Accumulator::new(keep_trailing);
    // Pending field for the next text event; every start tag overwrites it.
    let mut pending: Option<Field> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match classify::classify_start(&e) {
                TagClass::RecordStart { href } => {
                    acc.start_record();
                    if let Some(href) = href {
                        acc.set_link(&href);
                    }
                    pending = None;
                }
                TagClass::Field(field) => pending = Some(field),
                TagClass::Other => pending = None,
            },
            Ok(Event::Text(e)) => {
                if let Some(field) = pending.take() {
                    match e.unescape() {
                        Ok(text) => acc.set_field(field, &text),
                        Err(_) => break,
                    }
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            Ok(_) => {}
        }
        buf.clear();
    }

    let gems = acc.finish();
    debug!("extracted {} gem records", gems.len());
    gems
}

// ── Tests ──
