use quick_xml::events::BytesStart;

const RECORD_CLASS: &[u8] = b"gems__gem";
const NAME_CLASS: &[u8] = b"gems__gem__name";
const VERSION_CLASS: &[u8] = b"gems__gem__version";
const DESC_CLASS: &[u8] = b"gems__gem__desc";

/// Field of the in-progress record the next text event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Version,
    Description,
}

/// What a start tag means for record extraction.
#[derive(Debug, PartialEq, Eq)]
pub enum TagClass {
    /// Opens a new record; anchor tags also carry the relative detail link.
    RecordStart { href: Option<String> },
    /// Labels the next text event as the given field.
    Field(Field),
    Other,
}

/// Classify a start tag by its marker class.
///
/// Matching is whole-attribute equality on `class`, not class-list
/// membership. No nesting is tracked; each tag is judged on its own
/// attributes. Malformed attributes are skipped.
pub fn classify_start(tag: &BytesStart) -> TagClass {
    let mut class: Option<Vec<u8>> = None;
    let mut href: Option<String> = None;

    for attr in tag.attributes().flatten() {
        match attr.key.as_ref() {
            b"class" => class = Some(attr.value.into_owned()),
            b"href" => href = attr.unescape_value().ok().map(|v| v.into_owned()),
            _ => {}
        }
    }

    match class.as_deref() {
        Some(c) if c == RECORD_CLASS => TagClass::RecordStart {
            href: if tag.name().as_ref() == b"a" {
                href
            } else {
                None
            },
        },
        Some(c) if c == NAME_CLASS => TagClass::Field(Field::Name),
        Some(c) if c == VERSION_CLASS => TagClass::Field(Field::Version),
        Some(c) if c == DESC_CLASS => TagClass::Field(Field::Description),
        _ => TagClass::Other,
    }
}
