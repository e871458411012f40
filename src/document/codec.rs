//! Conversion between [`StyledTextBuffer`] and [`FlatDocument`].

use super::flat::{Attribute, AttributeKind, FlatDocument};
use crate::editable::{Attachment, SpanKind, StyledTextBuffer};
use crate::error::Result;

/// Flatten a buffer into text plus attribute records.
///
/// Records come out in left-to-right order, one per attribute kind per run;
/// offsets are measured against the output text. Fails with `NoBuffer` when
/// the buffer has no storage attached.
pub fn encode(buffer: &StyledTextBuffer) -> Result<FlatDocument> {
    let spans = buffer.spans()?;
    let mut text = String::with_capacity(buffer.len_chars());
    let mut attributes = Vec::new();
    let mut offset = 0;

    for span in spans {
        let len = span.range.end - span.range.start;
        text.push_str(&buffer.slice(span.range)?);

        match span.kind {
            SpanKind::Plain => {}
            SpanKind::Bold => attributes.push(Attribute::bold(offset, len)),
            SpanKind::Role(role) => attributes.push(Attribute::role(role, offset)),
            SpanKind::Article(content) => attributes.push(Attribute::article(content, offset)),
        }

        offset += len;
    }

    tracing::debug!(
        chars = offset,
        attributes = attributes.len(),
        "encoded styled buffer"
    );
    Ok(FlatDocument { text, attributes })
}

/// Rebuild a buffer from a flat document. Never fails.
///
/// Records are applied in input order. Unknown keys are skipped, and so are
/// records whose range falls outside the text or embeds wider than one
/// character (each logged), so a malformed document degrades instead of
/// corrupting the buffer.
pub fn decode(document: &FlatDocument) -> StyledTextBuffer {
    let mut buffer = StyledTextBuffer::from_text(&document.text);
    let text_len = buffer.len_chars();

    for attr in &document.attributes {
        let kind = attr.kind();
        if kind == AttributeKind::Unknown {
            tracing::debug!(key = %attr.key, "skipping unknown attribute key");
            continue;
        }
        if let Err(err) = attr.check_bounds(text_len) {
            tracing::warn!("skipping attribute record: {}", err);
            continue;
        }

        let range = attr.location..attr.end();
        let applied = match kind {
            AttributeKind::Role => buffer
                .replace_with_attachment(range, Attachment::role(attr.value.as_str()))
                .map(|_| ()),
            AttributeKind::Article => buffer
                .replace_with_attachment(range, Attachment::article(attr.value.as_str()))
                .map(|_| ()),
            AttributeKind::Bold => buffer.set_bold(range, true),
            AttributeKind::Unknown => Ok(()),
        };
        if let Err(err) = applied {
            tracing::warn!("failed to apply {}: {}", attr.key, err);
        }
    }

    debug_assert_eq!(buffer.len_chars(), text_len, "decode must preserve length");
    buffer
}
