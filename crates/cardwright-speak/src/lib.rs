//! Plain-text fallback extraction from card speech markup.
//!
//! Card elements may carry a `speak` property holding either plain text or a
//! small speech markup document (`<speak>Hello <break/> world</speak>`).
//! Hosts that cannot present an element visually, or that render inputs as
//! informational text, need the readable text behind that markup.
//!
//! # Resolution Rules
//!
//! 1. Empty or whitespace-only input resolves to `None`
//! 2. Input whose first non-whitespace character is not `<` is plain text; it
//!    is wrapped in a `<speak>` envelope and parsed like any other document
//! 3. The text content is every text and CDATA node in document order, with
//!    predefined entities unescaped. Whitespace-only nodes between elements
//!    are dropped; all other text is kept verbatim
//! 4. An XML declaration, comments and processing instructions are ignored
//!
//! Because plain text goes through the same parser as markup, `"Hello"`
//! resolves to `"Hello"` on both paths.
//!
//! # Example
//!
//! ```rust
//! use cardwright_speak::{fallback_text, plain_text};
//!
//! assert_eq!(plain_text("Hello").unwrap().as_deref(), Some("Hello"));
//! assert_eq!(
//!     plain_text("<speak>Your order is <emphasis>ready</emphasis></speak>")
//!         .unwrap()
//!         .as_deref(),
//!     Some("Your order is ready")
//! );
//!
//! // Malformed markup never escapes `fallback_text`
//! assert_eq!(fallback_text(Some("<speak>unclosed")), None);
//! ```

use quick_xml::events::Event;
use quick_xml::Reader;

/// Error returned when speech markup is not a well-formed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeakError {
    /// The XML reader rejected the input (mismatched end tag, bad entity, ...).
    Xml { position: u64, message: String },
    /// The document ended while elements were still open.
    UnclosedElement { depth: usize },
    /// Non-whitespace text appeared outside the root element.
    TextOutsideRoot { text: String },
    /// A second top-level element followed the root.
    MultipleRoots,
    /// A CDATA section was not valid UTF-8.
    Encoding,
}

impl std::fmt::Display for SpeakError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeakError::Xml { position, message } => {
                write!(f, "malformed speech markup at byte {}: {}", position, message)
            }
            SpeakError::UnclosedElement { depth } => {
                write!(f, "speech markup ended with {} unclosed element(s)", depth)
            }
            SpeakError::TextOutsideRoot { text } => {
                write!(f, "unexpected text outside the root element: '{}'", text)
            }
            SpeakError::MultipleRoots => {
                write!(f, "speech markup has more than one root element")
            }
            SpeakError::Encoding => write!(f, "CDATA section is not valid UTF-8"),
        }
    }
}

impl std::error::Error for SpeakError {}

/// Extracts the plain text from speech markup or plain text.
///
/// Returns `Ok(None)` when the input is blank or the document holds no text.
///
/// # Errors
///
/// Returns a [`SpeakError`] when the markup is not well formed. Plain text
/// containing a bare `&` or an unknown entity is malformed too, since it is
/// parsed inside the `<speak>` envelope.
pub fn plain_text(input: &str) -> Result<Option<String>, SpeakError> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let text = if trimmed.starts_with('<') {
        extract_text(trimmed)?
    } else {
        extract_text(&format!("<speak>{}</speak>", input))?
    };

    Ok(if text.is_empty() { None } else { Some(text) })
}

/// Resolves fallback text, treating malformed markup as absent.
///
/// This is the entry point renderers use: parse failures are local to
/// fallback derivation and degrade to `None` so the caller can try the next
/// candidate text.
pub fn fallback_text(speak: Option<&str>) -> Option<String> {
    plain_text(speak?).unwrap_or_default()
}

fn extract_text(document: &str) -> Result<String, SpeakError> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(false);

    let mut text = String::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader.read_event().map_err(|e| SpeakError::Xml {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(_) => {
                if depth == 0 {
                    if seen_root {
                        return Err(SpeakError::MultipleRoots);
                    }
                    seen_root = true;
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
            }
            Event::Empty(_) => {
                if depth == 0 {
                    if seen_root {
                        return Err(SpeakError::MultipleRoots);
                    }
                    seen_root = true;
                }
            }
            Event::Text(raw) => {
                let unescaped = raw.unescape().map_err(|e| SpeakError::Xml {
                    position: reader.buffer_position() as u64,
                    message: e.to_string(),
                })?;
                if unescaped.trim().is_empty() {
                    continue;
                }
                if depth == 0 {
                    return Err(SpeakError::TextOutsideRoot {
                        text: unescaped.trim().to_string(),
                    });
                }
                text.push_str(&unescaped);
            }
            Event::CData(raw) => {
                let bytes = raw.into_inner();
                let section = std::str::from_utf8(&bytes).map_err(|_| SpeakError::Encoding)?;
                if depth == 0 && !section.trim().is_empty() {
                    return Err(SpeakError::TextOutsideRoot {
                        text: section.trim().to_string(),
                    });
                }
                text.push_str(section);
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype
            _ => {}
        }
    }

    if depth != 0 {
        return Err(SpeakError::UnclosedElement { depth });
    }

    Ok(text)
}
