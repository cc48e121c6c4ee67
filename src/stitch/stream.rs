//! Stream stitching backend: creatives are scanned with the event reader,
//! the first ad span captured as raw text, and the sequence attribute
//! spliced into the opening tag. The pod itself is assembled by
//! concatenation.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{
    bid_payload, is_bare_url, version_label, version_value, PodBuilder, StitchError, AD_TAG,
    AD_TAG_URI_TAG, BASELINE_VERSION, EMPTY_VAST, SEQUENCE_ATTR, VAST_TAG, VERSION_ATTR,
    WRAPPER_TAG,
};
use crate::openrtb::Bid;

pub struct StreamPodBuilder {
    ads: Vec<String>,
    version: f64,
    next_sequence: i64,
}

impl StreamPodBuilder {
    pub fn new() -> Self {
        Self {
            ads: Vec::new(),
            version: BASELINE_VERSION,
            next_sequence: 1,
        }
    }
}

impl Default for StreamPodBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PodBuilder for StreamPodBuilder {
    fn name(&self) -> &'static str {
        "stream"
    }

    fn append(&mut self, bid: &Bid) -> Result<(), StitchError> {
        let payload = bid_payload(bid)?;

        if is_bare_url(payload) {
            self.ads.push(format!(
                "<{ad} {seq}=\"{n}\"><{w}><{uri}><![CDATA[{url}]]></{uri}></{w}></{ad}>",
                ad = AD_TAG,
                seq = SEQUENCE_ATTR,
                n = self.next_sequence,
                w = WRAPPER_TAG,
                uri = AD_TAG_URI_TAG,
                url = payload,
            ));
            self.next_sequence += 1;
            return Ok(());
        }

        let scanned = scan_creative(payload, self.next_sequence)?;
        self.version = self.version.max(version_value(scanned.version.as_deref()));
        self.ads.push(scanned.ad);
        self.next_sequence += 1;
        Ok(())
    }

    fn build(&mut self) -> Result<String, StitchError> {
        if self.ads.is_empty() {
            return Ok(EMPTY_VAST.to_string());
        }
        Ok(format!(
            "<{tag} {attr}=\"{version}\">{ads}</{tag}>",
            tag = VAST_TAG,
            attr = VERSION_ATTR,
            version = version_label(self.version),
            ads = self.ads.concat(),
        ))
    }

    fn len(&self) -> usize {
        (self.next_sequence - 1) as usize
    }
}

struct ScannedCreative {
    ad: String,
    version: Option<String>,
}

/// Scan one creative for its root version and its first top-level ad span,
/// splicing the given sequence number into the ad's opening tag. Sibling
/// ads past the first are discarded.
fn scan_creative(payload: &str, sequence: i64) -> Result<ScannedCreative, StitchError> {
    let mut reader = Reader::from_str(payload);
    let mut ad: Option<String> = None;
    let mut version: Option<String> = None;
    let mut saw_root = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if depth == 0 {
                    saw_root = true;
                    version = attr_value(&start, VERSION_ATTR)?;
                    depth = 1;
                } else if depth == 1 && start.name().as_ref() == AD_TAG.as_bytes() {
                    let open = restamped_open_tag(&start, sequence)?;
                    let content_start = reader.buffer_position();
                    let content_end = consume_subtree(&mut reader)?;
                    ad = Some(format!(
                        "{}{}</{}>",
                        open,
                        &payload[content_start..content_end],
                        AD_TAG
                    ));
                    break;
                } else {
                    depth += 1;
                }
            }
            Ok(Event::Empty(start)) => {
                if depth == 0 {
                    saw_root = true;
                    version = attr_value(&start, VERSION_ATTR)?;
                    break;
                }
                if depth == 1 && start.name().as_ref() == AD_TAG.as_bytes() {
                    let open = restamped_open_tag(&start, sequence)?;
                    ad = Some(format!("{}</{}>", open, AD_TAG));
                    break;
                }
            }
            Ok(Event::End(_)) => {
                if depth == 1 {
                    break;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(StitchError::Xml(e.to_string())),
        }
    }

    if !saw_root {
        return Err(StitchError::Structural(
            "creative has no root element".to_string(),
        ));
    }
    match ad {
        Some(ad) => Ok(ScannedCreative { ad, version }),
        None => Err(StitchError::Structural(
            "creative has no ad element".to_string(),
        )),
    }
}

/// Advance the reader past the current element's subtree, returning the byte
/// offset of its closing tag.
fn consume_subtree(reader: &mut Reader<&[u8]>) -> Result<usize, StitchError> {
    let mut depth = 1usize;
    loop {
        let pos = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(pos);
                }
            }
            Ok(Event::Eof) => {
                return Err(StitchError::Xml("unexpected end of creative".to_string()))
            }
            Ok(_) => {}
            Err(e) => return Err(StitchError::Xml(e.to_string())),
        }
    }
}

fn attr_value(start: &BytesStart<'_>, name: &str) -> Result<Option<String>, StitchError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| StitchError::Xml(e.to_string()))?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|e| StitchError::Xml(e.to_string()))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Rebuild an ad opening tag with the sequence attribute replaced.
fn restamped_open_tag(start: &BytesStart<'_>, sequence: i64) -> Result<String, StitchError> {
    let mut tag = format!("<{}", AD_TAG);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| StitchError::Xml(e.to_string()))?;
        if attr.key.as_ref() == SEQUENCE_ATTR.as_bytes() {
            continue;
        }
        tag.push(' ');
        tag.push_str(&String::from_utf8_lossy(attr.key.as_ref()));
        tag.push_str("=\"");
        tag.push_str(&String::from_utf8_lossy(&attr.value));
        tag.push('"');
    }
    tag.push_str(&format!(" {}=\"{}\">", SEQUENCE_ATTR, sequence));
    Ok(tag)
}
