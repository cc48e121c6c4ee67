//! Tree stitching backend: every creative is parsed into an owned element
//! tree and its first ad element is grafted under the pod root.

use super::dom::{self, Element, Node};
use super::{
    bid_payload, is_bare_url, version_label, version_value, PodBuilder, StitchError, AD_TAG,
    AD_TAG_URI_TAG, BASELINE_VERSION, SEQUENCE_ATTR, VAST_TAG, VERSION_ATTR, WRAPPER_TAG,
};
use crate::openrtb::Bid;

pub struct TreePodBuilder {
    root: Element,
    version: f64,
    next_sequence: i64,
}

impl TreePodBuilder {
    pub fn new() -> Self {
        Self {
            root: Element::new(VAST_TAG),
            version: BASELINE_VERSION,
            next_sequence: 1,
        }
    }

    fn synthesize_wrapper(url: &str) -> Element {
        let mut tag_uri = Element::new(AD_TAG_URI_TAG);
        tag_uri.children.push(Node::CData(url.to_string()));
        let mut wrapper = Element::new(WRAPPER_TAG);
        wrapper.children.push(Node::Element(tag_uri));
        let mut ad = Element::new(AD_TAG);
        ad.children.push(Node::Element(wrapper));
        ad
    }
}

impl Default for TreePodBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PodBuilder for TreePodBuilder {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn append(&mut self, bid: &Bid) -> Result<(), StitchError> {
        let payload = bid_payload(bid)?;

        if is_bare_url(payload) {
            // A tag-URI-only ad declares no version.
            let mut ad = Self::synthesize_wrapper(payload);
            ad.set_attr(SEQUENCE_ATTR, self.next_sequence.to_string());
            self.root.children.push(Node::Element(ad));
            self.next_sequence += 1;
            return Ok(());
        }

        let creative = dom::parse(payload)?;
        // Only the first top-level ad of a creative participates in the pod.
        let mut ad = match creative.child_elements().find(|e| e.name == AD_TAG) {
            Some(first) => first.clone(),
            None => {
                return Err(StitchError::Structural(format!(
                    "creative for bid {} has no ad element",
                    bid.id
                )))
            }
        };

        self.version = self.version.max(version_value(creative.attr(VERSION_ATTR)));

        ad.set_attr(SEQUENCE_ATTR, self.next_sequence.to_string());
        self.root.children.push(Node::Element(ad));
        self.next_sequence += 1;
        Ok(())
    }

    fn build(&mut self) -> Result<String, StitchError> {
        self.root
            .set_attr(VERSION_ATTR, version_label(self.version));
        self.root.serialize()
    }

    fn len(&self) -> usize {
        (self.next_sequence - 1) as usize
    }
}
