//! Ad-rule expansion: explode one video impression into one impression per
//! configured pod slot.
//!
//! Rule sets arrive keyed by impression id. Expansion replaces each eligible
//! impression with one deep copy per rule; only the rule-governed video
//! fields are overwritten, everything else is carried unchanged.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::openrtb::{BidRequest, Imp};

/// One pod slot rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdRule {
    #[serde(rename = "podid")]
    pub pod_id: String,
    #[serde(rename = "poddur", skip_serializing_if = "Option::is_none")]
    pub pod_dur: Option<i64>,
    #[serde(rename = "maxseq", skip_serializing_if = "Option::is_none")]
    pub max_seq: Option<i64>,
    #[serde(rename = "minduration", default)]
    pub min_duration: i64,
    #[serde(rename = "maxduration", default)]
    pub max_duration: i64,
    #[serde(rename = "rqddurs", skip_serializing_if = "Option::is_none")]
    pub rqd_durs: Option<Vec<i64>>,
    #[serde(rename = "startdelay", skip_serializing_if = "Option::is_none")]
    pub start_delay: Option<i64>,
}

/// A rule set rejected over duration bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub pod_id: String,
    pub msg: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ad rule pod:{} msg:{}", self.pod_id, self.msg)
    }
}

impl std::error::Error for ValidationError {}

/// Validate duration bounds across a rule set.
///
/// Any single violation rejects the whole set; a rule set is never applied
/// partially.
pub fn validate_rules(rules: &[AdRule]) -> Result<(), ValidationError> {
    for rule in rules {
        if rule.min_duration < 0 {
            return Err(ValidationError {
                pod_id: rule.pod_id.clone(),
                msg: format!("minduration {} is negative", rule.min_duration),
            });
        }
        if rule.max_duration <= 0 {
            return Err(ValidationError {
                pod_id: rule.pod_id.clone(),
                msg: format!("maxduration {} is not positive", rule.max_duration),
            });
        }
        if rule.min_duration > rule.max_duration {
            return Err(ValidationError {
                pod_id: rule.pod_id.clone(),
                msg: format!(
                    "minduration {} exceeds maxduration {}",
                    rule.min_duration, rule.max_duration
                ),
            });
        }
    }
    Ok(())
}

/// Expand eligible impressions in place.
///
/// An impression is expanded when it carries a video object without a pod id
/// and a non-empty rule set exists for its id. Expanded impressions keep the
/// original position, in rule order, with ids `{id}-{podID}-{ruleIndex}`.
/// Everything else passes through unchanged.
pub fn expand(ortb: &mut BidRequest, rule_sets: &HashMap<String, Vec<AdRule>>) {
    let imps = std::mem::take(&mut ortb.imp);
    let mut out = Vec::with_capacity(imps.len());

    for imp in imps {
        let eligible = imp
            .video
            .as_ref()
            .map(|v| v.podid.is_none())
            .unwrap_or(false);
        let rules = rule_sets.get(&imp.id).filter(|r| !r.is_empty());

        match (eligible, rules) {
            (true, Some(rules)) => {
                for (index, rule) in rules.iter().enumerate() {
                    out.push(apply_rule(&imp, rule, index));
                }
            }
            _ => out.push(imp),
        }
    }

    ortb.imp = out;
}

fn apply_rule(imp: &Imp, rule: &AdRule, index: usize) -> Imp {
    let mut slot = imp.clone();
    slot.id = format!("{}-{}-{}", imp.id, rule.pod_id, index);
    if let Some(video) = slot.video.as_mut() {
        video.podid = Some(rule.pod_id.clone());
        video.poddur = rule.pod_dur;
        video.maxseq = rule.max_seq;
        video.minduration = Some(rule.min_duration);
        video.maxduration = Some(rule.max_duration);
        video.rqddurs = rule.rqd_durs.clone();
        video.startdelay = rule.start_delay;
    }
    slot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openrtb::Video;

    fn video_imp(id: &str) -> Imp {
        Imp {
            id: id.to_string(),
            tagid: Some("slot".to_string()),
            video: Some(Video {
                mimes: Some(vec!["video/mp4".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn rule(pod_id: &str, min: i64, max: i64) -> AdRule {
        AdRule {
            pod_id: pod_id.to_string(),
            min_duration: min,
            max_duration: max,
            ..Default::default()
        }
    }

    #[test]
    fn test_expansion_ids_and_order() {
        let mut ortb = BidRequest {
            imp: vec![video_imp("imp1")],
            ..Default::default()
        };
        let mut sets = HashMap::new();
        sets.insert(
            "imp1".to_string(),
            vec![rule("pod1", 5, 30), rule("pod2", 5, 30), rule("pod3", 5, 30)],
        );

        expand(&mut ortb, &sets);

        assert_eq!(ortb.imp.len(), 3);
        assert_eq!(ortb.imp[0].id, "imp1-pod1-0");
        assert_eq!(ortb.imp[1].id, "imp1-pod2-1");
        assert_eq!(ortb.imp[2].id, "imp1-pod3-2");
    }

    #[test]
    fn test_non_video_fields_are_copied() {
        let mut ortb = BidRequest {
            imp: vec![video_imp("imp1")],
            ..Default::default()
        };
        let mut sets = HashMap::new();
        sets.insert("imp1".to_string(), vec![rule("pod1", 5, 30)]);

        expand(&mut ortb, &sets);

        let slot = &ortb.imp[0];
        assert_eq!(slot.tagid.as_deref(), Some("slot"));
        let video = slot.video.as_ref().unwrap();
        assert_eq!(video.mimes.as_ref().unwrap(), &vec!["video/mp4".to_string()]);
        assert_eq!(video.podid.as_deref(), Some("pod1"));
        assert_eq!(video.minduration, Some(5));
        assert_eq!(video.maxduration, Some(30));
    }

    #[test]
    fn test_pass_through_cases() {
        let no_video = Imp {
            id: "banner".to_string(),
            ..Default::default()
        };
        let mut with_pod = video_imp("pinned");
        with_pod.video.as_mut().unwrap().podid = Some("existing".to_string());

        let mut ortb = BidRequest {
            imp: vec![no_video, video_imp("unruled"), with_pod],
            ..Default::default()
        };
        let mut sets = HashMap::new();
        sets.insert("banner".to_string(), vec![rule("pod1", 5, 30)]);
        sets.insert("pinned".to_string(), vec![rule("pod1", 5, 30)]);

        expand(&mut ortb, &sets);

        assert_eq!(ortb.imp.len(), 3);
        assert_eq!(ortb.imp[0].id, "banner");
        assert_eq!(ortb.imp[1].id, "unruled");
        assert_eq!(ortb.imp[2].id, "pinned");
        assert_eq!(
            ortb.imp[2].video.as_ref().unwrap().podid.as_deref(),
            Some("existing")
        );
    }

    #[test]
    fn test_insertion_preserves_position() {
        let mut ortb = BidRequest {
            imp: vec![video_imp("a"), video_imp("b"), video_imp("c")],
            ..Default::default()
        };
        let mut sets = HashMap::new();
        sets.insert("b".to_string(), vec![rule("p1", 0, 30), rule("p2", 0, 30)]);

        expand(&mut ortb, &sets);

        let ids: Vec<&str> = ortb.imp.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b-p1-0", "b-p2-1", "c"]);
    }

    #[test]
    fn test_validation_rejects_whole_set() {
        let ok = rule("pod1", 5, 30);
        let bad_max = rule("pod2", 5, 0);
        assert!(validate_rules(&[ok.clone()]).is_ok());
        let err = validate_rules(&[ok.clone(), bad_max]).unwrap_err();
        assert_eq!(err.pod_id, "pod2");

        let negative = rule("pod3", -1, 30);
        assert!(validate_rules(&[negative]).is_err());

        let inverted = rule("pod4", 40, 30);
        assert!(validate_rules(&[inverted]).is_err());
    }

    #[test]
    fn test_empty_rule_set_passes_through() {
        let mut ortb = BidRequest {
            imp: vec![video_imp("imp1")],
            ..Default::default()
        };
        let mut sets = HashMap::new();
        sets.insert("imp1".to_string(), Vec::new());

        expand(&mut ortb, &sets);

        assert_eq!(ortb.imp.len(), 1);
        assert_eq!(ortb.imp[0].id, "imp1");
    }
}
