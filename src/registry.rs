//! Field key dispatch tables.
//!
//! [`FieldKeyRegistry`] holds three read-only tables built once at startup:
//! an exact-key map of typed field setters, an extension-namespace map for
//! the open `*.ext.*` surface, and an ignore set. Every incoming key is
//! classified into exactly one of exact match, extension match, ignored, or
//! unrecognized; unrecognized keys are logged and skipped, never fatal.

use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::keys;
use crate::parser::{self, RequestParser};
use crate::query::FieldError;

/// Setter for one well-known flat key.
pub type FieldSetter = Box<dyn Fn(&mut RequestParser) -> Result<(), FieldError> + Send + Sync>;

/// Setter for one extension namespace; receives the child path and raw value.
pub type ExtSetter =
    Box<dyn Fn(&mut RequestParser, &str, &str) -> Result<(), FieldError> + Send + Sync>;

/// Outcome of classifying one incoming key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    Exact,
    Extension { namespace: &'a str, child: &'a str },
    Ignored,
    Unrecognized,
}

/// Dispatch tables for the flat request vocabulary. Built once, read-only.
pub struct FieldKeyRegistry {
    fields: IndexMap<&'static str, FieldSetter>,
    ext: IndexMap<&'static str, ExtSetter>,
    ignore: HashSet<&'static str>,
}

static DEFAULT_REGISTRY: Lazy<FieldKeyRegistry> = Lazy::new(FieldKeyRegistry::new);

/// The process-wide default registry.
pub fn default_registry() -> &'static FieldKeyRegistry {
    &DEFAULT_REGISTRY
}

impl FieldKeyRegistry {
    /// Resolve a key against the tables.
    ///
    /// Order: exact match, then extension-boundary split, then the ignore
    /// set, then unrecognized. An extension key whose namespace is not
    /// registered (or whose child is empty) falls through the same way.
    pub fn classify<'a>(&self, key: &'a str) -> Classification<'a> {
        if self.fields.contains_key(key) {
            return Classification::Exact;
        }
        if let Some(idx) = key.find(keys::EXT) {
            let namespace = &key[..idx + keys::EXT.len() - 1];
            let child = &key[idx + keys::EXT.len()..];
            if !child.is_empty() && self.ext.contains_key(namespace) {
                return Classification::Extension { namespace, child };
            }
        }
        if self.ignore.contains(key) {
            return Classification::Ignored;
        }
        Classification::Unrecognized
    }

    pub fn field(&self, key: &str) -> Option<&FieldSetter> {
        self.fields.get(key)
    }

    pub fn ext_setter(&self, namespace: &str) -> Option<&ExtSetter> {
        self.ext.get(namespace)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn ext_namespace_count(&self) -> usize {
        self.ext.len()
    }

    /// Build the registry with the full default vocabulary.
    pub fn new() -> Self {
        let mut r = Self {
            fields: IndexMap::new(),
            ext: IndexMap::new(),
            ignore: HashSet::new(),
        };
        r.register_request();
        r.register_source_regs();
        r.register_imp();
        r.register_video();
        r.register_site();
        r.register_app();
        r.register_device();
        r.register_user();
        r.register_wrapper_ext();
        r.register_adpod_ext();
        r.register_prebid_ext();
        r.register_ext_namespaces();
        r.ignore.insert(keys::DEBUG);
        r
    }

    fn register_request(&mut self) {
        self.fields
            .insert(keys::REQ_ID, string(keys::REQ_ID, |p, v| p.ortb_mut().id = v));
        self.fields
            .insert(keys::REQ_TEST, int(keys::REQ_TEST, |p, v| p.ortb_mut().test = Some(v)));
        self.fields
            .insert(keys::REQ_AT, int(keys::REQ_AT, |p, v| p.ortb_mut().at = Some(v)));
        self.fields
            .insert(keys::REQ_TMAX, int(keys::REQ_TMAX, |p, v| p.ortb_mut().tmax = Some(v)));
        self.fields.insert(
            keys::REQ_WSEAT,
            string_array(keys::REQ_WSEAT, |p, v| p.ortb_mut().wseat = Some(v)),
        );
        self.fields.insert(
            keys::REQ_WLANG,
            string_array(keys::REQ_WLANG, |p, v| p.ortb_mut().wlang = Some(v)),
        );
        self.fields.insert(
            keys::REQ_BSEAT,
            string_array(keys::REQ_BSEAT, |p, v| p.ortb_mut().bseat = Some(v)),
        );
        self.fields.insert(
            keys::REQ_ALLIMPS,
            int(keys::REQ_ALLIMPS, |p, v| p.ortb_mut().allimps = Some(v)),
        );
        self.fields.insert(
            keys::REQ_CUR,
            string_array(keys::REQ_CUR, |p, v| p.ortb_mut().cur = Some(v)),
        );
        self.fields.insert(
            keys::REQ_BCAT,
            string_array(keys::REQ_BCAT, |p, v| p.ortb_mut().bcat = Some(v)),
        );
        self.fields.insert(
            keys::REQ_BADV,
            string_array(keys::REQ_BADV, |p, v| p.ortb_mut().badv = Some(v)),
        );
        self.fields.insert(
            keys::REQ_BAPP,
            string_array(keys::REQ_BAPP, |p, v| p.ortb_mut().bapp = Some(v)),
        );
    }

    fn register_source_regs(&mut self) {
        self.fields
            .insert(keys::SRC_FD, int(keys::SRC_FD, |p, v| p.source().fd = Some(v)));
        self.fields
            .insert(keys::SRC_TID, string(keys::SRC_TID, |p, v| p.source().tid = Some(v)));
        self.fields.insert(
            keys::SRC_PCHAIN,
            string(keys::SRC_PCHAIN, |p, v| p.source().pchain = Some(v)),
        );
        self.fields
            .insert(keys::SRC_SCHAIN, custom(parser::source_schain));

        self.fields.insert(
            keys::REGS_COPPA,
            int(keys::REGS_COPPA, |p, v| p.regs().coppa = Some(v)),
        );
        self.fields.insert(
            keys::REGS_GPP,
            string(keys::REGS_GPP, |p, v| p.regs().gpp = Some(v)),
        );
        self.fields.insert(
            keys::REGS_GPP_SID,
            int_array(keys::REGS_GPP_SID, |p, v| p.regs().gpp_sid = Some(v)),
        );
        self.fields
            .insert(keys::REGS_EXT_GDPR, custom(parser::regs_ext_gdpr));
        self.fields
            .insert(keys::REGS_EXT_US_PRIVACY, custom(parser::regs_ext_us_privacy));
    }

    fn register_imp(&mut self) {
        self.fields
            .insert(keys::IMP_ID, string(keys::IMP_ID, |p, v| p.imp().id = v));
        self.fields.insert(
            keys::IMP_DISPLAYMANAGER,
            string(keys::IMP_DISPLAYMANAGER, |p, v| {
                p.imp().displaymanager = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_DISPLAYMANAGERVER,
            string(keys::IMP_DISPLAYMANAGERVER, |p, v| {
                p.imp().displaymanagerver = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_INSTL,
            int(keys::IMP_INSTL, |p, v| p.imp().instl = Some(v)),
        );
        self.fields.insert(
            keys::IMP_TAGID,
            string(keys::IMP_TAGID, |p, v| p.imp().tagid = Some(v)),
        );
        self.fields
            .insert(keys::IMP_BIDFLOOR, custom(parser::imp_bid_floor));
        self.fields
            .insert(keys::IMP_BIDFLOORCUR, custom(parser::imp_bid_floor_cur));
        self.fields.insert(
            keys::IMP_CLICKBROWSER,
            bool_int(keys::IMP_CLICKBROWSER, |p, v| p.imp().clickbrowser = Some(v)),
        );
        self.fields.insert(
            keys::IMP_SECURE,
            bool_int(keys::IMP_SECURE, |p, v| p.imp().secure = Some(v)),
        );
        self.fields.insert(
            keys::IMP_IFRAMEBUSTER,
            string_array(keys::IMP_IFRAMEBUSTER, |p, v| {
                p.imp().iframebuster = Some(v)
            }),
        );
        self.fields
            .insert(keys::IMP_EXP, int(keys::IMP_EXP, |p, v| p.imp().exp = Some(v)));
        self.fields.insert(keys::IMP_PMP, custom(parser::imp_pmp));
        self.fields
            .insert(keys::IMP_EXT_BIDDER, custom(parser::imp_ext_bidder));
        self.fields
            .insert(keys::IMP_EXT_PREBID, custom(parser::imp_ext_prebid));
    }

    fn register_video(&mut self) {
        self.fields.insert(
            keys::IMP_VID_MIMES,
            string_array(keys::IMP_VID_MIMES, |p, v| p.video().mimes = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_MINDURATION,
            int(keys::IMP_VID_MINDURATION, |p, v| {
                p.video().minduration = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_VID_MAXDURATION,
            int(keys::IMP_VID_MAXDURATION, |p, v| {
                p.video().maxduration = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_VID_PROTOCOLS,
            int_array(keys::IMP_VID_PROTOCOLS, |p, v| {
                p.video().protocols = Some(v)
            }),
        );
        self.fields
            .insert(keys::IMP_VID_W, int(keys::IMP_VID_W, |p, v| p.video().w = Some(v)));
        self.fields
            .insert(keys::IMP_VID_H, int(keys::IMP_VID_H, |p, v| p.video().h = Some(v)));
        self.fields.insert(
            keys::IMP_VID_STARTDELAY,
            int(keys::IMP_VID_STARTDELAY, |p, v| {
                p.video().startdelay = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_VID_PLACEMENT,
            int(keys::IMP_VID_PLACEMENT, |p, v| p.video().placement = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_PLCMT,
            int(keys::IMP_VID_PLCMT, |p, v| p.video().plcmt = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_LINEARITY,
            int(keys::IMP_VID_LINEARITY, |p, v| p.video().linearity = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_SKIP,
            bool_int(keys::IMP_VID_SKIP, |p, v| p.video().skip = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_SKIPMIN,
            int(keys::IMP_VID_SKIPMIN, |p, v| p.video().skipmin = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_SKIPAFTER,
            int(keys::IMP_VID_SKIPAFTER, |p, v| p.video().skipafter = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_SEQUENCE,
            int(keys::IMP_VID_SEQUENCE, |p, v| p.video().sequence = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_BATTR,
            int_array(keys::IMP_VID_BATTR, |p, v| p.video().battr = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_MAXEXTENDED,
            int(keys::IMP_VID_MAXEXTENDED, |p, v| {
                p.video().maxextended = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_VID_MINBITRATE,
            int(keys::IMP_VID_MINBITRATE, |p, v| {
                p.video().minbitrate = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_VID_MAXBITRATE,
            int(keys::IMP_VID_MAXBITRATE, |p, v| {
                p.video().maxbitrate = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_VID_BOXINGALLOWED,
            bool_int(keys::IMP_VID_BOXINGALLOWED, |p, v| {
                p.video().boxingallowed = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_VID_PLAYBACKMETHOD,
            int_array(keys::IMP_VID_PLAYBACKMETHOD, |p, v| {
                p.video().playbackmethod = Some(v)
            }),
        );
        self.fields.insert(
            keys::IMP_VID_DELIVERY,
            int_array(keys::IMP_VID_DELIVERY, |p, v| p.video().delivery = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_POS,
            int(keys::IMP_VID_POS, |p, v| p.video().pos = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_API,
            int_array(keys::IMP_VID_API, |p, v| p.video().api = Some(v)),
        );
        self.fields.insert(
            keys::IMP_VID_COMPANIONTYPE,
            int_array(keys::IMP_VID_COMPANIONTYPE, |p, v| {
                p.video().companiontype = Some(v)
            }),
        );

        self.fields.insert(
            keys::IMP_VID_EXT_OFFSET,
            video_ext_int(keys::IMP_VID_EXT_OFFSET, &[keys::EXT_ADPOD_OFFSET]),
        );
        self.fields.insert(
            keys::IMP_VID_EXT_ADPOD_MINADS,
            video_ext_int(
                keys::IMP_VID_EXT_ADPOD_MINADS,
                &[keys::EXT_ADPOD, keys::EXT_ADPOD_MINADS],
            ),
        );
        self.fields.insert(
            keys::IMP_VID_EXT_ADPOD_MAXADS,
            video_ext_int(
                keys::IMP_VID_EXT_ADPOD_MAXADS,
                &[keys::EXT_ADPOD, keys::EXT_ADPOD_MAXADS],
            ),
        );
        self.fields.insert(
            keys::IMP_VID_EXT_ADPOD_ADMINDURATION,
            video_ext_int(
                keys::IMP_VID_EXT_ADPOD_ADMINDURATION,
                &[keys::EXT_ADPOD, keys::EXT_ADPOD_ADMINDURATION],
            ),
        );
        self.fields.insert(
            keys::IMP_VID_EXT_ADPOD_ADMAXDURATION,
            video_ext_int(
                keys::IMP_VID_EXT_ADPOD_ADMAXDURATION,
                &[keys::EXT_ADPOD, keys::EXT_ADPOD_ADMAXDURATION],
            ),
        );
        self.fields.insert(
            keys::IMP_VID_EXT_ADPOD_EXCLADV,
            video_ext_float(
                keys::IMP_VID_EXT_ADPOD_EXCLADV,
                &[keys::EXT_ADPOD, keys::EXT_ADPOD_EXCLADV],
            ),
        );
        self.fields.insert(
            keys::IMP_VID_EXT_ADPOD_EXCLIABCAT,
            video_ext_float(
                keys::IMP_VID_EXT_ADPOD_EXCLIABCAT,
                &[keys::EXT_ADPOD, keys::EXT_ADPOD_EXCLIABCAT],
            ),
        );
    }

    fn register_site(&mut self) {
        self.fields.insert(
            keys::SITE_ID,
            string(keys::SITE_ID, |p, v| p.site().id = Some(v)),
        );
        self.fields.insert(
            keys::SITE_NAME,
            string(keys::SITE_NAME, |p, v| p.site().name = Some(v)),
        );
        self.fields.insert(
            keys::SITE_DOMAIN,
            string(keys::SITE_DOMAIN, |p, v| p.site().domain = Some(v)),
        );
        self.fields.insert(
            keys::SITE_PAGE,
            string(keys::SITE_PAGE, |p, v| p.site().page = Some(v)),
        );
        self.fields.insert(
            keys::SITE_REF,
            string(keys::SITE_REF, |p, v| p.site().r#ref = Some(v)),
        );
        self.fields.insert(
            keys::SITE_SEARCH,
            string(keys::SITE_SEARCH, |p, v| p.site().search = Some(v)),
        );
        self.fields.insert(
            keys::SITE_MOBILE,
            bool_int(keys::SITE_MOBILE, |p, v| p.site().mobile = Some(v)),
        );
        self.fields.insert(
            keys::SITE_CAT,
            string_array(keys::SITE_CAT, |p, v| p.site().cat = Some(v)),
        );
        self.fields.insert(
            keys::SITE_SECTIONCAT,
            string_array(keys::SITE_SECTIONCAT, |p, v| p.site().sectioncat = Some(v)),
        );
        self.fields.insert(
            keys::SITE_PAGECAT,
            string_array(keys::SITE_PAGECAT, |p, v| p.site().pagecat = Some(v)),
        );
        self.fields.insert(
            keys::SITE_PRIVACYPOLICY,
            bool_int(keys::SITE_PRIVACYPOLICY, |p, v| {
                p.site().privacypolicy = Some(v)
            }),
        );
        self.fields.insert(
            keys::SITE_KEYWORDS,
            string(keys::SITE_KEYWORDS, |p, v| p.site().keywords = Some(v)),
        );

        self.fields.insert(
            keys::SITE_PUB_ID,
            string(keys::SITE_PUB_ID, |p, v| p.site_publisher().id = Some(v)),
        );
        self.fields.insert(
            keys::SITE_PUB_NAME,
            string(keys::SITE_PUB_NAME, |p, v| p.site_publisher().name = Some(v)),
        );
        self.fields.insert(
            keys::SITE_PUB_CAT,
            string_array(keys::SITE_PUB_CAT, |p, v| p.site_publisher().cat = Some(v)),
        );
        self.fields.insert(
            keys::SITE_PUB_DOMAIN,
            string(keys::SITE_PUB_DOMAIN, |p, v| {
                p.site_publisher().domain = Some(v)
            }),
        );

        self.register_content_keys(true);
    }

    fn register_app(&mut self) {
        self.fields
            .insert(keys::APP_ID, string(keys::APP_ID, |p, v| p.app().id = Some(v)));
        self.fields.insert(
            keys::APP_NAME,
            string(keys::APP_NAME, |p, v| p.app().name = Some(v)),
        );
        self.fields.insert(
            keys::APP_BUNDLE,
            string(keys::APP_BUNDLE, |p, v| p.app().bundle = Some(v)),
        );
        self.fields.insert(
            keys::APP_DOMAIN,
            string(keys::APP_DOMAIN, |p, v| p.app().domain = Some(v)),
        );
        self.fields.insert(
            keys::APP_STOREURL,
            string(keys::APP_STOREURL, |p, v| p.app().storeurl = Some(v)),
        );
        self.fields.insert(
            keys::APP_VER,
            string(keys::APP_VER, |p, v| p.app().ver = Some(v)),
        );
        self.fields.insert(
            keys::APP_PAID,
            bool_int(keys::APP_PAID, |p, v| p.app().paid = Some(v)),
        );
        self.fields.insert(
            keys::APP_CAT,
            string_array(keys::APP_CAT, |p, v| p.app().cat = Some(v)),
        );
        self.fields.insert(
            keys::APP_SECTIONCAT,
            string_array(keys::APP_SECTIONCAT, |p, v| p.app().sectioncat = Some(v)),
        );
        self.fields.insert(
            keys::APP_PAGECAT,
            string_array(keys::APP_PAGECAT, |p, v| p.app().pagecat = Some(v)),
        );
        self.fields.insert(
            keys::APP_PRIVACYPOLICY,
            bool_int(keys::APP_PRIVACYPOLICY, |p, v| {
                p.app().privacypolicy = Some(v)
            }),
        );
        self.fields.insert(
            keys::APP_KEYWORDS,
            string(keys::APP_KEYWORDS, |p, v| p.app().keywords = Some(v)),
        );

        self.fields.insert(
            keys::APP_PUB_ID,
            string(keys::APP_PUB_ID, |p, v| p.app_publisher().id = Some(v)),
        );
        self.fields.insert(
            keys::APP_PUB_NAME,
            string(keys::APP_PUB_NAME, |p, v| p.app_publisher().name = Some(v)),
        );
        self.fields.insert(
            keys::APP_PUB_CAT,
            string_array(keys::APP_PUB_CAT, |p, v| p.app_publisher().cat = Some(v)),
        );
        self.fields.insert(
            keys::APP_PUB_DOMAIN,
            string(keys::APP_PUB_DOMAIN, |p, v| {
                p.app_publisher().domain = Some(v)
            }),
        );

        self.register_content_keys(false);
    }

    /// Content keys are mirrored between the site and app sections.
    fn register_content_keys(&mut self, site: bool) {
        type ContentAccessor = fn(&mut RequestParser) -> &mut crate::openrtb::Content;
        let content: ContentAccessor = if site {
            RequestParser::site_content
        } else {
            RequestParser::app_content
        };

        macro_rules! cnt_string {
            ($key:expr, $field:ident) => {
                self.fields.insert(
                    $key,
                    Box::new(move |p: &mut RequestParser| {
                        if let Some(v) = p.values().get($key).map(str::to_string) {
                            content(p).$field = Some(v);
                        }
                        Ok(())
                    }),
                );
            };
        }
        macro_rules! cnt_int {
            ($key:expr, $field:ident) => {
                self.fields.insert(
                    $key,
                    Box::new(move |p: &mut RequestParser| {
                        if let Some(v) = p.values().get_int($key)? {
                            content(p).$field = Some(v);
                        }
                        Ok(())
                    }),
                );
            };
        }
        macro_rules! cnt_string_array {
            ($key:expr, $field:ident) => {
                self.fields.insert(
                    $key,
                    Box::new(move |p: &mut RequestParser| {
                        if let Some(v) = p.values().get_string_array($key) {
                            content(p).$field = Some(v);
                        }
                        Ok(())
                    }),
                );
            };
        }

        if site {
            cnt_string!(keys::SITE_CNT_ID, id);
            cnt_int!(keys::SITE_CNT_EPISODE, episode);
            cnt_string!(keys::SITE_CNT_TITLE, title);
            cnt_string!(keys::SITE_CNT_SERIES, series);
            cnt_string!(keys::SITE_CNT_SEASON, season);
            cnt_string!(keys::SITE_CNT_ARTIST, artist);
            cnt_string!(keys::SITE_CNT_GENRE, genre);
            cnt_string!(keys::SITE_CNT_ALBUM, album);
            cnt_string!(keys::SITE_CNT_ISRC, isrc);
            cnt_string!(keys::SITE_CNT_URL, url);
            cnt_string_array!(keys::SITE_CNT_CAT, cat);
            cnt_int!(keys::SITE_CNT_PRODQ, prodq);
            cnt_int!(keys::SITE_CNT_VIDEOQUALITY, videoquality);
            cnt_int!(keys::SITE_CNT_CONTEXT, context);
            cnt_string!(keys::SITE_CNT_CONTENTRATING, contentrating);
            cnt_string!(keys::SITE_CNT_USERRATING, userrating);
            cnt_int!(keys::SITE_CNT_QAGMEDIARATING, qagmediarating);
            cnt_string!(keys::SITE_CNT_KEYWORDS, keywords);
            cnt_int!(keys::SITE_CNT_LIVESTREAM, livestream);
            cnt_int!(keys::SITE_CNT_SOURCERELATIONSHIP, sourcerelationship);
            cnt_int!(keys::SITE_CNT_LEN, len);
            cnt_string!(keys::SITE_CNT_LANGUAGE, language);
            cnt_int!(keys::SITE_CNT_EMBEDDABLE, embeddable);
        } else {
            cnt_string!(keys::APP_CNT_ID, id);
            cnt_int!(keys::APP_CNT_EPISODE, episode);
            cnt_string!(keys::APP_CNT_TITLE, title);
            cnt_string!(keys::APP_CNT_SERIES, series);
            cnt_string!(keys::APP_CNT_SEASON, season);
            cnt_string!(keys::APP_CNT_ARTIST, artist);
            cnt_string!(keys::APP_CNT_GENRE, genre);
            cnt_string!(keys::APP_CNT_ALBUM, album);
            cnt_string!(keys::APP_CNT_ISRC, isrc);
            cnt_string!(keys::APP_CNT_URL, url);
            cnt_string_array!(keys::APP_CNT_CAT, cat);
            cnt_int!(keys::APP_CNT_PRODQ, prodq);
            cnt_int!(keys::APP_CNT_VIDEOQUALITY, videoquality);
            cnt_int!(keys::APP_CNT_CONTEXT, context);
            cnt_string!(keys::APP_CNT_CONTENTRATING, contentrating);
            cnt_string!(keys::APP_CNT_USERRATING, userrating);
            cnt_int!(keys::APP_CNT_QAGMEDIARATING, qagmediarating);
            cnt_string!(keys::APP_CNT_KEYWORDS, keywords);
            cnt_int!(keys::APP_CNT_LIVESTREAM, livestream);
            cnt_int!(keys::APP_CNT_SOURCERELATIONSHIP, sourcerelationship);
            cnt_int!(keys::APP_CNT_LEN, len);
            cnt_string!(keys::APP_CNT_LANGUAGE, language);
            cnt_int!(keys::APP_CNT_EMBEDDABLE, embeddable);
        }

        if site {
            self.fields.insert(
                keys::SITE_CNT_PROD_ID,
                string(keys::SITE_CNT_PROD_ID, |p, v| {
                    p.site_content_producer().id = Some(v)
                }),
            );
            self.fields.insert(
                keys::SITE_CNT_PROD_NAME,
                string(keys::SITE_CNT_PROD_NAME, |p, v| {
                    p.site_content_producer().name = Some(v)
                }),
            );
            self.fields.insert(
                keys::SITE_CNT_PROD_CAT,
                string_array(keys::SITE_CNT_PROD_CAT, |p, v| {
                    p.site_content_producer().cat = Some(v)
                }),
            );
            self.fields.insert(
                keys::SITE_CNT_PROD_DOMAIN,
                string(keys::SITE_CNT_PROD_DOMAIN, |p, v| {
                    p.site_content_producer().domain = Some(v)
                }),
            );
            self.fields.insert(
                keys::SITE_CNT_NETWORK_ID,
                string(keys::SITE_CNT_NETWORK_ID, |p, v| {
                    p.site_content_network().id = Some(v)
                }),
            );
            self.fields.insert(
                keys::SITE_CNT_NETWORK_NAME,
                string(keys::SITE_CNT_NETWORK_NAME, |p, v| {
                    p.site_content_network().name = Some(v)
                }),
            );
            self.fields.insert(
                keys::SITE_CNT_NETWORK_DOMAIN,
                string(keys::SITE_CNT_NETWORK_DOMAIN, |p, v| {
                    p.site_content_network().domain = Some(v)
                }),
            );
            self.fields.insert(
                keys::SITE_CNT_CHANNEL_ID,
                string(keys::SITE_CNT_CHANNEL_ID, |p, v| {
                    p.site_content_channel().id = Some(v)
                }),
            );
            self.fields.insert(
                keys::SITE_CNT_CHANNEL_NAME,
                string(keys::SITE_CNT_CHANNEL_NAME, |p, v| {
                    p.site_content_channel().name = Some(v)
                }),
            );
            self.fields.insert(
                keys::SITE_CNT_CHANNEL_DOMAIN,
                string(keys::SITE_CNT_CHANNEL_DOMAIN, |p, v| {
                    p.site_content_channel().domain = Some(v)
                }),
            );
        } else {
            self.fields.insert(
                keys::APP_CNT_PROD_ID,
                string(keys::APP_CNT_PROD_ID, |p, v| {
                    p.app_content_producer().id = Some(v)
                }),
            );
            self.fields.insert(
                keys::APP_CNT_PROD_NAME,
                string(keys::APP_CNT_PROD_NAME, |p, v| {
                    p.app_content_producer().name = Some(v)
                }),
            );
            self.fields.insert(
                keys::APP_CNT_PROD_CAT,
                string_array(keys::APP_CNT_PROD_CAT, |p, v| {
                    p.app_content_producer().cat = Some(v)
                }),
            );
            self.fields.insert(
                keys::APP_CNT_PROD_DOMAIN,
                string(keys::APP_CNT_PROD_DOMAIN, |p, v| {
                    p.app_content_producer().domain = Some(v)
                }),
            );
            self.fields.insert(
                keys::APP_CNT_NETWORK_ID,
                string(keys::APP_CNT_NETWORK_ID, |p, v| {
                    p.app_content_network().id = Some(v)
                }),
            );
            self.fields.insert(
                keys::APP_CNT_NETWORK_NAME,
                string(keys::APP_CNT_NETWORK_NAME, |p, v| {
                    p.app_content_network().name = Some(v)
                }),
            );
            self.fields.insert(
                keys::APP_CNT_NETWORK_DOMAIN,
                string(keys::APP_CNT_NETWORK_DOMAIN, |p, v| {
                    p.app_content_network().domain = Some(v)
                }),
            );
            self.fields.insert(
                keys::APP_CNT_CHANNEL_ID,
                string(keys::APP_CNT_CHANNEL_ID, |p, v| {
                    p.app_content_channel().id = Some(v)
                }),
            );
            self.fields.insert(
                keys::APP_CNT_CHANNEL_NAME,
                string(keys::APP_CNT_CHANNEL_NAME, |p, v| {
                    p.app_content_channel().name = Some(v)
                }),
            );
            self.fields.insert(
                keys::APP_CNT_CHANNEL_DOMAIN,
                string(keys::APP_CNT_CHANNEL_DOMAIN, |p, v| {
                    p.app_content_channel().domain = Some(v)
                }),
            );
        }
    }

    fn register_device(&mut self) {
        self.fields
            .insert(keys::DEV_UA, string(keys::DEV_UA, |p, v| p.device().ua = Some(v)));
        self.fields.insert(
            keys::DEV_DNT,
            bool_int(keys::DEV_DNT, |p, v| p.device().dnt = Some(v)),
        );
        self.fields.insert(
            keys::DEV_LMT,
            bool_int(keys::DEV_LMT, |p, v| p.device().lmt = Some(v)),
        );
        self.fields
            .insert(keys::DEV_IP, string(keys::DEV_IP, |p, v| p.device().ip = Some(v)));
        self.fields.insert(
            keys::DEV_IPV6,
            string(keys::DEV_IPV6, |p, v| p.device().ipv6 = Some(v)),
        );
        self.fields.insert(
            keys::DEV_DEVICETYPE,
            int(keys::DEV_DEVICETYPE, |p, v| p.device().devicetype = Some(v)),
        );
        self.fields.insert(
            keys::DEV_MAKE,
            string(keys::DEV_MAKE, |p, v| p.device().make = Some(v)),
        );
        self.fields.insert(
            keys::DEV_MODEL,
            string(keys::DEV_MODEL, |p, v| p.device().model = Some(v)),
        );
        self.fields
            .insert(keys::DEV_OS, string(keys::DEV_OS, |p, v| p.device().os = Some(v)));
        self.fields.insert(
            keys::DEV_OSV,
            string(keys::DEV_OSV, |p, v| p.device().osv = Some(v)),
        );
        self.fields.insert(
            keys::DEV_HWV,
            string(keys::DEV_HWV, |p, v| p.device().hwv = Some(v)),
        );
        self.fields
            .insert(keys::DEV_W, int(keys::DEV_W, |p, v| p.device().w = Some(v)));
        self.fields
            .insert(keys::DEV_H, int(keys::DEV_H, |p, v| p.device().h = Some(v)));
        self.fields
            .insert(keys::DEV_PPI, int(keys::DEV_PPI, |p, v| p.device().ppi = Some(v)));
        self.fields.insert(
            keys::DEV_PXRATIO,
            float(keys::DEV_PXRATIO, |p, v| p.device().pxratio = Some(v)),
        );
        self.fields.insert(
            keys::DEV_JS,
            bool_int(keys::DEV_JS, |p, v| p.device().js = Some(v)),
        );
        self.fields.insert(
            keys::DEV_GEOFETCH,
            bool_int(keys::DEV_GEOFETCH, |p, v| p.device().geofetch = Some(v)),
        );
        self.fields.insert(
            keys::DEV_FLASHVER,
            string(keys::DEV_FLASHVER, |p, v| p.device().flashver = Some(v)),
        );
        self.fields.insert(
            keys::DEV_LANGUAGE,
            string(keys::DEV_LANGUAGE, |p, v| p.device().language = Some(v)),
        );
        self.fields.insert(
            keys::DEV_CARRIER,
            string(keys::DEV_CARRIER, |p, v| p.device().carrier = Some(v)),
        );
        self.fields.insert(
            keys::DEV_MCCMNC,
            string(keys::DEV_MCCMNC, |p, v| p.device().mccmnc = Some(v)),
        );
        self.fields.insert(
            keys::DEV_CONNECTIONTYPE,
            int(keys::DEV_CONNECTIONTYPE, |p, v| {
                p.device().connectiontype = Some(v)
            }),
        );
        self.fields.insert(
            keys::DEV_IFA,
            string(keys::DEV_IFA, |p, v| p.device().ifa = Some(v)),
        );
        self.fields.insert(
            keys::DEV_DIDSHA1,
            string(keys::DEV_DIDSHA1, |p, v| p.device().didsha1 = Some(v)),
        );
        self.fields.insert(
            keys::DEV_DIDMD5,
            string(keys::DEV_DIDMD5, |p, v| p.device().didmd5 = Some(v)),
        );
        self.fields.insert(
            keys::DEV_DPIDSHA1,
            string(keys::DEV_DPIDSHA1, |p, v| p.device().dpidsha1 = Some(v)),
        );
        self.fields.insert(
            keys::DEV_DPIDMD5,
            string(keys::DEV_DPIDMD5, |p, v| p.device().dpidmd5 = Some(v)),
        );
        self.fields.insert(
            keys::DEV_MACSHA1,
            string(keys::DEV_MACSHA1, |p, v| p.device().macsha1 = Some(v)),
        );
        self.fields.insert(
            keys::DEV_MACMD5,
            string(keys::DEV_MACMD5, |p, v| p.device().macmd5 = Some(v)),
        );

        self.fields.insert(
            keys::DEV_GEO_LAT,
            float(keys::DEV_GEO_LAT, |p, v| p.device_geo().lat = Some(v)),
        );
        self.fields.insert(
            keys::DEV_GEO_LON,
            float(keys::DEV_GEO_LON, |p, v| p.device_geo().lon = Some(v)),
        );
        self.fields.insert(
            keys::DEV_GEO_TYPE,
            int(keys::DEV_GEO_TYPE, |p, v| p.device_geo().geo_type = Some(v)),
        );
        self.fields.insert(
            keys::DEV_GEO_ACCURACY,
            int(keys::DEV_GEO_ACCURACY, |p, v| {
                p.device_geo().accuracy = Some(v)
            }),
        );
        self.fields.insert(
            keys::DEV_GEO_LASTFIX,
            int(keys::DEV_GEO_LASTFIX, |p, v| p.device_geo().lastfix = Some(v)),
        );
        self.fields.insert(
            keys::DEV_GEO_IPSERVICE,
            int(keys::DEV_GEO_IPSERVICE, |p, v| {
                p.device_geo().ipservice = Some(v)
            }),
        );
        self.fields.insert(
            keys::DEV_GEO_COUNTRY,
            string(keys::DEV_GEO_COUNTRY, |p, v| {
                p.device_geo().country = Some(v)
            }),
        );
        self.fields.insert(
            keys::DEV_GEO_REGION,
            string(keys::DEV_GEO_REGION, |p, v| p.device_geo().region = Some(v)),
        );
        self.fields.insert(
            keys::DEV_GEO_REGIONFIPS104,
            string(keys::DEV_GEO_REGIONFIPS104, |p, v| {
                p.device_geo().regionfips104 = Some(v)
            }),
        );
        self.fields.insert(
            keys::DEV_GEO_METRO,
            string(keys::DEV_GEO_METRO, |p, v| p.device_geo().metro = Some(v)),
        );
        self.fields.insert(
            keys::DEV_GEO_CITY,
            string(keys::DEV_GEO_CITY, |p, v| p.device_geo().city = Some(v)),
        );
        self.fields.insert(
            keys::DEV_GEO_ZIP,
            string(keys::DEV_GEO_ZIP, |p, v| p.device_geo().zip = Some(v)),
        );
        self.fields.insert(
            keys::DEV_GEO_UTCOFFSET,
            int(keys::DEV_GEO_UTCOFFSET, |p, v| {
                p.device_geo().utcoffset = Some(v)
            }),
        );

        self.fields
            .insert(keys::DEV_EXT_IFA_TYPE, custom(parser::device_ext_ifa_type));
        self.fields
            .insert(keys::DEV_EXT_SESSION_ID, custom(parser::device_ext_session_id));
        self.fields
            .insert(keys::DEV_EXT_ATTS, custom(parser::device_ext_atts));
    }

    fn register_user(&mut self) {
        self.fields
            .insert(keys::USER_ID, string(keys::USER_ID, |p, v| p.user().id = Some(v)));
        self.fields.insert(
            keys::USER_BUYERUID,
            string(keys::USER_BUYERUID, |p, v| p.user().buyeruid = Some(v)),
        );
        self.fields.insert(
            keys::USER_YOB,
            int(keys::USER_YOB, |p, v| p.user().yob = Some(v)),
        );
        self.fields.insert(
            keys::USER_GENDER,
            string(keys::USER_GENDER, |p, v| p.user().gender = Some(v)),
        );
        self.fields.insert(
            keys::USER_KEYWORDS,
            string(keys::USER_KEYWORDS, |p, v| p.user().keywords = Some(v)),
        );
        self.fields.insert(
            keys::USER_CUSTOMDATA,
            string(keys::USER_CUSTOMDATA, |p, v| p.user().customdata = Some(v)),
        );
        self.fields.insert(keys::USER_DATA, custom(parser::user_data));

        self.fields.insert(
            keys::USER_GEO_LAT,
            float(keys::USER_GEO_LAT, |p, v| p.user_geo().lat = Some(v)),
        );
        self.fields.insert(
            keys::USER_GEO_LON,
            float(keys::USER_GEO_LON, |p, v| p.user_geo().lon = Some(v)),
        );
        self.fields.insert(
            keys::USER_GEO_TYPE,
            int(keys::USER_GEO_TYPE, |p, v| p.user_geo().geo_type = Some(v)),
        );
        self.fields.insert(
            keys::USER_GEO_ACCURACY,
            int(keys::USER_GEO_ACCURACY, |p, v| {
                p.user_geo().accuracy = Some(v)
            }),
        );
        self.fields.insert(
            keys::USER_GEO_LASTFIX,
            int(keys::USER_GEO_LASTFIX, |p, v| p.user_geo().lastfix = Some(v)),
        );
        self.fields.insert(
            keys::USER_GEO_IPSERVICE,
            int(keys::USER_GEO_IPSERVICE, |p, v| {
                p.user_geo().ipservice = Some(v)
            }),
        );
        self.fields.insert(
            keys::USER_GEO_COUNTRY,
            string(keys::USER_GEO_COUNTRY, |p, v| p.user_geo().country = Some(v)),
        );
        self.fields.insert(
            keys::USER_GEO_REGION,
            string(keys::USER_GEO_REGION, |p, v| p.user_geo().region = Some(v)),
        );
        self.fields.insert(
            keys::USER_GEO_REGIONFIPS104,
            string(keys::USER_GEO_REGIONFIPS104, |p, v| {
                p.user_geo().regionfips104 = Some(v)
            }),
        );
        self.fields.insert(
            keys::USER_GEO_METRO,
            string(keys::USER_GEO_METRO, |p, v| p.user_geo().metro = Some(v)),
        );
        self.fields.insert(
            keys::USER_GEO_CITY,
            string(keys::USER_GEO_CITY, |p, v| p.user_geo().city = Some(v)),
        );
        self.fields.insert(
            keys::USER_GEO_ZIP,
            string(keys::USER_GEO_ZIP, |p, v| p.user_geo().zip = Some(v)),
        );
        self.fields.insert(
            keys::USER_GEO_UTCOFFSET,
            int(keys::USER_GEO_UTCOFFSET, |p, v| {
                p.user_geo().utcoffset = Some(v)
            }),
        );

        self.fields
            .insert(keys::USER_EXT_CONSENT, custom(parser::user_ext_consent));
        self.fields
            .insert(keys::USER_EXT_EIDS, custom(parser::user_ext_eids));
    }

    fn register_wrapper_ext(&mut self) {
        self.fields.insert(
            keys::REQ_EXT_WRAPPER_PROFILEID,
            wrapper_int(keys::REQ_EXT_WRAPPER_PROFILEID, keys::EXT_PROFILE_ID),
        );
        self.fields.insert(
            keys::REQ_EXT_WRAPPER_VERSIONID,
            wrapper_int(keys::REQ_EXT_WRAPPER_VERSIONID, keys::EXT_VERSION_ID),
        );
        self.fields.insert(
            keys::REQ_EXT_WRAPPER_SSAUCTION,
            wrapper_int(keys::REQ_EXT_WRAPPER_SSAUCTION, keys::EXT_SSAUCTION),
        );
        self.fields.insert(
            keys::REQ_EXT_WRAPPER_SUMRY_DISABLE,
            wrapper_int(keys::REQ_EXT_WRAPPER_SUMRY_DISABLE, keys::EXT_SUMRY_DISABLE),
        );
        self.fields.insert(
            keys::REQ_EXT_WRAPPER_CLIENTCONFIG,
            wrapper_int(keys::REQ_EXT_WRAPPER_CLIENTCONFIG, keys::EXT_CLIENTCONFIG),
        );
        self.fields.insert(
            keys::REQ_EXT_WRAPPER_SUPPORTDEALS,
            wrapper_bool(keys::REQ_EXT_WRAPPER_SUPPORTDEALS, keys::EXT_SUPPORTDEALS),
        );
        self.fields.insert(
            keys::REQ_EXT_WRAPPER_INCLUDEBRANDCATEGORY,
            wrapper_int(
                keys::REQ_EXT_WRAPPER_INCLUDEBRANDCATEGORY,
                keys::EXT_INCLUDEBRANDCATEGORY,
            ),
        );
        self.fields.insert(
            keys::REQ_EXT_WRAPPER_SSAI,
            wrapper_string(keys::REQ_EXT_WRAPPER_SSAI, keys::EXT_SSAI),
        );
        self.fields
            .insert(keys::REQ_EXT_WRAPPER_KV, custom(parser::wrapper_key_values));
        self.fields.insert(
            keys::REQ_EXT_WRAPPER_KVM,
            custom(parser::wrapper_key_values_map),
        );
    }

    fn register_adpod_ext(&mut self) {
        self.fields.insert(
            keys::REQ_EXT_ADPOD_MINADS,
            req_adpod_int(keys::REQ_EXT_ADPOD_MINADS, keys::EXT_ADPOD_MINADS),
        );
        self.fields.insert(
            keys::REQ_EXT_ADPOD_MAXADS,
            req_adpod_int(keys::REQ_EXT_ADPOD_MAXADS, keys::EXT_ADPOD_MAXADS),
        );
        self.fields.insert(
            keys::REQ_EXT_ADPOD_ADMINDURATION,
            req_adpod_int(
                keys::REQ_EXT_ADPOD_ADMINDURATION,
                keys::EXT_ADPOD_ADMINDURATION,
            ),
        );
        self.fields.insert(
            keys::REQ_EXT_ADPOD_ADMAXDURATION,
            req_adpod_int(
                keys::REQ_EXT_ADPOD_ADMAXDURATION,
                keys::EXT_ADPOD_ADMAXDURATION,
            ),
        );
        self.fields.insert(
            keys::REQ_EXT_ADPOD_EXCLADV,
            req_adpod_float(keys::REQ_EXT_ADPOD_EXCLADV, keys::EXT_ADPOD_EXCLADV),
        );
        self.fields.insert(
            keys::REQ_EXT_ADPOD_EXCLIABCAT,
            req_adpod_float(keys::REQ_EXT_ADPOD_EXCLIABCAT, keys::EXT_ADPOD_EXCLIABCAT),
        );
        self.fields.insert(
            keys::REQ_EXT_ADPOD_CROSSPODEXCLADV,
            req_adpod_float(
                keys::REQ_EXT_ADPOD_CROSSPODEXCLADV,
                keys::EXT_ADPOD_CROSSPODEXCLADV,
            ),
        );
        self.fields.insert(
            keys::REQ_EXT_ADPOD_CROSSPODEXCLIABCAT,
            req_adpod_float(
                keys::REQ_EXT_ADPOD_CROSSPODEXCLIABCAT,
                keys::EXT_ADPOD_CROSSPODEXCLIABCAT,
            ),
        );
        self.fields.insert(
            keys::REQ_EXT_ADPOD_EXCLIABCATWINDOW,
            req_adpod_int(
                keys::REQ_EXT_ADPOD_EXCLIABCATWINDOW,
                keys::EXT_ADPOD_EXCLIABCATWINDOW,
            ),
        );
        self.fields.insert(
            keys::REQ_EXT_ADPOD_EXCLADVWINDOW,
            req_adpod_int(
                keys::REQ_EXT_ADPOD_EXCLADVWINDOW,
                keys::EXT_ADPOD_EXCLADVWINDOW,
            ),
        );
    }

    fn register_prebid_ext(&mut self) {
        self.fields.insert(
            keys::REQ_EXT_PREBID_TRANSPARENCY_CONTENT,
            custom(parser::prebid_transparency_content),
        );
        self.fields.insert(
            keys::REQ_EXT_PREBID_FLOORS_ENFORCEMENT,
            custom(parser::prebid_floors_enforcement),
        );
        self.fields.insert(
            keys::REQ_EXT_PREBID_RETURNALLBIDSTATUS,
            custom(parser::prebid_return_all_bid_status),
        );
        self.fields.insert(
            keys::REQ_EXT_PREBID_BIDDERPARAMS_CDS,
            custom(parser::prebid_bidder_params_cds),
        );
    }

    fn register_ext_namespaces(&mut self) {
        self.ext
            .insert(keys::REQ_EXT_NS, ext_ns(keys::REQ_EXT_NS, |p| &mut p.ortb_mut().ext));
        self.ext
            .insert(keys::SRC_EXT_NS, ext_ns(keys::SRC_EXT_NS, |p| &mut p.source().ext));
        self.ext
            .insert(keys::REGS_EXT_NS, ext_ns(keys::REGS_EXT_NS, |p| &mut p.regs().ext));
        self.ext
            .insert(keys::IMP_EXT_NS, ext_ns(keys::IMP_EXT_NS, |p| &mut p.imp().ext));
        self.ext.insert(
            keys::IMP_VID_EXT_NS,
            ext_ns(keys::IMP_VID_EXT_NS, |p| &mut p.video().ext),
        );
        self.ext
            .insert(keys::SITE_EXT_NS, ext_ns(keys::SITE_EXT_NS, |p| &mut p.site().ext));
        self.ext.insert(
            keys::SITE_PUB_EXT_NS,
            ext_ns(keys::SITE_PUB_EXT_NS, |p| &mut p.site_publisher().ext),
        );
        self.ext.insert(
            keys::SITE_CNT_EXT_NS,
            ext_ns(keys::SITE_CNT_EXT_NS, |p| &mut p.site_content().ext),
        );
        self.ext.insert(
            keys::SITE_CNT_PROD_EXT_NS,
            ext_ns(keys::SITE_CNT_PROD_EXT_NS, |p| {
                &mut p.site_content_producer().ext
            }),
        );
        self.ext.insert(
            keys::SITE_CNT_NETWORK_EXT_NS,
            ext_ns(keys::SITE_CNT_NETWORK_EXT_NS, |p| {
                &mut p.site_content_network().ext
            }),
        );
        self.ext.insert(
            keys::SITE_CNT_CHANNEL_EXT_NS,
            ext_ns(keys::SITE_CNT_CHANNEL_EXT_NS, |p| {
                &mut p.site_content_channel().ext
            }),
        );
        self.ext
            .insert(keys::APP_EXT_NS, ext_ns(keys::APP_EXT_NS, |p| &mut p.app().ext));
        self.ext.insert(
            keys::APP_PUB_EXT_NS,
            ext_ns(keys::APP_PUB_EXT_NS, |p| &mut p.app_publisher().ext),
        );
        self.ext.insert(
            keys::APP_CNT_EXT_NS,
            ext_ns(keys::APP_CNT_EXT_NS, |p| &mut p.app_content().ext),
        );
        self.ext.insert(
            keys::APP_CNT_PROD_EXT_NS,
            ext_ns(keys::APP_CNT_PROD_EXT_NS, |p| {
                &mut p.app_content_producer().ext
            }),
        );
        self.ext.insert(
            keys::APP_CNT_NETWORK_EXT_NS,
            ext_ns(keys::APP_CNT_NETWORK_EXT_NS, |p| {
                &mut p.app_content_network().ext
            }),
        );
        self.ext.insert(
            keys::APP_CNT_CHANNEL_EXT_NS,
            ext_ns(keys::APP_CNT_CHANNEL_EXT_NS, |p| {
                &mut p.app_content_channel().ext
            }),
        );
        self.ext
            .insert(keys::DEV_EXT_NS, ext_ns(keys::DEV_EXT_NS, |p| &mut p.device().ext));
        self.ext.insert(
            keys::DEV_GEO_EXT_NS,
            ext_ns(keys::DEV_GEO_EXT_NS, |p| &mut p.device_geo().ext),
        );
        self.ext
            .insert(keys::USER_EXT_NS, ext_ns(keys::USER_EXT_NS, |p| &mut p.user().ext));
        self.ext.insert(
            keys::USER_GEO_EXT_NS,
            ext_ns(keys::USER_GEO_EXT_NS, |p| &mut p.user_geo().ext),
        );
    }
}

impl Default for FieldKeyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Setter builders. Each captures the key it reads so the table rows stay
// declarative.

fn string(key: &'static str, apply: fn(&mut RequestParser, String)) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get(key).map(str::to_string) {
            apply(p, v);
        }
        Ok(())
    })
}

fn int(key: &'static str, apply: fn(&mut RequestParser, i64)) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_int(key)? {
            apply(p, v);
        }
        Ok(())
    })
}

fn bool_int(key: &'static str, apply: fn(&mut RequestParser, i64)) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_bool_as_int(key)? {
            apply(p, v);
        }
        Ok(())
    })
}

fn float(key: &'static str, apply: fn(&mut RequestParser, f64)) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_float(key)? {
            apply(p, v);
        }
        Ok(())
    })
}

fn string_array(key: &'static str, apply: fn(&mut RequestParser, Vec<String>)) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_string_array(key) {
            apply(p, v);
        }
        Ok(())
    })
}

fn int_array(key: &'static str, apply: fn(&mut RequestParser, Vec<i64>)) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_int_array(key) {
            apply(p, v);
        }
        Ok(())
    })
}

fn custom(f: fn(&mut RequestParser) -> Result<(), FieldError>) -> FieldSetter {
    Box::new(f)
}

fn wrapper_int(key: &'static str, child: &'static str) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_int(key)? {
            parser::set_req_ext_path(p, key, &[keys::EXT_WRAPPER, child], Value::from(v))?;
        }
        Ok(())
    })
}

fn wrapper_bool(key: &'static str, child: &'static str) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_bool_as_int(key)? {
            parser::set_req_ext_path(p, key, &[keys::EXT_WRAPPER, child], Value::Bool(v != 0))?;
        }
        Ok(())
    })
}

fn wrapper_string(key: &'static str, child: &'static str) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get(key).map(str::to_string) {
            parser::set_req_ext_path(p, key, &[keys::EXT_WRAPPER, child], Value::String(v))?;
        }
        Ok(())
    })
}

fn req_adpod_int(key: &'static str, child: &'static str) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_int(key)? {
            parser::set_req_ext_path(p, key, &[keys::EXT_ADPOD, child], Value::from(v))?;
        }
        Ok(())
    })
}

fn req_adpod_float(key: &'static str, child: &'static str) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_float(key)? {
            parser::set_req_ext_path(p, key, &[keys::EXT_ADPOD, child], Value::from(v))?;
        }
        Ok(())
    })
}

fn video_ext_int(key: &'static str, path: &'static [&'static str]) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_int(key)? {
            parser::set_video_ext_path(p, key, path, Value::from(v))?;
        }
        Ok(())
    })
}

fn video_ext_float(key: &'static str, path: &'static [&'static str]) -> FieldSetter {
    Box::new(move |p| {
        if let Some(v) = p.values().get_float(key)? {
            parser::set_video_ext_path(p, key, path, Value::from(v))?;
        }
        Ok(())
    })
}

fn ext_ns(
    namespace: &'static str,
    accessor: fn(&mut RequestParser) -> &mut Option<Value>,
) -> ExtSetter {
    Box::new(move |p, child, raw| {
        let map = parser::ext_map(accessor(p), namespace)?;
        crate::path::set_value(map, child, Some(raw));
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_order() {
        let r = default_registry();

        assert_eq!(r.classify("req.id"), Classification::Exact);
        // Exact entries win even when the key contains the ext marker.
        assert_eq!(r.classify("imp.ext.bidder"), Classification::Exact);
        assert_eq!(r.classify("req.ext.wrapper.profileid"), Classification::Exact);

        assert_eq!(
            r.classify("site.ext.custom.flag"),
            Classification::Extension {
                namespace: "site.ext",
                child: "custom.flag"
            }
        );
        assert_eq!(r.classify("debug"), Classification::Ignored);
        assert_eq!(r.classify("no.such.key"), Classification::Unrecognized);
    }

    #[test]
    fn test_ext_key_without_child_is_unrecognized() {
        let r = default_registry();
        assert_eq!(r.classify("site.ext."), Classification::Unrecognized);
    }

    #[test]
    fn test_unregistered_ext_namespace_is_unrecognized() {
        let r = default_registry();
        assert_eq!(r.classify("bogus.ext.child"), Classification::Unrecognized);
    }

    #[test]
    fn test_table_sizes() {
        let r = default_registry();
        assert!(r.field_count() > 240, "got {}", r.field_count());
        assert_eq!(r.ext_namespace_count(), 21);
    }
}
