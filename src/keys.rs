//! Flat request key vocabulary.
//!
//! Every key the legacy CTV query surface understands, grouped by the section
//! of the bid request it populates. The parser dispatch tables in
//! [`crate::registry`] are built over these constants.

/// Separator for array-valued query parameters.
pub const ARRAY_SEPARATOR: &str = ",";
/// Marker substring for open extension namespaces.
pub const EXT: &str = ".ext.";
/// Default bid floor currency.
pub const USD: &str = "USD";
/// Debug flag key, ignored by the parser.
pub const DEBUG: &str = "debug";

/// Impression ext sub-object key for bidder parameters.
pub const BIDDER_KEY: &str = "bidder";
/// Impression ext sub-object key for prebid parameters.
pub const PREBID_KEY: &str = "prebid";

// Request level parameters
pub const REQ_ID: &str = "req.id";
pub const REQ_TEST: &str = "req.test";
pub const REQ_AT: &str = "req.at";
pub const REQ_TMAX: &str = "req.tmax";
pub const REQ_WSEAT: &str = "req.wseat";
pub const REQ_WLANG: &str = "req.wlang";
pub const REQ_BSEAT: &str = "req.bseat";
pub const REQ_ALLIMPS: &str = "req.allimps";
pub const REQ_CUR: &str = "req.cur";
pub const REQ_BCAT: &str = "req.bcat";
pub const REQ_BADV: &str = "req.badv";
pub const REQ_BAPP: &str = "req.bapp";

// Source level parameters
pub const SRC_FD: &str = "src.fd";
pub const SRC_TID: &str = "src.tid";
pub const SRC_PCHAIN: &str = "src.pchain";
pub const SRC_SCHAIN: &str = "src.schain";

// Regs level parameters
pub const REGS_COPPA: &str = "regs.coppa";
pub const REGS_GPP: &str = "regs.gpp";
pub const REGS_GPP_SID: &str = "regs.gpp_sid";
pub const REGS_EXT_GDPR: &str = "regs.ext.gdpr";
pub const REGS_EXT_US_PRIVACY: &str = "regs.ext.us_privacy";

// Impression level parameters
pub const IMP_ID: &str = "imp.id";
pub const IMP_DISPLAYMANAGER: &str = "imp.displaymanager";
pub const IMP_DISPLAYMANAGERVER: &str = "imp.displaymanagerver";
pub const IMP_INSTL: &str = "imp.instl";
pub const IMP_TAGID: &str = "imp.tagid";
pub const IMP_BIDFLOOR: &str = "imp.bidfloor";
pub const IMP_BIDFLOORCUR: &str = "imp.bidfloorcur";
pub const IMP_CLICKBROWSER: &str = "imp.clickbrowser";
pub const IMP_SECURE: &str = "imp.secure";
pub const IMP_IFRAMEBUSTER: &str = "imp.iframebuster";
pub const IMP_EXP: &str = "imp.exp";
pub const IMP_PMP: &str = "imp.pmp";
pub const IMP_EXT_BIDDER: &str = "imp.ext.bidder";
pub const IMP_EXT_PREBID: &str = "imp.ext.prebid";

// Impression video parameters
pub const IMP_VID_MIMES: &str = "imp.vid.mimes";
pub const IMP_VID_MINDURATION: &str = "imp.vid.minduration";
pub const IMP_VID_MAXDURATION: &str = "imp.vid.maxduration";
pub const IMP_VID_PROTOCOLS: &str = "imp.vid.protocols";
pub const IMP_VID_W: &str = "imp.vid.w";
pub const IMP_VID_H: &str = "imp.vid.h";
pub const IMP_VID_STARTDELAY: &str = "imp.vid.startdelay";
pub const IMP_VID_PLACEMENT: &str = "imp.vid.placement";
pub const IMP_VID_PLCMT: &str = "imp.vid.plcmt";
pub const IMP_VID_LINEARITY: &str = "imp.vid.linearity";
pub const IMP_VID_SKIP: &str = "imp.vid.skip";
pub const IMP_VID_SKIPMIN: &str = "imp.vid.skipmin";
pub const IMP_VID_SKIPAFTER: &str = "imp.vid.skipafter";
pub const IMP_VID_SEQUENCE: &str = "imp.vid.sequence";
pub const IMP_VID_BATTR: &str = "imp.vid.battr";
pub const IMP_VID_MAXEXTENDED: &str = "imp.vid.maxextended";
pub const IMP_VID_MINBITRATE: &str = "imp.vid.minbitrate";
pub const IMP_VID_MAXBITRATE: &str = "imp.vid.maxbitrate";
pub const IMP_VID_BOXINGALLOWED: &str = "imp.vid.boxingallowed";
pub const IMP_VID_PLAYBACKMETHOD: &str = "imp.vid.playbackmethod";
pub const IMP_VID_DELIVERY: &str = "imp.vid.delivery";
pub const IMP_VID_POS: &str = "imp.vid.pos";
pub const IMP_VID_API: &str = "imp.vid.api";
pub const IMP_VID_COMPANIONTYPE: &str = "imp.vid.companiontype";

// Video ad-pod extension parameters
pub const IMP_VID_EXT_OFFSET: &str = "imp.vid.ext.offset";
pub const IMP_VID_EXT_ADPOD_MINADS: &str = "imp.vid.ext.adpod.minads";
pub const IMP_VID_EXT_ADPOD_MAXADS: &str = "imp.vid.ext.adpod.maxads";
pub const IMP_VID_EXT_ADPOD_ADMINDURATION: &str = "imp.vid.ext.adpod.adminduration";
pub const IMP_VID_EXT_ADPOD_ADMAXDURATION: &str = "imp.vid.ext.adpod.admaxduration";
pub const IMP_VID_EXT_ADPOD_EXCLADV: &str = "imp.vid.ext.adpod.excladv";
pub const IMP_VID_EXT_ADPOD_EXCLIABCAT: &str = "imp.vid.ext.adpod.excliabcat";

// Site level parameters
pub const SITE_ID: &str = "site.id";
pub const SITE_NAME: &str = "site.name";
pub const SITE_DOMAIN: &str = "site.domain";
pub const SITE_PAGE: &str = "site.page";
pub const SITE_REF: &str = "site.ref";
pub const SITE_SEARCH: &str = "site.search";
pub const SITE_MOBILE: &str = "site.mobile";
pub const SITE_CAT: &str = "site.cat";
pub const SITE_SECTIONCAT: &str = "site.sectioncat";
pub const SITE_PAGECAT: &str = "site.pagecat";
pub const SITE_PRIVACYPOLICY: &str = "site.privacypolicy";
pub const SITE_KEYWORDS: &str = "site.keywords";

// App level parameters
pub const APP_ID: &str = "app.id";
pub const APP_NAME: &str = "app.name";
pub const APP_BUNDLE: &str = "app.bundle";
pub const APP_DOMAIN: &str = "app.domain";
pub const APP_STOREURL: &str = "app.storeurl";
pub const APP_VER: &str = "app.ver";
pub const APP_PAID: &str = "app.paid";
pub const APP_CAT: &str = "app.cat";
pub const APP_SECTIONCAT: &str = "app.sectioncat";
pub const APP_PAGECAT: &str = "app.pagecat";
pub const APP_PRIVACYPOLICY: &str = "app.privacypolicy";
pub const APP_KEYWORDS: &str = "app.keywords";

// Site publisher parameters
pub const SITE_PUB_ID: &str = "site.pub.id";
pub const SITE_PUB_NAME: &str = "site.pub.name";
pub const SITE_PUB_CAT: &str = "site.pub.cat";
pub const SITE_PUB_DOMAIN: &str = "site.pub.domain";

// Site content parameters
pub const SITE_CNT_ID: &str = "site.cnt.id";
pub const SITE_CNT_EPISODE: &str = "site.cnt.episode";
pub const SITE_CNT_TITLE: &str = "site.cnt.title";
pub const SITE_CNT_SERIES: &str = "site.cnt.series";
pub const SITE_CNT_SEASON: &str = "site.cnt.season";
pub const SITE_CNT_ARTIST: &str = "site.cnt.artist";
pub const SITE_CNT_GENRE: &str = "site.cnt.genre";
pub const SITE_CNT_ALBUM: &str = "site.cnt.album";
pub const SITE_CNT_ISRC: &str = "site.cnt.isrc";
pub const SITE_CNT_URL: &str = "site.cnt.url";
pub const SITE_CNT_CAT: &str = "site.cnt.cat";
pub const SITE_CNT_PRODQ: &str = "site.cnt.prodq";
pub const SITE_CNT_VIDEOQUALITY: &str = "site.cnt.videoquality";
pub const SITE_CNT_CONTEXT: &str = "site.cnt.context";
pub const SITE_CNT_CONTENTRATING: &str = "site.cnt.contentrating";
pub const SITE_CNT_USERRATING: &str = "site.cnt.userrating";
pub const SITE_CNT_QAGMEDIARATING: &str = "site.cnt.qagmediarating";
pub const SITE_CNT_KEYWORDS: &str = "site.cnt.keywords";
pub const SITE_CNT_LIVESTREAM: &str = "site.cnt.livestream";
pub const SITE_CNT_SOURCERELATIONSHIP: &str = "site.cnt.sourcerelationship";
pub const SITE_CNT_LEN: &str = "site.cnt.len";
pub const SITE_CNT_LANGUAGE: &str = "site.cnt.language";
pub const SITE_CNT_EMBEDDABLE: &str = "site.cnt.embeddable";

// Site content producer parameters
pub const SITE_CNT_PROD_ID: &str = "site.cnt.prod.id";
pub const SITE_CNT_PROD_NAME: &str = "site.cnt.prod.name";
pub const SITE_CNT_PROD_CAT: &str = "site.cnt.prod.cat";
pub const SITE_CNT_PROD_DOMAIN: &str = "site.cnt.prod.domain";

// Site content network/channel parameters
pub const SITE_CNT_NETWORK_ID: &str = "site.cnt.network.id";
pub const SITE_CNT_NETWORK_NAME: &str = "site.cnt.network.name";
pub const SITE_CNT_NETWORK_DOMAIN: &str = "site.cnt.network.domain";
pub const SITE_CNT_CHANNEL_ID: &str = "site.cnt.channel.id";
pub const SITE_CNT_CHANNEL_NAME: &str = "site.cnt.channel.name";
pub const SITE_CNT_CHANNEL_DOMAIN: &str = "site.cnt.channel.domain";

// App publisher parameters
pub const APP_PUB_ID: &str = "app.pub.id";
pub const APP_PUB_NAME: &str = "app.pub.name";
pub const APP_PUB_CAT: &str = "app.pub.cat";
pub const APP_PUB_DOMAIN: &str = "app.pub.domain";

// App content parameters
pub const APP_CNT_ID: &str = "app.cnt.id";
pub const APP_CNT_EPISODE: &str = "app.cnt.episode";
pub const APP_CNT_TITLE: &str = "app.cnt.title";
pub const APP_CNT_SERIES: &str = "app.cnt.series";
pub const APP_CNT_SEASON: &str = "app.cnt.season";
pub const APP_CNT_ARTIST: &str = "app.cnt.artist";
pub const APP_CNT_GENRE: &str = "app.cnt.genre";
pub const APP_CNT_ALBUM: &str = "app.cnt.album";
pub const APP_CNT_ISRC: &str = "app.cnt.isrc";
pub const APP_CNT_URL: &str = "app.cnt.url";
pub const APP_CNT_CAT: &str = "app.cnt.cat";
pub const APP_CNT_PRODQ: &str = "app.cnt.prodq";
pub const APP_CNT_VIDEOQUALITY: &str = "app.cnt.videoquality";
pub const APP_CNT_CONTEXT: &str = "app.cnt.context";
pub const APP_CNT_CONTENTRATING: &str = "app.cnt.contentrating";
pub const APP_CNT_USERRATING: &str = "app.cnt.userrating";
pub const APP_CNT_QAGMEDIARATING: &str = "app.cnt.qagmediarating";
pub const APP_CNT_KEYWORDS: &str = "app.cnt.keywords";
pub const APP_CNT_LIVESTREAM: &str = "app.cnt.livestream";
pub const APP_CNT_SOURCERELATIONSHIP: &str = "app.cnt.sourcerelationship";
pub const APP_CNT_LEN: &str = "app.cnt.len";
pub const APP_CNT_LANGUAGE: &str = "app.cnt.language";
pub const APP_CNT_EMBEDDABLE: &str = "app.cnt.embeddable";

// App content producer parameters
pub const APP_CNT_PROD_ID: &str = "app.cnt.prod.id";
pub const APP_CNT_PROD_NAME: &str = "app.cnt.prod.name";
pub const APP_CNT_PROD_CAT: &str = "app.cnt.prod.cat";
pub const APP_CNT_PROD_DOMAIN: &str = "app.cnt.prod.domain";

// App content network/channel parameters
pub const APP_CNT_NETWORK_ID: &str = "app.cnt.network.id";
pub const APP_CNT_NETWORK_NAME: &str = "app.cnt.network.name";
pub const APP_CNT_NETWORK_DOMAIN: &str = "app.cnt.network.domain";
pub const APP_CNT_CHANNEL_ID: &str = "app.cnt.channel.id";
pub const APP_CNT_CHANNEL_NAME: &str = "app.cnt.channel.name";
pub const APP_CNT_CHANNEL_DOMAIN: &str = "app.cnt.channel.domain";

// Device level parameters
pub const DEV_UA: &str = "dev.ua";
pub const DEV_DNT: &str = "dev.dnt";
pub const DEV_LMT: &str = "dev.lmt";
pub const DEV_IP: &str = "dev.ip";
pub const DEV_IPV6: &str = "dev.ipv6";
pub const DEV_DEVICETYPE: &str = "dev.devicetype";
pub const DEV_MAKE: &str = "dev.make";
pub const DEV_MODEL: &str = "dev.model";
pub const DEV_OS: &str = "dev.os";
pub const DEV_OSV: &str = "dev.osv";
pub const DEV_HWV: &str = "dev.hwv";
pub const DEV_W: &str = "dev.w";
pub const DEV_H: &str = "dev.h";
pub const DEV_PPI: &str = "dev.ppi";
pub const DEV_PXRATIO: &str = "dev.pxratio";
pub const DEV_JS: &str = "dev.js";
pub const DEV_GEOFETCH: &str = "dev.geofetch";
pub const DEV_FLASHVER: &str = "dev.flashver";
pub const DEV_LANGUAGE: &str = "dev.language";
pub const DEV_CARRIER: &str = "dev.carrier";
pub const DEV_MCCMNC: &str = "dev.mccmnc";
pub const DEV_CONNECTIONTYPE: &str = "dev.connectiontype";
pub const DEV_IFA: &str = "dev.ifa";
pub const DEV_DIDSHA1: &str = "dev.didsha1";
pub const DEV_DIDMD5: &str = "dev.didmd5";
pub const DEV_DPIDSHA1: &str = "dev.dpidsha1";
pub const DEV_DPIDMD5: &str = "dev.dpidmd5";
pub const DEV_MACSHA1: &str = "dev.macsha1";
pub const DEV_MACMD5: &str = "dev.macmd5";

// Device geo parameters
pub const DEV_GEO_LAT: &str = "dev.geo.lat";
pub const DEV_GEO_LON: &str = "dev.geo.lon";
pub const DEV_GEO_TYPE: &str = "dev.geo.type";
pub const DEV_GEO_ACCURACY: &str = "dev.geo.accuracy";
pub const DEV_GEO_LASTFIX: &str = "dev.geo.lastfix";
pub const DEV_GEO_IPSERVICE: &str = "dev.geo.ipservice";
pub const DEV_GEO_COUNTRY: &str = "dev.geo.country";
pub const DEV_GEO_REGION: &str = "dev.geo.region";
pub const DEV_GEO_REGIONFIPS104: &str = "dev.geo.regionfips104";
pub const DEV_GEO_METRO: &str = "dev.geo.metro";
pub const DEV_GEO_CITY: &str = "dev.geo.city";
pub const DEV_GEO_ZIP: &str = "dev.geo.zip";
pub const DEV_GEO_UTCOFFSET: &str = "dev.geo.utcoffset";

// Device extension parameters
pub const DEV_EXT_IFA_TYPE: &str = "dev.ext.ifa_type";
pub const DEV_EXT_SESSION_ID: &str = "dev.ext.session_id";
pub const DEV_EXT_ATTS: &str = "dev.ext.atts";

// User level parameters
pub const USER_ID: &str = "user.id";
pub const USER_BUYERUID: &str = "user.buyeruid";
pub const USER_YOB: &str = "user.yob";
pub const USER_GENDER: &str = "user.gender";
pub const USER_KEYWORDS: &str = "user.keywords";
pub const USER_CUSTOMDATA: &str = "user.customdata";
pub const USER_DATA: &str = "user.data";

// User geo parameters
pub const USER_GEO_LAT: &str = "user.geo.lat";
pub const USER_GEO_LON: &str = "user.geo.lon";
pub const USER_GEO_TYPE: &str = "user.geo.type";
pub const USER_GEO_ACCURACY: &str = "user.geo.accuracy";
pub const USER_GEO_LASTFIX: &str = "user.geo.lastfix";
pub const USER_GEO_IPSERVICE: &str = "user.geo.ipservice";
pub const USER_GEO_COUNTRY: &str = "user.geo.country";
pub const USER_GEO_REGION: &str = "user.geo.region";
pub const USER_GEO_REGIONFIPS104: &str = "user.geo.regionfips104";
pub const USER_GEO_METRO: &str = "user.geo.metro";
pub const USER_GEO_CITY: &str = "user.geo.city";
pub const USER_GEO_ZIP: &str = "user.geo.zip";
pub const USER_GEO_UTCOFFSET: &str = "user.geo.utcoffset";

// User extension parameters
pub const USER_EXT_CONSENT: &str = "user.ext.consent";
pub const USER_EXT_EIDS: &str = "user.ext.eids";

// Wrapper extension parameters
pub const REQ_EXT_WRAPPER_PROFILEID: &str = "req.ext.wrapper.profileid";
pub const REQ_EXT_WRAPPER_VERSIONID: &str = "req.ext.wrapper.versionid";
pub const REQ_EXT_WRAPPER_SSAUCTION: &str = "req.ext.wrapper.ssauction";
pub const REQ_EXT_WRAPPER_SUMRY_DISABLE: &str = "req.ext.wrapper.sumry_disable";
pub const REQ_EXT_WRAPPER_CLIENTCONFIG: &str = "req.ext.wrapper.clientconfig";
pub const REQ_EXT_WRAPPER_SUPPORTDEALS: &str = "req.ext.wrapper.supportdeals";
pub const REQ_EXT_WRAPPER_INCLUDEBRANDCATEGORY: &str = "req.ext.wrapper.includebrandcategory";
pub const REQ_EXT_WRAPPER_SSAI: &str = "req.ext.wrapper.ssai";
pub const REQ_EXT_WRAPPER_KV: &str = "req.ext.wrapper.kv";
pub const REQ_EXT_WRAPPER_KVM: &str = "req.ext.wrapper.kvm";

// Request ad-pod extension parameters
pub const REQ_EXT_ADPOD_MINADS: &str = "req.ext.adpod.minads";
pub const REQ_EXT_ADPOD_MAXADS: &str = "req.ext.adpod.maxads";
pub const REQ_EXT_ADPOD_ADMINDURATION: &str = "req.ext.adpod.adminduration";
pub const REQ_EXT_ADPOD_ADMAXDURATION: &str = "req.ext.adpod.admaxduration";
pub const REQ_EXT_ADPOD_EXCLADV: &str = "req.ext.adpod.excladv";
pub const REQ_EXT_ADPOD_EXCLIABCAT: &str = "req.ext.adpod.excliabcat";
pub const REQ_EXT_ADPOD_CROSSPODEXCLADV: &str = "req.ext.adpod.crosspodexcladv";
pub const REQ_EXT_ADPOD_CROSSPODEXCLIABCAT: &str = "req.ext.adpod.crosspodexcliabcat";
pub const REQ_EXT_ADPOD_EXCLIABCATWINDOW: &str = "req.ext.adpod.excliabcatwindow";
pub const REQ_EXT_ADPOD_EXCLADVWINDOW: &str = "req.ext.adpod.excladvwindow";

// Request prebid extension parameters
pub const REQ_EXT_PREBID_TRANSPARENCY_CONTENT: &str = "req.ext.prebid.transparency.content";
pub const REQ_EXT_PREBID_FLOORS_ENFORCEMENT: &str = "req.ext.prebid.floors.enforcement";
pub const REQ_EXT_PREBID_RETURNALLBIDSTATUS: &str = "req.ext.prebid.returnallbidstatus";
pub const REQ_EXT_PREBID_BIDDERPARAMS_CDS: &str = "req.ext.prebid.bidderparams.cds";

// Open extension namespaces
pub const REQ_EXT_NS: &str = "req.ext";
pub const SRC_EXT_NS: &str = "src.ext";
pub const REGS_EXT_NS: &str = "regs.ext";
pub const IMP_EXT_NS: &str = "imp.ext";
pub const IMP_VID_EXT_NS: &str = "imp.vid.ext";
pub const SITE_EXT_NS: &str = "site.ext";
pub const SITE_PUB_EXT_NS: &str = "site.pub.ext";
pub const SITE_CNT_EXT_NS: &str = "site.cnt.ext";
pub const SITE_CNT_PROD_EXT_NS: &str = "site.cnt.prod.ext";
pub const SITE_CNT_NETWORK_EXT_NS: &str = "site.cnt.network.ext";
pub const SITE_CNT_CHANNEL_EXT_NS: &str = "site.cnt.channel.ext";
pub const APP_EXT_NS: &str = "app.ext";
pub const APP_PUB_EXT_NS: &str = "app.pub.ext";
pub const APP_CNT_EXT_NS: &str = "app.cnt.ext";
pub const APP_CNT_PROD_EXT_NS: &str = "app.cnt.prod.ext";
pub const APP_CNT_NETWORK_EXT_NS: &str = "app.cnt.network.ext";
pub const APP_CNT_CHANNEL_EXT_NS: &str = "app.cnt.channel.ext";
pub const DEV_EXT_NS: &str = "dev.ext";
pub const DEV_GEO_EXT_NS: &str = "dev.geo.ext";
pub const USER_EXT_NS: &str = "user.ext";
pub const USER_GEO_EXT_NS: &str = "user.geo.ext";

// Extension sub-object key names
pub const EXT_WRAPPER: &str = "wrapper";
pub const EXT_PROFILE_ID: &str = "profileid";
pub const EXT_VERSION_ID: &str = "versionid";
pub const EXT_SSAUCTION: &str = "ssauction";
pub const EXT_SUMRY_DISABLE: &str = "sumry_disable";
pub const EXT_CLIENTCONFIG: &str = "clientconfig";
pub const EXT_SUPPORTDEALS: &str = "supportdeals";
pub const EXT_INCLUDEBRANDCATEGORY: &str = "includebrandcategory";
pub const EXT_SSAI: &str = "ssai";
pub const EXT_KV: &str = "kv";
pub const EXT_GDPR: &str = "gdpr";
pub const EXT_US_PRIVACY: &str = "us_privacy";
pub const EXT_CONSENT: &str = "consent";
pub const EXT_EIDS: &str = "eids";
pub const EXT_ADPOD: &str = "adpod";
pub const EXT_ADPOD_OFFSET: &str = "offset";
pub const EXT_ADPOD_MINADS: &str = "minads";
pub const EXT_ADPOD_MAXADS: &str = "maxads";
pub const EXT_ADPOD_ADMINDURATION: &str = "adminduration";
pub const EXT_ADPOD_ADMAXDURATION: &str = "admaxduration";
pub const EXT_ADPOD_EXCLADV: &str = "excladv";
pub const EXT_ADPOD_EXCLIABCAT: &str = "excliabcat";
pub const EXT_ADPOD_CROSSPODEXCLADV: &str = "crosspodexcladv";
pub const EXT_ADPOD_CROSSPODEXCLIABCAT: &str = "crosspodexcliabcat";
pub const EXT_ADPOD_EXCLIABCATWINDOW: &str = "excliabcatwindow";
pub const EXT_ADPOD_EXCLADVWINDOW: &str = "excladvwindow";
pub const EXT_IFA_TYPE: &str = "ifa_type";
pub const EXT_SESSION_ID: &str = "session_id";
pub const EXT_ATTS: &str = "atts";
pub const EXT_PREBID: &str = "prebid";
pub const EXT_TRANSPARENCY: &str = "transparency";
pub const EXT_TRANSPARENCY_CONTENT: &str = "content";
pub const EXT_FLOORS: &str = "floors";
pub const EXT_FLOORS_ENFORCEMENT: &str = "enforcement";
pub const EXT_RETURNALLBIDSTATUS: &str = "returnallbidstatus";
pub const EXT_BIDDERPARAMS: &str = "bidderparams";
pub const EXT_BIDDERPARAMS_CDS: &str = "cds";
pub const EXT_IS_ADPOD_BID: &str = "isAdpodBid";
