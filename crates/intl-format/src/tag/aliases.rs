//! Fixed alias tables used during language tag canonicalization.
//!
//! Redundant and grandfathered tags are replaced wholesale by their
//! preferred value; individual region and language subtags are replaced via
//! [`SUBTAGS`]; extlang subtags keep their own value but may cause the
//! primary language prefix to be dropped when it matches the designated
//! prefix in [`EXTLANGS`].

/// Irregular grandfathered tags: valid, but not producible from the langtag
/// grammar.
pub(crate) const IRREGULAR: &[&str] = &[
    "en-GB-oed",
    "i-ami",
    "i-bnn",
    "i-default",
    "i-enochian",
    "i-hak",
    "i-klingon",
    "i-lux",
    "i-mingo",
    "i-navajo",
    "i-pwn",
    "i-tao",
    "i-tay",
    "i-tsu",
    "sgn-BE-FR",
    "sgn-BE-NL",
    "sgn-CH-DE",
];

/// Regular grandfathered tags: match the langtag grammar but carry
/// registration-defined meaning.
pub(crate) const REGULAR: &[&str] = &[
    "art-lojban",
    "cel-gaulish",
    "no-bok",
    "no-nyn",
    "zh-guoyu",
    "zh-hakka",
    "zh-min",
    "zh-min-nan",
    "zh-xiang",
];

/// Whole-tag replacements: redundant or grandfathered tags mapped to their
/// preferred value. Keys are in canonical case form.
pub(crate) const REDUNDANT_TAGS: &[(&str, &str)] = &[
    ("art-lojban", "jbo"),
    ("i-ami", "ami"),
    ("i-bnn", "bnn"),
    ("i-hak", "hak"),
    ("i-klingon", "tlh"),
    ("i-lux", "lb"),
    ("i-navajo", "nv"),
    ("i-pwn", "pwn"),
    ("i-tao", "tao"),
    ("i-tay", "tay"),
    ("i-tsu", "tsu"),
    ("no-bok", "nb"),
    ("no-nyn", "nn"),
    ("sgn-BE-FR", "sfb"),
    ("sgn-BE-NL", "vgt"),
    ("sgn-CH-DE", "sgg"),
    ("zh-guoyu", "cmn"),
    ("zh-hakka", "hak"),
    ("zh-min-nan", "nan"),
    ("zh-xiang", "hsn"),
    ("sgn-BR", "bzs"),
    ("sgn-CO", "csn"),
    ("sgn-DE", "gsg"),
    ("sgn-DK", "dsl"),
    ("sgn-ES", "ssp"),
    ("sgn-FR", "fsl"),
    ("sgn-GB", "bfi"),
    ("sgn-GR", "gss"),
    ("sgn-IE", "isg"),
    ("sgn-IT", "ise"),
    ("sgn-JP", "jsl"),
    ("sgn-MX", "mfs"),
    ("sgn-NI", "ncs"),
    ("sgn-NL", "dse"),
    ("sgn-NO", "nsl"),
    ("sgn-PT", "psr"),
    ("sgn-SE", "swl"),
    ("sgn-US", "ase"),
    ("sgn-ZA", "sfs"),
    ("zh-cmn", "cmn"),
    ("zh-cmn-Hans", "cmn-Hans"),
    ("zh-cmn-Hant", "cmn-Hant"),
    ("zh-gan", "gan"),
    ("zh-wuu", "wuu"),
    ("zh-yue", "yue"),
];

/// Individual subtag replacements (deprecated regions and languages).
pub(crate) const SUBTAGS: &[(&str, &str)] = &[
    ("BU", "MM"),
    ("DD", "DE"),
    ("FX", "FR"),
    ("TP", "TL"),
    ("YD", "YE"),
    ("ZR", "CD"),
    ("heploc", "alalc97"),
    ("in", "id"),
    ("iw", "he"),
    ("ji", "yi"),
    ("jw", "jv"),
    ("mo", "ro"),
    ("ayx", "nun"),
    ("bjd", "drl"),
    ("ccq", "rki"),
    ("cjr", "mom"),
    ("cka", "cmr"),
    ("cmk", "xch"),
    ("drh", "khk"),
    ("drw", "prs"),
    ("gav", "dev"),
    ("hrr", "jal"),
    ("ibi", "opa"),
    ("kgh", "kml"),
    ("lcq", "ppr"),
    ("mst", "mry"),
    ("myt", "mry"),
    ("sca", "hle"),
    ("tie", "ras"),
    ("tkk", "twm"),
    ("tlw", "weo"),
    ("tnf", "prs"),
    ("ybd", "rki"),
    ("yma", "lrr"),
];

/// Extlang subtags mapped to their designated prefix. The preferred value of
/// every registered extlang is the extlang itself, so canonicalization only
/// needs the prefix to decide whether the primary language is redundant.
pub(crate) const EXTLANGS: &[(&str, &str)] = &[
    ("aao", "ar"),
    ("abh", "ar"),
    ("abv", "ar"),
    ("acm", "ar"),
    ("acq", "ar"),
    ("acw", "ar"),
    ("acx", "ar"),
    ("acy", "ar"),
    ("adf", "ar"),
    ("ads", "sgn"),
    ("aeb", "ar"),
    ("aec", "ar"),
    ("aed", "sgn"),
    ("aen", "sgn"),
    ("afb", "ar"),
    ("afg", "sgn"),
    ("ajp", "ar"),
    ("apc", "ar"),
    ("apd", "ar"),
    ("arb", "ar"),
    ("arq", "ar"),
    ("ars", "ar"),
    ("ary", "ar"),
    ("arz", "ar"),
    ("ase", "sgn"),
    ("asf", "sgn"),
    ("asp", "sgn"),
    ("asq", "sgn"),
    ("asw", "sgn"),
    ("auz", "ar"),
    ("avl", "ar"),
    ("ayh", "ar"),
    ("ayl", "ar"),
    ("ayn", "ar"),
    ("ayp", "ar"),
    ("bbz", "ar"),
    ("bfi", "sgn"),
    ("bfk", "sgn"),
    ("bjn", "ms"),
    ("bog", "sgn"),
    ("bqn", "sgn"),
    ("bqy", "sgn"),
    ("btj", "ms"),
    ("bve", "ms"),
    ("bvl", "sgn"),
    ("bvu", "ms"),
    ("bzs", "sgn"),
    ("cdo", "zh"),
    ("cds", "sgn"),
    ("cjy", "zh"),
    ("cmn", "zh"),
    ("coa", "ms"),
    ("cpx", "zh"),
    ("csc", "sgn"),
    ("csd", "sgn"),
    ("cse", "sgn"),
    ("csf", "sgn"),
    ("csg", "sgn"),
    ("csl", "sgn"),
    ("csn", "sgn"),
    ("csq", "sgn"),
    ("csr", "sgn"),
    ("czh", "zh"),
    ("czo", "zh"),
    ("doq", "sgn"),
    ("dse", "sgn"),
    ("dsl", "sgn"),
    ("dup", "ms"),
    ("ecs", "sgn"),
    ("esl", "sgn"),
    ("esn", "sgn"),
    ("eso", "sgn"),
    ("eth", "sgn"),
    ("fcs", "sgn"),
    ("fse", "sgn"),
    ("fsl", "sgn"),
    ("fss", "sgn"),
    ("gan", "zh"),
    ("gds", "sgn"),
    ("gom", "kok"),
    ("gse", "sgn"),
    ("gsg", "sgn"),
    ("gsm", "sgn"),
    ("gss", "sgn"),
    ("gus", "sgn"),
    ("hab", "sgn"),
    ("haf", "sgn"),
    ("hak", "zh"),
    ("hds", "sgn"),
    ("hji", "ms"),
    ("hks", "sgn"),
    ("hos", "sgn"),
    ("hps", "sgn"),
    ("hsh", "sgn"),
    ("hsl", "sgn"),
    ("hsn", "zh"),
    ("icl", "sgn"),
    ("ils", "sgn"),
    ("inl", "sgn"),
    ("ins", "sgn"),
    ("ise", "sgn"),
    ("isg", "sgn"),
    ("isr", "sgn"),
    ("jak", "ms"),
    ("jax", "ms"),
    ("jcs", "sgn"),
    ("jhs", "sgn"),
    ("jls", "sgn"),
    ("jos", "sgn"),
    ("jsl", "sgn"),
    ("jus", "sgn"),
    ("kgi", "sgn"),
    ("knn", "kok"),
    ("kvb", "ms"),
    ("kvk", "sgn"),
    ("kvr", "ms"),
    ("kxd", "ms"),
    ("lbs", "sgn"),
    ("lce", "ms"),
    ("lcf", "ms"),
    ("liw", "ms"),
    ("lls", "sgn"),
    ("lsg", "sgn"),
    ("lsl", "sgn"),
    ("lso", "sgn"),
    ("lsp", "sgn"),
    ("lst", "sgn"),
    ("lsy", "sgn"),
    ("ltg", "lv"),
    ("lvs", "lv"),
    ("lzh", "zh"),
    ("max", "ms"),
    ("mdl", "sgn"),
    ("meo", "ms"),
    ("mfa", "ms"),
    ("mfb", "ms"),
    ("mfs", "sgn"),
    ("min", "ms"),
    ("mnp", "zh"),
    ("mqg", "ms"),
    ("mre", "sgn"),
    ("msd", "sgn"),
    ("msi", "ms"),
    ("msr", "sgn"),
    ("mui", "ms"),
    ("mzc", "sgn"),
    ("mzg", "sgn"),
    ("mzy", "sgn"),
    ("nan", "zh"),
    ("nbs", "sgn"),
    ("ncs", "sgn"),
    ("nsi", "sgn"),
    ("nsl", "sgn"),
    ("nsp", "sgn"),
    ("nsr", "sgn"),
    ("nzs", "sgn"),
    ("okl", "sgn"),
    ("orn", "ms"),
    ("ors", "ms"),
    ("pel", "ms"),
    ("pga", "ar"),
    ("pks", "sgn"),
    ("prl", "sgn"),
    ("prz", "sgn"),
    ("psc", "sgn"),
    ("psd", "sgn"),
    ("pse", "ms"),
    ("psg", "sgn"),
    ("psl", "sgn"),
    ("pso", "sgn"),
    ("psp", "sgn"),
    ("psr", "sgn"),
    ("pys", "sgn"),
    ("rms", "sgn"),
    ("rsi", "sgn"),
    ("rsl", "sgn"),
    ("sdl", "sgn"),
    ("sfb", "sgn"),
    ("sfs", "sgn"),
    ("sgg", "sgn"),
    ("sgx", "sgn"),
    ("shu", "ar"),
    ("slf", "sgn"),
    ("sls", "sgn"),
    ("sqk", "sgn"),
    ("sqs", "sgn"),
    ("ssh", "ar"),
    ("ssp", "sgn"),
    ("ssr", "sgn"),
    ("svk", "sgn"),
    ("swc", "sw"),
    ("swh", "sw"),
    ("swl", "sgn"),
    ("syy", "sgn"),
    ("tmw", "ms"),
    ("tse", "sgn"),
    ("tsm", "sgn"),
    ("tsq", "sgn"),
    ("tss", "sgn"),
    ("tsy", "sgn"),
    ("tza", "sgn"),
    ("ugn", "sgn"),
    ("ugy", "sgn"),
    ("ukl", "sgn"),
    ("uks", "sgn"),
    ("urk", "ms"),
    ("uzn", "uz"),
    ("uzs", "uz"),
    ("vgt", "sgn"),
    ("vkk", "ms"),
    ("vkt", "ms"),
    ("vsi", "sgn"),
    ("vsl", "sgn"),
    ("vsv", "sgn"),
    ("wuu", "zh"),
    ("xki", "sgn"),
    ("xml", "sgn"),
    ("xmm", "ms"),
    ("xms", "sgn"),
    ("yds", "sgn"),
    ("ysl", "sgn"),
    ("yue", "zh"),
    ("zib", "sgn"),
    ("zlm", "ms"),
    ("zmi", "ms"),
    ("zsl", "sgn"),
    ("zsm", "ms"),
];

/// Whole-tag lookup in [`REDUNDANT_TAGS`].
pub(crate) fn redundant_tag(tag: &str) -> Option<&'static str> {
    REDUNDANT_TAGS
        .iter()
        .find(|(from, _)| *from == tag)
        .map(|(_, to)| *to)
}

/// Subtag lookup in [`SUBTAGS`].
pub(crate) fn subtag_replacement(subtag: &str) -> Option<&'static str> {
    SUBTAGS
        .iter()
        .find(|(from, _)| *from == subtag)
        .map(|(_, to)| *to)
}

/// Designated prefix lookup in [`EXTLANGS`].
pub(crate) fn extlang_prefix(subtag: &str) -> Option<&'static str> {
    EXTLANGS
        .iter()
        .find(|(code, _)| *code == subtag)
        .map(|(_, prefix)| *prefix)
}
