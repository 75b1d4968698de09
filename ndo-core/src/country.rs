//! Static country reference tables.
//!
//! Two independent lookups: numeric ISO 3166-1 code to alpha-3 code, and
//! alpha-3 code to hemisphere. Both are sorted by key and searched with
//! binary search. A handful of alpha-3 codes (AGO, NLD, ...) have a numeric
//! entry but no hemisphere entry and therefore resolve to no hemisphere.

use crate::hemisphere::Hemisphere::{self, Northern, Southern};

/// Numeric ISO 3166-1 code to alpha-3 code, sorted by numeric code.
pub static NUMERIC_TO_ALPHA3: &[(u16, &str)] = &[
    (4, "AFG"), (8, "ALB"), (12, "DZA"), (20, "AND"), (24, "AGO"),
    (28, "ATG"), (31, "AZE"), (32, "ARG"), (36, "AUS"), (40, "AUT"),
    (44, "BHS"), (48, "BHR"), (50, "BGD"), (51, "ARM"), (52, "BRB"),
    (56, "BEL"), (64, "BTN"), (68, "BOL"), (70, "BIH"), (72, "BWA"),
    (76, "BRA"), (84, "BLZ"), (90, "SLB"), (96, "BRN"), (100, "BGR"),
    (104, "MMR"), (108, "BDI"), (112, "BLR"), (116, "KHM"), (120, "CMR"),
    (124, "CAN"), (132, "CPV"), (140, "CAF"), (144, "LKA"), (148, "TCD"),
    (152, "CHL"), (156, "CHN"), (158, "TWN"), (170, "COL"), (174, "COM"),
    (178, "COG"), (180, "COD"), (184, "COK"), (188, "CRI"), (191, "HRV"),
    (192, "CUB"), (196, "CYP"), (203, "CZE"), (204, "BEN"), (208, "DNK"),
    (212, "DMA"), (214, "DOM"), (218, "ECU"), (222, "SLV"), (226, "GNQ"),
    (231, "ETH"), (232, "ERI"), (233, "EST"), (242, "FJI"), (246, "FIN"),
    (250, "FRA"), (262, "DJI"), (266, "GAB"), (268, "GEO"), (270, "GMB"),
    (275, "PSE"), (276, "DEU"), (288, "GHA"), (296, "KIR"), (300, "GRC"),
    (308, "GRD"), (320, "GTM"), (324, "GIN"), (328, "GUY"), (332, "HTI"),
    (336, "VAT"), (340, "HND"), (348, "HUN"), (352, "ISL"), (356, "IND"),
    (360, "IDN"), (364, "IRN"), (368, "IRQ"), (372, "IRL"), (376, "ISR"),
    (380, "ITA"), (384, "CIV"), (388, "JAM"), (392, "JPN"), (398, "KAZ"),
    (400, "JOR"), (404, "KEN"), (408, "PRK"), (410, "KOR"), (414, "KWT"),
    (417, "KGZ"), (418, "LAO"), (422, "LBN"), (426, "LSO"), (428, "LVA"),
    (430, "LBR"), (434, "LBY"), (438, "LIE"), (440, "LTU"), (442, "LUX"),
    (450, "MDG"), (454, "MWI"), (458, "MYS"), (462, "MDV"), (466, "MLI"),
    (470, "MLT"), (478, "MRT"), (480, "MUS"), (484, "MEX"), (492, "MCO"),
    (496, "MNG"), (498, "MDA"), (499, "MNE"), (504, "MAR"), (508, "MOZ"),
    (512, "OMN"), (516, "NAM"), (520, "NRU"), (524, "NPL"), (528, "NLD"),
    (548, "VUT"), (554, "NZL"), (558, "NIC"), (562, "NER"), (566, "NGA"),
    (570, "NIU"), (578, "NOR"), (583, "FSM"), (584, "MHL"), (585, "PLW"),
    (586, "PAK"), (591, "PAN"), (598, "PNG"), (600, "PRY"), (604, "PER"),
    (608, "PHL"), (616, "POL"), (620, "PRT"), (624, "GNB"), (626, "TLS"),
    (634, "QAT"), (642, "ROU"), (643, "RUS"), (646, "RWA"), (659, "KNA"),
    (662, "LCA"), (670, "VCT"), (674, "SMR"), (678, "STP"), (682, "SAU"),
    (686, "SEN"), (688, "SRB"), (690, "SYC"), (694, "SLE"), (702, "SGP"),
    (703, "SVK"), (704, "VNM"), (705, "SVN"), (706, "SOM"), (710, "ZAF"),
    (716, "ZWE"), (724, "ESP"), (728, "SSD"), (729, "SDN"), (740, "SUR"),
    (748, "SWZ"), (752, "SWE"), (756, "CHE"), (760, "SYR"), (762, "TJK"),
    (764, "THA"), (768, "TGO"), (776, "TON"), (780, "TTO"), (784, "ARE"),
    (788, "TUN"), (792, "TUR"), (795, "TKM"), (798, "TUV"), (800, "UGA"),
    (804, "UKR"), (807, "MKD"), (818, "EGY"), (834, "TZA"), (840, "USA"),
    (854, "BFA"), (858, "URY"), (860, "UZB"), (862, "VEN"), (882, "WSM"),
    (887, "YEM"), (894, "ZMB"),
];

/// Alpha-3 code to hemisphere, sorted by alpha-3 code.
pub static ALPHA3_TO_HEMISPHERE: &[(&str, Hemisphere)] = &[
    ("AFG", Northern), ("ALB", Northern), ("AND", Northern), ("ARE", Northern),
    ("ARG", Southern), ("ARM", Northern), ("AUS", Southern), ("AUT", Northern),
    ("AZE", Northern), ("BEL", Northern), ("BFA", Northern), ("BGD", Northern),
    ("BGR", Northern), ("BHR", Northern), ("BIH", Northern), ("BLR", Northern),
    ("BRA", Southern), ("BTN", Northern), ("CAF", Northern), ("CAN", Northern),
    ("CHE", Northern), ("CHL", Southern), ("CHN", Northern), ("CIV", Northern),
    ("CMR", Northern), ("COD", Southern), ("COG", Southern), ("COK", Southern),
    ("COL", Northern), ("COM", Northern), ("CPV", Northern), ("CRI", Northern),
    ("CUB", Northern), ("CYP", Northern), ("CZE", Northern), ("DEU", Northern),
    ("DJI", Northern), ("DMA", Northern), ("DNK", Northern), ("DOM", Northern),
    ("DZA", Northern), ("ECU", Southern), ("EGY", Northern), ("ERI", Northern),
    ("ESP", Northern), ("EST", Northern), ("ETH", Northern), ("FIN", Northern),
    ("FRA", Northern), ("FSM", Northern), ("GAB", Southern), ("GEO", Northern),
    ("GHA", Northern), ("GIN", Northern), ("GMB", Northern), ("GNB", Northern),
    ("GNQ", Northern), ("GRC", Northern), ("GRD", Northern), ("GTM", Northern),
    ("GUY", Southern), ("HND", Northern), ("HRV", Northern), ("HTI", Northern),
    ("HUN", Northern), ("IDN", Southern), ("IND", Northern), ("IRL", Northern),
    ("IRN", Northern), ("IRQ", Northern), ("ISL", Northern), ("ISR", Northern),
    ("ITA", Northern), ("JAM", Northern), ("JOR", Northern), ("JPN", Northern),
    ("KAZ", Northern), ("KEN", Southern), ("KGZ", Northern), ("KHM", Northern),
    ("KIR", Southern), ("KNA", Northern), ("KOR", Northern), ("KWT", Northern),
    ("LAO", Northern), ("LBN", Northern), ("LBR", Northern), ("LBY", Northern),
    ("LCA", Northern), ("LIE", Northern), ("LKA", Northern), ("LSO", Southern),
    ("LTU", Northern), ("LUX", Northern), ("LVA", Northern), ("MAR", Northern),
    ("MCO", Northern), ("MDA", Northern), ("MDG", Southern), ("MDV", Northern),
    ("MEX", Northern), ("MHL", Northern), ("MKD", Northern), ("MLI", Northern),
    ("MLT", Northern), ("MMR", Northern), ("MNE", Northern), ("MNG", Northern),
    ("MOZ", Southern), ("MRT", Northern), ("MUS", Southern), ("MWI", Southern),
    ("MYS", Northern), ("NAM", Southern), ("NER", Northern), ("NGA", Northern),
    ("NIC", Northern), ("NIU", Southern), ("NOR", Northern), ("NPL", Northern),
    ("NRU", Southern), ("NZL", Southern), ("OMN", Northern), ("PAK", Northern),
    ("PAN", Northern), ("PER", Southern), ("PHL", Northern), ("PLW", Northern),
    ("PNG", Southern), ("POL", Northern), ("PRK", Northern), ("PRT", Northern),
    ("PRY", Southern), ("PSE", Northern), ("QAT", Northern), ("ROU", Northern),
    ("RUS", Northern), ("RWA", Southern), ("SAU", Northern), ("SDN", Northern),
    ("SEN", Northern), ("SGP", Northern), ("SLB", Southern), ("SLE", Northern),
    ("SLV", Northern), ("SMR", Northern), ("SOM", Northern), ("SRB", Northern),
    ("SSD", Northern), ("STP", Southern), ("SUR", Southern), ("SVK", Northern),
    ("SVN", Northern), ("SWE", Northern), ("SWZ", Southern), ("SYC", Southern),
    ("SYR", Northern), ("TCD", Northern), ("TGO", Northern), ("THA", Northern),
    ("TJK", Northern), ("TKM", Northern), ("TLS", Southern), ("TON", Southern),
    ("TTO", Northern), ("TUN", Northern), ("TUR", Northern), ("TUV", Southern),
    ("TWN", Northern), ("TZA", Southern), ("UGA", Southern), ("UKR", Northern),
    ("URY", Southern), ("USA", Northern), ("UZB", Northern), ("VAT", Northern),
    ("VCT", Northern), ("VEN", Northern), ("VNM", Northern), ("VUT", Southern),
    ("WSM", Southern), ("YEM", Northern), ("ZAF", Southern), ("ZMB", Southern),
    ("ZWE", Southern),
];

/// Resolve a numeric ISO code to its alpha-3 code.
pub fn alpha3_for_numeric(numeric: u16) -> Option<&'static str> {
    NUMERIC_TO_ALPHA3
        .binary_search_by_key(&numeric, |&(code, _)| code)
        .ok()
        .map(|idx| NUMERIC_TO_ALPHA3[idx].1)
}

/// Resolve an alpha-3 code to its hemisphere.
pub fn hemisphere_for_alpha3(alpha3: &str) -> Option<Hemisphere> {
    ALPHA3_TO_HEMISPHERE
        .binary_search_by(|&(code, _)| code.cmp(alpha3))
        .ok()
        .map(|idx| ALPHA3_TO_HEMISPHERE[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted_and_unique() {
        assert!(NUMERIC_TO_ALPHA3.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(ALPHA3_TO_HEMISPHERE.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(NUMERIC_TO_ALPHA3.len(), 197);
        assert_eq!(ALPHA3_TO_HEMISPHERE.len(), 185);
    }

    #[test]
    fn test_alpha3_for_numeric() {
        assert_eq!(alpha3_for_numeric(840), Some("USA"));
        assert_eq!(alpha3_for_numeric(4), Some("AFG"));
        assert_eq!(alpha3_for_numeric(894), Some("ZMB"));
        assert_eq!(alpha3_for_numeric(158), Some("TWN"));
        assert_eq!(alpha3_for_numeric(1), None);
    }

    #[test]
    fn test_hemisphere_for_alpha3() {
        assert_eq!(hemisphere_for_alpha3("FRA"), Some(Northern));
        assert_eq!(hemisphere_for_alpha3("BRA"), Some(Southern));
        assert_eq!(hemisphere_for_alpha3("COK"), Some(Southern));
        assert_eq!(hemisphere_for_alpha3("ZZZ"), None);
    }

    #[test]
    fn test_codes_without_hemisphere() {
        // present in the numeric table, absent from the hemisphere table
        for alpha3 in ["AGO", "NLD", "FJI", "BOL"] {
            assert!(NUMERIC_TO_ALPHA3.iter().any(|&(_, code)| code == alpha3));
            assert_eq!(hemisphere_for_alpha3(alpha3), None);
        }
    }

    #[test]
    fn test_every_hemisphere_code_has_numeric_entry() {
        for &(alpha3, _) in ALPHA3_TO_HEMISPHERE {
            assert!(
                NUMERIC_TO_ALPHA3.iter().any(|&(_, code)| code == alpha3),
                "{} missing from numeric table",
                alpha3
            );
        }
    }
}
