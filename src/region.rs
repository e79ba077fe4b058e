use lazy_static::lazy_static;
use std::collections::HashMap;

/// Province-level divisions, keyed by the two leading digits of an identifier.
///
/// `21` (辽宁) is listed although older tables of this closed set left it out, so
/// Liaoning identifiers are accepted.
const REGIONS: [(&str, &str); 35] = [
    ("11", "北京"),
    ("12", "天津"),
    ("13", "河北"),
    ("14", "山西"),
    ("15", "内蒙古"),
    ("21", "辽宁"),
    ("22", "吉林"),
    ("23", "黑龙江"),
    ("31", "上海"),
    ("32", "江苏"),
    ("33", "浙江"),
    ("34", "安徽"),
    ("35", "福建"),
    ("36", "江西"),
    ("37", "山东"),
    ("41", "河南"),
    ("42", "湖北"),
    ("43", "湖南"),
    ("44", "广东"),
    ("45", "广西"),
    ("46", "海南"),
    ("50", "重庆"),
    ("51", "四川"),
    ("52", "贵州"),
    ("53", "云南"),
    ("54", "西藏"),
    ("61", "陕西"),
    ("62", "甘肃"),
    ("63", "青海"),
    ("64", "宁夏"),
    ("65", "新疆"),
    ("71", "台湾"),
    ("81", "香港"),
    ("82", "澳门"),
    // issued abroad
    ("91", "国外"),
];

lazy_static! {
    static ref REGION_NAMES: HashMap<&'static str, &'static str> =
        REGIONS.iter().copied().collect();
}

pub const REGION_CODE_LENGTH: usize = 2;

/// Looks up the human readable name of a 2 character region code.
pub fn region_name(code: &str) -> Option<&'static str> {
    REGION_NAMES.get(code).copied()
}

pub fn is_known_region(code: &str) -> bool {
    REGION_NAMES.contains_key(code)
}

/// All known `(code, name)` pairs, ordered by code.
pub fn regions() -> impl Iterator<Item = (&'static str, &'static str)> {
    REGIONS.iter().copied()
}
