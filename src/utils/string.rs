use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// 全角标点到半角形式的映射，先于 NFKC 执行以保留标点后的空格
const PUNCTUATION_MAP: &[(char, &str)] = &[
    ('（', "("),
    ('）', ")"),
    ('【', "["),
    ('】', "]"),
    ('。', ". "),
    ('；', "; "),
    ('：', ": "),
    ('？', "? "),
    ('！', "! "),
    ('、', ", "),
    ('，', ", "),
    ('‘', "'"),
    ('’', "'"),
    ('′', "'"),
    ('＇', "'"),
    ('“', "\""),
    ('”', "\""),
    ('〜', "~"),
    ('·', "•"),
    ('・', "•"),
];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// 带括号的合作艺人标注: "(feat. Artist)", "[ft. Someone]", "(with X)"
static FEAT_BRACKET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*[\(\[](?:feat\.?|ft\.?|featuring|with|prod\.?)\s+[^\)\]]*[\)\]]").unwrap()
});

/// 不带括号的合作艺人标注: "Song - feat. X", "Song ft. X"
static FEAT_TRAILING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(?:-\s+)?(?:feat\.?|ft\.?|featuring)\s+.*$").unwrap()
});

/// 破折号后的描述信息: "Song - Remastered 2011", "Song - Live"
static DASH_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+[-–—]\s+.*$").unwrap());

/// 末尾的括号信息: "Song (Live)", "Song [Remix]"
static BRACKET_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(?:\([^\(\)]*\)|\[[^\[\]]*\])\s*$").unwrap());

/// 规范化字符串：统一全角标点、NFKC 归一化、合并空白
///
/// `fold_case` 为 true 时额外转为小写，并把 `-` 和 `/` 视为空白，用于比较；
/// 为 false 时保留原有大小写和符号，用于显示。
pub fn normalize_text(input: &str, fold_case: bool) -> String {
    let mut mapped = String::with_capacity(input.len());
    for c in input.chars() {
        match PUNCTUATION_MAP.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => mapped.push_str(to),
            None => mapped.push(c),
        }
    }

    let mut result: String = mapped.nfkc().collect();
    if fold_case {
        result = result.replace(['-', '/'], " ").to_lowercase();
    }

    WHITESPACE.replace_all(&result, " ").trim().to_string()
}

/// 去除标题中的合作艺人信息，结果为空时返回原字符串
pub fn strip_featured_artist(input: &str) -> String {
    let without_bracket = FEAT_BRACKET.replace_all(input, "");
    let result = FEAT_TRAILING.replace(&without_bracket, "");
    let result = result.trim();

    if result.is_empty() {
        input.trim().to_string()
    } else {
        result.to_string()
    }
}

/// 去除标题末尾的括号和破折号描述，结果为空时返回原字符串
pub fn strip_parenthetical_suffix(input: &str) -> String {
    let mut result = DASH_SUFFIX.replace(input, "").to_string();

    // 可能有多组括号: "Song (Live) [Remastered]"
    loop {
        let stripped = BRACKET_SUFFIX.replace(&result, "").to_string();
        if stripped == result || stripped.trim().is_empty() {
            break;
        }
        result = stripped;
    }

    let result = result.trim();
    if result.is_empty() {
        input.trim().to_string()
    } else {
        result.to_string()
    }
}

/// 首字母大写
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
