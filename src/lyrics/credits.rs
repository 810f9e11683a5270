use once_cell::sync::Lazy;
use regex::Regex;

/// 行首的职务名称
const ROLE_LABELS: &[&str] = &[
    r"\s?作?\s*词",
    r"\s?作?\s*曲",
    r"\s?编\s*曲?",
    r"\s?监\s*制?",
    "原唱",
    "翻唱",
    "题字",
    "文案",
    "海报",
    "lrc",
    "lyric",
    "compos",
    "arrang",
    "produc",
    "writ",
];

/// 冒号之前任意位置出现的制作相关关键词
const PRODUCTION_KEYWORDS: &[&str] = &[
    "编写", "和音", "和声", "合声", "提琴", "录", "工程", "工作室", "设计", "剪辑", "制作", "发行",
    "出品", "后期", "混音", "缩混", "母带", "古筝", "二胡", "钢琴", "吉他", "贝斯", "笛子", "鼓",
    "弦乐", "publish", "vocal", "guitar", "bass", "drum", "piano", "string", "program", "record",
    "engineer", "studio", "mix", "master",
];

static CREDIT_LINE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"(?i)^(?:{}|.*(?:{})).*[:：]",
        ROLE_LABELS.join("|"),
        PRODUCTION_KEYWORDS.join("|")
    );
    Regex::new(&pattern).unwrap()
});

/// 是否为作词、作曲、混音等制作信息行
pub fn is_credit_line(text: &str) -> bool {
    CREDIT_LINE.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_credits() {
        assert!(is_credit_line("作词：周杰伦"));
        assert!(is_credit_line("作曲 : 周杰伦"));
        assert!(is_credit_line("词：方文山"));
        assert!(is_credit_line("编曲：林迈可"));
        assert!(is_credit_line("监制：周杰伦"));
        assert!(is_credit_line("录音工程师：杨瑞代"));
        assert!(is_credit_line("混音工作室：JVR Studio"));
        assert!(is_credit_line("吉他：蔡科俊"));
    }

    #[test]
    fn test_english_credits() {
        assert!(is_credit_line("Mixed by: Someone"));
        assert!(is_credit_line("Lyricist: Someone"));
        assert!(is_credit_line("COMPOSER: Someone"));
        assert!(is_credit_line("Recording Engineer: Someone"));
        assert!(is_credit_line("Background Vocals: Someone"));
        assert!(is_credit_line("Mastering Studio : Somewhere"));
        assert!(is_credit_line("Produced by: Someone"));
    }

    #[test]
    fn test_lyric_lines() {
        assert!(!is_credit_line("对这个世界如果你有太多的抱怨"));
        assert!(!is_credit_line("Don't want to be an idiot"));
        assert!(!is_credit_line("Mixed feelings tonight"));
        assert!(!is_credit_line(""));
    }
}
