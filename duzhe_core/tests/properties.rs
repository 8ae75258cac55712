use duzhe_core::normalizer::NormalizedText;
use duzhe_core::recognizer::NoRecognizer;
use duzhe_core::segmenter::{CharSegmenter, Segmenter};
use duzhe_core::{AnalysisError, Engine, Vocabulary};

/// 按固定步长（2 字一词）切分的“外部分词器”，用来确认拼接不变式不依赖 CharSegmenter。
struct Pairs;

impl Segmenter for Pairs {
    fn cut(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        chars.chunks(2).map(|c| c.iter().collect()).collect()
    }
}

const WORDS: &[&str] = &["我们", "喜欢", "学习", "中文", "因为", "很", "有意思", "老师"];

/// 确定性地把 WORDS 拼成若干文本。
fn compositions() -> Vec<String> {
    let mut out = Vec::new();
    for a in 0..WORDS.len() {
        for b in 0..WORDS.len() {
            for c in 0..WORDS.len() {
                out.push(format!("{}{}{}", WORDS[a], WORDS[b], WORDS[c]));
            }
        }
    }
    out
}

#[test]
fn text_built_from_known_words_is_fully_covered() {
    let vocab = Vocabulary::builder().known_list(WORDS.iter().copied()).build();
    let engine = Engine::new(CharSegmenter, NoRecognizer);
    for text in compositions() {
        let normalized = NormalizedText::new(&text).unwrap();
        let t = engine.tokenize(&normalized, &vocab);
        assert_eq!(t.score, normalized.len(), "text: {text}");
        assert!(t.segments.iter().all(|s| s.known), "text: {text}");
    }
}

#[test]
fn segments_concatenate_back_to_text() {
    let vocab = Vocabulary::builder()
        .known_list(["我们", "学习", "很"])
        .unknown_list(["有意思"])
        .build();
    let engine = Engine::new(Pairs, NoRecognizer);
    let noise = ["", "吗", "，", "abc", "了吧", "ＸＹ"];
    for text in compositions().iter().take(200) {
        for prefix in noise {
            for suffix in noise {
                let raw = format!("{prefix}{text}{suffix}");
                let normalized = NormalizedText::new(&raw).unwrap();
                let t = engine.tokenize(&normalized, &vocab);
                let joined: String = t.segments.iter().map(|s| s.text.as_str()).collect();
                assert_eq!(joined, normalized.as_string());
            }
        }
    }
}

#[test]
fn longer_known_word_wins_ties() {
    let vocab = Vocabulary::builder().known_list(["中", "文", "中文"]).build();
    let engine = Engine::new(CharSegmenter, NoRecognizer);
    let t = engine.tokenize(&NormalizedText::new("中文").unwrap(), &vocab);
    assert_eq!(t.segments.len(), 1);
    assert_eq!(t.segments[0].text, "中文");
}

#[test]
fn known_list_takes_precedence_over_unknown_list() {
    let vocab = Vocabulary::builder()
        .known_list(["学习"])
        .unknown_list(["学习"])
        .build();
    let engine = Engine::new(CharSegmenter, NoRecognizer);
    let c = engine.analyze("学习", &vocab).unwrap();
    assert_eq!(c.known_count, 1);
    assert!(c.unknown.is_empty());
}

#[test]
fn empty_text_is_rejected() {
    let engine = Engine::new(CharSegmenter, NoRecognizer);
    let vocab = Vocabulary::default();
    assert!(matches!(
        engine.analyze("", &vocab),
        Err(AnalysisError::EmptyInput { .. })
    ));
    assert!(matches!(
        engine.analyze("\u{3000} \n", &vocab),
        Err(AnalysisError::EmptyInput { .. })
    ));
}

#[test]
fn ascii_only_text_has_no_valid_words() {
    let engine = Engine::new(CharSegmenter, NoRecognizer);
    let vocab = Vocabulary::builder().known_list(["hello"]).build();
    assert!(matches!(
        engine.analyze("hello world 2024", &vocab),
        Err(AnalysisError::NoValidWords)
    ));
}

#[test]
fn unknown_ranking_example() {
    let engine = Engine::new(CharSegmenter, NoRecognizer);
    let vocab = Vocabulary::builder().unknown_list(["甲", "乙", "丙"]).build();
    let c = engine.analyze("甲甲乙乙乙丙", &vocab).unwrap();
    let ranked: Vec<(&str, usize)> = c
        .unknown
        .iter()
        .map(|s| (s.word.as_str(), s.count))
        .collect();
    assert_eq!(ranked, vec![("乙", 3), ("甲", 2), ("丙", 1)]);
}
