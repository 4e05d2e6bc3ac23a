//! Recognized vocabularies and patterns for the semantic check.

use once_cell::sync::Lazy;
use regex::Regex;

/// `YYYY-MM`, `YYYY/MM`, `YYYY年MM月` style dates. Find-anywhere semantics,
/// so a full date like `2025-03-15` matches on its year-month prefix.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}[-/年]\d{1,2}[-/月]?").unwrap());

/// Chinese relative ranges: 最近/近/过去 N 天/周/月/...
static RANGE_PATTERN_ZH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(最近|近|过去)\s*\d+\s*(天|日|周|星期|月|个月|季度|年)").unwrap());

/// English relative ranges: last/past/recent N day(s)/week(s)/...
static RANGE_PATTERN_EN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(last|past|recent)\s*\d+\s*(day|week|month|quarter|year)s?").unwrap());

/// Immutable term lists backing the semantic check.
///
/// Loaded once and injected into the validator; tests substitute smaller
/// lists. The regexes above are process-wide and not configurable.
#[derive(Debug, Clone)]
pub struct ValidationVocabulary {
    time_terms: Vec<String>,
    metric_terms: Vec<String>,
}

impl ValidationVocabulary {
    pub fn new(time_terms: &[&str], metric_terms: &[&str]) -> Self {
        Self {
            time_terms: time_terms.iter().map(|t| t.to_string()).collect(),
            metric_terms: metric_terms.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// A TIME value is recognized when it contains a known term, matches a
    /// date, or matches a relative range.
    pub fn recognizes_time(&self, value: &str) -> bool {
        self.time_terms.iter().any(|term| value.contains(term.as_str()))
            || DATE_PATTERN.is_match(value)
            || RANGE_PATTERN_ZH.is_match(value)
            || RANGE_PATTERN_EN.is_match(value)
    }

    /// A METRIC value is recognized when it equals or contains a known
    /// business-metric name.
    pub fn recognizes_metric(&self, value: &str) -> bool {
        self.metric_terms
            .iter()
            .any(|term| value.contains(term.as_str()))
    }
}

impl Default for ValidationVocabulary {
    fn default() -> Self {
        Self::new(
            &[
                "今天", "昨天", "明天", "本周", "上周", "本月", "上月", "本季度", "今年", "去年",
                "today", "yesterday", "this week", "last week", "this month", "last month",
                "this year", "last year",
            ],
            &[
                "销售额", "营业额", "订单量", "订单数", "客单价", "毛利", "毛利率", "销量",
                "库存", "退货率", "sales", "revenue", "orders", "profit", "inventory",
                "turnover",
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_terms_match_by_containment() {
        let vocab = ValidationVocabulary::default();
        assert!(vocab.recognizes_time("今天"));
        assert!(vocab.recognizes_time("就是今天啊"));
        assert!(vocab.recognizes_metric("销售额"));
        assert!(vocab.recognizes_metric("门店销售额"));
        assert!(!vocab.recognizes_metric("天气"));
    }

    #[test]
    fn dates_match_with_and_without_day() {
        let vocab = ValidationVocabulary::new(&[], &[]);
        assert!(vocab.recognizes_time("2025-03"));
        assert!(vocab.recognizes_time("2025-03-15"));
        assert!(vocab.recognizes_time("2025/3"));
        assert!(vocab.recognizes_time("2025年3月"));
        assert!(!vocab.recognizes_time("March 2025"));
    }

    #[test]
    fn relative_ranges_match_in_both_languages() {
        let vocab = ValidationVocabulary::new(&[], &[]);
        assert!(vocab.recognizes_time("最近7天"));
        assert!(vocab.recognizes_time("过去 3 个月"));
        assert!(vocab.recognizes_time("last 30 days"));
        assert!(vocab.recognizes_time("Past 2 Weeks"));
        assert!(!vocab.recognizes_time("sometime"));
    }
}
