//! Бейдж AI-оценки качества поста.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Диапазон оценки. Нижняя граница каждого диапазона включительна.
pub enum ScoreTier {
    /// `[90, ∞)`
    Excellent,
    /// `[80, 90)`
    Good,
    /// `[70, 80)`
    Average,
    /// `[60, 70)`
    Fair,
    /// `(−∞, 60)`
    Poor,
}

impl ScoreTier {
    /// Определяет диапазон для оценки.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::Excellent
        } else if score >= 80.0 {
            Self::Good
        } else if score >= 70.0 {
            Self::Average
        } else if score >= 60.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Имя диапазона.
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Символ перед оценкой.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Excellent => "⭐",
            Self::Good => "✨",
            Self::Average => "👍",
            Self::Fair => "📝",
            Self::Poor => "💡",
        }
    }

    /// CSS-класс бейджа.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "score-excellent",
            Self::Good => "score-good",
            Self::Average => "score-average",
            Self::Fair => "score-fair",
            Self::Poor => "score-poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Готовый к отрисовке бейдж.
pub struct ScoreBadge {
    /// Диапазон оценки.
    pub tier: ScoreTier,
    /// Сама оценка.
    pub score: f64,
}

impl fmt::Display for ScoreBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/100", self.tier.glyph(), self.score)
    }
}

/// Бейдж для оценки поста; без оценки бейджа нет.
pub fn badge(score: Option<f64>) -> Option<ScoreBadge> {
    score.map(|score| ScoreBadge {
        tier: ScoreTier::from_score(score),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(score: f64) -> ScoreTier {
        badge(Some(score)).expect("score must produce a badge").tier
    }

    #[test]
    fn tiers_include_their_lower_bound() {
        assert_eq!(tier(90.0), ScoreTier::Excellent);
        assert_eq!(tier(80.0), ScoreTier::Good);
        assert_eq!(tier(70.0), ScoreTier::Average);
        assert_eq!(tier(60.0), ScoreTier::Fair);
    }

    #[test]
    fn values_just_below_a_bound_fall_into_lower_tier() {
        assert_eq!(tier(89.99), ScoreTier::Good);
        assert_eq!(tier(79.5), ScoreTier::Average);
        assert_eq!(tier(69.9), ScoreTier::Fair);
        assert_eq!(tier(59.999), ScoreTier::Poor);
    }

    #[test]
    fn extreme_scores_are_classified() {
        assert_eq!(tier(100.0), ScoreTier::Excellent);
        assert_eq!(tier(250.0), ScoreTier::Excellent);
        assert_eq!(tier(0.0), ScoreTier::Poor);
        assert_eq!(tier(-5.0), ScoreTier::Poor);
    }

    #[test]
    fn missing_score_has_no_badge() {
        assert!(badge(None).is_none());
    }

    #[test]
    fn badge_text_prints_whole_scores_without_fraction() {
        let text = badge(Some(95.0)).expect("badge").to_string();
        assert_eq!(text, "⭐ 95/100");

        let text = badge(Some(55.0)).expect("badge").to_string();
        assert_eq!(text, "💡 55/100");

        let text = badge(Some(72.5)).expect("badge").to_string();
        assert_eq!(text, "👍 72.5/100");
    }

    #[test]
    fn css_class_matches_label() {
        for score in [95.0, 85.0, 75.0, 65.0, 10.0] {
            let tier = ScoreTier::from_score(score);
            assert_eq!(tier.css_class(), format!("score-{}", tier.label()));
        }
    }
}
