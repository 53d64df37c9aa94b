//! Pattern analyzer: averaged word polarity and subjectivity
//!
//! Each lexicon word carries a (polarity, subjectivity) pair. An
//! intensifier directly before a word scales both values; a negation within
//! the three preceding words flips the polarity and halves it. The text
//! scores are plain means over the matched words.

use std::collections::BTreeMap;

use super::tokens::{is_negation, tokenize};
use super::{round3, SentimentSignal};

const NEGATION_FACTOR: f64 = -0.5;
const NEGATION_WINDOW: usize = 3;

/// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("abandoned", -0.5, 0.7),
    ("abuse", -0.7, 0.8),
    ("abused", -0.7, 0.8),
    ("aching", -0.4, 0.7),
    ("admirable", 0.7, 0.8),
    ("adorable", 0.5, 1.0),
    ("affectionate", 0.6, 0.8),
    ("afraid", -0.6, 0.9),
    ("aggressive", -0.3, 0.6),
    ("agony", -0.8, 0.9),
    ("agreeable", 0.5, 0.6),
    ("alarmed", -0.4, 0.7),
    ("alive", 0.1, 0.4),
    ("alone", -0.2, 0.6),
    ("amazed", 0.6, 0.9),
    ("amazing", 0.6, 0.9),
    ("amused", 0.5, 0.8),
    ("anger", -0.6, 0.8),
    ("angry", -0.5, 1.0),
    ("anguish", -0.8, 0.9),
    ("annoying", -0.8, 0.9),
    ("anxious", -0.5, 0.8),
    ("apathetic", -0.3, 0.6),
    ("appalled", -0.7, 0.9),
    ("appalling", -0.8, 0.9),
    ("appreciated", 0.6, 0.7),
    ("appreciative", 0.5, 0.8),
    ("arrogant", -0.5, 0.8),
    ("ashamed", -0.5, 0.8),
    ("attractive", 0.6, 0.9),
    ("awe", 0.5, 0.9),
    ("awesome", 1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("awkward", -0.3, 0.7),
    ("bad", -0.7, 0.67),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("betrayed", -0.7, 0.8),
    ("better", 0.5, 0.5),
    ("bitter", -0.5, 0.7),
    ("bleak", -0.5, 0.7),
    ("blessed", 0.6, 0.8),
    ("bliss", 0.8, 0.9),
    ("blissful", 0.8, 0.9),
    ("bold", 0.3, 0.6),
    ("boring", -1.0, 1.0),
    ("brave", 0.6, 0.9),
    ("breathtaking", 0.8, 1.0),
    ("bright", 0.7, 0.8),
    ("brilliant", 0.9, 1.0),
    ("broken", -0.4, 0.5),
    ("brutal", -0.7, 0.8),
    ("bubbly", 0.5, 0.8),
    ("calm", 0.3, 0.75),
    ("carefree", 0.5, 0.7),
    ("careless", -0.3, 0.6),
    ("caring", 0.6, 0.8),
    ("catastrophe", -0.8, 0.8),
    ("catastrophic", -0.8, 0.9),
    ("celebrate", 0.6, 0.7),
    ("charming", 0.6, 0.9),
    ("cheer", 0.5, 0.7),
    ("cheerful", 0.8, 0.9),
    ("cheers", 0.5, 0.7),
    ("clean", 0.4, 0.6),
    ("clever", 0.5, 0.8),
    ("comfort", 0.4, 0.6),
    ("comfortable", 0.4, 0.6),
    ("compassionate", 0.5, 0.8),
    ("confident", 0.5, 0.8),
    ("content", 0.4, 0.6),
    ("cool", 0.35, 0.65),
    ("courageous", 0.6, 0.8),
    ("cozy", 0.5, 0.8),
    ("creative", 0.5, 0.7),
    ("cruel", -0.8, 0.9),
    ("crushed", -0.6, 0.8),
    ("crying", -0.5, 0.8),
    ("cute", 0.5, 1.0),
    ("damaged", -0.4, 0.5),
    ("dark", -0.15, 0.4),
    ("dazzling", 0.7, 0.9),
    ("dead", -0.2, 0.4),
    ("dear", 0.3, 0.6),
    ("delicious", 1.0, 1.0),
    ("delight", 0.8, 0.9),
    ("delighted", 0.7, 0.7),
    ("delightful", 0.8, 0.9),
    ("depressed", -0.6, 0.8),
    ("depressing", -0.6, 0.8),
    ("despair", -0.8, 0.9),
    ("desperate", -0.5, 0.8),
    ("destroyed", -0.6, 0.7),
    ("devastated", -0.8, 0.9),
    ("devastating", -0.8, 0.9),
    ("difficult", -0.5, 1.0),
    ("dire", -0.6, 0.7),
    ("dirty", -0.6, 0.8),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disaster", -0.8, 0.8),
    ("disastrous", -0.8, 0.9),
    ("discouraged", -0.5, 0.7),
    ("disgusted", -0.8, 0.9),
    ("disgusting", -1.0, 1.0),
    ("dismal", -0.6, 0.8),
    ("distressed", -0.6, 0.8),
    ("dread", -0.6, 0.8),
    ("dreadful", -0.8, 1.0),
    ("dreamy", 0.4, 0.8),
    ("dull", -0.3, 0.6),
    ("eager", 0.25, 0.5),
    ("easy", 0.43, 0.83),
    ("ecstatic", 0.8, 1.0),
    ("elated", 0.8, 1.0),
    ("elegant", 0.5, 0.8),
    ("embarrassed", -0.4, 0.8),
    ("empty", -0.1, 0.5),
    ("enchanting", 0.7, 0.9),
    ("encouraged", 0.5, 0.7),
    ("encouraging", 0.5, 0.7),
    ("energetic", 0.5, 0.7),
    ("enjoy", 0.4, 0.5),
    ("enjoyable", 0.5, 0.7),
    ("enjoyed", 0.4, 0.5),
    ("enraged", -0.8, 0.9),
    ("enthusiastic", 0.6, 0.8),
    ("euphoric", 0.8, 1.0),
    ("evil", -1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("exceptional", 0.7, 0.9),
    ("excited", 0.4, 0.75),
    ("exciting", 0.3, 0.8),
    ("exhausted", -0.4, 0.7),
    ("exhilarated", 0.8, 0.9),
    ("exquisite", 0.7, 0.9),
    ("fabulous", 0.4, 0.9),
    ("fail", -0.5, 0.6),
    ("failed", -0.5, 0.6),
    ("failure", -0.32, 0.3),
    ("faithful", 0.4, 0.6),
    ("fake", -0.5, 1.0),
    ("fantastic", 0.4, 0.9),
    ("favorite", 0.5, 1.0),
    ("fearful", -0.6, 0.9),
    ("fearless", 0.5, 0.8),
    ("festive", 0.5, 0.7),
    ("fine", 0.42, 0.5),
    ("fond", 0.5, 0.8),
    ("fortunate", 0.5, 0.8),
    ("free", 0.4, 0.8),
    ("fresh", 0.3, 0.5),
    ("friendly", 0.38, 0.5),
    ("frightened", -0.6, 0.9),
    ("frustrated", -0.6, 0.8),
    ("frustrating", -0.6, 0.8),
    ("fulfilled", 0.6, 0.8),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("furious", -0.8, 1.0),
    ("generous", 0.5, 0.6),
    ("gentle", 0.3, 0.6),
    ("genuine", 0.4, 0.6),
    ("giggle", 0.5, 0.8),
    ("glad", 0.5, 1.0),
    ("gloomy", -0.6, 0.8),
    ("glorious", 0.7, 0.9),
    ("glowing", 0.5, 0.7),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("graceful", 0.5, 0.7),
    ("gracious", 0.5, 0.7),
    ("grateful", 0.6, 0.8),
    ("gratitude", 0.6, 0.8),
    ("great", 0.8, 0.75),
    ("grief", -0.7, 0.9),
    ("grieving", -0.7, 0.9),
    ("gross", -0.5, 0.8),
    ("guilty", -0.4, 0.7),
    ("happiness", 0.8, 1.0),
    ("happy", 0.8, 1.0),
    ("harmonious", 0.5, 0.7),
    ("harsh", -0.5, 0.7),
    ("hate", -0.8, 0.9),
    ("hateful", -0.8, 0.9),
    ("healthy", 0.5, 0.5),
    ("heartbreaking", -0.8, 0.9),
    ("heartbroken", -0.8, 0.9),
    ("heartwarming", 0.7, 0.9),
    ("heavenly", 0.7, 0.9),
    ("helpful", 0.5, 0.6),
    ("helpless", -0.5, 0.8),
    ("hero", 0.5, 0.6),
    ("honest", 0.6, 0.9),
    ("hope", 0.4, 0.6),
    ("hopeful", 0.5, 0.7),
    ("hopeless", -0.7, 0.9),
    ("horrible", -1.0, 1.0),
    ("hostile", -0.5, 0.7),
    ("hug", 0.5, 0.6),
    ("humiliated", -0.6, 0.9),
    ("hurt", -0.5, 0.7),
    ("hurtful", -0.6, 0.8),
    ("ideal", 0.9, 0.9),
    ("ill", -0.5, 0.8),
    ("impressed", 0.7, 1.0),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("insecure", -0.4, 0.7),
    ("inspired", 0.6, 0.8),
    ("inspiring", 0.6, 0.8),
    ("insulted", -0.6, 0.8),
    ("interesting", 0.5, 0.5),
    ("irritated", -0.5, 0.8),
    ("irritating", -0.5, 0.8),
    ("jealous", -0.4, 0.8),
    ("jolly", 0.5, 0.7),
    ("joy", 0.8, 0.9),
    ("joyful", 0.8, 0.9),
    ("joyous", 0.8, 0.9),
    ("jubilant", 0.8, 0.9),
    ("kind", 0.6, 0.9),
    ("lame", -0.5, 0.8),
    ("laugh", 0.5, 0.7),
    ("laughing", 0.5, 0.7),
    ("laughter", 0.5, 0.7),
    ("lively", 0.4, 0.6),
    ("lonely", -0.5, 0.9),
    ("lose", -0.3, 0.4),
    ("loss", -0.4, 0.5),
    ("lost", -0.3, 0.4),
    ("lovable", 0.6, 0.8),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("loving", 0.6, 0.8),
    ("loyal", 0.4, 0.6),
    ("lucky", 0.33, 1.0),
    ("mad", -0.6, 1.0),
    ("magical", 0.5, 0.8),
    ("magnificent", 1.0, 1.0),
    ("marvelous", 0.8, 0.9),
    ("mean", -0.3, 0.7),
    ("melancholy", -0.4, 0.8),
    ("merry", 0.6, 0.8),
    ("mess", -0.4, 0.6),
    ("messy", -0.4, 0.6),
    ("miserable", -1.0, 1.0),
    ("miss", -0.2, 0.4),
    ("motivated", 0.5, 0.7),
    ("mourn", -0.6, 0.8),
    ("mourning", -0.6, 0.8),
    ("nasty", -1.0, 1.0),
    ("negative", -0.3, 0.4),
    ("nervous", -0.3, 1.0),
    ("nice", 0.6, 1.0),
    ("nightmare", -0.7, 0.8),
    ("offended", -0.5, 0.8),
    ("okay", 0.5, 0.5),
    ("outraged", -0.7, 0.9),
    ("outstanding", 0.5, 0.7),
    ("overjoyed", 0.9, 1.0),
    ("overwhelmed", -0.3, 0.7),
    ("painful", -0.7, 0.9),
    ("panic", -0.6, 0.8),
    ("paradise", 0.7, 0.8),
    ("passionate", 0.5, 0.8),
    ("pathetic", -1.0, 1.0),
    ("patient", 0.3, 0.6),
    ("peace", 0.5, 0.7),
    ("peaceful", 0.5, 0.8),
    ("perfect", 1.0, 1.0),
    ("pessimistic", -0.5, 0.8),
    ("playful", 0.4, 0.7),
    ("pleasant", 0.73, 0.97),
    ("pleased", 0.5, 1.0),
    ("pleasure", 0.6, 0.8),
    ("pointless", -0.5, 0.7),
    ("poor", -0.4, 0.6),
    ("positive", 0.23, 0.55),
    ("precious", 0.5, 0.8),
    ("pretty", 0.25, 1.0),
    ("promising", 0.5, 0.7),
    ("proud", 0.8, 1.0),
    ("radiant", 0.6, 0.8),
    ("rage", -0.7, 0.9),
    ("refreshed", 0.4, 0.6),
    ("refreshing", 0.5, 0.7),
    ("regret", -0.5, 0.7),
    ("rejected", -0.5, 0.7),
    ("relaxed", 0.4, 0.6),
    ("relief", 0.4, 0.6),
    ("relieved", 0.4, 0.6),
    ("remarkable", 0.75, 0.75),
    ("resent", -0.5, 0.8),
    ("rewarding", 0.5, 0.6),
    ("romantic", 0.5, 0.8),
    ("rotten", -0.7, 0.9),
    ("rude", -0.6, 0.9),
    ("ruined", -0.6, 0.7),
    ("sad", -0.5, 1.0),
    ("sadness", -0.5, 1.0),
    ("safe", 0.5, 0.5),
    ("satisfied", 0.5, 1.0),
    ("satisfying", 0.5, 0.7),
    ("scared", -0.5, 0.8),
    ("scary", -0.5, 0.9),
    ("secure", 0.4, 0.5),
    ("selfish", -0.5, 0.8),
    ("serene", 0.5, 0.8),
    ("shame", -0.5, 0.7),
    ("shocked", -0.4, 0.8),
    ("sick", -0.7, 0.9),
    ("smile", 0.4, 0.6),
    ("smiling", 0.4, 0.6),
    ("sorrow", -0.6, 0.9),
    ("sorry", -0.5, 1.0),
    ("special", 0.36, 0.57),
    ("spectacular", 0.8, 0.9),
    ("splendid", 0.8, 0.9),
    ("stressed", -0.5, 0.8),
    ("stressful", -0.5, 0.8),
    ("stunning", 0.5, 1.0),
    ("stupid", -0.8, 1.0),
    ("success", 0.5, 0.5),
    ("successful", 0.75, 0.95),
    ("suffer", -0.6, 0.8),
    ("suffering", -0.6, 0.8),
    ("sunny", 0.5, 0.6),
    ("superb", 1.0, 1.0),
    ("supportive", 0.5, 0.7),
    ("sweet", 0.35, 0.65),
    ("sympathetic", 0.3, 0.7),
    ("talented", 0.7, 0.9),
    ("tender", 0.3, 0.6),
    ("terrible", -1.0, 1.0),
    ("terrific", 1.0, 1.0),
    ("terrified", -0.8, 1.0),
    ("terrifying", -0.8, 1.0),
    ("thankful", 0.6, 0.8),
    ("thanks", 0.2, 0.2),
    ("threatening", -0.5, 0.7),
    ("thrilled", 0.7, 0.9),
    ("thrilling", 0.6, 0.9),
    ("tired", -0.4, 0.7),
    ("tragedy", -0.7, 0.8),
    ("tragic", -0.75, 0.75),
    ("trapped", -0.4, 0.6),
    ("treasure", 0.5, 0.7),
    ("triumph", 0.6, 0.7),
    ("triumphant", 0.6, 0.8),
    ("troubled", -0.4, 0.7),
    ("trust", 0.4, 0.5),
    ("ugly", -0.7, 1.0),
    ("unbearable", -0.8, 0.9),
    ("unfair", -0.5, 0.8),
    ("unfortunate", -0.4, 0.6),
    ("unhappy", -0.6, 0.9),
    ("unlucky", -0.4, 0.8),
    ("unpleasant", -0.5, 0.8),
    ("unwanted", -0.4, 0.6),
    ("upbeat", 0.5, 0.7),
    ("uplifting", 0.6, 0.8),
    ("upset", -0.6, 0.8),
    ("useless", -0.5, 0.2),
    ("valuable", 0.5, 0.5),
    ("vibrant", 0.5, 0.7),
    ("victorious", 0.6, 0.8),
    ("victory", 0.5, 0.6),
    ("vile", -0.8, 1.0),
    ("violent", -0.6, 0.8),
    ("warm", 0.6, 0.6),
    ("weak", -0.4, 0.6),
    ("weary", -0.4, 0.7),
    ("welcome", 0.6, 0.9),
    ("wicked", -0.5, 0.8),
    ("win", 0.6, 0.5),
    ("winning", 0.5, 0.5),
    ("wise", 0.7, 0.7),
    ("won", 0.5, 0.5),
    ("wonderful", 1.0, 1.0),
    ("worried", -0.5, 0.8),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("worthless", -0.8, 0.8),
    ("worthy", 0.3, 0.4),
    ("wounded", -0.5, 0.7),
    ("wreck", -0.5, 0.7),
    ("wrong", -0.5, 0.9),
    ("yay", 0.7, 0.8),
];

/// Degree modifiers: multiplier applied to the next lexicon word
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.3),
    ("totally", 1.4),
    ("very", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.6),
    ("little", 0.7),
];

fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .binary_search_by(|(entry, _, _)| entry.cmp(&word))
        .ok()
        .map(|i| (LEXICON[i].1, LEXICON[i].2))
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(entry, _)| *entry == word)
        .map(|(_, factor)| *factor)
}

/// Stateless polarity/subjectivity analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternAnalyzer;

impl PatternAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// `polarity` in [-1, 1]; `secondary` is subjectivity in [0, 1]
    pub fn analyze(&self, text: &str) -> SentimentSignal {
        let tokens = tokenize(text);
        let mut assessments: Vec<(f64, f64)> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some((mut polarity, mut subjectivity)) = lookup(token) else {
                continue;
            };

            if let Some(factor) = i.checked_sub(1).and_then(|j| intensity(&tokens[j])) {
                polarity = (polarity * factor).clamp(-1.0, 1.0);
                subjectivity = (subjectivity * factor).clamp(0.0, 1.0);
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| is_negation(t)) {
                polarity *= NEGATION_FACTOR;
            }

            assessments.push((polarity, subjectivity));
        }

        if assessments.is_empty() {
            let mut signal = SentimentSignal::neutral();
            signal.details.insert("assessments".to_string(), 0.0);
            return signal;
        }

        let count = assessments.len() as f64;
        let polarity = (assessments.iter().map(|(p, _)| p).sum::<f64>() / count).clamp(-1.0, 1.0);
        let subjectivity =
            (assessments.iter().map(|(_, s)| s).sum::<f64>() / count).clamp(0.0, 1.0);

        let details = BTreeMap::from([
            ("polarity".to_string(), round3(polarity)),
            ("subjectivity".to_string(), round3(subjectivity)),
            ("assessments".to_string(), count),
        ]);

        SentimentSignal {
            polarity,
            secondary: subjectivity,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_sorted_for_binary_search() {
        assert!(LEXICON.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_positive_text() {
        let signal = PatternAnalyzer::new().analyze("What a wonderful day");
        assert_eq!(signal.polarity, 1.0);
        assert_eq!(signal.secondary, 1.0);
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let signal = PatternAnalyzer::new().analyze("the table has four legs");
        assert_eq!(signal.polarity, 0.0);
        assert_eq!(signal.secondary, 0.0);
        assert_eq!(signal.details["assessments"], 0.0);
    }

    #[test]
    fn test_negation_flips_and_halves() {
        let signal = PatternAnalyzer::new().analyze("this is not good");
        assert!((signal.polarity - -0.35).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales() {
        let plain = PatternAnalyzer::new().analyze("sad");
        let strong = PatternAnalyzer::new().analyze("very sad");
        assert!(strong.polarity < plain.polarity);
        assert!((strong.polarity - -0.65).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_text_averages() {
        let signal = PatternAnalyzer::new().analyze("good food, terrible service");
        assert!((signal.polarity - -0.15).abs() < 1e-9);
        assert!((signal.secondary - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_everyday_emotion_words() {
        let analyzer = PatternAnalyzer::new();
        assert!(analyzer.analyze("thrilled and grateful").polarity > 0.5);
        assert!(analyzer.analyze("devastated and heartbroken").polarity < -0.5);
        assert!(analyzer.analyze("a disaster, I am furious").polarity < -0.5);
        assert!(analyzer.analyze("I am not furious").polarity > 0.0);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(PatternAnalyzer::new().analyze("").polarity, 0.0);
    }
}
