//! The emotion category table.
//!
//! A `Lexicon` holds one `Category` per emotion: the Korean display label,
//! the supportive message shown after classification, the artwork asset key,
//! and the ordered keyword list the classifier matches against. The table is
//! validated once at construction and never mutated afterwards; a malformed
//! table is a configuration error and fails fast before any classification
//! can happen.

use crate::constants::{ASSET_EXTENSION, ASSET_PREFIX, CATEGORY_COUNT};
use crate::emotion::Emotion;
use crate::errors::LexiconError;

/// One entry of the emotion category table.
#[derive(Debug, Clone)]
pub struct Category {
    /// The emotion this entry describes.
    pub emotion: Emotion,
    /// Korean display label (슬픔, 기쁨, ...).
    pub label: String,
    /// Supportive message shown to the user after classification.
    pub description: String,
    /// Key of the artwork asset a front-end renders for this category.
    pub asset: String,
    /// Substrings that, if found in the diary text, indicate this category.
    pub keywords: Vec<String>,
}

impl Category {
    fn new(emotion: Emotion, description: &str, keywords: &[&str]) -> Self {
        Category {
            emotion,
            label: emotion.label().to_string(),
            description: description.to_string(),
            asset: format!("{}{}{}", ASSET_PREFIX, emotion.label(), ASSET_EXTENSION),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The validated, immutable category table.
///
/// Categories are stored in priority order: when a text matches keywords from
/// more than one category, the classifier returns the earliest one. The
/// built-in table orders them sad, happy, angry, anxious, surprised.
///
/// # Examples
///
/// ```
/// use maum::{Emotion, Lexicon};
///
/// let lexicon = Lexicon::builtin();
/// assert_eq!(lexicon.categories().len(), 5);
/// assert_eq!(lexicon.category(Emotion::Happy).label, "기쁨");
/// ```
#[derive(Debug, Clone)]
pub struct Lexicon {
    categories: Vec<Category>,
    // position of each emotion in `categories`, indexed by id - 1
    index: [usize; CATEGORY_COUNT],
}

impl Lexicon {
    /// Builds a lexicon from a category table, validating it.
    ///
    /// The supplied order is the classifier's priority order.
    ///
    /// # Errors
    ///
    /// Returns a `LexiconError` if the table does not define exactly one
    /// entry per emotion, if a category has no keywords, or if a category
    /// lists the same keyword twice. Keywords duplicated across categories
    /// are allowed; priority order resolves them.
    pub fn new(categories: Vec<Category>) -> Result<Self, LexiconError> {
        if categories.len() != CATEGORY_COUNT {
            return Err(LexiconError::WrongCategoryCount {
                expected: CATEGORY_COUNT,
                found: categories.len(),
            });
        }

        let mut index = [usize::MAX; CATEGORY_COUNT];
        for (position, category) in categories.iter().enumerate() {
            let slot = (category.emotion.id() - 1) as usize;
            if index[slot] != usize::MAX {
                return Err(LexiconError::DuplicateCategory(category.emotion));
            }
            index[slot] = position;

            if category.keywords.is_empty() {
                return Err(LexiconError::EmptyKeywords(category.emotion));
            }
            for (i, keyword) in category.keywords.iter().enumerate() {
                if category.keywords[..i].contains(keyword) {
                    return Err(LexiconError::DuplicateKeyword(
                        category.emotion,
                        keyword.clone(),
                    ));
                }
            }
        }

        // exactly CATEGORY_COUNT entries with no duplicate emotion means
        // every slot is filled at this point
        Ok(Lexicon { categories, index })
    }

    /// The built-in category table of the diary application.
    ///
    /// Keyword lists, descriptions, and asset keys are carried over verbatim
    /// from the original product data. Note the matching quirk this data
    /// inherits: single-syllable keywords like 화 match any text containing
    /// that syllable (화요일 included), because matching is plain substring
    /// containment.
    pub fn builtin() -> Self {
        let categories = vec![
            Category::new(
                Emotion::Sad,
                "뭔가 슬픈 일이 있으셨나 보네요.\n너무 좌절하지 말고, 금방 에너지를 회복할 수 있을 거에요.",
                &["슬", "슬픔", "슬픈 날", "슬픈", "우울", "아쉽", "이런"],
            ),
            Category::new(
                Emotion::Happy,
                "오늘은 기쁜 하루였군요!.\n오늘의 긍정적인 에너지를 잃지 않길 바래요.",
                &["기쁨", "좋", "행복", "뿌듯", "보람", "친구", "만남", "설렘"],
            ),
            Category::new(
                Emotion::Angry,
                "잘 안 풀리는 일이 있었나요?\n금방 털어낸 뒤, 다시 활력을 되찾길 바래요.",
                &["분노", "화", "나쁜", "억울", "짜증", "애매"],
            ),
            Category::new(
                Emotion::Anxious,
                "컨디션이 좋지 않은 상황인가요?\n조금 휴식을 취한 뒤, 평안을 되찾을 수 있도록 해보세요.",
                &["떨린", "두렵", "기다", "불안", "오들", "두근", "무서운", "무서"],
            ),
            Category::new(
                Emotion::Surprised,
                "놀라운 일이 있었군요!\n새로운 일이 닥치더라도, 즐겁게 받아들일 수 있길 바래요.",
                &["놀람", "깜짝", "황급", "화들짝", "어이쿠"],
            ),
        ];

        let mut index = [0usize; CATEGORY_COUNT];
        for (position, category) in categories.iter().enumerate() {
            index[(category.emotion.id() - 1) as usize] = position;
        }
        Lexicon { categories, index }
    }

    /// The categories in priority order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up the table entry for an emotion.
    ///
    /// Total: construction guarantees every emotion has exactly one entry.
    pub fn category(&self, emotion: Emotion) -> &Category {
        &self.categories[self.index[(emotion.id() - 1) as usize]]
    }
}
