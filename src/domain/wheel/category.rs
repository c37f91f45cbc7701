//! Life categories rated by the wizard.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// One life-domain dimension being rated (e.g. "Health").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CategoryFields")]
pub struct Category {
    label: String,
    subtitle: String,
}

#[derive(Deserialize)]
struct CategoryFields {
    label: String,
    #[serde(default)]
    subtitle: String,
}

impl TryFrom<CategoryFields> for Category {
    type Error = ValidationError;

    fn try_from(fields: CategoryFields) -> Result<Self, Self::Error> {
        Category::new(fields.label, fields.subtitle)
    }
}

impl Category {
    /// Creates a category, rejecting a blank label.
    pub fn new(label: impl Into<String>, subtitle: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(Self {
            label,
            subtitle: subtitle.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }
}

/// Ordered, non-empty, session-fixed sequence of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Creates a set from explicit categories.
    pub fn new(categories: Vec<Category>) -> Result<Self, ValidationError> {
        if categories.is_empty() {
            return Err(ValidationError::empty_field("categories"));
        }
        Ok(Self { categories })
    }

    /// Creates a set from caller-supplied names with no prompt text.
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = names
            .into_iter()
            .map(|name| Category::new(name, ""))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    /// The eight canonical Wheel of Life categories.
    pub fn canonical() -> Self {
        let categories = CANONICAL
            .iter()
            .map(|(label, subtitle)| Category {
                label: (*label).to_string(),
                subtitle: (*subtitle).to_string(),
            })
            .collect();
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Labels in category order.
    pub fn labels(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.label.clone()).collect()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::canonical()
    }
}

const CANONICAL: [(&str, &str); 8] = [
    (
        "Work & career",
        "To what extent are you satisfied with your job? Is it the job you had in mind, \
         or would you prefer to pursue a different career? Does your work bring you happiness \
         and fulfillment? Do you earn enough to cover your living expenses? And so on.",
    ),
    (
        "Finances",
        "Is your income sufficient to meet all your basic and other needs? Are you free from \
         reliance on loans? Are you debt-free? Is money the only thing that makes you happy? \
         And so on.",
    ),
    (
        "Health",
        "How physically and mentally healthy are you? How do you feel? Are you satisfied with \
         your appearance and weight? Do you struggle with physical discomfort? To what extent \
         are you engaged in exercise and sport? And so on.",
    ),
    (
        "Family & friends",
        "Are your family and/or friends supportive, unconditional, and trustworthy? Can you \
         rely on your friendships and always turn to them? To what extent do you spend leisure \
         time with family and/or friends? And so on.",
    ),
    (
        "Love & romance",
        "Have you found happiness in love? Do you have a new partner or a steady partner you \
         can rely on? And so on.",
    ),
    (
        "Personal growth & development",
        "How do you approach personal growth? Are you open to new experiences and willing to \
         learn? Are you connected to both your inner and outer worlds? And so on.",
    ),
    (
        "Relaxation & fun",
        "Do you enjoy life? Do you pursue hobbies or take part in sports? How do you spend \
         your free time, and do you do the things you like? And so on.",
    ),
    (
        "Social contribution",
        "Do you help others? Do you do volunteer work or provide informal care (caregiving)? \
         To what extent are you active in (sports) clubs, in your neighborhood, or in \
         supporting family?",
    ),
];
