use serde::{Deserialize, Deserializer};

// the add-question form posts numbers either as JSON numbers or as the raw
// text of an <input>, and an untouched input arrives as ""
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(i64),
    Text(String),
}

impl NumberOrText {
    pub fn is_blank(&self) -> bool {
        matches!(self, NumberOrText::Text(text) if text.is_empty())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumberOrText::Number(n) => Some(*n),
            NumberOrText::Text(text) => text.trim().parse().ok(),
        }
    }
}

// ?page=abc is served as if no page was given
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.trim().parse().ok()))
}
