use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// Integer that may arrive either as a JSON number or as a numeric string
/// (`2` and `"2"` are both accepted; web forms tend to send the latter).
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientInt {
    Number(i64),
    Text(String),
}

impl LenientInt {
    fn into_i32<E: serde::de::Error>(self) -> Result<i32, E> {
        let value = match self {
            LenientInt::Number(n) => n,
            LenientInt::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("expected an integer, got {:?}", s)))?,
        };
        i32::try_from(value).map_err(|_| E::custom(format!("integer {} out of range", value)))
    }
}

pub fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    LenientInt::deserialize(deserializer)?.into_i32()
}

pub fn lenient_opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<LenientInt>::deserialize(deserializer)?
        .map(LenientInt::into_i32)
        .transpose()
}

/// Rejects strings that are empty once surrounding whitespace is removed
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}
