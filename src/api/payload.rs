// ============================================================================
// API Payloads
// JSON request bodies and their conversion into solver requests
// ============================================================================

use crate::domain::{Component, MixError, MixMode, MixRequest, MixResult};
use crate::numeric::Rational;
use serde::{Deserialize, Serialize};

/// A numeric field sent either as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumericInput {
    /// Parse into an exact rational; `field` names the value in errors.
    pub fn to_rational(&self, field: &str) -> MixResult<Rational> {
        let text = match self {
            NumericInput::Number(number) => number.to_string(),
            NumericInput::Text(text) => text.clone(),
        };

        text.parse::<Rational>().map_err(|_| {
            MixError::validation(format!("{} must be a number, got '{}'", field, text.trim()))
        })
    }
}

fn required(value: Option<&NumericInput>, field: &str) -> MixResult<Rational> {
    value
        .ok_or_else(|| MixError::validation(format!("missing field '{}'", field)))?
        .to_rational(field)
}

/// Body of `POST /api/mix/simple`
#[derive(Debug, Clone, Deserialize)]
pub struct SimpleMixPayload {
    pub a1: Option<NumericInput>,
    pub a2: Option<NumericInput>,
    #[serde(alias = "desired_intensity")]
    pub m: Option<NumericInput>,
    #[serde(rename = "S", alias = "total_amount")]
    pub s: Option<NumericInput>,
}

impl SimpleMixPayload {
    pub fn into_request(self) -> MixResult<MixRequest> {
        MixRequest::simple(
            required(self.a1.as_ref(), "a1")?,
            required(self.a2.as_ref(), "a2")?,
            required(self.m.as_ref(), "m")?,
            required(self.s.as_ref(), "S")?,
        )
    }
}

/// One entry of `components` in `POST /api/mix/complex`
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "a")]
    pub intensity: Option<NumericInput>,
    #[serde(default)]
    pub priority: Option<i64>,
}

impl ComponentPayload {
    fn into_component(self, index: usize) -> MixResult<Component> {
        let field = format!("components[{}].intensity", index);
        let intensity = required(self.intensity.as_ref(), &field)?;

        let priority = match self.priority {
            None => None,
            Some(p) => Some(u32::try_from(p).ok().filter(|p| *p > 0).ok_or_else(|| {
                MixError::validation(format!(
                    "priority of component {} must be a positive integer, got {}",
                    index + 1,
                    p
                ))
            })?),
        };

        Ok(Component {
            name: self
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| Component::default_name(index)),
            intensity,
            priority,
        })
    }
}

/// Body of `POST /api/mix/complex`
#[derive(Debug, Clone, Deserialize)]
pub struct ComplexMixPayload {
    pub components: Option<Vec<ComponentPayload>>,
    #[serde(alias = "S")]
    pub total_amount: Option<NumericInput>,
    #[serde(alias = "m")]
    pub desired_intensity: Option<NumericInput>,
    #[serde(default)]
    pub mix_type: Option<String>,
}

impl ComplexMixPayload {
    /// Convert into a request; `default_mode` applies when `mix_type` is absent.
    pub fn into_request(self, default_mode: MixMode) -> MixResult<MixRequest> {
        let mode = match self.mix_type.as_deref() {
            Some(text) => text.parse::<MixMode>()?,
            None => default_mode,
        };

        let components = self
            .components
            .ok_or_else(|| MixError::validation("missing field 'components'"))?
            .into_iter()
            .enumerate()
            .map(|(index, payload)| payload.into_component(index))
            .collect::<MixResult<Vec<_>>>()?;

        MixRequest::complex(
            components,
            required(self.desired_intensity.as_ref(), "desired_intensity")?,
            required(self.total_amount.as_ref(), "total_amount")?,
            mode,
        )
    }
}

/// Failure body: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /test`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Rational {
        Rational::from_integer(v)
    }

    #[test]
    fn test_numeric_input_forms() {
        let number: NumericInput = serde_json::from_str("85").unwrap();
        let text: NumericInput = serde_json::from_str("\" 85 \"").unwrap();
        let comma: NumericInput = serde_json::from_str("\"0,5\"").unwrap();
        let float: NumericInput = serde_json::from_str("0.1").unwrap();

        assert_eq!(number.to_rational("m").unwrap(), int(85));
        assert_eq!(text.to_rational("m").unwrap(), int(85));
        assert_eq!(comma.to_rational("m").unwrap(), Rational::new(1, 2).unwrap());
        assert_eq!(float.to_rational("m").unwrap(), Rational::new(1, 10).unwrap());
    }

    #[test]
    fn test_non_numeric_text() {
        let text: NumericInput = serde_json::from_str("\"abc\"").unwrap();
        let err = text.to_rational("a1").unwrap_err();
        assert_eq!(err.to_string(), "invalid input: a1 must be a number, got 'abc'");
    }

    #[test]
    fn test_simple_payload() {
        let payload: SimpleMixPayload =
            serde_json::from_str(r#"{"a1": 70, "a2": "95", "m": 85, "S": 230}"#).unwrap();
        match payload.into_request().unwrap() {
            MixRequest::Simple { first, second, target } => {
                assert_eq!(first.intensity, int(70));
                assert_eq!(second.intensity, int(95));
                assert_eq!(target.total_amount, int(230));
            },
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_simple_payload_missing_field() {
        let payload: SimpleMixPayload =
            serde_json::from_str(r#"{"a1": 70, "a2": 95, "m": 85}"#).unwrap();
        let err = payload.into_request().unwrap_err();
        assert!(err.to_string().contains("'S'"));
    }

    #[test]
    fn test_complex_payload_legacy_aliases() {
        let body = r#"{
            "components": [{"a": 70, "x": 0}, {"a": 80, "x": 0}, {"a": 96, "x": 0}],
            "m": 85,
            "S": 230
        }"#;
        let payload: ComplexMixPayload = serde_json::from_str(body).unwrap();
        let request = payload.into_request(MixMode::Standard).unwrap();

        match request {
            MixRequest::Complex { components, target, mode } => {
                assert_eq!(components.len(), 3);
                assert_eq!(components[2].name, "Component 3");
                assert_eq!(components[2].intensity, int(96));
                assert_eq!(target.desired_intensity, int(85));
                assert_eq!(mode, MixMode::Standard);
            },
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_complex_payload_mix_type() {
        let body = r#"{
            "components": [
                {"name": "Low", "intensity": 10, "priority": 1},
                {"name": "", "intensity": 50, "priority": 2},
                {"intensity": 90}
            ],
            "desired_intensity": 40,
            "total_amount": 100,
            "mix_type": "Priority"
        }"#;
        let payload: ComplexMixPayload = serde_json::from_str(body).unwrap();
        match payload.into_request(MixMode::Standard).unwrap() {
            MixRequest::Complex { components, mode, .. } => {
                assert_eq!(mode, MixMode::Priority);
                assert_eq!(components[0].priority, Some(1));
                assert_eq!(components[1].name, "Component 2");
                assert_eq!(components[2].priority, None);
            },
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn test_complex_payload_bad_priority() {
        let body = r#"{
            "components": [{"a": 10, "priority": -1}, {"a": 50}, {"a": 90}],
            "m": 40, "S": 100
        }"#;
        let payload: ComplexMixPayload = serde_json::from_str(body).unwrap();
        let err = payload.into_request(MixMode::Priority).unwrap_err();
        assert!(matches!(err, MixError::Validation { .. }));
    }

    #[test]
    fn test_complex_payload_unknown_mode() {
        let body = r#"{"components": [{"a": 1}, {"a": 2}, {"a": 3}], "m": 2, "S": 1, "mix_type": "random"}"#;
        let payload: ComplexMixPayload = serde_json::from_str(body).unwrap();
        assert!(payload.into_request(MixMode::Standard).is_err());
    }
}
