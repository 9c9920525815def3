//! Parameter resolution against the request mapping.
//!
//! [`resolve`] turns one [`ParameterDefinition`] plus a [`Request`] into a
//! typed [`Value`], or reports why it could not. It is a pure function of its
//! inputs: lookup (honoring the request-key alias), default substitution,
//! then strict type coercion.

use crate::catalog::ParameterDefinition;
use crate::error::{ResolveError, ResolveResult};
use crate::request::Request;
use crate::types::{DataType, Value};

/// Resolve one parameter definition against the request.
///
/// The default (when defined) is a raw string substituted *before* coercion,
/// so defaults go through exactly the same parse as supplied values.
pub fn resolve(definition: &ParameterDefinition, request: &Request) -> ResolveResult<Value> {
    let key = definition.lookup_key();
    let raw = match request.get(key) {
        Some(value) => value,
        None => match definition.default {
            Some(default) => default,
            None => {
                return Err(ResolveError::MissingParameter {
                    key: key.to_string(),
                });
            }
        },
    };
    coerce(key, definition.data_type, raw)
}

fn coerce(key: &str, data_type: DataType, raw: &str) -> ResolveResult<Value> {
    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(raw.to_owned())),
        DataType::Int64 => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|_| invalid(key, data_type, raw)),
        DataType::Float64 => raw
            .trim()
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|_| invalid(key, data_type, raw)),
    }
}

fn invalid(key: &str, expected: DataType, raw: &str) -> ResolveError {
    ResolveError::InvalidParameterType {
        key: key.to_owned(),
        expected,
        raw: raw.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::catalog::ParameterDefinition;
    use crate::error::ResolveError;
    use crate::request::Request;
    use crate::types::{DataType, Value};

    fn required(key: &'static str, data_type: DataType) -> ParameterDefinition {
        ParameterDefinition {
            key,
            data_type,
            default: None,
            request_key: None,
        }
    }

    #[test]
    fn string_values_pass_through_untrimmed() {
        let def = required("filter_pattern", DataType::Utf8);
        let req = Request::from_pairs([("filter_pattern", " home ")]);
        assert_eq!(
            resolve(&def, &req),
            Ok(Value::Utf8(" home ".to_string()))
        );
    }

    #[test]
    fn numeric_values_parse_strictly_after_trimming() {
        let int = required("filter_limit", DataType::Int64);
        let req = Request::from_pairs([("filter_limit", " 25 ")]);
        assert_eq!(resolve(&int, &req), Ok(Value::Int64(25)));

        let float = required("filter_excludelowpop_value", DataType::Float64);
        let req = Request::from_pairs([("filter_excludelowpop_value", "1.5")]);
        assert_eq!(resolve(&float, &req), Ok(Value::Float64(1.5)));
    }

    #[test]
    fn missing_value_without_default_fails() {
        let def = required("filter_sort_column", DataType::Utf8);
        assert_eq!(
            resolve(&def, &Request::new()),
            Err(ResolveError::MissingParameter {
                key: "filter_sort_column".to_string()
            })
        );
    }

    #[test]
    fn missing_value_with_default_is_substituted_then_coerced() {
        let def = ParameterDefinition {
            default: Some("0"),
            ..required("filter_offset", DataType::Int64)
        };
        assert_eq!(resolve(&def, &Request::new()), Ok(Value::Int64(0)));
    }

    #[test]
    fn unparseable_numeric_reports_invalid_type() {
        let def = required("filter_truncate", DataType::Int64);
        let req = Request::from_pairs([("filter_truncate", "abc")]);
        assert_eq!(
            resolve(&def, &req),
            Err(ResolveError::InvalidParameterType {
                key: "filter_truncate".to_string(),
                expected: DataType::Int64,
                raw: "abc".to_string(),
            })
        );

        // A float literal is not a valid integer under strict parsing.
        let req = Request::from_pairs([("filter_truncate", "3.5")]);
        assert!(resolve(&def, &req).is_err());
    }

    #[test]
    fn alias_overrides_the_lookup_key() {
        let def = ParameterDefinition {
            request_key: Some("limit"),
            ..required("filter_limit", DataType::Int64)
        };
        let req = Request::from_pairs([("limit", "7")]);
        assert_eq!(resolve(&def, &req), Ok(Value::Int64(7)));

        // The parameter's own key is no longer consulted once aliased.
        let req = Request::from_pairs([("filter_limit", "7")]);
        assert!(resolve(&def, &req).is_err());
    }

    #[test]
    fn a_supplied_value_beats_the_default() {
        let def = ParameterDefinition {
            default: Some("desc"),
            ..required("filter_sort_order", DataType::Utf8)
        };
        let req = Request::from_pairs([("filter_sort_order", "asc")]);
        assert_eq!(resolve(&def, &req), Ok(Value::Utf8("asc".to_string())));
    }
}
