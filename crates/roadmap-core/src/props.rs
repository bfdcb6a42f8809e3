//! View props derived from a navigation's query string and path params

use crate::location::Location;
use crate::route::{RouteEntry, RouteParams};
use crate::{CoreError, CoreResult};
use serde_json::{Map, Value};

/// Props handed to a view: a JSON object.
pub type Props = Map<String, Value>;

/// How a route derives its view's props.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropsTransform {
    #[default]
    None,
    /// Decode one query parameter as a JSON object.
    QueryJson { param: String },
    /// Every query parameter as a string prop, first value wins.
    QueryParams,
    /// Captured `:name` segments as string props.
    RouteParams,
}

/// Compute the props for `entry` from the navigation target.
///
/// A missing (or empty) JSON parameter yields an empty mapping. A present but
/// malformed one is a [`CoreError::Parse`]; the router decides how that
/// degrades.
pub fn compute_props(
    entry: &RouteEntry,
    location: &Location,
    params: &RouteParams,
) -> CoreResult<Props> {
    match entry.props_transform() {
        PropsTransform::None => Ok(Props::new()),
        PropsTransform::QueryJson { param } => match location.query(param) {
            Some(raw) if !raw.is_empty() => decode_json_object(param, raw),
            _ => Ok(Props::new()),
        },
        PropsTransform::QueryParams => {
            let mut props = Props::new();
            for (key, value) in location.query_pairs() {
                props
                    .entry(key.clone())
                    .or_insert_with(|| Value::String(value.clone()));
            }
            Ok(props)
        }
        PropsTransform::RouteParams => Ok(params
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect()),
    }
}

/// Decode `raw` as a JSON object. Valid JSON of any other kind is rejected.
pub fn decode_json_object(param: &str, raw: &str) -> CoreResult<Props> {
    let parse_error = |message: String| CoreError::Parse {
        param: param.to_string(),
        message,
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(parse_error(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(parse_error(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{app_routes, names};
    use serde_json::json;

    fn roadmap_props(href: &str) -> CoreResult<Props> {
        let table = app_routes().unwrap();
        let location = Location::parse(href).unwrap();
        let matched = table.resolve(location.path()).unwrap();
        assert_eq!(matched.entry.name(), names::ROADMAP);
        compute_props(matched.entry, &location, &matched.params)
    }

    #[test]
    fn test_user_input_decoded() {
        let props = roadmap_props("/roadmap?userInput=%7B%22a%22%3A1%7D").unwrap();
        assert_eq!(Value::Object(props), json!({ "a": 1 }));
    }

    #[test]
    fn test_missing_user_input_is_empty() {
        assert!(roadmap_props("/roadmap").unwrap().is_empty());
        assert!(roadmap_props("/roadmap?other=1").unwrap().is_empty());
        assert!(roadmap_props("/roadmap?userInput=").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_user_input_is_parse_error() {
        match roadmap_props("/roadmap?userInput=not-json") {
            Err(CoreError::Parse { param, .. }) => assert_eq!(param, "userInput"),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_json_rejected() {
        let err = decode_json_object("userInput", "[1,2]").unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_query_and_route_params() {
        let entry = RouteEntry::new("/scans/:id", "scan")
            .unwrap()
            .props(PropsTransform::RouteParams);
        let mut params = RouteParams::new();
        params.insert("id".to_string(), "7".to_string());
        let location = Location::parse("/scans/7").unwrap();
        let props = compute_props(&entry, &location, &params).unwrap();
        assert_eq!(props.get("id"), Some(&json!("7")));

        let entry = RouteEntry::new("/search", "search")
            .unwrap()
            .props(PropsTransform::QueryParams);
        let location = Location::parse("/search?q=robotics&q=ignored&page=2").unwrap();
        let props = compute_props(&entry, &location, &RouteParams::new()).unwrap();
        assert_eq!(props.get("q"), Some(&json!("robotics")));
        assert_eq!(props.get("page"), Some(&json!("2")));
    }
}
