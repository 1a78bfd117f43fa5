// Argument decoding shared by the Feedbin tools

use crate::tools::{ToolError, ToolResult};
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 50;

/// Decode tool arguments. A missing or `null` argument object counts as `{}`.
pub fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> ToolResult<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments)
        .map_err(|e| ToolError::InvalidArgument(format!("Invalid arguments for {}: {}", tool, e)))
}

/// Ids arrive as JSON numbers, but some clients quote them.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(u64),
    Text(String),
}

impl IdRepr {
    fn into_id(self) -> Result<u64, String> {
        match self {
            Self::Number(id) => Ok(id),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| format!("'{}' is not a valid id", text)),
        }
    }
}

pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    IdRepr::deserialize(deserializer)?
        .into_id()
        .map_err(D::Error::custom)
}

pub fn optional_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Option::<IdRepr>::deserialize(deserializer)?
        .map(IdRepr::into_id)
        .transpose()
        .map_err(D::Error::custom)
}

pub fn id_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u64>, D::Error> {
    Vec::<IdRepr>::deserialize(deserializer)?
        .into_iter()
        .map(IdRepr::into_id)
        .collect::<Result<_, _>>()
        .map_err(D::Error::custom)
}

/// Id filter given either as an array or as a comma-separated string.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdFilterRepr {
    List(Vec<IdRepr>),
    Joined(String),
}

pub fn id_filter<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u64>, D::Error> {
    let ids = match IdFilterRepr::deserialize(deserializer)? {
        IdFilterRepr::List(ids) => ids,
        IdFilterRepr::Joined(joined) => joined
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(|part| IdRepr::Text(part.to_string()))
            .collect(),
    };
    ids.into_iter()
        .map(IdRepr::into_id)
        .collect::<Result<_, _>>()
        .map_err(D::Error::custom)
}

/// Page numbers below 1 become 1; larger values pass through untouched.
pub fn clamp_page(page: i64) -> u64 {
    page.max(1) as u64
}

/// Page sizes are kept within what Feedbin serves.
pub fn clamp_per_page(per_page: i64) -> u32 {
    per_page.clamp(1, feedbin_sdk::api::MAX_PER_PAGE as i64) as u32
}

/// Non-empty list of entry ids for the bulk state tools.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryIdsArgs {
    #[serde(deserialize_with = "id_list")]
    pub entry_ids: Vec<u64>,
}

impl EntryIdsArgs {
    pub fn parse(tool: &str, arguments: Value) -> ToolResult<Self> {
        let args: Self = parse_args(tool, arguments)?;
        if args.entry_ids.is_empty() {
            return Err(ToolError::InvalidArgument(format!(
                "{} requires at least one entry id",
                tool
            )));
        }
        Ok(args)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageArgs {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

pub fn default_page() -> i64 {
    DEFAULT_PAGE
}

pub fn default_per_page() -> i64 {
    DEFAULT_PER_PAGE
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoArgs {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_accept_numbers_and_numeric_strings() {
        let args = EntryIdsArgs::parse("t", json!({"entry_ids": [1, "2", " 3 "]})).unwrap();
        assert_eq!(args.entry_ids, vec![1, 2, 3]);
    }

    #[derive(Debug, Deserialize)]
    struct Filter {
        #[serde(default, deserialize_with = "id_filter")]
        ids: Vec<u64>,
    }

    #[test]
    fn test_id_filter_accepts_array_or_joined_string() {
        let filter: Filter = serde_json::from_value(json!({"ids": [1, "2"]})).unwrap();
        assert_eq!(filter.ids, vec![1, 2]);

        let filter: Filter = serde_json::from_value(json!({"ids": "1, 2,3"})).unwrap();
        assert_eq!(filter.ids, vec![1, 2, 3]);

        let filter: Filter = serde_json::from_value(json!({"ids": ""})).unwrap();
        assert!(filter.ids.is_empty());

        assert!(serde_json::from_value::<Filter>(json!({"ids": "1,x"})).is_err());
    }

    #[test]
    fn test_bad_ids_rejected() {
        for bad in [json!({"entry_ids": ["x"]}), json!({"entry_ids": [-1]}), json!({"entry_ids": 5})] {
            assert!(matches!(
                EntryIdsArgs::parse("t", bad),
                Err(ToolError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_empty_and_missing_ids_rejected() {
        assert!(matches!(
            EntryIdsArgs::parse("t", json!({"entry_ids": []})),
            Err(ToolError::InvalidArgument(_))
        ));
        assert!(matches!(
            EntryIdsArgs::parse("t", Value::Null),
            Err(ToolError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_page_defaults_and_unknown_fields() {
        let args: PageArgs = parse_args("t", Value::Null).unwrap();
        assert_eq!((args.page, args.per_page), (1, 50));

        let err = parse_args::<PageArgs>("t", json!({"pages": 2})).unwrap_err();
        assert!(err.to_string().contains("pages"));
    }

    #[test]
    fn test_clamping() {
        assert_eq!(clamp_page(-4), 1);
        assert_eq!(clamp_page(0), 1);
        assert_eq!(clamp_page(250), 250);
        assert_eq!(clamp_page(5_000_000_000), 5_000_000_000);
        assert_eq!(clamp_per_page(0), 1);
        assert_eq!(clamp_per_page(1000), 100);
        assert_eq!(clamp_per_page(10), 10);
    }

    #[test]
    fn test_no_args_accepts_empty_object_only() {
        assert!(parse_args::<NoArgs>("t", json!({})).is_ok());
        assert!(parse_args::<NoArgs>("t", Value::Null).is_ok());
        assert!(parse_args::<NoArgs>("t", json!({"x": 1})).is_err());
    }
}
