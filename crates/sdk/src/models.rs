//! Feedbin resources.
//!
//! Each resource wraps the JSON object Feedbin returned, exactly as it was
//! received: absent fields stay absent, `null` stays `null`, and fields not
//! listed here are kept. Typed accessors read the commonly used fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! resource {
    ($(#[$meta:meta])* $name:ident { $($field:ident: $kind:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Map<String, Value>);

        impl $name {
            pub fn id(&self) -> Option<u64> {
                self.0.get("id").and_then(Value::as_u64)
            }

            $(
                pub fn $field(&self) -> resource!(@ty $kind) {
                    resource!(@get $kind, self.0.get(stringify!($field)))
                }
            )*

            /// Any field by name, including ones without an accessor.
            pub fn get(&self, key: &str) -> Option<&Value> {
                self.0.get(key)
            }

            pub fn as_object(&self) -> &Map<String, Value> {
                &self.0
            }

            pub fn into_inner(self) -> Map<String, Value> {
                self.0
            }
        }

        impl From<Map<String, Value>> for $name {
            fn from(object: Map<String, Value>) -> Self {
                Self(object)
            }
        }
    };
    (@ty id) => { Option<u64> };
    (@ty text) => { Option<&str> };
    (@get id, $value:expr) => { $value.and_then(Value::as_u64) };
    (@get text, $value:expr) => { $value.and_then(Value::as_str) };
}

resource!(
    /// A feed the account is subscribed to.
    Subscription {
        feed_id: id,
        title: text,
        feed_url: text,
        site_url: text,
        created_at: text,
    }
);

resource!(
    /// A content source.
    Feed {
        title: text,
        feed_url: text,
        site_url: text,
    }
);

resource!(
    /// A single article belonging to a feed.
    Entry {
        feed_id: id,
        title: text,
        author: text,
        summary: text,
        content: text,
        url: text,
        published: text,
        created_at: text,
    }
);

resource!(Tag { name: text });

resource!(
    /// Association between a tag name and a feed.
    Tagging {
        feed_id: id,
        name: text,
    }
);
