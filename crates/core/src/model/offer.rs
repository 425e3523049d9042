use serde::Deserialize;

/// An externally sourced record identified by a publisher id.
///
/// The feed delivers arbitrary JSON objects; only `pubid` and `title` are
/// read, everything else is ignored. A missing `pubid` deserializes as the
/// empty string so one sparse entry does not fail the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub pubid: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl Offer {
    #[must_use]
    pub fn new(pubid: impl Into<String>) -> Self {
        Self {
            pubid: pubid.into(),
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(pubid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            pubid: pubid.into(),
            title: Some(title.into()),
        }
    }
}
