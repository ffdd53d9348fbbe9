use alloc::borrow::ToOwned;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;

/// Identifies a route for the purpose of storing scroll positions.
///
/// Matrix parameters are not part of the key: everything from the first `;` on is dropped, so
/// `/users;page=2` and `/users;page=3` share one entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RouteKey(String);

impl RouteKey {
    /// Builds a key from a raw router URL.
    pub fn from_url(url: &str) -> Self {
        let base = url.split(';').next().unwrap_or_default();
        Self(base.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for RouteKey {
    fn from(url: &str) -> Self {
        Self::from_url(url)
    }
}

impl Borrow<str> for RouteKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationKind {
    Start,
    End,
    Cancel,
    Error,
}

/// A router lifecycle event, as delivered by the host's navigation stream.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationEvent {
    /// A navigation was triggered.
    Start { url: String },
    /// A navigation completed. `url_after_redirects` is the final URL, when the router knows it.
    End {
        url: String,
        url_after_redirects: Option<String>,
    },
    Cancel { url: String },
    Error { url: String },
}

impl NavigationEvent {
    pub fn start(url: impl Into<String>) -> Self {
        Self::Start { url: url.into() }
    }

    pub fn end(url: impl Into<String>) -> Self {
        Self::End {
            url: url.into(),
            url_after_redirects: None,
        }
    }

    pub fn end_redirected(url: impl Into<String>, url_after_redirects: impl Into<String>) -> Self {
        Self::End {
            url: url.into(),
            url_after_redirects: Some(url_after_redirects.into()),
        }
    }

    pub fn kind(&self) -> NavigationKind {
        match self {
            Self::Start { .. } => NavigationKind::Start,
            Self::End { .. } => NavigationKind::End,
            Self::Cancel { .. } => NavigationKind::Cancel,
            Self::Error { .. } => NavigationKind::Error,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start { .. })
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Self::End { .. })
    }

    /// The URL a route key is derived from, or `None` for kinds that carry no route.
    ///
    /// For `End`, a non-empty post-redirect URL wins over the requested one.
    pub fn route_url(&self) -> Option<&str> {
        match self {
            Self::Start { url } => Some(url),
            Self::End {
                url,
                url_after_redirects,
            } => Some(
                url_after_redirects
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .unwrap_or(url),
            ),
            Self::Cancel { .. } | Self::Error { .. } => None,
        }
    }
}

/// The scroll offset of one element, saved when its route was left.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedPosition {
    /// Identifier of the element the offset belongs to (`None` for anonymous elements).
    pub element_id: Option<String>,
    pub position: u64,
}

impl SavedPosition {
    pub fn new(element_id: Option<&str>, position: u64) -> Self {
        Self {
            element_id: element_id.map(ToOwned::to_owned),
            position,
        }
    }

    /// Exact identifier equality; two anonymous elements match each other.
    pub fn belongs_to(&self, element_id: Option<&str>) -> bool {
        self.element_id.as_deref() == element_id
    }
}

/// Handle of a repeating timer started through an [`crate::IntervalTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerId(pub u64);
