#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::{RouteKey, SavedPosition};

#[cfg(feature = "std")]
pub(crate) type PositionMap = HashMap<RouteKey, SavedPosition>;
#[cfg(not(feature = "std"))]
pub(crate) type PositionMap = BTreeMap<RouteKey, SavedPosition>;
