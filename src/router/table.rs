//! Flattened, validated route table.
//!
//! The declared tree is walked once at construction. Every node becomes a
//! [`RouteRecord`] with its absolute path, in declaration order (parents before
//! their children). Names must be unique across the whole tree and sibling
//! paths must be unique under their parent; both are checked up front so that
//! named redirects can never be ambiguous at navigation time.

use super::{Error, RouteDefinition, RouteMeta, ViewId};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::{
    cmp::Reverse,
    collections::{BTreeMap, HashMap, HashSet},
    path::Path,
};
use tracing::{debug, trace};
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// One entry of the flattened table.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    /// Absolute path, e.g. `/users` or `/users/:id`.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub component: ViewId,
    pub meta: RouteMeta,
    /// Nesting level, `0` for top-level declarations.
    pub depth: usize,
    #[serde(skip)]
    segments: Vec<Segment>,
}

impl RouteRecord {
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        self.meta.requires_auth
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }

    fn static_segments(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Static(_)))
            .count()
    }

    fn capture(&self, segments: &[String]) -> Option<BTreeMap<String, String>> {
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (pattern, value) in self.segments.iter().zip(segments) {
            match pattern {
                Segment::Static(expected) if expected == value => {}
                Segment::Static(_) => return None,
                Segment::Param(key) => {
                    params.insert(key.clone(), value.clone());
                }
            }
        }

        Some(params)
    }
}

/// A record matched against a concrete path.
#[derive(Clone, Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteRecord,
    /// Normalized path that was matched (no query, no fragment).
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl<'a> RouteMatch<'a> {
    fn exact(route: &'a RouteRecord) -> Self {
        Self {
            route,
            path: route.path.clone(),
            params: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
    names: HashMap<String, usize>,
}

impl RouteTable {
    /// Flattens and validates the declared routes.
    ///
    /// # Errors
    /// `AmbiguousRouteName` when a name is declared twice, `DuplicatePath` when
    /// two siblings share a path and `InvalidPath` for malformed segments.
    pub fn new(definitions: Vec<RouteDefinition>) -> Result<Self, Error> {
        let mut table = Self {
            records: Vec::new(),
            names: HashMap::new(),
        };
        table.register(&definitions, "/", 0)?;

        debug!(routes = table.records.len(), "route table built");

        Ok(table)
    }

    /// Builds a table from a JSON array of route declarations.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the declarations are invalid.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let definitions: Vec<RouteDefinition> = serde_json::from_str(json)?;
        Self::new(definitions)
    }

    /// Reads a JSON declaration file and builds a table from it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or its content is invalid.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn register(
        &mut self,
        definitions: &[RouteDefinition],
        parent: &str,
        depth: usize,
    ) -> Result<(), Error> {
        let mut siblings = HashSet::new();

        for definition in definitions {
            let path = join(parent, &definition.path);
            if !siblings.insert(path.clone()) {
                return Err(Error::DuplicatePath {
                    parent: parent.to_string(),
                    path,
                });
            }

            let segments = parse_segments(&path)?;

            if let Some(name) = &definition.name {
                if self
                    .names
                    .insert(name.clone(), self.records.len())
                    .is_some()
                {
                    return Err(Error::AmbiguousRouteName(name.clone()));
                }
            }

            trace!(path = %path, name = ?definition.name, depth, "registering route");

            self.records.push(RouteRecord {
                path: path.clone(),
                name: definition.name.clone(),
                component: definition.component.clone(),
                meta: definition.meta.clone(),
                depth,
                segments,
            });

            self.register(&definition.children, &path, depth + 1)?;
        }

        Ok(())
    }

    /// Matches `path` against the table. Query strings and fragments are
    /// ignored and segments are percent-decoded before matching. Static
    /// segments win over parameters, then the deepest record wins, so `/`
    /// resolves to the layout's empty-path child rather than the layout itself.
    ///
    /// # Errors
    /// `RouteNotFound` when nothing matches.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_>, Error> {
        let segments = normalize(path).ok_or_else(|| Error::RouteNotFound(path.to_string()))?;
        let normalized = format!("/{}", segments.join("/"));

        let found = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                record
                    .capture(&segments)
                    .map(|params| (index, record, params))
            })
            .max_by_key(|(index, record, _)| {
                (record.static_segments(), record.depth, Reverse(*index))
            });

        match found {
            Some((_, route, params)) => {
                trace!(path = %normalized, route = %route.path, "resolved");
                Ok(RouteMatch {
                    route,
                    path: normalized,
                    params,
                })
            }
            None => Err(Error::RouteNotFound(path.to_string())),
        }
    }

    /// Looks a record up by its name.
    ///
    /// # Errors
    /// `RouteNotFound` when no record carries `name`.
    pub fn by_name(&self, name: &str) -> Result<&RouteRecord, Error> {
        self.names
            .get(name)
            .and_then(|&index| self.records.get(index))
            .ok_or_else(|| Error::RouteNotFound(format!("route named {name}")))
    }

    /// Same as [`RouteTable::by_name`], returned as a match on the record's own path.
    ///
    /// # Errors
    /// `RouteNotFound` when no record carries `name`.
    pub fn match_name(&self, name: &str) -> Result<RouteMatch<'_>, Error> {
        self.by_name(name).map(RouteMatch::exact)
    }

    #[must_use]
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn join(parent: &str, child: &str) -> String {
    let base = if child.starts_with('/') {
        ""
    } else {
        parent.trim_end_matches('/')
    };
    let child = child.trim_matches('/');

    match (base.is_empty(), child.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{child}"),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}/{child}"),
    }
}

fn parse_segments(path: &str) -> Result<Vec<Segment>, Error> {
    let invalid = |reason| Error::InvalidPath {
        path: path.to_string(),
        reason,
    };

    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if let Some(param) = segment.strip_prefix(':') {
                if param.is_empty() {
                    return Err(invalid("empty parameter name"));
                }
                if !param.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return Err(invalid("parameter names must be alphanumeric"));
                }
                Ok(Segment::Param(param.to_string()))
            } else if segment
                .chars()
                .any(|c| matches!(c, '?' | '#' | ':') || c.is_whitespace())
            {
                Err(invalid("segments may not contain '?', '#', ':' or whitespace"))
            } else {
                Ok(Segment::Static(segment.to_string()))
            }
        })
        .collect()
}

/// Splits `path` into decoded segments. `Url` resolves dot segments and
/// strips the query and fragment but leaves the path percent-encoded, while
/// declared segments are raw text.
fn normalize(path: &str) -> Option<Vec<String>> {
    let base = Url::parse("http://localhost/").ok()?;
    let url = base.join(path).ok()?;

    url.path()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            percent_decode_str(segment)
                .decode_utf8()
                .ok()
                .map(|decoded| decoded.into_owned())
        })
        .collect()
}
