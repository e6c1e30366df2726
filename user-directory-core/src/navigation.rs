//! Routes and form mode

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical destination of the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/user/{id}`
    Detail(u64),
    /// `/user/create`
    Create,
    /// `/user/{id}/edit`
    Edit(u64),
}

impl Route {
    /// Resolve a path. Anything unrecognised, including non-integer ids,
    /// redirects to [`Route::List`].
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            ["user", "create"] => Self::Create,
            ["user", id] => id.parse().map_or(Self::List, Self::Detail),
            ["user", id, "edit"] => id.parse().map_or(Self::List, Self::Edit),
            _ => Self::List,
        }
    }

    /// Canonical path.
    pub fn path(self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Detail(id) => format!("/user/{id}"),
            Self::Create => "/user/create".to_string(),
            Self::Edit(id) => format!("/user/{id}/edit"),
        }
    }

    /// Record addressed by the route, if any.
    pub fn record_id(self) -> Option<u64> {
        match self {
            Self::Detail(id) | Self::Edit(id) => Some(id),
            Self::List | Self::Create => None,
        }
    }

    /// Whether the route shows the record form.
    pub fn is_form(self) -> bool {
        matches!(self, Self::Create | Self::Edit(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FormMode {
    #[default]
    Create,
    Edit(u64),
}

impl FormMode {
    /// Edit when the route supplied an id, create otherwise.
    pub fn from_route_id(id: Option<u64>) -> Self {
        id.map_or(Self::Create, Self::Edit)
    }

    pub fn record_id(self) -> Option<u64> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// Route the form is shown at.
    pub fn route(self) -> Route {
        match self {
            Self::Create => Route::Create,
            Self::Edit(id) => Route::Edit(id),
        }
    }
}

impl From<Route> for Option<FormMode> {
    fn from(route: Route) -> Self {
        match route {
            Route::Create => Some(FormMode::Create),
            Route::Edit(id) => Some(FormMode::Edit(id)),
            Route::List | Route::Detail(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::List);
        assert_eq!(Route::parse("/user/3"), Route::Detail(3));
        assert_eq!(Route::parse("/user/3/edit"), Route::Edit(3));
        assert_eq!(Route::parse("/user/create"), Route::Create);
    }

    #[test]
    fn create_wins_over_id_route() {
        assert_ne!(Route::parse("/user/create"), Route::List);
        assert_eq!(Route::parse("/user/create/"), Route::Create);
    }

    #[test]
    fn unknown_paths_redirect_to_list() {
        for path in [
            "",
            "/users",
            "/user",
            "/user/abc",
            "/user/-1",
            "/user/1.5/edit",
            "/user/3/delete",
            "/user/create/edit",
            "user/3",
        ] {
            assert_eq!(Route::parse(path), Route::List, "{path}");
        }
    }

    #[test]
    fn path_roundtrips_through_parse() {
        for route in [Route::List, Route::Detail(7), Route::Create, Route::Edit(7)] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn form_mode_from_route_id() {
        assert_eq!(FormMode::from_route_id(None), FormMode::Create);
        assert_eq!(FormMode::from_route_id(Some(4)), FormMode::Edit(4));
        assert_eq!(FormMode::Edit(4).route(), Route::Edit(4));
        assert_eq!(Option::<FormMode>::from(Route::Detail(4)), None);
    }
}
