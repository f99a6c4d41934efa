/*
[INPUT]:  Conduit method names and their pagination styles
[OUTPUT]: Immutable method table the client validates calls against
[POS]:    HTTP layer - capability descriptor for the API surface
[UPDATE]: When the tracker gains or changes callable methods
*/

use std::collections::HashMap;

/// Pagination style of a Conduit method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStyle {
    /// Modern `*.search` endpoints driven by an opaque `after` cursor
    Cursor,
    /// Legacy endpoints driven by a numeric `offset` token
    Offset,
    /// Single-shot methods without pagination
    None,
}

/// Descriptor of one callable Conduit method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: &'static str,
    pub page_style: PageStyle,
}

/// The set of Conduit methods a client may invoke.
///
/// Built once and handed to the client constructor; calls against methods
/// missing from the table fail before any network I/O is attempted.
#[derive(Debug, Clone)]
pub struct Capabilities {
    methods: HashMap<&'static str, MethodSpec>,
}

impl Capabilities {
    /// The method set this adapter is written against.
    ///
    /// `project.column.search` is listed explicitly; older interface
    /// catalogues shipped without it.
    pub fn standard() -> Self {
        Self::from_specs([
            MethodSpec {
                name: "maniphest.search",
                page_style: PageStyle::Cursor,
            },
            MethodSpec {
                name: "project.search",
                page_style: PageStyle::Cursor,
            },
            MethodSpec {
                name: "project.column.search",
                page_style: PageStyle::Cursor,
            },
            MethodSpec {
                name: "maniphest.query",
                page_style: PageStyle::Offset,
            },
            MethodSpec {
                name: "maniphest.querystatuses",
                page_style: PageStyle::None,
            },
            MethodSpec {
                name: "maniphest.gettasktransactions",
                page_style: PageStyle::None,
            },
            MethodSpec {
                name: "maniphest.edit",
                page_style: PageStyle::None,
            },
        ])
    }

    fn from_specs(specs: impl IntoIterator<Item = MethodSpec>) -> Self {
        Self {
            methods: specs
                .into_iter()
                .map(|spec| (spec.name, spec))
                .collect(),
        }
    }

    /// Extend the table with one more method, consuming self
    pub fn with_method(mut self, spec: MethodSpec) -> Self {
        self.methods.insert(spec.name, spec);
        self
    }

    /// Look up the descriptor for a method name
    pub fn spec(&self, method: &str) -> Option<&MethodSpec> {
        self.methods.get(method)
    }
}
