//! # View Capabilities
//!
//! A view method can advertise optional platform functionalities (for example
//! `"multi_device"`) it supports. Tagging is done with the [`supports`]
//! decorator, which can be stacked; every application adds its names to the
//! view's tag set.
//!
//! ```
//! use blockkit::mixins::views::{supports, ViewMethod};
//!
//! fn student_view(_block: &(), _context: &serde_json::Value) -> String {
//!     String::from("<p>hello</p>")
//! }
//!
//! let view = supports("functionality1")
//!     .decorate(supports("functionality2").decorate(ViewMethod::<()>::new("student_view", student_view)));
//! assert!(view.is_tagged("functionality1"));
//! assert!(view.is_tagged("functionality2"));
//! assert!(!view.is_tagged("bogus_functionality"));
//! ```
//!
//! Components answer capability questions through [`Views::has_support`]. The
//! default consults the tags; implementors may replace it with any policy, and
//! [`Views::supported_views`] goes through the same method so the replacement
//! applies to every view.

use std::collections::BTreeSet;

use serde_json::Value;

/// Renders a view of `B` for a context.
pub type ViewHandler<B> = fn(&B, &Value) -> String;

/// A named view together with the functionalities it advertises.
#[derive(Debug, Clone)]
pub struct ViewMethod<B> {
    name: String,
    handler: ViewHandler<B>,
    functionalities: BTreeSet<String>,
}

impl<B> ViewMethod<B> {
    /// An untagged view.
    pub fn new(name: impl Into<String>, handler: ViewHandler<B>) -> Self {
        Self {
            name: name.into(),
            handler,
            functionalities: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn functionalities(&self) -> impl Iterator<Item = &str> {
        self.functionalities.iter().map(String::as_str)
    }

    /// Whether `functionality` was attached with [`supports`].
    pub fn is_tagged(&self, functionality: &str) -> bool {
        self.functionalities.contains(functionality)
    }

    pub fn call(&self, block: &B, context: &Value) -> String {
        (self.handler)(block, context)
    }
}

/// Decorator attaching functionality names to a [`ViewMethod`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Supports {
    functionalities: Vec<String>,
}

impl Supports {
    /// Union this decorator's names into the view's tag set.
    pub fn decorate<B>(self, mut view: ViewMethod<B>) -> ViewMethod<B> {
        view.functionalities.extend(self.functionalities);
        view
    }
}

/// Tag a view as supporting `functionality`.
pub fn supports(functionality: impl Into<String>) -> Supports {
    Supports {
        functionalities: vec![functionality.into()],
    }
}

/// Tag a view with several functionalities at once.
pub fn supports_all<I, S>(functionalities: I) -> Supports
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Supports {
        functionalities: functionalities.into_iter().map(Into::into).collect(),
    }
}

/// The views of one component type, addressed by name.
#[derive(Debug, Clone)]
pub struct ViewTable<B> {
    views: Vec<ViewMethod<B>>,
}

impl<B> Default for ViewTable<B> {
    fn default() -> Self {
        Self { views: Vec::new() }
    }
}

impl<B> ViewTable<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a view, replacing any earlier view of the same name.
    pub fn with(mut self, view: ViewMethod<B>) -> Self {
        match self.views.iter_mut().find(|v| v.name == view.name) {
            Some(slot) => *slot = view,
            None => self.views.push(view),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ViewMethod<B>> {
        self.views.iter().find(|view| view.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.views.iter().map(|view| view.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewMethod<B>> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

pub trait Views: Sized {
    fn views(&self) -> &ViewTable<Self>;

    /// Look up a view by name; `None` when the component has no such view.
    fn view(&self, name: &str) -> Option<&ViewMethod<Self>> {
        self.views().get(name)
    }

    /// Whether `view` supports `functionality`.
    ///
    /// The default is true only for an existing view tagged with `functionality`.
    fn has_support(&self, view: Option<&ViewMethod<Self>>, functionality: &str) -> bool {
        view.is_some_and(|view| view.is_tagged(functionality))
    }

    /// Names of the views for which [`has_support`](Views::has_support) holds.
    fn supported_views(&self, functionality: &str) -> Vec<&str> {
        self.views()
            .iter()
            .filter(|view| self.has_support(Some(*view), functionality))
            .map(|view| view.name())
            .collect()
    }

    /// Render a view by name.
    fn render(&self, name: &str, context: &Value) -> Option<String> {
        self.view(name).map(|view| view.call(self, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use serde_json::json;

    struct SupportsDecoratorTester;

    fn empty_view(_block: &SupportsDecoratorTester, _context: &Value) -> String {
        String::new()
    }

    static TESTER_VIEWS: Lazy<ViewTable<SupportsDecoratorTester>> = Lazy::new(|| {
        ViewTable::new()
            .with(supports("a_functionality").decorate(ViewMethod::new(
                "functionality_supported_view",
                empty_view,
            )))
            .with(supports("functionality1").decorate(
                supports("functionality2")
                    .decorate(ViewMethod::new("multi_featured_view", empty_view)),
            ))
            .with(ViewMethod::new("an_unsupported_view", empty_view))
    });

    impl Views for SupportsDecoratorTester {
        fn views(&self) -> &ViewTable<Self> {
            &TESTER_VIEWS
        }
    }

    #[test]
    fn stacked_decorators_accumulate() {
        let view = supports("b").decorate(supports("a").decorate(ViewMethod::new(
            "v",
            empty_view,
        )));
        assert_eq!(view.functionalities().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn repeated_tag_is_kept_once() {
        let view = supports("a").decorate(supports("a").decorate(ViewMethod::new("v", empty_view)));
        assert_eq!(view.functionalities().count(), 1);
    }

    #[test]
    fn supports_all_attaches_every_name() {
        let view = supports_all(["x", "y"]).decorate(ViewMethod::new("v", empty_view));
        assert!(view.is_tagged("x"));
        assert!(view.is_tagged("y"));
        assert!(!view.is_tagged("z"));
    }

    #[test]
    fn has_support_reads_tags() {
        let block = SupportsDecoratorTester;
        let cases = [
            ("functionality_supported_view", "a_functionality", true),
            ("functionality_supported_view", "bogus_functionality", false),
            ("an_unsupported_view", "a_functionality", false),
            ("multi_featured_view", "functionality1", true),
            ("multi_featured_view", "functionality2", true),
            ("multi_featured_view", "bogus_functionality", false),
        ];
        for (view_name, functionality, expected) in cases {
            assert_eq!(
                block.has_support(block.view(view_name), functionality),
                expected,
                "{} / {}",
                view_name,
                functionality
            );
        }
    }

    #[test]
    fn missing_view_has_no_support() {
        let block = SupportsDecoratorTester;
        assert!(!block.has_support(block.view("no_such_view"), "a_functionality"));
    }

    #[test]
    fn supported_views_lists_tagged_views() {
        let block = SupportsDecoratorTester;
        assert_eq!(
            block.supported_views("functionality2"),
            vec!["multi_featured_view"]
        );
        assert!(block.supported_views("bogus_functionality").is_empty());
    }

    #[test]
    fn later_view_replaces_same_name() {
        let table = ViewTable::new()
            .with(supports("a").decorate(ViewMethod::new("v", empty_view)))
            .with(ViewMethod::new("v", empty_view));
        assert_eq!(table.len(), 1);
        assert!(!table.get("v").unwrap().is_tagged("a"));
    }

    #[test]
    fn render_calls_handler() {
        struct Greeter {
            views: ViewTable<Greeter>,
        }

        impl Views for Greeter {
            fn views(&self) -> &ViewTable<Self> {
                &self.views
            }
        }

        fn greet(_block: &Greeter, context: &Value) -> String {
            format!("hello {}", context["name"].as_str().unwrap_or("anyone"))
        }

        let greeter = Greeter {
            views: ViewTable::new().with(ViewMethod::new("student_view", greet)),
        };
        assert_eq!(
            greeter.render("student_view", &json!({"name": "ada"})),
            Some("hello ada".to_string())
        );
        assert_eq!(greeter.render("author_view", &json!({})), None);
    }
}
