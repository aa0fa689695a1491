//! HTML adapter for the declarative view description.

use super::TodoListView;
use crate::todo::ports::{ViewSurface, ViewSurfaceError, ViewSurfaceResult};
use minijinja::Environment;

/// Default list template.
///
/// Mirrors the recognised slots of the host page fragment: an item container
/// carrying `checked` styling when completed, the description text, the lock
/// control, and the close control.
pub const DEFAULT_TEMPLATE: &str = "\
<ul id=\"todo-list\">
{%- for row in rows %}
  <li class=\"item{% if row.completed %} checked{% endif %}\" data-index=\"{{ row.index }}\">
    <span class=\"description\">{{ row.description | e }}</span>
    <span class=\"lock\"><span class=\"material-icons md\">{{ row.lock_icon }}</span></span>
    <span class=\"close\">&times;</span>
  </li>
{%- endfor %}
</ul>
";

/// Renders a [`TodoListView`] into an HTML fragment.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    template: String,
}

impl HtmlRenderer {
    /// Creates a renderer using [`DEFAULT_TEMPLATE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_owned(),
        }
    }

    /// Creates a renderer using a custom template source.
    ///
    /// The template receives the view's `rows` in render context.
    #[must_use]
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Renders the full list.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSurfaceError::Render`] when the template fails to
    /// render.
    pub fn render(&self, view: &TodoListView) -> ViewSurfaceResult<String> {
        let environment = Environment::new();
        environment
            .render_str(&self.template, view)
            .map_err(|error| ViewSurfaceError::Render {
                reason: error.to_string(),
            })
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// View surface that keeps the latest rendered HTML fragment.
///
/// Each application replaces the previous fragment wholesale, matching the
/// full-redraw contract.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    renderer: HtmlRenderer,
    html: String,
}

impl HtmlSurface {
    /// Creates a surface with the default renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surface with a custom renderer.
    #[must_use]
    pub fn with_renderer(renderer: HtmlRenderer) -> Self {
        Self {
            renderer,
            html: String::new(),
        }
    }

    /// Returns the most recently rendered fragment.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl ViewSurface for HtmlSurface {
    fn apply(&mut self, view: &TodoListView) -> ViewSurfaceResult<()> {
        self.html = self.renderer.render(view)?;
        Ok(())
    }
}
