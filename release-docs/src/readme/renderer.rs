//! Template expansion using Handlebars.

use super::error::ReadmeError;
use super::substitutions::SubstitutionMap;
use handlebars::{no_escape, Handlebars, RenderErrorReason};

/// Creates a Handlebars registry suited to generating markdown files.
///
/// The registry is configured with:
/// - No HTML escaping (values are inserted verbatim)
/// - Strict mode (a placeholder without a value is an error)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);

    hbs
}

/// Expands templates with a [`SubstitutionMap`].
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Expands `template` with `substitutions`.
    ///
    /// `name` identifies the template in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ReadmeError::MissingSubstitution`] if the template references
    /// a placeholder that `substitutions` does not define, or
    /// [`ReadmeError::Render`] for any other template error.
    pub fn render(
        &self,
        name: &str,
        template: &str,
        substitutions: &SubstitutionMap,
    ) -> Result<String, ReadmeError> {
        self.handlebars
            .render_template(template, substitutions)
            .map_err(|source| {
                if let RenderErrorReason::MissingVariable(placeholder) = source.reason() {
                    return ReadmeError::MissingSubstitution {
                        template: name.to_string(),
                        placeholder: placeholder
                            .clone()
                            .unwrap_or_else(|| "<unknown>".to_string()),
                    };
                }
                ReadmeError::Render {
                    template: name.to_string(),
                    source,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_placeholders() {
        let renderer = TemplateRenderer::new();
        let mut map = SubstitutionMap::new("3.8.0");
        map.insert("log4j_version", "2.17.1");

        let result = renderer
            .render(
                "README.md.hbs",
                "implementation 'org.javacord:javacord:{{version}}'\nlog4j {{log4j_version}}\n",
                &map,
            )
            .unwrap();

        assert_eq!(
            result,
            "implementation 'org.javacord:javacord:3.8.0'\nlog4j 2.17.1\n"
        );
    }

    #[test]
    fn missing_placeholder_is_an_error() {
        let renderer = TemplateRenderer::new();
        let map = SubstitutionMap::new("3.8.0");

        let result = renderer.render("README.md.hbs", "log4j {{log4j_version}}", &map);

        assert!(matches!(
            result,
            Err(ReadmeError::MissingSubstitution { .. })
        ));
    }

    #[test]
    fn values_are_not_escaped() {
        let renderer = TemplateRenderer::new();
        let map = SubstitutionMap::new("<1.0 & up>");

        let result = renderer.render("t", "{{version}}", &map).unwrap();

        assert_eq!(result, "<1.0 & up>");
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let renderer = TemplateRenderer::new();
        let text = "# Title\n\n- item\n";

        let result = renderer
            .render("t", text, &SubstitutionMap::default())
            .unwrap();

        assert_eq!(result, text);
    }
}
