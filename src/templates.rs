use tera::Tera;

use crate::error::AppError;

/// The greeting served at `/`.
pub const GREETING: &str = "Hello, DevOps World!";

/// Name under which the home page template is registered
pub const HOME_TEMPLATE: &str = "home.html";

const HOME_TEMPLATE_SOURCE: &str = include_str!("../templates/home.html");

/// Initialize the Tera template engine.
///
/// Templates are compiled into the binary so rendering does not depend on the
/// working directory the server was started from.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(HOME_TEMPLATE, HOME_TEMPLATE_SOURCE)?;
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;

    fn render_home(ui: &UiConfig) -> String {
        let tera = init_templates().unwrap();
        let mut context = tera::Context::new();
        context.insert("config", ui);
        context.insert("greeting", GREETING);
        tera.render(HOME_TEMPLATE, &context).unwrap()
    }

    #[test]
    fn test_home_template_registered() {
        let tera = init_templates().unwrap();
        assert!(tera.get_template_names().any(|name| name == HOME_TEMPLATE));
    }

    #[test]
    fn test_greeting_survives_autoescape() {
        let html = render_home(&UiConfig::default());
        assert!(html.contains("Hello, DevOps World!"));
    }

    #[test]
    fn test_site_name_is_escaped() {
        let ui = UiConfig {
            site_name: "<script>".to_string(),
            ..UiConfig::default()
        };
        let html = render_home(&ui);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
