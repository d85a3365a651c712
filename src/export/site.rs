//! Index page generation for the exported site.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;

/// Default template for the site index page.
pub const DEFAULT_INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ site_title }}</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <header>
        <h1>{{ site_title }}</h1>
    </header>
    <main>
        {% if notebooks %}
        <section class="listing" aria-label="Notebooks">
            <h2>Notebooks</h2>
            <ul>
            {% for notebook in notebooks %}
                <li><a href="{{ notebook.href }}">{{ notebook.name }}</a></li>
            {% endfor %}
            </ul>
        </section>
        {% endif %}
        {% if apps %}
        <section class="listing" aria-label="Apps">
            <h2>Apps</h2>
            <ul>
            {% for app in apps %}
                <li><a href="{{ app.href }}">{{ app.name }}</a></li>
            {% endfor %}
            </ul>
        </section>
        {% endif %}
    </main>
    <footer>
        <p>Built with <a href="https://marimo.io">marimo</a></p>
    </footer>
</body>
</html>"##;

/// Default stylesheet written next to the index page.
pub const DEFAULT_STYLE_CSS: &str = r#"
body {
    font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 2rem;
    color: #333;
}
h1 { border-bottom: 1px solid #eee; padding-bottom: 0.5rem; }
h2 { margin-top: 1.5em; margin-bottom: 0.5em; }
a { color: #0066cc; text-decoration: none; }
a:hover { text-decoration: underline; }
.listing ul { list-style: none; padding-left: 0; }
.listing li { padding: 0.3rem 0; }
footer { margin-top: 3rem; color: #666; font-size: 0.9em; }
"#;

/// One entry in the index listing.
#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    /// Display name derived from the source file stem.
    pub name: String,
    /// Href of the exported bundle, relative to the index page.
    pub href: String,
}

/// Configuration for index generation.
pub struct IndexConfig<'a> {
    /// Title shown on the index page.
    pub site_title: &'a str,
    /// Custom template file replacing the built-in one.
    pub template_path: Option<&'a Path>,
}

impl Default for IndexConfig<'_> {
    fn default() -> Self {
        Self {
            site_title: "Notebooks",
            template_path: None,
        }
    }
}

/// Renders the index page for the given entries.
pub fn render_index(
    notebooks: &[IndexEntry],
    apps: &[IndexEntry],
    config: &IndexConfig,
) -> Result<String> {
    let template_str = match config.template_path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read template: {}", p.display()))?,
        None => DEFAULT_INDEX_TEMPLATE.to_string(),
    };

    let mut env = Environment::new();
    env.add_template("index", &template_str)?;
    let tmpl = env.get_template("index")?;

    let notebooks_json: Vec<_> = notebooks
        .iter()
        .map(|e| {
            serde_json::json!({
                "name": e.name,
                "href": e.href
            })
        })
        .collect();

    let apps_json: Vec<_> = apps
        .iter()
        .map(|e| {
            serde_json::json!({
                "name": e.name,
                "href": e.href
            })
        })
        .collect();

    let html = tmpl.render(context! {
        site_title => config.site_title,
        notebooks => notebooks_json,
        apps => apps_json,
    })?;

    Ok(html)
}

/// Renders the index page and writes `index.html` plus `style.css` into
/// the output directory. Returns the path of the written index.
pub fn write_index(
    output_dir: &Path,
    notebooks: &[IndexEntry],
    apps: &[IndexEntry],
    config: &IndexConfig,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let html = render_index(notebooks, apps, config)?;

    let index_path = output_dir.join("index.html");
    std::fs::write(&index_path, html)
        .with_context(|| format!("failed to write {}", index_path.display()))?;
    std::fs::write(output_dir.join("style.css"), DEFAULT_STYLE_CSS)
        .with_context(|| "failed to write style.css")?;

    Ok(index_path)
}
