//! Site generation - config to rendered pages on disk

use anyhow::{anyhow, Context, Result};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, SiteConfig, SourceKind};
use crate::content::{ContentSource, FileContentSource, HttpContentSource, NullContentSource};
use crate::layouts::{CapitalMarketsHub, LayoutKind};
use crate::model::Company;
use crate::render::html::esc;
use crate::theme::{StyleTokens, Theme};

/// Sites rendered in parallel during a batch run.
const BATCH_CONCURRENCY: usize = 4;

/// Stylesheet shipped with every page; colors and fonts come from the
/// custom properties the layout defines on `:root`.
const BASE_STYLES: &str = "\
*{box-sizing:border-box}\
body{margin:0;font-family:var(--primary-font),sans-serif}\
a{color:var(--accent-color)}\
section{margin:48px 0}\
.ir-header-inner{max-width:1100px;margin:0 auto;padding:16px 24px;display:flex;align-items:center;justify-content:space-between;gap:16px;flex-wrap:wrap}\
.ir-brand{display:flex;align-items:center;gap:16px}\
.ir-logo{height:48px}\
.ir-company-name{margin:0;font-size:1.5rem}\
.ir-ticker-badge{font-size:0.875rem;padding:4px 8px;border-radius:4px}\
.ir-nav ul{display:flex;align-items:center;gap:24px;list-style:none;margin:0;padding:0}\
.ir-nav a{text-decoration:none}\
.ir-nav a:hover{text-decoration:underline}\
.ir-main{max-width:1100px;margin:0 auto;padding:0 24px 48px}\
.ir-section-title{font-family:var(--secondary-font),serif;font-size:1.75rem;margin:0 0 24px}\
.ir-hero{text-align:center;padding:48px 0}\
.ir-thesis{font-size:2rem;margin:0 0 32px;font-weight:600}\
.ir-headline-metrics{display:flex;justify-content:center;gap:48px;flex-wrap:wrap}\
.ir-headline-metric{display:flex;flex-direction:column}\
.ir-metric-value{font-size:2.25rem;font-weight:700}\
.ir-metric-label{opacity:0.7}\
.ir-kpi-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:24px}\
.ir-kpi{border:1px solid var(--accent-color);border-radius:8px;padding:24px;display:flex;flex-direction:column;gap:8px}\
.ir-kpi-value{font-size:1.75rem;font-weight:700}\
.ir-kpi-period{opacity:0.7;font-size:0.875rem}\
.trend-up .ir-kpi-change{color:#34D399}\
.trend-down .ir-kpi-change{color:#F87171}\
.ir-holding-grid,.ir-leader-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:24px}\
.ir-holding,.ir-leader{border:1px solid rgba(128,128,128,0.35);border-radius:8px;padding:24px}\
.ir-holding-sector{font-size:0.8rem;opacity:0.7;text-transform:uppercase;letter-spacing:0.08em}\
.ir-leader-photo{width:96px;height:96px;border-radius:50%;object-fit:cover;margin-bottom:16px}\
.ir-leader-title{opacity:0.7}\
.ir-analyst-table{width:100%;border-collapse:collapse}\
.ir-analyst-table th,.ir-analyst-table td{text-align:left;padding:12px;border-bottom:1px solid rgba(128,128,128,0.35)}\
.ir-rating{padding:2px 8px;border-radius:4px;border:1px solid var(--accent-color);white-space:nowrap}\
.ir-research-list,.ir-press-list,.ir-contact-rows{list-style:none;margin:0;padding:0}\
.ir-research-post,.ir-press-release{padding:16px 0;border-bottom:1px solid rgba(128,128,128,0.35)}\
time{opacity:0.7;font-size:0.875rem}\
.ir-contact-row{display:flex;gap:16px;padding:8px 0}\
.ir-contact-label{min-width:140px;opacity:0.7}\
.ir-empty{opacity:0.6;font-style:italic}";

/// Knobs a single run applies on top of the global config.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub out_dir: PathBuf,
    pub no_cms: bool,
    pub theme_override: Option<String>,
}

impl RenderOptions {
    pub fn new(config: &Config) -> Self {
        Self {
            out_dir: config.output.dir.clone(),
            no_cms: false,
            theme_override: None,
        }
    }
}

#[derive(Debug)]
pub struct RenderedPage {
    pub slug: String,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct SiteFailure {
    pub config: PathBuf,
    pub error: anyhow::Error,
}

/// Outcome of a batch run; one site's failure never aborts the others.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub pages: Vec<RenderedPage>,
    pub failures: Vec<SiteFailure>,
}

impl RenderReport {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render one site and write `out_dir/{slug}/index.html`.
    pub async fn render_site(
        &self,
        site: &SiteConfig,
        options: &RenderOptions,
    ) -> Result<RenderedPage> {
        let theme = self.resolve_theme(site, options.theme_override.as_deref())?;
        let layout = self.resolve_layout(site)?;
        let source = self.build_source(site)?;
        let use_cms = site.content.use_cms && !options.no_cms;

        let markup = match layout {
            LayoutKind::CapitalMarketsHub => {
                CapitalMarketsHub::new(source, use_cms)
                    .render(&site.company, Some(&site.template), theme.as_ref())
                    .await?
            }
        };
        let document = document(&site.company, &markup);

        let slug = site_slug(site);
        let page_dir = options.out_dir.join(&slug);
        tokio::fs::create_dir_all(&page_dir)
            .await
            .with_context(|| format!("Failed to create {}", page_dir.display()))?;

        let path = page_dir.join("index.html");
        tokio::fs::write(&path, document)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("rendered {} -> {}", site.company.name, path.display());
        Ok(RenderedPage { slug, path })
    }

    /// Load a site config from disk and render it.
    pub async fn render_path(
        &self,
        config_path: &Path,
        options: &RenderOptions,
    ) -> Result<RenderedPage> {
        let site = SiteConfig::load(config_path)?;
        self.render_site(&site, options).await
    }

    /// Render every site config matching the glob pattern.
    pub async fn render_many(&self, pattern: &str, options: &RenderOptions) -> Result<RenderReport> {
        let paths: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("Invalid site glob '{pattern}'"))?
            .collect::<std::result::Result<_, _>>()?;

        if paths.is_empty() {
            anyhow::bail!("No site configs match '{pattern}'");
        }

        let results: Vec<(PathBuf, Result<RenderedPage>)> = stream::iter(paths)
            .map(|path| async move {
                let result = self.render_path(&path, options).await;
                (path, result)
            })
            .buffer_unordered(BATCH_CONCURRENCY)
            .collect()
            .await;

        let mut report = RenderReport::default();
        for (path, result) in results {
            match result {
                Ok(page) => report.pages.push(page),
                Err(error) => {
                    tracing::warn!("failed to render {}: {:#}", path.display(), error);
                    report.failures.push(SiteFailure { config: path, error });
                }
            }
        }
        Ok(report)
    }

    /// Print how a site would render without writing anything.
    pub fn check_site(&self, config_path: &Path, theme_override: Option<&str>) -> Result<()> {
        let site = SiteConfig::load(config_path)?;
        let layout = self.resolve_layout(&site)?;
        let theme = self.resolve_theme(&site, theme_override)?;
        let tokens = StyleTokens::resolve(theme.as_ref(), &site.company);
        let slug = site_slug(&site);

        println!("{}", site.company.name);
        println!("{}", "-".repeat(40));
        println!("{:<20} {}", "slug", slug);
        println!("{:<20} {}", "layout", layout.name());
        println!(
            "{:<20} {}",
            "theme",
            theme
                .as_ref()
                .and_then(|t| t.name.as_deref())
                .unwrap_or("(defaults)")
        );
        println!("{:<20} {}", "content source", site.content.source.label());
        for (name, value) in tokens.css_variables() {
            println!("{:<20} {}", name, value);
        }
        Ok(())
    }

    fn resolve_theme(
        &self,
        site: &SiteConfig,
        cli_override: Option<&str>,
    ) -> Result<Option<Theme>> {
        let selected = cli_override
            .map(str::to_string)
            .or_else(|| site.theme.clone())
            .or_else(|| self.config.general.default_theme.clone());
        selected.as_deref().map(Theme::load).transpose()
    }

    fn resolve_layout(&self, site: &SiteConfig) -> Result<LayoutKind> {
        let name = site
            .template
            .layout
            .as_deref()
            .unwrap_or(&self.config.general.default_layout);
        LayoutKind::from_name(name).ok_or_else(|| {
            let known: Vec<&str> = LayoutKind::ALL.iter().map(|k| k.name()).collect();
            anyhow!("Unknown layout '{}' (known: {})", name, known.join(", "))
        })
    }

    fn build_source(&self, site: &SiteConfig) -> Result<Arc<dyn ContentSource>> {
        match site.content.source {
            SourceKind::Cms => {
                let base_url = self.config.cms.base_url.as_deref().ok_or_else(|| {
                    anyhow!("Site wants CMS content but [cms] base_url is not configured")
                })?;
                let token = self
                    .config
                    .cms
                    .token_env
                    .as_deref()
                    .and_then(|name| std::env::var(name).ok());
                let timeout = Duration::from_secs(self.config.cms.timeout_secs);
                Ok(Arc::new(HttpContentSource::new(base_url, token, timeout)?))
            }
            SourceKind::File => {
                let path = site.content.file.as_ref().ok_or_else(|| {
                    anyhow!("content.source = \"file\" requires a content.file path")
                })?;
                Ok(Arc::new(FileContentSource::new(path)))
            }
            SourceKind::None => Ok(Arc::new(NullContentSource)),
        }
    }
}

/// Directory name for a site: the configured slug, else one derived from
/// the company name.
fn site_slug(site: &SiteConfig) -> String {
    site.output
        .slug
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| site.company.tenant_slug())
}

/// Wrap layout markup in the document shell.
fn document(company: &Company, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | Investor Relations</title>\n<style>{}</style>\n</head>\n\
         <body>\n{}\n</body>\n</html>\n",
        esc(&company.name),
        BASE_STYLES,
        body
    )
}
