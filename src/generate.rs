//! HTML site generation.
//!
//! Takes the article store, the case-study records and the resolved config
//! and writes the final static site.
//!
//! ## Generated Pages
//!
//! - **Insights index** (`/insights/index.html`): featured articles, category list, all articles
//! - **Category pages** (`/insights/category/{slug}/index.html`): articles of one category
//! - **Article pages** (`/insights/{slug}/index.html`): TL;DR box and rendered body
//! - **Case-study index** (`/case-studies/index.html`): one card per record
//! - **Case studies** (`/case-studies/{id}/index.html`): the configured default layout
//! - **Case-study layouts** (`/case-studies/{id}/{layout}.html`): every layout of every record
//! - **Layout showcase** (`/case-study-alternatives/{layout}.html`): layout switcher with pros and use cases
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── insights/
//! │   ├── index.html
//! │   ├── category/getting-started/index.html
//! │   └── how-to-pick-your-first-ai-workflow/index.html
//! ├── case-studies/
//! │   ├── index.html
//! │   └── workflow-automation-financial-services/
//! │       ├── index.html
//! │       ├── hero.html
//! │       └── ...
//! ├── case-study-alternatives/
//! │   ├── index.html
//! │   ├── hero.html
//! │   └── ...
//! ├── assets/...                 # Copied from content/assets/
//! └── site-manifest.json         # Every generated page
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/case-study.js`: Card hover/expand handling for the interactive layout
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All record text is interpolated, so it is escaped automatically.

use crate::articles::{Article, ArticleStore, Category};
use crate::case_study::view::{CallToAction, Disclosure, Node, Section, View};
use crate::case_study::{self, CaseStudy, Layout, ShowcaseState, ViewState};
use crate::config::{self, SiteConfig};
use crate::render::{self, Block, Span};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Article not found: {0}")]
    ArticleNotFound(String),
    #[error("Case study not found: {0}")]
    CaseStudyNotFound(String),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/case-study.js");

/// Everything the generator renders.
#[derive(Debug, Clone, Copy)]
pub struct Content<'a> {
    pub articles: &'a ArticleStore,
    pub case_studies: &'a [CaseStudy],
}

impl Content<'static> {
    /// The datasets compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            articles: ArticleStore::bundled(),
            case_studies: case_study::bundled(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    InsightsIndex,
    Category,
    Article,
    CaseStudyIndex,
    CaseStudy,
    Showcase,
}

/// One generated HTML file.
#[derive(Debug, Clone, Serialize)]
pub struct PageEntry {
    pub kind: PageKind,
    pub title: String,
    /// Path relative to the output directory.
    pub path: String,
}

/// What a build wrote, in generation order.
#[derive(Debug, Default, Serialize)]
pub struct SiteReport {
    pub pages: Vec<PageEntry>,
    pub assets_copied: usize,
}

impl SiteReport {
    pub fn count(&self, kind: PageKind) -> usize {
        self.pages.iter().filter(|p| p.kind == kind).count()
    }
}

#[derive(Serialize)]
struct SiteManifest<'a> {
    site: &'a str,
    base_url: &'a str,
    pages: &'a [PageEntry],
}

pub fn generate(
    config: &SiteConfig,
    content: Content<'_>,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<SiteReport, GenerateError> {
    let showcase_record = content
        .case_studies
        .iter()
        .find(|r| r.id == config.case_studies.showcase)
        .ok_or_else(|| GenerateError::CaseStudyNotFound(config.case_studies.showcase.clone()))?;

    // Generate CSS with colors from config
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;
    let mut report = SiteReport::default();
    let mut write = |kind: PageKind, title: &str, path: String, page: Markup| {
        write_page(output_dir, &path, page)?;
        tracing::debug!(%path, "wrote page");
        report.pages.push(PageEntry {
            kind,
            title: title.to_string(),
            path,
        });
        Ok::<(), GenerateError>(())
    };

    let articles = content.articles;
    write(
        PageKind::InsightsIndex,
        &config.site.name,
        "insights/index.html".into(),
        render_insights_index(config, articles, &css),
    )?;

    for category in articles.categories() {
        write(
            PageKind::Category,
            category.label(),
            format!("insights/category/{}/index.html", category.slug()),
            render_category_page(config, articles, category, &css),
        )?;
    }

    for article in articles.all() {
        write(
            PageKind::Article,
            &article.title,
            format!("insights/{}/index.html", article.slug),
            render_article_page(config, article, &css),
        )?;
    }

    write(
        PageKind::CaseStudyIndex,
        "Case Studies",
        "case-studies/index.html".into(),
        render_case_study_index(config, content.case_studies, &css),
    )?;

    let state = ViewState::default();
    for record in content.case_studies {
        let default_layout = config.case_studies.default_layout;
        write(
            PageKind::CaseStudy,
            &record.title,
            format!("case-studies/{}/index.html", record.id),
            render_case_study_page(config, record, default_layout, &state, &css),
        )?;
        for layout in Layout::ALL {
            write(
                PageKind::CaseStudy,
                &format!("{} ({})", record.title, layout.name()),
                format!("case-studies/{}/{}.html", record.id, layout.id()),
                render_case_study_page(config, record, layout, &state, &css),
            )?;
        }
    }

    let showcase = ShowcaseState::default();
    write(
        PageKind::Showcase,
        showcase.selected.name(),
        "case-study-alternatives/index.html".into(),
        render_showcase_page(config, showcase_record, showcase, &css),
    )?;
    for layout in Layout::ALL {
        let selected = showcase.select(layout);
        write(
            PageKind::Showcase,
            layout.name(),
            format!("case-study-alternatives/{}.html", layout.id()),
            render_showcase_page(config, showcase_record, selected, &css),
        )?;
    }

    report.assets_copied = copy_assets(&source_dir.join("assets"), output_dir)?;

    let manifest = SiteManifest {
        site: &config.site.name,
        base_url: &config.site.base_url,
        pages: &report.pages,
    };
    fs::write(
        output_dir.join("site-manifest.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    tracing::info!(
        pages = report.pages.len(),
        assets = report.assets_copied,
        output = %output_dir.display(),
        "site generated"
    );
    Ok(report)
}

/// Render one article body to an HTML fragment, without the page chrome.
pub fn render_article_fragment(store: &ArticleStore, slug: &str) -> Result<String, GenerateError> {
    let article = store
        .get_by_slug(slug)
        .ok_or_else(|| GenerateError::ArticleNotFound(slug.to_string()))?;
    Ok(render_blocks(&render::render_body(&article.body)).into_string())
}

fn write_page(output_dir: &Path, rel: &str, page: Markup) -> Result<(), GenerateError> {
    let path = output_dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, page.into_string())?;
    Ok(())
}

/// Copy `assets/` from the content directory into the output root.
///
/// Returns the number of files copied. A missing directory copies nothing.
fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    let dest_root = output_dir.join("assets");
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let dest = dest_root.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Head metadata for one page.
struct PageHead<'a> {
    title: &'a str,
    description: Option<&'a str>,
    canonical: Option<String>,
}

impl<'a> PageHead<'a> {
    fn titled(title: &'a str) -> Self {
        Self {
            title,
            description: None,
            canonical: None,
        }
    }
}

/// Renders the base HTML document structure
fn base_document(head: &PageHead<'_>, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (head.title) }
                @if let Some(description) = head.description {
                    meta name="description" content=(description);
                }
                @if let Some(canonical) = &head.canonical {
                    link rel="canonical" href=(canonical);
                }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavSection {
    Insights,
    CaseStudies,
    Showcase,
}

/// Renders the site header with brand, breadcrumb and navigation
fn site_header(config: &SiteConfig, current: NavSection, breadcrumb: Markup) -> Markup {
    html! {
        header.site-header {
            a.brand href="/insights/" { (config.site.name) }
            nav.site-nav {
                (render_nav(current))
            }
        }
        nav.breadcrumb {
            (breadcrumb)
        }
    }
}

fn render_nav(current: NavSection) -> Markup {
    let items = [
        (NavSection::Insights, "/insights/", "Insights"),
        (NavSection::CaseStudies, "/case-studies/", "Case Studies"),
        (NavSection::Showcase, "/case-study-alternatives/", "Layouts"),
    ];
    html! {
        ul {
            @for (section, href, label) in items {
                li class=[(section == current).then_some("current")] {
                    a href=(href) { (label) }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            p { (config.site.footer) }
        }
    }
}

fn canonical(config: &SiteConfig, path: &str) -> String {
    format!("{}{}", config.site.base_url, path)
}

// ============================================================================
// Article body
// ============================================================================

/// Renders a block tree as HTML.
pub fn render_blocks(blocks: &[Block]) -> Markup {
    html! {
        @for block in blocks {
            @match block {
                Block::Heading2(text) => { h2 { (text) } }
                Block::Heading3(text) => { h3 { (text) } }
                Block::UnorderedList(items) => {
                    ul { @for item in items { li { (render_spans(item)) } } }
                }
                Block::OrderedList(items) => {
                    ol { @for item in items { li { (render_spans(item)) } } }
                }
                Block::Emphasis(spans) => { p.emphasis { em { (render_spans(spans)) } } }
                Block::Separator => { hr; }
                Block::Paragraph(spans) => { p { (render_spans(spans)) } }
            }
        }
    }
}

/// Renders inline spans. Links open in a new tab.
pub fn render_spans(spans: &[Span]) -> Markup {
    html! {
        @for span in spans {
            @match span {
                Span::Text(text) => { (text) }
                Span::Bold(text) => { strong { (text) } }
                Span::Link { text, href } => {
                    a href=(href) target="_blank" rel="noopener noreferrer" { (text) }
                }
            }
        }
    }
}

// ============================================================================
// Insight pages
// ============================================================================

fn article_card(article: &Article) -> Markup {
    html! {
        a.article-card href={ "/insights/" (article.slug) "/" } {
            span.badge { (article.category) }
            h3 { (article.title) }
            p.excerpt { (article.excerpt) }
            p.meta { (article.publish_date) " · " (article.read_time) }
        }
    }
}

fn render_insights_index(config: &SiteConfig, store: &ArticleStore, css: &str) -> Markup {
    let featured = store.featured();
    let breadcrumb = html! { "Insights" };

    let content = html! {
        (site_header(config, NavSection::Insights, breadcrumb))
        main.insights-page {
            header.page-header {
                h1 { (config.site.name) }
                p.tagline { (config.site.tagline) }
            }
            @if !featured.is_empty() {
                section.featured {
                    h2 { "Featured" }
                    div.card-grid {
                        @for article in &featured { (article_card(article)) }
                    }
                }
            }
            section.categories {
                h2 { "Browse by category" }
                ul.category-list {
                    @for category in store.categories() {
                        li {
                            a href={ "/insights/category/" (category.slug()) "/" } { (category.label()) }
                            " "
                            span.count { "(" (store.article_count_by_category(category)) ")" }
                        }
                    }
                }
            }
            section.all-articles {
                h2 { "All articles" }
                div.card-grid {
                    @for article in store.all() { (article_card(article)) }
                }
            }
        }
        (site_footer(config))
    };

    let head = PageHead {
        title: &config.site.name,
        description: Some(&config.site.tagline),
        canonical: Some(canonical(config, "/insights/")),
    };
    base_document(&head, css, None, content)
}

fn render_category_page(
    config: &SiteConfig,
    store: &ArticleStore,
    category: Category,
    css: &str,
) -> Markup {
    let breadcrumb = html! {
        a href="/insights/" { "Insights" }
        " › "
        (category.label())
    };

    let content = html! {
        (site_header(config, NavSection::Insights, breadcrumb))
        main.category-page {
            header.page-header {
                h1 { (category.label()) }
                p.tagline { (category.description()) }
            }
            div.card-grid {
                @for article in store.by_category(category) { (article_card(article)) }
            }
        }
        (site_footer(config))
    };

    let title = format!("{} | {}", category.label(), config.site.name);
    let head = PageHead {
        title: &title,
        description: Some(category.description()),
        canonical: Some(canonical(
            config,
            &format!("/insights/category/{}/", category.slug()),
        )),
    };
    base_document(&head, css, None, content)
}

fn render_article_page(config: &SiteConfig, article: &Article, css: &str) -> Markup {
    let blocks = render::render_body(&article.body);
    let description = article.description(config.insights.description_length);

    let breadcrumb = html! {
        a href="/insights/" { "Insights" }
        " › "
        a href={ "/insights/category/" (article.category.slug()) "/" } { (article.category.label()) }
    };

    let content = html! {
        (site_header(config, NavSection::Insights, breadcrumb))
        main.article-page {
            article {
                header.article-header {
                    span.badge { (article.category) }
                    h1 { (article.title) }
                    p.meta { (article.publish_date) " · " (article.read_time) }
                }
                @if config.insights.show_tldr {
                    aside.tldr {
                        h2 { "TL;DR" }
                        p { (article.tldr.summary) }
                        @if !article.tldr.points.is_empty() {
                            ul {
                                @for point in &article.tldr.points { li { (point) } }
                            }
                        }
                    }
                }
                div.article-body {
                    (render_blocks(&blocks))
                }
            }
            a.back-link href="/insights/" { "← Back to all insights" }
        }
        (site_footer(config))
    };

    let title = format!("{} | {}", article.title, config.site.name);
    let head = PageHead {
        title: &title,
        description: Some(&description),
        canonical: Some(canonical(config, &format!("/insights/{}/", article.slug))),
    };
    base_document(&head, css, Some("article-view"), content)
}

// ============================================================================
// Case-study pages
// ============================================================================

/// Renders a case-study view tree as HTML.
pub fn render_view(view: &View) -> Markup {
    html! {
        div class={ "case-study layout-" (view.layout.id()) } {
            @for node in &view.nodes { (render_node(node)) }
        }
    }
}

fn render_node(node: &Node) -> Markup {
    match node {
        Node::Header(header) => html! {
            header.cs-header {
                span class={ "badge badge-" (header.tone.as_str()) } { (header.category) }
                h1 { (header.title) }
                @if let Some(tagline) = header.tagline {
                    p.tagline { (tagline) }
                }
            }
        },
        Node::Section(section) => render_section(section),
        Node::Grid(children) => html! {
            div.cs-grid {
                @for child in children { (render_node(child)) }
            }
        },
        Node::Columns { main, sidebar } => html! {
            div.cs-columns {
                div.cs-main {
                    @for child in main { (render_node(child)) }
                }
                aside.cs-sidebar {
                    @for child in sidebar { (render_node(child)) }
                }
            }
        },
        Node::Paragraph(text) => html! { p { (text) } },
        Node::Metrics { metrics, density } => html! {
            div class={ "cs-metrics density-" (density.as_str()) } {
                @for metric in metrics {
                    div.metric {
                        span class={ "metric-value " (metric.color_class()) } { (metric.value) }
                        span.metric-label { (metric.description) }
                        @if let Some(subtitle) = &metric.subtitle {
                            span.metric-subtitle { (subtitle) }
                        }
                    }
                }
            }
        },
        Node::MetricChips(values) => html! {
            span.metric-chips {
                @for value in values { span.chip { (value) } }
            }
        },
        Node::Callout { label, text } => html! {
            div.callout {
                strong { (label) ": " }
                (text)
            }
        },
        Node::Detail { label, text } => html! {
            p.detail {
                strong { (label) ":" }
                " "
                (text)
            }
        },
        Node::Steps { items, numbered } => html! {
            @if *numbered {
                ol.steps { @for item in items { li { (item) } } }
            } @else {
                ul.steps { @for item in items { li { (item) } } }
            }
        },
        Node::Facts(facts) => html! {
            dl.facts {
                @for fact in facts {
                    dt { (fact.label) }
                    dd { (fact.value) }
                }
            }
        },
        Node::Figure { value, caption } => html! {
            figure.cs-figure {
                div.figure-value { (value) }
                figcaption { (caption) }
            }
        },
        Node::Quote(quote) => html! {
            blockquote.cs-quote {
                p { "“" (quote.text) "”" }
                footer {
                    cite { (quote.author) }
                    ", "
                    (quote.role)
                }
            }
        },
        Node::CallToAction(cta) => render_cta(cta),
    }
}

fn section_class(section: &Section, base: &str) -> String {
    let mut class = format!("{base} style-{}", section.style.as_str());
    if let Some(span) = section.span {
        class.push_str(&format!(" span-{span}"));
    }
    class
}

fn section_title(section: &Section) -> Markup {
    html! {
        @if let Some(step) = section.step {
            span.step-number { (step) }
        }
        span.icon aria-hidden="true" { (section.icon) }
        " "
        (section.title)
    }
}

fn render_section(section: &Section) -> Markup {
    match &section.disclosure {
        Disclosure::Always => html! {
            section class=(section_class(section, "cs-section")) id=(section.id) {
                h2 { (section_title(section)) }
                @if let Some(subtitle) = &section.subtitle {
                    p.subtitle { (subtitle) }
                }
                @for child in &section.children { (render_node(child)) }
            }
        },
        Disclosure::Accordion { open } => {
            let (chips, body): (Vec<&Node>, Vec<&Node>) = section
                .children
                .iter()
                .partition(|n| matches!(n, Node::MetricChips(_)));
            html! {
                details class=(section_class(section, "cs-accordion")) id=(section.id) open[*open] {
                    summary {
                        (section_title(section))
                        @for chip in chips { (render_node(chip)) }
                    }
                    @for child in body { (render_node(child)) }
                }
            }
        }
        Disclosure::Expandable {
            expanded,
            hovered,
            details,
        } => {
            let mut class = section_class(section, "cs-card");
            if *expanded {
                class.push_str(" is-expanded");
            }
            if *hovered {
                class.push_str(" is-hovered");
            }
            html! {
                article class=(class) id=(section.id) data-card=(section.id) {
                    h2 { (section_title(section)) }
                    @if let Some(subtitle) = &section.subtitle {
                        p.subtitle { (subtitle) }
                    }
                    @for child in &section.children { (render_node(child)) }
                    div.card-details hidden[!*expanded] {
                        @for child in details { (render_node(child)) }
                    }
                }
            }
        }
    }
}

fn render_cta(cta: &CallToAction) -> Markup {
    html! {
        div.cs-cta {
            h3 { (cta.heading) }
            p { (cta.body) }
            div.actions {
                @for action in &cta.actions {
                    a.button href="/contact/" { (action) }
                }
            }
        }
    }
}

/// Links to every layout of one record, marking the current one.
fn layout_switcher(current: Layout, href: impl Fn(Layout) -> String) -> Markup {
    html! {
        nav.layout-switcher {
            @for layout in Layout::ALL {
                a href=(href(layout)) class=[(layout == current).then_some("active")] {
                    (layout.name())
                }
            }
        }
    }
}

fn render_case_study_index(config: &SiteConfig, records: &[CaseStudy], css: &str) -> Markup {
    let content = html! {
        (site_header(config, NavSection::CaseStudies, html! { "Case Studies" }))
        main.case-study-index {
            header.page-header {
                h1 { "Case Studies" }
                p.tagline { "Measurable results from real automation projects" }
            }
            div.card-grid {
                @for record in records {
                    a.case-study-card href={ "/case-studies/" (record.id) "/" } {
                        span class={ "badge badge-" (record.tone().as_str()) } { (record.category) }
                        h3 { (record.title) }
                        @if let Some(metric) = record.metrics.first() {
                            p.headline-metric {
                                span class={ "metric-value " (metric.color_class()) } { (metric.value) }
                                " "
                                (metric.description)
                            }
                        }
                        p.impact { (record.annual_impact) }
                    }
                }
            }
        }
        (site_footer(config))
    };

    let title = format!("Case Studies | {}", config.site.name);
    let mut head = PageHead::titled(&title);
    head.canonical = Some(canonical(config, "/case-studies/"));
    base_document(&head, css, None, content)
}

fn render_case_study_page(
    config: &SiteConfig,
    record: &CaseStudy,
    layout: Layout,
    state: &ViewState,
    css: &str,
) -> Markup {
    let view = case_study::render(record, layout, state);

    let breadcrumb = html! {
        a href="/case-studies/" { "Case Studies" }
        " › "
        (record.title)
    };

    let content = html! {
        (site_header(config, NavSection::CaseStudies, breadcrumb))
        (layout_switcher(layout, |l| format!("/case-studies/{}/{}.html", record.id, l.id())))
        main.case-study-page {
            (render_view(&view))
        }
        (site_footer(config))
        script { (PreEscaped(JS)) }
    };

    let title = format!("{} | {}", record.title, config.site.name);
    let mut head = PageHead::titled(&title);
    head.description = Some(&record.challenge);
    head.canonical = Some(canonical(config, &format!("/case-studies/{}/", record.id)));
    base_document(&head, css, Some("case-study-view"), content)
}

fn render_showcase_page(
    config: &SiteConfig,
    record: &CaseStudy,
    showcase: ShowcaseState,
    css: &str,
) -> Markup {
    let selected = showcase.selected;
    let info = selected.info();
    let view = case_study::render(record, selected, &ViewState::default());

    let breadcrumb = html! {
        "Case Study Layout Alternatives"
        " › "
        (info.name)
    };

    let content = html! {
        (site_header(config, NavSection::Showcase, breadcrumb))
        main.showcase-page {
            header.page-header {
                h1 { "Case Study Layout Alternatives" }
                p.tagline { "The same case study presented six ways. Pick a layout to compare." }
            }
            (layout_switcher(selected, |l| format!("/case-study-alternatives/{}.html", l.id())))
            section.layout-info {
                h2 { (info.name) }
                p { (info.description) }
                h3 { "Pros" }
                ul {
                    @for pro in info.pros { li { (pro) } }
                }
                p { strong { "Best for: " } (info.best_for) }
                p { strong { "Inspiration: " } (info.inspiration) }
            }
            section.layout-preview {
                (render_view(&view))
            }
        }
        (site_footer(config))
        script { (PreEscaped(JS)) }
    };

    let title = format!("{} | Case Study Layouts", info.name);
    base_document(&PageHead::titled(&title), css, Some("showcase-view"), content)
}

// ============================================================================
// Tests
// ============================================================================
