//! # Insights Press
//!
//! A static site generator for a small consulting site: an insights blog
//! of long-form articles, and a set of client case studies that can each be
//! presented in six different layouts.
//!
//! # Architecture
//!
//! Content is data, not files: the article and case-study datasets are TOML
//! compiled into the binary, parsed once on first use, and never mutated.
//! Everything after loading is a pure transformation.
//!
//! ```text
//! data/articles.toml      →  ArticleStore  →  render::render_body  →  Block tree  ─┐
//!                                                                                  ├→ generate (maud) → dist/
//! data/case-studies.toml  →  [CaseStudy]   →  case_study::render   →  View tree   ─┘
//! ```
//!
//! Both renderers produce typed trees rather than HTML. Tests inspect the
//! trees structurally; markup is a separate, final step.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`articles`] | Read-only article store: slug lookup, category and featured queries |
//! | [`render`] | Article markup parser: blocks (headings, lists, emphasis, separators) and inline spans (bold, links) |
//! | [`case_study`] | Case-study records, the six layouts, and their accordion/card/showcase state |
//! | [`generate`] | Writes the HTML site from both trees using Maud |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting: content inventory and generated-page list |
//! | [`logging`] | `tracing` subscriber setup for `RUST_LOG` diagnostics |
//!
//! # Design Decisions
//!
//! ## Bundled Datasets
//!
//! Articles and case studies change with releases, not with deployments, so
//! they ship inside the binary. Loading validates them (duplicate slugs or
//! ids, blank titles) and the test suite loads the bundled copies, so an
//! authoring mistake fails `cargo test` instead of a build on the server.
//!
//! ## Lightweight Markup, Not Markdown
//!
//! Article bodies use a deliberately small markup: a paragraph's first
//! characters decide its kind, and inline markup is limited to bold and
//! links. Anything that does not parse is shown as literal text. There is no
//! error path in rendering.
//!
//! ## State As Values
//!
//! The accordion, the interactive cards and the showcase switcher are plain
//! `Copy` values with transition methods. A layout reads a state and returns
//! a tree; it never keeps one. The static build renders the initial state,
//! and `static/case-study.js` reproduces the same transitions in the browser.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a compile error, and every interpolated value is escaped.

pub mod articles;
pub mod case_study;
pub mod config;
pub mod generate;
pub mod logging;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
