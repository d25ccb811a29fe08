//! A `Report` is an ordered list of `ReportSection`s, each an ordered list of
//! HTML fragments and Plotly charts, rendered top to bottom in insertion order.
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = "
body {
    font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
    max-width: 960px; margin: 0 auto; padding: 24px; color: #333;
}
header h1 { margin-bottom: 4px; }
header .subtitle { color: grey; margin-top: 0; }
section { margin-top: 40px; }
section h2 { border-bottom: 1px solid #ddd; padding-bottom: 6px; }
.plot { margin: 16px 0; }
footer { margin-top: 48px; color: grey; font-size: 0.85em; }
";

enum SectionBlock {
    Content(Markup),
    Plot(Plot),
}

pub struct ReportSection {
    title: String,
    blocks: Vec<SectionBlock>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(SectionBlock::Content(content));
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(SectionBlock::Plot(plot));
    }

    pub fn plot_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, SectionBlock::Plot(_)))
            .count()
    }

    fn render(&self, section_idx: usize) -> Markup {
        html! {
            section {
                h2 { (self.title) }
                @for (block_idx, block) in self.blocks.iter().enumerate() {
                    @match block {
                        SectionBlock::Content(content) => { (content) }
                        SectionBlock::Plot(plot) => {
                            @let div_id = format!("plot-{}-{}", section_idx, block_idx);
                            div class="plot" {
                                (PreEscaped(plot.to_inline_html(Some(&div_id))))
                            }
                        }
                    }
                }
            }
        }
    }
}

pub struct Report {
    app_name: String,
    version: String,
    title: String,
    subtitle: Option<String>,
    generated_at: DateTime<Local>,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(app_name: &str, version: &str, title: &str, subtitle: Option<&str>) -> Self {
        Self {
            app_name: app_name.to_string(),
            version: version.to_string(),
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
            generated_at: Local::now(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    header {
                        h1 { (self.title) }
                        @if let Some(subtitle) = &self.subtitle {
                            p class="subtitle" { (subtitle) }
                        }
                    }
                    @for (idx, section) in self.sections.iter().enumerate() {
                        (section.render(idx))
                    }
                    footer {
                        "Generated by " (self.app_name) " v" (self.version) " on "
                        (self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string())
                    }
                }
            }
        }
    }

    /// Write the rendered page to `path`, creating missing parent directories.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.render().into_string())?;
        log::info!("Report saved to {}", path.display());
        Ok(())
    }
}
