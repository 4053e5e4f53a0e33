use pagecraft_content::{
    resolve_cross_axis, resolve_image_focal_point, resolve_text_align, HeroContent, Section,
    WebsiteContent,
};

/// Options for page compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            let indent = self.options.indent.clone();
            for _ in 0..self.depth {
                self.add(&indent);
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile site content to a self-contained HTML page.
///
/// Infallible: content is data, not a language, and every placement value
/// resolves to a directive.
pub fn compile_page(content: &WebsiteContent, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html lang=\"en\">");
    ctx.indent();

    compile_head(content, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    compile_header(content, &mut ctx);
    ctx.add_line("<main>");
    ctx.indent();
    compile_hero(&content.hero_section, &mut ctx);
    compile_main_section(&content.main_section, &mut ctx);
    ctx.dedent();
    ctx.add_line("</main>");
    compile_footer(content, &mut ctx);

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(content: &WebsiteContent, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&content.site_title)));

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_header(content: &WebsiteContent, ctx: &mut Context) {
    ctx.add_line("<header class=\"site-header\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<span class=\"site-title\">{}</span>",
        escape_html(&content.site_title)
    ));
    // The edit affordance; wiring it to the editor is the host page's job.
    ctx.add_line("<button type=\"button\" class=\"edit-button\" data-action=\"open-editor\">Edit</button>");
    ctx.dedent();
    ctx.add_line("</header>");
}

fn compile_hero(hero: &HeroContent, ctx: &mut Context) {
    let title_pos = hero.title_position_or_default();
    let body_pos = hero.body_position_or_default();

    let title_align = resolve_text_align(Some(title_pos.horizontal));
    let title_cross = resolve_cross_axis(Some(title_pos.vertical));
    let body_align = resolve_text_align(Some(body_pos.horizontal));
    let body_cross = resolve_cross_axis(Some(body_pos.vertical));
    let focal = resolve_image_focal_point(hero.image_position.as_ref());

    ctx.add_line("<section id=\"hero\" class=\"hero\">");
    ctx.indent();

    ctx.add_line(&format!(
        "<h1 class=\"hero-title {} {}\">{}</h1>",
        title_align.css_class(),
        title_cross.css_class(),
        escape_html(&hero.section_title)
    ));
    ctx.add_line(&format!(
        "<p class=\"hero-body {} {}\">{}</p>",
        body_align.css_class(),
        body_cross.css_class(),
        escape_html(&hero.section_body)
    ));

    if !hero.image_src.is_empty() {
        ctx.add_line(&format!(
            "<img class=\"hero-image {}\" src=\"{}\" alt=\"{}\">",
            focal.css_class(),
            escape_html(&hero.image_src),
            escape_html(&hero.section_title)
        ));
    }

    ctx.dedent();
    ctx.add_line("</section>");
}

fn compile_main_section(section: &Section, ctx: &mut Context) {
    ctx.add_line("<section id=\"content\" class=\"content\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<h2>{}</h2>",
        escape_html(&section.section_title)
    ));
    ctx.add_line(&format!("<p>{}</p>", escape_html(&section.section_body)));
    ctx.dedent();
    ctx.add_line("</section>");
}

fn compile_footer(content: &WebsiteContent, ctx: &mut Context) {
    ctx.add_line("<footer class=\"site-footer\">");
    ctx.indent();
    ctx.add_line(&format!("<p>{}</p>", escape_html(&content.footer_text)));
    ctx.dedent();
    ctx.add_line("</footer>");
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_content::{Alignment, Position, VerticalAlignment};

    #[test]
    fn test_page_contains_all_sections() {
        let content = WebsiteContent::default();
        let html = compile_page(&content, CompileOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(&format!("<title>{}</title>", content.site_title)));
        assert!(html.contains("id=\"hero\""));
        assert!(html.contains("id=\"content\""));
        assert!(html.contains("class=\"site-footer\""));
        assert!(html.contains("data-action=\"open-editor\""));
    }

    #[test]
    fn test_hero_placement_classes() {
        let mut content = WebsiteContent::default();
        content.hero_section.title_position = Some(Position::new(
            Alignment::Center,
            VerticalAlignment::Bottom,
        ));
        content.hero_section.image_position = Some(Position::new(
            Alignment::Left,
            VerticalAlignment::Middle,
        ));

        let html = compile_page(&content, CompileOptions::default());
        assert!(html.contains("hero-title text-center items-end"));
        assert!(html.contains("hero-image object-left"));
    }

    #[test]
    fn test_missing_positions_use_defaults() {
        let mut content = WebsiteContent::default();
        content.hero_section.title_position = None;
        content.hero_section.body_position = None;
        content.hero_section.image_position = None;

        let html = compile_page(&content, CompileOptions::default());
        assert!(html.contains("hero-title text-left items-start"));
        assert!(html.contains("hero-body text-left items-center"));
        // Missing image position falls back to the center focal point.
        assert!(html.contains("hero-image object-center"));
    }

    #[test]
    fn test_content_is_escaped() {
        let mut content = WebsiteContent::default();
        content.site_title = "Tom & Jerry <script>".to_string();

        let html = compile_page(&content, CompileOptions::default());
        assert!(html.contains("Tom &amp; Jerry &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_image_src_skips_img_tag() {
        let mut content = WebsiteContent::default();
        content.hero_section.image_src = String::new();

        let html = compile_page(&content, CompileOptions::default());
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_compact_output() {
        let html = compile_page(
            &WebsiteContent::default(),
            CompileOptions {
                pretty: false,
                indent: String::new(),
            },
        );
        assert!(!html.contains('\n'));
    }
}
