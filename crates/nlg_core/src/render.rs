use crate::types::Newsletter;

/// Renders the assembled newsletter as a markdown document, sections in
/// selection order, each followed by its reference list.
pub fn render_markdown(newsletter: &Newsletter) -> String {
    let mut out = format!("# {}\n\n", newsletter.title);

    for section in &newsletter.sections {
        out.push_str(&format!("## {}\n\n{}\n\n", section.subtopic, section.content.text));
        out.push_str("**참고 기사:**\n");
        for reference in &section.content.references {
            out.push_str(&format!("- [{}]({})\n", reference.title, reference.link));
        }
        out.push_str("\n---\n\n");
    }

    out
}

/// Renders the newsletter as a standalone HTML fragment suitable for an email
/// body: `<h1>` title, `<h2>` per section, reference anchors at the end of
/// each section. Model-supplied text is escaped; links are emitted verbatim.
pub fn render_html(newsletter: &Newsletter) -> String {
    let mut out = format!("<h1>{}</h1>\n", escape(&newsletter.title));

    for section in &newsletter.sections {
        out.push_str(&format!("<h2>{}</h2>\n", escape(&section.subtopic)));
        for paragraph in section.content.text.split("\n\n").filter(|p| !p.trim().is_empty()) {
            out.push_str(&format!("<p>{}</p>\n", escape(paragraph.trim())));
        }
        if !section.content.references.is_empty() {
            out.push_str("<p><strong>참고 기사:</strong></p>\n<ul>\n");
            for reference in &section.content.references {
                out.push_str(&format!(
                    "<li><a href=\"{}\">{}</a></li>\n",
                    reference.link,
                    escape(&reference.title)
                ));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("<hr/>\n");
    }

    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
