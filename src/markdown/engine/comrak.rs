use comrak::Options;

use crate::front_matter::strip_wrapping_fence;

/// GitHub Flavored Markdown settings; single newlines render as line breaks
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    // Render options
    options.render.hardbreaks = true;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true; // content is authored in-house and may embed HTML

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options) -> String {
    comrak::markdown_to_html(content, options)
}

/// Render an entry body, dropping a stray fence wrapped around the whole body
pub fn render_body(body: &str) -> String {
    let options = create_comrak_options();
    render_markdown(strip_wrapping_fence(body), &options)
}
