use super::escape::escape_html;

/// Stylesheet linked from every generated page unless overridden.
pub const DEFAULT_STYLESHEET: &str = "//clee.github.io/arborealize/arborealize.css";

const GENERATOR: &str = "http://github.com/clee/arborealize/";

/// A complete HTML page wrapped around a rendered outline.
#[derive(Debug, Clone)]
pub struct HtmlDocument<'a> {
    pub title: &'a str,
    pub stylesheet: &'a str,
}

impl<'a> HtmlDocument<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title, stylesheet: DEFAULT_STYLESHEET }
    }

    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: &'a str) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Header, `body`, footer and a final newline.
    pub fn assemble(&self, body: &str) -> String {
        let mut page = self.header();
        page.push_str(body);
        page.push_str("</body>\n</html>\n");
        page
    }

    fn header(&self) -> String {
        format!(
            concat!(
                "<html>\n",
                "<head>\n",
                "<title>{title}</title>\n",
                "<link rel=\"stylesheet\" href=\"{stylesheet}\" />\n",
                "<meta name=\"generator\" content=\"{generator}\" />\n",
                "</head>\n",
                "<body>\n",
            ),
            title = escape_html(self.title),
            stylesheet = escape_html(self.stylesheet),
            generator = GENERATOR,
        )
    }
}
