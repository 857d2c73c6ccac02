use arborealize_domain::{DirectoryNode, FileEntry, ordering::sorted_by_name};

use super::{escape::escape_html, href::file_href, identifier::toggle_id};

/// Presentation switches for the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append a human-readable size badge to every file link.
    pub show_sizes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_sizes: true }
    }
}

/// Serialises a directory tree into nested `<ol>`/`<li>` markup.
///
/// Each directory renders as its own list holding a checkbox/label pair, then
/// its child directories, then its files. Siblings are emitted in byte-wise
/// name order, so the output depends only on the tree's contents. Nesting is
/// indented with one space per level.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupRenderer {
    options: RenderOptions,
}

impl MarkupRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, tree: &DirectoryNode) -> String {
        let mut out = String::new();
        self.render_node(tree, 0, &mut out);
        out
    }

    fn render_node(&self, node: &DirectoryNode, indent: usize, out: &mut String) {
        if node.is_root() {
            line(out, indent, r#"<ol class="tree">"#);
        } else {
            line(out, indent, "<ol>");
        }
        line(out, indent + 1, &toggle(node));
        line(out, indent + 2, "<ol>");

        for child in sorted_by_name(node.children()) {
            line(out, indent + 3, "<li>");
            self.render_node(child, indent + 4, out);
            line(out, indent + 3, "</li>");
        }

        for file in sorted_by_name(node.files()) {
            line(out, indent + 3, &self.file_item(node, file));
        }

        line(out, indent + 2, "</ol>");
        line(out, indent + 1, "</li>");
        line(out, indent, "</ol>");
    }

    fn file_item(&self, node: &DirectoryNode, file: &FileEntry) -> String {
        let href = file_href(node.path(), &file.name);
        let text = file.name.to_string_lossy();
        let name = escape_html(&text);
        if self.options.show_sizes {
            format!(
                r#"<li class="file"><a href="{href}">{name} <span class="filesize">{:#}</span></a></li>"#,
                file.size
            )
        } else {
            format!(r#"<li class="file"><a href="{href}">{name}</a></li>"#)
        }
    }
}

// Opening `<li>` of a directory with its checkbox and label; the root is
// shown as `/` and starts expanded.
fn toggle(node: &DirectoryNode) -> String {
    let id = toggle_id(node.path());
    if node.is_root() {
        format!(r#"<li><input type="checkbox" checked="checked" id="{id}"><label for="{id}">/</label>"#)
    } else {
        format!(
            r#"<li><input type="checkbox" id="{id}"><label for="{id}">{}</label>"#,
            escape_html(&node.name().to_string_lossy())
        )
    }
}

fn line(out: &mut String, indent: usize, text: &str) {
    out.extend(std::iter::repeat_n(' ', indent));
    out.push_str(text);
    out.push('\n');
}
