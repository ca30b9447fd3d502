use std::fmt::Write;

/// One icon: its name, the shapes it draws and its animation element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDef {
    pub name: &'static str,
    pub shapes: &'static [&'static str],
    pub animation: &'static str,
}

impl IconDef {
    /// Render a self-contained `<svg>` fragment.
    ///
    /// Output is a pure function of `(size, animate)`.
    #[must_use]
    pub fn render(&self, size: u32, animate: bool) -> String {
        let mut svg = String::with_capacity(256 + self.shapes.iter().map(|s| s.len()).sum::<usize>());
        let animate_class = if animate { " icon-animate" } else { "" };
        let _ = write!(
            svg,
            r#"<svg class="icon icon-{name}{animate_class}" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">"#,
            name = self.name,
        );
        for shape in self.shapes {
            svg.push_str(shape);
        }
        if animate {
            svg.push_str(self.animation);
        }
        svg.push_str("</svg>");
        svg
    }
}
