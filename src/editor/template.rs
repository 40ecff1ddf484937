use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;

pub const EDIT_FILE_TEMPLATE: &str = "edit_template";

const EDIT_TEMPLATE: &str = "{{title}}

{{description}}
# Write the pull request title on the first line and the description
# from the third line on. Lines starting with '#' are ignored.
# Leaving the title empty aborts the pull request.
";

#[derive(Serialize)]
pub struct EditContent<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

pub fn handlebars<'hb>() -> Result<Handlebars<'hb>> {
    let mut hb = Handlebars::new();

    hb.register_escape_fn(handlebars::no_escape);
    hb.register_template_string(EDIT_FILE_TEMPLATE, EDIT_TEMPLATE)?;

    Ok(hb)
}

pub fn render(content: &EditContent) -> Result<String> {
    let rendered = handlebars()?.render(EDIT_FILE_TEMPLATE, content)?;

    Ok(rendered)
}
