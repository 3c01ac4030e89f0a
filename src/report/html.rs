use crate::select::select_model::SelectOption;

// ============================================================================
// HTML renderer — option markup as the browser would hold it
// ============================================================================

/// Render one `<option>` line per entry.
///
/// Produces output like:
/// ```text
/// <option value="">Select LGA</option>
/// <option value="Ikeja">Ikeja</option>
/// ```
pub fn render_options_html(options: &[SelectOption]) -> String {
    let mut out = String::new();
    for option in options {
        out.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            escape_html(&option.value),
            escape_html(&option.label)
        ));
    }
    out
}

/// Render a complete `<select>` element with the given id.
pub fn render_select_html(id: &str, options: &[SelectOption]) -> String {
    format!(
        "<select id=\"{id}\" name=\"{id}\">\n{options}</select>\n",
        id = escape_html(id),
        options = render_options_html(options),
    )
}

/// Render the region/subdivision pair as a self-contained form fragment.
///
/// The region select carries an `onchange` attribute naming the page's
/// change handler.
pub fn render_form_html(
    region_id: &str,
    region_options: &[SelectOption],
    selected_region: &str,
    subdivision_id: &str,
    subdivision_options: &[SelectOption],
) -> String {
    let mut region = String::new();
    for option in region_options {
        let selected = if !selected_region.is_empty() && option.value == selected_region {
            " selected"
        } else {
            ""
        };
        region.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            escape_html(&option.value),
            selected,
            escape_html(&option.label)
        ));
    }

    format!(
        r#"<form method="post">
<label for="{rid}">State *</label>
<select id="{rid}" name="{rid}" onchange="updateLGA()">
{region}</select>
<label for="{sid}">LGA *</label>
{subdivision}</form>
"#,
        rid = escape_html(region_id),
        sid = escape_html(subdivision_id),
        region = region,
        subdivision = render_select_html(subdivision_id, subdivision_options),
    )
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
