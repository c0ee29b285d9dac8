//! Pass administration page.

use gatepass_service::dates::format_date;
use gatepass_service::pass::PassOverview;

use super::{escape, layout};

/// Page listing all passes with issue, edit, and delete forms.
///
/// `error_message` re-renders the page after a rejected submission so
/// the operator sees what went wrong next to the form.
pub fn passes_page(overview: &PassOverview, error_message: Option<&str>) -> String {
    let mut body = String::new();

    if let Some(message) = error_message {
        body.push_str(&format!("<p class=\"error\">{}</p>\n", escape(message)));
    }

    body.push_str(
        "<h2>Issue pass</h2>\n\
         <form method=\"post\" action=\"/passes\">\n\
         <select name=\"userId\" required>\n",
    );
    for user in &overview.users {
        body.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            user.id,
            escape(&user.name)
        ));
    }
    body.push_str(
        "</select>\n\
         <input type=\"text\" name=\"type\" placeholder=\"Type\" required>\n\
         <input type=\"date\" name=\"startDate\" required>\n\
         <input type=\"date\" name=\"endDate\" required>\n\
         <button type=\"submit\">Issue</button>\n\
         </form>\n",
    );

    body.push_str(
        "<h2>Passes</h2>\n\
         <table>\n\
         <tr><th>Owner</th><th>Type</th><th>Valid from</th><th>Valid to</th><th>Actions</th></tr>\n",
    );
    for entry in &overview.passes {
        let owner = entry
            .owner
            .as_ref()
            .map(|u| escape(&u.name))
            .unwrap_or_else(|| "Unknown".to_string());
        let start = format_date(&entry.pass.start_date);
        let end = format_date(&entry.pass.end_date);
        body.push_str(&format!(
            "<tr>\n\
             <td>{owner}</td>\n\
             <td>{kind}</td>\n\
             <td>{start}</td>\n\
             <td>{end}</td>\n\
             <td>\n\
             <form method=\"post\" action=\"/passes/edit/{id}\">\n\
             <input type=\"text\" name=\"type\" value=\"{kind}\" required>\n\
             <input type=\"date\" name=\"startDate\" value=\"{start}\" required>\n\
             <input type=\"date\" name=\"endDate\" value=\"{end}\" required>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n\
             <form method=\"post\" action=\"/passes/delete/{id}\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n\
             </td>\n\
             </tr>\n",
            id = entry.pass.id,
            kind = escape(&entry.pass.kind),
        ));
    }
    body.push_str("</table>");

    layout("Passes", &body)
}
