//! Access log page.

use std::collections::HashMap;

use gatepass_core::types::{PassId, UserId};
use gatepass_service::dates::format_timestamp;
use gatepass_service::log::LogBoard;

use super::{escape, layout};

/// Page listing access logs with the recording and filter forms.
pub fn logs_page(board: &LogBoard) -> String {
    let user_names: HashMap<UserId, &str> = board
        .users
        .iter()
        .map(|u| (u.id, u.name.as_str()))
        .collect();
    let pass_kinds: HashMap<PassId, &str> = board
        .passes
        .iter()
        .map(|p| (p.pass.id, p.pass.kind.as_str()))
        .collect();

    let mut body = String::new();

    body.push_str(
        "<h2>Record entry/exit</h2>\n\
         <form method=\"post\" action=\"/logs/add\">\n\
         <select name=\"passId\" required>\n",
    );
    for entry in &board.passes {
        let owner = entry
            .owner
            .as_ref()
            .map(|u| u.name.as_str())
            .unwrap_or("Unknown");
        body.push_str(&format!(
            "<option value=\"{}\">{} ({})</option>\n",
            entry.pass.id,
            escape(owner),
            escape(&entry.pass.kind)
        ));
    }
    body.push_str(
        "</select>\n\
         <select name=\"action\" required>\n\
         <option value=\"entry\">Entry</option>\n\
         <option value=\"exit\">Exit</option>\n\
         </select>\n\
         <button type=\"submit\">Record</button>\n\
         </form>\n",
    );

    body.push_str(
        "<h2>Filter</h2>\n\
         <form method=\"get\" action=\"/logs\">\n\
         <select name=\"userId\">\n\
         <option value=\"\">All users</option>\n",
    );
    for user in &board.users {
        body.push_str(&format!(
            "<option value=\"{}\">{}</option>\n",
            user.id,
            escape(&user.name)
        ));
    }
    body.push_str(
        "</select>\n\
         <select name=\"action\">\n\
         <option value=\"\">All actions</option>\n\
         <option value=\"entry\">Entry</option>\n\
         <option value=\"exit\">Exit</option>\n\
         </select>\n\
         <input type=\"date\" name=\"startDate\">\n\
         <input type=\"date\" name=\"endDate\">\n\
         <button type=\"submit\">Apply</button>\n\
         </form>\n",
    );

    body.push_str(
        "<h2>Logs</h2>\n\
         <table>\n\
         <tr><th>Timestamp</th><th>User</th><th>Pass</th><th>Action</th></tr>\n",
    );
    for log in &board.logs {
        let user = user_names.get(&log.user_id).copied().unwrap_or("Unknown");
        let pass = pass_kinds.get(&log.pass_id).copied().unwrap_or("Unknown");
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            format_timestamp(&log.timestamp),
            escape(user),
            escape(pass),
            log.action
        ));
    }
    body.push_str("</table>");

    layout("Access logs", &body)
}
