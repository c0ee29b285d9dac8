//! Report page.

use gatepass_service::dates::{format_date, format_timestamp};
use gatepass_service::report::UserReport;

use super::{escape, layout};

/// Page showing every user's passes and access history.
pub fn reports_page(reports: &[UserReport]) -> String {
    let mut body =
        String::from("<p><a href=\"/reports/export-txt\">Download as text</a></p>\n");

    for report in reports {
        body.push_str(&format!(
            "<section>\n\
             <h2>{name}</h2>\n\
             <p>{email}</p>\n\
             <h3>Passes</h3>\n\
             <ul>\n",
            name = escape(&report.user.name),
            email = escape(&report.user.email),
        ));
        for pass in &report.passes {
            body.push_str(&format!(
                "<li>{}: {} - {}</li>\n",
                escape(&pass.kind),
                format_date(&pass.start_date),
                format_date(&pass.end_date)
            ));
        }
        body.push_str("</ul>\n<h3>Logs</h3>\n<ul>\n");
        for log in &report.logs {
            body.push_str(&format!(
                "<li>{}: {}</li>\n",
                log.action,
                format_timestamp(&log.timestamp)
            ));
        }
        body.push_str("</ul>\n</section>\n");
    }

    layout("Reports", &body)
}
