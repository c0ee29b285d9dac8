//! User administration page.

use gatepass_entity::user::User;

use super::{escape, layout};

/// Page listing all users with add, edit, and delete forms.
pub fn users_page(users: &[User]) -> String {
    let mut rows = String::new();
    for user in users {
        rows.push_str(&format!(
            "<tr>\n\
             <td>{name}</td>\n\
             <td>{email}</td>\n\
             <td>\n\
             <form method=\"post\" action=\"/users/edit/{id}\">\n\
             <input type=\"text\" name=\"name\" value=\"{name}\" required>\n\
             <input type=\"email\" name=\"email\" value=\"{email}\" required>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n\
             <form method=\"post\" action=\"/users/delete/{id}\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>\n\
             </td>\n\
             </tr>\n",
            id = user.id,
            name = escape(&user.name),
            email = escape(&user.email),
        ));
    }

    let body = format!(
        "<h2>Add user</h2>\n\
         <form method=\"post\" action=\"/users\">\n\
         <input type=\"text\" name=\"name\" placeholder=\"Name\" required>\n\
         <input type=\"email\" name=\"email\" placeholder=\"Email\" required>\n\
         <button type=\"submit\">Add</button>\n\
         </form>\n\
         <h2>Users</h2>\n\
         <table>\n\
         <tr><th>Name</th><th>Email</th><th>Actions</th></tr>\n\
         {rows}\
         </table>"
    );

    layout("Users", &body)
}
